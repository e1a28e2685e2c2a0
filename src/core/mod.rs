pub mod runner;

pub use crate::domain::model::{Application, ApplicationCount, Credentials, Session};
pub use crate::domain::ports::{ConfigProvider, Console, ManagementApi};
pub use crate::utils::error::Result;
