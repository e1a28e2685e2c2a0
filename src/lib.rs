pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{console::StdoutConsole, http::HttpManagementApi};
pub use crate::app::commands::{CliCommand, CountApplications};
pub use crate::config::{settings::Settings, CliConfig};
pub use crate::core::runner::CommandRunner;
pub use crate::utils::error::{ApimError, Result};
