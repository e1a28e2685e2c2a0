pub mod count_applications;

use crate::domain::ports::{Console, ManagementApi};
use crate::utils::error::Result;
use async_trait::async_trait;

pub use count_applications::CountApplications;

/// 可執行的 CLI 指令，管理 API 客戶端由外部注入
#[async_trait]
pub trait CliCommand: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    async fn definition(&self, api: &dyn ManagementApi, console: &mut dyn Console) -> Result<()>;
}
