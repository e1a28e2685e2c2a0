use crate::app::commands::CliCommand;
use crate::core::{ApplicationCount, Console, Credentials, ManagementApi};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub const NO_DELAY_PERIOD: Duration = Duration::ZERO;

/// Count number of available Applications for the given user
pub struct CountApplications {
    credentials: Credentials,
}

impl CountApplications {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// 登入、取得清單、計數
    pub async fn count(&self, api: &dyn ManagementApi) -> Result<ApplicationCount> {
        let session = api.login(&self.credentials).await?;
        tracing::debug!("✅ Logged in as {}", self.credentials.username);

        let applications = api.list_applications(&session, NO_DELAY_PERIOD).await?;
        Ok(ApplicationCount(applications.len()))
    }
}

#[async_trait]
impl CliCommand for CountApplications {
    fn name(&self) -> &'static str {
        "count-applications"
    }

    fn description(&self) -> &'static str {
        "Count number of available Applications for the given user"
    }

    async fn definition(&self, api: &dyn ManagementApi, console: &mut dyn Console) -> Result<()> {
        let count = self.count(api).await?;
        console.raw(&count.to_string())
    }
}
