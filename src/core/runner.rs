use crate::app::commands::CliCommand;
use crate::core::{Console, ManagementApi};
use crate::utils::error::Result;
use std::time::Instant;

/// 執行單一指令，錯誤原樣回傳給呼叫端處理
pub struct CommandRunner<C: CliCommand> {
    command: C,
}

impl<C: CliCommand> CommandRunner<C> {
    pub fn new(command: C) -> Self {
        Self { command }
    }

    pub async fn run(&self, api: &dyn ManagementApi, console: &mut dyn Console) -> Result<()> {
        let started = Instant::now();
        tracing::info!(
            "🚀 Running {}: {}",
            self.command.name(),
            self.command.description()
        );

        match self.command.definition(api, console).await {
            Ok(()) => {
                tracing::info!(
                    "✅ {} completed in {:?}",
                    self.command.name(),
                    started.elapsed()
                );
                Ok(())
            }
            Err(e) => {
                tracing::debug!(
                    "❌ {} failed after {:?}: {}",
                    self.command.name(),
                    started.elapsed(),
                    e
                );
                Err(e)
            }
        }
    }
}
