use apim_cli::utils::{logger, validation::Validate};
use apim_cli::{
    ApimError, CliConfig, CommandRunner, CountApplications, HttpManagementApi, Settings,
    StdoutConsole,
};
use clap::Parser;

fn report_and_exit(e: &ApimError) -> ! {
    tracing::error!(
        "❌ count-applications failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!(
        "CLI config file: {:?}, url override: {:?}",
        config.config,
        config.url
    );

    // 合併並驗證配置
    let settings = match Settings::resolve(&config).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => report_and_exit(&e),
    };
    tracing::info!(
        "🌐 Management API: {} (organization {}, environment {})",
        settings.url,
        settings.organization,
        settings.environment
    );

    let api = match HttpManagementApi::from_config(&settings) {
        Ok(api) => api,
        Err(e) => report_and_exit(&e),
    };

    let runner = CommandRunner::new(CountApplications::new(settings.credentials.clone()));
    let mut console = StdoutConsole;

    if let Err(e) = runner.run(&api, &mut console).await {
        report_and_exit(&e);
    }
}
