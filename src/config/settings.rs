use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::domain::model::Credentials;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use std::time::Duration;

pub const DEFAULT_MANAGEMENT_URL: &str = "http://localhost:8083";
pub const DEFAULT_ORGANIZATION: &str = "DEFAULT";
pub const DEFAULT_ENVIRONMENT: &str = "DEFAULT";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// 合併 CLI、設定檔與預設值後的最終設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub organization: String,
    pub environment: String,
    pub timeout_seconds: u64,
    pub page_size: usize,
    pub credentials: Credentials,
}

impl Settings {
    /// 優先順序：CLI / 環境變數 > 設定檔 > 預設值
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Self::merge(cli, file)
    }

    pub fn merge(cli: &CliConfig, file: TomlConfig) -> Result<Self> {
        let api = file.management_api;

        let username = cli.username.clone().or(file.credentials.username);
        let password = cli.password.clone().or(file.credentials.password);
        let username = validate_required_field("credentials.username", &username)?;
        let password = validate_required_field("credentials.password", &password)?;

        Ok(Self {
            url: cli
                .url
                .clone()
                .or(api.url)
                .unwrap_or_else(|| DEFAULT_MANAGEMENT_URL.to_string()),
            organization: cli
                .organization
                .clone()
                .or(api.organization)
                .unwrap_or_else(|| DEFAULT_ORGANIZATION.to_string()),
            environment: cli
                .environment
                .clone()
                .or(api.environment)
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            timeout_seconds: cli
                .timeout_seconds
                .or(api.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            page_size: cli.page_size.or(api.page_size).unwrap_or(DEFAULT_PAGE_SIZE),
            credentials: Credentials::new(username.as_str(), password.as_str()),
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("management_api.url", &self.url)?;
        validate_non_empty_string("management_api.organization", &self.organization)?;
        validate_non_empty_string("management_api.environment", &self.environment)?;
        validate_range("management_api.timeout_seconds", self.timeout_seconds, 1, 600)?;
        validate_range("management_api.page_size", self.page_size, 1, 1000)?;
        validate_non_empty_string("credentials.username", &self.credentials.username)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn management_url(&self) -> &str {
        &self.url
    }

    fn organization(&self) -> &str {
        &self.organization
    }

    fn environment(&self) -> &str {
        &self.environment
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}
