use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApimError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Authentication failed (HTTP {status}): {message}")]
    AuthenticationError { status: u16, message: String },

    #[error("Management API returned HTTP {status} for {endpoint}: {message}")]
    ApiResponseError {
        status: u16,
        endpoint: String,
        message: String,
    },

    #[error("Unexpected management API response: {message}")]
    MalformedResponse { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Authentication,
    Network,
    Api,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ApimError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApimError::ConfigError { .. }
            | ApimError::MissingConfigError { .. }
            | ApimError::InvalidConfigValueError { .. }
            | ApimError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ApimError::AuthenticationError { .. } => ErrorCategory::Authentication,
            ApimError::HttpError(_) => ErrorCategory::Network,
            ApimError::ApiResponseError { .. }
            | ApimError::MalformedResponse { .. } => ErrorCategory::Api,
            ApimError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路或暫時性的伺服器錯誤，重跑可能成功
            ApimError::HttpError(_) => ErrorSeverity::Medium,
            ApimError::ApiResponseError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            ApimError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 對應程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApimError::MissingConfigError { .. } => {
                "Provide the missing value with a CLI flag, an APIM_* environment variable or the config file"
            }
            ApimError::InvalidConfigValueError { .. }
            | ApimError::ConfigValidationError { .. }
            | ApimError::ConfigError { .. } => "Check the configuration values and try again",
            ApimError::AuthenticationError { .. } => {
                "Check the username and password, and that the user belongs to the organization"
            }
            ApimError::HttpError(_) => {
                "Check that the management API URL is reachable, or raise --timeout-seconds"
            }
            ApimError::ApiResponseError { status, .. } if *status >= 500 => {
                "The management API is failing, retry later"
            }
            ApimError::ApiResponseError { .. } => {
                "Check the organization and environment names and the user's permissions"
            }
            ApimError::MalformedResponse { .. } => {
                "Check that --url points to an APIM management API"
            }
            ApimError::IoError(_) => "Check the local file system and standard output",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApimError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            ApimError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            ApimError::ConfigValidationError { field, message } => {
                format!("{}: {}", field, message)
            }
            ApimError::ConfigError { message } => message.clone(),
            ApimError::AuthenticationError { status, .. } => {
                format!("Unable to log in to the management API (HTTP {})", status)
            }
            ApimError::HttpError(e) if e.is_timeout() => {
                "The management API did not answer in time".to_string()
            }
            ApimError::HttpError(_) => "Unable to reach the management API".to_string(),
            ApimError::ApiResponseError { status, endpoint, .. } => {
                format!("The management API rejected {} (HTTP {})", endpoint, status)
            }
            ApimError::MalformedResponse { message } => {
                format!("Unexpected answer from the management API: {}", message)
            }
            ApimError::IoError(e) => format!("System error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApimError>;
