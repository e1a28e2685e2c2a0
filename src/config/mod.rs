pub mod settings;
pub mod toml_config;

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "count-applications")]
#[command(about = "Count number of available Applications for the given user")]
pub struct CliConfig {
    #[arg(long, env = "APIM_URL", help = "Management API base URL")]
    pub url: Option<String>,

    #[arg(long, short = 'u', env = "APIM_USERNAME")]
    pub username: Option<String>,

    #[arg(long, short = 'p', env = "APIM_PASSWORD", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub password: Option<String>,

    #[arg(long, env = "APIM_ORGANIZATION")]
    pub organization: Option<String>,

    #[arg(long, env = "APIM_ENVIRONMENT")]
    pub environment: Option<String>,

    #[arg(long, help = "HTTP request timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Number of applications requested per page")]
    pub page_size: Option<usize>,

    #[arg(long, short = 'c', help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,
}
