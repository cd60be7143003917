pub mod mail;

use crate::core::fetcher::DEFAULT_ENDPOINT;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "kimsufi-checker")]
#[command(about = "Find the Kimsufi servers availability")]
#[command(disable_version_flag = true)]
#[command(after_help = "Examples:
  kimsufi-checker
  kimsufi-checker KS-1 KS-3
  kimsufi-checker KS-1 --mail")]
pub struct CliConfig {
    #[arg(value_name = "MODEL", help = "Restrict the check to these models, e.g. KS-1 KS-3")]
    pub models: Vec<String>,

    #[arg(short = 'm', long, help = "Sends a mail when a server is available")]
    pub mail: bool,

    #[arg(long, default_value = DEFAULT_ENDPOINT, help = "Availability feed URL")]
    pub endpoint: String,

    #[arg(long, value_name = "FILE", help = "Mail configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short = 'v', long = "version", help = "Print version information")]
    pub version: bool,
}

impl CliConfig {
    pub fn mail_config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(mail::default_config_path)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_url("endpoint", &self.endpoint)?;
        Ok(())
    }
}
