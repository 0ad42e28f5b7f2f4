use crate::core::ConfigProvider;
use crate::domain::model::DEFAULT_ENDPOINT;
use crate::utils::error::Result;
use crate::utils::validation::{validate_endpoints, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "item-search")]
#[command(about = "Check that a search node can be reached by the item service")]
pub struct CliConfig {
    #[arg(long = "endpoint", value_delimiter = ',', default_value = DEFAULT_ENDPOINT)]
    pub endpoints: Vec<String>,

    #[arg(long, help = "TOML configuration file; replaces the endpoint and timeout flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Overall request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Ping the node and fetch cluster info")]
    pub ping: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn verify_connectivity(&self) -> bool {
        self.ping
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoints("endpoint", &self.endpoints)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 3600)?;
        }
        Ok(())
    }
}
