use crate::core::ConfigProvider;
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{
    validate_endpoints, validate_non_empty_string, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub client: ClientConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoints: Vec<String>,
    pub request_timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub verify_connectivity: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SearchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SearchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SearchError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Turns connectivity checks on in addition to what the file asks for.
    pub fn with_verify_connectivity(mut self, verify: bool) -> Self {
        self.probe.verify_connectivity |= verify;
        self
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoints(&self) -> &[String] {
        &self.client.endpoints
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.client.request_timeout_seconds.map(Duration::from_secs)
    }

    fn verify_connectivity(&self) -> bool {
        self.probe.verify_connectivity
    }

    fn default_headers(&self) -> Option<&HashMap<String, String>> {
        self.client.headers.as_ref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoints("client.endpoints", &self.client.endpoints)?;

        if let Some(timeout) = self.client.request_timeout_seconds {
            validate_range("client.request_timeout_seconds", timeout, 1, 3600)?;
        }

        if let Some(headers) = &self.client.headers {
            for name in headers.keys() {
                validate_non_empty_string("client.headers", name)?;
            }
        }

        if let Some(level) = &self.logging.level {
            if !VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(SearchError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", VALID_LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }
}
