use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search transport error: {0}")]
    TransportError(#[from] elasticsearch::Error),

    #[error("Failed to build search transport: {0}")]
    TransportBuildError(#[from] elasticsearch::http::transport::BuildError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid endpoint '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Client is closed")]
    ClientClosed,

    #[error("No search client is configured")]
    NotConfigured,

    #[error("Unexpected response from {endpoint}: HTTP {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },
}

impl SearchError {
    pub fn invalid_endpoint(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidEndpoint { .. }
                | Self::ConfigValidationError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::MissingConfigError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::TransportError(_) => "Check that the search node is running and reachable from this host",
            Self::TransportBuildError(_) => "Check the endpoint and header settings of the client",
            Self::IoError(_) => "Check file paths and permissions",
            Self::InvalidEndpoint { .. } => "Use the form http://host:port, e.g. http://192.168.63.128:9200",
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration file or command line arguments",
            Self::ClientClosed => "Create a new client; a closed client cannot be reused",
            Self::NotConfigured => "Set up the client before using it",
            Self::UnexpectedStatus { .. } => "Inspect the node logs for the rejected request",
        }
    }

    /// Process exit code for the CLI: 1 for configuration problems, 2 for
    /// connectivity problems, 3 for everything else.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            return 1;
        }
        match self {
            Self::TransportError(_) | Self::UnexpectedStatus { .. } => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
