use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Fetch client errors
    #[error("API rate limit exceeded (429) (URL: {url})")]
    RateLimited { url: String },

    #[error("Request to {url} failed: {message}")]
    TransportFailure {
        url: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Gave up on {url} after {attempts} attempts")]
    RetryExhausted { url: String, attempts: u32 },

    #[error("API returned malformed data: {message} (URL: {url})")]
    MalformedResponse { message: String, url: String },

    // User input errors
    #[error("Team with abbreviation '{alias}' not found")]
    TeamNotFound { alias: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn rate_limited(url: impl Into<String>) -> Self {
        Self::RateLimited { url: url.into() }
    }

    /// Create a transport failure. `status` is set when the server answered
    /// with a non-success status, and left empty for connection-level errors.
    pub fn transport_failure(
        url: impl Into<String>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::TransportFailure {
            url: url.into(),
            status,
            message: message.into(),
        }
    }

    pub fn retry_exhausted(url: impl Into<String>, attempts: u32) -> Self {
        Self::RetryExhausted {
            url: url.into(),
            attempts,
        }
    }

    /// Create a malformed response error (missing keys, undecodable body)
    pub fn malformed_response(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn team_not_found(alias: impl Into<String>) -> Self {
        Self::TeamNotFound {
            alias: alias.into(),
        }
    }

    /// Check if error is transient and worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::RateLimited { .. } | AppError::TransportFailure { .. }
        )
    }
}
