use crate::constants::{self, env_vars};
use crate::data_fetcher::api::FetchConfig;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
///
/// The API key is not part of the file format; it is read from
/// the process environment when the fetch client is constructed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the NFL API, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Attempts per request, including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Cooldown after a rate-limited or failed attempt, in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Delay after every successful response, in milliseconds.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    /// Directory pool and position files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_max_attempts() -> u32 {
    constants::retry::MAX_ATTEMPTS
}

fn default_retry_delay_ms() -> u64 {
    constants::retry::RETRY_DELAY_MS
}

fn default_request_delay_ms() -> u64 {
    constants::retry::REQUEST_DELAY_MS
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            http_timeout_seconds: default_http_timeout(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            request_delay_ms: default_request_delay_ms(),
            output_dir: default_output_dir(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the built-in defaults. Environment variables
    /// override file values.
    ///
    /// # Environment Variables
    /// - `FANTASY_POOL_API_BASE_URL` - Override API base URL
    /// - `FANTASY_POOL_OUTPUT_DIR` - Override output directory
    /// - `FANTASY_POOL_LOG_FILE` - Override log file path
    /// - `FANTASY_POOL_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_base_url, self.max_attempts, &self.log_file_path)
    }

    /// Builds the fetch client settings, reading the API key from the
    /// environment (`SPORTRADAR_API_KEY`, falling back to `API_KEY`).
    pub fn fetch_config(&self) -> Result<FetchConfig, AppError> {
        let api_key = api_key_from_env().ok_or_else(|| {
            AppError::config_error(format!(
                "API key not found; set {} or {}",
                env_vars::API_KEY,
                env_vars::API_KEY_FALLBACK
            ))
        })?;

        Ok(FetchConfig {
            base_url: self.api_base_url.trim_end_matches('/').to_string(),
            api_key,
            http_timeout_seconds: self.http_timeout_seconds,
            max_attempts: self.max_attempts,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            request_delay: Duration::from_millis(self.request_delay_ms),
        })
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Renders the current settings the way `--list-config` prints them.
    pub fn describe(&self, config_path: &str, config_exists: bool) -> String {
        let rule = "────────────────────────────────────";
        let mut lines = vec![
            String::new(),
            "Current Configuration".to_string(),
            rule.to_string(),
            "Config Location:".to_string(),
        ];
        if config_exists {
            lines.push(config_path.to_string());
        } else {
            lines.push(format!("{config_path} (not created, using defaults)"));
        }
        lines.push(rule.to_string());
        lines.push("API Base URL:".to_string());
        lines.push(self.api_base_url.clone());
        lines.push(rule.to_string());
        lines.push("API Key:".to_string());
        lines.push(if api_key_from_env().is_some() {
            "set".to_string()
        } else {
            "missing".to_string()
        });
        lines.push(rule.to_string());
        lines.push("Rate Limiting:".to_string());
        lines.push(format!(
            "{} attempts, {} ms retry delay, {} ms between requests",
            self.max_attempts, self.retry_delay_ms, self.request_delay_ms
        ));
        lines.push(rule.to_string());
        lines.push("HTTP Timeout:".to_string());
        lines.push(format!("{} seconds", self.http_timeout_seconds));
        lines.push(rule.to_string());
        lines.push("Output Directory:".to_string());
        lines.push(self.output_dir.clone());
        lines.push(rule.to_string());
        lines.push("Log File Location:".to_string());
        match &self.log_file_path {
            Some(custom_path) => lines.push(custom_path.clone()),
            None => {
                lines.push(format!(
                    "{}/{}.log",
                    get_log_dir_path(),
                    constants::APP_NAME
                ));
                lines.push("(Default location)".to_string());
            }
        }
        lines.join("\n")
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let exists = Path::new(&config_path).exists();
        let config = Config::load().await?;
        println!("{}", config.describe(&config_path, exists));
        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory when needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Reads the API key from the environment. Empty values count as missing.
pub fn api_key_from_env() -> Option<String> {
    [env_vars::API_KEY, env_vars::API_KEY_FALLBACK]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
