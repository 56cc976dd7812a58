//! Application-wide constants and default values
//!
//! Centralizes API conventions, rate-limit timings and file naming so the
//! config layer and the fetch client agree on the same defaults.

/// Default base URL of the Sportradar NFL API (trial tier, English locale)
pub const DEFAULT_API_BASE_URL: &str = "https://api.sportradar.com/nfl/official/trial/v7/en";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Name used for the config directory and the log file
pub const APP_NAME: &str = "fantasy_pool";

/// Default season year and week for pool builds
pub const DEFAULT_YEAR: u32 = 2025;
pub const DEFAULT_WEEK: u32 = 1;

/// Positions included in a pool when the caller does not choose
pub const DEFAULT_POSITIONS: [&str; 4] = ["QB", "RB", "WR", "TE"];

/// Positions eligible for the FLEX slot, in output order
pub const FLEX_POSITIONS: [&str; 3] = ["RB", "WR", "TE"];

/// Rate-limit compliance for the trial-tier API. Delays are constant.
pub mod retry {
    /// Maximum number of attempts per request (including the first)
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Cooldown after a 429 or a failed attempt (milliseconds)
    pub const RETRY_DELAY_MS: u64 = 5000;

    /// Politeness delay after every successful response (milliseconds)
    pub const REQUEST_DELAY_MS: u64 = 1000;
}

/// Environment variable names
pub mod env_vars {
    /// Primary API key variable
    pub const API_KEY: &str = "SPORTRADAR_API_KEY";

    /// Fallback API key variable
    pub const API_KEY_FALLBACK: &str = "API_KEY";

    /// Override for the API base URL
    pub const API_BASE_URL: &str = "FANTASY_POOL_API_BASE_URL";

    /// Override for the directory pool files are written to
    pub const OUTPUT_DIR: &str = "FANTASY_POOL_OUTPUT_DIR";

    /// Override for the log file path
    pub const LOG_FILE: &str = "FANTASY_POOL_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "FANTASY_POOL_HTTP_TIMEOUT";
}

/// Console summary layout
pub mod summary {
    /// Players listed individually before the "... and N more" line
    pub const MAX_LISTED_PLAYERS: usize = 10;

    /// Width of the separator rule under summary headers
    pub const RULE_WIDTH: usize = 60;
}
