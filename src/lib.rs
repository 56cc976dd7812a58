//! Weekly NFL fantasy player pool builder
//!
//! This library fetches the week's schedule from the Sportradar NFL API,
//! collects the roster of every team playing, and groups the players by
//! fantasy position. Requests are strictly sequential, throttled, and
//! retried when the API rate limits.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fantasy_pool::data_fetcher::api::{FetchConfig, NflApi};
//! use fantasy_pool::data_fetcher::processors::{build_player_pool, flex_players};
//! use fantasy_pool::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = FetchConfig::new(
//!         "https://api.sportradar.com/nfl/official/trial/v7/en",
//!         "my-api-key",
//!     );
//!     let api = NflApi::new(config)?;
//!
//!     let positions = ["QB", "RB", "WR", "TE"].map(String::from);
//!     let build = build_player_pool(&api, 1, 2025, &positions).await?;
//!
//!     println!("{} players in the pool", build.pool.len());
//!     println!("{} FLEX-eligible", flex_players(&build.pool).len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod storage;
pub mod summary;
pub mod testing_utils;

pub use config::Config;
pub use data_fetcher::api::{FetchClient, FetchConfig, NflApi};
pub use data_fetcher::models::{PlayerPool, PoolPlayer, RosterPlayer, TeamAppearance};
pub use data_fetcher::processors::{PoolBuild, build_player_pool};
pub use error::AppError;
