pub mod fetch_utils;
pub mod http_client;
pub mod nfl_api;
pub mod urls;

pub use fetch_utils::{FetchClient, FetchConfig, Sleeper, TokioSleeper};
pub use http_client::create_http_client;
pub use nfl_api::NflApi;
pub use urls::*;
