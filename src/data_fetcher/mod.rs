pub mod api;
pub mod models;
pub mod processors;

pub use api::{FetchClient, FetchConfig, NflApi};
pub use models::{PlayerPool, PoolPlayer, TeamAppearance};
pub use processors::{PoolBuild, build_player_pool};
