pub mod player_pool;
pub mod team_appearances;
pub mod team_lookup;

pub use player_pool::{
    PoolBuild, SkippedTeam, TeamOutcome, assemble_pool, build_player_pool,
    collect_team_outcomes, flex_players, merge_roster, players_for_positions,
};
pub use team_appearances::resolve_team_appearances;
pub use team_lookup::find_team_id;
