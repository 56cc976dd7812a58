use crate::data_fetcher::models::{HomeAway, ScheduleGame, TeamAppearance};
use std::collections::HashSet;
use tracing::debug;

/// Derives the unique teams playing in a list of games.
///
/// Each game contributes its home side, then its away side. A team is
/// recorded at its first appearance only; later games that involve the
/// same team are skipped for that team.
pub fn resolve_team_appearances(games: &[ScheduleGame]) -> Vec<TeamAppearance> {
    let mut seen = HashSet::new();
    let mut appearances = Vec::with_capacity(games.len() * 2);

    for game in games {
        for side in [HomeAway::Home, HomeAway::Away] {
            let appearance = TeamAppearance::from_game(game, side);
            if seen.insert(appearance.team_id.clone()) {
                appearances.push(appearance);
            } else {
                debug!(
                    "Team {} already scheduled this week, ignoring game {}",
                    appearance.team_alias, game.id
                );
            }
        }
    }

    appearances
}
