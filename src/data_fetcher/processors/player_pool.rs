use crate::constants::FLEX_POSITIONS;
use crate::data_fetcher::api::{NflApi, Sleeper};
use crate::data_fetcher::models::{PlayerPool, PoolPlayer, RosterPlayer, TeamAppearance};
use crate::error::AppError;
use tracing::{info, instrument, warn};

/// Result of processing one team's roster
#[derive(Debug)]
pub struct TeamOutcome {
    pub appearance: TeamAppearance,
    pub result: Result<Vec<PoolPlayer>, AppError>,
}

/// A team that contributed no players because its roster failed
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedTeam {
    pub team_id: String,
    pub team_alias: String,
    pub team_name: String,
    pub reason: String,
}

/// A finished pool build. `teams_skipped` is empty on full success.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolBuild {
    pub pool: PlayerPool,
    pub teams_requested: usize,
    pub teams_skipped: Vec<SkippedTeam>,
}

impl PoolBuild {
    pub fn is_partial(&self) -> bool {
        !self.teams_skipped.is_empty()
    }

    pub fn teams_processed(&self) -> usize {
        self.teams_requested - self.teams_skipped.len()
    }
}

/// Selects the roster players whose position exactly matches one of
/// `positions` and attaches the team's week context to each of them.
///
/// Roster order is preserved. The function is pure; calling it twice on
/// the same input yields the same output.
pub fn merge_roster<S: AsRef<str>>(
    roster: &[RosterPlayer],
    appearance: &TeamAppearance,
    positions: &[S],
) -> Vec<PoolPlayer> {
    roster
        .iter()
        .filter(|player| positions.iter().any(|p| p.as_ref() == player.position))
        .map(|player| PoolPlayer::new(player.clone(), appearance.clone()))
        .collect()
}

/// Fetches and merges the roster of every team, in order, one request per
/// team. Failures are captured per team and never stop the loop.
pub async fn collect_team_outcomes<S: Sleeper, P: AsRef<str>>(
    api: &NflApi<S>,
    teams: &[TeamAppearance],
    positions: &[P],
) -> Vec<TeamOutcome> {
    let mut outcomes = Vec::with_capacity(teams.len());

    for (i, team) in teams.iter().enumerate() {
        info!(
            "Processing team {}/{}: {} ({})",
            i + 1,
            teams.len(),
            team.team_name,
            team.team_alias
        );

        let result = api
            .fetch_roster(&team.team_id)
            .await
            .map(|roster| merge_roster(&roster, team, positions));

        outcomes.push(TeamOutcome {
            appearance: team.clone(),
            result,
        });
    }

    outcomes
}

/// Builds the pool from per-team outcomes. Error outcomes are logged and
/// discarded, so a failed team contributes zero players.
pub fn assemble_pool<S: AsRef<str>>(positions: &[S], outcomes: Vec<TeamOutcome>) -> PoolBuild {
    let mut pool = PlayerPool::new(positions);
    let teams_requested = outcomes.len();
    let mut teams_skipped = Vec::new();

    for outcome in outcomes {
        match outcome.result {
            Ok(players) => {
                for player in players {
                    pool.push(player);
                }
            }
            Err(e) => {
                warn!(
                    "Error processing team {} ({}): {}. Skipping.",
                    outcome.appearance.team_name, outcome.appearance.team_alias, e
                );
                teams_skipped.push(SkippedTeam {
                    team_id: outcome.appearance.team_id,
                    team_alias: outcome.appearance.team_alias,
                    team_name: outcome.appearance.team_name,
                    reason: e.to_string(),
                });
            }
        }
    }

    PoolBuild {
        pool,
        teams_requested,
        teams_skipped,
    }
}

/// Builds the player pool for one week.
///
/// The weekly schedule must load; after that, a team whose roster cannot be
/// fetched or decoded is skipped and the build still succeeds.
#[instrument(skip(api))]
pub async fn build_player_pool<S: Sleeper>(
    api: &NflApi<S>,
    week: u32,
    year: u32,
    positions: &[String],
) -> Result<PoolBuild, AppError> {
    info!("Getting teams playing in week {week}, {year}...");
    let weekly = api.fetch_teams_playing(week, year).await?;
    info!(
        "Found {} teams playing this week; this will require {} roster API calls",
        weekly.total_teams(),
        weekly.total_teams()
    );

    let outcomes = collect_team_outcomes(api, &weekly.teams, positions).await;
    let build = assemble_pool(positions, outcomes);

    info!(
        "Player pool built: {} players from {}/{} teams",
        build.pool.len(),
        build.teams_processed(),
        build.teams_requested
    );
    Ok(build)
}

/// Concatenates the players of `positions`, in the given order. Positions
/// absent from the pool contribute nothing.
pub fn players_for_positions<S: AsRef<str>>(pool: &PlayerPool, positions: &[S]) -> Vec<PoolPlayer> {
    positions
        .iter()
        .filter_map(|position| pool.get(position.as_ref()))
        .flat_map(|players| players.iter().cloned())
        .collect()
}

/// FLEX-eligible players: RB, then WR, then TE
pub fn flex_players(pool: &PlayerPool) -> Vec<PoolPlayer> {
    players_for_positions(pool, &FLEX_POSITIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::HomeAway;
    use crate::testing_utils::TestDataBuilder;

    const POSITIONS: [&str; 4] = ["QB", "RB", "WR", "TE"];

    fn roster() -> Vec<RosterPlayer> {
        vec![
            TestDataBuilder::create_player("p1", "Drake Maye", "QB"),
            TestDataBuilder::create_player("p2", "Rhamondre Stevenson", "RB"),
            TestDataBuilder::create_player("p3", "Andy Borregales", "K"),
            TestDataBuilder::create_player("p4", "Hunter Henry", "TE"),
            TestDataBuilder::create_player("p5", "Stefon Diggs", "WR"),
            TestDataBuilder::create_player("p6", "Joshua Dobbs", "QB"),
        ]
    }

    fn appearance(home: &str, away: &str) -> TeamAppearance {
        let game = TestDataBuilder::create_game("g1", home, away);
        TeamAppearance::from_game(&game, HomeAway::Home)
    }

    #[test]
    fn test_merge_roster_filters_positions_and_keeps_order() {
        let ne = appearance("NE", "LV");
        let merged = merge_roster(&roster(), &ne, &POSITIONS);

        let ids: Vec<&str> = merged.iter().map(|p| p.player.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p4", "p5", "p6"]);
        for player in &merged {
            assert_eq!(player.appearance.team_id, ne.team_id);
            assert!(POSITIONS.contains(&player.position()));
        }
    }

    #[test]
    fn test_merge_roster_is_case_sensitive() {
        let mut players = roster();
        players[0].position = "qb".to_string();

        let merged = merge_roster(&players, &appearance("NE", "LV"), &["QB"]);
        let ids: Vec<&str> = merged.iter().map(|p| p.player.id.as_str()).collect();
        assert_eq!(ids, vec!["p6"]);
    }

    #[test]
    fn test_merge_roster_is_idempotent() {
        let ne = appearance("NE", "LV");
        let players = roster();
        let first = merge_roster(&players, &ne, &POSITIONS);
        let second = merge_roster(&players, &ne, &POSITIONS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_assemble_pool_skips_failed_teams() {
        let teams = [appearance("NE", "LV"), appearance("KC", "LAC"), appearance("DAL", "PHI")];
        let outcomes = vec![
            TeamOutcome {
                appearance: teams[0].clone(),
                result: Ok(merge_roster(&roster(), &teams[0], &POSITIONS)),
            },
            TeamOutcome {
                appearance: teams[1].clone(),
                result: Err(AppError::retry_exhausted("roster", 3)),
            },
            TeamOutcome {
                appearance: teams[2].clone(),
                result: Ok(merge_roster(&roster(), &teams[2], &POSITIONS)),
            },
        ];

        let build = assemble_pool(&POSITIONS, outcomes);

        assert_eq!(build.teams_requested, 3);
        assert_eq!(build.teams_processed(), 2);
        assert!(build.is_partial());
        assert_eq!(build.teams_skipped[0].team_alias, "KC");

        let qbs = build.pool.get("QB").unwrap();
        let qb_teams: Vec<&str> = qbs.iter().map(|p| p.appearance.team_alias.as_str()).collect();
        assert_eq!(qb_teams, vec!["NE", "NE", "DAL", "DAL"]);
        assert!(
            build
                .pool
                .groups()
                .iter()
                .flat_map(|g| g.players.iter())
                .all(|p| p.appearance.team_alias != "KC")
        );
    }

    #[test]
    fn test_assemble_pool_keeps_requested_positions_even_when_empty() {
        let build = assemble_pool(&["QB", "K"], Vec::new());
        let positions: Vec<&str> = build.pool.positions().collect();
        assert_eq!(positions, vec!["QB", "K"]);
        assert!(build.pool.is_empty());
        assert!(!build.is_partial());
    }

    #[test]
    fn test_flex_is_rb_then_wr_then_te() {
        let ne = appearance("NE", "LV");
        let build = assemble_pool(
            &POSITIONS,
            vec![TeamOutcome {
                appearance: ne.clone(),
                result: Ok(merge_roster(&roster(), &ne, &POSITIONS)),
            }],
        );

        let flex = flex_players(&build.pool);
        let mut expected = Vec::new();
        for position in ["RB", "WR", "TE"] {
            expected.extend(build.pool.get(position).unwrap().iter().cloned());
        }
        assert_eq!(flex, expected);
        let ids: Vec<&str> = flex.iter().map(|p| p.player.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p5", "p4"]);
    }

    #[test]
    fn test_players_for_positions_ignores_unknown_positions() {
        let ne = appearance("NE", "LV");
        let build = assemble_pool(
            &["QB"],
            vec![TeamOutcome {
                appearance: ne.clone(),
                result: Ok(merge_roster(&roster(), &ne, &["QB"])),
            }],
        );

        assert_eq!(players_for_positions(&build.pool, &["QB", "K"]).len(), 2);
        assert!(players_for_positions(&build.pool, &["WR"]).is_empty());
    }
}
