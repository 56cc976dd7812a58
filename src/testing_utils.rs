//! Builders and fakes shared by unit and integration tests

use crate::data_fetcher::api::Sleeper;
use crate::data_fetcher::models::{
    HomeAway, PoolPlayer, RosterPlayer, ScheduleGame, Team, TeamAppearance,
};
use serde_json::{Value, json};
use std::future::{Future, ready};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Team id derived from the alias so tests can predict it ("NE" -> "team-ne")
    pub fn team_id(alias: &str) -> String {
        format!("team-{}", alias.to_lowercase())
    }

    pub fn create_team(alias: &str) -> Team {
        Team {
            id: Self::team_id(alias),
            name: format!("{alias} Team"),
            alias: alias.to_string(),
            market: None,
        }
    }

    pub fn create_game(game_id: &str, home_alias: &str, away_alias: &str) -> ScheduleGame {
        ScheduleGame {
            id: game_id.to_string(),
            scheduled_time: Some("2025-09-07T17:00:00+00:00".to_string()),
            home: Self::create_team(home_alias),
            away: Self::create_team(away_alias),
        }
    }

    pub fn create_player(id: &str, name: &str, position: &str) -> RosterPlayer {
        RosterPlayer {
            id: id.to_string(),
            name: name.to_string(),
            position: position.to_string(),
            jersey: Some("12".to_string()),
            height: Some(74),
            weight: Some(215.0),
            birth_date: Some("1998-05-12".to_string()),
            experience: Some(3),
            college: Some("Michigan".to_string()),
        }
    }

    /// A pool player on the home side of a game between the two aliases
    pub fn create_pool_player(
        id: &str,
        position: &str,
        team_alias: &str,
        opponent_alias: &str,
    ) -> PoolPlayer {
        let game = Self::create_game("game-1", team_alias, opponent_alias);
        PoolPlayer::new(
            Self::create_player(id, &format!("Player {id}"), position),
            TeamAppearance::from_game(&game, HomeAway::Home),
        )
    }

    /// Body of `league/teams.json` for the given aliases
    pub fn teams_json(aliases: &[&str]) -> Value {
        let teams: Vec<Value> = aliases
            .iter()
            .map(|alias| {
                json!({
                    "id": Self::team_id(alias),
                    "name": format!("{alias} Team"),
                    "market": "Somewhere",
                    "alias": alias
                })
            })
            .collect();
        json!({ "teams": teams })
    }

    /// Body of a full roster response for `(id, name, position)` entries
    pub fn roster_json(players: &[(&str, &str, &str)]) -> Value {
        let players: Vec<Value> = players
            .iter()
            .map(|(id, name, position)| {
                json!({
                    "id": id,
                    "name": name,
                    "position": position,
                    "jersey": "1",
                    "height": 72,
                    "weight": 200.0,
                    "birth_date": "1999-01-01",
                    "experience": 2,
                    "college": "State",
                    "status": "ACT"
                })
            })
            .collect();
        json!({ "id": "roster", "players": players })
    }

    /// Body of a weekly schedule response for `(game_id, home, away)` entries
    pub fn weekly_schedule_json(games: &[(&str, &str, &str)]) -> Value {
        let games: Vec<Value> = games
            .iter()
            .map(|(id, home, away)| {
                json!({
                    "id": id,
                    "status": "scheduled",
                    "scheduled": "2025-09-07T17:00:00+00:00",
                    "home": {"id": Self::team_id(home), "name": format!("{home} Team"), "alias": home},
                    "away": {"id": Self::team_id(away), "name": format!("{away} Team"), "alias": away}
                })
            })
            .collect();
        json!({
            "id": "season",
            "year": 2025,
            "week": { "sequence": 1, "title": "1", "games": games }
        })
    }
}

/// A [`Sleeper`] that returns immediately and remembers every requested
/// duration, acting as a simulated clock. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn recorded(&self) -> Vec<Duration> {
        self.sleeps.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Total simulated time slept
    pub fn total(&self) -> Duration {
        self.recorded().iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        if let Ok(mut sleeps) = self.sleeps.lock() {
            sleeps.push(duration);
        }
        ready(())
    }
}
