use super::teams::Team;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One scheduled game with both participating teams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleGame {
    pub id: String,
    #[serde(rename = "scheduled", default)]
    pub scheduled_time: Option<String>,
    pub home: Team,
    pub away: Team,
}

/// A week of the season schedule.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct ScheduleWeek {
    pub sequence: Option<u32>,
    pub title: Option<String>,
    pub games: Vec<ScheduleGame>,
}

/// Regular season schedule, week by week.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct SeasonSchedule {
    pub year: Option<u32>,
    pub weeks: Vec<ScheduleWeek>,
}

impl ScheduleWeek {
    /// Builds a week from its JSON object. Missing keys leave the
    /// corresponding fields empty.
    pub fn from_value(value: &Value) -> Self {
        ScheduleWeek {
            sequence: value
                .get("sequence")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
            title: value
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string),
            games: decode_games(value.get("games")),
        }
    }
}

impl SeasonSchedule {
    pub fn from_value(value: &Value) -> Self {
        let weeks = value
            .get("weeks")
            .and_then(Value::as_array)
            .map(|weeks| weeks.iter().map(ScheduleWeek::from_value).collect())
            .unwrap_or_default();

        SeasonSchedule {
            year: value
                .get("year")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
            weeks,
        }
    }

    pub fn total_games(&self) -> usize {
        self.weeks.iter().map(|week| week.games.len()).sum()
    }
}

/// Extracts the games of a weekly schedule response (`{week: {games: [...]}}`).
///
/// A response without the `week` wrapper or without `games` yields an
/// empty list. Games that do not decode are skipped with a warning.
pub fn weekly_games(schedule: &Value) -> Vec<ScheduleGame> {
    decode_games(schedule.get("week").and_then(|week| week.get("games")))
}

fn decode_games(games: Option<&Value>) -> Vec<ScheduleGame> {
    let Some(games) = games.and_then(Value::as_array) else {
        return Vec::new();
    };

    games
        .iter()
        .filter_map(|game| match ScheduleGame::deserialize(game) {
            Ok(game) => Some(game),
            Err(e) => {
                let id = game.get("id").and_then(Value::as_str).unwrap_or("<no id>");
                warn!("Skipping undecodable schedule game {id}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game_json(id: &str, home: &str, away: &str) -> Value {
        json!({
            "id": id,
            "status": "scheduled",
            "scheduled": "2025-09-07T17:00:00+00:00",
            "home": {"id": format!("t-{home}"), "name": home, "alias": home},
            "away": {"id": format!("t-{away}"), "name": away, "alias": away}
        })
    }

    #[test]
    fn test_weekly_games_parses_nested_games() {
        let schedule = json!({
            "id": "season",
            "week": {"sequence": 1, "games": [game_json("g1", "NE", "LV"), game_json("g2", "KC", "LAC")]}
        });

        let games = weekly_games(&schedule);
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].id, "g1");
        assert_eq!(games[0].home.alias, "NE");
        assert_eq!(games[1].away.id, "t-LAC");
        assert_eq!(
            games[0].scheduled_time.as_deref(),
            Some("2025-09-07T17:00:00+00:00")
        );
    }

    #[test]
    fn test_weekly_games_missing_wrapper_is_empty() {
        assert!(weekly_games(&json!({})).is_empty());
        assert!(weekly_games(&json!({"week": {}})).is_empty());
        assert!(weekly_games(&json!({"week": {"games": null}})).is_empty());
    }

    #[test]
    fn test_weekly_games_skips_games_without_teams() {
        let schedule = json!({
            "week": {"games": [{"id": "broken"}, game_json("g1", "NE", "LV")]}
        });

        let games = weekly_games(&schedule);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, "g1");
    }

    #[test]
    fn test_season_schedule_from_value() {
        let schedule = json!({
            "year": 2025,
            "type": "REG",
            "weeks": [
                {"sequence": 1, "title": "1", "games": [game_json("g1", "NE", "LV")]},
                {"sequence": 2, "title": "2", "games": [game_json("g2", "KC", "LAC"), game_json("g3", "DAL", "PHI")]}
            ]
        });

        let season = SeasonSchedule::from_value(&schedule);
        assert_eq!(season.year, Some(2025));
        assert_eq!(season.weeks.len(), 2);
        assert_eq!(season.weeks[1].sequence, Some(2));
        assert_eq!(season.weeks[1].title.as_deref(), Some("2"));
        assert_eq!(season.total_games(), 3);
    }

    #[test]
    fn test_season_schedule_without_weeks() {
        let season = SeasonSchedule::from_value(&json!({"year": 2025}));
        assert!(season.weeks.is_empty());
        assert_eq!(season.total_games(), 0);
    }
}
