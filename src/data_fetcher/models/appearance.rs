use super::schedule::ScheduleGame;
use super::teams::Team;
use serde::{Deserialize, Serialize};

/// Which side of the game a team is on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HomeAway {
    Home,
    Away,
}

impl HomeAway {
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeAway::Home => "home",
            HomeAway::Away => "away",
        }
    }
}

/// A team's participation in one week, annotated with its opponent and
/// the game it plays. Field names match the persisted pool files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamAppearance {
    pub team_id: String,
    pub team_name: String,
    pub team_alias: String,
    pub opponent_id: String,
    pub opponent_name: String,
    pub opponent_alias: String,
    #[serde(rename = "home_away")]
    pub home_or_away: HomeAway,
    pub game_id: String,
    #[serde(rename = "scheduled")]
    pub scheduled_time: Option<String>,
}

impl TeamAppearance {
    /// Builds the appearance of one side of `game`.
    pub fn from_game(game: &ScheduleGame, side: HomeAway) -> Self {
        let (team, opponent): (&Team, &Team) = match side {
            HomeAway::Home => (&game.home, &game.away),
            HomeAway::Away => (&game.away, &game.home),
        };

        TeamAppearance {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            team_alias: team.alias.clone(),
            opponent_id: opponent.id.clone(),
            opponent_name: opponent.name.clone(),
            opponent_alias: opponent.alias.clone(),
            home_or_away: side,
            game_id: game.id.clone(),
            scheduled_time: game.scheduled_time.clone(),
        }
    }
}

/// The teams playing in a given week.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklyTeams {
    pub week: u32,
    pub year: u32,
    pub total_games: usize,
    pub teams: Vec<TeamAppearance>,
}

impl WeeklyTeams {
    pub fn total_teams(&self) -> usize {
        self.teams.len()
    }
}
