//! Typed access to the NFL endpoints on top of [`FetchClient`]

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, instrument};

use super::fetch_utils::{FetchClient, FetchConfig, Sleeper, TokioSleeper};
use super::urls::{
    build_roster_url, build_season_schedule_url, build_teams_url, build_weekly_schedule_url,
};
use crate::data_fetcher::models::{
    RosterPlayer, RosterResponse, ScheduleGame, SeasonSchedule, Team, TeamsResponse, WeeklyTeams,
    weekly_games,
};
use crate::data_fetcher::processors::{find_team_id, resolve_team_appearances};
use crate::error::AppError;

pub struct NflApi<S = TokioSleeper> {
    client: FetchClient<S>,
}

impl NflApi<TokioSleeper> {
    pub fn new(config: FetchConfig) -> Result<Self, AppError> {
        Ok(Self::from_client(FetchClient::new(config)?))
    }
}

impl<S: Sleeper> NflApi<S> {
    pub fn from_client(client: FetchClient<S>) -> Self {
        NflApi { client }
    }

    fn base_url(&self) -> &str {
        &self.client.config().base_url
    }

    /// All league teams
    pub async fn fetch_teams(&self) -> Result<Vec<Team>, AppError> {
        let url = build_teams_url(self.base_url());
        let value = self.client.fetch(&url).await?;
        decode::<TeamsResponse>(value, &url).map(|response| response.teams)
    }

    /// The full roster of one team.
    ///
    /// A response without a `players` list is a `MalformedResponse`.
    pub async fn fetch_roster(&self, team_id: &str) -> Result<Vec<RosterPlayer>, AppError> {
        let url = build_roster_url(self.base_url(), team_id);
        let value = self.client.fetch(&url).await?;
        decode::<RosterResponse>(value, &url).map(|response| response.players)
    }

    pub async fn fetch_season_schedule(&self, year: u32) -> Result<SeasonSchedule, AppError> {
        let url = build_season_schedule_url(self.base_url(), year);
        let value = self.client.fetch(&url).await?;
        Ok(SeasonSchedule::from_value(&value))
    }

    /// Games of one regular season week. A schedule without games is an
    /// empty list, not an error.
    pub async fn fetch_weekly_schedule(
        &self,
        week: u32,
        year: u32,
    ) -> Result<Vec<ScheduleGame>, AppError> {
        let url = build_weekly_schedule_url(self.base_url(), week, year);
        let value = self.client.fetch(&url).await?;
        Ok(weekly_games(&value))
    }

    /// Unique teams playing in `week`, each annotated with its opponent.
    #[instrument(skip(self))]
    pub async fn fetch_teams_playing(&self, week: u32, year: u32) -> Result<WeeklyTeams, AppError> {
        let games = self.fetch_weekly_schedule(week, year).await?;
        let teams = resolve_team_appearances(&games);
        info!(
            "Week {week}, {year}: {} games, {} teams playing",
            games.len(),
            teams.len()
        );

        Ok(WeeklyTeams {
            week,
            year,
            total_games: games.len(),
            teams,
        })
    }

    /// Looks up a team id by alias, case-insensitively.
    pub async fn resolve_team_id(&self, alias: &str) -> Result<String, AppError> {
        let teams = self.fetch_teams().await?;
        find_team_id(&teams, alias)
    }

    /// Roster of the team with the given alias. Unknown aliases fail with
    /// `TeamNotFound` before any roster request is made.
    pub async fn fetch_roster_by_alias(&self, alias: &str) -> Result<Vec<RosterPlayer>, AppError> {
        let team_id = self.resolve_team_id(alias).await?;
        self.fetch_roster(&team_id).await
    }
}

fn decode<T: DeserializeOwned>(value: Value, url: &str) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::malformed_response(e.to_string(), url))
}
