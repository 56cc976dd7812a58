//! URL building utilities for API endpoints

/// Builds the URL of the league team list.
///
/// # Example
/// ```
/// use fantasy_pool::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://api.example.com/nfl");
/// assert_eq!(url, "https://api.example.com/nfl/league/teams.json");
/// ```
pub fn build_teams_url(base_url: &str) -> String {
    format!("{base_url}/league/teams.json")
}

/// Builds the URL of a team's full roster.
///
/// # Example
/// ```
/// use fantasy_pool::data_fetcher::api::build_roster_url;
///
/// let url = build_roster_url("https://api.example.com/nfl", "t-ne");
/// assert_eq!(url, "https://api.example.com/nfl/teams/t-ne/full_roster.json");
/// ```
pub fn build_roster_url(base_url: &str, team_id: &str) -> String {
    format!("{base_url}/teams/{team_id}/full_roster.json")
}

/// Builds the URL of the regular season schedule.
///
/// # Example
/// ```
/// use fantasy_pool::data_fetcher::api::build_season_schedule_url;
///
/// let url = build_season_schedule_url("https://api.example.com/nfl", 2025);
/// assert_eq!(url, "https://api.example.com/nfl/games/2025/REG/schedule.json");
/// ```
pub fn build_season_schedule_url(base_url: &str, year: u32) -> String {
    format!("{base_url}/games/{year}/REG/schedule.json")
}

/// Builds the URL of one regular season week's schedule.
///
/// # Example
/// ```
/// use fantasy_pool::data_fetcher::api::build_weekly_schedule_url;
///
/// let url = build_weekly_schedule_url("https://api.example.com/nfl", 3, 2025);
/// assert_eq!(url, "https://api.example.com/nfl/games/2025/REG/3/schedule.json");
/// ```
pub fn build_weekly_schedule_url(base_url: &str, week: u32, year: u32) -> String {
    format!("{base_url}/games/{year}/REG/{week}/schedule.json")
}
