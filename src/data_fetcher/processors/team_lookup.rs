use crate::data_fetcher::models::Team;
use crate::error::AppError;

/// Finds the id of the team whose alias matches `alias`, ignoring case.
pub fn find_team_id(teams: &[Team], alias: &str) -> Result<String, AppError> {
    teams
        .iter()
        .find(|team| team.alias.eq_ignore_ascii_case(alias))
        .map(|team| team.id.clone())
        .ok_or_else(|| AppError::team_not_found(alias))
}
