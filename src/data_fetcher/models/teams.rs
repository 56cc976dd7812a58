use serde::{Deserialize, Serialize};

/// A team as it appears in the league hierarchy and inside schedule games.
///
/// Identity is `id`; `alias` is the short uppercase code ("NE", "KC").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
}

impl Team {
    /// "New England Patriots" when the market is known, otherwise the bare name.
    pub fn display_name(&self) -> String {
        match &self.market {
            Some(market) if !market.is_empty() => format!("{market} {}", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Response of the `league/teams.json` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<Team>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_teams_response_ignores_unknown_fields() {
        let value = json!({
            "league": {"id": "nfl"},
            "teams": [
                {"id": "t-ne", "name": "Patriots", "market": "New England", "alias": "NE", "sr_id": "sr:1"},
                {"id": "t-kc", "name": "Chiefs", "alias": "KC"}
            ]
        });

        let response: TeamsResponse = serde_json::from_value(value).unwrap();
        assert_eq!(response.teams.len(), 2);
        assert_eq!(response.teams[0].display_name(), "New England Patriots");
        assert_eq!(response.teams[1].display_name(), "Chiefs");
        assert_eq!(response.teams[1].market, None);
    }

    #[test]
    fn test_teams_response_requires_teams_key() {
        let result = serde_json::from_value::<TeamsResponse>(json!({"league": {}}));
        assert!(result.is_err());
    }
}
