use super::appearance::TeamAppearance;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// A player as listed on a team's full roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterPlayer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub jersey: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub college: Option<String>,
}

/// Response of the `teams/{id}/full_roster.json` endpoint.
///
/// The `players` key is required. Entries that do not decode are skipped
/// so one odd player does not cost the team its whole roster.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterResponse {
    #[serde(deserialize_with = "skip_undecodable_players")]
    pub players: Vec<RosterPlayer>,
}

/// A roster player merged with the week context of their team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoolPlayer {
    #[serde(flatten)]
    pub player: RosterPlayer,
    #[serde(flatten)]
    pub appearance: TeamAppearance,
}

impl PoolPlayer {
    pub fn new(player: RosterPlayer, appearance: TeamAppearance) -> Self {
        PoolPlayer { player, appearance }
    }

    pub fn position(&self) -> &str {
        &self.player.position
    }
}

fn skip_undecodable_players<'de, D>(deserializer: D) -> Result<Vec<RosterPlayer>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .iter()
        .filter_map(|entry| match RosterPlayer::deserialize(entry) {
            Ok(player) => Some(player),
            Err(e) => {
                let id = entry.get("id").and_then(Value::as_str).unwrap_or("<no id>");
                warn!("Skipping undecodable roster player {id}: {e}");
                None
            }
        })
        .collect())
}

// Jersey numbers arrive as strings but older feeds send bare numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
