use super::players::PoolPlayer;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Players of one position, in team-processing order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionGroup {
    pub position: String,
    pub players: Vec<PoolPlayer>,
}

/// Position-partitioned player pool for one week.
///
/// Groups keep the order in which positions were requested, and the pool
/// serializes as a JSON object keyed by position in that same order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerPool {
    groups: Vec<PositionGroup>,
}

impl PlayerPool {
    /// Creates an empty pool tracking `positions`. Repeated codes are kept once.
    pub fn new<S: AsRef<str>>(positions: &[S]) -> Self {
        let mut pool = PlayerPool::default();
        for position in positions {
            pool.ensure_group(position.as_ref());
        }
        pool
    }

    fn ensure_group(&mut self, position: &str) -> &mut PositionGroup {
        let index = match self.groups.iter().position(|g| g.position == position) {
            Some(index) => index,
            None => {
                self.groups.push(PositionGroup {
                    position: position.to_string(),
                    players: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }

    /// Appends a player to the group of its position. Returns `false` and
    /// drops the player when the pool does not track that position.
    pub fn push(&mut self, player: PoolPlayer) -> bool {
        match self
            .groups
            .iter_mut()
            .find(|g| g.position == player.position())
        {
            Some(group) => {
                group.players.push(player);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, position: &str) -> Option<&[PoolPlayer]> {
        self.groups
            .iter()
            .find(|g| g.position == position)
            .map(|g| g.players.as_slice())
    }

    pub fn positions(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.position.as_str())
    }

    pub fn groups(&self) -> &[PositionGroup] {
        &self.groups
    }

    /// Total number of players across all positions
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.players.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for PlayerPool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.position, &group.players)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PlayerPool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PoolVisitor;

        impl<'de> Visitor<'de> for PoolVisitor {
            type Value = PlayerPool;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from position code to a list of players")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PlayerPool, A::Error> {
                let mut pool = PlayerPool::default();
                while let Some((position, players)) =
                    access.next_entry::<String, Vec<PoolPlayer>>()?
                {
                    pool.ensure_group(&position).players.extend(players);
                }
                Ok(pool)
            }
        }

        deserializer.deserialize_map(PoolVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_new_dedups_positions_and_keeps_order() {
        let pool = PlayerPool::new(&["WR", "QB", "WR"]);
        let positions: Vec<&str> = pool.positions().collect();
        assert_eq!(positions, vec!["WR", "QB"]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_push_routes_by_position() {
        let mut pool = PlayerPool::new(&["QB", "RB"]);
        assert!(pool.push(TestDataBuilder::create_pool_player("p1", "QB", "NE", "LV")));
        assert!(pool.push(TestDataBuilder::create_pool_player("p2", "RB", "NE", "LV")));
        assert!(!pool.push(TestDataBuilder::create_pool_player("p3", "K", "NE", "LV")));

        assert_eq!(pool.get("QB").unwrap().len(), 1);
        assert_eq!(pool.get("RB").unwrap()[0].player.id, "p2");
        assert!(pool.get("K").is_none());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut pool = PlayerPool::new(&["TE", "QB"]);
        pool.push(TestDataBuilder::create_pool_player("p1", "QB", "NE", "LV"));

        let json = serde_json::to_string(&pool).unwrap();
        let te_at = json.find("\"TE\"").unwrap();
        let qb_at = json.find("\"QB\"").unwrap();
        assert!(te_at < qb_at, "positions should keep request order: {json}");

        let decoded: PlayerPool = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, pool);
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<PlayerPool>("[]").is_err());
    }
}
