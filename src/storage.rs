//! Flat-file persistence of player pools and per-position player lists
//!
//! File names are derived from `(position, week, year)`. A missing or
//! malformed file is an empty result; an unreadable file is an error.

use crate::constants::FLEX_POSITIONS;
use crate::data_fetcher::models::{PlayerPool, PoolPlayer};
use crate::error::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// `fantasy_player_pool_week_{week}_{year}.json`
pub fn pool_file_name(week: u32, year: u32) -> String {
    format!("fantasy_player_pool_week_{week}_{year}.json")
}

/// `{position}_players_week_{week}_{year}.json`, position lowercased
pub fn position_file_name(position: &str, week: u32, year: u32) -> String {
    format!(
        "{}_players_week_{week}_{year}.json",
        position.to_lowercase()
    )
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).await?;
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).await?;
    Ok(())
}

/// Reads and decodes `path`, returning `None` when the file does not exist
/// or does not hold valid JSON of the expected shape.
async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, AppError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("File {} not found", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    match serde_json::from_str(&content) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!("Ignoring malformed file {}: {}", path.display(), e);
            Ok(None)
        }
    }
}

/// Writes the whole pool and returns the file path.
pub async fn save_player_pool(
    dir: &Path,
    pool: &PlayerPool,
    week: u32,
    year: u32,
) -> Result<PathBuf, AppError> {
    let path = dir.join(pool_file_name(week, year));
    write_json(&path, pool).await?;
    info!("Player pool saved to {}", path.display());
    Ok(path)
}

/// Loads a saved pool. A missing file yields an empty pool.
pub async fn load_player_pool(dir: &Path, week: u32, year: u32) -> Result<PlayerPool, AppError> {
    let path = dir.join(pool_file_name(week, year));
    let pool = read_json::<PlayerPool>(&path).await?.unwrap_or_default();
    info!("Loaded {} players from {}", pool.len(), path.display());
    Ok(pool)
}

/// Writes one file per position tracked by the pool, in pool order.
pub async fn save_position_files(
    dir: &Path,
    pool: &PlayerPool,
    week: u32,
    year: u32,
) -> Result<Vec<PathBuf>, AppError> {
    let mut written = Vec::new();
    for group in pool.groups() {
        let path = dir.join(position_file_name(&group.position, week, year));
        write_json(&path, &group.players).await?;
        info!(
            "{}: {} players saved to {}",
            group.position,
            group.players.len(),
            path.display()
        );
        written.push(path);
    }
    Ok(written)
}

/// Loads one position file. A missing file yields no players.
pub async fn load_position_players(
    dir: &Path,
    position: &str,
    week: u32,
    year: u32,
) -> Result<Vec<PoolPlayer>, AppError> {
    let path = dir.join(position_file_name(position, week, year));
    Ok(read_json::<Vec<PoolPlayer>>(&path).await?.unwrap_or_default())
}

/// FLEX-eligible players from the RB, WR and TE files, in that order.
pub async fn load_flex_eligible(
    dir: &Path,
    week: u32,
    year: u32,
) -> Result<Vec<PoolPlayer>, AppError> {
    let mut players = Vec::new();
    for position in FLEX_POSITIONS {
        players.extend(load_position_players(dir, position, week, year).await?);
    }
    info!("Found {} FLEX-eligible players", players.len());
    Ok(players)
}
