//! Plain-text console summaries of player pools

use crate::constants::summary::{MAX_LISTED_PLAYERS, RULE_WIDTH};
use crate::data_fetcher::models::{PlayerPool, PoolPlayer};
use crate::data_fetcher::processors::PoolBuild;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// One `"{POS}: {n} players"` line per position, in pool order.
pub fn format_pool_counts(pool: &PlayerPool) -> String {
    pool.groups()
        .iter()
        .map(|group| format!("{}: {} players", group.position, group.players.len()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Counts plus the teams that had to be skipped, if any.
pub fn format_build_report(build: &PoolBuild) -> String {
    let mut lines = vec![
        "Player pool summary:".to_string(),
        format_pool_counts(&build.pool),
        format!(
            "Teams processed: {}/{}",
            build.teams_processed(),
            build.teams_requested
        ),
    ];
    for skipped in &build.teams_skipped {
        lines.push(format!(
            "  skipped {} ({}): {}",
            skipped.team_name, skipped.team_alias, skipped.reason
        ));
    }
    lines.join("\n")
}

/// Kickoff in UTC, e.g. "Sun Sep 7 17:00 UTC". Unparseable values are shown as-is.
pub fn format_kickoff(scheduled: &str) -> String {
    match DateTime::parse_from_rfc3339(scheduled) {
        Ok(time) => time
            .with_timezone(&Utc)
            .format("%a %b %-d %H:%M UTC")
            .to_string(),
        Err(_) => scheduled.to_string(),
    }
}

fn format_player_line(player: &PoolPlayer) -> String {
    let appearance = &player.appearance;
    let mut line = format!(
        "{} ({}) vs {} - {}",
        player.player.name,
        appearance.team_alias,
        appearance.opponent_alias,
        appearance.home_or_away.as_str().to_uppercase()
    );
    if let Some(scheduled) = &appearance.scheduled_time {
        line.push_str(&format!(", {}", format_kickoff(scheduled)));
    }
    line
}

/// Summary of a player list: the first few players, a remainder line and
/// the distribution of players per team alias.
pub fn format_player_summary(players: &[PoolPlayer], label: &str) -> String {
    let mut lines = vec![
        String::new(),
        format!("{label} Summary ({} players):", players.len()),
        "-".repeat(RULE_WIDTH),
    ];

    lines.extend(players.iter().take(MAX_LISTED_PLAYERS).map(format_player_line));

    if players.len() > MAX_LISTED_PLAYERS {
        lines.push(format!(
            "... and {} more players",
            players.len() - MAX_LISTED_PLAYERS
        ));
    }

    let mut teams: BTreeMap<&str, usize> = BTreeMap::new();
    for player in players {
        *teams.entry(player.appearance.team_alias.as_str()).or_default() += 1;
    }

    lines.push(String::new());
    lines.push("Team distribution:".to_string());
    for (team, count) in teams {
        lines.push(format!("  {team}: {count} players"));
    }

    lines.join("\n")
}
