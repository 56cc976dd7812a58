use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::api::{NflApi, Sleeper};
use crate::data_fetcher::models::PlayerPool;
use crate::data_fetcher::processors::{build_player_pool, players_for_positions};
use crate::error::AppError;
use crate::storage;
use crate::summary::{format_build_report, format_player_summary, format_pool_counts};
use std::path::PathBuf;
use tracing::info;

/// Human label for a position code in summaries
fn position_label(position: &str) -> String {
    match position {
        "QB" => "Quarterbacks".to_string(),
        "RB" => "Running Backs".to_string(),
        "WR" => "Wide Receivers".to_string(),
        "TE" => "Tight Ends".to_string(),
        other => format!("{other} Players"),
    }
}

/// Output directory: `--output-dir` wins over the configured one.
pub fn output_dir(args: &Args, config: &Config) -> PathBuf {
    PathBuf::from(args.output_dir.as_deref().unwrap_or(&config.output_dir))
}

/// Validates command line argument combinations.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    let modes = [
        args.from_file,
        args.flex,
        args.roster.is_some(),
        args.season_schedule,
    ];
    if modes.iter().filter(|m| **m).count() > 1 {
        return Err(AppError::config_error(
            "Use only one of --from-file, --flex, --roster and --season-schedule",
        ));
    }
    if args.positions.iter().any(|p| p.trim().is_empty()) {
        return Err(AppError::config_error("Position codes cannot be empty"));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles --set-base-url: validates and persists the new base URL.
pub async fn handle_config_update_command(new_base_url: &str) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    config.api_base_url = new_base_url.trim_end_matches('/').to_string();
    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Default action: fetch the week's pool, persist it and print summaries.
pub async fn handle_build_pool_command<S: Sleeper>(
    api: &NflApi<S>,
    args: &Args,
    config: &Config,
) -> Result<(), AppError> {
    println!(
        "Building player pool for week {}, {} ({})...",
        args.week,
        args.year,
        args.positions.join(", ")
    );

    let build = build_player_pool(api, args.week, args.year, &args.positions).await?;

    let dir = output_dir(args, config);
    let pool_path = storage::save_player_pool(&dir, &build.pool, args.week, args.year).await?;
    let position_paths =
        storage::save_position_files(&dir, &build.pool, args.week, args.year).await?;

    println!("{}", format_build_report(&build));
    println!("Player pool saved to {}", pool_path.display());
    for path in &position_paths {
        println!("  {}", path.display());
    }

    for group in build.pool.groups() {
        println!(
            "{}",
            format_player_summary(&group.players, &position_label(&group.position))
        );
    }

    Ok(())
}

/// A loaded pool that tracks no positions came from a missing or unreadable
/// file. A saved pool always tracks its positions, even when they are empty.
pub fn is_saved_pool(pool: &PlayerPool) -> bool {
    pool.positions().next().is_some()
}

/// --from-file: summarize a pool saved by an earlier run.
pub async fn handle_from_file_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let dir = output_dir(args, config);
    let pool = storage::load_player_pool(&dir, args.week, args.year).await?;

    if !is_saved_pool(&pool) {
        println!(
            "No saved player pool for week {}, {} in {}",
            args.week,
            args.year,
            dir.display()
        );
        return Ok(());
    }

    println!("{}", format_pool_counts(&pool));
    for position in &args.positions {
        let players = players_for_positions(&pool, std::slice::from_ref(position));
        println!(
            "{}",
            format_player_summary(&players, &position_label(position))
        );
    }
    Ok(())
}

/// --flex: FLEX-eligible players from the saved position files.
pub async fn handle_flex_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let dir = output_dir(args, config);
    let players = storage::load_flex_eligible(&dir, args.week, args.year).await?;
    println!("{}", format_player_summary(&players, "FLEX Players"));
    Ok(())
}

/// --roster ALIAS: print one team's roster.
pub async fn handle_roster_command<S: Sleeper>(
    api: &NflApi<S>,
    alias: &str,
) -> Result<(), AppError> {
    let roster = api.fetch_roster_by_alias(alias).await?;
    info!("Fetched {} players for {}", roster.len(), alias);

    println!("\n{} roster ({} players):", alias.to_uppercase(), roster.len());
    println!("{}", "-".repeat(crate::constants::summary::RULE_WIDTH));
    for player in &roster {
        println!(
            "#{:<3} {:<4} {}",
            player.jersey.as_deref().unwrap_or("-"),
            player.position,
            player.name
        );
    }
    Ok(())
}

/// --season-schedule: week-by-week game counts.
pub async fn handle_season_schedule_command<S: Sleeper>(
    api: &NflApi<S>,
    year: u32,
) -> Result<(), AppError> {
    let season = api.fetch_season_schedule(year).await?;

    println!(
        "\n{year} regular season: {} weeks, {} games",
        season.weeks.len(),
        season.total_games()
    );
    for week in &season.weeks {
        let label = week
            .title
            .clone()
            .or_else(|| week.sequence.map(|s| s.to_string()))
            .unwrap_or_else(|| "?".to_string());
        println!("  Week {label}: {} games", week.games.len());
    }
    Ok(())
}
