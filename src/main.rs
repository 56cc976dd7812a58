// src/main.rs
use clap::Parser;
use fantasy_pool::cli::Args;
use fantasy_pool::commands::{
    handle_build_pool_command, handle_config_update_command, handle_flex_command,
    handle_from_file_command, handle_list_config_command, handle_roster_command,
    handle_season_schedule_command, validate_args,
};
use fantasy_pool::config::Config;
use fantasy_pool::data_fetcher::api::NflApi;
use fantasy_pool::error::AppError;
use fantasy_pool::logging::setup_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    validate_args(&args)?;

    // Config commands don't need logging or an API key
    if args.list_config {
        return handle_list_config_command().await;
    }
    if let Some(new_base_url) = &args.new_base_url {
        return handle_config_update_command(new_base_url).await;
    }

    let config = Config::load().await?;
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!("Logs are written to: {log_file_path}");

    let result = run(&args, &config).await;
    if let Err(e) = &result {
        error!("Command failed: {e}");
    }
    result
}

async fn run(args: &Args, config: &Config) -> Result<(), AppError> {
    if args.from_file {
        return handle_from_file_command(args, config).await;
    }
    if args.flex {
        return handle_flex_command(args, config).await;
    }

    let api = NflApi::new(config.fetch_config()?)?;

    if let Some(alias) = &args.roster {
        return handle_roster_command(&api, alias).await;
    }
    if args.season_schedule {
        return handle_season_schedule_command(&api, args.year).await;
    }

    handle_build_pool_command(&api, args, config).await
}
