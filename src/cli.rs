use crate::constants::{DEFAULT_POSITIONS, DEFAULT_WEEK, DEFAULT_YEAR};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

fn default_positions() -> Vec<String> {
    DEFAULT_POSITIONS.iter().map(|p| p.to_string()).collect()
}

/// NFL fantasy player pool builder
///
/// Fetches the weekly schedule from the Sportradar NFL API, loads the roster
/// of every team playing that week and writes the QB/RB/WR/TE player pool to
/// JSON files. The API key is read from SPORTRADAR_API_KEY (or API_KEY).
///
/// Requests are throttled to the trial-tier rate limit, so a full week takes
/// roughly one second per team.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Regular season week to build the pool for.
    #[arg(short, long, default_value_t = DEFAULT_WEEK)]
    pub week: u32,

    /// Season year.
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    pub year: u32,

    /// Positions to include, comma separated. Codes are matched exactly (QB, not qb).
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = default_positions()
    )]
    pub positions: Vec<String>,

    /// Directory pool files are written to and read from. Overrides the config.
    #[arg(short, long, help_heading = "Output")]
    pub output_dir: Option<String>,

    /// Summarize the saved pool for the week instead of fetching it again.
    #[arg(long, help_heading = "Offline")]
    pub from_file: bool,

    /// Summarize FLEX-eligible players (RB, WR, TE) from the saved position files.
    #[arg(long, help_heading = "Offline")]
    pub flex: bool,

    /// Print the roster of one team, looked up by abbreviation (e.g. NE).
    #[arg(long, value_name = "ALIAS", help_heading = "Lookups")]
    pub roster: Option<String>,

    /// Print the regular season schedule overview for the year.
    #[arg(long, help_heading = "Lookups")]
    pub season_schedule: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Update the API base URL in the config file.
    #[arg(long = "set-base-url", value_name = "URL", help_heading = "Configuration")]
    pub new_base_url: Option<String>,

    /// Specify a custom log file path. If not provided, logs go to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Also write logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,
}
