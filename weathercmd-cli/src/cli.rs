use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathercmd", version, about = "Weather at the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Whether `city_zip` holds a city name or a zip code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum How {
    City,
    Zip,
}

/// Arguments shared by the three forecast subcommands.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Look the location up by city name or by zip code.
    #[arg(value_enum)]
    pub how: How,

    /// City name or zip code.
    pub city_zip: String,

    /// State code for the location, e.g. "NC".
    #[arg(long)]
    pub state_code: Option<String>,

    /// Country code for the location, e.g. "US".
    #[arg(long)]
    pub country_code: Option<String>,

    /// Unit system: "metric" or "imperial".
    #[arg(long, default_value = "metric")]
    pub units: String,

    /// Show times on a 12-hour AM/PM clock instead of 24-hour.
    #[arg(long)]
    pub am_pm: bool,

    /// Only show temperatures.
    #[arg(long)]
    pub temp_only: bool,

    /// Cap the table at this width instead of fitting to content.
    #[arg(long)]
    pub terminal_width: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Current weather conditions.
    Current(LookupArgs),

    /// Daily forecast.
    Daily(LookupArgs),

    /// Hourly forecast.
    Hourly(LookupArgs),

    /// Store the OpenWeather API key.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Current(args) => commands::show_current(&args).await,
            Command::Daily(args) => commands::show_daily(&args).await,
            Command::Hourly(args) => commands::show_hourly(&args).await,
            Command::Configure => commands::configure(),
        }
    }
}
