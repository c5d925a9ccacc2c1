use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use panchang_search::MonthSystem;

/// Panchang calendar and festival lookup.
#[derive(Parser)]
#[command(name = "panchang", version, about = "Panchang calendar and festival lookup")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Settings file (TOML). Built-in defaults when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Panchang and festivals for one date
    Day {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Panchang and festivals for every day of a month
    Month {
        #[arg(long)]
        year: i32,
        /// Month number (1-12)
        #[arg(long)]
        month: u32,
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Festival names for one date
    Festivals {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Calendar elements from Sun and Moon longitudes
    Classify {
        /// Sun ecliptic longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        sun: f64,
        /// Moon ecliptic longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
        /// Subtracted from both longitudes (0 = already sidereal)
        #[arg(long, default_value_t = 0.0)]
        ayanamsha_deg: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Observer overrides; the settings location otherwise.
#[derive(Args)]
pub struct PlaceArgs {
    /// Latitude in degrees, north positive
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
    /// Altitude in meters
    #[arg(long, default_value_t = 0.0)]
    pub alt: f64,
    /// Month convention reported as the lunar month (amanta, purnimanta)
    #[arg(long)]
    pub month_system: Option<MonthSystem>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
