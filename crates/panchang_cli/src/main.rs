mod cli;
mod logging;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use panchang_config::{ConfigError, Settings};
use panchang_rs::{AnalyticEphemeris, GeoLocation, PanchangError, PanchangService};
use panchang_vedic::{
    karana_from_elongation, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
    tithi_from_elongation, yoga_from_sum,
};
use serde::Serialize;

use crate::cli::{Cli, Command, OutputArgs, PlaceArgs};
use crate::output::Classification;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Panchang(#[from] PanchangError),
    #[error(transparent)]
    Time(#[from] panchang_time::TimeError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Input(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = match &cli.config {
        Some(path) => panchang_config::load(path)?,
        None => Settings::default(),
    };
    let service = PanchangService::from_settings(Arc::new(AnalyticEphemeris::new()), &settings)?;

    match cli.command {
        Command::Day {
            date,
            place,
            output,
        } => {
            let date = panchang_time::parse_civil_date(&date)?;
            let (service, location) = apply_place(service, &place)?;
            let entry = service.day(date, location.as_ref())?;
            emit(&output, &entry, || output::day_text(&entry))
        }
        Command::Month {
            year,
            month,
            place,
            output,
        } => {
            let (service, location) = apply_place(service, &place)?;
            let entries = service.month(year, month, location.as_ref())?;
            emit(&output, &entries, || output::month_text(&entries))
        }
        Command::Festivals {
            date,
            place,
            output,
        } => {
            let date = panchang_time::parse_civil_date(&date)?;
            let (service, location) = apply_place(service, &place)?;
            let festivals = service.festivals(date, location.as_ref())?;
            emit(&output, &festivals, || {
                format!("{}\n", output::festival_list(&festivals))
            })
        }
        Command::Classify {
            sun,
            moon,
            ayanamsha_deg,
            output,
        } => {
            let c = classify(sun, moon, ayanamsha_deg)?;
            emit(&output, &c, || output::classification_text(&c))
        }
    }
}

/// Month-system override and explicit location, if any.
fn apply_place(
    service: PanchangService<AnalyticEphemeris>,
    place: &PlaceArgs,
) -> Result<(PanchangService<AnalyticEphemeris>, Option<GeoLocation>), CliError> {
    let service = match place.month_system {
        Some(system) => service.with_month_system(system),
        None => service,
    };
    let location = match (place.lat, place.lon) {
        (Some(lat), Some(lon)) => Some(
            GeoLocation::try_new(lat, lon, place.alt)
                .map_err(|e| CliError::Input(e.to_string()))?,
        ),
        _ => None,
    };
    Ok((service, location))
}

fn classify(sun: f64, moon: f64, ayanamsha_deg: f64) -> Result<Classification, CliError> {
    if !(sun.is_finite() && moon.is_finite() && ayanamsha_deg.is_finite()) {
        return Err(CliError::Input("longitudes must be finite".into()));
    }
    let sun = normalize_360(sun - ayanamsha_deg);
    let moon = normalize_360(moon - ayanamsha_deg);
    let elongation = normalize_360(moon - sun);
    Ok(Classification {
        elongation_deg: elongation,
        tithi: tithi_from_elongation(elongation),
        karana: karana_from_elongation(elongation),
        nakshatra: nakshatra_from_longitude(moon),
        yoga: yoga_from_sum(sun + moon),
        sun_rashi: rashi_from_longitude(sun),
        moon_rashi: rashi_from_longitude(moon),
    })
}

fn emit<T: Serialize>(
    args: &OutputArgs,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<(), CliError> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
