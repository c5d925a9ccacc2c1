//! Text rendering of query results.

use std::fmt::Write;

use panchang_rs::DayEntry;
use panchang_search::MonthSystem;
use panchang_vedic::{KaranaInfo, NakshatraInfo, RashiInfo, TithiInfo, YogaInfo};
use serde::Serialize;

/// Classifier output for one pair of longitudes.
#[derive(Debug, Serialize)]
pub struct Classification {
    pub elongation_deg: f64,
    pub tithi: TithiInfo,
    pub karana: KaranaInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub sun_rashi: RashiInfo,
    pub moon_rashi: RashiInfo,
}

pub fn day_text(entry: &DayEntry) -> String {
    let r = &entry.record;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Date        {} ({}, {})",
        r.date,
        r.vaar,
        r.vaar.english_name()
    );
    let _ = writeln!(
        out,
        "Location    {:.4}, {:.4}",
        r.location.latitude_deg, r.location.longitude_deg
    );
    let _ = writeln!(out, "Sunrise     {}", r.sunrise);
    let _ = writeln!(out, "Sunset      {}", r.sunset);
    let _ = writeln!(out, "Tithi       {} [{}]", r.tithi.label, r.tithi.index);
    let _ = writeln!(
        out,
        "Nakshatra   {}, pada {}",
        r.nakshatra.name, r.nakshatra.pada
    );
    let _ = writeln!(out, "Yoga        {}", r.yoga.name);
    let _ = writeln!(out, "Karana      {}", r.karana.name);
    let _ = writeln!(out, "Moon rashi  {}", r.moon_rashi);
    let _ = writeln!(out, "Sun rashi   {}", r.sun_rashi);
    let _ = writeln!(
        out,
        "Month       {} ({}), {} ({})",
        r.lunar_month,
        r.month_system,
        other_month(entry),
        other_system(r.month_system)
    );
    let _ = writeln!(out, "Festivals   {}", festival_list(&entry.festivals));
    if r.is_approximate() {
        let flags = &r.approximate;
        let parts: Vec<&str> = [
            (flags.sunrise, "sunrise"),
            (flags.sunset, "sunset"),
            (flags.amanta_month, "amanta month"),
            (flags.purnimanta_month, "purnimanta month"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();
        let _ = writeln!(out, "Approximate {}", parts.join(", "));
    }
    out
}

/// One line per day.
pub fn month_text(entries: &[DayEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let r = &entry.record;
        let _ = writeln!(
            out,
            "{}  {:<11} {:<24} {:<18} {:<13} {}",
            r.date,
            r.vaar.to_string(),
            r.tithi.label,
            r.nakshatra.name.to_string(),
            r.lunar_month.to_string(),
            festival_list(&entry.festivals)
        );
    }
    out
}

pub fn classification_text(c: &Classification) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Elongation  {:.4}°", c.elongation_deg);
    let _ = writeln!(out, "Tithi       {} [{}]", c.tithi.label(), c.tithi.index);
    let _ = writeln!(out, "Karana      {} [{}]", c.karana.karana, c.karana.index);
    let _ = writeln!(
        out,
        "Nakshatra   {}, pada {}",
        c.nakshatra.nakshatra, c.nakshatra.pada
    );
    let _ = writeln!(out, "Yoga        {} [{}]", c.yoga.yoga, c.yoga.index);
    let _ = writeln!(
        out,
        "Sun rashi   {} {:.2}°",
        c.sun_rashi.rashi, c.sun_rashi.degrees_in_rashi
    );
    let _ = writeln!(
        out,
        "Moon rashi  {} {:.2}°",
        c.moon_rashi.rashi, c.moon_rashi.degrees_in_rashi
    );
    out
}

pub fn festival_list(festivals: &[String]) -> String {
    if festivals.is_empty() {
        "-".to_string()
    } else {
        festivals.join(", ")
    }
}

fn other_system(system: MonthSystem) -> MonthSystem {
    match system {
        MonthSystem::Amanta => MonthSystem::Purnimanta,
        MonthSystem::Purnimanta => MonthSystem::Amanta,
    }
}

fn other_month(entry: &DayEntry) -> panchang_vedic::Masa {
    entry.record.months.month(other_system(entry.record.month_system))
}
