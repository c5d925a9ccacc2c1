//! Built-in festivals on their almanac dates in New Delhi, computed with
//! the analytic ephemeris.

use std::sync::Arc;

use chrono::NaiveDate;
use panchang_rs::{AnalyticEphemeris, PanchangService};
use panchang_search::MonthSource;
use panchang_vedic::{Masa, Paksha};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service() -> PanchangService<AnalyticEphemeris> {
    PanchangService::new(Arc::new(AnalyticEphemeris::new()))
}

const OBSERVANCES: &[(&str, (i32, u32, u32))] = &[
    ("Makar Sankranti", (2025, 1, 14)),
    ("Maha Shivratri", (2022, 3, 1)),
    ("Holi", (2025, 3, 14)),
    ("Ram Navami", (2025, 4, 6)),
    ("Raksha Bandhan", (2025, 8, 9)),
    ("Krishna Janmashtami", (2023, 9, 7)),
    ("Ganesh Chaturthi", (2025, 8, 27)),
    ("Sharadiya Navratri Begins", (2025, 9, 22)),
    ("Dussehra / Vijayadashami", (2025, 10, 2)),
    ("Karva Chauth", (2025, 10, 10)),
    ("Diwali", (2025, 10, 21)),
    ("Chhath Puja", (2025, 10, 27)),
];

#[test]
fn every_standard_festival_fires_on_its_date() {
    let svc = service();
    for (name, (y, m, d)) in OBSERVANCES {
        let entry = svc.day(date(*y, *m, *d), None).unwrap();
        let rec = &entry.record;
        assert!(
            entry.festivals.iter().any(|f| f == *name),
            "{name} missing on {y}-{m}-{d}: tithi {} ({:?}) month {} via {:?}, got {:?}",
            rec.tithi.name,
            rec.tithi.paksha,
            rec.lunar_month_purnimanta,
            rec.months.purnimanta.source,
            entry.festivals,
        );
    }
}

#[test]
fn off_nakshatra_full_moons_use_the_anchor_table() {
    let svc = service();

    // Full moon 2025-10-07 falls in Revati
    let karva = svc.day(date(2025, 10, 10), None).unwrap().record;
    assert_eq!(karva.months.purnimanta.source, MonthSource::FullMoonAnchor);
    assert_eq!(karva.months.purnimanta.base, Masa::Ashwin);
    assert_eq!(karva.lunar_month_purnimanta, Masa::Kartika);
    assert!(!karva.approximate.purnimanta_month);

    // Full moon 2023-08-31 falls in Shatabhisha
    let janmashtami = svc.day(date(2023, 9, 7), None).unwrap().record;
    assert_eq!(janmashtami.months.purnimanta.source, MonthSource::FullMoonAnchor);
    assert_eq!(janmashtami.months.purnimanta.base, Masa::Shravana);
    assert_eq!(janmashtami.lunar_month_purnimanta, Masa::Bhadrapada);
}

#[test]
fn shukla_days_carry_the_previous_full_moons_month() {
    let svc = service();
    // Ganesh Chaturthi follows the Shravana full moon of 2025-08-09
    let rec = svc.day(date(2025, 8, 27), None).unwrap().record;
    assert_eq!(rec.tithi.paksha, Paksha::Shukla);
    assert_eq!(rec.tithi.tithi_in_paksha, 4);
    assert_eq!(rec.lunar_month_purnimanta, Masa::Shravana);
    // The amanta month agrees during the bright half
    assert_eq!(rec.lunar_month_amanta, Masa::Shravana);
}

#[test]
fn day_before_an_observance_is_quiet() {
    let svc = service();
    for (name, (y, m, d)) in OBSERVANCES.iter().filter(|(n, _)| *n != "Makar Sankranti") {
        let before = date(*y, *m, *d).pred_opt().unwrap();
        let festivals = svc.festivals(before, None).unwrap();
        assert!(!festivals.iter().any(|f| f == *name), "{name} fired early on {before}");
    }
}
