mod common;

use chrono::NaiveDate;
use common::{BrokenEphemeris, CountingEphemeris, EmptyEphemeris, LinearEphemeris};
use panchang_ephem::GeoLocation;
use panchang_search::{MonthSystem, PanchangConfig, SearchError, compute_panchang};
use panchang_time::Moment;
use panchang_vedic::{Karana, Paksha, TithiName, Vaar};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn empty_adapter_uses_fallback_sunrise_and_flags_it() {
    let eph = EmptyEphemeris {
        sun: 200.0,
        moon: 200.0,
    };
    let d = date(2024, 1, 14);
    let rec = compute_panchang(
        &eph,
        d,
        &GeoLocation::DEFAULT,
        MonthSystem::Purnimanta,
        &PanchangConfig::default(),
    )
    .unwrap();

    assert_eq!(rec.sunrise, Moment::from_date_time(d, 6, 0, 0.0).unwrap());
    assert_eq!(rec.sunset, Moment::from_date_time(d, 18, 0, 0.0).unwrap());
    assert!(rec.approximate.sunrise);
    assert!(rec.approximate.sunset);
    assert!(rec.approximate.amanta_month);
    assert!(rec.approximate.purnimanta_month);
    assert!(rec.is_approximate());
}

#[test]
fn zero_separation_is_shukla_pratipada() {
    let eph = EmptyEphemeris {
        sun: 123.0,
        moon: 123.0,
    };
    let rec = compute_panchang(
        &eph,
        date(2024, 5, 1),
        &GeoLocation::DEFAULT,
        MonthSystem::Amanta,
        &PanchangConfig::default(),
    )
    .unwrap();
    assert_eq!(rec.tithi.index, 1);
    assert_eq!(rec.tithi.name, TithiName::Pratipada);
    assert_eq!(rec.tithi.paksha, Paksha::Shukla);
    assert_eq!(rec.tithi.label, "Pratipada (Shukla)");
    assert_eq!(rec.karana.index, 1);
    assert_eq!(rec.karana.name, Karana::Bava);
}

#[test]
fn record_is_idempotent() {
    let eph = LinearEphemeris::new(280.0, 100.0);
    let cfg = PanchangConfig::default();
    let d = date(2024, 2, 3);
    let a = compute_panchang(&eph, d, &GeoLocation::DEFAULT, MonthSystem::Purnimanta, &cfg).unwrap();
    let b = compute_panchang(&eph, d, &GeoLocation::DEFAULT, MonthSystem::Purnimanta, &cfg).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn month_system_selects_month() {
    let eph = LinearEphemeris::new(280.0, 100.0);
    let cfg = PanchangConfig::default();
    for day in 1..=30 {
        let d = date(2024, 3, day);
        let am = compute_panchang(&eph, d, &GeoLocation::DEFAULT, MonthSystem::Amanta, &cfg).unwrap();
        let pu =
            compute_panchang(&eph, d, &GeoLocation::DEFAULT, MonthSystem::Purnimanta, &cfg).unwrap();
        assert_eq!(am.lunar_month, am.lunar_month_amanta);
        assert_eq!(pu.lunar_month, pu.lunar_month_purnimanta);
        assert_eq!(am.lunar_month_purnimanta, pu.lunar_month_purnimanta);
        assert_eq!(am.sunrise, pu.sunrise);
        assert!(!pu.approximate.sunrise);
    }
}

#[test]
fn vaar_is_civil_weekday() {
    let eph = LinearEphemeris::new(280.0, 100.0);
    let rec = compute_panchang(
        &eph,
        date(2024, 1, 14),
        &GeoLocation::DEFAULT,
        MonthSystem::Purnimanta,
        &PanchangConfig::default(),
    )
    .unwrap();
    assert_eq!(rec.vaar, Vaar::Ravivaar);
}

#[test]
fn bad_location_rejected_before_any_query() {
    let eph = CountingEphemeris::new(LinearEphemeris::new(0.0, 0.0));
    let err = compute_panchang(
        &eph,
        date(2024, 1, 1),
        &GeoLocation::new(95.0, 0.0, 0.0),
        MonthSystem::Amanta,
        &PanchangConfig::default(),
    );
    assert!(matches!(err, Err(SearchError::InvalidInput(_))));
    assert_eq!(eph.calls(), 0);

    let err = compute_panchang(
        &eph,
        date(2024, 1, 1),
        &GeoLocation::new(0.0, f64::NAN, 0.0),
        MonthSystem::Amanta,
        &PanchangConfig::default(),
    );
    assert!(matches!(err, Err(SearchError::InvalidInput(_))));
    assert_eq!(eph.calls(), 0);
}

#[test]
fn bad_config_rejected() {
    let mut cfg = PanchangConfig::default();
    cfg.phase_search.step_days = 0.0;
    let err = compute_panchang(
        &LinearEphemeris::new(0.0, 0.0),
        date(2024, 1, 1),
        &GeoLocation::DEFAULT,
        MonthSystem::Amanta,
        &cfg,
    );
    assert!(matches!(err, Err(SearchError::InvalidInput(_))));
}

#[test]
fn failed_sunrise_lookup_propagates() {
    let err = compute_panchang(
        &BrokenEphemeris,
        date(2024, 1, 1),
        &GeoLocation::DEFAULT,
        MonthSystem::Amanta,
        &PanchangConfig::default(),
    );
    assert!(matches!(err, Err(SearchError::Ephemeris(_))));
}

#[test]
fn serialized_record_keeps_nested_fields() {
    let eph = LinearEphemeris::new(280.0, 100.0);
    let rec = compute_panchang(
        &eph,
        date(2024, 1, 14),
        &GeoLocation::DEFAULT,
        MonthSystem::Purnimanta,
        &PanchangConfig::default(),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["date"], "2024-01-14");
    assert_eq!(json["month_system"], "purnimanta");
    assert_eq!(json["tithi"]["paksha"], rec.tithi.paksha.name());
    assert!(json["tithi"]["index"].is_u64());
    assert!(json["nakshatra"]["pada"].is_u64());
    assert!(json["karana"]["name"].is_string());
    assert!(json["sunrise"].as_str().unwrap().ends_with('Z'));
    assert_eq!(json["approximate"]["sunrise"], false);
}
