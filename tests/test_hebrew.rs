use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};

use zmanim_core::hebrew::{year_length_category, LAST_SUPPORTED_YEAR};
use zmanim_core::{
    classify, classify_year, days_in_hebrew_year, first_weekday_of_hebrew_year,
    hebrew_year_length, hebrew_year_of, is_hebrew_leap_year, is_hebrew_leap_year_of,
    rosh_hashanah, HebrewYearLength, HebrewYearType, ZmanimError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Rosh Hashanah ──

#[test]
fn test_rosh_hashanah_known_dates() {
    let cases = [
        (5780, date(2019, 9, 30)),
        (5781, date(2020, 9, 19)),
        (5782, date(2021, 9, 7)),
        (5783, date(2022, 9, 26)),
        (5784, date(2023, 9, 16)),
        (5785, date(2024, 10, 3)),
        (5786, date(2025, 9, 23)),
        (5787, date(2026, 9, 12)),
        (5788, date(2027, 10, 2)),
        (5789, date(2028, 9, 21)),
    ];
    for (year, expected) in cases {
        assert_eq!(rosh_hashanah(year).unwrap(), expected, "year {year}");
    }
}

#[test]
fn test_rosh_hashanah_never_sun_wed_fri() {
    for year in 5000..6000 {
        let weekday = chrono::Datelike::weekday(&rosh_hashanah(year).unwrap());
        assert!(
            !matches!(weekday, Weekday::Sun | Weekday::Wed | Weekday::Fri),
            "year {year} starts on {weekday}"
        );
    }
}

#[test]
fn test_rosh_hashanah_rejects_year_zero() {
    assert_eq!(rosh_hashanah(0), Err(ZmanimError::HebrewYearOutOfRange { year: 0 }));
}

#[test]
fn test_rosh_hashanah_rejects_huge_year() {
    let huge = 2_000_000_000_000;
    assert_eq!(rosh_hashanah(huge), Err(ZmanimError::HebrewYearOutOfRange { year: huge }));
    assert_eq!(classify_year(huge), Err(ZmanimError::HebrewYearOutOfRange { year: huge }));
    assert!(days_in_hebrew_year(i64::MAX).is_err());
    assert!(classify_year(i64::MIN).is_err());
    assert_eq!(is_hebrew_leap_year(i64::MAX), is_hebrew_leap_year(17));
}

#[test]
fn test_last_supported_year() {
    assert!(rosh_hashanah(LAST_SUPPORTED_YEAR).is_ok());
    assert!(days_in_hebrew_year(LAST_SUPPORTED_YEAR).is_ok());
    assert_eq!(
        rosh_hashanah(LAST_SUPPORTED_YEAR + 1),
        Err(ZmanimError::HebrewYearOutOfRange { year: LAST_SUPPORTED_YEAR + 1 })
    );
}

// ── Year of date ──

#[test]
fn test_hebrew_year_of_boundary() {
    assert_eq!(hebrew_year_of(date(2024, 10, 2)).unwrap(), 5784);
    assert_eq!(hebrew_year_of(date(2024, 10, 3)).unwrap(), 5785);
    assert_eq!(hebrew_year_of(date(2025, 1, 1)).unwrap(), 5785);
    assert_eq!(hebrew_year_of(date(2025, 9, 22)).unwrap(), 5785);
    assert_eq!(hebrew_year_of(date(2025, 9, 23)).unwrap(), 5786);
}

// ── Leap years and lengths ──

#[test]
fn test_leap_cycle_positions() {
    // years 3, 6, 8, 11, 14, 17 and 19 of each 19-year cycle
    let leaps: Vec<i64> = (5701..=5719).filter(|&y| is_hebrew_leap_year(y)).collect();
    assert_eq!(leaps, vec![5703, 5706, 5708, 5711, 5714, 5717, 5719]);
}

#[test]
fn test_year_lengths() {
    assert_eq!(days_in_hebrew_year(5784), Ok(383));
    assert_eq!(days_in_hebrew_year(5785), Ok(355));
    assert_eq!(days_in_hebrew_year(5786), Ok(354));
    assert_eq!(days_in_hebrew_year(5787), Ok(385));
    assert_eq!(days_in_hebrew_year(5781), Ok(353));
}

#[test]
fn test_length_category() {
    assert_eq!(year_length_category(5781, 353), Ok(HebrewYearLength::Short));
    assert_eq!(year_length_category(5782, 384), Ok(HebrewYearLength::Regular));
    assert_eq!(year_length_category(5787, 385), Ok(HebrewYearLength::Long));
    assert_eq!(
        year_length_category(1, 356),
        Err(ZmanimError::InvalidYearLength { year: 1, days: 356 })
    );
}

#[test]
fn test_date_queries() {
    let d = date(2024, 12, 25);
    assert_eq!(hebrew_year_length(d).unwrap(), HebrewYearLength::Long);
    assert!(!is_hebrew_leap_year_of(d).unwrap());
    assert_eq!(first_weekday_of_hebrew_year(d).unwrap(), Weekday::Thu);
    assert!(is_hebrew_leap_year_of(date(2024, 3, 20)).unwrap());
}

// ── Classification ──

#[test]
fn test_classify_known_years() {
    let cases = [
        (5780, HebrewYearType::E),
        (5781, HebrewYearType::B),
        (5782, HebrewYearType::K),
        (5783, HebrewYearType::E),
        (5784, HebrewYearType::J),
        (5785, HebrewYearType::F),
        (5786, HebrewYearType::C),
        (5787, HebrewYearType::N),
        (5788, HebrewYearType::G),
        (5789, HebrewYearType::D),
    ];
    for (year, expected) in cases {
        assert_eq!(classify_year(year).unwrap(), expected, "year {year}");
    }
}

#[test]
fn test_classify_by_date() {
    assert_eq!(classify(date(2024, 10, 2)).unwrap(), HebrewYearType::J);
    assert_eq!(classify(date(2024, 10, 3)).unwrap(), HebrewYearType::F);
}

#[test]
fn test_every_year_classifies() {
    let mut counts = BTreeMap::new();
    for year in 5700..=5900 {
        let year_type = classify_year(year).unwrap_or_else(|e| panic!("year {year}: {e}"));
        assert_eq!(Ok(year_type.days()), days_in_hebrew_year(year), "year {year}");
        assert_eq!(year_type.is_leap(), is_hebrew_leap_year(year), "year {year}");
        *counts.entry(year_type).or_insert(0) += 1;
    }
    let expected = [
        (HebrewYearType::A, 11),
        (HebrewYearType::B, 7),
        (HebrewYearType::C, 12),
        (HebrewYearType::D, 39),
        (HebrewYearType::E, 23),
        (HebrewYearType::F, 6),
        (HebrewYearType::G, 29),
        (HebrewYearType::H, 13),
        (HebrewYearType::I, 8),
        (HebrewYearType::J, 12),
        (HebrewYearType::K, 9),
        (HebrewYearType::L, 9),
        (HebrewYearType::M, 15),
        (HebrewYearType::N, 8),
    ];
    assert_eq!(counts, BTreeMap::from(expected));
}

#[test]
fn test_year_type_parts_round_trip() {
    for year_type in HebrewYearType::ALL {
        assert_eq!(
            HebrewYearType::from_parts(
                year_type.is_leap(),
                year_type.length(),
                year_type.first_weekday()
            ),
            Some(year_type)
        );
    }
}

#[test]
fn test_impossible_combinations() {
    assert_eq!(HebrewYearType::from_parts(false, HebrewYearLength::Regular, Weekday::Mon), None);
    assert_eq!(HebrewYearType::from_parts(false, HebrewYearLength::Short, Weekday::Tue), None);
    assert_eq!(HebrewYearType::from_parts(true, HebrewYearLength::Regular, Weekday::Thu), None);
    assert_eq!(HebrewYearType::from_parts(true, HebrewYearLength::Long, Weekday::Wed), None);
}
