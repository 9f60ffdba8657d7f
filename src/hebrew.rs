//! Hebrew calendar year arithmetic and year-type classification.
//!
//! Rosh Hashanah is found from the mean molad of Tishrei and the four
//! postponement rules (dechiyot). Day counts are Rata Die: day 1 is
//! January 1 of year 1 in the proleptic Gregorian calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, warn};

use crate::error::ZmanimError;
use crate::types::{HebrewYearLength, HebrewYearType};

/// Rata Die of the day before the Hebrew calendar's first day.
pub const JEWISH_EPOCH: i64 = -1_373_429;

pub const CHALAKIM_PER_MINUTE: i64 = 18;
pub const CHALAKIM_PER_HOUR: i64 = CHALAKIM_PER_MINUTE * 60;
pub const CHALAKIM_PER_DAY: i64 = CHALAKIM_PER_HOUR * 24;
/// (29 days + 12 hours) and 793 chalakim.
pub const CHALAKIM_PER_MONTH: i64 = 765_433;
/// Molad BaHaRaD: 1 day, 5 hours, 204 chalakim after the epoch's Sunday.
pub const CHALAKIM_MOLAD_TOHU: i64 = 31_524;

/// Anno Mundi 1; earlier years have no Rosh Hashanah to anchor on.
pub const FIRST_SUPPORTED_YEAR: i64 = 1;
/// Last year whose Rosh Hashanah is representable as a [`NaiveDate`].
pub const LAST_SUPPORTED_YEAR: i64 = 265_900;

pub fn is_hebrew_leap_year(year: i64) -> bool {
    (7 * year.rem_euclid(19) + 1) % 19 < 7
}

fn check_year(year: i64) -> Result<i64, ZmanimError> {
    if (FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(ZmanimError::HebrewYearOutOfRange { year })
    }
}

/// Months from molad tohu to Tishrei of `year`.
fn months_elapsed(year: i64) -> i64 {
    let years = year - 1;
    235 * years.div_euclid(19)
        + 12 * years.rem_euclid(19)
        + (7 * years.rem_euclid(19) + 1) / 19
}

/// Days from the epoch to Rosh Hashanah of `year`, after postponements.
///
/// Callers keep `year` within the supported range.
fn elapsed_days(year: i64) -> i64 {
    let chalakim = CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed(year);
    let molad_day = chalakim.div_euclid(CHALAKIM_PER_DAY);
    let molad_parts = chalakim.rem_euclid(CHALAKIM_PER_DAY);

    let mut day = molad_day;
    let weekday = molad_day.rem_euclid(7);
    // molad zaken: molad at or after noon (18 hours after 6pm)
    let zaken = molad_parts >= 19_440;
    // GaTaRaD: Tuesday 9h 204p or later in a common year
    let gatarad = weekday == 2 && molad_parts >= 9_924 && !is_hebrew_leap_year(year);
    // BeTUTaKPaT: Monday 15h 589p or later following a leap year
    let betutakpat = weekday == 1 && molad_parts >= 16_789 && is_hebrew_leap_year(year - 1);
    if zaken || gatarad || betutakpat {
        day += 1;
    }
    // lo ADU rosh: never Sunday, Wednesday or Friday
    if matches!(day.rem_euclid(7), 0 | 3 | 5) {
        day += 1;
    }
    day
}

fn rosh_hashanah_rata_die(year: i64) -> i64 {
    elapsed_days(year) + JEWISH_EPOCH + 1
}

fn date_from_rata_die(rata_die: i64, year: i64) -> Result<NaiveDate, ZmanimError> {
    i32::try_from(rata_die)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(ZmanimError::HebrewYearOutOfRange { year })
}

/// Gregorian date of 1 Tishrei of Hebrew `year`.
///
/// # Errors
///
/// Returns [`ZmanimError::HebrewYearOutOfRange`] outside
/// [`FIRST_SUPPORTED_YEAR`]..=[`LAST_SUPPORTED_YEAR`].
pub fn rosh_hashanah(year: i64) -> Result<NaiveDate, ZmanimError> {
    let year = check_year(year)?;
    date_from_rata_die(rosh_hashanah_rata_die(year), year)
}

/// The Hebrew year that contains the Gregorian `date`.
pub fn hebrew_year_of(date: NaiveDate) -> Result<i64, ZmanimError> {
    // Rosh Hashanah always falls in September or October.
    let later = date.year() as i64 + 3761;
    let year = if i64::from(date.num_days_from_ce()) >= rosh_hashanah_rata_die(later) {
        later
    } else {
        later - 1
    };
    check_year(year)
}

pub fn days_in_hebrew_year(year: i64) -> Result<i64, ZmanimError> {
    let year = check_year(year)?;
    Ok(elapsed_days(year + 1) - elapsed_days(year))
}

/// Length category of a Hebrew year with `days` days.
///
/// The last digit of a year's length is always 3, 4 or 5.
pub fn year_length_category(year: i64, days: i64) -> Result<HebrewYearLength, ZmanimError> {
    match days % 10 {
        3 => Ok(HebrewYearLength::Short),
        4 => Ok(HebrewYearLength::Regular),
        5 => Ok(HebrewYearLength::Long),
        _ => Err(ZmanimError::InvalidYearLength { year, days }),
    }
}

pub fn hebrew_year_length(date: NaiveDate) -> Result<HebrewYearLength, ZmanimError> {
    let year = hebrew_year_of(date)?;
    year_length_category(year, days_in_hebrew_year(year)?)
}

pub fn is_hebrew_leap_year_of(date: NaiveDate) -> Result<bool, ZmanimError> {
    hebrew_year_of(date).map(is_hebrew_leap_year)
}

pub fn first_weekday_of_hebrew_year(date: NaiveDate) -> Result<Weekday, ZmanimError> {
    let year = hebrew_year_of(date)?;
    rosh_hashanah(year).map(|d| d.weekday())
}

/// Classifies Hebrew `year` by leap status, length and first weekday.
///
/// # Errors
///
/// Returns [`ZmanimError::InvalidClassification`] if the combination is not
/// one of the fourteen possible year types.
pub fn classify_year(year: i64) -> Result<HebrewYearType, ZmanimError> {
    let start = rosh_hashanah(year)?;
    let days = days_in_hebrew_year(year)?;
    let length = year_length_category(year, days)?;
    let leap = is_hebrew_leap_year(year);
    let weekday = start.weekday();

    match HebrewYearType::from_parts(leap, length, weekday) {
        Some(year_type) => {
            debug!(year, days, leap, %weekday, ?year_type, "classified hebrew year");
            Ok(year_type)
        }
        None => {
            warn!(year, days, leap, %weekday, "hebrew year matches no year type");
            Err(ZmanimError::InvalidClassification {
                year,
                leap,
                length,
                weekday,
            })
        }
    }
}

/// Classifies the Hebrew year containing the Gregorian `date`.
pub fn classify(date: NaiveDate) -> Result<HebrewYearType, ZmanimError> {
    classify_year(hebrew_year_of(date)?)
}
