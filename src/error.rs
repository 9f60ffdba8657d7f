//! Error types for the zmanim-core crate.

use chrono::Weekday;

use crate::types::HebrewYearLength;

/// Error type for all fallible operations in the zmanim-core crate.
///
/// An astronomical event that does not happen (polar day or night) is not an
/// error; those calculations return `None` instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZmanimError {
    /// Returned when a latitude falls outside [-90, 90].
    #[error("latitude must be within [-90, 90] degrees, got {latitude}")]
    InvalidLatitude {
        /// The rejected latitude in degrees.
        latitude: f64,
    },

    /// Returned when a longitude falls outside [-180, 180].
    #[error("longitude must be within [-180, 180] degrees, got {longitude}")]
    InvalidLongitude {
        /// The rejected longitude in degrees.
        longitude: f64,
    },

    /// Returned when an elevation is negative or non-finite.
    #[error("elevation must be finite and >= 0 meters, got {elevation}")]
    InvalidElevation {
        /// The rejected elevation in meters.
        elevation: f64,
    },

    /// Returned when a compass direction does not belong to the axis being set.
    #[error("direction {direction} is not valid for {axis}")]
    InvalidDirection {
        /// The axis being set ("latitude" or "longitude").
        axis: &'static str,
        /// The rejected direction.
        direction: &'static str,
    },

    /// Returned when a time zone identifier is not in the IANA database.
    #[error("unknown time zone {name:?}")]
    UnknownTimeZone {
        /// The identifier that failed to resolve.
        name: String,
    },

    /// Returned when a location configuration cannot be parsed.
    #[error("invalid location configuration: {message}")]
    Config {
        /// Parser message.
        message: String,
    },

    /// Returned when the Vincenty inverse iteration does not settle.
    #[error("vincenty formula failed to converge after {iterations} iterations")]
    NonConvergence {
        /// Iterations performed before giving up.
        iterations: u32,
    },

    /// Returned when a Hebrew year has a day count the calendar cannot produce.
    #[error("hebrew year {year} has an impossible length of {days} days")]
    InvalidYearLength {
        /// The Hebrew year.
        year: i64,
        /// The number of days between its Rosh Hashanah and the next.
        days: i64,
    },

    /// Returned when a (leap, length, weekday) triple maps to no year type.
    #[error(
        "no hebrew year type for year {year} (leap: {leap}, length: {length:?}, starts: {weekday})"
    )]
    InvalidClassification {
        /// The Hebrew year.
        year: i64,
        /// Whether the year has thirteen months.
        leap: bool,
        /// Length category of the year.
        length: HebrewYearLength,
        /// Weekday of Rosh Hashanah.
        weekday: Weekday,
    },

    /// Returned when a Hebrew year falls outside the representable range.
    #[error("hebrew year {year} is out of range")]
    HebrewYearOutOfRange {
        /// The rejected Hebrew year.
        year: i64,
    },
}
