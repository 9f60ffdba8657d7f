//! Sunrise and sunset as UTC fractional hours.
//!
//! [`AstronomicalCalculator`] is the seam between the calendar and the solar
//! model; [`NavalAlmanacCalculator`] implements it with the algorithm from
//! the U.S. Naval Observatory's *Almanac for Computers*.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::angles::{
    acos_deg, asin_deg, cos_deg, day_of_year, normalize_angle, rad_to_deg, sin_deg, tan_deg,
    DEGREES_PER_HOUR,
};
use crate::location::GeoLocation;
use crate::types::SunCalculation;
use crate::zenith;

/// A model that finds when the sun crosses a given zenith.
pub trait AstronomicalCalculator {
    fn name(&self) -> &str;

    /// UTC hour (5.75 = 05:45:00) at which the sun crosses `zenith` on
    /// `date`, or `None` if it never does.
    ///
    /// `zenith` is used as given; apply [`AstronomicalCalculator::adjust_zenith`]
    /// first for refraction and elevation.
    fn utc_crossing(
        &self,
        date: NaiveDate,
        longitude: f64,
        latitude: f64,
        zenith: f64,
        kind: SunCalculation,
    ) -> Option<f64>;

    fn adjust_zenith(&self, zenith: f64, elevation_m: f64) -> f64 {
        zenith::adjust_zenith(zenith, elevation_m)
    }

    fn utc_sunrise(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64> {
        utc_event(self, date, location, zenith, adjust_for_elevation, SunCalculation::Sunrise)
    }

    fn utc_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64> {
        utc_event(self, date, location, zenith, adjust_for_elevation, SunCalculation::Sunset)
    }
}

fn utc_event<C: AstronomicalCalculator + ?Sized>(
    calculator: &C,
    date: NaiveDate,
    location: &GeoLocation,
    zenith: f64,
    adjust_for_elevation: bool,
    kind: SunCalculation,
) -> Option<f64> {
    let elevation = if adjust_for_elevation {
        location.elevation()
    } else {
        0.0
    };
    let adjusted = calculator.adjust_zenith(zenith, elevation);
    calculator.utc_crossing(date, location.longitude(), location.latitude(), adjusted, kind)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavalAlmanacCalculator;

impl AstronomicalCalculator for NavalAlmanacCalculator {
    fn name(&self) -> &str {
        "United States Naval Almanac Algorithm"
    }

    fn utc_crossing(
        &self,
        date: NaiveDate,
        longitude: f64,
        latitude: f64,
        zenith: f64,
        kind: SunCalculation,
    ) -> Option<f64> {
        solar_crossing(date, longitude, latitude, zenith, kind)
    }
}

pub fn hours_from_meridian(longitude: f64) -> f64 {
    longitude / DEGREES_PER_HOUR
}

pub fn approx_time_days(day_of_year: i32, hours_from_meridian: f64, kind: SunCalculation) -> f64 {
    let base_hour = match kind {
        SunCalculation::Sunrise => 6.0,
        SunCalculation::Sunset => 18.0,
    };
    day_of_year as f64 + (base_hour - hours_from_meridian) / 24.0
}

pub fn mean_anomaly(approx_time_days: f64) -> f64 {
    0.9856 * approx_time_days - 3.289
}

pub fn sun_true_longitude(mean_anomaly: f64) -> f64 {
    normalize_angle(
        mean_anomaly
            + 1.916 * sin_deg(mean_anomaly)
            + 0.020 * sin_deg(2.0 * mean_anomaly)
            + 282.634,
    )
}

/// Right ascension in hours, placed in the same quadrant as the true
/// longitude.
pub fn sun_right_ascension_hours(true_longitude: f64) -> f64 {
    let mut ra = rad_to_deg((0.91764 * tan_deg(true_longitude)).atan());
    let l_quadrant = (true_longitude / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    ra += l_quadrant - ra_quadrant;
    ra / DEGREES_PER_HOUR
}

pub fn cos_local_hour_angle(true_longitude: f64, latitude: f64, zenith: f64) -> f64 {
    let sin_dec = 0.39782 * sin_deg(true_longitude);
    let cos_dec = cos_deg(asin_deg(sin_dec));
    (cos_deg(zenith) - sin_dec * sin_deg(latitude)) / (cos_dec * cos_deg(latitude))
}

pub fn local_mean_time(local_hour: f64, ra_hours: f64, approx_time_days: f64) -> f64 {
    local_hour + ra_hours - 0.06571 * approx_time_days - 6.622
}

/// UTC hour in `[0, 24)` at which the sun crosses `zenith` on `date`.
///
/// Returns `None` when the sun stays entirely above or below `zenith` for
/// the whole day, as in polar summer or winter.
pub fn solar_crossing(
    date: NaiveDate,
    longitude: f64,
    latitude: f64,
    zenith: f64,
    kind: SunCalculation,
) -> Option<f64> {
    let doy = day_of_year(date.year(), date.month(), date.day());
    let meridian_hours = hours_from_meridian(longitude);
    let t = approx_time_days(doy, meridian_hours, kind);
    let m = mean_anomaly(t);
    let true_long = sun_true_longitude(m);
    let ra_hours = sun_right_ascension_hours(true_long);
    let cos_h = cos_local_hour_angle(true_long, latitude, zenith);

    // cos_h > 1: the sun never climbs to the zenith (polar night for it);
    // cos_h < -1: it never drops to it (polar day).
    if !(-1.0..=1.0).contains(&cos_h) {
        trace!(%date, latitude, zenith, cos_h, ?kind, "sun does not cross zenith");
        return None;
    }
    let local_hour_angle = match kind {
        SunCalculation::Sunrise => 360.0 - acos_deg(cos_h),
        SunCalculation::Sunset => acos_deg(cos_h),
    };
    let local_hour = local_hour_angle / DEGREES_PER_HOUR;
    let lmt = local_mean_time(local_hour, ra_hours, t);
    let utc = (lmt - meridian_hours).rem_euclid(24.0);
    // rem_euclid can round a tiny negative up to exactly 24.0
    Some(if utc >= 24.0 { 0.0 } else { utc })
}
