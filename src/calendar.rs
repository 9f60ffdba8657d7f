//! Named solar events in a location's local time.
//!
//! Every method takes the location and the date it is asked about. The
//! calendar itself only holds the [`AstronomicalCalculator`] it delegates to.

use chrono::{DateTime, NaiveDate, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::location::GeoLocation;
use crate::solar::{AstronomicalCalculator, NavalAlmanacCalculator};
use crate::zenith;

#[derive(Debug, Clone, Default)]
pub struct AstronomicalCalendar<C = NavalAlmanacCalculator> {
    calculator: C,
}

impl AstronomicalCalendar<NavalAlmanacCalculator> {
    pub fn new() -> Self {
        Self {
            calculator: NavalAlmanacCalculator,
        }
    }
}

impl<C: AstronomicalCalculator> AstronomicalCalendar<C> {
    pub fn with_calculator(calculator: C) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// UTC sunrise hour for `zenith`, corrected for the location's elevation.
    pub fn utc_sunrise(&self, location: &GeoLocation, date: NaiveDate, zenith: f64) -> Option<f64> {
        self.calculator.utc_sunrise(date, location, zenith, true)
    }

    /// UTC sunrise hour for `zenith` as seen from sea level.
    pub fn utc_sea_level_sunrise(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
        zenith: f64,
    ) -> Option<f64> {
        self.calculator.utc_sunrise(date, location, zenith, false)
    }

    pub fn utc_sunset(&self, location: &GeoLocation, date: NaiveDate, zenith: f64) -> Option<f64> {
        self.calculator.utc_sunset(date, location, zenith, true)
    }

    pub fn utc_sea_level_sunset(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
        zenith: f64,
    ) -> Option<f64> {
        self.calculator.utc_sunset(date, location, zenith, false)
    }

    /// Sunrise at the location's elevation: the upper limb of the sun on the
    /// visible horizon, about 90.833° from the vertical at sea level.
    pub fn sunrise(&self, location: &GeoLocation, date: NaiveDate) -> Option<DateTime<Tz>> {
        let time = self.utc_sunrise(location, date, zenith::GEOMETRIC)?;
        date_from_time(time, date, location.timezone())
    }

    /// Sunrise ignoring elevation. Dawn calculations are dips below this.
    pub fn sea_level_sunrise(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Option<DateTime<Tz>> {
        let time = self.utc_sea_level_sunrise(location, date, zenith::GEOMETRIC)?;
        date_from_time(time, date, location.timezone())
    }

    /// When the rising sun crosses `offset_zenith`, e.g. 106.1 for 16.1°
    /// below the horizon.
    pub fn sunrise_offset_by_degrees(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
        offset_zenith: f64,
    ) -> Option<DateTime<Tz>> {
        let time = self.utc_sunrise(location, date, offset_zenith)?;
        date_from_time(time, date, location.timezone())
    }

    pub fn sunset(&self, location: &GeoLocation, date: NaiveDate) -> Option<DateTime<Tz>> {
        let time = self.utc_sunset(location, date, zenith::GEOMETRIC)?;
        let sunset = date_from_time(time, date, location.timezone())?;
        Some(adjusted_sunset(sunset, self.sunrise(location, date).as_ref()))
    }

    pub fn sea_level_sunset(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Option<DateTime<Tz>> {
        let time = self.utc_sea_level_sunset(location, date, zenith::GEOMETRIC)?;
        let sunset = date_from_time(time, date, location.timezone())?;
        Some(adjusted_sunset(
            sunset,
            self.sea_level_sunrise(location, date).as_ref(),
        ))
    }

    /// When the setting sun crosses `offset_zenith`. For 14° after sunset
    /// pass `GEOMETRIC + 14.0`.
    pub fn sunset_offset_by_degrees(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
        offset_zenith: f64,
    ) -> Option<DateTime<Tz>> {
        let time = self.utc_sunset(location, date, offset_zenith)?;
        let sunset = date_from_time(time, date, location.timezone())?;
        Some(adjusted_sunset(sunset, self.sunrise(location, date).as_ref()))
    }

    pub fn begin_civil_twilight(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(location, date, zenith::CIVIL)
    }

    pub fn end_civil_twilight(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(location, date, zenith::CIVIL)
    }

    pub fn begin_nautical_twilight(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(location, date, zenith::NAUTICAL)
    }

    pub fn end_nautical_twilight(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(location, date, zenith::NAUTICAL)
    }

    pub fn begin_astronomical_twilight(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(location, date, zenith::ASTRONOMICAL)
    }

    pub fn end_astronomical_twilight(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(location, date, zenith::ASTRONOMICAL)
    }

    /// Solar noon, taken as halfway between sea-level sunrise and sunset.
    ///
    /// This drifts slightly from the true meridian transit as the day
    /// lengthens or shortens.
    pub fn sun_transit(&self, location: &GeoLocation, date: NaiveDate) -> Option<DateTime<Tz>> {
        let sunrise = self.sea_level_sunrise(location, date);
        let sunset = self.sea_level_sunset(location, date);
        let hour = temporal_hour(sunrise.as_ref(), sunset.as_ref())?;
        sunrise.map(|rise| rise + hour * 6)
    }
}

/// Rolls `sunset` forward one day when it falls before `sunrise`.
///
/// This happens for deep twilight dips in zones far from their 15° meridian
/// and for shallow dips near the poles.
pub fn adjusted_sunset(sunset: DateTime<Tz>, sunrise: Option<&DateTime<Tz>>) -> DateTime<Tz> {
    match sunrise {
        Some(rise) if *rise > sunset => {
            debug!(%sunset, sunrise = %rise, "sunset precedes sunrise, rolling forward a day");
            sunset + TimeDelta::days(1)
        }
        _ => sunset,
    }
}

/// One twelfth of the span from `sunrise` to `sunset`.
pub fn temporal_hour(
    sunrise: Option<&DateTime<Tz>>,
    sunset: Option<&DateTime<Tz>>,
) -> Option<TimeDelta> {
    let (rise, set) = (sunrise?, sunset?);
    Some(set.signed_duration_since(*rise) / 12)
}

/// Places a UTC fractional hour on `date` and expresses it in `tz`.
///
/// Hours, minutes and seconds are each truncated, never rounded. When the
/// zone's offset pushes the local time past midnight either way, the UTC
/// date is moved so the event stays on the requested local day. Returns
/// `None` if `time` is outside `[0, 24)`.
///
/// The offset is compared in whole hours, so in zones with a fractional-hour
/// offset (such as Asia/Kolkata at +05:30) an event within that fraction of
/// local midnight can land on the next or previous local day.
pub fn date_from_time(time: f64, date: NaiveDate, tz: Tz) -> Option<DateTime<Tz>> {
    if !(0.0..24.0).contains(&time) {
        return None;
    }
    let hours = time.trunc();
    let fraction = (time - hours) * 60.0;
    let minutes = fraction.trunc();
    let seconds = ((fraction - minutes) * 60.0).trunc();
    let naive = date.and_hms_opt(hours as u32, minutes as u32, seconds as u32)?;
    let mut utc = Utc.from_utc_datetime(&naive);

    let offset_hours = (tz.offset_from_utc_date(&date).fix().local_minus_utc() / 3600) as f64;
    if time + offset_hours > 24.0 {
        utc -= TimeDelta::days(1);
    } else if time + offset_hours < 0.0 {
        utc += TimeDelta::days(1);
    }
    Some(utc.with_timezone(&tz))
}
