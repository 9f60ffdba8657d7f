use chrono::{NaiveDate, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::ZmanimError;
use crate::types::Direction;

pub const DEFAULT_LOCATION_NAME: &str = "Unspecified Location";

/// A point on the earth together with the civil time zone used to report
/// events there.
///
/// Values are immutable once built; the `with_*` methods return a new
/// location.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    name: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    timezone: Tz,
}

impl GeoLocation {
    /// # Errors
    ///
    /// Returns [`ZmanimError`] if latitude, longitude or elevation is out of
    /// range or not finite.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        timezone: Tz,
    ) -> Result<Self, ZmanimError> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        if !elevation.is_finite() || elevation < 0.0 {
            return Err(ZmanimError::InvalidElevation { elevation });
        }
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            elevation,
            timezone,
        })
    }

    /// Greenwich observatory at sea level, reported in UTC.
    pub fn greenwich() -> Self {
        Self {
            name: "Greenwich, England".to_string(),
            latitude: 51.4772,
            longitude: 0.0,
            elevation: 0.0,
            timezone: Tz::UTC,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Replaces the latitude with one given as degrees, minutes and seconds.
    ///
    /// The magnitude must lie in [0, 90]; use [`Direction::South`] rather
    /// than negative values.
    pub fn with_latitude_dms(
        &self,
        degrees: f64,
        minutes: f64,
        seconds: f64,
        direction: Direction,
    ) -> Result<Self, ZmanimError> {
        let magnitude = dms_to_degrees(degrees, minutes, seconds);
        if !(0.0..=90.0).contains(&magnitude) {
            warn!(
                latitude = magnitude,
                "latitude must be between 0 and 90, use South for negative values"
            );
            return Err(ZmanimError::InvalidLatitude { latitude: magnitude });
        }
        let latitude = match direction {
            Direction::North => magnitude,
            Direction::South => -magnitude,
            Direction::East | Direction::West => {
                warn!(direction = direction.name(), "latitude direction must be North or South");
                return Err(ZmanimError::InvalidDirection {
                    axis: "latitude",
                    direction: direction.name(),
                });
            }
        };
        Ok(Self {
            latitude,
            ..self.clone()
        })
    }

    /// Replaces the longitude with one given as degrees, minutes and seconds.
    ///
    /// The magnitude must lie in [0, 180]; use [`Direction::West`] rather
    /// than negative values.
    pub fn with_longitude_dms(
        &self,
        degrees: f64,
        minutes: f64,
        seconds: f64,
        direction: Direction,
    ) -> Result<Self, ZmanimError> {
        let magnitude = dms_to_degrees(degrees, minutes, seconds);
        if !(0.0..=180.0).contains(&magnitude) {
            warn!(
                longitude = magnitude,
                "longitude must be between 0 and 180, use West for negative values"
            );
            return Err(ZmanimError::InvalidLongitude { longitude: magnitude });
        }
        let longitude = match direction {
            Direction::East => magnitude,
            Direction::West => -magnitude,
            Direction::North | Direction::South => {
                warn!(direction = direction.name(), "longitude direction must be East or West");
                return Err(ZmanimError::InvalidDirection {
                    axis: "longitude",
                    direction: direction.name(),
                });
            }
        };
        Ok(Self {
            longitude,
            ..self.clone()
        })
    }

    pub fn with_elevation(&self, elevation: f64) -> Result<Self, ZmanimError> {
        Self::new(self.name.clone(), self.latitude, self.longitude, elevation, self.timezone)
    }

    pub fn with_timezone(&self, timezone: Tz) -> Self {
        Self {
            timezone,
            ..self.clone()
        }
    }

    /// Offset of local mean solar time from the zone's clock time on `date`:
    /// four minutes per degree of longitude minus the zone's UTC offset.
    pub fn local_mean_time_offset(&self, date: NaiveDate) -> TimeDelta {
        let lmt_millis = (self.longitude * 4.0 * 60.0 * 1000.0).round() as i64;
        let utc_offset_secs = self
            .timezone
            .offset_from_utc_date(&date)
            .fix()
            .local_minus_utc();
        TimeDelta::milliseconds(lmt_millis) - TimeDelta::seconds(utc_offset_secs as i64)
    }
}

fn validate_latitude(latitude: f64) -> Result<(), ZmanimError> {
    if latitude.is_finite() && (-90.0..=90.0).contains(&latitude) {
        Ok(())
    } else {
        warn!(latitude, "rejected latitude outside [-90, 90]");
        Err(ZmanimError::InvalidLatitude { latitude })
    }
}

fn validate_longitude(longitude: f64) -> Result<(), ZmanimError> {
    if longitude.is_finite() && (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        warn!(longitude, "rejected longitude outside [-180, 180]");
        Err(ZmanimError::InvalidLongitude { longitude })
    }
}

fn dms_to_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}
