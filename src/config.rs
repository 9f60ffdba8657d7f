use std::str::FromStr;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::ZmanimError;
use crate::location::{GeoLocation, DEFAULT_LOCATION_NAME};

/// A location as written in a TOML file.
///
/// ```toml
/// name = "Jerusalem"
/// latitude = 31.7683
/// longitude = 35.2137
/// elevation = 754.0
/// timezone = "Asia/Jerusalem"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: f64,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_name() -> String {
    DEFAULT_LOCATION_NAME.to_string()
}
fn default_timezone() -> String {
    "UTC".to_string()
}

impl LocationConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ZmanimError> {
        toml::from_str(toml_str).map_err(|e| ZmanimError::Config {
            message: e.message().to_string(),
        })
    }
}

impl TryFrom<LocationConfig> for GeoLocation {
    type Error = ZmanimError;

    fn try_from(config: LocationConfig) -> Result<Self, Self::Error> {
        let timezone = Tz::from_str(&config.timezone).map_err(|_| ZmanimError::UnknownTimeZone {
            name: config.timezone.clone(),
        })?;
        GeoLocation::new(
            config.name,
            config.latitude,
            config.longitude,
            config.elevation,
            timezone,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_location() {
        let config = LocationConfig::from_toml_str(
            r#"
            name = "Jerusalem"
            latitude = 31.7683
            longitude = 35.2137
            elevation = 754.0
            timezone = "Asia/Jerusalem"
            "#,
        )
        .unwrap();
        let location = GeoLocation::try_from(config).unwrap();
        assert_eq!(location.name(), "Jerusalem");
        assert_eq!(location.elevation(), 754.0);
        assert_eq!(location.timezone(), chrono_tz::Asia::Jerusalem);
    }

    #[test]
    fn defaults_apply() {
        let config = LocationConfig::from_toml_str("latitude = 10.0\nlongitude = 20.0").unwrap();
        assert_eq!(config.name, DEFAULT_LOCATION_NAME);
        assert_eq!(config.elevation, 0.0);
        assert_eq!(config.timezone, "UTC");
    }

    #[test]
    fn unknown_field_rejected() {
        let err = LocationConfig::from_toml_str("latitude = 1.0\nlongitude = 2.0\naltitude = 3.0")
            .unwrap_err();
        assert!(matches!(err, ZmanimError::Config { .. }));
    }

    #[test]
    fn missing_latitude_rejected() {
        let err = LocationConfig::from_toml_str("longitude = 2.0").unwrap_err();
        assert!(matches!(err, ZmanimError::Config { .. }));
    }

    #[test]
    fn unknown_timezone_rejected() {
        let config = LocationConfig::from_toml_str(
            "latitude = 1.0\nlongitude = 2.0\ntimezone = \"Mars/Olympus\"",
        )
        .unwrap();
        assert_eq!(
            GeoLocation::try_from(config).unwrap_err(),
            ZmanimError::UnknownTimeZone {
                name: "Mars/Olympus".to_string()
            }
        );
    }

    #[test]
    fn out_of_range_latitude_rejected() {
        let config = LocationConfig::from_toml_str("latitude = 95.0\nlongitude = 2.0").unwrap();
        assert_eq!(
            GeoLocation::try_from(config).unwrap_err(),
            ZmanimError::InvalidLatitude { latitude: 95.0 }
        );
    }
}
