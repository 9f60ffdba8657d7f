//! Zenith presets and the refraction/elevation correction applied to sunrise
//! and sunset.
//!
//! A zenith is measured in degrees from the vertical, so 90° is the
//! mathematical horizon and twilight presets lie further below it.

use crate::angles;

/// The sun's center on the mathematical horizon.
pub const GEOMETRIC: f64 = 90.0;
pub const CIVIL: f64 = 96.0;
pub const NAUTICAL: f64 = 102.0;
pub const ASTRONOMICAL: f64 = 108.0;

/// Mean solar radius in degrees (16 arcminutes).
pub const SOLAR_RADIUS: f64 = 16.0 / 60.0;

/// Mean horizontal refraction in degrees (34 arcminutes).
pub const REFRACTION: f64 = 34.0 / 60.0;

pub const EARTH_RADIUS_KM: f64 = 6356.9;

// Halachic dawn and nightfall dips, expressed as absolute zeniths.

/// 72 minutes before sunrise in Jerusalem at the equinox.
pub const SIXTEEN_POINT_ONE: f64 = GEOMETRIC + 16.1;
pub const EIGHT_POINT_FIVE: f64 = GEOMETRIC + 8.5;
pub const THREE_POINT_SEVEN: f64 = GEOMETRIC + 3.7;
pub const FIVE_POINT_NINETY_FIVE: f64 = GEOMETRIC + 5.95;
/// 7°5′, often quoted as 7.083°.
pub const SEVEN_POINT_ZERO_EIGHT_THREE: f64 = GEOMETRIC + 7.0 + 5.0 / 60.0;
pub const TEN_POINT_TWO: f64 = GEOMETRIC + 10.2;
pub const ELEVEN: f64 = GEOMETRIC + 11.0;
pub const ELEVEN_POINT_FIVE: f64 = GEOMETRIC + 11.5;
pub const THIRTEEN: f64 = GEOMETRIC + 13.0;
pub const THIRTEEN_POINT_TWENTY_FOUR: f64 = GEOMETRIC + 13.24;
pub const NINETEEN_POINT_EIGHT: f64 = GEOMETRIC + 19.8;
pub const TWENTY_SIX: f64 = GEOMETRIC + 26.0;
pub const FOUR_POINT_THIRTY_SEVEN: f64 = GEOMETRIC + 4.37;
pub const FOUR_POINT_SIXTY_ONE: f64 = GEOMETRIC + 4.61;
pub const FOUR_POINT_EIGHT: f64 = GEOMETRIC + 4.8;
pub const THREE_POINT_SIXTY_FIVE: f64 = GEOMETRIC + 3.65;
pub const FIVE_POINT_EIGHTY_EIGHT: f64 = GEOMETRIC + 5.88;

/// Dip of the visible horizon, in degrees, for an observer `elevation_m`
/// meters above the surrounding terrain.
pub fn elevation_adjustment(elevation_m: f64) -> f64 {
    angles::acos_deg(EARTH_RADIUS_KM / (EARTH_RADIUS_KM + elevation_m / 1000.0))
}

/// Corrects a zenith for solar radius, refraction and observer elevation.
///
/// Only the exact [`GEOMETRIC`] zenith is corrected. Twilight zeniths
/// describe how dark the sky is, which does not depend on elevation, so they
/// are returned unchanged.
pub fn adjust_zenith(zenith: f64, elevation_m: f64) -> f64 {
    if zenith == GEOMETRIC {
        zenith + SOLAR_RADIUS + REFRACTION + elevation_adjustment(elevation_m)
    } else {
        zenith
    }
}
