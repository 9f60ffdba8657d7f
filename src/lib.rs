pub mod angles;
pub mod calendar;
pub mod config;
pub mod error;
pub mod geodesy;
pub mod hebrew;
pub mod location;
pub mod logging;
pub mod solar;
pub mod types;
pub mod zenith;

pub use angles::{
    acos_deg, asin_deg, cos_deg, day_of_year, deg_to_rad, normalize_angle, rad_to_deg, sin_deg,
    tan_deg, DEGREES_PER_HOUR,
};

pub use calendar::{adjusted_sunset, date_from_time, temporal_hour, AstronomicalCalendar};

pub use config::LocationConfig;

pub use error::ZmanimError;

pub use geodesy::{
    geodesic_distance, geodesic_final_bearing, geodesic_initial_bearing, rhumb_line_bearing,
    rhumb_line_distance, vincenty_inverse,
};

pub use hebrew::{
    classify, classify_year, days_in_hebrew_year, first_weekday_of_hebrew_year, hebrew_year_length,
    hebrew_year_of, is_hebrew_leap_year, is_hebrew_leap_year_of, rosh_hashanah,
};

pub use location::GeoLocation;

pub use solar::{solar_crossing, AstronomicalCalculator, NavalAlmanacCalculator};

pub use types::{Direction, GeodesicSolution, HebrewYearLength, HebrewYearType, SunCalculation};

pub use zenith::adjust_zenith;
