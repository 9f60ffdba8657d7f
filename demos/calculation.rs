use chrono::NaiveDate;
use chrono_tz::Asia::Jerusalem;

use zmanim_core::{
    classify, logging, rosh_hashanah, temporal_hour, vincenty_inverse, zenith, AstronomicalCalendar,
    GeoLocation,
};

fn show(label: &str, value: Option<impl std::fmt::Display>) {
    match value {
        Some(v) => println!("{label:<28}{v}"),
        None => println!("{label:<28}(does not occur)"),
    }
}

fn main() -> Result<(), zmanim_core::ZmanimError> {
    logging::init(1);

    let jerusalem = GeoLocation::new("Jerusalem", 31.7683, 35.2137, 754.0, Jerusalem)?;
    let date = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
    let calendar = AstronomicalCalendar::new();

    println!("=== Solar Events ===");
    println!(
        "Location: {} ({:.4}°N, {:.4}°E, {:.0} m)",
        jerusalem.name(),
        jerusalem.latitude(),
        jerusalem.longitude(),
        jerusalem.elevation()
    );
    println!("Date: {date}");
    println!();
    show("Astronomical dawn:", calendar.begin_astronomical_twilight(&jerusalem, date));
    show(
        "Alos (16.1°):",
        calendar.sunrise_offset_by_degrees(&jerusalem, date, zenith::SIXTEEN_POINT_ONE),
    );
    show("Civil dawn:", calendar.begin_civil_twilight(&jerusalem, date));
    show("Sea-level sunrise:", calendar.sea_level_sunrise(&jerusalem, date));
    show("Sunrise:", calendar.sunrise(&jerusalem, date));
    show("Solar transit:", calendar.sun_transit(&jerusalem, date));
    show("Sunset:", calendar.sunset(&jerusalem, date));
    show("Sea-level sunset:", calendar.sea_level_sunset(&jerusalem, date));
    show(
        "Tzais (8.5°):",
        calendar.sunset_offset_by_degrees(&jerusalem, date, zenith::EIGHT_POINT_FIVE),
    );
    show("Astronomical dusk:", calendar.end_astronomical_twilight(&jerusalem, date));
    let hour = temporal_hour(
        calendar.sea_level_sunrise(&jerusalem, date).as_ref(),
        calendar.sea_level_sunset(&jerusalem, date).as_ref(),
    );
    show("Temporal hour (minutes):", hour.map(|h| h.num_seconds() as f64 / 60.0));
    println!();

    println!("--- Geodesy ---");
    let greenwich = GeoLocation::greenwich();
    let solution = vincenty_inverse(&greenwich, &jerusalem)?;
    println!("Greenwich -> Jerusalem: {:.1} km", solution.distance_m / 1000.0);
    println!("Initial bearing: {:.2}°", solution.initial_bearing);
    println!("Final bearing: {:.2}°", solution.final_bearing);
    println!();

    println!("--- Hebrew Year ---");
    let year_type = classify(date)?;
    let year = zmanim_core::hebrew_year_of(date)?;
    println!("Hebrew year {year} began {}", rosh_hashanah(year)?);
    println!(
        "Type {:?}: {} days, leap = {}, starts on {}",
        year_type,
        year_type.days(),
        year_type.is_leap(),
        year_type.first_weekday()
    );
    Ok(())
}
