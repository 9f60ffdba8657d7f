pub const DEGREES_PER_HOUR: f64 = 360.0 / 24.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Wraps `angle` into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub fn sin_deg(deg: f64) -> f64 {
    deg_to_rad(deg).sin()
}

pub fn cos_deg(deg: f64) -> f64 {
    deg_to_rad(deg).cos()
}

pub fn tan_deg(deg: f64) -> f64 {
    deg_to_rad(deg).tan()
}

pub fn asin_deg(x: f64) -> f64 {
    rad_to_deg(x.asin())
}

pub fn acos_deg(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let dim = days_in_months(year);
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    (sum + day) as i32
}
