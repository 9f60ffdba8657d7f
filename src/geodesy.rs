//! Distance and bearing between two locations.
//!
//! Geodesic values use Vincenty's inverse formula on the WGS-84 ellipsoid.
//! Rhumb-line values follow a constant compass bearing on a sphere of mean
//! earth radius.

use std::f64::consts::{FRAC_PI_4, PI};

use tracing::{debug, warn};

use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::error::ZmanimError;
use crate::location::GeoLocation;
use crate::types::GeodesicSolution;

pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
pub const WGS84_SEMI_MINOR_AXIS: f64 = 6_356_752.3142;
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

pub const MEAN_EARTH_RADIUS_M: f64 = 6_371_000.0;

pub const VINCENTY_MAX_ITERATIONS: u32 = 20;
pub const VINCENTY_TOLERANCE: f64 = 1e-12;

/// Solves the inverse geodesic problem from `from` to `to`.
///
/// # Errors
///
/// Returns [`ZmanimError::NonConvergence`] when λ has not settled within
/// [`VINCENTY_MAX_ITERATIONS`], which happens for nearly antipodal points.
pub fn vincenty_inverse(
    from: &GeoLocation,
    to: &GeoLocation,
) -> Result<GeodesicSolution, ZmanimError> {
    let a = WGS84_SEMI_MAJOR_AXIS;
    let b = WGS84_SEMI_MINOR_AXIS;
    let f = WGS84_FLATTENING;

    let l = deg_to_rad(to.longitude() - from.longitude());
    let u1 = ((1.0 - f) * deg_to_rad(from.latitude()).tan()).atan();
    let u2 = ((1.0 - f) * deg_to_rad(to.latitude()).tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut sin_lambda;
    let mut cos_lambda;
    let mut sin_sigma;
    let mut cos_sigma;
    let mut sigma;
    let mut cos_sq_alpha;
    let mut cos_2sigma_m;
    let mut iterations = 0;

    loop {
        (sin_lambda, cos_lambda) = lambda.sin_cos();
        let cross = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        sin_sigma = ((cos_u2 * sin_lambda).powi(2) + cross * cross).sqrt();
        if sin_sigma == 0.0 {
            return Ok(GeodesicSolution {
                distance_m: 0.0,
                initial_bearing: 0.0,
                final_bearing: 0.0,
            });
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // equatorial line: cos²α = 0 would make this 0/0
        cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        let inner = cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m);
        lambda = l + (1.0 - c) * f * sin_alpha * (sigma + c * sin_sigma * inner);
        iterations += 1;

        if (lambda - lambda_prev).abs() <= VINCENTY_TOLERANCE {
            break;
        }
        if iterations >= VINCENTY_MAX_ITERATIONS {
            warn!(
                from = from.name(),
                to = to.name(),
                iterations,
                "vincenty formula failed to converge"
            );
            return Err(ZmanimError::NonConvergence { iterations });
        }
    }

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
    let distance_m = b * big_a * (sigma - delta_sigma);

    let initial = (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
    let final_ = (cos_u1 * sin_lambda).atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

    debug!(iterations, distance_m, "vincenty converged");
    Ok(GeodesicSolution {
        distance_m,
        initial_bearing: normalize_angle(rad_to_deg(initial)),
        final_bearing: normalize_angle(rad_to_deg(final_)),
    })
}

pub fn geodesic_distance(from: &GeoLocation, to: &GeoLocation) -> Result<f64, ZmanimError> {
    vincenty_inverse(from, to).map(|s| s.distance_m)
}

pub fn geodesic_initial_bearing(from: &GeoLocation, to: &GeoLocation) -> Result<f64, ZmanimError> {
    vincenty_inverse(from, to).map(|s| s.initial_bearing)
}

pub fn geodesic_final_bearing(from: &GeoLocation, to: &GeoLocation) -> Result<f64, ZmanimError> {
    vincenty_inverse(from, to).map(|s| s.final_bearing)
}

/// Difference of Mercator-projected latitudes, in radians.
fn projected_latitude_delta(lat1: f64, lat2: f64) -> f64 {
    ((lat2 / 2.0 + FRAC_PI_4).tan() / (lat1 / 2.0 + FRAC_PI_4).tan()).ln()
}

/// Constant compass bearing from `from` to `to`, in degrees [0, 360).
pub fn rhumb_line_bearing(from: &GeoLocation, to: &GeoLocation) -> f64 {
    let mut d_lon = deg_to_rad(to.longitude() - from.longitude());
    if d_lon.abs() > PI {
        d_lon -= d_lon.signum() * 2.0 * PI;
    }
    let d_phi = projected_latitude_delta(deg_to_rad(from.latitude()), deg_to_rad(to.latitude()));
    normalize_angle(rad_to_deg(d_lon.atan2(d_phi)))
}

/// Length in meters of the rhumb line from `from` to `to`, crossing the
/// antimeridian when that is shorter.
pub fn rhumb_line_distance(from: &GeoLocation, to: &GeoLocation) -> f64 {
    let lat1 = deg_to_rad(from.latitude());
    let lat2 = deg_to_rad(to.latitude());
    let d_lat = lat2 - lat1;
    let mut d_lon = deg_to_rad((to.longitude() - from.longitude()).abs());
    if d_lon > PI {
        d_lon = 2.0 * PI - d_lon;
    }
    // east-west lines have Δψ → 0; the stretch factor tends to cos φ
    let q = if d_lat.abs() > 1e-10 {
        d_lat / projected_latitude_delta(lat1, lat2)
    } else {
        lat1.cos()
    };
    (d_lat * d_lat + q * q * d_lon * d_lon).sqrt() * MEAN_EARTH_RADIUS_M
}
