//! Angle, polar and formatting helpers shared by the calculator, the geometry
//! builder and the serializers.
//!
//! Everything here is a pure function over finite inputs; callers validate
//! user input before it reaches this layer.

use crate::float_types::Real;
use nalgebra::Point2;

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: Real) -> Real {
    degrees.to_radians()
}

/// Radians to degrees.
#[inline]
pub fn rad_to_deg(radians: Real) -> Real {
    radians.to_degrees()
}

/// Polar `(r, θ)` to a cartesian point, θ = 0 along +x.
///
/// The geometry builder adds a `-π/2` offset on top of this so that its
/// zero angle points at the top of the (y-down) layout.
#[inline]
pub fn polar_to_cartesian(r: Real, theta: Real) -> Point2<Real> {
    Point2::new(r * theta.cos(), r * theta.sin())
}

/// Cartesian point to `(r, θ)` with θ in `(-π, π]`.
#[inline]
pub fn cartesian_to_polar(p: &Point2<Real>) -> (Real, Real) {
    (p.coords.norm(), p.y.atan2(p.x))
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: &Point2<Real>, p2: &Point2<Real>) -> Real {
    nalgebra::distance(p1, p2)
}

/// Linear interpolation, `t = 0` gives `start`.
#[inline]
pub fn lerp(start: Real, end: Real, t: Real) -> Real {
    start + (end - start) * t
}

/// Maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
pub fn map_range(value: Real, in_min: Real, in_max: Real, out_min: Real, out_max: Real) -> Real {
    out_min + ((value - in_min) * (out_max - out_min)) / (in_max - in_min)
}

#[inline]
pub fn clamp(value: Real, min: Real, max: Real) -> Real {
    value.max(min).min(max)
}

/// Rounds to `decimals` places.
pub fn round_to(value: Real, decimals: i32) -> Real {
    let factor = (10.0 as Real).powi(decimals);
    (value * factor).round() / factor
}

/// Fixed-point formatting, only used at presentation/export boundaries.
pub fn format_number(value: Real, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Engineering notation with an SI prefix, e.g. `1.50G` for 1.5e9.
///
/// Exponents without a prefix fall back to `e<exp>`, e.g. `1.00e15`.
pub fn format_engineering(value: Real) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value:.2}");
    }
    let exponent = ((value.abs().log10() / 3.0).floor() * 3.0) as i32;
    let mantissa = value / (10.0 as Real).powi(exponent);
    let prefix = match exponent {
        -12 => "p".to_string(),
        -9 => "n".to_string(),
        -6 => "u".to_string(),
        -3 => "m".to_string(),
        0 => String::new(),
        3 => "k".to_string(),
        6 => "M".to_string(),
        9 => "G".to_string(),
        12 => "T".to_string(),
        other => format!("e{other}"),
    };
    format!("{mantissa:.2}{prefix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::{FRAC_PI_2, PI};

    #[test]
    fn angle_round_trip() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-12);
        assert!((rad_to_deg(FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((rad_to_deg(deg_to_rad(37.5)) - 37.5).abs() < 1e-12);
    }

    #[test]
    fn polar_conventions() {
        let east = polar_to_cartesian(2.0, 0.0);
        assert!((east.x - 2.0).abs() < 1e-12 && east.y.abs() < 1e-12);

        // -π/2 is the layout's "top" in a y-down frame
        let top = polar_to_cartesian(3.0, -FRAC_PI_2);
        assert!(top.x.abs() < 1e-12);
        assert!((top.y + 3.0).abs() < 1e-12);

        let (r, theta) = cartesian_to_polar(&top);
        assert!((r - 3.0).abs() < 1e-12);
        assert!((theta + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn distance_and_interpolation() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(lerp(2.0, 4.0, 0.25), 2.5);
        assert_eq!(map_range(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(round_to(1.23456, 2), 1.23);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_number(1.0, 4), "1.0000");
        assert_eq!(format_number(-0.123456, 3), "-0.123");
        assert_eq!(format_engineering(1.5e9), "1.50G");
        assert_eq!(format_engineering(2.2e-6), "2.20u");
        assert_eq!(format_engineering(470.0), "470.00");
        assert_eq!(format_engineering(1e15), "1.00e15");
    }
}
