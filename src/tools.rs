use nalgebra::Vector2;

use std::f64::consts::PI;
use crate::Float;

pub const TWO_PI: Float = PI * 2.0;

#[inline]
pub fn get_angle(vec: &Vector2<Float>) -> Float {
    vec.y.atan2(vec.x)
}

#[inline]
pub fn get_components(magnitude: Float, angle: Float) -> Vector2<Float> {
    Vector2::new(magnitude * angle.cos(), magnitude * angle.sin())
}

// v = sqrt(GM/r)
#[inline]
pub fn circular_orbit_speed(grav_const: Float, central_mass: Float, radius: Float) -> Float {
    (grav_const * central_mass / radius).sqrt()
}

/// Wraps an angle into (-PI, PI].
#[inline]
pub fn wrap_angle(angle: Float) -> Float {
    let mut a = angle % TWO_PI;
    if a > PI {
        a -= TWO_PI;
    } else if a <= -PI {
        a += TWO_PI;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn components_round_trip_through_angle() {
        let v = Vector2::new(-3.0, 4.0);
        let back = get_components(v.norm(), get_angle(&v));
        assert_relative_eq!(back.x, -3.0, epsilon = 1e-12);
        assert_relative_eq!(back.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn wrap_angle_stays_in_half_open_range() {
        assert_relative_eq!(wrap_angle(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-1.5 * PI), 0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn circular_speed_for_earth_orbit() {
        let v = circular_orbit_speed(crate::GRAV_CONST, 1.98892e30, crate::AU);
        assert!((v - 29_788.0).abs() < 10.0, "{}", v);
    }
}
