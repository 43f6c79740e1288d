use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::constants::AU;
use crate::planet::Planet;
use crate::star::Star;
use crate::{tools, Color, Float};

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
pub const RED: Color = [188.0 / 255.0, 39.0 / 255.0, 50.0 / 255.0, 1.0];
pub const DARK_GREY: Color = [80.0 / 255.0, 78.0 / 255.0, 81.0 / 255.0, 1.0];

pub const SUN_MASS: Float = 1.98892e30;
pub const EARTH_MASS: Float = 5.9742e24;

/// The sun and the four inner planets, each starting on the x axis with a
/// purely tangential velocity.
pub fn solar_system() -> Vec<Box<dyn Body>> {
    vec![
        Box::new(Star::new("Sun".to_owned(), Point2::origin(), Vector2::new(0.0, 0.0), SUN_MASS, 30.0, YELLOW)),
        Box::new(
            Planet::at_rest("Earth", Point2::new(-1.0 * AU, 0.0), EARTH_MASS, 16.0, BLUE)
                .with_velocity(Vector2::new(0.0, 29.783 * 1000.0)),
        ),
        Box::new(
            Planet::at_rest("Mars", Point2::new(-1.524 * AU, 0.0), 6.39e23, 12.0, RED)
                .with_velocity(Vector2::new(0.0, 24.077 * 1000.0)),
        ),
        Box::new(
            Planet::at_rest("Mercury", Point2::new(0.387 * AU, 0.0), 0.33e24, 8.0, DARK_GREY)
                .with_velocity(Vector2::new(0.0, -47.4 * 1000.0)),
        ),
        Box::new(
            Planet::at_rest("Venus", Point2::new(0.723 * AU, 0.0), 4.8685e24, 14.0, WHITE)
                .with_velocity(Vector2::new(0.0, -35.02 * 1000.0)),
        ),
    ]
}

/// A star at the origin and one planet on a circular orbit of radius
/// `orbit_radius`, moving anticlockwise.
pub fn circular_pair(grav_const: Float, star_mass: Float, planet_mass: Float, orbit_radius: Float) -> Vec<Box<dyn Body>> {
    let speed = tools::circular_orbit_speed(grav_const, star_mass, orbit_radius);
    vec![
        Box::new(Star::new("Star".to_owned(), Point2::origin(), Vector2::new(0.0, 0.0), star_mass, 30.0, YELLOW)),
        Box::new(
            Planet::at_rest("Planet", Point2::new(orbit_radius, 0.0), planet_mass, 16.0, BLUE)
                .with_velocity(Vector2::new(0.0, speed)),
        ),
    ]
}
