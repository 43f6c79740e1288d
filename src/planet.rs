use nalgebra::{Point2, Vector2};

use crate::{Color, Float, body::Body, trails::Trail};

#[derive(new, Debug, Clone)]
pub struct Planet {
  name: String,
  pub position: Point2<Float>,
  pub velocity: Vector2<Float>,
  mass: Float,
  pub radius: f32,
  pub color: Color,
  #[new(default)]
  distance_to_star: Option<Float>,
  #[new(default)]
  trail: Trail,
}

impl Planet {
  /// Planet at rest at `position`, with a velocity set afterwards. Mirrors how
  /// the classic setups give each planet only a tangential speed.
  pub fn at_rest(name: &str, position: Point2<Float>, mass: Float, radius: f32, color: Color) -> Planet {
    Planet::new(name.to_owned(), position, Vector2::new(0.0, 0.0), mass, radius, color)
  }

  pub fn with_velocity(mut self, velocity: Vector2<Float>) -> Self {
    self.velocity = velocity;
    self
  }
}

impl Body for Planet {
  default_body_gets!(name, position, velocity, mass, radius, color, trail);

  fn distance_to_primary(&self) -> Option<Float> {
    self.distance_to_star
  }

  fn record_primary_distance(&mut self, distance: Float) {
    self.distance_to_star = Some(distance);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::body::Snapshot;
  use crate::{AU, GRAV_CONST};
  use approx::assert_relative_eq;

  const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

  #[test]
  fn attraction_points_at_other_body() {
    let mut earth = Planet::at_rest("Earth", Point2::new(-AU, 0.0), 5.9742e24, 16.0, WHITE);
    let sun = Snapshot::new("Sun".to_owned(), Point2::origin(), 1.98892e30, true);

    let f = earth.attraction(&sun, GRAV_CONST);

    let expected = GRAV_CONST * 5.9742e24 * 1.98892e30 / (AU * AU);
    assert_relative_eq!(f.x, expected, max_relative = 1e-12);
    assert!(f.y.abs() < expected * 1e-12);
  }

  #[test]
  fn records_distance_only_for_primary() {
    let mut mars = Planet::at_rest("Mars", Point2::new(-1.524 * AU, 0.0), 6.39e23, 12.0, WHITE);
    let earth = Snapshot::new("Earth".to_owned(), Point2::new(-AU, 0.0), 5.9742e24, false);

    mars.attraction(&earth, GRAV_CONST);
    assert_eq!(mars.distance_to_primary(), None);

    let sun = Snapshot::new("Sun".to_owned(), Point2::origin(), 1.98892e30, true);
    mars.attraction(&sun, GRAV_CONST);
    assert_relative_eq!(mars.distance_to_primary().unwrap_or(0.0), 1.524 * AU, max_relative = 1e-12);
  }

  #[test]
  fn accumulate_force_skips_own_index() {
    let mut p = Planet::at_rest("A", Point2::new(1.0, 0.0), 1.0, 1.0, WHITE);
    let snapshot = vec![
      Snapshot::of(&p),
      Snapshot::new("B".to_owned(), Point2::new(3.0, 0.0), 2.0, false),
    ];

    let f = p.accumulate_force(0, &snapshot, 1.0);
    assert_relative_eq!(f.x, 0.5, epsilon = 1e-12);
  }

  #[test]
  fn update_position_appends_to_trail() {
    let mut p = Planet::at_rest("A", Point2::origin(), 1.0, 1.0, WHITE)
      .with_velocity(Vector2::new(2.0, 0.0));

    p.apply_force(&Vector2::new(0.0, 1.0), 1.0);
    p.update_position(1.0);

    assert_eq!(*p.velocity(), Vector2::new(2.0, 1.0));
    assert_eq!(*p.position(), Point2::new(2.0, 1.0));
    assert_eq!(p.trail().last(), Some(&Point2::new(2.0, 1.0)));
  }
}
