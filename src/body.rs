use nalgebra::{Point2, Vector2};
use num::Zero;

use crate::{tools, trails::Trail, Color, Float};

/// Frozen view of a body taken at the start of a step. Forces for every body
/// are computed against the same set of snapshots so that update order
/// cannot leak into the result.
#[derive(new, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub name: String,
    pub position: Point2<Float>,
    pub mass: Float,
    pub primary: bool,
}

impl Snapshot {
    pub fn of(body: &dyn Body) -> Snapshot {
        Snapshot::new(
            body.name().to_owned(),
            *body.position(),
            body.mass(),
            body.is_primary(),
        )
    }
}

pub trait Body {
    fn name(&self) -> &str;
    fn position(&self) -> &Point2<Float>;
    fn position_mut(&mut self) -> &mut Point2<Float>;
    fn velocity(&self) -> &Vector2<Float>;
    fn velocity_mut(&mut self) -> &mut Vector2<Float>;
    fn mass(&self) -> Float;
    fn trail(&self) -> &Trail;
    fn trail_mut(&mut self) -> &mut Trail;

    // Drawing only, never read by the physics
    fn radius(&self) -> f32;
    fn color(&self) -> Color;

    fn is_primary(&self) -> bool {
        false
    }

    /// Distance to the primary as of the last force computation. `None` for
    /// the primary itself and before the first step.
    fn distance_to_primary(&self) -> Option<Float> {
        None
    }

    fn record_primary_distance(&mut self, _distance: Float) {}

    /// Gravitational pull of `other` on this body.
    ///
    /// The two bodies must not share a position: the magnitude divides by the
    /// squared distance. `System::step` checks this before calling in.
    fn attraction(&mut self, other: &Snapshot, grav_const: Float) -> Vector2<Float> {
        // F = GmM/r^2, pointed along the displacement
        let r = other.position - *self.position();
        let distance = r.norm();

        if other.primary {
            self.record_primary_distance(distance);
        }

        let force = grav_const * self.mass() * other.mass / (distance * distance);
        tools::get_components(force, tools::get_angle(&r))
    }

    /// Resultant force on this body from every snapshot except its own.
    fn accumulate_force(&mut self, own_index: usize, snapshot: &[Snapshot], grav_const: Float) -> Vector2<Float> {
        let mut total = Vector2::zero();
        for (i, other) in snapshot.iter().enumerate() {
            if i == own_index {
                continue
            }
            total += self.attraction(other, grav_const);
        }
        total
    }

    fn apply_force(&mut self, force: &Vector2<Float>, dt: Float) {
        // F = m dv/dt
        // dv = F dt/m
        let dv: Vector2<Float> = force * (dt / self.mass());
        *self.velocity_mut() += dv;
    }

    fn update_position(&mut self, dt: Float) {
        // v = dx/dt
        // v dt = dx
        let dr = self.velocity() * dt;
        *self.position_mut() += dr;

        let pos = *self.position();
        self.trail_mut().add_node(pos);
    }
}

// Macro for implementing simple functions for Body trait
macro_rules! default_body_gets {
    ($name:ident, $position:ident, $velocity:ident, $mass:ident, $radius:ident, $color:ident, $trail:ident) => {
        fn name(&self) -> &str { &self.$name }
        fn position(&self) -> &Point2<Float> { &self.$position }
        fn position_mut(&mut self) -> &mut Point2<Float> { &mut self.$position }
        fn velocity(&self) -> &Vector2<Float> { &self.$velocity }
        fn velocity_mut(&mut self) -> &mut Vector2<Float> { &mut self.$velocity }
        fn mass(&self) -> Float { self.$mass }
        fn trail(&self) -> &Trail { &self.$trail }
        fn trail_mut(&mut self) -> &mut Trail { &mut self.$trail }
        fn radius(&self) -> f32 { self.$radius }
        fn color(&self) -> Color { self.$color }
    };
}
