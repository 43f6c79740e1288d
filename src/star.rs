use nalgebra::{Point2, Vector2};
use crate::{Color, Float, body::Body, trails::Trail};

/// The gravity centre of a system. Moves under the pull of its planets like
/// any other body but keeps no distance to itself.
#[derive(new, Debug, Clone)]
pub struct Star {
    name: String,
    p: Point2<Float>,
    v: Vector2<Float>,
    m: Float,
    pub radius: f32,    // More for drawing than anything really
    pub color: Color,
    #[new(default)]
    trail: Trail,
}

impl Body for Star {
    default_body_gets!(name, p, v, m, radius, color, trail);

    fn is_primary(&self) -> bool {
        true
    }
}
