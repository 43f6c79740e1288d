use nalgebra::Point2;

use crate::constants::AU;
use crate::Float;

/// Maps simulation meters onto a window with the origin at its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: Float, // display units per meter
    width: Float,
    height: Float,
}

impl Viewport {
    pub fn new(pixels_per_au: Float, width: u32, height: u32) -> Viewport {
        Viewport {
            scale: pixels_per_au / AU,
            width: width as Float,
            height: height as Float,
        }
    }

    #[inline]
    pub fn scale(&self) -> Float {
        self.scale
    }

    #[inline]
    pub fn to_screen(&self, p: &Point2<Float>) -> [f64; 2] {
        [p.x * self.scale + self.width / 2.0, p.y * self.scale + self.height / 2.0]
    }
}

/// Distance annotation in kilometres, one decimal.
pub fn distance_label(meters: Float) -> String {
    format!("{:.1}km", meters / 1000.0)
}
