use crate::Float;

// Average distance between earth and the sun, in meters
pub const AU: Float = 149.6e6 * 1000.0;

pub const GRAV_CONST: Float = 6.67428e-11;

// Seconds per step, one simulated day
pub const TIMESTEP: Float = 3600.0 * 24.0;

// Display units per AU
pub const PIXELS_PER_AU: Float = 250.0;

pub const WINDOW_DIMS: (u32, u32) = (800, 800);
pub const FPS: u64 = 60;

// One simulated year at one-day steps
pub const BATCH_STEPS: u64 = 365;
