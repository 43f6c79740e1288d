#[macro_use]
extern crate derive_new;

pub type Float = f64;
pub type Color = [f32; 4];

pub mod constants;
pub mod tools;
pub mod trails;
#[macro_use]
pub mod body;
pub mod star;
pub mod planet;
pub mod error;
pub mod system;
pub mod presets;
pub mod config;
pub mod view;
pub mod batch;
pub mod render;

pub use body::{Body, Snapshot};
pub use config::Scenario;
pub use constants::{AU, GRAV_CONST, TIMESTEP};
pub use error::SimError;
pub use planet::Planet;
pub use star::Star;
pub use system::{ElapsedTime, Physics, System};
pub use trails::Trail;
