//! Scenario files.
//!
//! A scenario is a YAML document with four sections, each optional except
//! `bodies`:
//!
//! ```yaml
//! physics:
//!   timestep: 86400.0        # seconds per step
//!   grav_const: 6.67428e-11
//!   trail_capacity: ~        # keep every position
//! display:
//!   width: 800
//!   height: 800
//!   pixels_per_au: 250.0
//!   fps: 60
//!   font: ~                  # TTF used for distance labels
//! batch:
//!   steps: 365
//! bodies:
//!   - name: Sun
//!     primary: true
//!     position: [0.0, 0.0]   # meters
//!     velocity: [0.0, 0.0]   # meters per second
//!     mass: 1.98892e30       # kilograms
//!     radius: 30.0
//!     color: [1.0, 1.0, 0.0, 1.0]
//!   - name: Earth
//!     position: [-1.496e11, 0.0]
//!     velocity: [0.0, 29783.0]
//!     mass: 5.9742e24
//! ```

use anyhow::{Context, Result};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::body::Body;
use crate::constants::{BATCH_STEPS, FPS, PIXELS_PER_AU, WINDOW_DIMS};
use crate::error::SimError;
use crate::planet::Planet;
use crate::presets;
use crate::star::Star;
use crate::system::{Physics, System};
use crate::{Color, Float};

/// Window and projection settings for the interactive view
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub pixels_per_au: Float, // display units per astronomical unit
    pub fps: u64,
    pub font: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: "Planet Simulation".to_owned(),
            width: WINDOW_DIMS.0,
            height: WINDOW_DIMS.1,
            pixels_per_au: PIXELS_PER_AU,
            fps: FPS,
            font: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BatchConfig {
    pub steps: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig { steps: BATCH_STEPS }
    }
}

/// Initial state of one body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub primary: bool,
    pub position: [Float; 2],  // meters
    #[serde(default)]
    pub velocity: [Float; 2],  // meters per second
    pub mass: Float,           // kilograms
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default = "default_color")]
    pub color: Color,
}

fn default_radius() -> f32 {
    8.0
}

fn default_color() -> Color {
    presets::WHITE
}

impl BodyConfig {
    pub fn from_body(body: &dyn Body) -> BodyConfig {
        BodyConfig {
            name: body.name().to_owned(),
            primary: body.is_primary(),
            position: [body.position().x, body.position().y],
            velocity: [body.velocity().x, body.velocity().y],
            mass: body.mass(),
            radius: body.radius(),
            color: body.color(),
        }
    }

    pub fn build(&self) -> Box<dyn Body> {
        let position = Point2::new(self.position[0], self.position[1]);
        let velocity = Vector2::new(self.velocity[0], self.velocity[1]);

        if self.primary {
            Box::new(Star::new(self.name.clone(), position, velocity, self.mass, self.radius, self.color))
        } else {
            Box::new(Planet::new(self.name.clone(), position, velocity, self.mass, self.radius, self.color))
        }
    }
}

/// Top-level scenario loaded from YAML
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    #[serde(default)]
    pub physics: Physics,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for Scenario {
    /// The classic sun and four inner planets.
    fn default() -> Self {
        Scenario {
            physics: Physics::default(),
            display: DisplayConfig::default(),
            batch: BatchConfig::default(),
            bodies: presets::solar_system()
                .iter()
                .map(|b| BodyConfig::from_body(b.as_ref()))
                .collect(),
        }
    }
}

impl Scenario {
    pub fn from_reader<R: Read>(reader: R) -> Result<Scenario> {
        let scenario = serde_yaml::from_reader(reader).context("invalid scenario YAML")?;
        Ok(scenario)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Scenario> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("failed to open scenario {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to load scenario {}", path.display()))
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn build_system(&self) -> Result<System, SimError> {
        let bodies = self
            .bodies
            .iter()
            .map(BodyConfig::build)
            .collect();
        System::new(self.physics, bodies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_solar_system() {
        let scenario = Scenario::default();
        let names: Vec<&str> = scenario.bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Sun", "Earth", "Mars", "Mercury", "Venus"]);
        assert_eq!(scenario.bodies.iter().filter(|b| b.primary).count(), 1);
        assert_eq!(scenario.batch.steps, 365);
        assert_eq!(scenario.physics.timestep, 86400.0);
    }

    #[test]
    fn minimal_yaml_fills_defaults() {
        let yaml = "
bodies:
  - name: Sun
    primary: true
    position: [0.0, 0.0]
    mass: 2.0e30
  - name: Rock
    position: [1.0e11, 0.0]
    velocity: [0.0, 30000.0]
    mass: 1.0e24
";
        let scenario = Scenario::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(scenario.physics, Physics::default());
        assert_eq!(scenario.display, DisplayConfig::default());
        assert_eq!(scenario.bodies[0].velocity, [0.0, 0.0]);
        assert_eq!(scenario.bodies[1].radius, 8.0);

        let system = scenario.build_system().unwrap();
        assert_eq!(system.len(), 2);
        assert_eq!(system.primary().map(|b| b.name()), Some("Sun"));
    }

    #[test]
    fn yaml_round_trip_keeps_scenario() {
        let scenario = Scenario::default();
        let yaml = scenario.to_yaml().unwrap();
        let back = Scenario::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(back.physics, scenario.physics);
        for (a, b) in back.bodies.iter().zip(scenario.bodies.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.primary, b.primary);
            assert_eq!(a.position, b.position);
            assert_eq!(a.velocity, b.velocity);
            assert_eq!(a.mass, b.mass);
        }
    }

    #[test]
    fn rejects_massless_body() {
        let mut scenario = Scenario::default();
        scenario.bodies[2].mass = 0.0;
        assert_eq!(
            scenario.build_system().err(),
            Some(SimError::NonPositiveMass { name: "Mars".to_owned(), mass: 0.0 })
        );
    }

    #[test]
    fn rejects_missing_bodies_section() {
        assert!(Scenario::from_reader("physics:\n  timestep: 1.0\n".as_bytes()).is_err());
    }
}
