//! Headless run: step a fixed number of times, then hand the whole position
//! history to whatever plots it.

use log::info;
use serde::Serialize;

use crate::error::SimError;
use crate::system::System;
use crate::{Color, Float};

#[derive(Serialize, Debug, Clone)]
pub struct BodyHistory {
    pub name: String,
    pub primary: bool,
    pub radius: f32,
    pub color: Color,
    pub distance_to_primary: Option<Float>,
    pub revolutions: Option<Float>,
    pub trail: Vec<[Float; 2]>,
}

#[derive(Serialize, Debug, Clone)]
pub struct History {
    pub steps: u64,
    pub timestep: Float,
    pub bodies: Vec<BodyHistory>,
}

impl History {
    pub fn from_system(system: &System) -> History {
        let revs = system.revolutions();
        let bodies = system
            .bodies()
            .map(|b| BodyHistory {
                name: b.name().to_owned(),
                primary: b.is_primary(),
                radius: b.radius(),
                color: b.color(),
                distance_to_primary: b.distance_to_primary(),
                revolutions: revs.iter().find(|(name, _)| name == b.name()).map(|(_, r)| *r),
                trail: b.trail().iter().map(|p| [p.x, p.y]).collect(),
            })
            .collect();

        History {
            steps: system.steps(),
            timestep: system.physics().timestep,
            bodies,
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

pub fn run(system: &mut System, steps: u64) -> Result<History, SimError> {
    info!("Running {} bodies for {} steps", system.len(), steps);
    system.run(steps)?;

    for (name, revs) in system.revolutions() {
        info!("{}: {:.3} revolutions", name, revs.abs());
    }
    info!("Finished at {}", system.elapsed_time());

    Ok(History::from_system(system))
}
