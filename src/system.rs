//! The simulated body collection and the fixed-step driver that advances it.
//!
//! A step runs in two phases. Every body's resultant force is computed from
//! one frozen snapshot of positions, then all velocities and positions are
//! updated. No body ever sees another body's partially updated state, so the
//! outcome does not depend on the order bodies are stored in.

use log::{debug, warn};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use std::collections::HashSet;
use std::fmt::Display;

use crate::body::{Body, Snapshot};
use crate::constants::{GRAV_CONST, TIMESTEP};
use crate::error::SimError;
use crate::tools::{self, TWO_PI};
use crate::trails::Trail;
use crate::Float;

/// Physical parameters shared by every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    pub timestep: Float,
    pub grav_const: Float,
    pub trail_capacity: Option<usize>,
}

impl Default for Physics {
    fn default() -> Self {
        Physics {
            timestep: TIMESTEP,
            grav_const: GRAV_CONST,
            trail_capacity: None,
        }
    }
}

pub struct System {
    bodies: Vec<Box<dyn Body>>,
    physics: Physics,
    forces: Vec<Vector2<Float>>,
    swept: Vec<Float>,  // angle swept around the primary, per body
    steps: u64,
}

impl System {
    /// Takes ownership of freshly built bodies. Each body's trail is reset to
    /// `physics.trail_capacity`.
    pub fn new(physics: Physics, mut bodies: Vec<Box<dyn Body>>) -> Result<System, SimError> {
        if !(physics.timestep.is_finite() && physics.timestep > 0.0) {
            return Err(SimError::InvalidTimestep(physics.timestep));
        }

        let mut names = HashSet::with_capacity(bodies.len());
        for body in bodies.iter() {
            let mass = body.mass();
            if !(mass.is_finite() && mass > 0.0) {
                return Err(SimError::NonPositiveMass { name: body.name().to_owned(), mass });
            }
            let p = body.position();
            let v = body.velocity();
            if !(p.x.is_finite() && p.y.is_finite() && v.x.is_finite() && v.y.is_finite()) {
                return Err(SimError::NonFiniteState { name: body.name().to_owned() });
            }
            if !names.insert(body.name().to_owned()) {
                return Err(SimError::DuplicateName(body.name().to_owned()));
            }
        }

        let primaries = bodies.iter().filter(|b| b.is_primary()).count();
        if primaries != 1 && !bodies.is_empty() {
            warn!("System has {} primary bodies, distance to primary will be ambiguous or absent", primaries);
        }

        for body in bodies.iter_mut() {
            *body.trail_mut() = Trail::with_capacity(physics.trail_capacity);
        }

        Ok(System {
            forces: vec![Vector2::new(0.0, 0.0); bodies.len()],
            swept: vec![0.0; bodies.len()],
            bodies,
            physics,
            steps: 0,
        })
    }

    #[inline]
    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> impl Iterator<Item = &dyn Body> + '_ {
        self.bodies.iter().map(|b| b.as_ref())
    }

    pub fn body(&self, name: &str) -> Option<&dyn Body> {
        self.bodies().find(|b| b.name() == name)
    }

    pub fn primary(&self) -> Option<&dyn Body> {
        self.bodies().find(|b| b.is_primary())
    }

    pub fn snapshot(&self) -> Vec<Snapshot> {
        self.bodies().map(Snapshot::of).collect()
    }

    /// Number of steps taken so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds elapsed.
    #[inline]
    pub fn elapsed(&self) -> Float {
        self.steps as Float * self.physics.timestep
    }

    pub fn elapsed_time(&self) -> ElapsedTime {
        ElapsedTime::from_seconds(self.elapsed(), self.steps)
    }

    /// Advance every body by one timestep.
    ///
    /// Fails without touching any body if two bodies share a position.
    pub fn step(&mut self) -> Result<(), SimError> {
        let snapshot = self.snapshot();
        check_coincident(&snapshot)?;

        let Physics { timestep: dt, grav_const, .. } = self.physics;

        for (i, (body, force)) in self.bodies.iter_mut().zip(self.forces.iter_mut()).enumerate() {
            *force = body.accumulate_force(i, &snapshot, grav_const);
        }

        for (body, force) in self.bodies.iter_mut().zip(self.forces.iter()) {
            body.apply_force(force, dt);
            body.update_position(dt);
        }

        self.track_sweep(&snapshot);

        self.steps += 1;
        debug!("Step {} done, t = {}", self.steps, self.elapsed_time());
        Ok(())
    }

    /// Orbits completed by each non-primary body around the primary since the
    /// start, positive anticlockwise. Counted step by step, so it is unaffected
    /// by trail capacity. Empty without a primary.
    pub fn revolutions(&self) -> Vec<(String, Float)> {
        if self.primary().is_none() {
            return Vec::new();
        }

        self.bodies()
            .zip(self.swept.iter())
            .filter(|(b, _)| !b.is_primary())
            .map(|(b, swept)| (b.name().to_owned(), swept / TWO_PI))
            .collect()
    }

    fn track_sweep(&mut self, snapshot: &[Snapshot]) {
        let p = match snapshot.iter().position(|s| s.primary) {
            Some(p) => p,
            None => return,
        };
        let centre_before = snapshot[p].position;
        let centre_after = *self.bodies[p].position();

        for (i, (body, swept)) in self.bodies.iter().zip(self.swept.iter_mut()).enumerate() {
            if i == p {
                continue
            }
            let before = tools::get_angle(&(snapshot[i].position - centre_before));
            let after = tools::get_angle(&(*body.position() - centre_after));
            *swept += tools::wrap_angle(after - before);
        }
    }

    pub fn run(&mut self, steps: u64) -> Result<(), SimError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }
}

fn check_coincident(snapshot: &[Snapshot]) -> Result<(), SimError> {
    let len = snapshot.len();
    if len > 1 {
        for i in 0..len-1 {
            for j in i+1..len {
                if snapshot[i].position == snapshot[j].position {
                    return Err(SimError::CoincidentBodies {
                        first: snapshot[i].name.clone(),
                        second: snapshot[j].name.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

const SEC_PER_HOUR: Float = 60.0 * 60.0;
const SEC_PER_DAY: Float = SEC_PER_HOUR * 24.0;
const SEC_PER_YEAR: Float = 365.25 * SEC_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElapsedTime {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub steps: u64,
}

impl ElapsedTime {
    pub fn from_seconds(seconds: Float, steps: u64) -> ElapsedTime {
        let mut time_s = seconds;

        let years = (time_s / SEC_PER_YEAR).floor();
        time_s -= years * SEC_PER_YEAR;
        let days = (time_s / SEC_PER_DAY).floor();
        time_s -= days * SEC_PER_DAY;
        let hours = (time_s / SEC_PER_HOUR).floor();

        ElapsedTime {
            years: years as u64,
            days: days as u64,
            hours: hours as u64,
            steps,
        }
    }
}

impl Display for ElapsedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Y {}D {}H ({} steps)", self.years, self.days, self.hours, self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_time_splits_into_units() {
        let t = ElapsedTime::from_seconds(SEC_PER_YEAR + 3.0 * SEC_PER_DAY + 5.0 * SEC_PER_HOUR, 7);
        assert_eq!(t, ElapsedTime { years: 1, days: 3, hours: 5, steps: 7 });
        assert_eq!(t.to_string(), "1Y 3D 5H (7 steps)");
    }

    #[test]
    fn rejects_bad_timestep() {
        let physics = Physics { timestep: 0.0, ..Physics::default() };
        assert!(matches!(System::new(physics, Vec::new()), Err(SimError::InvalidTimestep(_))));
    }
}
