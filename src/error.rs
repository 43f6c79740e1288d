use thiserror::Error;

use crate::Float;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("bodies `{first}` and `{second}` occupy the same position")]
    CoincidentBodies { first: String, second: String },

    #[error("body `{name}` has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: Float },

    #[error("body `{name}` has a non-finite position or velocity")]
    NonFiniteState { name: String },

    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(Float),

    #[error("more than one body is named `{0}`")]
    DuplicateName(String),
}
