//! Error types for the simulator
//!
//! The physics core itself never fails: numeric edge cases propagate as
//! NaN/Inf exactly like the arithmetic does. Errors appear at the edges,
//! when bodies and parameters are validated, when a state check is asked
//! for, and when scenario files are loaded.

use thiserror::Error;

/// Result alias used across the crate
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// A physical or numerical parameter is outside its valid range
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Two bodies sit exactly on top of each other, so no contact direction exists
    #[error("bodies {first} and {second} are coincident")]
    DegenerateGeometry { first: usize, second: usize },

    /// A body's state contains NaN or infinity
    #[error("body {index} has a non-finite state")]
    NonFiniteState { index: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        SimError::InvalidParameter { name, value }
    }
}
