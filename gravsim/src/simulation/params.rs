//! Physical constants for the simulation
//!
//! `Parameters` is owned by each `System`, so two systems with different
//! constants can run side by side:
//! - gravitational constant `g`,
//! - distance floor `min_distance` that keeps the inverse-square law finite,
//! - number of collision resolution passes per tick

use crate::error::{SimError, SimResult};

pub const DEFAULT_G: f64 = 0.1;
pub const DEFAULT_MIN_DISTANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // floor applied to r^2 (field) and r (potential)
    pub collision_passes: usize, // 1 = single pass over all pairs
}

impl Parameters {
    /// Build validated parameters
    pub fn new(g: f64, min_distance: f64, collision_passes: usize) -> SimResult<Self> {
        if !(g.is_finite() && g > 0.0) {
            return Err(SimError::invalid("G", g));
        }
        if !(min_distance.is_finite() && min_distance > 0.0) {
            return Err(SimError::invalid("min_distance", min_distance));
        }
        if collision_passes == 0 {
            return Err(SimError::invalid("collision_passes", 0.0));
        }
        Ok(Self {
            g,
            min_distance,
            collision_passes,
        })
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            min_distance: DEFAULT_MIN_DISTANCE,
            collision_passes: 1,
        }
    }
}
