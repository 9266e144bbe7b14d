//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – headless driver settings (step size, end time, logging)
//! - [`ParametersConfig`] – physical constants and collision passes
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   dt: 0.01                # step handed to tick() by the headless driver
//!   t_end: 10.0             # total simulated time
//!   log_every: 100          # diagnostics every n steps, 0 = off
//!
//! parameters:               # optional, defaults shown
//!   G: 0.1                  # gravitational constant
//!   min_distance: 0.1       # floor for r^2 in the field, r in the potential
//!   collision_passes: 1     # resolution passes per tick
//!
//! bodies:
//!   - x: [ -4.0, 0.0 ]
//!     v: [  2.0, 2.0 ]
//!     m: 1000.0
//!     radius: 1.0
//!     elasticity: 1.0       # optional, default 1
//!     style: red            # optional, default "white"
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::params::{DEFAULT_G, DEFAULT_MIN_DISTANCE};
use crate::simulation::states::{Body, DEFAULT_STYLE};
use crate::simulation::vector::NVec2;

fn default_g() -> f64 {
    DEFAULT_G
}

fn default_min_distance() -> f64 {
    DEFAULT_MIN_DISTANCE
}

fn default_passes() -> usize {
    1
}

fn default_elasticity() -> f64 {
    1.0
}

/// Headless driver configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub dt: f64, // time step handed to tick()
    pub t_end: f64, // total simulated time
    #[serde(default)]
    pub log_every: usize, // steps between diagnostics lines, 0 disables
}

/// Physical constants for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G", default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_min_distance")]
    pub min_distance: f64, // keeps the inverse-square law finite near r = 0
    #[serde(default = "default_passes")]
    pub collision_passes: usize, // collision resolution passes per tick
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: default_g(),
            min_distance: default_min_distance(),
            collision_passes: default_passes(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position, two components
    pub v: Vec<f64>, // initial velocity, two components
    pub m: f64, // mass
    pub radius: f64, // disc radius used for contacts and drawing
    #[serde(default = "default_elasticity")]
    pub elasticity: f64, // restitution coefficient in [0, 1]
    #[serde(default)]
    pub style: Option<String>, // display tag passed through to renderers
}

impl BodyConfig {
    /// Validate and convert into a runtime `Body`
    pub fn to_body(&self) -> SimResult<Body> {
        let x = vec2("x", &self.x)?;
        let v = vec2("v", &self.v)?;
        let body = Body::new(self.m, self.radius, x, v, self.elasticity)?;
        Ok(body.with_style(self.style.as_deref().unwrap_or(DEFAULT_STYLE)))
    }
}

fn vec2(field: &str, components: &[f64]) -> SimResult<NVec2> {
    match components {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::Config(format!(
            "`{field}` needs exactly 2 components, got {}",
            components.len()
        ))),
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

impl FromStr for ScenarioConfig {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_take_defaults() {
        let cfg: ScenarioConfig = "
engine:
  dt: 0.01
  t_end: 1.0
bodies:
  - x: [1.0, 2.0]
    v: [0.0, 0.0]
    m: 5.0
    radius: 0.5
"
        .parse()
        .unwrap();

        assert_eq!(cfg.engine.log_every, 0);
        assert_eq!(cfg.parameters.g, DEFAULT_G);
        assert_eq!(cfg.parameters.collision_passes, 1);

        let body = cfg.bodies[0].to_body().unwrap();
        assert_eq!(body.elasticity(), 1.0);
        assert_eq!(body.style(), DEFAULT_STYLE);
        assert_eq!(body.position(), NVec2::new(1.0, 2.0));
    }

    #[test]
    fn wrong_component_count_is_a_config_error() {
        let cfg = BodyConfig {
            x: vec![0.0, 0.0, 0.0],
            v: vec![0.0, 0.0],
            m: 1.0,
            radius: 1.0,
            elasticity: 1.0,
            style: None,
        };
        assert!(matches!(cfg.to_body(), Err(SimError::Config(_))));
    }

    #[test]
    fn invalid_mass_is_rejected() {
        let cfg = BodyConfig {
            x: vec![0.0, 0.0],
            v: vec![0.0, 0.0],
            m: 0.0,
            radius: 1.0,
            elasticity: 1.0,
            style: None,
        };
        assert!(matches!(
            cfg.to_body(),
            Err(SimError::InvalidParameter { name: "mass", .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let err = "engine: [".parse::<ScenarioConfig>().unwrap_err();
        assert!(matches!(err, SimError::Yaml(_)));
    }
}
