//! Build fully-initialized simulation scenarios
//!
//! A `Scenario` is the runtime bundle the drivers consume:
//! - driver settings (`Engine`)
//! - system state (`System` with its `Parameters`)
//! - active force set (`AccelSet`)
//!
//! Scenarios come from a YAML `ScenarioConfig` or from one of the built-in
//! `Preset`s.

use clap::ValueEnum;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::configuration::config::ScenarioConfig;
use crate::error::SimResult;
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};
use crate::simulation::vector::NVec2;

pub struct Scenario {
    pub engine: Engine,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        // Bodies: map `BodyConfig` -> runtime `Body`, validating each
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| bc.to_body())
            .collect::<SimResult<Vec<Body>>>()?;

        let p_cfg = &cfg.parameters;
        let parameters = Parameters::new(p_cfg.g, p_cfg.min_distance, p_cfg.collision_passes)?;

        let e_cfg = &cfg.engine;
        let engine = Engine::new(e_cfg.dt, e_cfg.t_end, e_cfg.log_every)?;

        Ok(Self {
            engine,
            system: System::new(bodies, parameters),
            forces: AccelSet::default(),
        })
    }

    pub fn from_preset(preset: Preset, random: &RandomSpec, engine: Engine) -> Self {
        Self {
            engine,
            system: System::new(preset.bodies(random), Parameters::default()),
            forces: AccelSet::default(),
        }
    }
}

/// Built-in starting configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Two equal masses circling their common center
    MutualOrbit,
    /// Three unit discs, one fired through the other two
    ElasticCollision,
    /// Two heavy discs that fall together and collide
    CollisionOrbit,
    /// `RandomSpec::count` bodies with random masses, sizes and velocities
    Random,
}

/// Settings for `Preset::Random`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomSpec {
    pub count: usize,
    pub seed: u64,
    pub extent: f64, // positions drawn from [-extent, extent)^2
}

impl Default for RandomSpec {
    fn default() -> Self {
        Self {
            count: 4,
            seed: 42,
            extent: 20.0,
        }
    }
}

impl Preset {
    pub fn bodies(self, random: &RandomSpec) -> Vec<Body> {
        match self {
            Preset::MutualOrbit => vec![
                Body::new_unchecked(1000.0, 1.0, NVec2::new(-4.0, 0.0), NVec2::repeat(2.0), 1.0)
                    .with_style("red"),
                Body::new_unchecked(1000.0, 1.0, NVec2::new(4.0, 0.0), NVec2::repeat(-2.0), 1.0)
                    .with_style("blue"),
            ],
            Preset::ElasticCollision => vec![
                Body::new_unchecked(1.0, 1.0, NVec2::zeros(), NVec2::zeros(), 1.0)
                    .with_style("red"),
                Body::new_unchecked(1.0, 1.0, NVec2::new(0.0, -5.0), NVec2::new(0.0, 10.0), 1.0)
                    .with_style("blue"),
                Body::new_unchecked(1.0, 1.0, NVec2::new(0.0, 5.0), NVec2::zeros(), 1.0)
                    .with_style("green"),
            ],
            Preset::CollisionOrbit => vec![
                Body::new_unchecked(100.0, 1.0, NVec2::new(-12.0, -4.0), NVec2::zeros(), 1.0)
                    .with_style("red"),
                Body::new_unchecked(100.0, 1.0, NVec2::new(-10.0, -8.0), NVec2::new(0.0, 1.0), 1.0)
                    .with_style("blue"),
            ],
            Preset::Random => random_bodies(random),
        }
    }
}

const PALETTE: [&str; 6] = ["red", "blue", "green", "orange", "purple", "yellow"];

/// Deterministic random bodies: same settings, same bodies
pub fn random_bodies(settings: &RandomSpec) -> Vec<Body> {
    let mut rng = SmallRng::seed_from_u64(settings.seed);
    let extent = settings.extent.abs().max(f64::EPSILON);

    (0..settings.count)
        .map(|i| {
            let m = rng.gen_range(1.0..250.0);
            let radius = rng.gen_range(0.2..2.0);
            let x = NVec2::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            );
            let v = NVec2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
            Body::new_unchecked(m, radius, x, v, 1.0).with_style(PALETTE[i % PALETTE.len()])
        })
        .collect()
}
