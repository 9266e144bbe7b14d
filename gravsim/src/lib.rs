pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::vector::{NVec2, Vector2Ext};
pub use simulation::states::{Body, BodyView, System};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::collisions::Contact;
pub use simulation::diagnostics::Diagnostics;
pub use simulation::engine::{run_headless, Engine, RunReport};
pub use simulation::scenario::{Preset, RandomSpec, Scenario};

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::gravsim_vis2d::run_2d;

pub use benchmark::benchmark::bench_tick;
