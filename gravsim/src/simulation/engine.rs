//! Headless driver
//!
//! `Engine` holds the driver-side settings (step size, end time, logging
//! cadence). The physics never keeps a clock: the driver decides `dt` and
//! how often to call `tick`.

use log::{debug, info, warn};

use super::diagnostics::Diagnostics;
use super::scenario::Scenario;
use crate::error::{SimError, SimResult};

const STEP_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub dt: f64, // step handed to tick()
    pub t_end: f64, // total simulated time
    pub log_every: usize, // steps between diagnostics lines, 0 = never
}

impl Engine {
    pub fn new(dt: f64, t_end: f64, log_every: usize) -> SimResult<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::invalid("dt", dt));
        }
        if !(t_end.is_finite() && t_end >= 0.0) {
            return Err(SimError::invalid("t_end", t_end));
        }
        Ok(Self {
            dt,
            t_end,
            log_every,
        })
    }

    /// Number of ticks needed to cover `t_end`.
    /// A ratio within rounding noise of a whole number counts as that number,
    /// so 0.07 / 0.01 gives 7 steps, not 8.
    pub fn steps(&self) -> usize {
        let ratio = self.t_end / self.dt;
        let nearest = ratio.round();
        if (ratio - nearest).abs() <= STEP_TOLERANCE * nearest.max(1.0) {
            nearest as usize
        } else {
            ratio.ceil() as usize
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            dt: 0.01,
            t_end: 10.0,
            log_every: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub steps: usize,
    pub elapsed: f64, // simulated time
    pub initial: Diagnostics,
    pub last: Diagnostics,
}

/// Tick `scenario` with a fixed step until `t_end` is covered.
///
/// Stops with [`SimError::NonFiniteState`] as soon as any body degenerates
/// to NaN or infinity.
pub fn run_headless(scenario: &mut Scenario) -> SimResult<RunReport> {
    let Scenario {
        engine,
        system,
        forces,
    } = scenario;

    let steps = engine.steps();
    let initial = system.diagnostics();
    info!(
        "headless run: {} bodies, dt = {}, {} steps",
        system.len(),
        engine.dt,
        steps
    );
    debug!("step 0: {initial}");

    let mut elapsed = 0.0;
    for step in 1..=steps {
        system.tick_with(&*forces, engine.dt);
        elapsed += engine.dt;

        if let Some(index) = system.first_non_finite() {
            warn!("body {index} went non-finite at step {step}");
            return Err(SimError::NonFiniteState { index });
        }
        if engine.log_every > 0 && step % engine.log_every == 0 {
            info!("step {step} (t = {elapsed:.4}): {}", system.diagnostics());
        }
    }

    let last = system.diagnostics();
    info!(
        "finished after {steps} steps, energy drift {:.6e}",
        last.total_energy() - initial.total_energy()
    );

    Ok(RunReport {
        steps,
        elapsed,
        initial,
        last,
    })
}
