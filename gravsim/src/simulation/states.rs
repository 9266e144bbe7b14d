//! Core state types for the N-body simulation.
//!
//! - `Body`   : one disc-shaped mass (position, velocity, acceleration,
//!              mass, radius, elasticity, display style)
//! - `System` : the ordered bodies plus the `Parameters` they evolve under
//! - `BodyView` : a copied, read-only view of a body handed to renderers
//!
//! Bodies are created once and mutated only by the owning `System`
//! (integration and collision resolution); the body count never changes.

use std::f64::consts::PI;

use log::debug;

use super::forces::{Acceleration, NewtonianGravity};
use super::integrator::symplectic_euler;
use super::params::Parameters;
use super::vector::{NVec2, Vector2Ext};
use crate::error::{SimError, SimResult};

pub const DEFAULT_STYLE: &str = "white";

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) x: NVec2, // position
    pub(crate) v: NVec2, // velocity
    pub(crate) a: NVec2, // acceleration from the last force evaluation
    pub(crate) m: f64, // mass
    pub(crate) radius: f64, // collision / display radius
    pub(crate) elasticity: f64, // restitution coefficient
    pub(crate) style: String, // opaque display tag
}

impl Body {
    /// Create a body, rejecting parameters the physics cannot handle:
    /// mass must be finite and positive, radius finite and non-negative,
    /// elasticity within `[0, 1]`, position and velocity finite.
    pub fn new(m: f64, radius: f64, x: NVec2, v: NVec2, elasticity: f64) -> SimResult<Self> {
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::invalid("mass", m));
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(SimError::invalid("radius", radius));
        }
        if !(0.0..=1.0).contains(&elasticity) {
            return Err(SimError::invalid("elasticity", elasticity));
        }
        if let Some(c) = x.iter().find(|c| !c.is_finite()) {
            return Err(SimError::invalid("position", *c));
        }
        if let Some(c) = v.iter().find(|c| !c.is_finite()) {
            return Err(SimError::invalid("velocity", *c));
        }
        Ok(Self::new_unchecked(m, radius, x, v, elasticity))
    }

    /// Create a body without validation. Zero or negative masses and
    /// out-of-range elasticities are accepted and show up later as
    /// infinities or NaN in the state.
    pub fn new_unchecked(m: f64, radius: f64, x: NVec2, v: NVec2, elasticity: f64) -> Self {
        Self {
            x,
            v,
            a: NVec2::zeros(),
            m,
            radius,
            elasticity,
            style: DEFAULT_STYLE.to_owned(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn acceleration(&self) -> NVec2 {
        self.a
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn inverse_mass(&self) -> f64 {
        1.0 / self.m
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn density(&self) -> f64 {
        self.m / self.area()
    }

    /// Semi-implicit (symplectic) Euler step.
    /// Velocity is advanced first and the position uses the updated velocity:
    /// v_n+1 = v_n + dt * a_n
    /// x_n+1 = x_n + dt * v_n+1
    pub fn integrate(&mut self, dt: f64) {
        self.v += self.a * dt;
        self.x += self.v * dt;
    }

    /// Distance between the two discs' edges; negative when they overlap
    pub fn surface_distance_to(&self, other: &Body) -> f64 {
        (self.x - other.x).norm() - self.radius - other.radius
    }

    /// Unit vector from this body toward `other`, zero if they coincide
    pub fn direction_to(&self, other: &Body) -> NVec2 {
        (other.x - self.x).normalized_or_zero()
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).chain(self.a.iter()).all(|c| c.is_finite())
    }
}

/// Copy of a body's observable state, for renderers and reports
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub position: NVec2,
    pub velocity: NVec2,
    pub acceleration: NVec2,
    pub mass: f64,
    pub radius: f64,
    pub style: String,
}

impl From<&Body> for BodyView {
    fn from(b: &Body) -> Self {
        Self {
            position: b.x,
            velocity: b.v,
            acceleration: b.a,
            mass: b.m,
            radius: b.radius,
            style: b.style.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub(crate) bodies: Vec<Body>, // index order is the collision order
    pub(crate) params: Parameters,
}

impl System {
    pub fn new(bodies: Vec<Body>, params: Parameters) -> Self {
        Self { bodies, params }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Install new constants; they take effect on the next tick
    pub fn set_parameters(&mut self, params: Parameters) {
        self.params = params;
    }

    /// Copies of every body's state, in index order
    pub fn snapshot(&self) -> Vec<BodyView> {
        self.bodies.iter().map(BodyView::from).collect()
    }

    /// Advance the system by `dt` under Newtonian gravity
    pub fn tick(&mut self, dt: f64) {
        self.tick_with(&NewtonianGravity, dt);
    }

    /// Advance the system by `dt`:
    /// 1. evaluate every body's acceleration against the pre-tick positions,
    /// 2. integrate each body,
    /// 3. resolve overlapping pairs.
    pub fn tick_with<F>(&mut self, forces: &F, dt: f64)
    where
        F: Acceleration + ?Sized,
    {
        if self.bodies.is_empty() {
            return;
        }
        symplectic_euler(self, forces, dt);
        let contacts = self.resolve_collisions();
        if !contacts.is_empty() {
            debug!("resolved {} contacts", contacts.len());
        }
    }

    pub fn first_non_finite(&self) -> Option<usize> {
        self.bodies.iter().position(|b| !b.is_finite())
    }

    /// Report the first non-finite body, then the first exactly coincident pair
    pub fn check_state(&self) -> SimResult<()> {
        if let Some(index) = self.first_non_finite() {
            return Err(SimError::NonFiniteState { index });
        }
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                if self.bodies[i].x == self.bodies[j].x {
                    return Err(SimError::DegenerateGeometry { first: i, second: j });
                }
            }
        }
        Ok(())
    }
}
