//! Force / acceleration contributors for the n-body engine
//!
//! Gravity is evaluated per body as the field of every *other* body at its
//! position. `Acceleration` sources write into an output buffer, one slot
//! per body, and only read the system, so every body sees the same
//! snapshot of positions.

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};
use crate::simulation::vector::{NVec2, Vector2Ext};

impl Body {
    /// Gravitational acceleration this body imposes at `point`.
    /// Magnitude G * m / max(r^2, min_distance), pointing toward the body.
    /// A point exactly at the body's center gets the zero vector.
    pub fn gravitational_field(&self, point: NVec2, params: &Parameters) -> NVec2 {
        let dx = self.x - point;
        let r2 = dx.norm_squared();
        let magnitude = params.g * self.m / r2.max(params.min_distance);
        dx.normalized_or_zero() * magnitude
    }

    /// Potential -G * m / max(r, min_distance) at `point`.
    /// The floor applies to r here but to r^2 in the field.
    pub fn gravitational_potential_energy(&self, point: NVec2, params: &Parameters) -> f64 {
        let r = (self.x - point).norm();
        -params.g * self.m / r.max(params.min_distance)
    }
}

impl System {
    /// Sum of every body's field at `point`, skipping `exclude`
    pub fn field_at(&self, point: NVec2, exclude: Option<usize>) -> NVec2 {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != exclude)
            .fold(NVec2::zeros(), |acc, (_, b)| {
                acc + b.gravitational_field(point, &self.params)
            })
    }

    /// Potential energy of body `index` in the field of all the others.
    /// Zero for a single body; `None` if the index is out of range.
    pub fn potential_energy_of(&self, index: usize) -> Option<f64> {
        let target = self.bodies.get(index)?;
        let potential: f64 = self
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, b)| b.gravitational_potential_energy(target.x, &self.params))
            .sum();
        Some(potential * target.m)
    }
}

/// Trait for acceleration sources operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]);
}

/// Collection of acceleration terms whose contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` is overwritten with the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new().with(NewtonianGravity)
    }
}

impl Acceleration for AccelSet {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) {
        let mut total = vec![NVec2::zeros(); out.len()];
        self.accumulate_accels(sys, &mut total);
        for (o, t) in out.iter_mut().zip(total) {
            *o += t;
        }
    }
}

/// Direct O(n^2) Newtonian gravity using the system's own `Parameters`
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) {
        for (i, (b, a)) in sys.bodies.iter().zip(out.iter_mut()).enumerate() {
            // exclude i so a body never attracts itself
            *a += sys.field_at(b.x, Some(i));
        }
    }
}
