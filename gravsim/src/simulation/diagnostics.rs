//! Conserved-quantity diagnostics over a whole system
//!
//! Used by the headless engine for periodic logging and by the tests to
//! check momentum and energy behaviour.

use std::fmt;

use super::states::System;
use super::vector::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    pub momentum: NVec2,
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub center_of_mass: NVec2,
}

impl Diagnostics {
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p = ({:.6}, {:.6}), KE = {:.6}, PE = {:.6}, E = {:.6}, com = ({:.4}, {:.4})",
            self.momentum.x,
            self.momentum.y,
            self.kinetic_energy,
            self.potential_energy,
            self.total_energy(),
            self.center_of_mass.x,
            self.center_of_mass.y,
        )
    }
}

impl System {
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(|b| b.momentum()).sum()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Pairwise potential energy, each unordered pair counted once
    pub fn total_potential_energy(&self) -> f64 {
        let mut total = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                total += bi.gravitational_potential_energy(bj.x, &self.params) * bj.m;
            }
        }
        total
    }

    pub fn total_energy(&self) -> f64 {
        self.total_kinetic_energy() + self.total_potential_energy()
    }

    /// Mass-weighted mean position; the origin for an empty system
    pub fn center_of_mass(&self) -> NVec2 {
        let mass = self.total_mass();
        if self.bodies.is_empty() {
            return NVec2::zeros();
        }
        self.bodies.iter().map(|b| b.x * b.m).sum::<NVec2>() / mass
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            momentum: self.total_momentum(),
            kinetic_energy: self.total_kinetic_energy(),
            potential_energy: self.total_potential_energy(),
            center_of_mass: self.center_of_mass(),
        }
    }
}
