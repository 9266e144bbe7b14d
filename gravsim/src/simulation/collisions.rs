//! Contact resolution between overlapping discs
//!
//! Each overlapping pair is pushed apart by exactly its penetration depth,
//! split by inverse mass, and receives an equal and opposite impulse along
//! the contact normal. Pairs are visited once per pass in `(i, j)`, `i < j`
//! order without re-checking, so a body touching two others is corrected
//! against each in turn. Passes after the first only add an impulse to
//! pairs that are still approaching.

use log::warn;

use super::states::{Body, System};

/// What a single pair resolution changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub first: usize,
    pub second: usize,
    pub depth: f64, // negative surface distance before correction
    pub impulse: f64, // signed impulse magnitude along first -> second
}

impl System {
    /// Resolve every overlapping pair, `collision_passes` times.
    /// Returns the contacts resolved in the last pass.
    pub fn resolve_collisions(&mut self) -> Vec<Contact> {
        let mut contacts = Vec::new();
        for pass in 0..self.params.collision_passes.max(1) {
            contacts = self.resolve_pass(pass == 0);
            if contacts.is_empty() {
                break;
            }
        }
        contacts
    }

    fn resolve_pass(&mut self, first_pass: bool) -> Vec<Contact> {
        let n = self.bodies.len();
        let mut contacts = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let (left, right) = self.bodies.split_at_mut(j);
                if let Some(contact) = resolve_pair(&mut left[i], &mut right[0], i, j, first_pass) {
                    contacts.push(contact);
                }
            }
        }
        contacts
    }
}

fn resolve_pair(
    bi: &mut Body,
    bj: &mut Body,
    i: usize,
    j: usize,
    first_pass: bool,
) -> Option<Contact> {
    let distance = bi.surface_distance_to(bj);
    if distance >= 0.0 {
        return None;
    }

    let direction = bi.direction_to(bj);
    if direction.x == 0.0 && direction.y == 0.0 {
        // coincident centers: no contact normal exists
        warn!("bodies {i} and {j} are coincident, skipping contact");
        return None;
    }

    let inv_i = bi.inverse_mass();
    let inv_j = bj.inverse_mass();
    let inv_sum = inv_i + inv_j;

    // Position: distance is negative, so i moves away from j and j away from i
    let depth_resolution = direction * (distance / inv_sum);
    bi.x += depth_resolution * inv_i;
    bj.x -= depth_resolution * inv_j;

    // Velocity: impulse along the normal, restitution of the less elastic body
    let relative_velocity = bi.v - bj.v;
    let closing_speed = relative_velocity.dot(&direction);
    if !first_pass && closing_speed <= 0.0 {
        // already separating: later passes only correct positions
        return Some(Contact {
            first: i,
            second: j,
            depth: -distance,
            impulse: 0.0,
        });
    }
    let restitution = bi.elasticity.min(bj.elasticity);
    let separation_speed = -closing_speed * (1.0 + restitution);
    let impulse_magnitude = separation_speed / inv_sum;
    let impulse = direction * impulse_magnitude;

    bi.v += impulse * inv_i;
    bj.v -= impulse * inv_j;

    Some(Contact {
        first: i,
        second: j,
        depth: -distance,
        impulse: impulse_magnitude,
    })
}
