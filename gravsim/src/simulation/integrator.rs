//! Time integration for the N-body system
//!
//! One force evaluation per step followed by a semi-implicit Euler update
//! of every body. Accelerations are fully materialised in a buffer before
//! any body is written.

use super::forces::Acceleration;
use super::states::System;
use super::vector::NVec2;

/// Advance every body of `sys` by `dt`, without collision handling.
///
/// `forces` reads the system as it stood at the start of the step, so the
/// acceleration of body 3 never reflects body 1's already-updated position.
pub fn symplectic_euler<F>(sys: &mut System, forces: &F, dt: f64)
where
    F: Acceleration + ?Sized,
{
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    // a_n from x_n, one private slot per body
    let mut accels = vec![NVec2::zeros(); n];
    forces.acceleration(&*sys, &mut accels);

    // v_n+1 = v_n + dt * a_n ; x_n+1 = x_n + dt * v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(accels) {
        b.a = a;
        b.integrate(dt);
    }
}
