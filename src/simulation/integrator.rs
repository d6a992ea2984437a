//! Fixed-step time integrator for the planetary system
//!
//! Provides a semi-implicit (symplectic) Euler step driven by `ForceSet`
//! and `Parameters`: velocities are kicked with the start-of-step forces,
//! then positions drift with the just-updated velocities.

use super::forces::{anchor_distances, ForceError, ForceSet};
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step using semi-implicit Euler.
///
/// The step runs in two phases. First every force and every anchor distance
/// is evaluated against the start-of-step positions, with no body mutated.
/// Only then is each body committed: velocity, position, anchor distance,
/// orbit history. Later bodies therefore never see already-advanced peers,
/// and the outcome does not depend on body order beyond floating-point
/// summation order.
///
/// A degenerate pair fails the step before any state changes, leaving the
/// system at the last good tick.
pub fn euler_integrator(sys: &mut System, forces: &ForceSet, params: &Parameters) -> Result<(), ForceError> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, nothing to advance
        return Ok(());
    }

    let dt = params.timestep;

    // f_total[i] will hold the net force on body i at the current time t
    let mut f_total = vec![NVec2::zeros(); n];
    forces.accumulate_forces(sys.t, &*sys, &mut f_total)?;

    // Anchor separations measured on the same snapshot as the forces
    let dists = anchor_distances(&*sys);

    // Commit phase, one body at a time:
    for ((b, f), d) in sys.bodies.iter_mut().zip(f_total.iter()).zip(dists.iter()) {
        // Kick: v_n+1 = v_n + (F/m) * dt, force evaluated at x_n
        b.v += *f / b.m * dt;

        // Drift with the updated velocity: x_n+1 = x_n + v_n+1 * dt
        b.x += b.v * dt;

        if let Some(d) = d {
            b.distance_to_anchor = *d;
        }

        // One history point per completed step
        b.orbit.push(b.x);
    }

    // Increment the system time by one full step
    sys.t += dt;

    Ok(())
}
