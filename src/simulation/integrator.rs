//! Fixed-step velocity-Verlet integrator.
//!
//! One step runs three strict phases over the whole system; the ordering is
//! load-bearing for the scheme's second-order accuracy:
//! 1. drift every non-anchor body using the acceleration from the previous
//!    step, appending trail points,
//! 2. recompute accelerations once all positions have moved,
//! 3. kick velocities with the average of old and new accelerations.

use crate::simulation::error::SimulationError;
use crate::simulation::forces::Gravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Advance the system by `timestep` simulated seconds.
///
/// `frame` is the tick number after this step, used to decide whether the
/// sparse trail samples this tick. Anchor bodies are untouched in every
/// phase; they only act as gravitational sources.
pub fn verlet_step(
    sys: &mut System,
    forces: &Gravity,
    timestep: f64,
    frame: u64,
    params: &Parameters,
) -> Result<(), SimulationError> {
    if sys.bodies.is_empty() {
        return Ok(());
    }

    let dt = timestep;
    let sample_sparse = frame % params.sparse_interval == 0;

    // Phase 1: x_n+1 = x_n + v_n dt + 1/2 a_n dt^2, with trail appends.
    for b in sys.bodies.iter_mut() {
        if b.is_anchor {
            continue;
        }
        b.x += b.v * dt + b.a * (0.5 * dt * dt);
        let pos = b.x;
        b.push_recent(pos, params.recent_trail_capacity);
        if sample_sparse {
            b.sparse_trail.push(pos);
        }
    }

    // a_n must survive the recompute for the velocity average below.
    let old_accs: Vec<NVec2> = sys.bodies.iter().map(|b| b.a).collect();

    // Phase 2: accelerations at the new positions, all bodies moved first.
    forces.accumulate_accels(sys)?;

    // Phase 3: v_n+1 = v_n + 1/2 (a_n + a_n+1) dt.
    for (b, a_old) in sys.bodies.iter_mut().zip(old_accs.iter()) {
        if b.is_anchor {
            continue;
        }
        b.v += (a_old + b.a) * (0.5 * dt);
    }

    sys.t += dt;
    Ok(())
}
