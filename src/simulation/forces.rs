//! Gravitational force field for the N-body system.
//!
//! Direct O(n^2) pairwise Newtonian gravity. Body counts here are single
//! digits to low tens, so the full sum is cheaper than any tree scheme; the
//! contract (net acceleration per body from the live collection) would admit
//! a Barnes-Hut replacement without touching the integrator.

use crate::simulation::error::SimulationError;
use crate::simulation::states::{Body, NVec2, System};

/// Newtonian gravity over the full body collection.
///
/// Separation must be strictly positive for every pair; coincident bodies
/// are an invalid configuration and surface as a named error rather than a
/// silent NaN.
pub struct Gravity {
    pub g: f64, // gravitational constant
}

impl Gravity {
    /// Net gravitational acceleration on `bodies[i]` from every other body.
    ///
    /// Also returns the separation from the anchor when one is encountered,
    /// so the caller can refresh the body's display cache.
    pub fn acceleration_on(
        &self,
        bodies: &[Body],
        i: usize,
    ) -> Result<(NVec2, Option<f64>), SimulationError> {
        let b = &bodies[i];
        let mut total_force = NVec2::zeros();
        let mut anchor_distance = None;

        for (j, other) in bodies.iter().enumerate() {
            if j == i {
                continue;
            }

            // Displacement from b toward other; the pull acts along it.
            let delta = other.x - b.x;
            let d = delta.norm();
            if d == 0.0 {
                return Err(SimulationError::CoincidentBodies {
                    first: b.name.clone(),
                    second: other.name.clone(),
                    x: b.x.x,
                    y: b.x.y,
                });
            }
            if other.is_anchor {
                anchor_distance = Some(d);
            }

            // F = G m_b m_o / d^2, decomposed along the unit separation.
            let force_mag = self.g * b.m * other.m / (d * d);
            total_force += delta / d * force_mag;
        }

        Ok((total_force / b.m, anchor_distance))
    }

    /// Recompute `a` (and the anchor-distance cache) for every non-anchor
    /// body from the current positions. Anchor bodies keep zero acceleration.
    pub fn accumulate_accels(&self, sys: &mut System) -> Result<(), SimulationError> {
        for i in 0..sys.bodies.len() {
            if sys.bodies[i].is_anchor {
                continue;
            }
            let (a, anchor_distance) = self.acceleration_on(&sys.bodies, i)?;
            let b = &mut sys.bodies[i];
            b.a = a;
            if let Some(d) = anchor_distance {
                b.distance_to_anchor = d;
            }
        }
        Ok(())
    }
}
