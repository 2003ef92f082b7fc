//! Simulation owner: bodies, frame counter, and time multiplier.
//!
//! `Simulation` is the single writer of all body state. One `tick()` turns
//! the base timestep and the current multiplier into one integrator step;
//! pausing is simply not calling `tick()`.

use log::debug;

use crate::simulation::error::SimulationError;
use crate::simulation::forces::Gravity;
use crate::simulation::integrator::verlet_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

pub struct Simulation {
    pub params: Parameters,
    system: System,
    forces: Gravity,
    frame: u64,
    time_multiplier: f64,
}

impl Simulation {
    pub fn new(system: System, params: Parameters) -> Self {
        let forces = Gravity { g: params.g };
        Self {
            params,
            system,
            forces,
            frame: 0,
            time_multiplier: 1.0,
        }
    }

    /// Advance one tick: `timestep = base_timestep * multiplier`.
    pub fn tick(&mut self) -> Result<(), SimulationError> {
        let timestep = self.params.base_timestep * self.time_multiplier;
        self.frame += 1;
        verlet_step(
            &mut self.system,
            &self.forces,
            timestep,
            self.frame,
            &self.params,
        )
    }

    /// Scale the time multiplier, clamped to the configured floor.
    pub fn scale_time_multiplier(&mut self, factor: f64) {
        let next = self.time_multiplier * factor;
        self.time_multiplier = next.max(self.params.multiplier_floor);
        debug!("time multiplier -> {:.3}x", self.time_multiplier);
    }

    pub fn time_multiplier(&self) -> f64 {
        self.time_multiplier
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated seconds elapsed since the start of the run.
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }

    /// Ordered, read-only view of the bodies for the rendering layer.
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }
}
