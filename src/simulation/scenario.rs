//! Build fully-initialized simulation scenarios.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//!
//! Also provides the builtin solar-system preset: the Sun as anchor plus the
//! eight planets, each starting on the negative x axis with a tangential
//! y-velocity.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::error::SimulationError;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, Color, NVec2, System};

/// name, color, mass (kg), radius (km), orbit distance (AU), y-velocity (km/s)
const PLANET_DATA: [(&str, Color, f64, f64, f64, f64); 8] = [
    ("Mercury", Color::new(255, 204, 153), 0.33e24, 2439.0, 0.4, 47.4),
    ("Venus", Color::new(255, 153, 153), 4.87e24, 6051.0, 0.7, 35.0),
    ("Earth", Color::new(0, 102, 255), 5.97e24, 6371.0, 1.0, 29.8),
    ("Mars", Color::new(255, 102, 0), 0.642e24, 3389.0, 1.5, 24.0),
    ("Jupiter", Color::new(204, 153, 0), 1898e24, 69911.0, 5.2, 13.1),
    ("Saturn", Color::new(255, 255, 204), 568e24, 58232.0, 9.5, 9.7),
    ("Uranus", Color::new(0, 153, 255), 86.8e24, 25362.0, 19.8, 6.8),
    ("Neptune", Color::new(102, 153, 255), 102e24, 24622.0, 30.0, 5.4),
];

/// A fully-initialized runtime scenario: parameters plus the body set at
/// t = 0. Feed it to [`Simulation`] via [`Scenario::into_simulation`].
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    /// Map a `ScenarioConfig` into the runtime representation, validating
    /// the body list (vector arity, positive mass, exactly one anchor).
    pub fn build(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        let p = cfg.parameters;
        let viewport = match p.viewport.as_slice() {
            [w, h] => (*w, *h),
            other => {
                return Err(SimulationError::BadBodyVector {
                    name: "parameters".into(),
                    field: "viewport",
                    len: other.len(),
                })
            }
        };
        let parameters = Parameters {
            g: p.g,
            base_timestep: p.base_timestep,
            multiplier_floor: p.multiplier_floor,
            recent_trail_capacity: p.recent_trail_capacity,
            sparse_interval: p.sparse_interval,
            initial_scale: p.initial_scale,
            focus_scale: p.focus_scale,
            lerp_factor: p.lerp_factor,
            pan_speed: p.pan_speed,
            viewport,
            ..Parameters::default()
        };

        let bodies = cfg
            .bodies
            .iter()
            .map(build_body)
            .collect::<Result<Vec<_>, _>>()?;

        let anchors = bodies.iter().filter(|b| b.is_anchor).count();
        if anchors != 1 {
            return Err(SimulationError::AnchorCount { count: anchors });
        }

        Ok(Self {
            parameters,
            system: System::new(bodies),
        })
    }

    /// The Sun plus the eight planets, at the original demo's masses,
    /// radii, distances, and tangential velocities.
    pub fn solar_system() -> Self {
        let mut bodies = vec![Body::new(
            "Sun",
            Color::new(255, 204, 0),
            NVec2::zeros(),
            NVec2::zeros(),
            1.98892e30,
            696_340.0 * 1000.0,
        )
        .anchored()];

        for (name, color, mass, radius_km, dist_au, y_vel_kms) in PLANET_DATA {
            bodies.push(Body::new(
                name,
                color,
                NVec2::new(-dist_au * AU, 0.0),
                NVec2::new(0.0, y_vel_kms * 1000.0),
                mass,
                radius_km * 1000.0,
            ));
        }

        Self {
            parameters: Parameters::default(),
            system: System::new(bodies),
        }
    }

    pub fn into_simulation(self) -> Simulation {
        Simulation::new(self.system, self.parameters)
    }
}

fn build_body(bc: &BodyConfig) -> Result<Body, SimulationError> {
    let vec2 = |field: &'static str, v: &[f64]| match v {
        [a, b] => Ok(NVec2::new(*a, *b)),
        other => Err(SimulationError::BadBodyVector {
            name: bc.name.clone(),
            field,
            len: other.len(),
        }),
    };
    if bc.m <= 0.0 {
        return Err(SimulationError::BadBodyScalar {
            name: bc.name.clone(),
            reason: format!("mass must be > 0, got {}", bc.m),
        });
    }
    if bc.radius < 0.0 {
        return Err(SimulationError::BadBodyScalar {
            name: bc.name.clone(),
            reason: format!("radius must be >= 0, got {}", bc.radius),
        });
    }

    let [r, g, b] = bc.color;
    let body = Body::new(
        bc.name.clone(),
        Color::new(r, g, b),
        vec2("x", &bc.x)?,
        vec2("v", &bc.v)?,
        bc.m,
        bc.radius,
    );
    Ok(if bc.anchor { body.anchored() } else { body })
}
