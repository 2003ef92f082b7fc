//! Timing harness for the force evaluation and the full Verlet step.
//!
//! Builds deterministic synthetic systems (no rand needed) at several body
//! counts and prints a small table. Body counts well beyond the intended
//! single-digit scenarios are included to show where the direct O(n^2) sum
//! stops being free.

use std::time::Instant;

use crate::simulation::forces::Gravity;
use crate::simulation::integrator::verlet_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Color, NVec2, System};

/// Deterministic ring of test bodies around a heavy anchor at the origin.
fn synthetic_system(n: usize) -> System {
    let mut bodies = vec![Body::new(
        "anchor",
        Color::new(255, 255, 255),
        NVec2::zeros(),
        NVec2::zeros(),
        1.0e30,
        1.0e6,
    )
    .anchored()];

    for i in 1..n {
        let i_f = i as f64;
        let x = NVec2::new(
            (i_f * 0.37).sin() * 2.0e11 + i_f * 1.0e7,
            (i_f * 0.13).cos() * 2.0e11 + i_f * 1.0e7,
        );
        bodies.push(Body::new(
            format!("b{i}"),
            Color::new(200, 200, 200),
            x,
            NVec2::new(0.0, 3.0e4),
            1.0e24,
            1.0e6,
        ));
    }

    System::new(bodies)
}

pub fn bench_gravity() {
    let ns = [8, 32, 128, 512, 2048];
    let params = Parameters::default();
    let gravity = Gravity { g: params.g };

    for n in ns {
        let mut sys = synthetic_system(n);

        // Warm up
        gravity
            .accumulate_accels(&mut sys)
            .expect("synthetic bodies are distinct");

        let t0 = Instant::now();
        gravity
            .accumulate_accels(&mut sys)
            .expect("synthetic bodies are distinct");
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity pass = {dt:10.6} s");
    }
}

pub fn bench_verlet() {
    let ns = [8, 32, 128, 512];
    let steps: u64 = 1000;
    let params = Parameters::default();
    let gravity = Gravity { g: params.g };

    for n in ns {
        let mut sys = synthetic_system(n);

        let t0 = Instant::now();
        for frame in 1..=steps {
            verlet_step(&mut sys, &gravity, params.base_timestep, frame, &params)
                .expect("synthetic bodies are distinct");
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {steps} verlet steps = {dt:10.6} s ({:8.1} steps/s)",
            steps as f64 / dt
        );
    }
}
