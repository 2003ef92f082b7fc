//! Numerical and display parameters for the simulation.
//!
//! `Parameters` holds every constant fixed at startup:
//! - gravitational constant and base timestep,
//! - trail capacity and sparse-sampling interval,
//! - camera scales, smoothing factor, pan speed, and focus tolerances.

/// One astronomical unit in meters.
pub const AU: f64 = 149.6e9;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub base_timestep: f64, // simulated seconds per tick at multiplier 1.0
    pub multiplier_floor: f64, // lower bound on the time multiplier
    pub recent_trail_capacity: usize, // ring-buffer size of the glowing trace
    pub sparse_interval: u64, // append to the sparse trail every Kth tick
    pub initial_scale: f64, // view pixels per meter at startup
    pub focus_scale: f64, // scale the camera converges to when focused
    pub lerp_factor: f64, // per-tick convergence fraction for focus mode
    pub pan_speed: f64, // screen pixels moved per pan command
    pub focus_position_tolerance: f64, // meters; focus auto-clears inside this
    pub focus_scale_tolerance: f64, // px/m; focus auto-clears inside this
    pub viewport: (f64, f64), // viewport size in pixels, for centering
}

impl Default for Parameters {
    fn default() -> Self {
        let initial_scale = 60.0 / AU;
        Self {
            g: 6.67428e-11,
            base_timestep: 3600.0,
            multiplier_floor: 0.1,
            recent_trail_capacity: 400,
            sparse_interval: 15,
            initial_scale,
            focus_scale: initial_scale * 30.0,
            lerp_factor: 0.05,
            pan_speed: 20.0,
            focus_position_tolerance: 1e6,
            focus_scale_tolerance: 1e-12,
            viewport: (1920.0, 1080.0),
        }
    }
}
