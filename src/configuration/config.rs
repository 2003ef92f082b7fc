//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario:
//!
//! - [`ParametersConfig`] – numerical constants and camera/display tuning
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 6.67428e-11          # gravitational constant
//!   base_timestep: 3600.0   # simulated seconds per tick at 1.0x
//!   multiplier_floor: 0.1   # time multiplier never drops below this
//!   recent_trail_capacity: 400
//!   sparse_interval: 15     # sparse trail samples every Kth tick
//!   initial_scale: 4.0e-10  # view pixels per meter at startup
//!   focus_scale: 1.2e-8     # scale converged to when following a body
//!   lerp_factor: 0.05       # per-tick camera convergence fraction
//!   pan_speed: 20.0         # screen pixels per pan command
//!   viewport: [1920.0, 1080.0]
//!
//! bodies:
//!   - name: "Sun"
//!     color: [255, 204, 0]
//!     anchor: true
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.98892e30
//!     radius: 6.9634e8
//!   - name: "Earth"
//!     color: [0, 102, 255]
//!     x: [-1.496e11, 0.0]
//!     v: [0.0, 2.98e4]
//!     m: 5.97e24
//!     radius: 6.371e6
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation; body vectors become `nalgebra` types there.

use serde::Deserialize;

/// Numerical constants and display tuning for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64,                       // gravitational constant
    pub base_timestep: f64,           // simulated seconds per tick at 1.0x
    pub multiplier_floor: f64,        // lower bound for the time multiplier
    pub recent_trail_capacity: usize, // ring-buffer size for the recent trail
    pub sparse_interval: u64,         // sparse trail sampling period in ticks
    pub initial_scale: f64,           // view pixels per meter at startup
    pub focus_scale: f64,             // scale converged to in focus mode
    pub lerp_factor: f64,             // per-tick camera convergence fraction
    pub pan_speed: f64,               // screen pixels per pan command
    pub viewport: Vec<f64>,           // [width, height] in pixels
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,     // display name
    pub color: [u8; 3],   // display color, RGB
    #[serde(default)]
    pub anchor: bool,     // fixed gravitational source; exactly one per scenario
    pub x: Vec<f64>,      // initial position in meters
    pub v: Vec<f64>,      // initial velocity in meters per second
    pub m: f64,           // mass in kilograms
    pub radius: f64,      // physical radius in meters
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and display parameters
    pub bodies: Vec<BodyConfig>,      // initial state of the system
}
