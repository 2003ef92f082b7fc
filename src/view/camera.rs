//! Camera: maps simulation space to view space.
//!
//! Two modes:
//! - **free**: offset and scale move only on explicit pan/zoom commands,
//! - **focused**: offset and scale converge each tick toward a target body's
//!   live position and the focus scale via exponential smoothing.
//!
//! The focus target is a plain index into the body collection, never a
//! reference; a stale index degrades the camera to free mode. The transform
//! `screen = (sim - offset) * scale + viewport_center` is the single mapping
//! the renderer uses for bodies and both trails.

use log::debug;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

pub struct Camera {
    offset: NVec2, // simulation-space point centered in the viewport
    scale: f64, // view pixels per simulation meter
    focus: Option<usize>, // index of the followed body, if any
    initial_scale: f64,
    focus_scale: f64, // scale converged to while focused
    lerp_factor: f64, // per-tick convergence fraction
    pan_speed: f64, // screen pixels per pan command
    position_tolerance: f64, // focus auto-clears inside these
    scale_tolerance: f64,
    center: NVec2, // viewport center in pixels
}

impl Camera {
    pub fn new(params: &Parameters) -> Self {
        Self {
            offset: NVec2::zeros(),
            scale: params.initial_scale,
            focus: None,
            initial_scale: params.initial_scale,
            focus_scale: params.focus_scale,
            lerp_factor: params.lerp_factor,
            pan_speed: params.pan_speed,
            position_tolerance: params.focus_position_tolerance,
            scale_tolerance: params.focus_scale_tolerance,
            center: NVec2::new(params.viewport.0 / 2.0, params.viewport.1 / 2.0),
        }
    }

    /// Pan by a screen-space direction. Dividing by scale keeps the felt
    /// speed constant regardless of zoom. Drops any focus target.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.focus = None;
        self.offset += NVec2::new(dx, dy) * (self.pan_speed / self.scale);
    }

    /// Multiply the scale by `factor`. Non-positive or non-finite factors
    /// are ignored so the scale stays valid. Drops any focus target.
    pub fn zoom(&mut self, factor: f64) {
        self.focus = None;
        if factor.is_finite() && factor > 0.0 {
            self.scale *= factor;
        }
    }

    /// Back to the origin at the initial scale, focus cleared.
    pub fn reset(&mut self) {
        self.focus = None;
        self.offset = NVec2::zeros();
        self.scale = self.initial_scale;
    }

    pub fn focus_on(&mut self, index: usize) {
        self.focus = Some(index);
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// One smoothing step toward the focus target, if any. Auto-clears the
    /// focus once both offset and scale are within tolerance, or when the
    /// stored index no longer resolves to a body.
    pub fn update(&mut self, bodies: &[Body]) {
        let Some(index) = self.focus else {
            return;
        };
        let Some(target) = bodies.get(index) else {
            debug!("focus index {index} no longer valid, falling back to free mode");
            self.focus = None;
            return;
        };

        self.offset += (target.x - self.offset) * self.lerp_factor;
        self.scale += (self.focus_scale - self.scale) * self.lerp_factor;

        let converged = (target.x - self.offset).norm() < self.position_tolerance
            && (self.scale - self.focus_scale).abs() < self.scale_tolerance;
        if converged {
            debug!("camera converged on '{}', releasing focus", target.name);
            self.focus = None;
        }
    }

    /// Project a simulation-space point to screen pixels.
    pub fn sim_to_screen(&self, p: NVec2) -> NVec2 {
        (p - self.offset) * self.scale + self.center
    }

    /// Exact inverse of [`Camera::sim_to_screen`].
    pub fn screen_to_sim(&self, p: NVec2) -> NVec2 {
        (p - self.center) / self.scale + self.offset
    }

    pub fn offset(&self) -> NVec2 {
        self.offset
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Current zoom relative to the startup scale, for display.
    pub fn zoom_ratio(&self) -> f64 {
        self.scale / self.initial_scale
    }
}
