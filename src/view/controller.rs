//! Thin command layer between input/UI and the simulation core.
//!
//! The input layer produces discrete [`Command`]s; the controller applies
//! them atomically between ticks and hands the rendering layer everything it
//! needs, already projected through the camera transform.

use log::debug;

use crate::simulation::engine::Simulation;
use crate::simulation::states::{Color, NVec2};
use crate::view::camera::Camera;

/// Discrete commands produced by the input/UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Pan(f64, f64),
    Zoom(f64),
    SetTimeMultiplier(f64),
    ToggleInfoDisplay,
    SelectFocusTarget(usize),
    ClearFocusTarget,
    Reset,
}

/// Per-body render data, fully projected into screen space.
#[derive(Debug, Clone)]
pub struct RenderBody {
    pub name: String,
    pub color: Color,
    pub dimmed_color: Color, // for the sparse full-orbit trace
    pub screen_pos: NVec2,
    pub screen_radius: f64, // physical radius scaled, floored at 2 px
    pub recent_trail: Vec<NVec2>,
    pub sparse_trail: Vec<NVec2>,
    pub distance_to_anchor_gm: f64, // giga-meters, display units
    pub is_anchor: bool,
}

/// Scalar overlay values for the HUD.
#[derive(Debug, Clone, Copy)]
pub struct DisplayInfo {
    pub zoom_ratio: f64, // current scale over the initial scale
    pub time_multiplier: f64,
    pub show_info: bool,
}

pub struct ViewController {
    camera: Camera,
    show_info: bool,
}

impl ViewController {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            show_info: true,
        }
    }

    /// Apply one command. Commands referencing non-existent bodies are
    /// ignored; scale and multiplier excursions are clamped, never rejected.
    pub fn apply(&mut self, cmd: Command, sim: &mut Simulation) {
        match cmd {
            Command::Pan(dx, dy) => self.camera.pan(dx, dy),
            Command::Zoom(factor) => self.camera.zoom(factor),
            Command::SetTimeMultiplier(factor) => sim.scale_time_multiplier(factor),
            Command::ToggleInfoDisplay => self.show_info = !self.show_info,
            Command::SelectFocusTarget(id) => {
                if id < sim.bodies().len() {
                    self.camera.focus_on(id);
                } else {
                    debug!("ignoring focus request for unknown body id {id}");
                }
            }
            Command::ClearFocusTarget => self.camera.clear_focus(),
            Command::Reset => self.camera.reset(),
        }
    }

    /// Per-tick camera step; call after the physics tick, before rendering.
    pub fn update(&mut self, sim: &Simulation) {
        self.camera.update(sim.bodies());
    }

    /// Project every body and both of its trails through the camera.
    pub fn render_bodies(&self, sim: &Simulation) -> Vec<RenderBody> {
        sim.bodies()
            .iter()
            .map(|b| RenderBody {
                name: b.name.clone(),
                color: b.color,
                dimmed_color: b.color.dimmed(),
                screen_pos: self.camera.sim_to_screen(b.x),
                screen_radius: (b.radius * self.camera.scale()).max(2.0),
                recent_trail: b
                    .recent_trail
                    .iter()
                    .map(|&p| self.camera.sim_to_screen(p))
                    .collect(),
                sparse_trail: b
                    .sparse_trail
                    .iter()
                    .map(|&p| self.camera.sim_to_screen(p))
                    .collect(),
                distance_to_anchor_gm: b.distance_to_anchor / 1.0e9,
                is_anchor: b.is_anchor,
            })
            .collect()
    }

    pub fn display_info(&self, sim: &Simulation) -> DisplayInfo {
        DisplayInfo {
            zoom_ratio: self.camera.zoom_ratio(),
            time_multiplier: sim.time_multiplier(),
            show_info: self.show_info,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}
