//! Core state types for the planetary N-body simulation.
//!
//! Defines the plain-data body record and the system that owns them:
//! - `Body` holds position/velocity/acceleration, mass, radius, and both
//!   orbit trails,
//! - `System` holds the ordered body list and the current simulation time `t`.
//!
//! Bodies never reference each other; all cross-body interaction is computed
//! transiently by the force field from the live collection.

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// RGB display color carried by each body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Dimmed variant used for the long-term orbit trace (factor 0.4).
    pub fn dimmed(self) -> Self {
        let dim = |c: u8| (c as f32 * 0.4) as u8;
        Self {
            r: dim(self.r),
            g: dim(self.g),
            b: dim(self.b),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub color: Color,
    pub x: NVec2, // position, meters
    pub v: NVec2, // velocity, m/s
    pub a: NVec2, // acceleration from the previous force pass, m/s^2
    pub m: f64, // mass, kg
    pub radius: f64, // physical radius, meters
    pub is_anchor: bool, // fixed gravitational source, excluded from integration
    pub distance_to_anchor: f64, // cached separation from the anchor, display only
    pub recent_trail: VecDeque<NVec2>, // bounded ring of the latest positions
    pub sparse_trail: Vec<NVec2>, // unbounded, appended every Kth tick
}

impl Body {
    pub fn new(name: impl Into<String>, color: Color, x: NVec2, v: NVec2, m: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            color,
            x,
            v,
            a: NVec2::zeros(),
            m,
            radius,
            is_anchor: false,
            distance_to_anchor: 0.0,
            recent_trail: VecDeque::new(),
            sparse_trail: Vec::new(),
        }
    }

    /// Mark this body as the anchor. Builder-style, used by scenario setup.
    pub fn anchored(mut self) -> Self {
        self.is_anchor = true;
        self
    }

    /// Push a position onto the recent trail, evicting the oldest point
    /// once `capacity` is exceeded.
    pub fn push_recent(&mut self, p: NVec2, capacity: usize) {
        self.recent_trail.push_back(p);
        while self.recent_trail.len() > capacity {
            self.recent_trail.pop_front();
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // insertion order is stable identity
    pub t: f64, // simulated seconds elapsed
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Index of the anchor body, if one exists.
    pub fn anchor_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.is_anchor)
    }
}
