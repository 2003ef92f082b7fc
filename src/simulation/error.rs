//! Error types surfaced by the simulation core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// Two bodies occupy the exact same position, so the pairwise force is
    /// a division by zero. This is an invalid initial configuration, not a
    /// runtime condition to smooth over.
    #[error("bodies '{first}' and '{second}' occupy the same position ({x}, {y})")]
    CoincidentBodies {
        first: String,
        second: String,
        x: f64,
        y: f64,
    },

    /// A scenario must designate exactly one anchor body.
    #[error("scenario defines {count} anchor bodies, expected exactly 1")]
    AnchorCount { count: usize },

    /// A configured body vector did not have exactly two components.
    #[error("body '{name}': field '{field}' must have 2 components, got {len}")]
    BadBodyVector {
        name: String,
        field: &'static str,
        len: usize,
    },

    /// A configured scalar was outside its valid range.
    #[error("body '{name}': {reason}")]
    BadBodyScalar { name: String, reason: String },
}
