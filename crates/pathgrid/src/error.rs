//! Errors raised at the session command boundary.

use thiserror::Error;

use crate::config::{MAX_DIMENSION, MIN_DIMENSION};
use crate::geom::Point;
use crate::state::SearchState;

/// Everything an inbound command can be rejected with.
///
/// All variants except [`Spawn`](EngineError::Spawn) are user input errors:
/// the session reports them as a [`Notification::Message`](crate::Notification)
/// and leaves its state untouched.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Start node not set")]
    MissingStart,

    #[error("Goal node not set")]
    MissingGoal,

    #[error("Cannot {action} while the search is {state}")]
    SearchInProgress {
        action: &'static str,
        state: SearchState,
    },

    #[error("{pos} is outside the {dimension}x{dimension} grid")]
    OutOfBounds { pos: Point, dimension: i32 },

    #[error("Grid dimension {0} is outside {min}..={max}", min = MIN_DIMENSION, max = MAX_DIMENSION)]
    InvalidDimension(i32),

    #[error("Wall density {0} is outside 0..=1")]
    InvalidDensity(f64),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

impl EngineError {
    /// Whether the error stems from user input rather than the engine itself.
    pub fn is_user_input(&self) -> bool {
        !matches!(self, Self::Spawn(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
