//! Session configuration and engine-wide constants.

use std::time::Duration;

use crate::heuristic::{Algorithm, HeuristicKind};
use crate::search::{Relaxation, SearchConfig};

/// Side length of a freshly opened grid.
pub const DEFAULT_DIMENSION: i32 = 25;
/// Smallest accepted side length.
pub const MIN_DIMENSION: i32 = 1;
/// Largest accepted side length.
pub const MAX_DIMENSION: i32 = 100;
/// Upper bound of the speed setting. The stepped-mode delay is
/// `MAX_SPEED - speed` milliseconds.
pub const MAX_SPEED: u8 = 100;
/// Speed a fresh session starts with.
pub const DEFAULT_SPEED: u8 = 50;
/// Pause between two colour transitions of the path animation.
pub const TRICKLE_INTERVAL: Duration = Duration::from_millis(30);

/// Everything a user can toggle on a [`Session`](crate::Session).
///
/// `reset()` restores a session to the configuration it was built with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub dimension: i32,
    pub speed: u8,
    pub heuristic: HeuristicKind,
    pub algorithm: Algorithm,
    pub diagonals: bool,
    pub show_steps: bool,
    pub relaxation: Relaxation,
    pub trickle_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            speed: DEFAULT_SPEED,
            heuristic: HeuristicKind::Manhattan,
            algorithm: Algorithm::Standard,
            diagonals: false,
            show_steps: false,
            relaxation: Relaxation::Cost,
            trickle_interval: TRICKLE_INTERVAL,
        }
    }
}

impl SessionConfig {
    /// Set the grid side length (builder).
    pub fn with_dimension(mut self, dimension: i32) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the step rate, clamped to `0..=MAX_SPEED` (builder).
    pub fn with_speed(mut self, speed: u8) -> Self {
        self.speed = speed.min(MAX_SPEED);
        self
    }

    /// Set the distance heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the algorithm toggle (builder).
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Allow or forbid diagonal moves (builder).
    pub fn with_diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    /// Stepped (`true`) or instant (`false`) scheduling (builder).
    pub fn with_show_steps(mut self, show_steps: bool) -> Self {
        self.show_steps = show_steps;
        self
    }

    /// Choose the relaxation test (builder).
    pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.relaxation = relaxation;
        self
    }

    /// Set the path animation interval (builder).
    pub fn with_trickle_interval(mut self, interval: Duration) -> Self {
        self.trickle_interval = interval;
        self
    }

    /// The subset of settings a search snapshots when it starts.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            heuristic: self.heuristic,
            algorithm: self.algorithm,
            diagonals: self.diagonals,
            relaxation: self.relaxation,
        }
    }

    /// Delay between two steps in stepped mode.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(u64::from(MAX_SPEED.saturating_sub(self.speed)))
    }
}
