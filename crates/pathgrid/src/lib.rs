//! **pathgrid**: an incremental A*/Dijkstra search over a mutable 2D grid.
//!
//! The engine is organised around a [`Session`]: it owns the [`GridModel`]
//! (walls, start, goal and search overlays), drives a [`SearchController`]
//! one step at a time on a background worker, and animates the solved path
//! until the session is reset or a new search begins. Every visible change
//! is published through a [`Notifier`] so a renderer can follow the search
//! as it unfolds.
//!
//! # Components
//!
//! | Module | Role |
//! |---|---|
//! | [`grid`] | Cell classification for an N×N grid |
//! | [`node`] | Per-cell search bookkeeping and open-set ordering |
//! | [`heuristic`] | Manhattan / Euclidean estimates, uniform-cost toggle |
//! | [`search`] | Open/closed sets and the single-step A* loop |
//! | [`state`] | The search state machine |
//! | [`scheduler`] | Background step worker |
//! | [`animator`] | Path trickle animation |
//! | [`session`] | Command boundary tying everything together |
//!
//! The controller can also be used on its own, synchronously:
//!
//! ```
//! use pathgrid::{GridModel, Point, SearchConfig, SearchController, StepOutcome};
//!
//! let grid = GridModel::with_defaults(5).unwrap();
//! let mut search = SearchController::new(&grid, SearchConfig::default()).unwrap();
//! match search.run_to_end() {
//!     StepOutcome::Found(path) => assert_eq!(path.moves(), 8),
//!     other => panic!("unexpected outcome {other:?}"),
//! }
//! ```

pub mod animator;
pub mod config;
pub mod context;
pub mod error;
pub mod geom;
pub mod grid;
pub mod heuristic;
pub mod neighbors;
pub mod node;
pub mod notify;
pub mod scheduler;
pub mod search;
pub mod session;
pub mod snapshot;
pub mod state;

pub use config::{
    DEFAULT_DIMENSION, DEFAULT_SPEED, MAX_DIMENSION, MAX_SPEED, MIN_DIMENSION, SessionConfig,
    TRICKLE_INTERVAL,
};
pub use context::Context;
pub use error::EngineError;
pub use geom::Point;
pub use grid::{CellChange, CellClass, GridModel};
pub use heuristic::{Algorithm, Heuristic, HeuristicKind, UNIFORM_COST_HEURISTIC};
pub use node::SearchNode;
pub use notify::{Notification, Notifier};
pub use search::{Relaxation, SearchConfig, SearchController, SolvedPath, StepOutcome};
pub use session::Session;
pub use snapshot::GridSnapshot;
pub use state::{SearchState, Trigger};
