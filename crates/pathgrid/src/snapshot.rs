//! Import/export of the user-editable part of a grid.
//!
//! A [`GridSnapshot`] carries `{dimension, walls, start, goal}` and nothing
//! else: search overlays are never persisted. The on-disk format is left to
//! the caller; with the `serde` feature the snapshot derives
//! `Serialize`/`Deserialize`.

use std::collections::BTreeSet;

use crate::config::{MAX_DIMENSION, MIN_DIMENSION};
use crate::error::{EngineError, Result};
use crate::geom::Point;
use crate::grid::{CellClass, GridModel};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    pub dimension: i32,
    /// Wall cells in row-major order.
    pub walls: Vec<Point>,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

impl GridSnapshot {
    /// Capture the walls and endpoints of `grid`.
    pub fn capture(grid: &GridModel) -> Self {
        Self {
            dimension: grid.dimension(),
            walls: grid.cells_of_class(CellClass::Wall).into_iter().collect(),
            start: grid.start(),
            goal: grid.goal(),
        }
    }

    /// Check that the snapshot describes a consistent grid.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(EngineError::InvalidSnapshot(msg));
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.dimension) {
            return invalid(format!(
                "dimension {} is outside {}..={}",
                self.dimension, MIN_DIMENSION, MAX_DIMENSION
            ));
        }
        let d = self.dimension;
        for (name, p) in [("start", self.start), ("goal", self.goal)] {
            if let Some(p) = p.filter(|p| !p.in_square(d)) {
                return invalid(format!("{name} {p} is outside the {d}x{d} grid"));
            }
        }
        if self.start.is_some() && self.start == self.goal {
            return invalid("start and goal share a cell".to_string());
        }
        let mut seen = BTreeSet::new();
        for &w in &self.walls {
            if !w.in_square(d) {
                return invalid(format!("wall {w} is outside the {d}x{d} grid"));
            }
            if Some(w) == self.start || Some(w) == self.goal {
                return invalid(format!("wall {w} overlaps an endpoint"));
            }
            if !seen.insert(w) {
                return invalid(format!("wall {w} is listed twice"));
            }
        }
        Ok(())
    }

    /// Build the grid described by the snapshot.
    pub fn to_grid(&self) -> Result<GridModel> {
        self.validate()?;
        let mut grid = GridModel::new(self.dimension)?;
        for &w in &self.walls {
            grid.set_cell(w, CellClass::Wall)?;
        }
        if let Some(s) = self.start {
            grid.set_cell(s, CellClass::Start)?;
        }
        if let Some(g) = self.goal {
            grid.set_cell(g, CellClass::Goal)?;
        }
        Ok(grid)
    }
}
