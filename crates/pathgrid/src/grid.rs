//! The [`GridModel`]: cell classification for an N×N grid.
//!
//! Every cell holds exactly one [`CellClass`]. At most one `Start` and one
//! `Goal` exist at a time: placing a new one clears the previous cell of that
//! class. Mutations return the [`CellChange`]s they produced so the caller
//! can publish them to a renderer.

use std::collections::BTreeSet;

use rand::Rng;

use crate::config::{MAX_DIMENSION, MIN_DIMENSION};
use crate::error::{EngineError, Result};
use crate::geom::Point;

/// The classification of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellClass {
    #[default]
    Empty,
    Wall,
    Start,
    Goal,
    /// Discovered by the search, waiting in the open set.
    Open,
    /// Already expanded by the search.
    Closed,
    /// Part of the solved path.
    Path,
    /// The moving highlight of the path animation.
    PathTrickle,
}

impl CellClass {
    /// Whether the class only exists as a by-product of a search.
    #[inline]
    pub fn is_overlay(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path | Self::PathTrickle)
    }

    /// Whether a search may step onto a cell of this class.
    #[inline]
    pub fn is_passable(self) -> bool {
        self != Self::Wall
    }

    /// Whether this class is one of the two single-instance classes.
    #[inline]
    fn is_unique(self) -> bool {
        matches!(self, Self::Start | Self::Goal)
    }
}

/// A single cell whose class changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellChange {
    pub pos: Point,
    pub class: CellClass,
}

impl CellChange {
    #[inline]
    pub const fn new(pos: Point, class: CellClass) -> Self {
        Self { pos, class }
    }
}

/// Cell classification for a square grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    dimension: i32,
    cells: Vec<CellClass>,
}

impl GridModel {
    /// Create an empty `dimension`×`dimension` grid.
    pub fn new(dimension: i32) -> Result<Self> {
        check_dimension(dimension)?;
        let len = (dimension * dimension) as usize;
        Ok(Self {
            dimension,
            cells: vec![CellClass::Empty; len],
        })
    }

    /// Create the canonical grid: no walls, start at the origin and goal in
    /// the opposite corner.
    pub fn with_defaults(dimension: i32) -> Result<Self> {
        let mut grid = Self::new(dimension)?;
        grid.seed_start_and_goal();
        Ok(grid)
    }

    /// Side length of the grid.
    #[inline]
    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.in_square(self.dimension)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.dimension + p.x) as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let d = self.dimension as usize;
        Point::new((idx % d) as i32, (idx / d) as i32)
    }

    /// Class of the cell at `p`, or `None` if out of bounds.
    pub fn class_at(&self, p: Point) -> Option<CellClass> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn classes(&self) -> &[CellClass] {
        &self.cells
    }

    /// Classify the cell at `p`.
    ///
    /// Placing a `Start` or `Goal` first clears the existing cell of that
    /// class. Any class previously held by `p` is overwritten.
    pub fn set_cell(&mut self, p: Point, class: CellClass) -> Result<Vec<CellChange>> {
        let idx = self.index(p).ok_or(EngineError::OutOfBounds {
            pos: p,
            dimension: self.dimension,
        })?;

        if self.cells[idx] == class {
            return Ok(Vec::new());
        }

        let mut changes = Vec::new();
        if class.is_unique() {
            changes.extend(self.remove_cells_of_class(class));
        }
        self.cells[idx] = class;
        changes.push(CellChange::new(p, class));
        Ok(changes)
    }

    /// Turn a wall at `p` back into an empty cell. Other classes are left
    /// alone.
    pub fn remove_wall(&mut self, p: Point) -> Result<Vec<CellChange>> {
        match self.class_at(p) {
            Some(CellClass::Wall) => self.set_cell(p, CellClass::Empty),
            Some(_) => Ok(Vec::new()),
            None => Err(EngineError::OutOfBounds {
                pos: p,
                dimension: self.dimension,
            }),
        }
    }

    /// Clear every cell of `class`, returning the cells that were emptied.
    pub fn remove_cells_of_class(&mut self, class: CellClass) -> Vec<CellChange> {
        let d = self.dimension as usize;
        let mut changes = Vec::new();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if *cell == class {
                *cell = CellClass::Empty;
                changes.push(CellChange::new(
                    Point::new((i % d) as i32, (i / d) as i32),
                    CellClass::Empty,
                ));
            }
        }
        changes
    }

    /// All cells of `class`, in row-major order.
    pub fn cells_of_class(&self, class: CellClass) -> BTreeSet<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, c)| *c == class)
            .map(|(i, _)| self.point(i))
            .collect()
    }

    /// Position of the start cell, if placed.
    pub fn start(&self) -> Option<Point> {
        self.first_of(CellClass::Start)
    }

    /// Position of the goal cell, if placed.
    pub fn goal(&self) -> Option<Point> {
        self.first_of(CellClass::Goal)
    }

    fn first_of(&self, class: CellClass) -> Option<Point> {
        self.cells
            .iter()
            .position(|&c| c == class)
            .map(|i| self.point(i))
    }

    /// Remove every search overlay (open, closed and path cells).
    pub fn clear_overlays(&mut self) -> Vec<CellChange> {
        let mut changes = Vec::new();
        for class in [
            CellClass::Open,
            CellClass::Closed,
            CellClass::Path,
            CellClass::PathTrickle,
        ] {
            changes.extend(self.remove_cells_of_class(class));
        }
        changes.sort_by_key(|c| c.pos);
        changes
    }

    /// Change the side length. Cells inside the new bounds keep their class;
    /// a start or goal that falls outside is dropped and must be placed
    /// again.
    pub fn resize(&mut self, dimension: i32) -> Result<()> {
        check_dimension(dimension)?;
        if dimension == self.dimension {
            return Ok(());
        }
        let mut resized = Self::new(dimension)?;
        for (i, &class) in self.cells.iter().enumerate() {
            let p = self.point(i);
            if let Some(j) = resized.index(p) {
                resized.cells[j] = class;
            }
        }
        *self = resized;
        Ok(())
    }

    /// Restore the canonical grid for `dimension`.
    pub fn reset(&mut self, dimension: i32) -> Result<()> {
        *self = Self::with_defaults(dimension)?;
        Ok(())
    }

    /// Turn roughly `density` of the empty cells into walls. The density is
    /// clamped to `0..=1`; NaN scatters nothing.
    pub fn scatter_walls<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> Vec<CellChange> {
        if density.is_nan() {
            return Vec::new();
        }
        let density = density.clamp(0.0, 1.0);
        let mut changes = Vec::new();
        for i in 0..self.cells.len() {
            if self.cells[i] == CellClass::Empty && rng.random_bool(density) {
                self.cells[i] = CellClass::Wall;
                changes.push(CellChange::new(self.point(i), CellClass::Wall));
            }
        }
        changes
    }

    fn seed_start_and_goal(&mut self) {
        let last = self.dimension - 1;
        let start = Point::ZERO;
        let goal = Point::new(last, last);
        if let Some(i) = self.index(start) {
            self.cells[i] = CellClass::Start;
        }
        // A 1x1 grid has no room for a goal.
        if goal != start {
            if let Some(i) = self.index(goal) {
                self.cells[i] = CellClass::Goal;
            }
        }
    }
}

fn check_dimension(dimension: i32) -> Result<()> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
        Ok(())
    } else {
        Err(EngineError::InvalidDimension(dimension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn defaults_place_start_and_goal() {
        let g = GridModel::with_defaults(10).unwrap();
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.goal(), Some(Point::new(9, 9)));
        assert!(g.cells_of_class(CellClass::Wall).is_empty());
    }

    #[test]
    fn invalid_dimensions_rejected() {
        assert!(matches!(
            GridModel::new(0),
            Err(EngineError::InvalidDimension(0))
        ));
        assert!(GridModel::new(MAX_DIMENSION + 1).is_err());
        assert!(GridModel::new(MAX_DIMENSION).is_ok());
    }

    #[test]
    fn start_is_single_instance() {
        let mut g = GridModel::with_defaults(5).unwrap();
        let changes = g.set_cell(Point::new(2, 2), CellClass::Start).unwrap();
        assert_eq!(g.cells_of_class(CellClass::Start).len(), 1);
        assert_eq!(g.start(), Some(Point::new(2, 2)));
        assert_eq!(g.class_at(Point::ZERO), Some(CellClass::Empty));
        assert_eq!(
            changes,
            vec![
                CellChange::new(Point::ZERO, CellClass::Empty),
                CellChange::new(Point::new(2, 2), CellClass::Start),
            ]
        );
    }

    #[test]
    fn replacing_start_in_place_is_quiet() {
        let mut g = GridModel::with_defaults(5).unwrap();
        let changes = g.set_cell(Point::ZERO, CellClass::Start).unwrap();
        assert!(changes.is_empty());
        assert_eq!(g.start(), Some(Point::ZERO));
    }

    #[test]
    fn walls_accumulate_and_overwrite() {
        let mut g = GridModel::with_defaults(5).unwrap();
        g.set_cell(Point::new(1, 1), CellClass::Wall).unwrap();
        g.set_cell(Point::new(2, 1), CellClass::Wall).unwrap();
        assert_eq!(g.cells_of_class(CellClass::Wall).len(), 2);

        // A wall painted over the goal removes the goal.
        g.set_cell(Point::new(4, 4), CellClass::Wall).unwrap();
        assert_eq!(g.goal(), None);
    }

    #[test]
    fn out_of_bounds_placement() {
        let mut g = GridModel::with_defaults(5).unwrap();
        let err = g.set_cell(Point::new(5, 0), CellClass::Wall).unwrap_err();
        assert!(matches!(err, EngineError::OutOfBounds { dimension: 5, .. }));
        assert!(g.remove_wall(Point::new(-1, 0)).is_err());
    }

    #[test]
    fn remove_wall_only_touches_walls() {
        let mut g = GridModel::with_defaults(5).unwrap();
        g.set_cell(Point::new(1, 0), CellClass::Wall).unwrap();
        assert_eq!(g.remove_wall(Point::new(1, 0)).unwrap().len(), 1);
        assert!(g.remove_wall(Point::ZERO).unwrap().is_empty());
        assert_eq!(g.start(), Some(Point::ZERO));
    }

    #[test]
    fn resize_drops_out_of_bounds_goal() {
        let mut g = GridModel::with_defaults(10).unwrap();
        g.set_cell(Point::new(3, 3), CellClass::Wall).unwrap();
        g.set_cell(Point::new(8, 1), CellClass::Wall).unwrap();
        g.resize(5).unwrap();
        assert_eq!(g.dimension(), 5);
        assert_eq!(g.goal(), None);
        assert_eq!(g.start(), Some(Point::ZERO));
        let walls = g.cells_of_class(CellClass::Wall);
        assert_eq!(walls.into_iter().collect::<Vec<_>>(), vec![Point::new(3, 3)]);

        g.resize(8).unwrap();
        assert_eq!(g.classes().len(), 64);
        assert_eq!(g.class_at(Point::new(3, 3)), Some(CellClass::Wall));
    }

    #[test]
    fn clear_overlays_keeps_user_cells() {
        let mut g = GridModel::with_defaults(4).unwrap();
        g.set_cell(Point::new(1, 0), CellClass::Open).unwrap();
        g.set_cell(Point::new(2, 0), CellClass::Closed).unwrap();
        g.set_cell(Point::new(3, 0), CellClass::PathTrickle).unwrap();
        g.set_cell(Point::new(0, 1), CellClass::Wall).unwrap();
        let changes = g.clear_overlays();
        assert_eq!(changes.len(), 3);
        assert!(changes.iter().all(|c| c.class == CellClass::Empty));
        assert_eq!(g.class_at(Point::new(0, 1)), Some(CellClass::Wall));
        assert_eq!(g.start(), Some(Point::ZERO));
    }

    #[test]
    fn one_by_one_grid_has_no_goal() {
        let g = GridModel::with_defaults(1).unwrap();
        assert_eq!(g.start(), Some(Point::ZERO));
        assert_eq!(g.goal(), None);
    }

    #[test]
    fn scatter_with_nan_density_is_empty() {
        let mut g = GridModel::with_defaults(6).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(g.scatter_walls(&mut rng, f64::NAN).is_empty());
        assert_eq!(g.scatter_walls(&mut rng, f64::INFINITY).len(), 34);
        assert!(g.scatter_walls(&mut rng, f64::NEG_INFINITY).is_empty());
    }

    #[test]
    fn reset_restores_the_canonical_grid() {
        let mut g = GridModel::with_defaults(5).unwrap();
        g.set_cell(Point::new(2, 2), CellClass::Wall).unwrap();
        g.set_cell(Point::new(1, 0), CellClass::Goal).unwrap();
        g.set_cell(Point::new(3, 3), CellClass::Closed).unwrap();
        g.reset(7).unwrap();
        assert_eq!(g, GridModel::with_defaults(7).unwrap());
        assert!(matches!(g.reset(0), Err(EngineError::InvalidDimension(0))));
        assert_eq!(g.dimension(), 7);
    }

    #[test]
    fn scatter_never_covers_endpoints() {
        let mut g = GridModel::with_defaults(20).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let changes = g.scatter_walls(&mut rng, 0.9);
        assert!(!changes.is_empty());
        assert_eq!(g.start(), Some(Point::ZERO));
        assert_eq!(g.goal(), Some(Point::new(19, 19)));
        assert_eq!(changes.len(), g.cells_of_class(CellClass::Wall).len());
    }
}
