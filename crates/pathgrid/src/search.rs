//! The open/closed sets and the single-step A* loop.
//!
//! A [`SearchController`] is built from a snapshot of a [`GridModel`]: every
//! passable cell becomes a [`SearchNode`], walls become holes. Each call to
//! [`step`](SearchController::step) expands exactly one node and reports the
//! cells whose classification changed, so a scheduler can render the frontier
//! between steps.
//!
//! Relaxation re-inserts a fresh heap entry instead of mutating entries in
//! place; entries whose node has since been re-queued or expanded are
//! skipped when popped.

use std::collections::BinaryHeap;

use crate::error::{EngineError, Result};
use crate::geom::Point;
use crate::grid::{CellChange, CellClass, GridModel};
use crate::heuristic::{Algorithm, Heuristic, HeuristicKind, edge_cost};
use crate::neighbors::Neighbors;
use crate::node::{OpenEntry, SearchNode};

/// When a neighbour's bookkeeping is overwritten during expansion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relaxation {
    /// Conventional A*: when the route through the expanded node is cheaper
    /// than the neighbour's current `g`. Closed nodes are re-opened if a
    /// cheaper route to them turns up.
    #[default]
    Cost,
    /// When the neighbour's freshly computed `h` is below its stored `h`.
    /// Since `h` only depends on position, this keeps the first parent a
    /// node is discovered from. Paths are not guaranteed to be shortest.
    Heuristic,
}

/// Settings a search snapshots when it starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub heuristic: HeuristicKind,
    pub algorithm: Algorithm,
    pub diagonals: bool,
    pub relaxation: Relaxation,
}

/// A solved path.
#[derive(Clone, Debug, PartialEq)]
pub struct SolvedPath {
    /// Cells strictly between start and goal, in start → goal order.
    pub cells: Vec<Point>,
    /// Accumulated cost (`g`) of the goal.
    pub cost: f64,
}

impl SolvedPath {
    /// Number of moves from start to goal.
    #[inline]
    pub fn moves(&self) -> usize {
        self.cells.len() + 1
    }
}

/// What a single step did.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// A node was expanded; these cells changed class.
    Expanded(Vec<CellChange>),
    /// The goal was popped.
    Found(SolvedPath),
    /// The open set ran dry.
    Exhausted,
}

impl StepOutcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Expanded(_))
    }
}

/// Owns the open and closed sets of one search.
pub struct SearchController {
    dimension: i32,
    nodes: Vec<Option<SearchNode>>,
    start: usize,
    goal: usize,
    open: BinaryHeap<OpenEntry>,
    seq: u64,
    steps: usize,
    closed_count: usize,
    heuristic: Heuristic,
    relaxation: Relaxation,
    neighbors: Neighbors,
    finished: Option<StepOutcome>,
}

impl SearchController {
    /// Snapshot `grid` and seed the open set with its start cell.
    pub fn new(grid: &GridModel, config: SearchConfig) -> Result<Self> {
        let start_pos = grid.start().ok_or(EngineError::MissingStart)?;
        let goal_pos = grid.goal().ok_or(EngineError::MissingGoal)?;

        let nodes: Vec<Option<SearchNode>> = grid
            .classes()
            .iter()
            .enumerate()
            .map(|(i, class)| class.is_passable().then(|| SearchNode::new(grid.point(i))))
            .collect();

        let out_of_bounds = |pos| EngineError::OutOfBounds {
            pos,
            dimension: grid.dimension(),
        };
        let start = grid.index(start_pos).ok_or_else(|| out_of_bounds(start_pos))?;
        let goal = grid.index(goal_pos).ok_or_else(|| out_of_bounds(goal_pos))?;

        let mut search = Self {
            dimension: grid.dimension(),
            nodes,
            start,
            goal,
            open: BinaryHeap::new(),
            seq: 0,
            steps: 0,
            closed_count: 0,
            heuristic: Heuristic::new(config.algorithm, config.heuristic),
            relaxation: config.relaxation,
            neighbors: Neighbors::new(config.diagonals),
            finished: None,
        };

        let h = search.heuristic.estimate(start_pos, goal_pos);
        if let Some(node) = search.nodes[start].as_mut() {
            node.g = 0.0;
            node.h = h;
        }
        search.enqueue(start);
        log::debug!(
            "search prepared: {} passable cells, start {}, goal {}",
            search.nodes.iter().flatten().count(),
            start_pos,
            goal_pos
        );
        Ok(search)
    }

    /// Expand one node.
    ///
    /// Once a terminal outcome has been produced, further calls return it
    /// again without doing any work.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(done) = &self.finished {
            return done.clone();
        }

        let Some(ci) = self.pop_next() else {
            log::debug!("open set empty after {} steps", self.steps);
            return self.finish(StepOutcome::Exhausted);
        };
        self.steps += 1;

        if ci == self.goal {
            let path = self.reconstruct();
            log::debug!(
                "goal reached after {} steps, {} moves, cost {:.3}",
                self.steps,
                path.moves(),
                path.cost
            );
            return self.finish(StepOutcome::Found(path));
        }

        let (current_pos, current_g) = match self.nodes[ci].as_mut() {
            Some(node) => {
                node.closed = true;
                (node.pos, node.g)
            }
            None => return self.finish(StepOutcome::Exhausted),
        };
        self.closed_count += 1;

        let mut changes = Vec::new();
        if ci != self.start {
            changes.push(CellChange::new(current_pos, CellClass::Closed));
        }

        let goal_pos = self.point(self.goal);
        let dimension = self.dimension;
        let nodes = &self.nodes;
        let candidates = self
            .neighbors
            .of(current_pos, |p| {
                p.in_square(dimension) && nodes[(p.y * dimension + p.x) as usize].is_some()
            })
            .to_vec();

        for np in candidates {
            let ni = (np.y * dimension + np.x) as usize;
            let candidate_h = self.heuristic.estimate(np, goal_pos);
            let tentative_g = current_g + edge_cost(current_pos, np);

            let Some(node) = self.nodes[ni].as_mut() else {
                continue;
            };
            let improves = match self.relaxation {
                Relaxation::Cost => tentative_g < node.g,
                Relaxation::Heuristic => candidate_h < node.h,
            };
            if !improves {
                continue;
            }

            node.h = candidate_h;
            node.g = tentative_g;
            node.parent = Some(ci);
            let newly_open = !node.open;
            if node.closed {
                node.closed = false;
                self.closed_count -= 1;
            }
            self.enqueue(ni);

            if newly_open && ni != self.start && ni != self.goal {
                changes.push(CellChange::new(np, CellClass::Open));
            }
        }

        log::trace!(
            "step {}: expanded {} (g={:.3}), {} changes",
            self.steps,
            current_pos,
            current_g,
            changes.len()
        );
        StepOutcome::Expanded(changes)
    }

    /// Step until the search terminates.
    pub fn run_to_end(&mut self) -> StepOutcome {
        loop {
            let outcome = self.step();
            if outcome.is_terminal() {
                return outcome;
            }
        }
    }

    /// Number of nodes expanded so far (including the goal, once popped).
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Size of the closed set.
    #[inline]
    pub fn closed_count(&self) -> usize {
        self.closed_count
    }

    /// Number of nodes currently waiting in the open set.
    pub fn open_count(&self) -> usize {
        self.nodes.iter().flatten().filter(|n| n.open).count()
    }

    /// Whether the node at `p` is waiting in the open set.
    pub fn is_open(&self, p: Point) -> bool {
        self.node(p).is_some_and(|n| n.open)
    }

    /// Whether the node at `p` has been expanded.
    pub fn is_closed(&self, p: Point) -> bool {
        self.node(p).is_some_and(|n| n.closed)
    }

    /// Bookkeeping for the cell at `p`; `None` for walls and out-of-bounds
    /// cells.
    pub fn node(&self, p: Point) -> Option<&SearchNode> {
        if !p.in_square(self.dimension) {
            return None;
        }
        self.nodes[(p.y * self.dimension + p.x) as usize].as_ref()
    }

    fn finish(&mut self, outcome: StepOutcome) -> StepOutcome {
        self.finished = Some(outcome.clone());
        outcome
    }

    fn point(&self, idx: usize) -> Point {
        let d = self.dimension as usize;
        Point::new((idx % d) as i32, (idx / d) as i32)
    }

    /// Queue a fresh entry for node `idx`, invalidating older ones.
    fn enqueue(&mut self, idx: usize) {
        let Some(node) = self.nodes[idx].as_mut() else {
            return;
        };
        node.open = true;
        node.version = node.version.wrapping_add(1);
        self.open.push(OpenEntry {
            idx,
            f: node.f(),
            h: node.h,
            seq: self.seq,
            version: node.version,
        });
        self.seq += 1;
    }

    /// Pop the best live entry, skipping stale ones.
    fn pop_next(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            let Some(node) = self.nodes[entry.idx].as_mut() else {
                continue;
            };
            if !node.open || node.version != entry.version {
                continue;
            }
            node.open = false;
            return Some(entry.idx);
        }
        None
    }

    /// Walk parent links back from the goal, excluding both endpoints.
    fn reconstruct(&self) -> SolvedPath {
        let mut cells = Vec::new();
        let mut cursor = self.nodes[self.goal].as_ref().and_then(|n| n.parent);
        while let Some(i) = cursor {
            if i == self.start || cells.len() > self.nodes.len() {
                break;
            }
            let Some(node) = self.nodes[i].as_ref() else {
                break;
            };
            cells.push(node.pos);
            cursor = node.parent;
        }
        cells.reverse();
        let cost = self.nodes[self.goal].as_ref().map_or(f64::INFINITY, |n| n.g);
        SolvedPath { cells, cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::SQRT_2;

    fn config(heuristic: HeuristicKind, diagonals: bool) -> SearchConfig {
        SearchConfig {
            heuristic,
            diagonals,
            ..SearchConfig::default()
        }
    }

    fn grid_with(dimension: i32, start: Point, goal: Point) -> GridModel {
        let mut g = GridModel::new(dimension).unwrap();
        g.set_cell(start, CellClass::Start).unwrap();
        g.set_cell(goal, CellClass::Goal).unwrap();
        g
    }

    fn assert_contiguous(path: &SolvedPath, start: Point, goal: Point, diagonals: bool) {
        let mut all = vec![start];
        all.extend(&path.cells);
        all.push(goal);
        for w in all.windows(2) {
            let d = w[1] - w[0];
            let (dx, dy) = (d.x.abs(), d.y.abs());
            assert!(dx <= 1 && dy <= 1 && dx + dy >= 1, "gap between {} and {}", w[0], w[1]);
            if !diagonals {
                assert_eq!(dx + dy, 1);
            }
        }
    }

    #[test]
    fn straight_line_is_optimal() {
        for n in [2, 5, 13] {
            let grid = grid_with(n, Point::ZERO, Point::new(n - 1, 0));
            let mut s = SearchController::new(&grid, config(HeuristicKind::Euclidean, false)).unwrap();
            let StepOutcome::Found(path) = s.run_to_end() else {
                panic!("no path on an empty {n}x{n} grid");
            };
            assert_eq!(path.moves(), (n - 1) as usize);
            assert_eq!(path.cost, f64::from(n - 1));
            assert_eq!(path.cells.len(), (n - 2) as usize);
            assert_contiguous(&path, Point::ZERO, Point::new(n - 1, 0), false);
        }
    }

    #[test]
    fn diagonal_moves_cost_sqrt2() {
        let grid = GridModel::with_defaults(5).unwrap();
        let mut s = SearchController::new(&grid, config(HeuristicKind::Euclidean, true)).unwrap();
        let StepOutcome::Found(path) = s.run_to_end() else {
            panic!("expected a path");
        };
        assert_eq!(path.moves(), 4);
        assert!((path.cost - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        assert_eq!(
            path.cells,
            vec![Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]
        );
    }

    #[test]
    fn adjacent_goal_has_empty_interior() {
        let grid = grid_with(4, Point::new(1, 1), Point::new(2, 1));
        let mut s = SearchController::new(&grid, SearchConfig::default()).unwrap();
        let StepOutcome::Found(path) = s.run_to_end() else {
            panic!("expected a path");
        };
        assert!(path.cells.is_empty());
        assert_eq!(path.moves(), 1);
    }

    #[test]
    fn missing_endpoints_are_rejected() {
        let mut g = GridModel::new(4).unwrap();
        assert!(matches!(
            SearchController::new(&g, SearchConfig::default()),
            Err(EngineError::MissingStart)
        ));
        g.set_cell(Point::ZERO, CellClass::Start).unwrap();
        assert!(matches!(
            SearchController::new(&g, SearchConfig::default()),
            Err(EngineError::MissingGoal)
        ));
    }

    #[test]
    fn first_step_opens_neighbours_but_not_start() {
        let grid = GridModel::with_defaults(3).unwrap();
        let mut s = SearchController::new(&grid, SearchConfig::default()).unwrap();
        let StepOutcome::Expanded(changes) = s.step() else {
            panic!("first step cannot terminate on a 3x3 grid");
        };
        assert_eq!(
            changes,
            vec![
                CellChange::new(Point::new(1, 0), CellClass::Open),
                CellChange::new(Point::new(0, 1), CellClass::Open),
            ]
        );
        assert!(s.is_closed(Point::ZERO));
        assert!(s.is_open(Point::new(1, 0)));
        assert_eq!(s.open_count(), 2);
        assert_eq!(s.steps(), 1);

        let StepOutcome::Expanded(changes) = s.step() else {
            panic!("second step cannot terminate on a 3x3 grid");
        };
        assert_eq!(changes[0].class, CellClass::Closed);
    }

    #[test]
    fn walls_are_never_crossed() {
        // A vertical wall with a single gap at the bottom.
        let mut grid = grid_with(6, Point::ZERO, Point::new(5, 0));
        for y in 0..5 {
            grid.set_cell(Point::new(3, y), CellClass::Wall).unwrap();
        }
        let mut s = SearchController::new(&grid, config(HeuristicKind::Manhattan, false)).unwrap();
        let StepOutcome::Found(path) = s.run_to_end() else {
            panic!("the gap leaves a path");
        };
        assert!(path.cells.contains(&Point::new(3, 5)));
        for p in &path.cells {
            assert_ne!(grid.class_at(*p), Some(CellClass::Wall));
        }
        assert_eq!(path.moves(), 15);
        assert_contiguous(&path, Point::ZERO, Point::new(5, 0), false);
    }

    #[test]
    fn enclosed_goal_exhausts_reachable_component() {
        let mut grid = grid_with(10, Point::ZERO, Point::new(5, 5));
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx != 0 || dy != 0 {
                    grid.set_cell(Point::new(5 + dx, 5 + dy), CellClass::Wall).unwrap();
                }
            }
        }
        let reachable = 100 - 8 - 1;
        let mut s = SearchController::new(&grid, config(HeuristicKind::Manhattan, false)).unwrap();
        assert_eq!(s.run_to_end(), StepOutcome::Exhausted);
        assert_eq!(s.closed_count(), reachable);
        assert_eq!(s.steps(), reachable);
        assert!(!s.is_closed(Point::new(5, 5)));
        // Terminal outcomes are sticky.
        assert_eq!(s.step(), StepOutcome::Exhausted);
        assert_eq!(s.steps(), reachable);
    }

    #[test]
    fn repeated_runs_are_identical() {
        for seed in 0..8 {
            let mut grid = GridModel::with_defaults(30).unwrap();
            grid.scatter_walls(&mut StdRng::seed_from_u64(seed), 0.25);
            for diagonals in [false, true] {
                let cfg = config(HeuristicKind::Euclidean, diagonals);
                let mut a = SearchController::new(&grid, cfg).unwrap();
                let mut b = SearchController::new(&grid, cfg).unwrap();
                assert_eq!(a.run_to_end(), b.run_to_end());
                assert_eq!(a.steps(), b.steps());
            }
        }
    }

    #[test]
    fn uniform_cost_matches_manhattan_length() {
        for seed in 0..10 {
            let mut grid = GridModel::with_defaults(20).unwrap();
            grid.scatter_walls(&mut StdRng::seed_from_u64(seed), 0.2);

            let astar = SearchConfig::default();
            let dijkstra = SearchConfig {
                algorithm: Algorithm::UniformCost,
                ..SearchConfig::default()
            };
            let a = SearchController::new(&grid, astar).unwrap().run_to_end();
            let d = SearchController::new(&grid, dijkstra).unwrap().run_to_end();
            match (a, d) {
                (StepOutcome::Found(a), StepOutcome::Found(d)) => {
                    assert_eq!(a.moves(), d.moves(), "seed {seed}");
                    assert_eq!(a.cost, d.cost, "seed {seed}");
                }
                (StepOutcome::Exhausted, StepOutcome::Exhausted) => {}
                (a, d) => panic!("seed {seed}: outcomes differ: {a:?} vs {d:?}"),
            }
        }
    }

    #[test]
    fn uniform_cost_visits_more_than_astar() {
        let grid = grid_with(20, Point::ZERO, Point::new(19, 0));
        let mut astar = SearchController::new(&grid, SearchConfig::default()).unwrap();
        let mut dijkstra = SearchController::new(
            &grid,
            SearchConfig {
                algorithm: Algorithm::UniformCost,
                ..SearchConfig::default()
            },
        )
        .unwrap();
        astar.run_to_end();
        dijkstra.run_to_end();
        assert!(dijkstra.steps() > astar.steps());
    }

    #[test]
    fn heuristic_relaxation_still_reaches_goal() {
        let mut grid = GridModel::with_defaults(15).unwrap();
        grid.scatter_walls(&mut StdRng::seed_from_u64(3), 0.15);
        let optimal_cfg = config(HeuristicKind::Euclidean, true);
        let legacy_cfg = SearchConfig {
            relaxation: Relaxation::Heuristic,
            ..config(HeuristicKind::Manhattan, true)
        };
        let optimal = SearchController::new(&grid, optimal_cfg).unwrap().run_to_end();
        let legacy = SearchController::new(&grid, legacy_cfg).unwrap().run_to_end();
        match (optimal, legacy) {
            (StepOutcome::Found(o), StepOutcome::Found(l)) => {
                assert_contiguous(&l, Point::ZERO, Point::new(14, 14), true);
                assert!(l.cost >= o.cost - 1e-9);
            }
            (StepOutcome::Exhausted, StepOutcome::Exhausted) => {}
            (c, l) => panic!("outcomes differ: {c:?} vs {l:?}"),
        }
    }

    fn walled(dimension: i32, goal: Point, walls: &[(i32, i32)]) -> GridModel {
        let mut g = grid_with(dimension, Point::ZERO, goal);
        for &(x, y) in walls {
            g.set_cell(Point::new(x, y), CellClass::Wall).unwrap();
        }
        g
    }

    fn relaxing(relaxation: Relaxation) -> SearchConfig {
        SearchConfig {
            relaxation,
            ..config(HeuristicKind::Manhattan, true)
        }
    }

    fn parent_of(s: &SearchController, p: Point) -> Option<Point> {
        s.node(p).and_then(|n| n.parent).map(|idx| s.point(idx))
    }

    fn assert_close(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-9, "{got} != {want}");
    }

    fn cells(points: &[(i32, i32)]) -> Vec<Point> {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn heuristic_relaxation_keeps_first_parent() {
        let grid = walled(4, Point::new(3, 1), &[(2, 1)]);
        let shared = Point::new(2, 0);

        let mut cost = SearchController::new(&grid, relaxing(Relaxation::Cost)).unwrap();
        let StepOutcome::Found(by_cost) = cost.run_to_end() else {
            panic!("cost relaxation found no path");
        };
        assert_eq!(cost.steps(), 5);
        assert_eq!(by_cost.cells, cells(&[(1, 0), (2, 0)]));
        assert_close(by_cost.cost, 2.0 + SQRT_2);
        assert_eq!(parent_of(&cost, shared), Some(Point::new(1, 0)));
        assert_close(cost.node(shared).unwrap().g, 2.0);

        // (2,0) is first reached diagonally from (1,1); the cheaper route
        // through (1,0) has the same h and is ignored.
        let mut legacy = SearchController::new(&grid, relaxing(Relaxation::Heuristic)).unwrap();
        let StepOutcome::Found(by_h) = legacy.run_to_end() else {
            panic!("heuristic relaxation found no path");
        };
        assert_eq!(legacy.steps(), 6);
        assert_eq!(by_h.cells, cells(&[(1, 1), (2, 0)]));
        assert_close(by_h.cost, 3.0 * SQRT_2);
        assert_eq!(parent_of(&legacy, shared), Some(Point::new(1, 1)));
        assert_close(legacy.node(shared).unwrap().g, 2.0 * SQRT_2);
    }

    const DETOUR_WALLS: [(i32, i32); 5] = [(1, 1), (3, 3), (3, 4), (3, 5), (4, 3)];
    const DETOUR_PATH: [(i32, i32); 6] = [(1, 0), (2, 1), (3, 2), (4, 2), (5, 3), (4, 4)];

    #[test]
    fn cost_relaxation_reopens_closed_nodes() {
        let grid = walled(6, Point::new(4, 5), &DETOUR_WALLS);
        let watched = Point::new(2, 3);
        let mut s = SearchController::new(&grid, relaxing(Relaxation::Cost)).unwrap();

        for _ in 0..4 {
            s.step();
        }
        assert!(s.is_open(watched));
        assert_eq!(parent_of(&s, watched), Some(Point::new(3, 2)));
        assert_close(s.node(watched).unwrap().g, 1.0 + 3.0 * SQRT_2);

        for _ in 4..9 {
            s.step();
        }
        assert!(s.is_closed(watched));
        assert_eq!(parent_of(&s, watched), Some(Point::new(2, 2)));
        assert_close(s.node(watched).unwrap().g, 3.0 + SQRT_2);

        for _ in 9..16 {
            s.step();
        }
        assert!(s.is_open(watched));
        assert!(!s.is_closed(watched));
        assert_eq!(parent_of(&s, watched), Some(Point::new(1, 2)));
        assert_close(s.node(watched).unwrap().g, 1.0 + 2.0 * SQRT_2);

        s.step();
        assert!(s.is_closed(watched));

        let StepOutcome::Found(path) = s.run_to_end() else {
            panic!("no path around the detour");
        };
        assert_eq!(s.steps(), 29);
        assert_eq!(path.cells, cells(&DETOUR_PATH));
        assert_close(path.cost, 3.0 + 4.0 * SQRT_2);
    }

    #[test]
    fn heuristic_relaxation_never_reopens() {
        let grid = walled(6, Point::new(4, 5), &DETOUR_WALLS);
        let watched = Point::new(2, 3);
        let mut s = SearchController::new(&grid, relaxing(Relaxation::Heuristic)).unwrap();

        let mut closed = Vec::new();
        let path = loop {
            let outcome = s.step();
            for p in (0..6).flat_map(|y| (0..6).map(move |x| Point::new(x, y))) {
                if s.is_closed(p) && !closed.contains(&p) {
                    closed.push(p);
                }
                if closed.contains(&p) {
                    assert!(s.is_closed(p), "{p} was reopened");
                }
            }
            if s.node(watched).is_some_and(|n| n.parent.is_some()) {
                assert_eq!(parent_of(&s, watched), Some(Point::new(3, 2)));
                assert_close(s.node(watched).unwrap().g, 1.0 + 3.0 * SQRT_2);
            }
            match outcome {
                StepOutcome::Found(path) => break path,
                StepOutcome::Exhausted => panic!("no path around the detour"),
                StepOutcome::Expanded(_) => {}
            }
        };
        assert!(!s.is_closed(watched));
        assert_eq!(s.steps(), 19);
        assert_eq!(path.cells, cells(&DETOUR_PATH));
        assert_close(path.cost, 3.0 + 4.0 * SQRT_2);
    }

    #[test]
    fn paths_avoid_scattered_walls() {
        for seed in 0..6 {
            let mut grid = GridModel::with_defaults(25).unwrap();
            grid.scatter_walls(&mut StdRng::seed_from_u64(100 + seed), 0.3);
            let cfg = config(HeuristicKind::Euclidean, true);
            if let StepOutcome::Found(path) = SearchController::new(&grid, cfg).unwrap().run_to_end() {
                assert_contiguous(&path, Point::ZERO, Point::new(24, 24), true);
                for p in &path.cells {
                    assert_eq!(grid.class_at(*p).map(|c| c.is_passable()), Some(true));
                }
            }
        }
    }
}
