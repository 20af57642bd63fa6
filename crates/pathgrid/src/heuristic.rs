//! Cost-to-goal estimates.
//!
//! Two independent toggles pick the estimate: the [`Algorithm`] decides
//! whether a distance heuristic is used at all, and the [`HeuristicKind`]
//! picks which one. Under [`Algorithm::UniformCost`] every estimate is the
//! same constant, so ordering depends on `g` alone and A* degrades to
//! Dijkstra's algorithm.
//!
//! Edge costs never depend on these toggles: see [`edge_cost`].

use crate::geom::Point;

/// The constant estimate used under [`Algorithm::UniformCost`].
pub const UNIFORM_COST_HEURISTIC: f64 = 1.0;

/// Distance heuristic used under [`Algorithm::Standard`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    /// `|dx| + |dy|`
    #[default]
    Manhattan,
    /// `sqrt(dx² + dy²)`
    Euclidean,
}

impl HeuristicKind {
    /// The other heuristic.
    pub fn toggled(self) -> Self {
        match self {
            Self::Manhattan => Self::Euclidean,
            Self::Euclidean => Self::Manhattan,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Manhattan => "Manhattan",
            Self::Euclidean => "Euclidean",
        }
    }
}

/// Whether the search is informed (A*) or uniform-cost (Dijkstra).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// A* with the configured [`HeuristicKind`].
    #[default]
    Standard,
    /// Constant heuristic; equivalent to Dijkstra's algorithm.
    UniformCost,
}

impl Algorithm {
    /// The other algorithm.
    pub fn toggled(self) -> Self {
        match self {
            Self::Standard => Self::UniformCost,
            Self::UniformCost => Self::Standard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "A*",
            Self::UniformCost => "Dijkstra",
        }
    }
}

/// A heuristic strategy fixed for the duration of one search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Heuristic {
    pub algorithm: Algorithm,
    pub kind: HeuristicKind,
}

impl Heuristic {
    pub const fn new(algorithm: Algorithm, kind: HeuristicKind) -> Self {
        Self { algorithm, kind }
    }

    /// Estimated remaining cost from `from` to `goal`.
    #[inline]
    pub fn estimate(&self, from: Point, goal: Point) -> f64 {
        match (self.algorithm, self.kind) {
            (Algorithm::UniformCost, _) => UNIFORM_COST_HEURISTIC,
            (Algorithm::Standard, HeuristicKind::Manhattan) => from.manhattan(goal),
            (Algorithm::Standard, HeuristicKind::Euclidean) => from.euclidean(goal),
        }
    }
}

/// Cost of moving between two adjacent cells: 1 orthogonally, √2
/// diagonally. `g` therefore always accumulates real path length.
#[inline]
pub fn edge_cost(from: Point, to: Point) -> f64 {
    from.euclidean(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_estimates() {
        let goal = Point::new(3, 4);
        let manhattan = Heuristic::new(Algorithm::Standard, HeuristicKind::Manhattan);
        let euclidean = Heuristic::new(Algorithm::Standard, HeuristicKind::Euclidean);
        assert_eq!(manhattan.estimate(Point::ZERO, goal), 7.0);
        assert_eq!(euclidean.estimate(Point::ZERO, goal), 5.0);
        assert_eq!(euclidean.estimate(goal, goal), 0.0);
    }

    #[test]
    fn uniform_cost_ignores_distance() {
        for kind in [HeuristicKind::Manhattan, HeuristicKind::Euclidean] {
            let h = Heuristic::new(Algorithm::UniformCost, kind);
            assert_eq!(h.estimate(Point::ZERO, Point::new(50, 50)), UNIFORM_COST_HEURISTIC);
            assert_eq!(h.estimate(Point::new(2, 2), Point::new(2, 2)), UNIFORM_COST_HEURISTIC);
        }
    }

    #[test]
    fn edge_costs() {
        assert_eq!(edge_cost(Point::ZERO, Point::new(1, 0)), 1.0);
        assert_eq!(edge_cost(Point::ZERO, Point::new(0, -1)), 1.0);
        assert!((edge_cost(Point::ZERO, Point::new(1, 1)) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn toggles_flip() {
        assert_eq!(HeuristicKind::Manhattan.toggled(), HeuristicKind::Euclidean);
        assert_eq!(Algorithm::UniformCost.toggled(), Algorithm::Standard);
    }
}
