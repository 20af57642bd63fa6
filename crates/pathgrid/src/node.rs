use std::cmp::Ordering;

use crate::geom::Point;

/// Search bookkeeping for one passable cell.
///
/// Costs start at `+inf`. `parent` is the index of the node this one was
/// reached from, into the controller's node table.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub pos: Point,
    pub g: f64,
    pub h: f64,
    pub parent: Option<usize>,
    /// Bumped every time the node is (re-)queued so stale heap entries can
    /// be recognised.
    pub(crate) version: u32,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl SearchNode {
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            g: f64::INFINITY,
            h: f64::INFINITY,
            parent: None,
            version: 0,
            open: false,
            closed: false,
        }
    }

    /// `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Nodes are the same node when they sit on the same cell, whatever their
/// current cost estimates.
impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for SearchNode {}

/// An entry in the open set.
///
/// Ordered for `BinaryHeap` (a max-heap) so that the smallest `f` pops
/// first, ties broken by smallest `h`, then by insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) h: f64,
    pub(crate) seq: u64,
    pub(crate) version: u32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}
