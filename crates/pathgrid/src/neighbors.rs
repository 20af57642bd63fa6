use crate::geom::Point;

const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

const DIAGONAL: [Point; 4] = [
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Reusable neighbor buffer.
///
/// Enumerates the 4 cardinal neighbors of a cell, followed by the 4
/// diagonal ones when diagonals are allowed, keeping only those for which a
/// predicate holds. The order is fixed so searches are reproducible.
pub struct Neighbors {
    buf: Vec<Point>,
    diagonals: bool,
}

impl Neighbors {
    pub fn new(diagonals: bool) -> Self {
        Self {
            buf: Vec::with_capacity(8),
            diagonals,
        }
    }

    /// Neighbors of `p` for which `keep` returns `true`.
    pub fn of(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        let diagonal: &[Point] = if self.diagonals { &DIAGONAL } else { &[] };
        for &d in CARDINAL.iter().chain(diagonal) {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
