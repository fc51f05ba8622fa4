//! Enumeration of simple closed lattice walks in the first quadrant.
//!
//! A walk of length `2n` starts at the origin, takes unit steps with both
//! coordinates kept non-negative, visits no lattice point twice, and closes
//! back to the origin. The first step is fixed to [`UP`], so walks are
//! reported as distinct coordinate sequences without symmetry reduction.

use serde::{Deserialize, Serialize};

pub mod index;
pub mod render;
pub mod search;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn step(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

pub const ORIGIN: Point = Point { x: 0, y: 0 };

pub const UP: (i32, i32) = (0, 1);
pub const DOWN: (i32, i32) = (0, -1);
pub const LEFT: (i32, i32) = (-1, 0);
pub const RIGHT: (i32, i32) = (1, 0);

/// Directions in the fixed try order. Changing this order changes the
/// discovery order of solutions.
pub const DELTAS: [(i32, i32); 4] = [UP, DOWN, LEFT, RIGHT];

/// Check that `walk` is a simple closed first-quadrant walk: starts at the
/// origin, consecutive points (wrap-around included) differ by one unit step,
/// and no point repeats.
pub fn is_simple_closed_walk(walk: &[Point]) -> bool {
    if walk.len() < 4 || walk[0] != ORIGIN {
        return false;
    }
    for (i, &p) in walk.iter().enumerate() {
        if p.x < 0 || p.y < 0 {
            return false;
        }
        let q = walk[(i + 1) % walk.len()];
        if (p.x - q.x).abs() + (p.y - q.y).abs() != 1 {
            return false;
        }
        if walk[..i].contains(&p) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validates_unit_square() {
        let square = [(0, 0), (0, 1), (1, 1), (1, 0)].map(|(x, y)| Point::new(x, y));
        assert!(is_simple_closed_walk(&square));
    }

    #[test]
    fn rejects_bad_walks() {
        let far = [(0, 0), (0, 1), (2, 1), (1, 0)].map(|(x, y)| Point::new(x, y));
        assert!(!is_simple_closed_walk(&far));

        let repeat = [(0, 0), (0, 1), (0, 0), (0, 1)].map(|(x, y)| Point::new(x, y));
        assert!(!is_simple_closed_walk(&repeat));

        // Too short to close without retracing an edge.
        let short = [(0, 0), (0, 1)].map(|(x, y)| Point::new(x, y));
        assert!(!is_simple_closed_walk(&short));
    }

    #[test]
    fn point_serializes_by_coordinates() {
        let json = serde_json::to_string(&Point::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2}"#);
    }
}
