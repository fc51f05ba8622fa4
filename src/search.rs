//! Backtracking enumeration of closed self-avoiding walks.

use std::time::{Duration, Instant};

use crate::{index::LastIndex, Point, DELTAS, ORIGIN, UP};

/// Exhaustive search for simple closed walks of length `2n`.
///
/// The path buffer and the [`LastIndex`] are sized once and mutated in place
/// for the whole run. Backtracking performs no undo: slots at or beyond the
/// current prefix length hold garbage from abandoned branches, and the index
/// validates every hit against the live buffer (see [`LastIndex`]). A
/// `Search` is single-use; allocate a fresh one per run.
pub struct Search {
    n: usize,
    path_len: usize,
    path: Vec<Point>,
    index: LastIndex,
    solutions: Vec<Vec<Point>>,
    visited: u64,
    elapsed: Duration,
}

impl Search {
    pub fn new(n: usize) -> Self {
        let path_len = 2 * n;
        Self {
            n,
            path_len,
            path: vec![ORIGIN; path_len],
            index: LastIndex::new(path_len),
            solutions: Vec::new(),
            visited: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Run the search. The first step is fixed to [`UP`], so every walk with
    /// a different first step is a rotation/reflection of a reported one.
    pub fn run(&mut self) {
        let start = Instant::now();
        if self.path_len >= 2 {
            self.path[0] = ORIGIN;
            self.index.record(ORIGIN, 0);
            let first = ORIGIN.step(UP);
            self.path[1] = first;
            self.index.record(first, 1);
            self.expand(2, first);
        }
        self.elapsed = start.elapsed();
    }

    fn expand(&mut self, path_length: usize, at: Point) {
        self.visited += 1;
        for delta in DELTAS {
            let next = at.step(delta);

            // Closing step: about to add the origin as point 2n+1. The walk
            // is recorded without the second origin visit. A simple loop has
            // at least 4 vertices; the length-2 case retraces its only edge.
            if next == ORIGIN && path_length == self.path_len {
                if self.path_len >= 4 {
                    self.solutions.push(self.path.clone());
                }
                continue;
            }

            // Quadrant, self-avoidance, then Manhattan reachability: the
            // steps left must cover the distance back to the origin. Parity
            // is not checked, so some admitted branches still cannot close.
            if next.x >= 0
                && next.y >= 0
                && !self.index.contains(&self.path, path_length, next)
                && next.x as usize + next.y as usize + path_length <= self.path_len
            {
                self.path[path_length] = next;
                self.index.record(next, path_length);
                self.expand(path_length + 1, next);
            }
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn path_len(&self) -> usize {
        self.path_len
    }

    /// Discovered walks, in discovery order. Each has exactly `2n` points,
    /// starts at the origin, and closes back to it with the implicit final
    /// edge.
    #[inline]
    pub fn solutions(&self) -> &[Vec<Point>] {
        &self.solutions
    }

    /// Number of expansion calls made, one per visited partial path.
    #[inline]
    pub fn visited(&self) -> u64 {
        self.visited
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
