//! Constant-time "is this point on the current path prefix" lookup.

use crate::Point;

/// Never-recorded sentinel.
const UNUSED: usize = usize::MAX;

/// Last-seen path index per lattice point, tolerant of stale entries.
///
/// Entries are written on every path extension and never erased: after a
/// backtrack the table keeps whatever the abandoned branch left behind. A
/// stored index `i` counts as a witness that the point is on the live prefix
/// of length `len` only when `i < len` and the path slot `i` still holds the
/// point. Both halves of that check are required — the slot may have been
/// overwritten by a different branch, or `i` may lie beyond the prefix. The
/// payoff is that backtracking costs nothing: there is no remove operation
/// to run per abandoned step.
pub struct LastIndex {
    side: usize,
    last: Vec<usize>,
}

impl LastIndex {
    /// Table covering coordinates `0..side` on both axes. Admissible points
    /// of a length-`2n` search never exceed `2n` on either axis.
    pub fn new(side: usize) -> Self {
        let side = side.max(1);
        Self {
            side,
            last: vec![UNUSED; side * side],
        }
    }

    #[inline]
    fn slot(&self, p: Point) -> usize {
        debug_assert!(p.x >= 0 && p.y >= 0);
        p.x as usize * self.side + p.y as usize
    }

    /// Record `p` as occupying path position `i`, overwriting any previous
    /// record for `p` unconditionally.
    #[inline]
    pub fn record(&mut self, p: Point, i: usize) {
        debug_assert!((p.x as usize) < self.side && (p.y as usize) < self.side);
        let slot = self.slot(p);
        self.last[slot] = i;
    }

    /// Is `p` on the live prefix `path[..path_length]`?
    ///
    /// `path` must be the same buffer the recorded indices refer to.
    #[inline]
    pub fn contains(&self, path: &[Point], path_length: usize, p: Point) -> bool {
        if p.x as usize >= self.side || p.y as usize >= self.side {
            return false;
        }
        let i = self.last[self.slot(p)];
        i < path_length && path[i] == p
    }
}
