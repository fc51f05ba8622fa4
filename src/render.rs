//! Grid layout and SVG output for discovered walks.
//!
//! Pure consumer of the solution list: the search neither knows nor cares
//! how walks are drawn.

use std::fmt::Write;

use crate::Point;

/// Placement of successive walks on an offset grid, `columns` per row.
/// Lattice y grows upward, so rows advance with a negative `dy`.
pub struct GridLayout {
    pub columns: usize,
    pub dx: i32,
    pub dy: i32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 6,
            dx: 4,
            dy: -4,
        }
    }
}

impl GridLayout {
    /// Translation applied to the `i`-th walk.
    #[inline]
    pub fn offset(&self, i: usize) -> (i32, i32) {
        let columns = self.columns.max(1);
        (
            (i % columns) as i32 * self.dx,
            (i / columns) as i32 * self.dy,
        )
    }

    /// Translated copies of `walks`, one grid cell each. Input untouched.
    pub fn arrange(&self, walks: &[Vec<Point>]) -> Vec<Vec<Point>> {
        walks
            .iter()
            .enumerate()
            .map(|(i, walk)| {
                let (dx, dy) = self.offset(i);
                walk.iter().map(|p| Point::new(p.x + dx, p.y + dy)).collect()
            })
            .collect()
    }

    /// Render `walks` as one unfilled polygon each, laid out on the grid.
    /// Lattice coordinates are flipped to screen coordinates (y down).
    pub fn to_svg(&self, walks: &[Vec<Point>]) -> String {
        let arranged = self.arrange(walks);

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (0, 0, 1, 1);
        for p in arranged.iter().flatten() {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(-p.y);
            max_y = max_y.max(-p.y);
        }

        let mut out = String::new();
        writeln!(
            &mut out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            min_x - 1,
            min_y - 1,
            max_x - min_x + 2,
            max_y - min_y + 2,
        )
        .unwrap();
        for walk in &arranged {
            out.push_str(r#"  <polygon fill="none" stroke="black" stroke-width="0.1" points=""#);
            for (i, p) in walk.iter().enumerate() {
                if i != 0 {
                    out.push(' ');
                }
                write!(&mut out, "{},{}", p.x, -p.y).unwrap();
            }
            out.push_str("\"/>\n");
        }
        out.push_str("</svg>\n");
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_square() -> Vec<Point> {
        [(0, 0), (0, 1), (1, 1), (1, 0)]
            .map(|(x, y)| Point::new(x, y))
            .to_vec()
    }

    #[test]
    fn offsets_advance_by_column_then_row() {
        let layout = GridLayout::default();
        assert_eq!(layout.offset(0), (0, 0));
        assert_eq!(layout.offset(1), (4, 0));
        assert_eq!(layout.offset(5), (20, 0));
        assert_eq!(layout.offset(6), (0, -4));
        assert_eq!(layout.offset(13), (4, -8));
    }

    #[test]
    fn arrange_translates_each_walk() {
        let layout = GridLayout::default();
        let walks = vec![unit_square(); 7];
        let arranged = layout.arrange(&walks);
        assert_eq!(arranged[0], unit_square());
        assert_eq!(arranged[1][0], Point::new(4, 0));
        assert_eq!(arranged[6][0], Point::new(0, -4));
        // Originals untouched.
        assert_eq!(walks[6], unit_square());
    }

    #[test]
    fn svg_has_one_polygon_per_walk() {
        let layout = GridLayout::default();
        let svg = layout.to_svg(&vec![unit_square(); 3]);
        assert_eq!(svg.matches("<polygon").count(), 3);
        // First cell, y flipped to screen coordinates.
        assert!(svg.contains(r#"points="0,0 0,-1 1,-1 1,0""#));
        // Second cell shifted one column right.
        assert!(svg.contains(r#"points="4,0 4,-1 5,-1 5,0""#));
    }

    #[test]
    fn svg_of_nothing_is_still_well_formed() {
        let svg = GridLayout::default().to_svg(&[]);
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches("<polygon").count(), 0);
    }
}
