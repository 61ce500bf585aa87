use crate::coords::Point;
use crate::scene::{DrawCmd, DrawList};

impl DrawList {
    /// Records a one-pixel line from `from` to `to`, both endpoints included.
    #[inline]
    pub fn draw_line(&mut self, from: Point, to: Point) {
        self.push(DrawCmd::Line { from, to });
    }

    /// Records a single pixel.
    #[inline]
    pub fn draw_point(&mut self, p: Point) {
        self.push(DrawCmd::Point(p));
    }

    /// Records segments `p0→p1, p1→p2, …, pn→p0`.
    ///
    /// Fewer than two points record nothing.
    pub fn draw_closed_polyline(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.draw_line(from, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_polyline_returns_to_first_point() {
        let pts = [Point::new(0, 0), Point::new(10, 0), Point::new(5, 8)];
        let mut list = DrawList::new();
        list.draw_closed_polyline(&pts);

        let segments: Vec<_> = list
            .items()
            .iter()
            .map(|item| match item.cmd {
                DrawCmd::Line { from, to } => (from, to),
                ref other => panic!("unexpected command {other:?}"),
            })
            .collect();

        assert_eq!(
            segments,
            vec![(pts[0], pts[1]), (pts[1], pts[2]), (pts[2], pts[0])]
        );
    }

    #[test]
    fn closed_polyline_ignores_single_point() {
        let mut list = DrawList::new();
        list.draw_closed_polyline(&[Point::new(3, 3)]);
        assert!(list.is_empty());
    }
}
