use crate::coords::Point;
use crate::scene::DrawList;

/// Pixels of a filled circle, found by testing every offset of its bounding
/// square against `dx² + dy² <= r²`.
///
/// Offsets run over `[-radius, radius)` on both axes, so the set never leaves
/// the `2r × 2r` square anchored at `center - r`. Distances are squared in
/// `i64`, so any `i32` radius is accepted. Non-positive radii yield nothing.
pub fn circle_points(center: Point, radius: i32) -> impl Iterator<Item = Point> {
    let r = radius.max(0);
    let r2 = i64::from(r) * i64::from(r);
    (-r..r).flat_map(move |dy| {
        let dy2 = i64::from(dy) * i64::from(dy);
        (-r..r)
            .filter(move |&dx| i64::from(dx) * i64::from(dx) + dy2 <= r2)
            .map(move |dx| center.offset(dx, dy))
    })
}

impl DrawList {
    /// Records a filled circle as individual points.
    pub fn fill_circle(&mut self, center: Point, radius: i32) {
        for p in circle_points(center, radius) {
            self.draw_point(p);
        }
    }
}
