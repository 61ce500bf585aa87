//! Draw list → pixel quads.

use crate::coords::{Point, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Axis-aligned block of pixels in a single color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub rect: Rect,
    pub color: Color,
}

/// Converts `list` into quads clipped to `bounds`, appending to `out` in
/// paint order.
///
/// Horizontally adjacent one-pixel-high quads of the same color are merged
/// into runs, which keeps point-heavy shapes (filled circles, sloped lines)
/// at one instance per row.
pub fn tessellate(list: &DrawList, bounds: Rect, out: &mut Vec<Quad>) {
    let mut sink = QuadSink { bounds, out };

    for item in list.items() {
        let color = item.color;
        match item.cmd {
            DrawCmd::FillRect(r) => sink.push(r.normalized(), color),
            DrawCmd::StrokeRect(r) => stroke_rect(&mut sink, r.normalized(), color),
            DrawCmd::Line { from, to } => line(&mut sink, from, to, color),
            DrawCmd::Point(p) => sink.push(Rect::new(p.x, p.y, 1, 1), color),
        }
    }
}

struct QuadSink<'a> {
    bounds: Rect,
    out: &'a mut Vec<Quad>,
}

impl QuadSink<'_> {
    fn push(&mut self, rect: Rect, color: Color) {
        let Some(rect) = rect.intersect(self.bounds) else { return };

        if let Some(last) = self.out.last_mut() {
            let same_row = rect.h == 1 && last.rect.h == 1 && last.rect.y == rect.y;
            if same_row && last.color == color {
                if last.rect.right() == rect.x {
                    last.rect.w += rect.w;
                    return;
                }
                if rect.right() == last.rect.x {
                    last.rect.x = rect.x;
                    last.rect.w += rect.w;
                    return;
                }
            }
        }

        self.out.push(Quad { rect, color });
    }
}

fn stroke_rect(sink: &mut QuadSink<'_>, r: Rect, color: Color) {
    if r.is_empty() {
        return;
    }
    if r.w <= 2 || r.h <= 2 {
        sink.push(r, color);
        return;
    }

    sink.push(Rect::new(r.x, r.y, r.w, 1), color);
    sink.push(Rect::new(r.x, r.bottom() - 1, r.w, 1), color);
    sink.push(Rect::new(r.x, r.y + 1, 1, r.h - 2), color);
    sink.push(Rect::new(r.right() - 1, r.y + 1, 1, r.h - 2), color);
}

fn line(sink: &mut QuadSink<'_>, from: Point, to: Point, color: Color) {
    if from.y == to.y {
        let x = from.x.min(to.x);
        sink.push(Rect::new(x, from.y, (to.x - from.x).abs() + 1, 1), color);
        return;
    }
    if from.x == to.x {
        let y = from.y.min(to.y);
        sink.push(Rect::new(from.x, y, 1, (to.y - from.y).abs() + 1), color);
        return;
    }

    // Bresenham, all octants.
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let (mut x, mut y) = (from.x, from.y);
    let mut err = dx + dy;

    loop {
        sink.push(Rect::new(x, y, 1, 1), color);
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
