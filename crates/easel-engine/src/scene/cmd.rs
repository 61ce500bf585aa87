use crate::coords::{Point, Rect};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement the recording helper inside that shape module
/// - teach `render::tessellate` to turn it into quads
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled axis-aligned rectangle.
    FillRect(Rect),
    /// One-pixel outline of an axis-aligned rectangle.
    StrokeRect(Rect),
    /// One-pixel line; both endpoints are drawn.
    Line { from: Point, to: Point },
    /// Single pixel.
    Point(Point),
}
