//! Coordinate and geometry types shared by the draw list and renderers.
//!
//! Canonical CPU space:
//! - Logical pixels, integer grid
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod point;
mod rect;
mod viewport;

pub use point::Point;
pub use rect::Rect;
pub use viewport::Viewport;
