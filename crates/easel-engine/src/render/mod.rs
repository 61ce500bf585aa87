//! GPU rendering subsystem.
//!
//! The draw list is tessellated into axis-aligned pixel quads on the CPU and
//! drawn with a single instanced pipeline.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod quad;
mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::QuadRenderer;
pub use tessellate::{tessellate, Quad};
