//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Surface pair for a window (`SurfaceView`)
//! - creating the Adapter/Device/Queue and configuring presentation (`RenderContext`)
//! - acquiring, drawing and presenting frames

mod context;
mod error;
mod init;
mod surface;

pub use context::RenderContext;
pub use error::SurfaceRecovery;
pub use init::ContextInit;
pub use surface::{requires_surface_view, SurfaceView};
