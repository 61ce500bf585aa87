//! Desktop platform backend.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.

mod backend;

pub use backend::WinitBackend;
