//! Easel engine crate.
//!
//! A small immediate-mode 2D drawing engine: one window, one accelerated
//! render context, and a fixed-rate draw loop that replays a scene every frame.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;
pub mod session;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
