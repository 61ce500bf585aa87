//! Paint model shared between the draw list and renderers.
//!
//! Only solid colors exist; every draw call carries the color that was
//! current when it was recorded.

pub mod color;

pub use color::Color;
