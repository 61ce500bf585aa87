//! Recording helpers, one file per shape family.

pub mod circle;
pub mod line;
pub mod rect;
