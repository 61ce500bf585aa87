//! Core engine-facing contracts.
//!
//! Defines the interface between the display session (platform loop) and the
//! application content, without leaking platform types into user code.

mod scene;

pub use scene::Scene;
