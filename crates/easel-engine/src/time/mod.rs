//! Time subsystem.
//!
//! The draw loop is paced by a fixed sleep, not by measured frame times.
//! `FrameState` carries the per-frame tick that drives animation.

mod frame_state;

pub use frame_state::{FrameState, FRAME_DELAY};
