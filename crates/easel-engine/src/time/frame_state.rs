use std::time::Duration;

/// Fixed delay between frames, approximating 60 frames per second.
pub const FRAME_DELAY: Duration = Duration::from_millis(16);

/// Per-loop animation state.
///
/// `tick` counts completed loop iterations and only ever grows. There is no
/// wall-clock measurement: animation advances one step per frame no matter how
/// long the frame took.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameState {
    pub tick: u64,
}

impl FrameState {
    #[inline]
    pub const fn new() -> Self {
        Self { tick: 0 }
    }

    /// Angle in radians after `tick` steps of `step` radians.
    #[inline]
    pub fn phase(self, step: f64) -> f64 {
        self.tick as f64 * step
    }

    /// Moves to the next frame.
    #[inline]
    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
