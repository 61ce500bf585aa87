use std::time::Duration;

use crate::device::ContextInit;
use crate::time::FRAME_DELAY;

/// Window creation parameters.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
    /// Center the window on its monitor.
    pub centered: bool,
    pub visible: bool,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_string(),
            width: 800,
            height: 600,
            centered: true,
            visible: true,
            resizable: false,
        }
    }
}

/// Everything the display session needs to come up and run.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub window: WindowConfig,
    pub context: ContextInit,
    /// Sleep after each presented frame.
    pub frame_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            context: ContextInit::default(),
            frame_delay: FRAME_DELAY,
        }
    }
}
