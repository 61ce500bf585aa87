/// Initialization parameters for the render context.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct ContextInit {
    /// Require a hardware adapter.
    ///
    /// Software rasterizers are rejected rather than used as a fallback.
    pub accelerated: bool,

    /// Synchronize presentation with the display refresh (FIFO).
    pub vsync: bool,

    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: draw colors are 8-bit display values and must reach
    /// the surface unconverted.
    pub prefer_srgb: bool,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl ContextInit {
    pub(crate) fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    pub(crate) fn power_preference(&self) -> wgpu::PowerPreference {
        if self.accelerated {
            wgpu::PowerPreference::HighPerformance
        } else {
            wgpu::PowerPreference::None
        }
    }
}

impl Default for ContextInit {
    fn default() -> Self {
        Self {
            accelerated: true,
            vsync: true,
            prefer_srgb: false,
            desired_maximum_frame_latency: 2,
        }
    }
}
