/// What the context does with a frame whose surface texture could not be
/// acquired. The frame itself is always dropped; the draw loop never stops.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceRecovery {
    /// The swapchain no longer matches the window; configure it again.
    Reconfigure,
    /// Transient; try again next frame.
    Skip,
    /// Out of memory. Nothing to repair, but worth reporting loudly.
    Report,
}

impl SurfaceRecovery {
    pub fn for_error(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Self::Reconfigure,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => Self::Skip,
            wgpu::SurfaceError::OutOfMemory => Self::Report,
        }
    }

    pub fn log_level(self) -> log::Level {
        match self {
            Self::Report => log::Level::Error,
            Self::Reconfigure | Self::Skip => log::Level::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_swapchain_is_reconfigured() {
        assert_eq!(SurfaceRecovery::for_error(&wgpu::SurfaceError::Lost), SurfaceRecovery::Reconfigure);
        assert_eq!(SurfaceRecovery::for_error(&wgpu::SurfaceError::Outdated), SurfaceRecovery::Reconfigure);
    }

    #[test]
    fn transient_errors_skip_the_frame() {
        assert_eq!(SurfaceRecovery::for_error(&wgpu::SurfaceError::Timeout), SurfaceRecovery::Skip);
        assert_eq!(SurfaceRecovery::for_error(&wgpu::SurfaceError::Other), SurfaceRecovery::Skip);
    }

    #[test]
    fn only_out_of_memory_is_loud() {
        let oom = SurfaceRecovery::for_error(&wgpu::SurfaceError::OutOfMemory);
        assert_eq!(oom, SurfaceRecovery::Report);
        assert_eq!(oom.log_level(), log::Level::Error);
        assert_eq!(SurfaceRecovery::Skip.log_level(), log::Level::Debug);
    }
}
