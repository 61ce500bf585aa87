/// Failure to bring up the display session.
///
/// Each variant carries the backend's own diagnostic string. Every variant is
/// terminal: there is no retry and no degraded fallback.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// The graphics subsystem (event loop / display connection) could not be acquired.
    #[error("Failed to initialize graphics subsystem: {0}")]
    Subsystem(String),

    /// The window could not be created.
    #[error("Failed to create window: {0}")]
    Window(String),

    /// The platform surface view required before context creation failed.
    #[error("Failed to create surface view: {0}")]
    SurfaceView(String),

    /// The accelerated render context could not be created.
    #[error("Failed to create renderer: {0}")]
    Context(String),
}

impl InitError {
    /// Process exit status for this failure.
    pub const fn exit_code(&self) -> u8 {
        1
    }
}
