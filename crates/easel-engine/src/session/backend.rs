use crate::device::ContextInit;
use crate::input::InputEvent;
use crate::scene::DrawList;

use super::{InitError, WindowConfig};

/// Platform features resolved once per session.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Capabilities {
    /// A dedicated surface view must exist before the render context is
    /// created, and must be destroyed after the draw loop ends.
    pub surface_view: bool,
}

/// Platform + GPU seam driven by the display session.
///
/// The session decides *when* each resource is created and destroyed; a
/// backend only knows *how*. Views and contexts borrow the window (`'w`), so
/// neither can outlive it, and neither is responsible for freeing it.
pub trait Backend {
    type Window;
    type View<'w>
    where
        Self: 'w;
    type Context<'w>
    where
        Self: 'w;

    /// Acquires the graphics subsystem.
    fn acquire(&mut self) -> Result<(), InitError>;

    /// Releases the graphics subsystem. Called at most once after a successful `acquire`.
    fn release(&mut self);

    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window, InitError>;

    fn destroy_window(&mut self, window: Self::Window);

    /// Reports which optional setup steps `window` needs.
    fn capabilities(&self, window: &Self::Window) -> Capabilities;

    fn create_view<'w>(&mut self, window: &'w Self::Window) -> Result<Self::View<'w>, InitError>
    where
        Self: 'w;

    fn destroy_view<'w>(&mut self, view: Self::View<'w>)
    where
        Self: 'w;

    fn create_context<'w>(
        &mut self,
        window: &'w Self::Window,
        view: Option<&Self::View<'w>>,
        init: &ContextInit,
    ) -> Result<Self::Context<'w>, InitError>
    where
        Self: 'w;

    fn destroy_context<'w>(&mut self, context: Self::Context<'w>)
    where
        Self: 'w;

    /// Name of the renderer behind `context`; never empty.
    fn renderer_name<'w>(&self, context: &Self::Context<'w>) -> String
    where
        Self: 'w;

    /// Appends every pending input event to `events` without blocking.
    fn poll_events(&mut self, events: &mut Vec<InputEvent>);

    /// Clears, paints `frame` and presents it. Failures are the backend's to log.
    fn present<'w>(
        &mut self,
        window: &'w Self::Window,
        view: Option<&Self::View<'w>>,
        context: &mut Self::Context<'w>,
        frame: &DrawList,
    ) where
        Self: 'w;
}
