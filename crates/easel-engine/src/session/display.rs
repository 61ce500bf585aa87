use std::io::Write;
use std::time::Duration;

use crate::core::Scene;
use crate::input::InputEvent;
use crate::scene::DrawList;
use crate::time::FrameState;

use super::{Backend, InitError, SessionConfig, WindowConfig};

/// The acquired graphics subsystem and its one window.
///
/// Construction acquires in order (subsystem, window); dropping releases in
/// reverse, including when `open` fails halfway.
pub struct Display<B: Backend> {
    backend: B,
    window: Option<B::Window>,
    acquired: bool,
}

impl<B: Backend> Display<B> {
    /// Acquires the subsystem and creates the window.
    pub fn open(mut backend: B, config: &WindowConfig) -> Result<Self, InitError> {
        backend.acquire()?;
        log::debug!("graphics subsystem acquired");

        let mut display = Self {
            backend,
            window: None,
            acquired: true,
        };

        let window = display.backend.create_window(config)?;
        log::info!("window created: {:?} {}x{}", config.title, config.width, config.height);
        display.window = Some(window);

        Ok(display)
    }

    /// Creates the view (if required) and render context over this display's window.
    ///
    /// On success, one `Using renderer: <name>` line is written to `out`.
    pub fn session(
        &mut self,
        config: &SessionConfig,
        out: &mut dyn Write,
    ) -> Result<DisplaySession<'_, B>, InitError> {
        let Display { backend, window, .. } = self;
        let window: &Option<B::Window> = window;
        let window = window
            .as_ref()
            .ok_or_else(|| InitError::Window("window already destroyed".to_string()))?;

        DisplaySession::initialize(backend, window, config, out)
    }

    /// Destroys the window, then releases the subsystem.
    pub fn shutdown(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(window) = self.window.take() {
            self.backend.destroy_window(window);
            log::debug!("window destroyed");
        }
        if self.acquired {
            self.acquired = false;
            self.backend.release();
            log::debug!("graphics subsystem released");
        }
    }
}

impl<B: Backend> Drop for Display<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Owns the render context (and optional surface view) for one window and
/// drives the draw loop.
///
/// Teardown order is fixed: view, then context. The window itself belongs to
/// [`Display`] and is destroyed after the session is gone.
pub struct DisplaySession<'d, B: Backend + 'd> {
    backend: &'d mut B,
    window: &'d B::Window,

    view: Option<B::View<'d>>,
    context: Option<B::Context<'d>>,

    frame: FrameState,
    frame_delay: Duration,
    quit: bool,

    // Reused across frames.
    list: DrawList,
    events: Vec<InputEvent>,
}

impl<'d, B: Backend + 'd> DisplaySession<'d, B> {
    fn initialize(
        backend: &'d mut B,
        window: &'d B::Window,
        config: &SessionConfig,
        out: &mut dyn Write,
    ) -> Result<Self, InitError> {
        let capabilities = backend.capabilities(window);
        log::debug!("session capabilities: {capabilities:?}");

        let mut session = Self {
            backend,
            window,
            view: None,
            context: None,
            frame: FrameState::new(),
            frame_delay: config.frame_delay,
            quit: false,
            list: DrawList::new(),
            events: Vec::new(),
        };

        if capabilities.surface_view {
            session.view = Some(session.backend.create_view(window)?);
            log::debug!("surface view created");
        }

        let context = session
            .backend
            .create_context(window, session.view.as_ref(), &config.context)?;
        let name = session.backend.renderer_name(&context);
        session.context = Some(context);

        log::info!("render context ready (renderer: {name})");
        if let Err(err) = writeln!(out, "Using renderer: {name}") {
            log::warn!("failed to report renderer: {err}");
        }

        Ok(session)
    }

    /// Current frame state; `tick` equals the number of completed iterations.
    pub fn frame(&self) -> FrameState {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        !self.quit
    }

    /// Runs drain → clear → draw → present → sleep → tick until a quit is seen.
    ///
    /// The termination flag is checked only before each iteration, so the
    /// iteration that observed the quit still draws and presents.
    pub fn run_loop<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        log::info!("entering draw loop");

        while !self.quit {
            self.drain_events();

            self.list.set_draw_color(scene.background());
            self.list.clear();
            scene.draw(self.frame, &mut self.list);

            if let Some(context) = self.context.as_mut() {
                self.backend
                    .present(self.window, self.view.as_ref(), context, &self.list);
            }

            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }

            self.frame.advance();
        }

        log::info!("draw loop finished after {} frames", self.frame.tick);
    }

    /// Destroys the surface view (if any), then the render context.
    pub fn shutdown(mut self) {
        self.teardown();
    }

    fn drain_events(&mut self) {
        self.events.clear();
        self.backend.poll_events(&mut self.events);

        if let Some(ev) = self.events.iter().find(|ev| ev.requests_quit()) {
            log::debug!("quit requested by {ev:?}");
            self.quit = true;
        }
    }

    fn teardown(&mut self) {
        if let Some(view) = self.view.take() {
            self.backend.destroy_view(view);
            log::debug!("surface view destroyed");
        }
        if let Some(context) = self.context.take() {
            self.backend.destroy_context(context);
            log::debug!("render context destroyed");
        }
    }
}

impl<'d, B: Backend + 'd> Drop for DisplaySession<'d, B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
