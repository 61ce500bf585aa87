//! Display session: window + render context lifecycle and the draw loop.
//!
//! Resources are scoped objects. [`Display`] holds the subsystem and window;
//! [`DisplaySession`] borrows the window and holds the surface view and render
//! context. Dropping either releases what it holds in reverse acquisition
//! order, so early returns never leak and never reorder teardown:
//!
//! ```text
//! acquire subsystem → window → [surface view] → context
//! destroy [surface view] → context → window → release subsystem
//! ```

mod backend;
mod config;
mod display;
mod error;

use std::io::Write;

pub use backend::{Backend, Capabilities};
pub use config::{SessionConfig, WindowConfig};
pub use display::{Display, DisplaySession};
pub use error::InitError;

use crate::core::Scene;

/// Brings up a display on `backend`, runs `scene` until the user quits, and
/// tears everything down.
///
/// The renderer report line goes to `out`; diagnostics go through `log`.
pub fn run<B, S>(
    backend: B,
    config: &SessionConfig,
    scene: &mut S,
    out: &mut dyn Write,
) -> Result<(), InitError>
where
    B: Backend,
    S: Scene + ?Sized,
{
    let mut display = Display::open(backend, &config.window)?;

    {
        let mut session = display.session(config, out)?;
        session.run_loop(scene);
        session.shutdown();
    }

    display.shutdown();
    log::info!("display shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::coords::Point;
    use crate::device::ContextInit;
    use crate::input::{InputEvent, Key, KeyState};
    use crate::paint::Color;
    use crate::scene::DrawList;
    use crate::time::FrameState;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    #[derive(Debug, Default, Copy, Clone, PartialEq)]
    enum FailAt {
        #[default]
        Nothing,
        Acquire,
        Window,
        View,
        Context,
    }

    /// Backend that records every call and replays scripted input.
    #[derive(Default)]
    struct RecordingBackend {
        log: Log,
        fail: FailAt,
        surface_view: bool,
        /// One entry per `poll_events` call; later polls see nothing.
        script: VecDeque<Vec<InputEvent>>,
        presented: Rc<RefCell<Vec<(Color, usize)>>>,
    }

    impl RecordingBackend {
        fn new(script: Vec<Vec<InputEvent>>) -> Self {
            Self {
                script: script.into(),
                ..Self::default()
            }
        }

        fn failing(fail: FailAt) -> Self {
            Self { fail, ..Self::default() }
        }

        fn with_surface_view(mut self) -> Self {
            self.surface_view = true;
            self
        }

        fn record(&self, entry: &'static str) {
            self.log.borrow_mut().push(entry);
        }

        fn fail_if(&self, at: FailAt, err: InitError) -> Result<(), InitError> {
            if self.fail == at { Err(err) } else { Ok(()) }
        }
    }

    struct FakeWindow;

    struct FakeView<'w> {
        _window: &'w FakeWindow,
    }

    struct FakeContext<'w> {
        _window: &'w FakeWindow,
    }

    impl Backend for RecordingBackend {
        type Window = FakeWindow;
        type View<'w>
            = FakeView<'w>
        where
            Self: 'w;
        type Context<'w>
            = FakeContext<'w>
        where
            Self: 'w;

        fn acquire(&mut self) -> Result<(), InitError> {
            self.record("acquire");
            self.fail_if(FailAt::Acquire, InitError::Subsystem("no video device".into()))
        }

        fn release(&mut self) {
            self.record("release");
        }

        fn create_window(&mut self, _config: &WindowConfig) -> Result<FakeWindow, InitError> {
            self.record("create_window");
            self.fail_if(FailAt::Window, InitError::Window("no display".into()))?;
            Ok(FakeWindow)
        }

        fn destroy_window(&mut self, _window: FakeWindow) {
            self.record("destroy_window");
        }

        fn capabilities(&self, _window: &FakeWindow) -> Capabilities {
            Capabilities { surface_view: self.surface_view }
        }

        fn create_view<'w>(&mut self, window: &'w FakeWindow) -> Result<FakeView<'w>, InitError>
        where
            Self: 'w,
        {
            self.record("create_view");
            self.fail_if(FailAt::View, InitError::SurfaceView("no metal".into()))?;
            Ok(FakeView { _window: window })
        }

        fn destroy_view<'w>(&mut self, _view: FakeView<'w>)
        where
            Self: 'w,
        {
            self.record("destroy_view");
        }

        fn create_context<'w>(
            &mut self,
            window: &'w FakeWindow,
            _view: Option<&FakeView<'w>>,
            init: &ContextInit,
        ) -> Result<FakeContext<'w>, InitError>
        where
            Self: 'w,
        {
            assert!(init.accelerated && init.vsync, "context must request acceleration and vsync");
            self.record("create_context");
            self.fail_if(FailAt::Context, InitError::Context("no adapter".into()))?;
            Ok(FakeContext { _window: window })
        }

        fn destroy_context<'w>(&mut self, _context: FakeContext<'w>)
        where
            Self: 'w,
        {
            self.record("destroy_context");
        }

        fn renderer_name<'w>(&self, _context: &FakeContext<'w>) -> String
        where
            Self: 'w,
        {
            "fake-gpu".to_string()
        }

        fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
            self.record("poll");
            if let Some(batch) = self.script.pop_front() {
                events.extend(batch);
            }
        }

        fn present<'w>(
            &mut self,
            _window: &'w FakeWindow,
            _view: Option<&FakeView<'w>>,
            _context: &mut FakeContext<'w>,
            frame: &DrawList,
        ) where
            Self: 'w,
        {
            self.record("present");
            self.presented.borrow_mut().push((frame.clear_color(), frame.len()));
        }
    }

    /// Scene that remembers which ticks it was asked to draw.
    #[derive(Default)]
    struct TickScene {
        ticks: Vec<u64>,
    }

    impl Scene for TickScene {
        fn background(&self) -> Color {
            Color::rgb_u8(64, 64, 64)
        }

        fn draw(&mut self, frame: FrameState, list: &mut DrawList) {
            self.ticks.push(frame.tick);
            list.set_draw_color(Color::WHITE);
            list.draw_point(Point::new(1, 1));
        }
    }

    fn config() -> SessionConfig {
        SessionConfig {
            frame_delay: Duration::ZERO,
            ..SessionConfig::default()
        }
    }

    /// Log without the per-frame `poll`/`present` noise.
    fn lifecycle(log: &Log) -> Vec<&'static str> {
        log.borrow()
            .iter()
            .copied()
            .filter(|e| *e != "poll" && *e != "present")
            .collect()
    }

    fn count(log: &Log, entry: &str) -> usize {
        log.borrow().iter().filter(|e| **e == entry).count()
    }

    fn position(log: &Log, entry: &str) -> Option<usize> {
        log.borrow().iter().position(|e| *e == entry)
    }

    fn last_position(log: &Log, entry: &str) -> Option<usize> {
        log.borrow().iter().rposition(|e| *e == entry)
    }

    // ── lifecycle ordering ────────────────────────────────────────────────────

    #[test]
    fn clean_run_acquires_and_releases_in_reverse_order() {
        let backend = RecordingBackend::new(vec![vec![], vec![], vec![InputEvent::QuitRequested]]);
        let log = backend.log.clone();
        let mut out = Vec::new();

        run(backend, &config(), &mut TickScene::default(), &mut out).unwrap();

        assert_eq!(
            lifecycle(&log),
            vec![
                "acquire",
                "create_window",
                "create_context",
                "destroy_context",
                "destroy_window",
                "release",
            ]
        );
    }

    #[test]
    fn surface_view_brackets_the_context_and_outlives_the_loop() {
        let backend =
            RecordingBackend::new(vec![vec![InputEvent::QuitRequested]]).with_surface_view();
        let log = backend.log.clone();

        run(backend, &config(), &mut TickScene::default(), &mut Vec::new()).unwrap();

        assert_eq!(
            lifecycle(&log),
            vec![
                "acquire",
                "create_window",
                "create_view",
                "create_context",
                "destroy_view",
                "destroy_context",
                "destroy_window",
                "release",
            ]
        );
        assert!(last_position(&log, "present") < position(&log, "destroy_view"));
    }

    #[test]
    fn no_surface_view_without_the_capability() {
        let backend = RecordingBackend::new(vec![vec![InputEvent::QuitRequested]]);
        let log = backend.log.clone();

        run(backend, &config(), &mut TickScene::default(), &mut Vec::new()).unwrap();

        assert_eq!(count(&log, "create_view"), 0);
        assert_eq!(count(&log, "destroy_view"), 0);
    }

    // ── failures ──────────────────────────────────────────────────────────────

    #[test]
    fn subsystem_failure_releases_nothing() {
        let backend = RecordingBackend::failing(FailAt::Acquire);
        let log = backend.log.clone();
        let mut out = Vec::new();

        let err = run(backend, &config(), &mut TickScene::default(), &mut out).unwrap_err();

        assert!(matches!(err, InitError::Subsystem(_)));
        assert_eq!(lifecycle(&log), vec!["acquire"]);
        assert!(out.is_empty());
    }

    #[test]
    fn window_failure_reports_no_renderer_and_releases_subsystem() {
        let backend = RecordingBackend::failing(FailAt::Window);
        let log = backend.log.clone();
        let mut out = Vec::new();

        let err = run(backend, &config(), &mut TickScene::default(), &mut out).unwrap_err();

        assert_eq!(err, InitError::Window("no display".into()));
        assert_eq!(err.exit_code(), 1);
        assert!(out.is_empty());
        assert_eq!(lifecycle(&log), vec!["acquire", "create_window", "release"]);
    }

    #[test]
    fn view_failure_skips_context_and_tears_down_window() {
        let backend = RecordingBackend::failing(FailAt::View).with_surface_view();
        let log = backend.log.clone();
        let mut out = Vec::new();

        let err = run(backend, &config(), &mut TickScene::default(), &mut out).unwrap_err();

        assert!(matches!(err, InitError::SurfaceView(_)));
        assert!(out.is_empty());
        assert_eq!(
            lifecycle(&log),
            vec!["acquire", "create_window", "create_view", "destroy_window", "release"]
        );
    }

    #[test]
    fn context_failure_destroys_view_before_window() {
        let backend = RecordingBackend::failing(FailAt::Context).with_surface_view();
        let log = backend.log.clone();
        let mut out = Vec::new();

        let err = run(backend, &config(), &mut TickScene::default(), &mut out).unwrap_err();

        assert!(matches!(err, InitError::Context(_)));
        assert!(out.is_empty());
        assert_eq!(count(&log, "poll"), 0);
        assert_eq!(
            lifecycle(&log),
            vec![
                "acquire",
                "create_window",
                "create_view",
                "create_context",
                "destroy_view",
                "destroy_window",
                "release",
            ]
        );
    }

    // ── reporting ─────────────────────────────────────────────────────────────

    #[test]
    fn renderer_is_reported_once_before_the_loop() {
        let backend = RecordingBackend::new(vec![vec![], vec![InputEvent::QuitRequested]]);
        let mut out = Vec::new();

        let mut display = Display::open(backend, &config().window).unwrap();
        let mut session = display.session(&config(), &mut out).unwrap();

        // Reported during initialization, before any frame.
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "Using renderer: fake-gpu\n");

        session.run_loop(&mut TickScene::default());
        session.shutdown();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.lines().all(|l| l.starts_with("Using renderer: ") && l.len() > 16));
    }

    // ── termination ───────────────────────────────────────────────────────────

    #[test]
    fn quit_during_drain_finishes_the_current_frame_only() {
        let backend = RecordingBackend::new(vec![
            vec![],
            vec![],
            vec![InputEvent::Other, InputEvent::QuitRequested, InputEvent::Other],
            vec![],
        ]);
        let log = backend.log.clone();
        let mut scene = TickScene::default();

        let mut display = Display::open(backend, &config().window).unwrap();
        let mut session = display.session(&config(), &mut Vec::new()).unwrap();
        session.run_loop(&mut scene);

        assert!(!session.is_running());
        assert_eq!(session.frame().tick, 3);
        assert_eq!(scene.ticks, vec![0, 1, 2]);
        assert_eq!(count(&log, "poll"), 3);
        assert_eq!(count(&log, "present"), 3);
    }

    #[test]
    fn escape_press_terminates() {
        let backend = RecordingBackend::new(vec![vec![InputEvent::key_pressed(Key::Escape)]]);
        let log = backend.log.clone();

        run(backend, &config(), &mut TickScene::default(), &mut Vec::new()).unwrap();

        assert_eq!(count(&log, "present"), 1);
    }

    #[test]
    fn unrelated_input_is_ignored() {
        let backend = RecordingBackend::new(vec![
            vec![InputEvent::Key { key: Key::Escape, state: KeyState::Released, repeat: false }],
            vec![InputEvent::key_pressed(Key::Unknown(44)), InputEvent::Other],
            vec![InputEvent::QuitRequested],
        ]);
        let log = backend.log.clone();

        run(backend, &config(), &mut TickScene::default(), &mut Vec::new()).unwrap();

        assert_eq!(count(&log, "present"), 3);
    }

    #[test]
    fn each_frame_is_cleared_to_background_then_drawn() {
        let backend = RecordingBackend::new(vec![vec![], vec![InputEvent::QuitRequested]]);
        let presented = backend.presented.clone();

        run(backend, &config(), &mut TickScene::default(), &mut Vec::new()).unwrap();

        let frames = presented.borrow();
        assert_eq!(frames.len(), 2);
        for (clear, items) in frames.iter() {
            assert_eq!(*clear, Color::rgb_u8(64, 64, 64));
            // One point per frame; earlier frames never leak into later ones.
            assert_eq!(*items, 1);
        }
    }
}
