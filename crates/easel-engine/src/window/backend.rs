use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::device::{requires_surface_view, ContextInit, RenderContext, SurfaceView};
use crate::input::platform::winit::translate_window_event;
use crate::input::InputEvent;
use crate::scene::DrawList;
use crate::session::{Backend, Capabilities, InitError, WindowConfig};

/// Desktop backend: a `winit` event loop pumped once per frame, with wgpu
/// contexts bound to its window.
///
/// The event loop is the "graphics subsystem". It exists between `acquire`
/// and `release` only.
#[derive(Default)]
pub struct WinitBackend {
    event_loop: Option<EventLoop<()>>,
}

impl WinitBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for WinitBackend {
    type Window = Window;
    type View<'w>
        = SurfaceView<'w>
    where
        Self: 'w;
    type Context<'w>
        = RenderContext<'w>
    where
        Self: 'w;

    fn acquire(&mut self) -> Result<(), InitError> {
        let event_loop = EventLoop::new().map_err(|e| InitError::Subsystem(e.to_string()))?;
        // Frames are paced by the session; never block waiting for events.
        event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop = Some(event_loop);
        Ok(())
    }

    fn release(&mut self) {
        self.event_loop = None;
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<Window, InitError> {
        let event_loop = self
            .event_loop
            .as_ref()
            .ok_or_else(|| InitError::Window("graphics subsystem not acquired".to_string()))?;

        // Created hidden so it can be placed before it is first shown.
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
            .with_resizable(config.resizable)
            .with_visible(false);

        // The session owns the loop and creates its window before the first
        // pump, which needs the loop-level entry point.
        #[allow(deprecated)]
        let window = event_loop
            .create_window(attrs)
            .map_err(|e| InitError::Window(e.to_string()))?;

        if config.centered {
            center_on_monitor(&window);
        }
        window.set_visible(config.visible);

        Ok(window)
    }

    fn destroy_window(&mut self, window: Window) {
        drop(window);
    }

    fn capabilities(&self, window: &Window) -> Capabilities {
        Capabilities {
            surface_view: requires_surface_view(window),
        }
    }

    fn create_view<'w>(&mut self, window: &'w Window) -> Result<SurfaceView<'w>, InitError>
    where
        Self: 'w,
    {
        SurfaceView::metal(window).map_err(|e| InitError::SurfaceView(format!("{e:#}")))
    }

    fn destroy_view<'w>(&mut self, view: SurfaceView<'w>)
    where
        Self: 'w,
    {
        drop(view);
    }

    fn create_context<'w>(
        &mut self,
        window: &'w Window,
        view: Option<&SurfaceView<'w>>,
        init: &ContextInit,
    ) -> Result<RenderContext<'w>, InitError>
    where
        Self: 'w,
    {
        pollster::block_on(RenderContext::new(window, view, init.clone()))
            .map_err(|e| InitError::Context(format!("{e:#}")))
    }

    fn destroy_context<'w>(&mut self, context: RenderContext<'w>)
    where
        Self: 'w,
    {
        drop(context);
    }

    fn renderer_name<'w>(&self, context: &RenderContext<'w>) -> String
    where
        Self: 'w,
    {
        context.renderer_name()
    }

    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };

        let mut collector = EventCollector { events: &mut *events };
        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut collector) {
            log::debug!("event loop exited with status {code}");
            events.push(InputEvent::QuitRequested);
        }
    }

    fn present<'w>(
        &mut self,
        window: &'w Window,
        view: Option<&SurfaceView<'w>>,
        context: &mut RenderContext<'w>,
        frame: &DrawList,
    ) where
        Self: 'w,
    {
        context.present(window, view, frame.clear_color(), frame);
    }
}

/// Queues translated window events for one pump.
struct EventCollector<'a> {
    events: &'a mut Vec<InputEvent>,
}

impl ApplicationHandler for EventCollector<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(ev) = translate_window_event(&event) {
            self.events.push(ev);
        }
    }
}

fn center_on_monitor(window: &Window) {
    let Some(monitor) = window.current_monitor() else {
        log::debug!("no monitor to center on");
        return;
    };

    let pos = monitor.position();
    let size = monitor.size();
    let outer = window.outer_size();

    let (x, y) = centered_origin((pos.x, pos.y), (size.width, size.height), (outer.width, outer.height));
    window.set_outer_position(PhysicalPosition::new(x, y));
}

/// Top-left corner that centers `window` inside the monitor area.
///
/// Windows larger than the monitor overhang it evenly on both sides.
fn centered_origin(monitor_pos: (i32, i32), monitor_size: (u32, u32), window: (u32, u32)) -> (i32, i32) {
    let axis = |pos: i32, avail: u32, len: u32| pos + ((i64::from(avail) - i64::from(len)) / 2) as i32;
    (
        axis(monitor_pos.0, monitor_size.0, window.0),
        axis(monitor_pos.1, monitor_size.1, window.1),
    )
}
