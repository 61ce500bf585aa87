use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::coords::Viewport;
use crate::paint::Color;
use crate::render::{QuadRenderer, RenderCtx, RenderTarget};
use crate::scene::DrawList;

use super::surface::{self, SurfaceView};
use super::{ContextInit, SurfaceRecovery};

/// Accelerated 2D render context bound to one window.
///
/// This type is the low-level rendering context:
/// - selects the Adapter and creates the Device/Queue
/// - configures the Surface (swapchain) for presentation
/// - draws a `DrawList` and presents it
///
/// The window is only borrowed (`'w`); the context never frees it.
pub struct RenderContext<'w> {
    /// Surface created by the context itself when no external view was given.
    own_view: Option<SurfaceView<'w>>,

    /// Selected adapter description, used for reporting.
    adapter_info: wgpu::AdapterInfo,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,

    renderer: QuadRenderer,
}

impl<'w> RenderContext<'w> {
    /// Creates a render context for `window`.
    ///
    /// When `view` is given, its instance and surface are used for adapter
    /// selection and presentation; otherwise the context creates its own over
    /// all backends. Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(
        window: &'w Window,
        view: Option<&SurfaceView<'w>>,
        init: ContextInit,
    ) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let own_view = match view {
            Some(_) => None,
            None => Some(SurfaceView::new(window, wgpu::Backends::all())?),
        };
        let target = view
            .or(own_view.as_ref())
            .context("no surface available for the render context")?;

        let adapter = target
            .instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference(),
                compatible_surface: Some(&target.surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let adapter_info = adapter.get_info();
        if init.accelerated && adapter_info.device_type == wgpu::DeviceType::Cpu {
            anyhow::bail!(
                "adapter '{}' is a software rasterizer but hardware acceleration was requested",
                adapter_info.name
            );
        }

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("easel-engine device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = target.surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps, init.prefer_srgb)
            .context("no supported surface formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode(),
            alpha_mode: surface::choose_alpha_mode(&caps),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };

        target.surface.configure(&device, &config);

        log::debug!(
            "render context: adapter={:?} backend={:?} format={format:?} present={:?}",
            adapter_info.name,
            adapter_info.backend,
            config.present_mode
        );

        Ok(Self {
            own_view,
            adapter_info,
            device,
            queue,
            config,
            size,
            renderer: QuadRenderer::new(),
        })
    }

    /// Human-readable renderer name; never empty.
    pub fn renderer_name(&self) -> String {
        let info = &self.adapter_info;
        if info.name.trim().is_empty() {
            format!("{:?}", info.backend)
        } else {
            format!("{} ({:?})", info.name, info.backend)
        }
    }

    /// Clears to `clear`, paints `list` and presents the frame.
    ///
    /// `view` must be the same external view the context was created with, if
    /// any. Surface errors are logged and the frame is dropped; this never fails.
    pub fn present(
        &mut self,
        window: &Window,
        view: Option<&SurfaceView<'w>>,
        clear: Color,
        list: &DrawList,
    ) {
        let Some(surface) = view.or(self.own_view.as_ref()).map(|v| &v.surface) else {
            log::warn!("present called without a surface");
            return;
        };

        let inner = window.inner_size();
        if inner != self.size {
            self.size = inner;
            // wgpu rejects 0x0 configurations; wait until the window has an area again.
            if inner.width > 0 && inner.height > 0 {
                self.config.width = inner.width;
                self.config.height = inner.height;
                surface.configure(&self.device, &self.config);
            }
        }
        if self.size.width == 0 || self.size.height == 0 {
            return;
        }

        let surface_texture = match surface.get_current_texture() {
            Ok(texture) => texture,
            Err(err) => {
                let recovery = SurfaceRecovery::for_error(&err);
                log::log!(recovery.log_level(), "dropping frame: {err} ({recovery:?})");
                if recovery == SurfaceRecovery::Reconfigure {
                    surface.configure(&self.device, &self.config);
                }
                return;
            }
        };
        let color_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("easel frame encoder"),
            });

        let logical = self.size.to_logical::<f32>(window.scale_factor());
        let rctx = RenderCtx::new(
            &self.device,
            &self.queue,
            self.config.format,
            Viewport::new(logical.width, logical.height),
        );

        {
            let mut target = RenderTarget::new(&mut encoder, &color_view);
            self.renderer.render(&rctx, &mut target, clear, list);
        }

        window.pre_present_notify();
        self.queue.submit(std::iter::once(encoder.finish()));
        drop(color_view);
        surface_texture.present();
    }
}
