use anyhow::{Context, Result};
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::window::Window;

/// A wgpu instance plus the surface it created over a window.
///
/// On AppKit windows this is created up front against the Metal backend and
/// handed to the render context; elsewhere the context creates its own.
/// The surface borrows the window, so it can never outlive it.
pub struct SurfaceView<'w> {
    pub(crate) instance: wgpu::Instance,
    pub(crate) surface: wgpu::Surface<'w>,
}

impl<'w> SurfaceView<'w> {
    /// Creates an instance restricted to `backends` and a surface over `window`.
    pub fn new(window: &'w Window, backends: wgpu::Backends) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .with_context(|| format!("failed to create surface for backends {backends:?}"))?;

        Ok(Self { instance, surface })
    }

    /// Metal-backed view for AppKit windows.
    pub fn metal(window: &'w Window) -> Result<Self> {
        Self::new(window, wgpu::Backends::METAL)
    }
}

/// Whether `window` needs a dedicated surface view before a context can be
/// created on it.
pub fn requires_surface_view(window: &Window) -> bool {
    match window.window_handle() {
        Ok(handle) => matches!(handle.as_raw(), RawWindowHandle::AppKit(_)),
        Err(err) => {
            log::debug!("window handle unavailable: {err}");
            false
        }
    }
}

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let preferred = if prefer_srgb {
        [wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb]
    } else {
        [wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Rgba8Unorm]
    };

    preferred
        .into_iter()
        .find(|f| caps.formats.contains(f))
        .or_else(|| caps.formats.iter().copied().find(|f| f.is_srgb() == prefer_srgb))
        .or_else(|| caps.formats.first().copied())
}

pub(crate) fn choose_alpha_mode(caps: &wgpu::SurfaceCapabilities) -> wgpu::CompositeAlphaMode {
    [wgpu::CompositeAlphaMode::Opaque, wgpu::CompositeAlphaMode::Auto]
        .into_iter()
        .find(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}
