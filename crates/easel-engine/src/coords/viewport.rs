use super::Rect;

/// Viewport size in logical pixels.
///
/// Renderers treat this as the coordinate basis for converting logical px
/// positions to NDC in shaders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixel bounds of the viewport, rounded up to whole pixels.
    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::new(0, 0, self.width.ceil() as i32, self.height.ceil() as i32)
    }
}
