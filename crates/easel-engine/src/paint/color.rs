/// RGBA color with premultiplied alpha, in the 0..1 range.
///
/// Scenes only build opaque colors (`rgb_u8`), for which premultiplied and
/// straight alpha coincide.
///
/// Channel values are written to the surface as-is: a surface format without
/// sRGB encoding reproduces 8-bit inputs exactly.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb_u8(0, 0, 0);
    pub const WHITE: Color = Color::rgb_u8(255, 255, 255);

    /// Opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}
