//! Palette helpers.
//!
//! Colors are authored as sRGB hex values and converted to linear RGB before
//! they reach the GPU, because the surface uses an sRGB format.

use glam::Vec3;

/// Split a `0xRRGGBB` value into sRGB components in \[0, 1\].
#[inline]
pub fn srgb_from_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Vec3::new(r, g, b)
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` to linear RGB.
#[inline]
pub fn linear_from_hex(hex: u32) -> Vec3 {
    let s = srgb_from_hex(hex);
    Vec3::new(srgb_to_linear(s.x), srgb_to_linear(s.y), srgb_to_linear(s.z))
}

/// CSS color string for DOM overlays.
pub fn css_hex(hex: u32) -> String {
    format!("#{:06X}", hex & 0x00FF_FFFF)
}
