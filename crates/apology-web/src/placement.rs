// Screen placement of 3D text labels. Pure math so it can be tested on the host.

use apology_core::{ndc_to_pixel, Camera};
use glam::{Vec2, Vec3};

// Labels whose anchor lies this far outside the viewport (in NDC) are hidden
const OFFSCREEN_NDC: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Anchor position in CSS px relative to the canvas.
    pub left: f32,
    pub top: f32,
    pub font_px: f32,
    /// NDC depth in [0, 1]; nearer labels stack above farther ones.
    pub depth: f32,
}

impl LabelPlacement {
    #[inline]
    pub fn z_index(&self) -> i32 {
        ((1.0 - self.depth.clamp(0.0, 1.0)) * 10_000.0) as i32
    }

    pub fn style(&self, color_css: &str) -> String {
        format!(
            "left:{:.1}px;top:{:.1}px;font-size:{:.1}px;color:{};z-index:{}",
            self.left,
            self.top,
            self.font_px,
            color_css,
            self.z_index()
        )
    }
}

/// Place a label anchored at `world` whose glyphs are `font_world` units tall.
///
/// Returns `None` when the anchor is behind the camera, far off screen or too
/// small to read.
pub fn place_label(
    camera: &Camera,
    world: Vec3,
    font_world: f32,
    viewport_css: Vec2,
    min_font_px: f32,
) -> Option<LabelPlacement> {
    let ndc = camera.project(world)?;
    if ndc.x.abs() > OFFSCREEN_NDC || ndc.y.abs() > OFFSCREEN_NDC {
        return None;
    }
    let px = ndc_to_pixel(ndc.truncate(), viewport_css.x, viewport_css.y);
    let font_px = font_world * camera.pixels_per_unit(world, viewport_css.y);
    (font_px >= min_font_px).then_some(LabelPlacement {
        left: px.x,
        top: px.y,
        font_px,
        depth: ndc.z,
    })
}
