//! DOM text labels for the title and the floating sorry captions.
//!
//! Labels are absolutely positioned elements in a layer above the canvas,
//! moved every frame to the projected position of their 3D anchor.

use crate::constants::{LABEL_LAYER_ID, LABEL_MIN_FONT_PX};
use crate::dom;
use crate::placement::place_label;
use apology_core::color::css_hex;
use apology_core::sorry_text::SorryTextLayer;
use apology_core::{
    Camera, SORRY_TEXT_COLOR, SORRY_TEXT_FONT_SIZE, TITLE_COLOR, TITLE_FONT_SIZE, TITLE_TEXT,
};
use glam::{Vec2, Vec3};
use web_sys as web;

const HIDDEN_STYLE: &str = "display:none";

pub struct LabelLayer {
    document: web::Document,
    container: web::Element,
    title: web::Element,
    sorry: Vec<web::Element>,
    title_color: String,
    sorry_color: String,
}

impl LabelLayer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let container = document
            .get_element_by_id(LABEL_LAYER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", LABEL_LAYER_ID))?;
        let title = dom::append_div(document, &container, "scene-label title-label", TITLE_TEXT)?;
        let _ = title.set_attribute("style", HIDDEN_STYLE);
        Ok(Self {
            document: document.clone(),
            container,
            title,
            sorry: Vec::new(),
            title_color: css_hex(TITLE_COLOR),
            sorry_color: css_hex(SORRY_TEXT_COLOR),
        })
    }

    /// Grow the caption pool to cover `texts`. Elements are never removed;
    /// unused ones are hidden in [`LabelLayer::update`].
    fn ensure_pool(&mut self, texts: &SorryTextLayer) {
        for text in texts.texts().iter().skip(self.sorry.len()) {
            match dom::append_div(
                &self.document,
                &self.container,
                "scene-label sorry-label",
                text.caption,
            ) {
                Ok(el) => self.sorry.push(el),
                Err(e) => {
                    log::error!("[labels] could not create caption: {:?}", e);
                    return;
                }
            }
        }
    }

    pub fn update(
        &mut self,
        camera: &Camera,
        viewport_css: Vec2,
        title_world: Option<Vec3>,
        texts: &SorryTextLayer,
        t_sec: f32,
    ) {
        let title = title_world
            .and_then(|w| place_label(camera, w, TITLE_FONT_SIZE, viewport_css, LABEL_MIN_FONT_PX));
        show_or_hide(&self.title, title.map(|p| p.style(&self.title_color)));

        self.ensure_pool(texts);
        let live = texts.texts();
        for (i, el) in self.sorry.iter().enumerate() {
            let style = live.get(i).and_then(|text| {
                place_label(
                    camera,
                    text.world_position(t_sec),
                    SORRY_TEXT_FONT_SIZE,
                    viewport_css,
                    LABEL_MIN_FONT_PX,
                )
                .map(|p| p.style(&self.sorry_color))
            });
            show_or_hide(el, style);
        }
    }
}

#[inline]
fn show_or_hide(el: &web::Element, style: Option<String>) {
    let _ = el.set_attribute("style", style.as_deref().unwrap_or(HIDDEN_STYLE));
}
