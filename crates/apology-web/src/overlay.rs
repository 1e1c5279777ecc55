use crate::constants::{
    FLOATING_HEARTS_ID, FLOATING_HEART_COUNT, FLOATING_HEART_DURATION_SPAN_SEC,
    FLOATING_HEART_GLYPH, FLOATING_HEART_MAX_DELAY_SEC, FLOATING_HEART_MIN_DURATION_SEC,
    HIDDEN_CLASS, LOADING_DETAIL_ID, LOADING_FAILED_CLASS, LOADING_OVERLAY_ID, MESSAGE_PANEL_ID,
    SORRY_COUNTER_ID,
};
use rand::Rng;
use web_sys as web;

#[inline]
pub fn counter_text(sorry_count: u32) -> String {
    format!("Sorries Sent: {} 💕", sorry_count)
}

#[inline]
pub fn set_counter(document: &web::Document, sorry_count: u32) {
    if let Some(el) = document.get_element_by_id(SORRY_COUNTER_ID) {
        el.set_text_content(Some(&counter_text(sorry_count)));
    }
}

#[inline]
pub fn set_message_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(MESSAGE_PANEL_ID) {
        let _ = el.class_list().toggle_with_force(HIDDEN_CLASS, !visible);
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        let _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

/// Shrink the loading overlay into a corner note explaining that the 3D
/// scene is unavailable.
pub fn report_loading_failure(document: &web::Document, detail: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_DETAIL_ID) {
        el.set_text_content(Some(detail));
    }
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        let _ = el.class_list().add_1(LOADING_FAILED_CLASS);
    }
}

/// Inline style for one bouncing heart. Positions are percentages of the
/// viewport, times are seconds.
pub fn floating_heart_style(left_pct: f32, top_pct: f32, delay_sec: f32, duration_sec: f32) -> String {
    format!(
        "left:{:.2}%;top:{:.2}%;animation-delay:{:.2}s;animation-duration:{:.2}s",
        left_pct, top_pct, delay_sec, duration_sec
    )
}

/// Fill the decorative layer with hearts at random places and tempos.
pub fn spawn_floating_hearts<R: Rng + ?Sized>(
    document: &web::Document,
    rng: &mut R,
) -> anyhow::Result<()> {
    let Some(layer) = document.get_element_by_id(FLOATING_HEARTS_ID) else {
        log::warn!("[overlay] missing #{}; skipping floating hearts", FLOATING_HEARTS_ID);
        return Ok(());
    };
    for _ in 0..FLOATING_HEART_COUNT {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create_element: {:?}", e))?;
        el.set_class_name("floating-heart");
        el.set_text_content(Some(FLOATING_HEART_GLYPH));
        let style = floating_heart_style(
            rng.gen::<f32>() * 100.0,
            rng.gen::<f32>() * 100.0,
            rng.gen::<f32>() * FLOATING_HEART_MAX_DELAY_SEC,
            FLOATING_HEART_MIN_DURATION_SEC + rng.gen::<f32>() * FLOATING_HEART_DURATION_SPAN_SEC,
        );
        let _ = el.set_attribute("style", &style);
        layer
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))?;
    }
    Ok(())
}
