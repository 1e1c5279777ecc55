// Front-end tuning: DOM ids, pointer thresholds and overlay decoration

// Element ids expected in index.html
pub const CANVAS_ID: &str = "scene-canvas";
pub const SORRY_BUTTON_ID: &str = "sorry-button";
pub const SORRY_COUNTER_ID: &str = "sorry-counter";
pub const MESSAGE_PANEL_ID: &str = "message-panel";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const LOADING_DETAIL_ID: &str = "loading-detail";
pub const LABEL_LAYER_ID: &str = "label-layer";
pub const FLOATING_HEARTS_ID: &str = "floating-hearts";

// CSS class that hides an overlay element
pub const HIDDEN_CLASS: &str = "hidden";
// CSS class that turns the loading overlay into a corner note
pub const LOADING_FAILED_CLASS: &str = "failed";
// CSS class on the canvas while an interactive object is under the pointer
pub const HOVERING_CLASS: &str = "hovering";

// A press and release closer than this (CSS px) is a click, not a drag
pub const CLICK_SLOP_PX: f32 = 4.0;

// Decorative hearts bouncing behind the UI
pub const FLOATING_HEART_COUNT: usize = 20;
pub const FLOATING_HEART_GLYPH: &str = "💖";
pub const FLOATING_HEART_MAX_DELAY_SEC: f32 = 2.0;
pub const FLOATING_HEART_MIN_DURATION_SEC: f32 = 2.0;
pub const FLOATING_HEART_DURATION_SPAN_SEC: f32 = 2.0;

// Labels smaller than this are hidden instead of drawn as unreadable specks
pub const LABEL_MIN_FONT_PX: f32 = 2.0;

// Initial GPU instance capacity; grows to the next power of two when exceeded
pub const INSTANCE_CAPACITY: usize = 128;
