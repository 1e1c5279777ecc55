//! Ephemeral per-object view state (hover and click feedback).
//!
//! This belongs to the rendering layer. It never feeds back into
//! [`crate::InteractionState`].

use crate::color::linear_from_hex;
use crate::constants::{
    BUTTERFLY_EXCITED_DURATION, EXCITED_SCALE, HEART_COLOR, HEART_HOVER_COLOR, HOVER_SCALE,
    WING_COLOR, WING_EXCITED_COLOR, WING_HOVER_COLOR, WING_OPACITY,
};
use crate::scene::{ObjectId, ObjectKind, Paint};
use fnv::FnvHashMap;
use glam::Vec4;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjectView {
    pub hovered: bool,
    pub excited_until: Option<Duration>,
}

impl ObjectView {
    #[inline]
    pub fn is_excited(&self, now: Duration) -> bool {
        self.excited_until.is_some_and(|until| now < until)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ViewStates {
    views: FnvHashMap<ObjectId, ObjectView>,
    hovered: Option<ObjectId>,
}

impl ViewStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ObjectId) -> ObjectView {
        self.views.get(&id).copied().unwrap_or_default()
    }

    pub fn hovered(&self) -> Option<ObjectId> {
        self.hovered
    }

    /// Move the hover highlight. Returns true if it changed.
    pub fn set_hovered(&mut self, id: Option<ObjectId>) -> bool {
        if self.hovered == id {
            return false;
        }
        if let Some(prev) = self.hovered.take() {
            self.views.entry(prev).or_default().hovered = false;
        }
        if let Some(next) = id {
            self.views.entry(next).or_default().hovered = true;
        }
        self.hovered = id;
        true
    }

    /// Start (or restart) the excited window of `id`.
    pub fn excite(&mut self, id: ObjectId, now: Duration) {
        self.views.entry(id).or_default().excited_until =
            Some(now.saturating_add(BUTTERFLY_EXCITED_DURATION));
    }

    pub fn is_excited(&self, id: ObjectId, now: Duration) -> bool {
        self.get(id).is_excited(now)
    }

    /// Forget excited windows that already ran out.
    pub fn expire(&mut self, now: Duration) {
        for view in self.views.values_mut() {
            if view.excited_until.is_some_and(|until| now >= until) {
                view.excited_until = None;
            }
        }
    }

    /// Visual scale of `id`: excited beats hovered beats idle.
    pub fn scale(&self, id: ObjectId, kind: ObjectKind, now: Duration) -> f32 {
        let view = self.get(id);
        match kind {
            ObjectKind::Butterfly if view.is_excited(now) => EXCITED_SCALE,
            ObjectKind::Butterfly | ObjectKind::Heart if view.hovered => HOVER_SCALE,
            _ => 1.0,
        }
    }

    /// Linear RGBA for a part painted with `paint` on object `id`.
    pub fn paint_color(&self, id: ObjectId, paint: Paint, now: Duration) -> Vec4 {
        let view = self.get(id);
        match paint {
            Paint::Fixed(hex) => linear_from_hex(hex).extend(1.0),
            Paint::Heart => {
                let hex = if view.hovered { HEART_HOVER_COLOR } else { HEART_COLOR };
                linear_from_hex(hex).extend(1.0)
            }
            Paint::Wing => {
                let hex = if view.is_excited(now) {
                    WING_EXCITED_COLOR
                } else if view.hovered {
                    WING_HOVER_COLOR
                } else {
                    WING_COLOR
                };
                linear_from_hex(hex).extend(WING_OPACITY)
            }
        }
    }
}
