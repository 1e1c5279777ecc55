use apology_core::ObjectId;
use glam::Vec2;
use web_sys as web;

/// Press recorded on pointerdown, resolved on pointerup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
    pub origin: Vec2,
    /// Farthest distance from `origin` seen while held, in CSS px.
    pub travel: f32,
    pub target: Option<ObjectId>,
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub press: Option<Press>,
}

impl PointerState {
    pub fn press(&mut self, pos: Vec2, target: Option<ObjectId>) {
        self.x = pos.x;
        self.y = pos.y;
        self.down = true;
        self.press = Some(Press {
            origin: pos,
            travel: 0.0,
            target,
        });
    }

    /// Track a move. Returns the delta since the previous position while the
    /// pointer is held, so the caller can turn it into an orbit drag.
    pub fn move_to(&mut self, pos: Vec2) -> Option<Vec2> {
        let delta = pos - Vec2::new(self.x, self.y);
        self.x = pos.x;
        self.y = pos.y;
        if !self.down {
            return None;
        }
        if let Some(p) = &mut self.press {
            p.travel = p.travel.max(pos.distance(p.origin));
        }
        Some(delta)
    }

    /// Finish the press. Returns the clicked object when the pointer went
    /// down and up on the same object without moving past the click slop.
    pub fn release(&mut self, pos: Vec2, target: Option<ObjectId>) -> Option<ObjectId> {
        self.move_to(pos);
        self.down = false;
        let press = self.press.take()?;
        if press.travel >= crate::constants::CLICK_SLOP_PX {
            return None;
        }
        match (press.target, target) {
            (Some(a), Some(b)) if a == b => Some(a),
            _ => None,
        }
    }

    /// Drop any press in flight (pointercancel, lost capture).
    pub fn cancel(&mut self) {
        self.down = false;
        self.press = None;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.down
            && self
                .press
                .is_some_and(|p| p.travel >= crate::constants::CLICK_SLOP_PX)
    }
}

// ---------------- Pointer helpers ----------------
/// Pointer position relative to the canvas, in CSS px.
#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// CSS size of the canvas, never zero.
#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new((rect.width() as f32).max(1.0), (rect.height() as f32).max(1.0))
}
