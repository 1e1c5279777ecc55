use crate::constants::{HOVERING_CLASS, SORRY_BUTTON_ID};
use crate::dom;
use crate::frame::SessionClock;
use crate::input;
use crate::overlay;
use apology_core::layout::ObjectPose;
use apology_core::picking::pick;
use apology_core::timer::ScheduledTask;
use apology_core::view::ViewStates;
use apology_core::{
    activate_object, pixel_to_ndc, Activation, ObjectId, OrbitCamera, SceneCatalogue,
    SceneController,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub clock: SessionClock,
    pub catalogue: Rc<SceneCatalogue>,
    pub controller: Rc<RefCell<SceneController>>,
    pub views: Rc<RefCell<ViewStates>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub poses: Rc<RefCell<Vec<ObjectPose>>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
    wire_pointerleave(&w);
    wire_sorry_button(&w);
}

fn listen(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
    let _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Interactive object under the canvas point `css` (CSS px), using the poses
/// of the last drawn frame.
fn pick_at(w: &InputWiring, css: Vec2) -> Option<ObjectId> {
    let size = input::canvas_css_size(&w.canvas);
    let camera = w.orbit.borrow().camera(size.x / size.y);
    let ray = camera.ray_through_ndc(pixel_to_ndc(css, size.x, size.y));
    let poses = w.poses.borrow();
    pick(&ray, &poses).map(|(id, _)| id)
}

fn set_hover(w: &InputWiring, hit: Option<ObjectId>) {
    if w.views.borrow_mut().set_hovered(hit) {
        let _ = w
            .canvas
            .class_list()
            .toggle_with_force(HOVERING_CLASS, hit.is_some());
    }
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    listen(&w.canvas.clone(), "pointermove", move |ev| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let delta = w.pointer.borrow_mut().move_to(pos);
        if let Some(d) = delta {
            let h = input::canvas_css_size(&w.canvas).y;
            w.orbit.borrow_mut().rotate_by_pixels(d.x, d.y, h);
        }
        if w.pointer.borrow().is_dragging() {
            return;
        }
        let hit = pick_at(&w, pos);
        set_hover(&w, hit);
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    listen(&w.canvas.clone(), "pointerdown", move |ev| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let target = pick_at(&w, pos);
        w.pointer.borrow_mut().press(pos, target);
        let _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    listen(&w.canvas.clone(), "pointerup", move |ev| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let target = pick_at(&w, pos);
        let clicked = w.pointer.borrow_mut().release(pos, target);
        if let Some(id) = clicked {
            activate(&w, id);
        }
        ev.prevent_default();
    });
}

fn wire_pointercancel(w: &InputWiring) {
    let w = w.clone();
    listen(&w.canvas.clone(), "pointercancel", move |_ev| {
        w.pointer.borrow_mut().cancel();
    });
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    listen(&w.canvas.clone(), "pointerleave", move |_ev| {
        if !w.pointer.borrow().down {
            set_hover(&w, None);
        }
    });
}

fn wire_sorry_button(w: &InputWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_click_listener(&document, SORRY_BUTTON_ID, move || {
        let task = w
            .controller
            .borrow_mut()
            .on_big_button_activate(w.clock.now());
        after_activation(&w, Activation::BigButton, task);
    });
}

fn activate(w: &InputWiring, id: ObjectId) {
    let now = w.clock.now();
    let result = {
        let mut controller = w.controller.borrow_mut();
        let mut views = w.views.borrow_mut();
        activate_object(&mut controller, &mut views, &w.catalogue, id, now)
    };
    match result {
        Ok((activation, task)) => after_activation(w, activation, task),
        Err(e) => log::warn!("[click] ignored: {}", e),
    }
}

fn after_activation(w: &InputWiring, activation: Activation, task: ScheduledTask) {
    let count = w.controller.borrow().sorry_count();
    log::info!("[click] {} -> sorries={}", activation.label(), count);
    overlay::set_counter(&w.document, count);
    overlay::set_message_visible(&w.document, true);
    schedule_dismissal(w, task);
}

/// Back the frame-driven dismissal with a browser timer, so the panel still
/// hides while animation frames are paused (background tabs).
fn schedule_dismissal(w: &InputWiring, task: ScheduledTask) {
    arm_dismissal_timer(w.controller.clone(), w.document.clone(), w.clock, task);
}

fn arm_dismissal_timer(
    controller: Rc<RefCell<SceneController>>,
    document: web::Document,
    clock: SessionClock,
    task: ScheduledTask,
) {
    let Some(window) = web::window() else {
        return;
    };
    let delay = task.deadline.saturating_sub(clock.now());
    // Round up so the timer never lands before the deadline
    let delay_ms = delay.as_micros().div_ceil(1000).min(i32::MAX as u128) as i32;
    let cb = Closure::once_into_js(move || {
        let now = clock.now();
        let dismissed = controller.borrow_mut().expire(task.generation, now);
        if let Some(d) = dismissed {
            log::info!("[scene] message hidden by timer (gen {})", d.generation.0);
            overlay::set_message_visible(&document, false);
            return;
        }
        // Coarsened timers can fire early; wait out the rest if still current
        let still_pending = controller.borrow().pending_dismissal() == Some(task);
        if still_pending {
            arm_dismissal_timer(controller, document, clock, task);
        }
    });
    let callback = cb.unchecked_ref::<js_sys::Function>();
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay_ms) {
        log::warn!("[scene] setTimeout failed: {:?}", e);
    }
}
