#![cfg(target_arch = "wasm32")]
use apology_core::float::random_phases;
use apology_core::sorry_text::SorryTextLayer;
use apology_core::view::ViewStates;
use apology_core::{OrbitCamera, SceneCatalogue, SceneController};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod overlay;
mod placement;
mod render;

use constants::CANVAS_ID;

// Keep the canvas backing store at CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("apology-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::report_loading_failure(&document, "Something went wrong loading the scene.");
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let mut rng = StdRng::from_entropy();
    overlay::spawn_floating_hearts(&document, &mut rng)?;

    let labels = match labels::LabelLayer::new(&document) {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("[labels] disabled: {:?}", e);
            None
        }
    };

    // Without WebGPU only the 3D objects are missing; the button and counter still work
    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_some() {
        overlay::hide_loading(&document);
    } else {
        overlay::report_loading_failure(
            &document,
            "This browser cannot show the 3D scene (WebGPU unavailable).",
        );
    }

    let catalogue = Rc::new(SceneCatalogue::standard());
    let phases = random_phases(&mut rng, catalogue.len());
    let controller = Rc::new(RefCell::new(SceneController::new()));
    let views = Rc::new(RefCell::new(ViewStates::new()));
    let orbit = Rc::new(RefCell::new(OrbitCamera::default()));
    let poses = Rc::new(RefCell::new(Vec::with_capacity(catalogue.len())));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let clock = frame::SessionClock::start();
    log::info!("[scene] {} objects", catalogue.len());

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        clock,
        catalogue: catalogue.clone(),
        controller: controller.clone(),
        views: views.clone(),
        orbit: orbit.clone(),
        poses: poses.clone(),
        pointer,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        clock,
        catalogue,
        controller,
        views,
        orbit,
        poses,
        canvas,
        document,
        gpu,
        labels,
        phases,
        sorry_texts: SorryTextLayer::new(),
        rng,
        instances: Vec::new(),
        last_frame: None,
        shown_count: None,
        shown_message: None,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
