use crate::input;
use crate::labels::LabelLayer;
use crate::overlay;
use crate::render;
use apology_core::instances::{build_instances, sort_for_blending, InstanceRaw};
use apology_core::layout::{object_poses, ObjectPose};
use apology_core::sorry_text::SorryTextLayer;
use apology_core::view::ViewStates;
use apology_core::{InteractionState, ObjectKind, OrbitCamera, SceneCatalogue, SceneController};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic session clock: time elapsed since the scene started.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    start: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

pub struct FrameContext {
    pub clock: SessionClock,
    pub catalogue: Rc<SceneCatalogue>,
    pub controller: Rc<RefCell<SceneController>>,
    pub views: Rc<RefCell<ViewStates>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub poses: Rc<RefCell<Vec<ObjectPose>>>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,

    pub gpu: Option<render::GpuState>,
    pub labels: Option<LabelLayer>,

    pub phases: Vec<f32>,
    pub sorry_texts: SorryTextLayer,
    pub rng: StdRng,
    pub instances: Vec<InstanceRaw>,

    pub last_frame: Option<Duration>,

    // Last state pushed to the DOM
    pub shown_count: Option<u32>,
    pub shown_message: Option<bool>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now();

        if let Some(d) = self.controller.borrow_mut().advance(now) {
            log::info!("[scene] message hidden (gen {})", d.generation.0);
        }
        self.views.borrow_mut().expire(now);
        let state = self.controller.borrow().state();
        self.sync_overlays(state);

        let dt = self.last_frame.map_or(Duration::ZERO, |t| now.saturating_sub(t));
        self.last_frame = Some(now);
        self.orbit.borrow_mut().update(dt.as_secs_f32());

        let w = self.canvas.width();
        let h = self.canvas.height();
        let camera = self.orbit.borrow().camera(w.max(1) as f32 / h.max(1) as f32);

        let title_world = {
            let views = self.views.borrow();
            let mut poses = self.poses.borrow_mut();
            object_poses(&self.catalogue, &self.phases, &views, now, &mut poses);

            if let Some(g) = &mut self.gpu {
                build_instances(&poses, &views, now, &mut self.instances);
                sort_for_blending(&mut self.instances, camera.eye);
                g.resize_if_needed(w, h);
                match g.render(&camera, &self.instances) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("[gpu] surface lost; reconfiguring");
                        g.reconfigure();
                    }
                    Err(e) => log::error!("render error: {:?}", e),
                }
            }

            poses
                .iter()
                .find(|p| p.kind == ObjectKind::TitleText)
                .map(|p| p.center())
        };

        if let Some(labels) = &mut self.labels {
            labels.update(
                &camera,
                input::canvas_css_size(&self.canvas),
                title_world,
                &self.sorry_texts,
                now.as_secs_f32(),
            );
        }
    }

    fn sync_overlays(&mut self, state: InteractionState) {
        if self.shown_count != Some(state.sorry_count) {
            self.shown_count = Some(state.sorry_count);
            overlay::set_counter(&self.document, state.sorry_count);
            self.sorry_texts.sync(state.sorry_count, &mut self.rng);
        }
        if self.shown_message != Some(state.message_visible) {
            self.shown_message = Some(state.message_visible);
            overlay::set_message_visible(&self.document, state.message_visible);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
