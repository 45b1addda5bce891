use crate::core::constants::FIXED_STEP_SEC;
use crate::core::{InteractionController, InteractionSignal, ParticleScene};
use crate::input;
use crate::render;
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: ParticleScene<StdRng>,
    pub controller: InteractionController,
    pub signal: Rc<RefCell<InteractionSignal>>,
    pub pointer: Rc<RefCell<Vec2>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub sim_time: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let engaged = self.signal.borrow().is_engaged(input::now_sec());
        self.controller.set_pointer(*self.pointer.borrow());
        self.controller.update(engaged);

        // fixed step regardless of display rate
        self.sim_time += FIXED_STEP_SEC;
        let respawned = self.scene.tick(self.sim_time, &self.controller);
        if respawned > 0 {
            log::trace!("[field] respawned {}", respawned);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = self.scene.submit(g) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Stops the animation loop; the pending frame callback is dropped on its
/// next run.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            // breaks the closure's self-reference so it can be freed
            drop(tick_clone.borrow_mut().take());
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    LoopHandle { running }
}
