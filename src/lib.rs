#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::constants::{QUESTIONS_PER_ABILITY, QUESTION_COUNT};
use crate::core::{Ability, FieldConfig, InteractionController, InteractionSignal, ParticleScene};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod api;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod results;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Question text from `<script id="questions" type="application/json">`,
/// falling back to placeholder labels when it is missing or the wrong length.
fn load_questions(document: &web::Document) -> Vec<String> {
    let parsed = document
        .get_element_by_id(QUESTIONS_ID)
        .and_then(|el| el.text_content())
        .map(|json| serde_json::from_str::<Vec<String>>(&json));
    match parsed {
        Some(Ok(list)) if list.len() == QUESTION_COUNT => return list,
        Some(Ok(list)) => log::warn!(
            "[quiz] expected {} questions, found {}; using placeholders",
            QUESTION_COUNT,
            list.len()
        ),
        Some(Err(e)) => log::warn!("[quiz] bad questions JSON: {}", e),
        None => log::warn!("[quiz] no #{} element; using placeholders", QUESTIONS_ID),
    }
    Ability::ALL
        .into_iter()
        .flat_map(|a| (1..=QUESTIONS_PER_ABILITY).map(move |n| format!("{} #{}", a.key(), n)))
        .collect()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("machine-butcher starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let api_base = canvas
        .get_attribute("data-api-base")
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    log::info!("[api] base {}", api_base);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let signal = Rc::new(RefCell::new(InteractionSignal::default()));
    let pointer = Rc::new(RefCell::new(Vec2::ZERO));

    let app = Rc::new(RefCell::new(events::QuizApp::new(
        document.clone(),
        load_questions(&document),
        StdRng::from_entropy(),
    )));
    events::wire_all(&app, &api::ApiClient::new(api_base), &signal, &pointer);
    ui::show_quiz(&document, true);
    app.borrow().render();

    // The quiz stays usable without WebGPU; only the background is lost.
    let gpu = frame::init_gpu(&canvas).await;
    let scene = ParticleScene::new(FieldConfig::default(), StdRng::from_entropy());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        controller: InteractionController::default(),
        signal,
        pointer,
        canvas,
        gpu,
        sim_time: 0.0,
    }));
    let handle = frame::start_loop(frame_ctx);

    let handle_unload = handle.clone();
    let unload = Closure::wrap(Box::new(move || handle_unload.stop()) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", unload.as_ref().unchecked_ref());
    unload.forget();
    log::info!("[frame] loop running: {}", handle.is_running());
    Ok(())
}
