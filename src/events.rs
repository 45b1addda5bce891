use crate::api::ApiClient;
use crate::constants::*;
use crate::core::{
    encouragement, random_user_name, Assessment, ImageRequestGuard, InteractionSignal, QuizError,
    QuizSession, SaveResultRequest,
};
use crate::results::{self, ImageStatus};
use crate::{dom, input, ui};
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Questionnaire and result-screen state shared by every DOM handler.
pub struct QuizApp {
    pub document: web::Document,
    pub questions: Rc<Vec<String>>,
    pub session: QuizSession,
    pub assessment: Option<Assessment>,
    pub user_name: String,
    pub guard: ImageRequestGuard,
    pub rng: StdRng,
    /// Bumped on restart so late image responses for an old run are dropped.
    pub run: u64,
    message_timer: Option<i32>,
}

impl QuizApp {
    pub fn new(document: web::Document, questions: Vec<String>, rng: StdRng) -> Self {
        let session = QuizSession::new(questions.len());
        Self {
            document,
            questions: Rc::new(questions),
            session,
            assessment: None,
            user_name: String::new(),
            guard: ImageRequestGuard::default(),
            rng,
            run: 0,
            message_timer: None,
        }
    }

    pub fn render(&self) {
        ui::render_quiz(&self.document, &self.questions, &self.session);
    }

    fn show_message(&mut self, text: &str) {
        dom::set_text(&self.document, MESSAGE_ID, text);
        dom::set_visible(&self.document, MESSAGE_ID, true);
        let Some(window) = web::window() else {
            return;
        };
        if let Some(handle) = self.message_timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        let doc = self.document.clone();
        let hide = Closure::once_into_js(move || dom::set_visible(&doc, MESSAGE_ID, false));
        self.message_timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.unchecked_ref(),
                MESSAGE_HOLD_MS,
            )
            .ok();
    }

    fn complete(&mut self) -> Result<(), QuizError> {
        let answers = self.session.complete()?;
        let assessment = match Assessment::evaluate(&answers) {
            Ok(a) => a,
            Err(e) => {
                log::error!("[quiz] scoring failed: {}", e);
                return Ok(());
            }
        };
        let typed = dom::input_value(&self.document, NAME_INPUT_ID);
        self.user_name = match typed.trim() {
            "" => random_user_name(&mut self.rng),
            name => name.to_string(),
        };
        log::info!(
            "[quiz] completed by {} ({} parts groups unlocked)",
            self.user_name,
            crate::core::PartGroup::ALL
                .into_iter()
                .filter(|g| !assessment.parts.get(*g).is_empty())
                .count()
        );
        results::render_results(&self.document, &self.user_name, &assessment);
        ui::show_quiz(&self.document, false);
        self.assessment = Some(assessment);
        Ok(())
    }

    fn restart(&mut self) {
        self.session.reset();
        self.assessment = None;
        self.run += 1;
        self.guard.finish();
        ui::show_quiz(&self.document, true);
        self.render();
        log::info!("[quiz] restarted");
    }
}

fn scroll_to_top() {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Answer buttons carry `data-question` and `data-value`.
fn answer_target(ev: &web::Event) -> Option<(usize, u8)> {
    let el = ev
        .target()?
        .dyn_into::<web::Element>()
        .ok()?
        .closest("[data-question]")
        .ok()??;
    let question = el.get_attribute("data-question")?.parse().ok()?;
    let value = el.get_attribute("data-value")?.parse().ok()?;
    Some((question, value))
}

fn wire_answers(app: &Rc<RefCell<QuizApp>>, signal: &Rc<RefCell<InteractionSignal>>) {
    let document = app.borrow().document.clone();
    let Some(quiz) = document.get_element_by_id(QUIZ_ID) else {
        log::warn!("[dom] missing #{}", QUIZ_ID);
        return;
    };
    let app = app.clone();
    let signal = signal.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some((question, value)) = answer_target(&ev) else {
            return;
        };
        let mut a = app.borrow_mut();
        match a.session.answer(question, value) {
            Ok(outcome) => {
                signal.borrow_mut().trigger(input::now_sec());
                if outcome.milestone {
                    let text = encouragement(&mut a.rng);
                    a.show_message(text);
                }
                a.render();
            }
            Err(e) => log::warn!("[quiz] {}", e),
        }
    }) as Box<dyn FnMut(_)>);
    _ = quiz.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_navigation(app: &Rc<RefCell<QuizApp>>) {
    let document = app.borrow().document.clone();

    let app_prev = app.clone();
    dom::add_click_listener(&document, PREV_ID, move || {
        let mut a = app_prev.borrow_mut();
        if a.session.prev_page() {
            a.render();
            scroll_to_top();
        }
    });

    let app_next = app.clone();
    dom::add_click_listener(&document, NEXT_ID, move || {
        let mut a = app_next.borrow_mut();
        if a.session.next_page() {
            a.render();
            scroll_to_top();
        }
    });

    let app_dev = app.clone();
    dom::add_click_listener(&document, DEV_ID, move || {
        let a = &mut *app_dev.borrow_mut();
        a.session.fill_random(&mut a.rng);
        let name = random_user_name(&mut a.rng);
        dom::set_input_value(&a.document, NAME_INPUT_ID, &name);
        while a.session.next_page() {}
        a.render();
        log::info!("[quiz] dev fill as {}", name);
    });
}

fn wire_results(app: &Rc<RefCell<QuizApp>>, client: &ApiClient) {
    let document = app.borrow().document.clone();

    let app_complete = app.clone();
    let client_complete = client.clone();
    dom::add_click_listener(&document, COMPLETE_ID, move || {
        let result = app_complete.borrow_mut().complete();
        match result {
            Ok(()) => {
                scroll_to_top();
                request_image(&app_complete, &client_complete);
            }
            Err(e) => app_complete.borrow_mut().show_message(&e.to_string()),
        }
    });

    let app_generate = app.clone();
    let client_generate = client.clone();
    dom::add_click_listener(&document, GENERATE_ID, move || {
        request_image(&app_generate, &client_generate);
    });

    let app_restart = app.clone();
    dom::add_click_listener(&document, RESTART_ID, move || {
        app_restart.borrow_mut().restart();
        scroll_to_top();
    });
}

/// Generate the implant image for the current result, then save the row.
fn request_image(app: &Rc<RefCell<QuizApp>>, client: &ApiClient) {
    let (prompt, row, run) = {
        let a = &mut *app.borrow_mut();
        let Some(assessment) = a.assessment.as_ref() else {
            return;
        };
        if let Err(e) = a.guard.try_begin() {
            log::warn!("[api] {}", e);
            return;
        }
        let row = SaveResultRequest::new(
            a.user_name.clone(),
            assessment.description.clone(),
            String::new(),
            &assessment.categories,
        );
        (assessment.prompt.clone(), row, a.run)
    };
    results::set_image_status(&app.borrow().document, ImageStatus::Generating);
    log::info!("[api] generating image");

    let app = app.clone();
    let client = client.clone();
    spawn_local(async move {
        let result = client.generate_image(&prompt).await;
        let document = {
            let mut a = app.borrow_mut();
            if a.run != run {
                log::info!("[api] dropping image for a previous run");
                return;
            }
            a.guard.finish();
            a.document.clone()
        };
        match result {
            Ok(url) => {
                results::set_image_status(&document, ImageStatus::Ready(&url));
                let row = SaveResultRequest {
                    image_url: url,
                    ..row
                };
                if let Err(e) = client.save_result(&row).await {
                    log::error!("[api] save-result failed: {}", e);
                }
            }
            Err(e) => {
                log::error!("[api] generate-image failed: {}", e);
                results::set_image_status(&document, ImageStatus::Failed(&e.to_string()));
            }
        }
    });
}

fn wire_pointer(pointer: &Rc<RefCell<Vec2>>) {
    let Some(window) = web::window() else {
        return;
    };
    let pointer = pointer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        *pointer.borrow_mut() = input::pointer_ndc(&ev);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_all(
    app: &Rc<RefCell<QuizApp>>,
    client: &ApiClient,
    signal: &Rc<RefCell<InteractionSignal>>,
    pointer: &Rc<RefCell<Vec2>>,
) {
    wire_answers(app, signal);
    wire_navigation(app);
    wire_results(app, client);
    wire_pointer(pointer);
}
