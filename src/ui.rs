use crate::constants::*;
use crate::core::constants::{LIKERT_MAX, LIKERT_MIN};
use crate::core::QuizSession;
use crate::dom;
use std::fmt::Write as _;
use web_sys as web;

const SCALE_LOW: &str = "Not at all";
const SCALE_HIGH: &str = "Very much";

fn page_html(questions: &[String], session: &QuizSession) -> String {
    let mut html = String::new();
    for i in session.page_range() {
        let text = questions.get(i).map(String::as_str).unwrap_or("");
        _ = write!(
            html,
            "<div class=\"question\"><p class=\"question-text\">{}. {}</p>\
             <div class=\"likert\"><span class=\"likert-label\">{}</span>",
            i + 1,
            dom::escape_html(text),
            SCALE_LOW
        );
        for v in LIKERT_MIN..=LIKERT_MAX {
            let selected = if session.answer_at(i) == Some(v) {
                " selected"
            } else {
                ""
            };
            _ = write!(
                html,
                "<button class=\"likert-option{}\" data-question=\"{}\" data-value=\"{}\" \
                 aria-label=\"{}\"></button>",
                selected, i, v, v
            );
        }
        _ = write!(
            html,
            "<span class=\"likert-label\">{}</span></div></div>",
            SCALE_HIGH
        );
    }
    html
}

/// Redraw the current page, progress bar and navigation buttons.
pub fn render_quiz(document: &web::Document, questions: &[String], session: &QuizSession) {
    dom::set_html(document, QUIZ_ID, &page_html(questions, session));
    let pct = session.progress_percent();
    if let Some(bar) = document.get_element_by_id(PROGRESS_ID) {
        _ = bar.set_attribute("style", &format!("width:{:.1}%", pct));
    }
    dom::set_text(
        document,
        PROGRESS_LABEL_ID,
        &format!("{}% complete", pct.round() as u32),
    );
    dom::set_disabled(document, PREV_ID, session.page() == 0);
    let last = session.is_last_page();
    dom::set_visible(document, NEXT_ID, !last);
    dom::set_visible(document, COMPLETE_ID, last);
}

pub fn show_quiz(document: &web::Document, visible: bool) {
    dom::set_visible(document, QUIZ_SECTION_ID, visible);
    dom::set_visible(document, RESULTS_SECTION_ID, !visible);
}
