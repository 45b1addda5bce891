use crate::constants::*;
use crate::core::{Assessment, PartGroup};
use crate::dom;
use std::fmt::Write as _;
use web_sys as web;

fn results_html(user_name: &str, a: &Assessment) -> String {
    let mut html = String::new();
    _ = write!(
        html,
        "<h2>Test results for {}</h2>",
        dom::escape_html(user_name)
    );

    html.push_str("<section class=\"ability-scores\"><h3>Ability scores</h3><ul>");
    for (ability, score) in a.scores.sorted_desc() {
        _ = write!(
            html,
            "<li><span class=\"name\">{}</span>: <span class=\"score\">{:.2}</span></li>",
            ability.key(),
            score
        );
    }
    html.push_str("</ul></section>");

    html.push_str("<section class=\"category-scores\"><h3>Ability categories</h3><ul>");
    for (category, score) in a.categories.iter() {
        _ = write!(
            html,
            "<li><span class=\"name\">{}</span>: <span class=\"score\">{:.2}</span></li>",
            category.label(),
            score
        );
    }
    html.push_str("</ul></section>");

    html.push_str("<section class=\"parts\"><h3>Implant parts</h3>");
    if a.parts.is_empty() {
        html.push_str("<p>No parts unlocked.</p>");
    }
    for group in PartGroup::ALL {
        let parts = a.parts.get(group);
        if parts.is_empty() {
            continue;
        }
        _ = write!(html, "<h4>{}</h4><ul>", group.label());
        for part in parts {
            _ = write!(html, "<li>{}</li>", dom::escape_html(part));
        }
        html.push_str("</ul>");
    }
    html.push_str("</section>");

    if !a.significant.is_empty() {
        html.push_str("<section class=\"significant\"><h3>Standout abilities</h3><ul>");
        for (ability, text) in &a.significant {
            _ = write!(html, "<li><b>{}</b>: {}</li>", ability.key(), text);
        }
        html.push_str("</ul></section>");
    }

    html.push_str("<section class=\"interpretation\"><h3>Interpretation</h3>");
    for para in a.description.split("\n\n") {
        _ = write!(
            html,
            "<p>{}</p>",
            dom::escape_html(para).replace('\n', "<br>")
        );
    }
    html.push_str("</section>");
    html
}

pub fn render_results(document: &web::Document, user_name: &str, assessment: &Assessment) {
    dom::set_html(document, RESULTS_ID, &results_html(user_name, assessment));
    clear_image(document);
}

/// Image area states: generating, failed, or showing a finished image.
pub enum ImageStatus<'a> {
    Generating,
    Failed(&'a str),
    Ready(&'a str),
}

pub fn set_image_status(document: &web::Document, status: ImageStatus<'_>) {
    match status {
        ImageStatus::Generating => {
            dom::set_text(document, IMAGE_STATUS_ID, "Generating AI image...");
            dom::set_visible(document, IMAGE_STATUS_ID, true);
            dom::set_disabled(document, GENERATE_ID, true);
        }
        ImageStatus::Failed(message) => {
            dom::set_text(document, IMAGE_STATUS_ID, message);
            dom::set_visible(document, IMAGE_STATUS_ID, true);
            dom::set_disabled(document, GENERATE_ID, false);
        }
        ImageStatus::Ready(url) => {
            if let Some(img) = document.get_element_by_id(IMAGE_ID) {
                _ = img.set_attribute("src", url);
                _ = img.set_attribute("style", "");
            }
            dom::set_visible(document, IMAGE_STATUS_ID, false);
            dom::set_disabled(document, GENERATE_ID, false);
        }
    }
}

fn clear_image(document: &web::Document) {
    if let Some(img) = document.get_element_by_id(IMAGE_ID) {
        _ = img.remove_attribute("src");
        _ = img.set_attribute("style", "display:none");
    }
    dom::set_visible(document, IMAGE_STATUS_ID, false);
}
