// Host-side tests for the quiz session and the relay payloads.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scoring {
    include!("../src/core/scoring.rs");
}
mod categories {
    include!("../src/core/categories.rs");
}
mod quiz {
    include!("../src/core/quiz.rs");
}
mod payload {
    include!("../src/core/payload.rs");
}

use categories::*;
use constants::*;
use payload::*;
use quiz::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn new_session_starts_on_first_page() {
    let s = QuizSession::new(QUESTION_COUNT);
    assert_eq!(s.page(), 0);
    assert_eq!(s.page_count(), 14);
    assert_eq!(s.page_range(), 0..5);
    assert_eq!(s.answered(), 0);
    assert_eq!(s.progress_percent(), 0.0);
}

#[test]
fn milestone_every_fifth_answer() {
    let mut s = QuizSession::new(QUESTION_COUNT);
    for i in 0..4 {
        assert!(!s.answer(i, 3).unwrap().milestone);
    }
    let outcome = s.answer(4, 5).unwrap();
    assert_eq!(outcome.answered, 5);
    assert!(outcome.milestone);
    // changing an answer does not grow the count
    assert_eq!(s.answer(4, 1).unwrap().answered, 5);
    assert_eq!(s.answer_at(4), Some(1));
}

#[test]
fn invalid_answers_are_refused() {
    let mut s = QuizSession::new(10);
    assert_eq!(s.answer(0, 0), Err(QuizError::InvalidAnswer { value: 0 }));
    assert_eq!(s.answer(0, 6), Err(QuizError::InvalidAnswer { value: 6 }));
    assert_eq!(
        s.answer(10, 3),
        Err(QuizError::NoSuchQuestion {
            index: 10,
            count: 10
        })
    );
    assert_eq!(s.answered(), 0);
}

#[test]
fn paging_stops_at_both_ends() {
    let mut s = QuizSession::new(12);
    assert_eq!(s.page_count(), 3);
    assert!(!s.prev_page());
    assert!(s.next_page());
    assert!(s.next_page());
    assert!(s.is_last_page());
    assert_eq!(s.page_range(), 10..12);
    assert!(!s.next_page());
    assert!(s.prev_page());
    assert_eq!(s.page(), 1);
}

#[test]
fn complete_requires_every_answer() {
    let mut s = QuizSession::new(QUESTION_COUNT);
    s.answer(0, 4).unwrap();
    assert_eq!(
        s.complete(),
        Err(QuizError::Incomplete {
            missing: QUESTION_COUNT - 1
        })
    );
    s.fill_random(&mut StdRng::seed_from_u64(1));
    let answers = s.complete().unwrap();
    assert_eq!(answers.len(), QUESTION_COUNT);
    assert!(answers.iter().all(|v| (LIKERT_MIN..=LIKERT_MAX).contains(v)));
    assert_eq!(s.progress_percent(), 100.0);
}

#[test]
fn reset_clears_answers_and_page() {
    let mut s = QuizSession::new(QUESTION_COUNT);
    s.fill_random(&mut StdRng::seed_from_u64(2));
    s.next_page();
    s.reset();
    assert_eq!(s.answered(), 0);
    assert_eq!(s.page(), 0);
}

#[test]
fn encouragement_and_names_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        assert!(ENCOURAGEMENTS.contains(&encouragement(&mut rng)));
        let name = random_user_name(&mut rng);
        assert_eq!(name.len(), 3);
        assert!(name
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}

#[test]
fn image_request_uses_camel_case() {
    let req = GenerateImageRequest {
        prompt: "chrome".into(),
    };
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"prompt":"chrome"}"#);
    let resp: GenerateImageResponse =
        serde_json::from_str(r#"{"imageUrl":"https://img/1.png"}"#).unwrap();
    assert_eq!(resp.image_url, "https://img/1.png");
}

#[test]
fn save_result_row_carries_category_scores() {
    let mut scores = scoring::AbilityScores::default();
    scores.set(scoring::Ability::Perception, 80.0);
    scores.set(scoring::Ability::TimePerception, 60.0);
    let cats = calculate_category_scores(&scores);
    let row = SaveResultRequest::new("ABC", "desc", "https://img", &cats);
    let v: serde_json::Value = serde_json::to_value(&row).unwrap();
    assert_eq!(v["userName"], "ABC");
    assert_eq!(v["resultDescription"], "desc");
    assert_eq!(v["imageUrl"], "https://img");
    assert_eq!(v["perceptionScore"], 70.0);
    assert_eq!(v["extrasensoryScore"], 0.0);
    assert_eq!(v.as_object().unwrap().len(), 8);
}

#[test]
fn status_errors_prefer_the_server_body() {
    let e = ApiError::from_status(500, r#"{"error":"Failed","details":"quota"}"#);
    assert_eq!(e.to_string(), "HTTP error! status: 500: Failed (quota)");
    let e = ApiError::from_status(502, r#"{"error":"Bad gateway"}"#);
    assert_eq!(e.to_string(), "HTTP error! status: 502: Bad gateway");
    let e = ApiError::from_status(404, "  not found \n");
    assert!(matches!(e, ApiError::Status { status: 404, ref message } if message == "not found"));
}

#[test]
fn guard_refuses_overlapping_requests() {
    let mut guard = ImageRequestGuard::default();
    assert!(guard.try_begin().is_ok());
    assert!(guard.in_flight());
    assert!(matches!(guard.try_begin(), Err(ApiError::Busy)));
    guard.finish();
    assert!(!guard.in_flight());
    assert!(guard.try_begin().is_ok());
}
