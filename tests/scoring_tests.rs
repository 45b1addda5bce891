// Host-side tests for scoring, categories, parts, interpretation and prompt.
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
mod parts {
    include!("../src/core/parts.rs");
}
mod prompt {
    include!("../src/core/prompt.rs");
}
mod interpret {
    include!("../src/core/interpret.rs");
}

use categories::*;
use constants::*;
use interpret::*;
use parts::*;
use prompt::*;
use scoring::*;

fn uniform(value: u8) -> Vec<u8> {
    vec![value; QUESTION_COUNT]
}

/// Every block answers 3 except `ability`, which answers `value`.
fn with_block(ability: Ability, value: u8) -> Vec<u8> {
    let mut answers = uniform(3);
    let start = ability.index() * QUESTIONS_PER_ABILITY;
    answers[start..start + QUESTIONS_PER_ABILITY].fill(value);
    answers
}

#[test]
fn all_threes_score_exactly_sixty() {
    let scores = calculate_results(&uniform(3)).unwrap();
    for (_, s) in scores.iter() {
        assert_eq!(s, 60.0);
    }
}

#[test]
fn extremes_map_to_twenty_and_hundred() {
    let low = calculate_results(&uniform(1)).unwrap();
    let high = calculate_results(&uniform(5)).unwrap();
    assert!(low.iter().all(|(_, s)| s == 20.0));
    assert!(high.iter().all(|(_, s)| s == 100.0));
}

#[test]
fn block_sum_is_normalized_per_ability() {
    // 5 + 4 + 3 + 2 + 1 = 15 -> 60; second block all 4s -> 80
    let mut answers = uniform(3);
    answers[..5].copy_from_slice(&[5, 4, 3, 2, 1]);
    answers[5..10].fill(4);
    let scores = calculate_results(&answers).unwrap();
    assert_eq!(scores.get(Ability::Perception), 60.0);
    assert_eq!(scores.get(Ability::Intelligence), 80.0);
}

#[test]
fn malformed_answers_are_rejected() {
    assert_eq!(
        calculate_results(&[3; 10]),
        Err(ScoringError::WrongLength {
            expected: QUESTION_COUNT,
            found: 10
        })
    );
    let mut answers = uniform(3);
    answers[17] = 6;
    assert_eq!(
        calculate_results(&answers),
        Err(ScoringError::OutOfRange {
            index: 17,
            value: 6
        })
    );
    answers[17] = 0;
    assert!(calculate_results(&answers).is_err());
}

#[test]
fn sorted_desc_keeps_table_order_on_ties() {
    let scores = calculate_results(&with_block(Ability::Moral, 5)).unwrap();
    let sorted = scores.sorted_desc();
    assert_eq!(sorted[0], (Ability::Moral, 100.0));
    assert_eq!(sorted[1].0, Ability::Perception);
    assert_eq!(sorted[2].0, Ability::Intelligence);
}

#[test]
fn interpret_results_uses_inclusive_seventy() {
    // 4+4+4+3+3 = 18 -> 72, 4+4+3+3+3 = 17 -> 68
    let mut answers = uniform(3);
    answers[..5].copy_from_slice(&[4, 4, 4, 3, 3]);
    answers[5..10].copy_from_slice(&[4, 4, 3, 3, 3]);
    let scores = calculate_results(&answers).unwrap();
    let hits = interpret_results(&scores);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, Ability::Perception);
    assert!(!hits[0].1.is_empty());

    let mut exact = AbilityScores::default();
    exact.set(Ability::Social, 70.0);
    assert_eq!(interpret_results(&exact)[0].0, Ability::Social);
}

#[test]
fn every_category_member_maps_back() {
    for (category, members) in CATEGORY_TABLE {
        for m in members {
            assert_eq!(category_for_ability(*m), Some(category));
        }
    }
    assert_eq!(Category::Extrasensory.members().len(), 4);
    assert_eq!(Category::Perception.members().len(), 2);
}

#[test]
fn category_score_is_unweighted_member_mean() {
    let mut scores = AbilityScores::default();
    scores.set(Ability::Perception, 100.0);
    scores.set(Ability::TimePerception, 40.0);
    scores.set(Ability::Creative, 80.0);
    let cats = calculate_category_scores(&scores);
    assert_eq!(cats.get(Category::Perception), 70.0);
    assert_eq!(cats.get(Category::Extrasensory), 20.0);
    assert_eq!(cats.get(Category::Intellect), 0.0);
}

#[test]
fn sixty_unlocks_no_parts() {
    let scores = calculate_results(&uniform(3)).unwrap();
    let parts = extract_parts(&scores);
    assert!(parts.is_empty());
}

#[test]
fn perfect_scores_unlock_every_tier() {
    let scores = calculate_results(&uniform(5)).unwrap();
    let parts = extract_parts(&scores);
    for group in [
        PartGroup::Perception,
        PartGroup::Intellect,
        PartGroup::Emotion,
        PartGroup::Physical,
    ] {
        assert_eq!(parts.get(group).len(), 4, "{:?}", group);
    }
    assert!(parts.hidden.is_empty());
}

#[test]
fn thresholds_are_strict() {
    let mut scores = AbilityScores::default();
    scores.set(Ability::Perception, 80.0);
    scores.set(Ability::Physical, 80.01);
    let parts = extract_parts(&scores);
    assert_eq!(parts.perception.len(), 2);
    assert_eq!(parts.physical.len(), 3);
}

#[test]
fn interpretation_picks_first_extremes() {
    // all equal: first maximum and first minimum are both Perception
    let scores = calculate_results(&uniform(3)).unwrap();
    let cats = calculate_category_scores(&scores);
    let interp = Interpretation::new(&scores, &cats);
    assert_eq!(interp.top_category, Category::Perception);
    assert_eq!(interp.bottom_category, Category::Perception);
    assert_eq!(interp.top_abilities.len(), TOP_ABILITY_COUNT);

    let scores = calculate_results(&with_block(Ability::Physical, 1)).unwrap();
    let cats = calculate_category_scores(&scores);
    let interp = Interpretation::new(&scores, &cats);
    assert_eq!(interp.bottom_category, Category::Physical);
    let text = interp.render();
    assert!(text.contains(Category::Physical.label()));
    assert!(text.contains("(score: 60.00)"));
}

#[test]
fn prompt_ties_go_to_the_last_entry() {
    let scores = calculate_results(&uniform(3)).unwrap();
    let cats = calculate_category_scores(&scores);
    let p = generate_prompt(&scores, &cats);
    assert!(p.starts_with(BASE_PROMPT));
    // last ability is CulturalSensitivity, last category Extrasensory
    assert!(p.contains("Coral (#E78F81)"));
    assert!(p.contains("LED-embedded material with glowing effects"));
}

#[test]
fn prompt_follows_the_strongest_ability() {
    let scores = calculate_results(&with_block(Ability::Intelligence, 5)).unwrap();
    let cats = calculate_category_scores(&scores);
    let p = generate_prompt(&scores, &cats);
    assert!(p.contains("Royal Blue (#1230AE)"));
    assert!(p.contains("primary material is steel."));
    assert!(!p.contains("glowing"));
}

#[test]
fn assessment_bundles_every_view() {
    let a = Assessment::evaluate(&with_block(Ability::Emotional, 5)).unwrap();
    assert_eq!(a.scores.get(Ability::Emotional), 100.0);
    assert_eq!(a.parts.emotion.len(), 4);
    assert_eq!(a.significant.len(), 1);
    assert!(a.prompt.contains("Soft Pink"));
    assert!(!a.description.is_empty());
    assert!(Assessment::evaluate(&[]).is_err());
}
