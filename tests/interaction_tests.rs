// Host-side tests for interaction smoothing and pointer mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod interaction {
    include!("../src/core/interaction.rs");
}

use constants::*;
use glam::Vec2;
use interaction::*;

const EPS: f32 = 1e-5;

#[test]
fn lerp_moves_fractionally() {
    assert_eq!(lerp(0.0, 1.0, 0.1), 0.1);
    assert_eq!(lerp(2.0, 2.0, 0.5), 2.0);
}

#[test]
fn engaged_update_uses_separate_rates() {
    let mut c = InteractionController::default();
    c.update(true);
    assert!((c.interaction_strength - INTERACTION_LERP).abs() < EPS);
    assert!((c.pulse_strength - PULSE_LERP).abs() < EPS);
    c.update(true);
    // 0.1 + 0.9 * 0.1
    assert!((c.interaction_strength - 0.19).abs() < EPS);
}

#[test]
fn idle_decays_toward_zero() {
    let mut c = InteractionController {
        interaction_strength: 1.0,
        pulse_strength: 1.0,
        ..Default::default()
    };
    for _ in 0..200 {
        c.update(false);
    }
    assert!(c.interaction_strength < 1e-3);
    assert!(c.pulse_strength < 1e-3);
}

#[test]
fn rotation_tracks_pointer() {
    let mut c = InteractionController::default();
    c.set_pointer(Vec2::new(1.0, 1.0));
    let target = c.target_rotation();
    assert!((target.x + ROTATION_RANGE).abs() < EPS);
    assert!((target.y - ROTATION_RANGE).abs() < EPS);
    c.update(false);
    assert!((c.rotation - target * ROTATION_LERP).length() < EPS);
    for _ in 0..300 {
        c.update(false);
    }
    assert!((c.rotation - target).length() < 1e-3);
}

#[test]
fn pointer_is_clamped_to_ndc() {
    let mut c = InteractionController::default();
    c.set_pointer(Vec2::new(3.0, -7.0));
    assert_eq!(c.pointer_ndc, Vec2::new(1.0, -1.0));
}

#[test]
fn signal_holds_for_one_second() {
    let mut s = InteractionSignal::default();
    assert!(!s.is_engaged(0.0));
    s.trigger(10.0);
    assert!(s.is_engaged(10.0));
    assert!(s.is_engaged(10.99));
    assert!(!s.is_engaged(11.0));
    // a retrigger extends the window
    s.trigger(10.5);
    assert!(s.is_engaged(11.2));
}

#[test]
fn color_phase_stays_in_unit_range() {
    assert!((color_phase(0.0) - 0.5).abs() < EPS);
    for i in 0..1000 {
        let p = color_phase(i as f32 * 0.37);
        assert!((0.0..=1.0).contains(&p));
    }
    let peak = std::f32::consts::FRAC_PI_2 / COLOR_PHASE_SPEED;
    assert!((color_phase(peak) - 1.0).abs() < 1e-4);
}

#[test]
fn ndc_maps_corners_with_y_up() {
    assert_eq!(to_ndc(0.0, 0.0, 200.0, 100.0), Vec2::new(-1.0, 1.0));
    assert_eq!(to_ndc(200.0, 100.0, 200.0, 100.0), Vec2::new(1.0, -1.0));
    assert_eq!(to_ndc(100.0, 50.0, 200.0, 100.0), Vec2::ZERO);
    assert_eq!(to_ndc(10.0, 10.0, 0.0, 100.0), Vec2::ZERO);
}
