// Smoothed interaction scalars driven by UI events.
//
// The render loop is the only writer of [`InteractionController`]; event
// handlers only flip the [`InteractionSignal`] the loop reads each frame.

use super::constants::*;
use glam::Vec2;

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Colour phase oscillating slowly in \[0, 1\].
#[inline]
pub fn color_phase(time: f32) -> f32 {
    ((time * COLOR_PHASE_SPEED).sin() + 1.0) * 0.5
}

/// Map a point inside a `width` x `height` box to NDC, y up.
/// A degenerate box maps to the centre.
pub fn to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(x / width * 2.0 - 1.0, -(y / height * 2.0 - 1.0))
        .clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
}

/// "Engaged" for a fixed hold window after each trigger.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionSignal {
    engaged_until: Option<f64>,
}

impl InteractionSignal {
    pub fn trigger(&mut self, now_sec: f64) {
        self.engaged_until = Some(now_sec + ENGAGED_HOLD_SEC);
    }

    pub fn is_engaged(&self, now_sec: f64) -> bool {
        self.engaged_until.is_some_and(|t| now_sec < t)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionController {
    pub interaction_strength: f32,
    pub pulse_strength: f32,
    /// Euler angles (x, y) applied to the whole assembly.
    pub rotation: Vec2,
    /// Pointer in normalized device coordinates, both axes in \[-1, 1\].
    pub pointer_ndc: Vec2,
}

impl InteractionController {
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer_ndc = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    pub fn target_rotation(&self) -> Vec2 {
        Vec2::new(
            -self.pointer_ndc.y * ROTATION_RANGE,
            self.pointer_ndc.x * ROTATION_RANGE,
        )
    }

    /// Advance one frame toward the engaged/idle targets.
    pub fn update(&mut self, engaged: bool) {
        let target = if engaged { 1.0 } else { 0.0 };
        self.interaction_strength = lerp(self.interaction_strength, target, INTERACTION_LERP);
        self.pulse_strength = lerp(self.pulse_strength, target, PULSE_LERP);
        self.rotation = self.rotation.lerp(self.target_rotation(), ROTATION_LERP);
    }
}
