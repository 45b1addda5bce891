// Fixed-size point cloud on a sphere shell with per-particle lifetimes.
//
// Slots are allocated once; a particle whose lifetime runs out is redrawn
// in place from the respawn distribution, so buffer indices stay stable
// while their contents change.

use super::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Distribution a particle is drawn from.
#[derive(Clone, Copy, Debug)]
pub struct SpawnParams {
    pub radius: f32,
    /// Full width of the radius band, centred on `radius`.
    pub radius_jitter: f32,
    pub size_min: f32,
    pub size_span: f32,
    pub max_lifetime: f32,
}

impl SpawnParams {
    pub fn initial() -> Self {
        Self {
            radius: SPAWN_RADIUS,
            radius_jitter: SPAWN_RADIUS_JITTER,
            size_min: SPAWN_SIZE_MIN,
            size_span: SPAWN_SIZE_SPAN,
            max_lifetime: MAX_LIFETIME_SEC,
        }
    }

    /// Respawns land on a wider shell with larger points.
    pub fn respawn() -> Self {
        Self {
            radius: RESPAWN_RADIUS,
            radius_jitter: RESPAWN_RADIUS_JITTER,
            size_min: RESPAWN_SIZE_MIN,
            size_span: RESPAWN_SIZE_SPAN,
            max_lifetime: MAX_LIFETIME_SEC,
        }
    }

    pub fn radius_band(&self) -> (f32, f32) {
        let half = self.radius_jitter * 0.5;
        (self.radius - half, self.radius + half)
    }

    fn sample_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let theta = rng.gen::<f32>() * TAU;
        // inverse-CDF polar angle keeps the density uniform over the sphere
        let phi = (rng.gen::<f32>() * 2.0 - 1.0).clamp(-1.0, 1.0).acos();
        let r = self.radius + (rng.gen::<f32>() - 0.5) * self.radius_jitter;
        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    fn sample_size<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.size_min + rng.gen::<f32>() * self.size_span
    }
}

/// Per-tick motion tuning.
#[derive(Clone, Copy, Debug)]
pub struct MotionParams {
    pub step_sec: f32,
    pub noise_scale: f32,
    pub noise_amplitude: f32,
    pub pulse_frequency: f32,
    pub pulse_amplitude: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            step_sec: FIXED_STEP_SEC,
            noise_scale: NOISE_SCALE,
            noise_amplitude: NOISE_AMPLITUDE,
            pulse_frequency: PULSE_FREQUENCY,
            pulse_amplitude: PULSE_AMPLITUDE,
        }
    }
}

impl MotionParams {
    #[inline]
    pub fn noise(&self, p: Vec3, time: f32) -> f32 {
        let s = self.noise_scale;
        (p.x * s + time).sin() * (p.y * s + time).cos() * (p.z * s + time).sin()
            * self.noise_amplitude
    }

    #[inline]
    pub fn pulse(&self, time: f32, pulse_strength: f32) -> f32 {
        (time * self.pulse_frequency).sin() * pulse_strength * self.pulse_amplitude
    }
}

pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub sizes: Vec<f32>,
    pub lifetimes: Vec<f32>,
}

impl ParticleField {
    /// Draw `count` particles; initial lifetimes are uniform in \[0, max\].
    pub fn generate<R: Rng + ?Sized>(count: usize, params: &SpawnParams, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut sizes = Vec::with_capacity(count);
        let mut lifetimes = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(params.sample_position(rng));
            sizes.push(params.sample_size(rng));
            lifetimes.push(rng.gen_range(0.0..=params.max_lifetime));
        }
        Self {
            positions,
            sizes,
            lifetimes,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Redraw slot `i`; the new lifetime lies in (0, max].
    pub fn respawn<R: Rng + ?Sized>(&mut self, i: usize, params: &SpawnParams, rng: &mut R) {
        self.positions[i] = params.sample_position(rng);
        self.sizes[i] = params.sample_size(rng);
        self.lifetimes[i] = params.max_lifetime * (1.0 - rng.gen::<f32>());
    }

    /// One fixed step: decay, respawn expired slots, push survivors radially.
    ///
    /// Returns the number of respawned particles.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        time: f32,
        interaction: f32,
        pulse_strength: f32,
        motion: &MotionParams,
        respawn: &SpawnParams,
        rng: &mut R,
    ) -> usize {
        let pulse = motion.pulse(time, pulse_strength);
        let mut respawned = 0;
        for i in 0..self.positions.len() {
            self.lifetimes[i] -= motion.step_sec;
            if self.lifetimes[i] <= 0.0 {
                self.respawn(i, respawn, rng);
                respawned += 1;
                continue;
            }
            let p = self.positions[i];
            let offset = (motion.noise(p, time) + pulse) * interaction;
            self.positions[i] = p + p.normalize_or_zero() * offset;
        }
        respawned
    }
}
