// Particle field, connectivity and uniforms bundled behind a backend seam.
//
// The scene owns every per-frame buffer. A [`RenderBackend`] only sees
// borrowed slices, so the simulation can run and be inspected without a GPU.

use super::connectivity::{ConnectivityGraph, ConnectivityParams};
use super::constants::POINT_COUNT;
use super::interaction::{color_phase, InteractionController};
use super::particles::{MotionParams, ParticleField, SpawnParams};
use glam::Vec2;
use rand::Rng;

/// Per-point vertex data uploaded as an instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub lifetime: f32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SceneUniforms {
    pub time: f32,
    pub interaction: f32,
    pub pulse: f32,
    pub color_phase: f32,
    pub rotation: Vec2,
}

pub struct FrameGeometry<'a> {
    pub particles: &'a [ParticleInstance],
    pub line_vertices: &'a [[f32; 3]],
    pub face_vertices: &'a [[f32; 3]],
}

pub trait RenderBackend {
    type Error;

    fn upload_buffers(&mut self, geometry: &FrameGeometry<'_>);
    fn set_uniforms(&mut self, uniforms: &SceneUniforms);
    fn render(&mut self) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    pub count: usize,
    pub spawn: SpawnParams,
    pub respawn: SpawnParams,
    pub motion: MotionParams,
    pub connectivity: ConnectivityParams,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: POINT_COUNT,
            spawn: SpawnParams::initial(),
            respawn: SpawnParams::respawn(),
            motion: MotionParams::default(),
            connectivity: ConnectivityParams::default(),
        }
    }
}

pub struct ParticleScene<R: Rng> {
    pub config: FieldConfig,
    pub field: ParticleField,
    pub graph: ConnectivityGraph,
    instances: Vec<ParticleInstance>,
    uniforms: SceneUniforms,
    rng: R,
}

impl<R: Rng> ParticleScene<R> {
    pub fn new(config: FieldConfig, mut rng: R) -> Self {
        let field = ParticleField::generate(config.count, &config.spawn, &mut rng);
        let mut scene = Self {
            graph: ConnectivityGraph::with_capacity(config.count),
            instances: Vec::with_capacity(config.count),
            uniforms: SceneUniforms::default(),
            config,
            field,
            rng,
        };
        scene.rebuild_geometry();
        scene
    }

    pub fn uniforms(&self) -> &SceneUniforms {
        &self.uniforms
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    /// Advance the field one fixed step and rebuild every derived buffer.
    pub fn tick(&mut self, time: f32, controller: &InteractionController) -> usize {
        let respawned = self.field.advance(
            time,
            controller.interaction_strength,
            controller.pulse_strength,
            &self.config.motion,
            &self.config.respawn,
            &mut self.rng,
        );
        self.rebuild_geometry();
        self.uniforms = SceneUniforms {
            time,
            interaction: controller.interaction_strength,
            pulse: self.config.motion.pulse(time, controller.pulse_strength),
            color_phase: color_phase(time),
            rotation: controller.rotation,
        };
        respawned
    }

    fn rebuild_geometry(&mut self) {
        self.graph
            .rebuild(&self.field.positions, &self.config.connectivity);
        self.instances.clear();
        self.instances.extend(
            self.field
                .positions
                .iter()
                .zip(&self.field.sizes)
                .zip(&self.field.lifetimes)
                .map(|((p, s), l)| ParticleInstance {
                    position: p.to_array(),
                    size: *s,
                    lifetime: *l,
                }),
        );
    }

    pub fn geometry(&self) -> FrameGeometry<'_> {
        FrameGeometry {
            particles: &self.instances,
            line_vertices: &self.graph.line_vertices,
            face_vertices: &self.graph.face_vertices,
        }
    }

    pub fn submit<B: RenderBackend>(&self, backend: &mut B) -> Result<(), B::Error> {
        backend.upload_buffers(&self.geometry());
        backend.set_uniforms(&self.uniforms);
        backend.render()
    }
}
