// Host-side tests for the particle field, connectivity graph and scene.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod connectivity {
    include!("../src/core/connectivity.rs");
}
mod interaction {
    include!("../src/core/interaction.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use connectivity::*;
use constants::*;
use glam::Vec3;
use interaction::*;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

const EPS: f32 = 1e-4;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn generated_field_respects_spawn_band() {
    let params = SpawnParams::initial();
    let field = ParticleField::generate(POINT_COUNT, &params, &mut rng(1));
    assert_eq!(field.len(), POINT_COUNT);
    let (lo, hi) = params.radius_band();
    assert!((lo - 0.7).abs() < EPS && (hi - 0.9).abs() < EPS);
    for i in 0..field.len() {
        let r = field.positions[i].length();
        assert!(r >= lo - EPS && r <= hi + EPS, "radius {r}");
        assert!(field.sizes[i] >= 0.005 && field.sizes[i] < 0.025 + EPS);
        assert!((0.0..=MAX_LIFETIME_SEC).contains(&field.lifetimes[i]));
    }
}

#[test]
fn generated_field_covers_both_hemispheres() {
    let field = ParticleField::generate(POINT_COUNT, &SpawnParams::initial(), &mut rng(2));
    let up = field.positions.iter().filter(|p| p.z > 0.0).count();
    // uniform on the sphere: roughly half above the equator
    assert!(up > 400 && up < 600, "{up} points above z = 0");
}

#[test]
fn zero_count_field_is_empty() {
    let field = ParticleField::generate(0, &SpawnParams::initial(), &mut rng(3));
    assert!(field.is_empty());
}

#[test]
fn respawn_draws_from_the_wider_band() {
    let respawn = SpawnParams::respawn();
    let mut field = ParticleField::generate(50, &SpawnParams::initial(), &mut rng(4));
    let mut r = rng(5);
    for i in 0..field.len() {
        field.respawn(i, &respawn, &mut r);
        let radius = field.positions[i].length();
        assert!(radius >= 0.85 - EPS && radius <= 1.15 + EPS, "radius {radius}");
        assert!(field.sizes[i] >= 0.02 && field.sizes[i] < 0.07 + EPS);
        assert!(field.lifetimes[i] > 0.0 && field.lifetimes[i] <= MAX_LIFETIME_SEC);
    }
}

#[test]
fn expired_particles_respawn_without_displacement() {
    let mut field = ParticleField::generate(10, &SpawnParams::initial(), &mut rng(6));
    field.lifetimes.fill(0.01);
    let motion = MotionParams::default();
    let n = field.advance(
        1.0,
        1.0,
        1.0,
        &motion,
        &SpawnParams::respawn(),
        &mut rng(7),
    );
    assert_eq!(n, 10);
    for i in 0..field.len() {
        let r = field.positions[i].length();
        assert!(r >= 0.85 - EPS && r <= 1.15 + EPS);
        assert!(field.lifetimes[i] > 0.0);
    }
}

#[test]
fn survivors_decay_by_one_step() {
    let mut field = ParticleField::generate(10, &SpawnParams::initial(), &mut rng(8));
    field.lifetimes.fill(3.0);
    let before = field.positions.clone();
    let n = field.advance(
        0.5,
        0.0,
        0.0,
        &MotionParams::default(),
        &SpawnParams::respawn(),
        &mut rng(9),
    );
    assert_eq!(n, 0);
    assert!(field.lifetimes.iter().all(|l| (l - (3.0 - FIXED_STEP_SEC)).abs() < EPS));
    // zero interaction leaves positions untouched
    assert_eq!(field.positions, before);
}

#[test]
fn displacement_is_radial() {
    let mut field = ParticleField::generate(20, &SpawnParams::initial(), &mut rng(10));
    field.lifetimes.fill(4.0);
    let before = field.positions.clone();
    field.advance(
        2.3,
        1.0,
        1.0,
        &MotionParams::default(),
        &SpawnParams::respawn(),
        &mut rng(11),
    );
    for (a, b) in before.iter().zip(&field.positions) {
        let cross = a.normalize().cross(b.normalize());
        assert!(cross.length() < 1e-3);
    }
}

#[test]
fn pulse_scales_with_strength() {
    let m = MotionParams::default();
    assert_eq!(m.pulse(1.0, 0.0), 0.0);
    let t = std::f32::consts::FRAC_PI_2 / PULSE_FREQUENCY;
    assert!((m.pulse(t, 1.0) - PULSE_AMPLITUDE).abs() < EPS);
    assert!(m.noise(Vec3::new(0.3, 0.2, 0.1), 0.7).abs() <= NOISE_AMPLITUDE);
}

fn degrees(graph: &ConnectivityGraph, n: usize) -> Vec<usize> {
    let mut deg = vec![0; n];
    for &(a, b) in &graph.edges {
        deg[a as usize] += 1;
        deg[b as usize] += 1;
    }
    deg
}

#[test]
fn connectivity_caps_total_degree_and_distance() {
    let field = ParticleField::generate(POINT_COUNT, &SpawnParams::initial(), &mut rng(12));
    let mut graph = ConnectivityGraph::with_capacity(POINT_COUNT);
    graph.rebuild(&field.positions, &ConnectivityParams::default());
    assert!(!graph.edges.is_empty());
    for d in degrees(&graph, POINT_COUNT) {
        assert!(d <= MAX_CONNECTIONS);
    }
    for &(a, b) in &graph.edges {
        assert!(a < b);
        let d = field.positions[a as usize].distance(field.positions[b as usize]);
        assert!(d < CONNECT_DISTANCE);
    }
    assert_eq!(graph.line_vertices.len(), graph.edges.len() * 2);
    assert_eq!(graph.face_vertices.len() % 3, 0);
}

#[test]
fn connectivity_accepts_first_found_in_index_order() {
    // five points within range of each other
    let pts: Vec<Vec3> = (0..5).map(|i| Vec3::new(i as f32 * 0.01, 0.0, 0.0)).collect();
    let mut graph = ConnectivityGraph::default();
    graph.rebuild(&pts, &ConnectivityParams::default());
    assert_eq!(graph.neighbours(0), &[1, 2, 3]);
    // 1 already holds 0, so it takes 2 and 3
    assert_eq!(graph.neighbours(1), &[0, 2, 3]);
    assert_eq!(graph.neighbours(2), &[0, 1, 3]);
    // every earlier point is full by the time 4 is reached
    assert!(graph.neighbours(4).is_empty());
    assert_eq!(
        graph.edges,
        vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
    );
}

#[test]
fn faces_use_first_two_neighbours() {
    let pts = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.1, 0.0, 0.0),
        Vec3::new(0.0, 0.1, 0.0),
        Vec3::new(5.0, 5.0, 5.0),
    ];
    let mut graph = ConnectivityGraph::default();
    graph.rebuild(&pts, &ConnectivityParams::default());
    // every vertex of the triangle has two neighbours -> three faces
    assert_eq!(graph.face_count(), 3);
    assert_eq!(
        &graph.face_vertices[..3],
        &[pts[0].to_array(), pts[1].to_array(), pts[2].to_array()]
    );
    assert!(graph.neighbours(3).is_empty());
}

#[test]
fn rebuild_discards_previous_frame() {
    let mut graph = ConnectivityGraph::default();
    graph.rebuild(
        &[Vec3::ZERO, Vec3::new(0.1, 0.0, 0.0)],
        &ConnectivityParams::default(),
    );
    assert_eq!(graph.edges.len(), 1);
    graph.rebuild(
        &[Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)],
        &ConnectivityParams::default(),
    );
    assert!(graph.edges.is_empty());
    assert!(graph.line_vertices.is_empty());
    assert!(graph.face_vertices.is_empty());
}

#[test]
fn exact_distance_is_not_connected() {
    let mut graph = ConnectivityGraph::default();
    graph.rebuild(
        &[Vec3::ZERO, Vec3::new(CONNECT_DISTANCE, 0.0, 0.0)],
        &ConnectivityParams::default(),
    );
    assert!(graph.edges.is_empty());
}

#[derive(Default)]
struct RecordingBackend {
    uploads: Vec<(usize, usize, usize)>,
    uniforms: Vec<SceneUniforms>,
    renders: usize,
    fail: bool,
}

impl RenderBackend for RecordingBackend {
    type Error = &'static str;

    fn upload_buffers(&mut self, geometry: &FrameGeometry<'_>) {
        self.uploads.push((
            geometry.particles.len(),
            geometry.line_vertices.len(),
            geometry.face_vertices.len(),
        ));
    }

    fn set_uniforms(&mut self, uniforms: &SceneUniforms) {
        self.uniforms.push(*uniforms);
    }

    fn render(&mut self) -> Result<(), Self::Error> {
        self.renders += 1;
        if self.fail {
            Err("surface lost")
        } else {
            Ok(())
        }
    }
}

#[test]
fn scene_submits_geometry_then_uniforms_then_renders() {
    let mut scene = ParticleScene::new(FieldConfig::default(), rng(13));
    let controller = InteractionController::default();
    scene.tick(FIXED_STEP_SEC, &controller);
    let mut backend = RecordingBackend::default();
    scene.submit(&mut backend).unwrap();
    assert_eq!(backend.renders, 1);
    let (points, lines, faces) = backend.uploads[0];
    assert_eq!(points, POINT_COUNT);
    assert_eq!(lines, scene.graph.edges.len() * 2);
    assert_eq!(faces, scene.graph.face_count() * 3);
    assert_eq!(backend.uniforms[0].time, FIXED_STEP_SEC);
}

#[test]
fn scene_propagates_render_errors() {
    let scene = ParticleScene::new(FieldConfig::default(), rng(14));
    let mut backend = RecordingBackend {
        fail: true,
        ..Default::default()
    };
    assert_eq!(scene.submit(&mut backend), Err("surface lost"));
}

#[test]
fn scene_uniforms_follow_the_controller() {
    let mut scene = ParticleScene::new(FieldConfig::default(), rng(15));
    let mut controller = InteractionController::default();
    controller.set_pointer(glam::Vec2::new(1.0, 0.0));
    for _ in 0..5 {
        controller.update(true);
    }
    scene.tick(10.0, &controller);
    let u = scene.uniforms();
    assert_eq!(u.interaction, controller.interaction_strength);
    assert_eq!(u.rotation, controller.rotation);
    assert!((u.color_phase - color_phase(10.0)).abs() < EPS);
    assert_eq!(scene.instances().len(), POINT_COUNT);
}

#[test]
fn instance_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<ParticleInstance>(), 20);
}
