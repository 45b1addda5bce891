// Per-frame proximity graph over the particle field.
//
// Pairs are scanned in index order (`j > i`) and accepted first-found, not
// nearest-first. Every particle carries at most `max_connections` edges in
// total, counting edges accepted while scanning lower indices. All buffers
// are rebuilt from scratch on every call; only their allocations persist.

use super::constants::{CONNECT_DISTANCE, MAX_CONNECTIONS};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct ConnectivityParams {
    pub max_distance: f32,
    pub max_connections: usize,
}

impl Default for ConnectivityParams {
    fn default() -> Self {
        Self {
            max_distance: CONNECT_DISTANCE,
            max_connections: MAX_CONNECTIONS,
        }
    }
}

type Neighbours = SmallVec<[u32; MAX_CONNECTIONS]>;

#[derive(Default)]
pub struct ConnectivityGraph {
    pub edges: Vec<(u32, u32)>,
    /// Two vertices per edge.
    pub line_vertices: Vec<[f32; 3]>,
    /// Three vertices per face.
    pub face_vertices: Vec<[f32; 3]>,
    neighbours: Vec<Neighbours>,
}

impl ConnectivityGraph {
    pub fn with_capacity(points: usize) -> Self {
        Self {
            edges: Vec::with_capacity(points * MAX_CONNECTIONS),
            line_vertices: Vec::with_capacity(points * MAX_CONNECTIONS * 2),
            face_vertices: Vec::with_capacity(points * 3),
            neighbours: Vec::with_capacity(points),
        }
    }

    /// Neighbours of `i` in acceptance order.
    pub fn neighbours(&self, i: usize) -> &[u32] {
        self.neighbours.get(i).map(|n| n.as_slice()).unwrap_or(&[])
    }

    pub fn face_count(&self) -> usize {
        self.face_vertices.len() / 3
    }

    pub fn rebuild(&mut self, positions: &[Vec3], params: &ConnectivityParams) {
        self.edges.clear();
        self.line_vertices.clear();
        self.face_vertices.clear();
        self.neighbours.clear();
        self.neighbours.resize(positions.len(), Neighbours::new());

        let max_d2 = params.max_distance * params.max_distance;
        let cap = params.max_connections;
        let n = positions.len();

        for i in 0..n {
            if self.neighbours[i].len() >= cap {
                continue;
            }
            let pi = positions[i];
            for j in (i + 1)..n {
                if self.neighbours[j].len() >= cap {
                    continue;
                }
                if pi.distance_squared(positions[j]) < max_d2 {
                    self.neighbours[i].push(j as u32);
                    self.neighbours[j].push(i as u32);
                    self.edges.push((i as u32, j as u32));
                    if self.neighbours[i].len() >= cap {
                        break;
                    }
                }
            }
        }

        for &(a, b) in &self.edges {
            self.line_vertices.push(positions[a as usize].to_array());
            self.line_vertices.push(positions[b as usize].to_array());
        }

        for (i, nb) in self.neighbours.iter().enumerate() {
            if nb.len() >= 2 {
                self.face_vertices.push(positions[i].to_array());
                self.face_vertices.push(positions[nb[0] as usize].to_array());
                self.face_vertices.push(positions[nb[1] as usize].to_array());
            }
        }
    }
}
