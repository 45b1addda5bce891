use super::helpers;
use crate::constants::HDR_FORMAT;
use crate::core::{FrameGeometry, ParticleInstance};

const VERTEX_STRIDE: u64 = std::mem::size_of::<[f32; 3]>() as u64;
const INSTANCE_STRIDE: u64 = std::mem::size_of::<ParticleInstance>() as u64;

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32];
const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneGpuUniforms {
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) params: [f32; 4],
    pub(crate) resolution: [f32; 4],
}

/// Point, line and face pipelines with their fixed-capacity vertex buffers.
pub(crate) struct ScenePass {
    points: wgpu::RenderPipeline,
    lines: wgpu::RenderPipeline,
    faces: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    line_buffer: wgpu::Buffer,
    face_buffer: wgpu::Buffer,
    instance_capacity: usize,
    line_capacity: usize,
    face_capacity: usize,
    instance_count: u32,
    line_count: u32,
    face_count: u32,
}

fn vertex_buffer(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: size.max(16),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl ScenePass {
    pub(crate) fn new(
        device: &wgpu::Device,
        instance_capacity: usize,
        line_capacity: usize,
        face_capacity: usize,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: INSTANCE_STRIDE,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        };
        let position_layout = wgpu::VertexBufferLayout {
            array_stride: VERTEX_STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTRS,
        };
        let additive = Some(helpers::ADDITIVE);
        let points = helpers::make_pipeline(
            device,
            "points_pipeline",
            &layout,
            &shader,
            "vs_points",
            "fs_points",
            &[instance_layout],
            wgpu::PrimitiveTopology::TriangleStrip,
            HDR_FORMAT,
            additive,
        );
        let lines = helpers::make_pipeline(
            device,
            "lines_pipeline",
            &layout,
            &shader,
            "vs_lines",
            "fs_lines",
            &[position_layout.clone()],
            wgpu::PrimitiveTopology::LineList,
            HDR_FORMAT,
            additive,
        );
        let faces = helpers::make_pipeline(
            device,
            "faces_pipeline",
            &layout,
            &shader,
            "vs_faces",
            "fs_faces",
            &[position_layout],
            wgpu::PrimitiveTopology::TriangleList,
            HDR_FORMAT,
            additive,
        );
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneGpuUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            points,
            lines,
            faces,
            uniform_buffer,
            bind_group,
            instance_buffer: vertex_buffer(
                device,
                "particle_instances",
                instance_capacity as u64 * INSTANCE_STRIDE,
            ),
            line_buffer: vertex_buffer(device, "line_vertices", line_capacity as u64 * VERTEX_STRIDE),
            face_buffer: vertex_buffer(device, "face_vertices", face_capacity as u64 * VERTEX_STRIDE),
            instance_capacity,
            line_capacity,
            face_capacity,
            instance_count: 0,
            line_count: 0,
            face_count: 0,
        }
    }

    pub(crate) fn upload(&mut self, queue: &wgpu::Queue, geometry: &FrameGeometry<'_>) {
        let particles = &geometry.particles[..geometry.particles.len().min(self.instance_capacity)];
        // keep whole primitives when clamping
        let line_len = geometry.line_vertices.len().min(self.line_capacity) / 2 * 2;
        let face_len = geometry.face_vertices.len().min(self.face_capacity) / 3 * 3;
        let lines = &geometry.line_vertices[..line_len];
        let faces = &geometry.face_vertices[..face_len];
        if !particles.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(particles));
        }
        if !lines.is_empty() {
            queue.write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(lines));
        }
        if !faces.is_empty() {
            queue.write_buffer(&self.face_buffer, 0, bytemuck::cast_slice(faces));
        }
        self.instance_count = particles.len() as u32;
        self.line_count = lines.len() as u32;
        self.face_count = faces.len() as u32;
    }

    pub(crate) fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        let mut r = helpers::draw_pass(encoder, "scene_pass", target, clear);
        r.set_bind_group(0, &self.bind_group, &[]);
        if self.face_count > 0 {
            r.set_pipeline(&self.faces);
            r.set_vertex_buffer(0, self.face_buffer.slice(..));
            r.draw(0..self.face_count, 0..1);
        }
        if self.line_count > 0 {
            r.set_pipeline(&self.lines);
            r.set_vertex_buffer(0, self.line_buffer.slice(..));
            r.draw(0..self.line_count, 0..1);
        }
        if self.instance_count > 0 {
            r.set_pipeline(&self.points);
            r.set_vertex_buffer(0, self.instance_buffer.slice(..));
            r.draw(0..4, 0..self.instance_count);
        }
    }
}
