use crate::constants::*;
use crate::core::constants::{MAX_CONNECTIONS, POINT_COUNT};
use crate::core::{FrameGeometry, RenderBackend, SceneUniforms};
use glam::{EulerRot, Mat4, Vec3};
use web_sys as web;

mod bloom;
mod helpers;
mod scene_pass;
mod targets;
use bloom::BloomChain;
use scene_pass::{ScenePass, SceneGpuUniforms};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    scene: ScenePass,
    bloom: BloomChain,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let vertex_capacity = POINT_COUNT * MAX_CONNECTIONS;
        let scene = ScenePass::new(&device, POINT_COUNT, vertex_capacity, vertex_capacity);
        let bloom = BloomChain::new(&device, format, &targets);
        log::info!("[gpu] surface {}x{} format {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene,
            bloom,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            time: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets = RenderTargets::new(&self.device, width, height);
            self.bloom.rebind(&self.device, &self.targets);
        }
    }

    fn matrices(&self, uniforms: &SceneUniforms) -> SceneGpuUniforms {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(
            CAMERA_FOVY_DEG.to_radians(),
            aspect,
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        );
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
        let model = Mat4::from_euler(
            EulerRot::XYZ,
            uniforms.rotation.x,
            uniforms.rotation.y,
            0.0,
        );
        SceneGpuUniforms {
            proj: proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            params: [
                uniforms.time,
                uniforms.interaction,
                uniforms.color_phase,
                uniforms.pulse,
            ],
            resolution: [self.width as f32, self.height as f32, 0.0, 0.0],
        }
    }
}

impl RenderBackend for GpuState<'_> {
    type Error = wgpu::SurfaceError;

    fn upload_buffers(&mut self, geometry: &FrameGeometry<'_>) {
        self.scene.upload(&self.queue, geometry);
    }

    fn set_uniforms(&mut self, uniforms: &SceneUniforms) {
        self.time = uniforms.time;
        let u = self.matrices(uniforms);
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    fn render(&mut self) -> Result<(), Self::Error> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.scene
            .encode(&mut encoder, &self.targets.hdr.view, self.clear_color);
        self.bloom
            .encode(&self.queue, &mut encoder, &self.targets, &view, self.time);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
