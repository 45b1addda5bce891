use super::helpers;
use super::targets::RenderTargets;
use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD, HDR_FORMAT};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PostUniforms {
    resolution: [f32; 2],
    time: f32,
    bloom_strength: f32,
    blur_dir: [f32; 2],
    threshold: f32,
    _pad: f32,
}

/// Bright pass, two blur passes and the final composite onto the swapchain.
///
/// Each pass owns its uniform buffer; queued writes all land before the
/// encoder runs.
pub(crate) struct BloomChain {
    bgl_src: wgpu::BindGroupLayout,
    bgl_bloom: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
    uniforms: [wgpu::Buffer; 4],
    bg_bright: wgpu::BindGroup,
    bg_blur_h: wgpu::BindGroup,
    bg_blur_v: wgpu::BindGroup,
    bg_composite: wgpu::BindGroup,
    bg_composite_bloom: wgpu::BindGroup,
}

const BRIGHT: usize = 0;
const BLUR_H: usize = 1;
const BLUR_V: usize = 2;
const COMPOSITE: usize = 3;

impl BloomChain {
    pub(crate) fn new(
        device: &wgpu::Device,
        swap_format: wgpu::TextureFormat,
        targets: &RenderTargets,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let bgl_src = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl_src"),
            entries: &[
                helpers::texture_entry(0),
                helpers::sampler_entry(1),
                helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let bgl_bloom = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl_bloom"),
            entries: &[helpers::texture_entry(0), helpers::sampler_entry(1)],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post"),
            bind_group_layouts: &[&bgl_src],
            push_constant_ranges: &[],
        });
        let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_composite"),
            bind_group_layouts: &[&bgl_src, &bgl_bloom],
            push_constant_ranges: &[],
        });
        let fullscreen = |label: &str, layout: &wgpu::PipelineLayout, fs: &str, format| {
            helpers::make_pipeline(
                device,
                label,
                layout,
                &shader,
                "vs_fullscreen",
                fs,
                &[],
                wgpu::PrimitiveTopology::TriangleList,
                format,
                Some(wgpu::BlendState::REPLACE),
            )
        };
        let bright_pipeline = fullscreen("bright_pipeline", &pl_single, "fs_bright", HDR_FORMAT);
        let blur_pipeline = fullscreen("blur_pipeline", &pl_single, "fs_blur", HDR_FORMAT);
        let composite_pipeline =
            fullscreen("composite_pipeline", &pl_composite, "fs_composite", swap_format);

        let uniforms: [wgpu::Buffer; 4] = std::array::from_fn(|i| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(["post_bright", "post_blur_h", "post_blur_v", "post_composite"][i]),
                size: std::mem::size_of::<PostUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });

        let src_group = |label: &str, view: &wgpu::TextureView, ub: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &bgl_src,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: ub.as_entire_binding(),
                    },
                ],
            })
        };
        let bg_bright = src_group("bg_bright", &targets.hdr.view, &uniforms[BRIGHT]);
        let bg_blur_h = src_group("bg_blur_h", &targets.bloom_a.view, &uniforms[BLUR_H]);
        let bg_blur_v = src_group("bg_blur_v", &targets.bloom_b.view, &uniforms[BLUR_V]);
        let bg_composite = src_group("bg_composite", &targets.hdr.view, &uniforms[COMPOSITE]);
        let bg_composite_bloom = Self::bloom_group(device, &bgl_bloom, &sampler, targets);

        Self {
            bgl_src,
            bgl_bloom,
            sampler,
            bright_pipeline,
            blur_pipeline,
            composite_pipeline,
            uniforms,
            bg_bright,
            bg_blur_h,
            bg_blur_v,
            bg_composite,
            bg_composite_bloom,
        }
    }

    fn bloom_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        targets: &RenderTargets,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_composite_bloom"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&targets.bloom_a.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    /// Rebind every group after the render targets were recreated.
    pub(crate) fn rebind(&mut self, device: &wgpu::Device, targets: &RenderTargets) {
        let make = |label: &str, view: &wgpu::TextureView, ub: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &self.bgl_src,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: ub.as_entire_binding(),
                    },
                ],
            })
        };
        let bg_bright = make("bg_bright", &targets.hdr.view, &self.uniforms[BRIGHT]);
        let bg_blur_h = make("bg_blur_h", &targets.bloom_a.view, &self.uniforms[BLUR_H]);
        let bg_blur_v = make("bg_blur_v", &targets.bloom_b.view, &self.uniforms[BLUR_V]);
        let bg_composite = make("bg_composite", &targets.hdr.view, &self.uniforms[COMPOSITE]);
        self.bg_bright = bg_bright;
        self.bg_blur_h = bg_blur_h;
        self.bg_blur_v = bg_blur_v;
        self.bg_composite = bg_composite;
        self.bg_composite_bloom =
            Self::bloom_group(device, &self.bgl_bloom, &self.sampler, targets);
    }

    pub(crate) fn encode(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        swap_view: &wgpu::TextureView,
        time: f32,
    ) {
        let res = [targets.bloom_size[0] as f32, targets.bloom_size[1] as f32];
        let write = |slot: usize, blur_dir: [f32; 2]| {
            let u = PostUniforms {
                resolution: res,
                time,
                bloom_strength: BLOOM_STRENGTH,
                blur_dir,
                threshold: BLOOM_THRESHOLD,
                _pad: 0.0,
            };
            queue.write_buffer(&self.uniforms[slot], 0, bytemuck::bytes_of(&u));
        };
        write(BRIGHT, [0.0, 0.0]);
        write(BLUR_H, [1.0, 0.0]);
        write(BLUR_V, [0.0, 1.0]);
        write(COMPOSITE, [0.0, 0.0]);

        let passes: [(&str, &wgpu::TextureView, &wgpu::RenderPipeline, &wgpu::BindGroup); 3] = [
            ("bright_pass", &targets.bloom_a.view, &self.bright_pipeline, &self.bg_bright),
            ("blur_h", &targets.bloom_b.view, &self.blur_pipeline, &self.bg_blur_h),
            ("blur_v", &targets.bloom_a.view, &self.blur_pipeline, &self.bg_blur_v),
        ];
        for (label, target, pipeline, group) in passes {
            let mut r = helpers::draw_pass(encoder, label, target, wgpu::Color::BLACK);
            r.set_pipeline(pipeline);
            r.set_bind_group(0, group, &[]);
            r.draw(0..3, 0..1);
        }

        let mut r = helpers::draw_pass(encoder, "composite", swap_view, wgpu::Color::BLACK);
        r.set_pipeline(&self.composite_pipeline);
        r.set_bind_group(0, &self.bg_composite, &[]);
        r.set_bind_group(1, &self.bg_composite_bloom, &[]);
        r.draw(0..3, 0..1);
    }
}
