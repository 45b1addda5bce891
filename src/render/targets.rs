use super::helpers;
use crate::constants::HDR_FORMAT;

pub(crate) struct Target {
    _tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl Target {
    fn new(device: &wgpu::Device, label: &str, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_color_texture(device, label, width, height, HDR_FORMAT);
        Self { _tex: tex, view }
    }
}

/// Full-resolution HDR scene colour plus two half-resolution bloom
/// ping-pong buffers.
pub(crate) struct RenderTargets {
    pub(crate) hdr: Target,
    pub(crate) bloom_a: Target,
    pub(crate) bloom_b: Target,
    pub(crate) bloom_size: [u32; 2],
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let bw = (width.max(1) / 2).max(1);
        let bh = (height.max(1) / 2).max(1);
        Self {
            hdr: Target::new(device, "hdr_tex", width, height),
            bloom_a: Target::new(device, "bloom_a", bw, bh),
            bloom_b: Target::new(device, "bloom_b", bw, bh),
            bloom_size: [bw, bh],
        }
    }
}
