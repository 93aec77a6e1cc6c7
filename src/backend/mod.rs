//! wgpu implementation of the [`GpuBackend`] and [`DrawPass`](crate::gpu::DrawPass) seams.

use wgpu::util::DeviceExt;

use crate::{
    config::TextureFilter, context::Context, gpu::GpuBackend, pipelines::ModelPipeline,
};

pub mod pass;
pub mod texture;

pub use pass::WgpuPass;
pub use texture::GpuTexture;

/// Creates model buffers and textures on a wgpu device.
///
/// Cloning is cheap; wgpu handles are reference counted.
#[derive(Clone, Debug)]
pub struct WgpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
}

impl WgpuBackend {
    pub fn new(ctx: &Context, pipeline: &ModelPipeline, filter: TextureFilter) -> Self {
        Self {
            device: ctx.device.clone(),
            queue: ctx.queue.clone(),
            texture_layout: pipeline.texture_layout.clone(),
            sampler: texture::create_sampler(&ctx.device, filter),
        }
    }
}

impl GpuBackend for WgpuBackend {
    type Buffer = wgpu::Buffer;
    type Texture = GpuTexture;

    fn create_index_buffer(&self, label: &str, indices: &[u32]) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
    }

    fn create_vertex_buffer(&self, label: &str, data: &[f32]) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(data),
                usage: wgpu::BufferUsages::VERTEX,
            })
    }

    fn create_texture(&self, label: &str, image: &image::RgbaImage) -> GpuTexture {
        GpuTexture::from_image(
            &self.device,
            &self.queue,
            &self.texture_layout,
            &self.sampler,
            label,
            image,
        )
    }
}
