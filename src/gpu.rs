//! The GPU capabilities the loader and renderer rely on.
//!
//! [`GpuBackend`] creates resources; releasing a resource is dropping it.
//! [`DrawPass`] is the per-frame command stream of one render pass. The wgpu
//! implementations live in [`crate::backend`].

use cgmath::Matrix4;

pub trait GpuBackend {
    type Buffer;
    type Texture;

    /// Upload triangle indices for indexed drawing.
    fn create_index_buffer(&self, label: &str, indices: &[u32]) -> Self::Buffer;

    /// Upload tightly packed `f32` vertex attribute data.
    fn create_vertex_buffer(&self, label: &str, data: &[f32]) -> Self::Buffer;

    /// Upload an RGBA8 image whose first row is the bottom of the picture.
    fn create_texture(&self, label: &str, image: &image::RgbaImage) -> Self::Texture;
}

pub trait DrawPass<B: GpuBackend> {
    /// Activate the model program, upload the MVP and select texture unit 0.
    fn use_program(&mut self, mvp: &Matrix4<f32>);

    fn bind_texture(&mut self, texture: &B::Texture);

    /// `None` unbinds, leaving the mesh without that attribute.
    fn bind_index_buffer(&mut self, buffer: Option<&B::Buffer>);
    fn bind_position_buffer(&mut self, buffer: Option<&B::Buffer>);
    fn bind_uv_buffer(&mut self, buffer: Option<&B::Buffer>);

    /// Draw `index_count` indices as a triangle list. A count of zero is a no-op.
    fn draw_indexed(&mut self, index_count: u32);
}
