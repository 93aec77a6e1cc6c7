use cgmath::Matrix4;

use crate::{
    gpu::DrawPass,
    pipelines::{ModelPipeline, ModelUniform},
};

use super::{GpuTexture, WgpuBackend};

/// Records model draws into a `wgpu::RenderPass`.
///
/// wgpu keeps buffers bound until they are replaced, so the pass tracks which
/// attributes the current mesh actually supplied. Draws are only forwarded
/// when indices and positions are present, and meshes without UVs use the
/// positions-only pipeline.
///
/// The MVP is written through the queue, so draw one model per pass and frame.
pub struct WgpuPass<'a, 'pass> {
    render_pass: &'a mut wgpu::RenderPass<'pass>,
    pipeline: &'a ModelPipeline,
    queue: &'a wgpu::Queue,
    has_indices: bool,
    has_positions: bool,
    has_uvs: bool,
}

impl<'a, 'pass> WgpuPass<'a, 'pass> {
    pub fn new(
        render_pass: &'a mut wgpu::RenderPass<'pass>,
        pipeline: &'a ModelPipeline,
        queue: &'a wgpu::Queue,
    ) -> Self {
        Self {
            render_pass,
            pipeline,
            queue,
            has_indices: false,
            has_positions: false,
            has_uvs: false,
        }
    }
}

impl DrawPass<WgpuBackend> for WgpuPass<'_, '_> {
    fn use_program(&mut self, mvp: &Matrix4<f32>) {
        self.queue.write_buffer(
            &self.pipeline.uniform_buffer,
            0,
            bytemuck::cast_slice(&[ModelUniform::from(mvp)]),
        );
        self.render_pass.set_pipeline(&self.pipeline.textured);
        self.render_pass
            .set_bind_group(0, &self.pipeline.uniform_bind_group, &[]);
        // Texture unit 0 starts out with the default texture until a mesh binds its own.
        self.render_pass
            .set_bind_group(1, &self.pipeline.default_texture.bind_group, &[]);
    }

    fn bind_texture(&mut self, texture: &GpuTexture) {
        self.render_pass.set_bind_group(1, &texture.bind_group, &[]);
    }

    fn bind_index_buffer(&mut self, buffer: Option<&wgpu::Buffer>) {
        self.has_indices = buffer.is_some();
        if let Some(buffer) = buffer {
            self.render_pass
                .set_index_buffer(buffer.slice(..), wgpu::IndexFormat::Uint32);
        }
    }

    fn bind_position_buffer(&mut self, buffer: Option<&wgpu::Buffer>) {
        self.has_positions = buffer.is_some();
        if let Some(buffer) = buffer {
            self.render_pass.set_vertex_buffer(0, buffer.slice(..));
        }
    }

    fn bind_uv_buffer(&mut self, buffer: Option<&wgpu::Buffer>) {
        self.has_uvs = buffer.is_some();
        if let Some(buffer) = buffer {
            self.render_pass.set_vertex_buffer(1, buffer.slice(..));
        }
    }

    fn draw_indexed(&mut self, index_count: u32) {
        if index_count == 0 {
            return;
        }
        if !self.has_indices || !self.has_positions {
            log::warn!("Skipping draw of {index_count} indices: mesh has no index or position buffer");
            return;
        }
        let pipeline = if self.has_uvs {
            &self.pipeline.textured
        } else {
            &self.pipeline.positions_only
        };
        self.render_pass.set_pipeline(pipeline);
        self.render_pass.draw_indexed(0..index_count, 0, 0..1);
    }
}
