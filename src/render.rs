//! Frame Renderer: the per-frame command sequence for a loaded [`Model`].
//!
//! For every mesh record, in scene order: bind its texture (if it has one),
//! bind the index, position and UV buffers, then issue one indexed draw of
//! `face_count * 3` indices. Untextured meshes keep whatever texture the
//! previous mesh bound. Meshes without faces still get their (empty) draw.

use cgmath::Matrix4;

use crate::{
    gpu::{DrawPass, GpuBackend},
    model::Model,
};

pub trait DrawModel<B: GpuBackend> {
    /// Draw every mesh of `model`. A model that is not loaded draws nothing.
    fn draw_model(&mut self, model: &Model<B>, mvp: &Matrix4<f32>);
}

impl<B, P> DrawModel<B> for P
where
    B: GpuBackend,
    P: DrawPass<B> + ?Sized,
{
    fn draw_model(&mut self, model: &Model<B>, mvp: &Matrix4<f32>) {
        if !model.is_loaded() {
            return;
        }

        self.use_program(mvp);
        for record in model.meshes() {
            if let Some(texture) = record.texture().and_then(|handle| model.texture(handle)) {
                self.bind_texture(texture);
            }
            self.bind_index_buffer(record.index_buffer());
            self.bind_position_buffer(record.position_buffer());
            self.bind_uv_buffer(record.uv_buffer());
            self.draw_indexed(record.face_count() * 3);
        }
    }
}

impl<B: GpuBackend> Model<B> {
    /// Render this model into `pass`. Safe to call every frame, loaded or not.
    pub fn render<P: DrawPass<B> + ?Sized>(&self, pass: &mut P, mvp: &Matrix4<f32>) {
        pass.draw_model(self, mvp);
    }
}
