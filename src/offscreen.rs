//! Render a model into an image without a window, e.g. for thumbnails or
//! golden image tests.

use std::{iter, time::Duration};

use anyhow::anyhow;
use cgmath::Matrix4;

use crate::{
    backend::{WgpuBackend, WgpuPass},
    context::Context,
    model::Model,
    pipelines::ModelPipeline,
};

/// Colour format of offscreen targets; build the [`ModelPipeline`] with it.
pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
/// Depth format of offscreen targets.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

fn target_extent(width: u32, height: u32) -> anyhow::Result<wgpu::Extent3d> {
    if width == 0 || height == 0 {
        return Err(anyhow!("cannot render into a {width}x{height} image"));
    }
    Ok(wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    })
}

/// Clear to `clear_colour`, draw `model` once and read the result back.
///
/// Row 0 of the returned image is the top of the frame.
pub fn render_to_image(
    ctx: &Context,
    pipeline: &ModelPipeline,
    model: &Model<WgpuBackend>,
    mvp: &Matrix4<f32>,
    (width, height): (u32, u32),
    clear_colour: wgpu::Color,
) -> anyhow::Result<image::RgbaImage> {
    let extent = target_extent(width, height)?;
    let target = ctx.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Offscreen Output Texture"),
        size: extent,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: COLOR_FORMAT,
        usage: wgpu::TextureUsages::COPY_SRC | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let depth = ctx.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Offscreen Depth Texture"),
        size: extent,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());
    let depth_view = depth.create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Offscreen Encoder"),
        });
    {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Offscreen Render Pass"),
            multiview_mask: None,
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &target_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_colour),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });
        let mut pass = WgpuPass::new(&mut render_pass, pipeline, &ctx.queue);
        model.render(&mut pass, mvp);
    }

    // Copies need rows aligned to COPY_BYTES_PER_ROW_ALIGNMENT.
    let unpadded_bytes_per_row = 4 * width;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    let padded_bytes_per_row = unpadded_bytes_per_row.div_ceil(align) * align;
    let output_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Offscreen Readback Buffer"),
        size: (padded_bytes_per_row * height) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            aspect: wgpu::TextureAspect::All,
            texture: &target,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &output_buffer,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(padded_bytes_per_row),
                rows_per_image: Some(height),
            },
        },
        extent,
    );
    ctx.queue.submit(iter::once(encoder.finish()));

    let buffer_slice = output_buffer.slice(..);
    let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
    buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
        // The receiver only disappears if this function already returned.
        let _ = tx.send(result);
    });
    ctx.device
        .poll(wgpu::PollType::Wait {
            submission_index: None,
            timeout: Some(Duration::from_secs(3)),
        })
        .map_err(|e| anyhow!("GPU did not finish rendering: {e}"))?;
    futures::executor::block_on(rx.receive())
        .ok_or_else(|| anyhow!("readback channel closed"))??;

    let mut pixels = Vec::with_capacity((unpadded_bytes_per_row * height) as usize);
    {
        let data = buffer_slice.get_mapped_range();
        for row in data.chunks(padded_bytes_per_row as usize) {
            pixels.extend_from_slice(&row[..unpadded_bytes_per_row as usize]);
        }
    }
    output_buffer.unmap();

    image::RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| anyhow!("readback size does not match {width}x{height}"))
}
