//! Render pipelines.
//!
//! - `model` is the textured model program: MVP uniform, diffuse sampler,
//!   `vertexPosition`/`vertexUV` attributes

pub mod model;

pub use model::{ModelPipeline, ModelUniform};
