//! model-ngin
//!
//! Loads a textured 3D model from disk into per-mesh GPU buffers and draws it
//! every frame with a caller-supplied model-view-projection matrix.
//!
//! High-level modules
//! - `scene`: owned meshes and materials produced by an importer
//! - `importers`: OBJ/MTL (tobj) and glTF importers behind the `SceneImporter` trait
//! - `resources`: texture resolving and per-mesh buffer building
//! - `model`: the loaded/unloaded model and its GPU resources
//! - `render`: the per-frame draw sequence for a model
//! - `gpu`: the backend and draw-pass seams the above are written against
//! - `backend`, `pipelines`, `context`, `offscreen`: the wgpu implementation
//!
//! Everything runs on the thread that owns the GPU device; loading blocks
//! until geometry and all textures are uploaded or the load failed.

pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod gpu;
pub mod importers;
pub mod model;
pub mod offscreen;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;

pub use cgmath::Matrix4;
pub use config::{ImportPreset, ModelConfig, TextureFilter};
pub use error::LoadError;
pub use model::Model;
pub use render::DrawModel;

/// Initialise `env_logger` once; later calls only report that it is already set up.
pub fn init_logging() {
    if let Err(e) = env_logger::try_init() {
        log::debug!("Logger already initialized: {}", e);
    }
}
