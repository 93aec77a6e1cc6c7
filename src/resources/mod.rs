//! Turning an imported [`Scene`](crate::scene::Scene) into GPU resources.
//!
//! - `texture` discovers, decodes and uploads the diffuse textures
//! - `mesh` builds the per-mesh buffers and resolves each mesh's texture

pub mod mesh;
pub mod texture;

pub use mesh::{MeshData, MeshRecord, build_mesh_record};
pub use texture::{TextureHandle, TextureSet, resolve_textures};
