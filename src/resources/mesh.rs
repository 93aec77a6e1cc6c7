//! Mesh Buffer Builder: turns one scene mesh into GPU buffers plus the
//! texture it is drawn with.

use crate::{
    gpu::GpuBackend,
    resources::texture::{TextureHandle, TextureSet},
    scene::{Material, Mesh},
};

/// CPU-side buffer contents for one mesh, laid out as the GPU consumes them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Three indices per face.
    pub indices: Vec<u32>,
    /// Three floats per vertex.
    pub positions: Option<Vec<f32>>,
    /// Two floats per vertex.
    pub uvs: Option<Vec<f32>>,
}

impl MeshData {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let indices = mesh.faces.iter().flatten().copied().collect();

        let positions = mesh
            .positions
            .as_ref()
            .filter(|p| !p.is_empty())
            .map(|p| p.iter().flatten().copied().collect());

        let uvs = mesh
            .uvs
            .as_ref()
            .filter(|uv| !uv.is_empty())
            .map(|uv| uv.iter().flat_map(|&[u, v]| [u, v]).collect());

        Self {
            indices,
            positions,
            uvs,
        }
    }

    pub fn face_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }
}

/// GPU-resident summary of one mesh: what the renderer binds and draws.
///
/// Buffers are set once when the record is built and released when it is dropped.
#[derive(Debug)]
pub struct MeshRecord<Buf> {
    index_buffer: Option<Buf>,
    position_buffer: Option<Buf>,
    uv_buffer: Option<Buf>,
    face_count: u32,
    texture: Option<TextureHandle>,
}

impl<Buf> MeshRecord<Buf> {
    pub fn index_buffer(&self) -> Option<&Buf> {
        self.index_buffer.as_ref()
    }

    pub fn position_buffer(&self) -> Option<&Buf> {
        self.position_buffer.as_ref()
    }

    pub fn uv_buffer(&self) -> Option<&Buf> {
        self.uv_buffer.as_ref()
    }

    pub fn face_count(&self) -> u32 {
        self.face_count
    }

    /// `None` when the mesh is drawn without a texture of its own.
    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }
}

/// Upload `mesh` and resolve its diffuse texture against `textures`.
///
/// Never fails: missing faces, positions, UVs or textures leave the matching
/// field empty.
pub fn build_mesh_record<B: GpuBackend>(
    backend: &B,
    label: &str,
    mesh: &Mesh,
    material: Option<&Material>,
    textures: &TextureSet<B::Texture>,
) -> MeshRecord<B::Buffer> {
    let data = MeshData::from_mesh(mesh);
    let face_count = data.face_count();

    let index_buffer = (face_count > 0)
        .then(|| backend.create_index_buffer(&format!("{label} indices"), &data.indices));
    let position_buffer = data
        .positions
        .as_deref()
        .map(|positions| backend.create_vertex_buffer(&format!("{label} positions"), positions));
    let uv_buffer = data
        .uvs
        .as_deref()
        .map(|uvs| backend.create_vertex_buffer(&format!("{label} uvs"), uvs));

    let texture = material
        .and_then(Material::diffuse)
        .and_then(|filename| {
            let handle = textures.handle(filename);
            if handle.is_none() {
                log::warn!("{label}: texture {filename:?} was never loaded, drawing untextured");
            }
            handle
        });

    MeshRecord {
        index_buffer,
        position_buffer,
        uv_buffer,
        face_count,
        texture,
    }
}
