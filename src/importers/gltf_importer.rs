use std::path::Path;

use gltf::mesh::Mode;

use crate::{
    config::ImportPreset,
    error::LoadError,
    scene::{Material, Mesh, Scene},
};

use super::SceneImporter;

/// glTF 2.0 importer (`.gltf` and binary `.glb`).
///
/// Each triangle primitive becomes one [`Mesh`]; strips and fans are
/// converted to triangle lists, points and lines are skipped. Only base colour
/// textures referenced by a file URI are reported; images embedded in buffers
/// or `data:` URIs are not files next to the model and are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct GltfImporter {
    preset: ImportPreset,
}

impl GltfImporter {
    pub fn new(preset: ImportPreset) -> Self {
        Self { preset }
    }
}

impl SceneImporter for GltfImporter {
    fn import(&self, path: &Path) -> Result<Scene, LoadError> {
        let gltf::Gltf { document, blob } =
            gltf::Gltf::open(path).map_err(|e| LoadError::import(path, e))?;
        let buffers = gltf::import_buffers(&document, path.parent(), blob)
            .map_err(|e| LoadError::import(path, e))?;

        let mut materials: Vec<Material> = document.materials().map(convert_material).collect();
        // Primitives without a material use glTF's default material, appended last.
        let default_material = materials.len();
        let mut uses_default_material = false;

        let mut meshes = Vec::new();
        for mesh in document.meshes() {
            for primitive in mesh.primitives() {
                let mode = primitive.mode();
                let drawable = match mode {
                    Mode::Triangles => true,
                    Mode::TriangleStrip | Mode::TriangleFan => self.preset.triangulate,
                    Mode::Points | Mode::Lines | Mode::LineLoop | Mode::LineStrip => false,
                };
                if !drawable {
                    log::warn!(
                        "Skipping primitive {} of mesh {:?}: mode {:?} is not a triangle list",
                        primitive.index(),
                        mesh.name(),
                        mode
                    );
                    continue;
                }

                let reader =
                    primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| d.0.as_slice()));

                let positions: Option<Vec<[f32; 3]>> =
                    reader.read_positions().map(|iter| iter.collect());
                let uvs: Option<Vec<[f32; 2]>> = reader
                    .read_tex_coords(0)
                    .map(|coords| coords.into_f32().collect());

                let indices: Vec<u32> = match reader.read_indices() {
                    Some(indices) => indices.into_u32().collect(),
                    // Non-indexed primitives use their vertices in order.
                    None => (0..positions.as_ref().map_or(0, Vec::len) as u32).collect(),
                };
                let faces = triangle_faces(mode, &indices);

                let material_index = primitive.material().index().unwrap_or_else(|| {
                    uses_default_material = true;
                    default_material
                });

                meshes.push(Mesh {
                    faces,
                    positions,
                    uvs,
                    material_index,
                });
            }
        }

        if uses_default_material {
            materials.push(Material {
                name: "default".into(),
                diffuse_textures: Vec::new(),
            });
        }

        Ok(Scene { meshes, materials })
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &["gltf", "glb"]
    }
}

fn convert_material(material: gltf::Material) -> Material {
    let name = material
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| format!("material {}", material.index().unwrap_or_default()));

    let diffuse_textures = material
        .pbr_metallic_roughness()
        .base_color_texture()
        .and_then(|info| match info.texture().source().source() {
            gltf::image::Source::Uri { uri, .. } if uri.starts_with("data:") => {
                log::info!("Material {name:?} uses an inline data URI, no texture file to load");
                None
            }
            gltf::image::Source::Uri { uri, .. } => Some(texture_filename(uri)),
            gltf::image::Source::View { .. } => {
                log::info!("Material {name:?} uses an embedded image, no texture file to load");
                None
            }
        })
        .into_iter()
        .collect();

    Material {
        name,
        diffuse_textures,
    }
}

/// Relative file URIs are percent-encoded; texture files are looked up by their decoded name.
fn texture_filename(uri: &str) -> String {
    match urlencoding::decode(uri) {
        Ok(name) => name.into_owned(),
        Err(e) => {
            log::warn!("Texture URI {uri:?} is not valid UTF-8 once decoded ({e}), using it verbatim");
            uri.to_string()
        }
    }
}

/// Triangle list for `indices` drawn with `mode`. Strips alternate their
/// winding so every triangle keeps the orientation of the first one.
fn triangle_faces(mode: Mode, indices: &[u32]) -> Vec<[u32; 3]> {
    match mode {
        Mode::TriangleStrip => indices
            .windows(3)
            .enumerate()
            .map(|(i, w)| {
                if i % 2 == 0 {
                    [w[0], w[1], w[2]]
                } else {
                    [w[0], w[2], w[1]]
                }
            })
            .collect(),
        Mode::TriangleFan => match indices.split_first() {
            Some((&hub, rim)) => rim.windows(2).map(|w| [hub, w[0], w[1]]).collect(),
            None => Vec::new(),
        },
        _ => indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{gpu::recording::RecordingBackend, model::Model};

    /// Four vertices of a unit quad, UVs for them and two indexed triangles.
    fn quad_buffer() -> Vec<u8> {
        let positions: [f32; 12] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
        let uvs: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
        let indices: [u32; 6] = [0, 1, 2, 2, 3, 0];

        let mut bytes = Vec::new();
        bytes.extend(positions.iter().flat_map(|f| f.to_le_bytes()));
        bytes.extend(uvs.iter().flat_map(|f| f.to_le_bytes()));
        bytes.extend(indices.iter().flat_map(|i| i.to_le_bytes()));
        bytes
    }

    /// Primitives, in order: indexed triangles with material 0, a non-indexed
    /// strip with material 1, a non-indexed fan without material and points.
    const QUAD_GLTF: &str = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "uri": "quad.bin", "byteLength": 104 }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 48 },
            { "buffer": 0, "byteOffset": 48, "byteLength": 32 },
            { "buffer": 0, "byteOffset": 80, "byteLength": 24 }
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 4, "type": "VEC3",
              "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] },
            { "bufferView": 1, "componentType": 5126, "count": 4, "type": "VEC2" },
            { "bufferView": 2, "componentType": 5125, "count": 6, "type": "SCALAR" }
        ],
        "images": [
            { "uri": "my%20tex.png" },
            { "uri": "data:image/png;base64,iVBORw0KGgo=" }
        ],
        "textures": [{ "source": 0 }, { "source": 1 }],
        "materials": [
            { "name": "tiles", "pbrMetallicRoughness": { "baseColorTexture": { "index": 0 } } },
            { "name": "inline", "pbrMetallicRoughness": { "baseColorTexture": { "index": 1 } } }
        ],
        "meshes": [{
            "name": "quad",
            "primitives": [
                { "attributes": { "POSITION": 0, "TEXCOORD_0": 1 }, "indices": 2, "material": 0 },
                { "attributes": { "POSITION": 0 }, "mode": 5, "material": 1 },
                { "attributes": { "POSITION": 0 }, "mode": 6 },
                { "attributes": { "POSITION": 0 }, "mode": 0 }
            ]
        }]
    }"#;

    fn write_quad(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("model-ngin-gltf-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("quad.bin"), quad_buffer()).unwrap();
        let path = dir.join("quad.gltf");
        std::fs::write(&path, QUAD_GLTF).unwrap();
        path
    }

    #[test]
    fn imports_triangle_primitives_with_attributes() {
        let scene = GltfImporter::default().import(&write_quad("import")).unwrap();

        // The points primitive is skipped.
        assert_eq!(scene.meshes.len(), 3);

        let indexed = &scene.meshes[0];
        assert_eq!(indexed.faces, vec![[0, 1, 2], [2, 3, 0]]);
        assert_eq!(indexed.vertex_count(), 4);
        assert_eq!(indexed.positions.as_ref().unwrap()[2], [1.0, 1.0, 0.0]);
        assert_eq!(indexed.uvs.as_ref().unwrap()[1], [1.0, 0.0]);
        assert_eq!(indexed.material_index, 0);

        let strip = &scene.meshes[1];
        assert_eq!(strip.faces, vec![[0, 1, 2], [1, 3, 2]]);
        assert!(strip.uvs.is_none());
        assert_eq!(strip.material_index, 1);

        let fan = &scene.meshes[2];
        assert_eq!(fan.faces, vec![[0, 1, 2], [0, 2, 3]]);
        assert_eq!(fan.material_index, 2);
    }

    #[test]
    fn base_colour_uris_become_diffuse_filenames() {
        let scene = GltfImporter::default().import(&write_quad("materials")).unwrap();

        let names: Vec<_> = scene.materials.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["tiles", "inline", "default"]);
        assert_eq!(scene.materials[0].diffuse(), Some("my tex.png"));
        // Inline data URIs are not files next to the model.
        assert_eq!(scene.materials[1].diffuse(), None);
        assert_eq!(scene.materials[2].diffuse(), None);
    }

    #[test]
    fn model_with_inline_image_loads() {
        let path = write_quad("load");
        image::RgbImage::new(2, 2)
            .save(path.with_file_name("my tex.png"))
            .unwrap();

        let backend = RecordingBackend::default();
        let mut model = Model::new();
        model.load(&backend, &path).unwrap();

        assert_eq!(model.meshes().len(), 3);
        assert_eq!(model.textures().len(), 1);
        assert_eq!(model.meshes()[0].texture(), model.textures().handle("my tex.png"));
        assert!(model.meshes()[1].texture().is_none());
    }

    #[test]
    fn strips_alternate_winding_and_fans_share_the_first_index() {
        assert_eq!(
            triangle_faces(Mode::TriangleStrip, &[10, 11, 12, 13, 14]),
            vec![[10, 11, 12], [11, 13, 12], [12, 13, 14]]
        );
        assert_eq!(
            triangle_faces(Mode::TriangleFan, &[7, 1, 2, 3]),
            vec![[7, 1, 2], [7, 2, 3]]
        );
        assert!(triangle_faces(Mode::TriangleFan, &[]).is_empty());
        assert!(triangle_faces(Mode::TriangleStrip, &[0, 1]).is_empty());
    }

    #[test]
    fn strips_are_skipped_without_triangulation() {
        let importer = GltfImporter::new(ImportPreset {
            triangulate: false,
            single_index: true,
        });
        let scene = importer.import(&write_quad("no-triangulate")).unwrap();
        assert_eq!(scene.meshes.len(), 1);
    }

    #[test]
    fn texture_filenames_are_percent_decoded() {
        assert_eq!(texture_filename("my%20tex.png"), "my tex.png");
        assert_eq!(texture_filename("plain.png"), "plain.png");
    }

    #[test]
    fn missing_file_is_an_import_error() {
        let err = GltfImporter::default()
            .import(Path::new("no/such/scene.gltf"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Import { .. }));
    }
}
