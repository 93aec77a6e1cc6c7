use std::path::Path;

use crate::{
    config::ImportPreset,
    error::LoadError,
    scene::{Material, Mesh, Scene},
};

use super::SceneImporter;

/// Wavefront OBJ/MTL importer backed by `tobj`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjImporter {
    preset: ImportPreset,
}

impl ObjImporter {
    pub fn new(preset: ImportPreset) -> Self {
        Self { preset }
    }
}

impl SceneImporter for ObjImporter {
    fn import(&self, path: &Path) -> Result<Scene, LoadError> {
        let (models, materials) = tobj::load_obj(path, &self.preset.to_tobj())
            .map_err(|e| LoadError::import(path, e))?;

        let mut materials: Vec<Material> = match materials {
            Ok(materials) => materials.into_iter().map(convert_material).collect(),
            Err(e) => {
                // A broken or missing .mtl leaves the geometry usable, just untextured.
                log::warn!("Materials of {} could not be read: {}", path.display(), e);
                Vec::new()
            }
        };

        // Objects without `usemtl` get an untextured default material, appended last.
        let default_material = materials.len();
        let meshes: Vec<Mesh> = models
            .into_iter()
            .map(|model| convert_mesh(model.mesh, default_material))
            .collect();

        if meshes.iter().any(|m| m.material_index == default_material) {
            materials.push(Material {
                name: "default".into(),
                diffuse_textures: Vec::new(),
            });
        }

        Ok(Scene { meshes, materials })
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &["obj"]
    }
}

fn convert_material(material: tobj::Material) -> Material {
    Material {
        name: material.name,
        diffuse_textures: material.diffuse_texture.into_iter().collect(),
    }
}

fn convert_mesh(mesh: tobj::Mesh, default_material: usize) -> Mesh {
    if mesh.indices.len() % 3 != 0 {
        log::warn!(
            "OBJ mesh has {} indices, trailing indices are not a full triangle",
            mesh.indices.len()
        );
    }
    let faces = mesh
        .indices
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();

    let positions = (!mesh.positions.is_empty()).then(|| {
        mesh.positions
            .chunks_exact(3)
            .map(|p| [p[0], p[1], p[2]])
            .collect()
    });

    let uvs = (!mesh.texcoords.is_empty()).then(|| {
        mesh.texcoords
            .chunks_exact(2)
            .map(|t| [t[0], t[1]])
            .collect()
    });

    Mesh {
        faces,
        positions,
        uvs,
        material_index: mesh.material_id.unwrap_or(default_material),
    }
}
