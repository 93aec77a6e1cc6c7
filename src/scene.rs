//! Owned scene representation produced by a [`SceneImporter`](crate::importers::SceneImporter).
//!
//! A [`Scene`] is a plain value: it holds no references into the parsing
//! library and stays valid after the importer that produced it is gone.

/// A parsed model file: meshes and materials in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
}

impl Scene {
    /// Material referenced by `mesh`, if the index is in range.
    pub fn material_of(&self, mesh: &Mesh) -> Option<&Material> {
        self.materials.get(mesh.material_index)
    }
}

/// One drawable part of a scene.
///
/// `positions` and `uvs` are `None` when the source did not supply them;
/// an empty `faces` list is a valid degenerate mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub faces: Vec<[u32; 3]>,
    pub positions: Option<Vec<[f32; 3]>>,
    /// First UV channel only.
    pub uvs: Option<Vec<[f32; 2]>>,
    pub material_index: usize,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.as_ref().map_or(0, Vec::len)
    }
}

/// A named bundle of texture references. Only the diffuse channel is used.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Material {
    pub name: String,
    /// Diffuse texture file names, relative to the model's directory.
    pub diffuse_textures: Vec<String>,
}

impl Material {
    /// The texture a mesh using this material is drawn with.
    pub fn diffuse(&self) -> Option<&str> {
        self.diffuse_textures.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_diffuse_texture_is_authoritative() {
        let material = Material {
            name: "wood".into(),
            diffuse_textures: vec!["wood.png".into(), "wood_alt.png".into()],
        };
        assert_eq!(material.diffuse(), Some("wood.png"));
        assert_eq!(Material::default().diffuse(), None);
    }

    #[test]
    fn out_of_range_material_index_yields_none() {
        let scene = Scene {
            meshes: vec![Mesh {
                material_index: 3,
                ..Default::default()
            }],
            materials: vec![Material::default()],
        };
        assert!(scene.material_of(&scene.meshes[0]).is_none());
    }
}
