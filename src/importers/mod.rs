//! Scene importers.
//!
//! Every importer turns a model file into an owned [`Scene`]. The rest of the
//! crate only sees the [`SceneImporter`] trait, so parsing libraries can be
//! swapped without touching the texture or mesh builders.

use std::path::Path;

use crate::{config::ImportPreset, error::LoadError, scene::Scene};

pub mod gltf_importer;
pub mod obj_importer;

pub use gltf_importer::GltfImporter;
pub use obj_importer::ObjImporter;

pub trait SceneImporter {
    /// Parse `path` into a scene. On error no partial scene is returned.
    fn import(&self, path: &Path) -> Result<Scene, LoadError>;

    /// Lower-case file extensions this importer understands.
    fn supported_extensions(&self) -> &'static [&'static str];
}

/// Picks an importer from the file extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileImporter {
    obj: ObjImporter,
    gltf: GltfImporter,
}

impl FileImporter {
    pub fn new(preset: ImportPreset) -> Self {
        Self {
            obj: ObjImporter::new(preset),
            gltf: GltfImporter::new(preset),
        }
    }

    fn importer_for(&self, extension: &str) -> Option<&dyn SceneImporter> {
        let candidates: [&dyn SceneImporter; 2] = [&self.obj, &self.gltf];
        candidates
            .into_iter()
            .find(|importer| importer.supported_extensions().contains(&extension))
    }
}

impl SceneImporter for FileImporter {
    fn import(&self, path: &Path) -> Result<Scene, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| LoadError::import(path, "cannot determine file format"))?;

        let importer = self
            .importer_for(&extension)
            .ok_or_else(|| LoadError::import(path, format!("unsupported format .{extension}")))?;

        log::info!("Scene will be imported now: {}", path.display());
        let scene = importer.import(path)?;
        log::info!(
            "Imported {} successfully ({} meshes, {} materials)",
            path.display(),
            scene.meshes.len(),
            scene.materials.len()
        );
        Ok(scene)
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &["obj", "gltf", "glb"]
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    /// Hands out whatever scene is currently stored; `None` simulates a corrupt file.
    #[derive(Clone, Default)]
    pub(crate) struct StaticImporter(pub(crate) Rc<RefCell<Option<Scene>>>);

    impl StaticImporter {
        pub(crate) fn new(scene: Scene) -> Self {
            Self(Rc::new(RefCell::new(Some(scene))))
        }

        pub(crate) fn replace(&self, scene: Option<Scene>) {
            *self.0.borrow_mut() = scene;
        }
    }

    impl SceneImporter for StaticImporter {
        fn import(&self, path: &Path) -> Result<Scene, LoadError> {
            self.0
                .borrow()
                .clone()
                .ok_or_else(|| LoadError::import(path, "corrupt scene"))
        }

        fn supported_extensions(&self) -> &'static [&'static str] {
            &[]
        }
    }
}
