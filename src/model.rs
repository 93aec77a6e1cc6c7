//! The Model Object: owns everything one loaded model file put on the GPU.
//!
//! A [`Model`] starts empty. [`Model::load`] imports a file, uploads its
//! textures and meshes and marks the model loaded; [`Model::unload`] releases
//! all of it again. Rendering is provided by [`DrawModel`](crate::render::DrawModel).
//!
//! All calls must happen on the thread that owns the GPU context. Loading is
//! synchronous and cannot be cancelled.

use std::path::Path;

use crate::{
    config::ModelConfig,
    error::LoadError,
    gpu::GpuBackend,
    importers::{FileImporter, SceneImporter},
    resources::{MeshRecord, TextureHandle, TextureSet, build_mesh_record, resolve_textures},
};

pub struct Model<B: GpuBackend> {
    importer: Box<dyn SceneImporter>,
    meshes: Vec<MeshRecord<B::Buffer>>,
    textures: TextureSet<B::Texture>,
    loaded: bool,
}

impl<B: GpuBackend> Model<B> {
    /// An unloaded model that imports files with the real-time preset.
    pub fn new() -> Self {
        Self::from_config(&ModelConfig::default())
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::with_importer(FileImporter::new(config.preset))
    }

    pub fn with_importer(importer: impl SceneImporter + 'static) -> Self {
        Self {
            importer: Box::new(importer),
            meshes: Vec::new(),
            textures: TextureSet::empty(),
            loaded: false,
        }
    }

    /// Load the model at `path`, replacing whatever was loaded before.
    ///
    /// The previous model is released first, so after a failed reload nothing
    /// is loaded. Textures are looked up relative to the model's directory.
    pub fn load(&mut self, backend: &B, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        self.unload();

        let scene = self.importer.import(path).inspect_err(|e| {
            log::error!("{e}");
        })?;

        let model_directory = path.parent().unwrap_or_else(|| Path::new(""));
        let textures = resolve_textures(backend, &scene, model_directory).inspect_err(|_| {
            log::error!("Unable to load textures of {}", path.display());
        })?;
        log::info!("Loaded textures successfully");

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let meshes: Vec<_> = scene
            .meshes
            .iter()
            .enumerate()
            .map(|(n, mesh)| {
                build_mesh_record(
                    backend,
                    &format!("{name} mesh {n}"),
                    mesh,
                    scene.material_of(mesh),
                    &textures,
                )
            })
            .collect();
        log::info!("Loaded {} meshes of {} successfully", meshes.len(), name);

        self.meshes = meshes;
        self.textures = textures;
        self.loaded = true;
        Ok(())
    }

    /// Release all buffers and textures. Does nothing when nothing is loaded.
    pub fn unload(&mut self) {
        if !self.loaded {
            return;
        }
        self.meshes.clear();
        self.textures = TextureSet::empty();
        self.loaded = false;
        log::info!("Deleted model");
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Mesh records in scene order.
    pub fn meshes(&self) -> &[MeshRecord<B::Buffer>] {
        &self.meshes
    }

    pub fn textures(&self) -> &TextureSet<B::Texture> {
        &self.textures
    }

    pub fn texture(&self, handle: TextureHandle) -> Option<&B::Texture> {
        self.textures.get(handle)
    }
}

impl<B: GpuBackend> Default for Model<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: GpuBackend> Drop for Model<B> {
    fn drop(&mut self) {
        self.unload();
    }
}
