//! Texture Resolver: discovers every diffuse texture a scene references,
//! decodes each file once and uploads it to the GPU.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use crate::{error::LoadError, gpu::GpuBackend, scene::Scene};

/// Index of an uploaded texture inside a [`TextureSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(usize);

/// Uploaded textures of one model, keyed by the file name used in the material data.
#[derive(Debug)]
pub struct TextureSet<T> {
    names: BTreeMap<String, TextureHandle>,
    textures: Vec<T>,
}

impl<T> TextureSet<T> {
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
            textures: Vec::new(),
        }
    }

    pub fn handle(&self, filename: &str) -> Option<TextureHandle> {
        self.names.get(filename).copied()
    }

    pub fn get(&self, handle: TextureHandle) -> Option<&T> {
        self.textures.get(handle.0)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl<T> Default for TextureSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Every diffuse texture file name referenced by any material, each once.
///
/// All diffuse references are collected, not only the first one per material,
/// so secondary textures are decoded and uploaded as well.
pub fn collect_texture_names(scene: &Scene) -> BTreeSet<String> {
    scene
        .materials
        .iter()
        .flat_map(|material| material.diffuse_textures.iter().cloned())
        .collect()
}

/// Read an image file and convert it to bottom-left origin RGBA8.
pub fn decode_texture(path: &Path) -> Result<image::RgbaImage, image::ImageError> {
    let img = image::open(path)?;
    // Decoded rows start at the top, sampling expects the first row at the bottom.
    Ok(img.flipv().to_rgba8())
}

/// Decode and upload all textures of `scene`, looking files up next to the model.
///
/// The first texture that cannot be decoded aborts the whole call. Textures
/// uploaded before the failure are dropped, so nothing from a failed call
/// stays allocated.
pub fn resolve_textures<B: GpuBackend>(
    backend: &B,
    scene: &Scene,
    model_directory: &Path,
) -> Result<TextureSet<B::Texture>, LoadError> {
    let filenames = collect_texture_names(scene);
    log::info!("Total number of textures is {}", filenames.len());

    let mut set = TextureSet::empty();
    for filename in filenames {
        let full_path = model_directory.join(&filename);
        log::info!("Loading texture {}", full_path.display());

        let image = decode_texture(&full_path).map_err(|source| {
            log::error!("Couldn't load texture {}: {}", filename, source);
            LoadError::TextureLoad {
                filename: filename.clone(),
                source,
            }
        })?;

        let handle = TextureHandle(set.textures.len());
        set.textures.push(backend.create_texture(&filename, &image));
        set.names.insert(filename, handle);
    }
    Ok(set)
}
