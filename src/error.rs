//! Errors reported by [`Model::load`](crate::model::Model::load).
//!
//! Missing attributes (no UVs, no faces, no diffuse texture) are never errors;
//! they degrade into absent buffers on the mesh record.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The scene file could not be parsed, was not found or has an unsupported format.
    #[error("scene import of {path:?} failed: {reason}")]
    Import { path: PathBuf, reason: String },

    /// A texture referenced by a material could not be read or decoded.
    #[error("texture {filename:?} could not be loaded")]
    TextureLoad {
        filename: String,
        #[source]
        source: image::ImageError,
    },
}

impl LoadError {
    pub(crate) fn import(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Import {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
