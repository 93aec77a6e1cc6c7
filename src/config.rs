//! Load-time settings.

/// Processing applied by the importers before a scene reaches the builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportPreset {
    /// Split polygons into triangles.
    pub triangulate: bool,
    /// Use one index per vertex for positions, UVs and normals.
    pub single_index: bool,
}

impl ImportPreset {
    /// Triangulated, single-indexed geometry suitable for indexed drawing.
    pub const REALTIME_QUALITY: Self = Self {
        triangulate: true,
        single_index: true,
    };

    pub(crate) fn to_tobj(self) -> tobj::LoadOptions {
        tobj::LoadOptions {
            triangulate: self.triangulate,
            single_index: self.single_index,
            ..Default::default()
        }
    }
}

impl Default for ImportPreset {
    fn default() -> Self {
        Self::REALTIME_QUALITY
    }
}

/// Sampling filter used for minification and magnification of model textures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureFilter {
    #[default]
    Linear,
    Nearest,
}

impl From<TextureFilter> for wgpu::FilterMode {
    fn from(filter: TextureFilter) -> Self {
        match filter {
            TextureFilter::Linear => wgpu::FilterMode::Linear,
            TextureFilter::Nearest => wgpu::FilterMode::Nearest,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModelConfig {
    pub preset: ImportPreset,
    pub texture_filter: TextureFilter,
}
