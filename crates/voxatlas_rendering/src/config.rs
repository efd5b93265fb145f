//! Render configuration (`voxatlas.toml`).
//!
//! Loaded once at startup. Every section is optional; missing sections and
//! fields fall back to the defaults below.
//!
//! ```toml
//! [textures]
//! count = 16
//!
//! [sampler]
//! address_mode = "clamp_to_edge"
//! mag_filter = "nearest"
//! min_filter = "nearest"
//! mipmap_filter = "nearest"
//!
//! [pipeline]
//! cull_back_faces = true
//! depth_format = "depth32_float"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Upper bound on textures in the bound array.
pub const MAX_TEXTURE_LAYERS: u32 = 256;

/// Top-level render configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Texture array sizing.
    pub textures: TextureConfig,
    /// The single shared sampler.
    pub sampler: SamplerConfig,
    /// Fixed-function pipeline state.
    pub pipeline: PipelineConfig,
}

/// Texture array sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    /// Number of textures bound at set 0, binding 0.
    pub count: u32,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self { count: 16 }
    }
}

/// How coordinates outside [0, 1] are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressMode {
    /// Clamp to the edge texel.
    #[default]
    ClampToEdge,
    /// Tile the texture.
    Repeat,
    /// Tile the texture, flipping every other repetition.
    MirrorRepeat,
}

impl AddressMode {
    /// Returns the wgpu equivalent.
    #[must_use]
    pub const fn to_wgpu(self) -> wgpu::AddressMode {
        match self {
            Self::ClampToEdge => wgpu::AddressMode::ClampToEdge,
            Self::Repeat => wgpu::AddressMode::Repeat,
            Self::MirrorRepeat => wgpu::AddressMode::MirrorRepeat,
        }
    }
}

/// Texel filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Nearest texel (crisp pixel art).
    #[default]
    Nearest,
    /// Bilinear blend of the four nearest texels.
    Linear,
}

impl FilterMode {
    /// Returns the wgpu equivalent.
    #[must_use]
    pub const fn to_wgpu(self) -> wgpu::FilterMode {
        match self {
            Self::Nearest => wgpu::FilterMode::Nearest,
            Self::Linear => wgpu::FilterMode::Linear,
        }
    }
}

/// Sampler state shared by every texture in the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Addressing for u, v and w.
    pub address_mode: AddressMode,
    /// Magnification filter.
    pub mag_filter: FilterMode,
    /// Minification filter.
    pub min_filter: FilterMode,
    /// Mip level filter.
    pub mipmap_filter: FilterMode,
}

impl SamplerConfig {
    /// Returns a wgpu sampler descriptor for this state.
    #[must_use]
    pub fn descriptor(&self) -> wgpu::SamplerDescriptor<'static> {
        let address_mode = self.address_mode.to_wgpu();
        wgpu::SamplerDescriptor {
            label: Some("block texture sampler"),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: self.mag_filter.to_wgpu(),
            min_filter: self.min_filter.to_wgpu(),
            mipmap_filter: self.mipmap_filter.to_wgpu(),
            ..Default::default()
        }
    }
}

/// Depth attachment format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthFormat {
    /// 32-bit float depth.
    #[default]
    Depth32Float,
    /// 24-bit depth, driver-chosen precision.
    Depth24Plus,
}

impl DepthFormat {
    /// Returns the wgpu equivalent.
    #[must_use]
    pub const fn to_wgpu(self) -> wgpu::TextureFormat {
        match self {
            Self::Depth32Float => wgpu::TextureFormat::Depth32Float,
            Self::Depth24Plus => wgpu::TextureFormat::Depth24Plus,
        }
    }
}

/// Fixed-function pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Cull faces wound clockwise (front faces are CCW).
    pub cull_back_faces: bool,
    /// Depth attachment format.
    pub depth_format: DepthFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cull_back_faces: true,
            depth_format: DepthFormat::default(),
        }
    }
}

impl RenderConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed TOML and `InvalidConfig` for
    /// out-of-range values.
    pub fn from_toml_str(source: &str) -> RenderResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| RenderError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigRead` if the file cannot be read, otherwise the
    /// errors of [`RenderConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| RenderError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config = Self::from_toml_str(&source)?;
        tracing::info!(
            "Loaded render config from {}: {} textures, {:?} sampling",
            path.display(),
            config.textures.count,
            config.sampler.mag_filter,
        );
        Ok(config)
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` if serialization fails.
    pub fn to_toml_string(&self) -> RenderResult<String> {
        toml::to_string(self).map_err(|e| RenderError::ConfigParse(e.to_string()))
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the texture count is zero or above
    /// [`MAX_TEXTURE_LAYERS`].
    pub fn validate(&self) -> RenderResult<()> {
        let count = self.textures.count;
        if count == 0 || count > MAX_TEXTURE_LAYERS {
            return Err(RenderError::InvalidConfig(format!(
                "textures.count must be in 1..={MAX_TEXTURE_LAYERS}, got {count}"
            )));
        }
        Ok(())
    }
}
