//! # Rendering Error Types
//!
//! Host-side failures only. The shading stages themselves never fail:
//! bad texture indices and degenerate normals resolve silently.

use thiserror::Error;

/// Errors raised while configuring or feeding the block pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {reason}")]
    ConfigRead {
        /// Path that was requested.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },

    /// The configuration file is not valid TOML for `RenderConfig`.
    #[error("failed to parse config: {0}")]
    ConfigParse(String),

    /// The configuration parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Ambient occlusion levels run from 0 (open) to 3 (fully enclosed).
    #[error("invalid occlusion level {0}, expected 0..=3")]
    InvalidOcclusionLevel(u8),

    /// Texel buffer length does not match the declared dimensions.
    #[error("texel data mismatch: expected {expected} bytes, got {actual}")]
    TexelDataMismatch {
        /// Bytes implied by width × height × 4.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },

    /// A texture layer needs at least one texel.
    #[error("texture layer has zero width or height")]
    EmptyTexture,

    /// The bind group must hold exactly as many views as the layout declares.
    #[error("texture count mismatch: layout declares {expected}, got {actual} views")]
    TextureCountMismatch {
        /// Count declared by the texture bind group layout.
        expected: u32,
        /// Views supplied.
        actual: usize,
    },

    /// The texture array already holds as many layers as a shader-side
    /// index can address.
    #[error("texture layer {0} does not fit a shader texture index")]
    TextureIndexOverflow(usize),

    /// A mesh has more indices than one indexed draw can address.
    #[error("mesh has {0} indices, more than a u32 draw range holds")]
    IndexCountOverflow(usize),
}

/// Result type for rendering setup.
pub type RenderResult<T> = Result<T, RenderError>;
