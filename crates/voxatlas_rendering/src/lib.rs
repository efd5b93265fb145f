//! # VOXATLAS Rendering
//!
//! Textures voxel cube faces from a 4×3 cross-layout atlas without any
//! per-vertex UVs. The fragment stage classifies the interpolated normal
//! into one of six faces, projects the world position onto that face's
//! plane and samples the face's tile.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      BLOCK PIPELINE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  BlockVertex → transform_vertex → rasterize → FragmentInput  │
//! │       ↓                                          ↓           │
//! │  CameraUniform (group 1)        classify → atlas_coord → uv  │
//! │                                                  ↓           │
//! │                  texture array + sampler (group 0) → color   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`shading`] is the CPU model of the stages. [`shaders`] composes the
//! WGSL from the same face table and [`pipeline`] builds it on a device.
//!
//! ## Example
//!
//! ```rust
//! use glam::{Vec3, Vec4};
//! use voxatlas_rendering::shading::{shade_fragment, CpuTextureArray, FragmentInput, TextureLayer};
//! use voxatlas_rendering::SamplerConfig;
//!
//! let textures = CpuTextureArray::new(vec![TextureLayer::solid(Vec4::ONE)]);
//! let input = FragmentInput {
//!     world_position: Vec3::new(0.0, 2.5, 7.25),
//!     world_normal: Vec3::X,
//!     color: Vec3::splat(0.5),
//!     texture_index: 0,
//! };
//!
//! let color = shade_fragment(&input, &textures, &SamplerConfig::default());
//! assert_eq!(color, Vec4::new(0.5, 0.5, 0.5, 1.0));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod camera;
pub mod config;
pub mod culling;
pub mod error;
pub mod pipeline;
pub mod shaders;
pub mod shading;
pub mod vertex;

pub use camera::{Camera, CameraFeed, CameraUniform};
pub use config::{
    AddressMode, DepthFormat, FilterMode, PipelineConfig, RenderConfig, SamplerConfig,
    TextureConfig, MAX_TEXTURE_LAYERS,
};
pub use culling::{Aabb, Frustum, Plane};
pub use error::{RenderError, RenderResult};
pub use pipeline::{BlockMesh, BlockPipeline, DrawBlocks};
pub use shaders::block_shader;
pub use shading::{
    atlas_coord, shade_fragment, transform_vertex, wrap, AtlasCoord, FaceOrientation,
    FragmentInput, TextureArray, VertexOutput,
};
pub use vertex::{BlockVertex, TextureIndex};
