//! # Block Shading
//!
//! CPU model of the block pipeline's programmable stages. The WGSL shader
//! in [`crate::shaders`] is composed from the same tables, so both sides
//! agree on every face.
//!
//! ```text
//! BlockVertex ──transform_vertex──► VertexOutput ×3
//!                                        │ rasterize (interpolate)
//!                                        ▼
//!                                  FragmentInput
//!                                        │ classify normal
//!                                        ▼
//!                                  FaceOrientation ──atlas_coord──► uv
//!                                        │
//!                                        ▼
//!                         textures[texture_index].sample(uv) × (color, 1)
//! ```
//!
//! Every stage is a pure function of its inputs. Nothing here allocates,
//! logs or fails.

mod atlas;
mod face;
mod sampler;

pub use atlas::{
    atlas_coord, wrap, AtlasCoord, AxisTerm, FaceMapping, FACE_MAPPINGS, TILE_SCALE_U,
    TILE_SCALE_V,
};
pub use face::{Axis, FaceOrientation, Selector, Sign};
pub use sampler::{CpuTextureArray, TextureArray, TextureLayer};

use glam::{Vec3, Vec4};

use crate::camera::CameraUniform;
use crate::config::SamplerConfig;
use crate::vertex::{BlockVertex, TextureIndex};

/// Vertex stage output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    /// Clip-space position, `view_proj × (position, 1)`.
    pub clip_position: Vec4,
    /// Untransformed world position.
    pub world_position: Vec3,
    /// Forwarded normal.
    pub world_normal: Vec3,
    /// Forwarded tint.
    pub color: Vec3,
    /// Forwarded texture index (flat).
    pub texture_index: TextureIndex,
}

/// Fragment stage input after rasterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentInput {
    /// Interpolated world position.
    pub world_position: Vec3,
    /// Interpolated normal, not renormalized.
    pub world_normal: Vec3,
    /// Interpolated tint.
    pub color: Vec3,
    /// Provoking vertex's texture index.
    pub texture_index: TextureIndex,
}

impl FragmentInput {
    /// Interpolates a triangle's outputs at barycentric weights.
    ///
    /// Float attributes blend smoothly. `texture_index` is flat and comes
    /// from the first vertex, which is wgpu's provoking vertex.
    #[must_use]
    pub fn interpolate(vertices: &[VertexOutput; 3], barycentric: Vec3) -> Self {
        let [a, b, c] = vertices;
        let blend = |f: fn(&VertexOutput) -> Vec3| {
            f(a) * barycentric.x + f(b) * barycentric.y + f(c) * barycentric.z
        };

        Self {
            world_position: blend(|v| v.world_position),
            world_normal: blend(|v| v.world_normal),
            color: blend(|v| v.color),
            texture_index: a.texture_index,
        }
    }
}

impl From<VertexOutput> for FragmentInput {
    fn from(v: VertexOutput) -> Self {
        Self {
            world_position: v.world_position,
            world_normal: v.world_normal,
            color: v.color,
            texture_index: v.texture_index,
        }
    }
}

/// Vertex stage: projects the position and forwards the rest.
#[inline]
#[must_use]
pub fn transform_vertex(vertex: &BlockVertex, camera: &CameraUniform) -> VertexOutput {
    let world_position = vertex.position();
    VertexOutput {
        clip_position: camera.matrix() * world_position.extend(1.0),
        world_position,
        world_normal: Vec3::from_array(vertex.normal),
        color: Vec3::from_array(vertex.color),
        texture_index: vertex.texture_index,
    }
}

/// Fragment stage: classify, map into the atlas, sample and tint.
#[inline]
#[must_use]
pub fn shade_fragment(
    input: &FragmentInput,
    textures: &impl TextureArray,
    sampler: &SamplerConfig,
) -> Vec4 {
    let face = FaceOrientation::classify(input.world_normal);
    let uv = atlas_coord(face, input.world_position).uv();
    textures.sample(input.texture_index, uv, sampler) * input.color.extend(1.0)
}
