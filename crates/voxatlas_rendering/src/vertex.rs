//! Block vertex format.
//!
//! ```text
//! offset  0: position       Float32x3   @location(0)
//! offset 12: normal         Float32x3   @location(1)
//! offset 24: color          Float32x3   @location(2)
//! offset 36: texture_index  Sint32      @location(3)
//! stride 40
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::error::{RenderError, RenderResult};
use crate::shading::FaceOrientation;

/// Index into the bound texture array, as seen by the shader.
pub type TextureIndex = i32;

/// Grey tint per ambient occlusion level (0 = open, 3 = enclosed).
pub const OCCLUSION_TINTS: [f32; 4] = [1.0, 0.8, 0.6, 0.4];

/// Returns the tint for an ambient occlusion level.
///
/// # Errors
///
/// Returns `InvalidOcclusionLevel` for levels above 3.
pub fn occlusion_tint(level: u8) -> RenderResult<[f32; 3]> {
    OCCLUSION_TINTS
        .get(usize::from(level))
        .map(|&t| [t, t, t])
        .ok_or(RenderError::InvalidOcclusionLevel(level))
}

/// One block mesh vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BlockVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// World-space normal, not necessarily unit length.
    pub normal: [f32; 3],
    /// Tint in [0, 1].
    pub color: [f32; 3],
    /// Texture to sample for this face.
    pub texture_index: TextureIndex,
}

impl BlockVertex {
    /// Shader attribute layout.
    pub const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,  // position
        1 => Float32x3,  // normal
        2 => Float32x3,  // color
        3 => Sint32,     // texture_index
    ];

    /// Creates a vertex from raw attributes.
    #[must_use]
    pub const fn new(
        position: [f32; 3],
        normal: [f32; 3],
        color: [f32; 3],
        texture_index: TextureIndex,
    ) -> Self {
        Self {
            position,
            normal,
            color,
            texture_index,
        }
    }

    /// Creates a face vertex tinted by its ambient occlusion level.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOcclusionLevel` for levels above 3.
    pub fn occluded(
        position: Vec3,
        face: FaceOrientation,
        texture_index: TextureIndex,
        occlusion_level: u8,
    ) -> RenderResult<Self> {
        Ok(Self::new(
            position.to_array(),
            face.normal().to_array(),
            occlusion_tint(occlusion_level)?,
            texture_index,
        ))
    }

    /// Position as a vector.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Vertex buffer layout descriptor.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}
