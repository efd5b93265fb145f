//! Bind group layout declarations.
//!
//! ```text
//! @group(0) @binding(0)  binding_array<texture_2d<f32>, N>   fragment
//! @group(0) @binding(1)  sampler (filtering)                 fragment
//! @group(1) @binding(0)  CameraUniform (64 bytes)            vertex
//! ```

use std::num::NonZeroU32;

use crate::camera::CameraUniform;
use crate::config::RenderConfig;

/// Group holding the texture array and sampler.
pub const TEXTURE_GROUP: u32 = 0;

/// Group holding the camera uniform.
pub const CAMERA_GROUP: u32 = 1;

/// Texture array binding within [`TEXTURE_GROUP`].
pub const TEXTURE_ARRAY_BINDING: u32 = 0;

/// Sampler binding within [`TEXTURE_GROUP`].
pub const SAMPLER_BINDING: u32 = 1;

/// Camera uniform binding within [`CAMERA_GROUP`].
pub const CAMERA_BINDING: u32 = 0;

/// Layout entries for the texture group.
///
/// A `count` of zero is treated as one.
#[must_use]
pub fn texture_layout_entries(count: u32) -> [wgpu::BindGroupLayoutEntry; 2] {
    [
        wgpu::BindGroupLayoutEntry {
            binding: TEXTURE_ARRAY_BINDING,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: Some(NonZeroU32::new(count).unwrap_or(NonZeroU32::MIN)),
        },
        wgpu::BindGroupLayoutEntry {
            binding: SAMPLER_BINDING,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        },
    ]
}

/// Layout entries for the camera group.
#[must_use]
pub fn camera_layout_entries() -> [wgpu::BindGroupLayoutEntry; 1] {
    [wgpu::BindGroupLayoutEntry {
        binding: CAMERA_BINDING,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<CameraUniform>() as u64),
        },
        count: None,
    }]
}

/// Device features the block pipeline cannot run without.
#[must_use]
pub fn required_features() -> wgpu::Features {
    wgpu::Features::TEXTURE_BINDING_ARRAY
        | wgpu::Features::SAMPLED_TEXTURE_AND_STORAGE_BUFFER_ARRAY_NON_UNIFORM_INDEXING
}

/// Default limits, raised to fit the configured texture array.
#[must_use]
pub fn required_limits(config: &RenderConfig) -> wgpu::Limits {
    let defaults = wgpu::Limits::default();
    wgpu::Limits {
        max_sampled_textures_per_shader_stage: defaults
            .max_sampled_textures_per_shader_stage
            .max(config.textures.count),
        ..defaults
    }
}
