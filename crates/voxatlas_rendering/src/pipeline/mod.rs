//! # Block Render Pipeline
//!
//! GPU side of the block shading stages: bind group layouts, the composed
//! block shader and the render pipeline that ties them to
//! [`BlockVertex`](crate::vertex::BlockVertex).
//!
//! The device must be created with [`required_features`] and
//! [`required_limits`].

mod bindings;
mod draw;

pub use bindings::{
    camera_layout_entries, required_features, required_limits, texture_layout_entries,
    CAMERA_BINDING, CAMERA_GROUP, SAMPLER_BINDING, TEXTURE_ARRAY_BINDING, TEXTURE_GROUP,
};
pub use draw::{BlockMesh, DrawBlocks};

use crate::config::{RenderConfig, SamplerConfig};
use crate::error::{RenderError, RenderResult};
use crate::shaders::{block_shader, FRAGMENT_ENTRY, VERTEX_ENTRY};
use crate::vertex::BlockVertex;

/// Render pipeline plus the layouts its bind groups must match.
#[derive(Debug)]
pub struct BlockPipeline {
    render_pipeline: wgpu::RenderPipeline,
    texture_layout: wgpu::BindGroupLayout,
    camera_layout: wgpu::BindGroupLayout,
    texture_count: u32,
    depth_format: wgpu::TextureFormat,
}

impl BlockPipeline {
    /// Builds layouts, shader module and render pipeline.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        config: &RenderConfig,
    ) -> Self {
        let texture_count = config.textures.count.max(1);
        let depth_format = config.pipeline.depth_format.to_wgpu();

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Block Texture Layout"),
            entries: &texture_layout_entries(texture_count),
        });
        let camera_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Block Camera Layout"),
            entries: &camera_layout_entries(),
        });

        // Order must follow TEXTURE_GROUP, CAMERA_GROUP.
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Block Pipeline Layout"),
            bind_group_layouts: &[&texture_layout, &camera_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Block Shader"),
            source: wgpu::ShaderSource::Wgsl(block_shader().into()),
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Block Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: VERTEX_ENTRY,
                buffers: &[BlockVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: FRAGMENT_ENTRY,
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: primitive_state(config),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        tracing::debug!(
            "Created block pipeline: {} textures, {:?} color, {:?} depth",
            texture_count,
            color_format,
            depth_format,
        );

        Self {
            render_pipeline,
            texture_layout,
            camera_layout,
            texture_count,
            depth_format,
        }
    }

    /// The render pipeline.
    #[must_use]
    pub fn render_pipeline(&self) -> &wgpu::RenderPipeline {
        &self.render_pipeline
    }

    /// Layout of [`TEXTURE_GROUP`].
    #[must_use]
    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }

    /// Layout of [`CAMERA_GROUP`].
    #[must_use]
    pub fn camera_layout(&self) -> &wgpu::BindGroupLayout {
        &self.camera_layout
    }

    /// Number of texture views the texture group expects.
    #[must_use]
    pub const fn texture_count(&self) -> u32 {
        self.texture_count
    }

    /// Depth attachment format the pipeline was built for.
    #[must_use]
    pub const fn depth_format(&self) -> wgpu::TextureFormat {
        self.depth_format
    }

    /// Creates the shared sampler.
    #[must_use]
    pub fn create_sampler(device: &wgpu::Device, sampler: &SamplerConfig) -> wgpu::Sampler {
        device.create_sampler(&sampler.descriptor())
    }

    /// Binds the texture array and sampler.
    ///
    /// # Errors
    ///
    /// Returns `TextureCountMismatch` unless exactly
    /// [`texture_count`](Self::texture_count) views are given.
    pub fn texture_bind_group(
        &self,
        device: &wgpu::Device,
        views: &[&wgpu::TextureView],
        sampler: &wgpu::Sampler,
    ) -> RenderResult<wgpu::BindGroup> {
        check_view_count(self.texture_count, views.len())?;

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Block Texture Bind Group"),
            layout: &self.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: TEXTURE_ARRAY_BINDING,
                    resource: wgpu::BindingResource::TextureViewArray(views),
                },
                wgpu::BindGroupEntry {
                    binding: SAMPLER_BINDING,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        tracing::debug!("Created texture bind group with {} views", views.len());
        Ok(bind_group)
    }

    /// Binds the camera uniform buffer.
    #[must_use]
    pub fn camera_bind_group(&self, device: &wgpu::Device, buffer: &wgpu::Buffer) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Block Camera Bind Group"),
            layout: &self.camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: CAMERA_BINDING,
                resource: buffer.as_entire_binding(),
            }],
        })
    }
}

fn primitive_state(config: &RenderConfig) -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: config.pipeline.cull_back_faces.then_some(wgpu::Face::Back),
        ..Default::default()
    }
}

fn check_view_count(expected: u32, actual: usize) -> RenderResult<()> {
    if usize::try_from(expected).ok() != Some(actual) {
        return Err(RenderError::TextureCountMismatch { expected, actual });
    }
    Ok(())
}
