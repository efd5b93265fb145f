//! Indexed block mesh draws.

use wgpu::util::DeviceExt;

use super::{BlockPipeline, CAMERA_GROUP, TEXTURE_GROUP};
use crate::error::{RenderError, RenderResult};
use crate::vertex::BlockVertex;

/// Vertex and index buffers for one block mesh.
#[derive(Debug)]
pub struct BlockMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl BlockMesh {
    /// Uploads a mesh.
    ///
    /// # Errors
    ///
    /// Returns `IndexCountOverflow` if `indices` is longer than a `u32`
    /// draw range. Nothing is uploaded in that case.
    pub fn new(
        device: &wgpu::Device,
        vertices: &[BlockVertex],
        indices: &[u32],
    ) -> RenderResult<Self> {
        let index_count = index_count(indices.len())?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Block Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Block Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        });

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count,
        })
    }

    /// Number of indices to draw.
    #[must_use]
    pub const fn index_count(&self) -> u32 {
        self.index_count
    }
}

fn index_count(len: usize) -> RenderResult<u32> {
    u32::try_from(len).map_err(|_| RenderError::IndexCountOverflow(len))
}

/// Draws block meshes with the block pipeline.
pub trait DrawBlocks<'a> {
    /// Binds the pipeline and both groups, then draws `mesh`.
    fn draw_blocks(
        &mut self,
        pipeline: &'a BlockPipeline,
        mesh: &'a BlockMesh,
        textures: &'a wgpu::BindGroup,
        camera: &'a wgpu::BindGroup,
    );
}

impl<'a, 'b> DrawBlocks<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_blocks(
        &mut self,
        pipeline: &'b BlockPipeline,
        mesh: &'b BlockMesh,
        textures: &'b wgpu::BindGroup,
        camera: &'b wgpu::BindGroup,
    ) {
        self.set_pipeline(pipeline.render_pipeline());
        self.set_bind_group(TEXTURE_GROUP, textures, &[]);
        self.set_bind_group(CAMERA_GROUP, camera, &[]);
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
