//! Vertex types for 2D sprite rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::Aabb;

/// Textured 2D vertex, position already in clip space
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

/// Vertices per sprite quad (two triangles)
pub const QUAD_VERTICES: usize = 6;

impl SpriteVertex {
    pub const fn new(position: [f32; 2], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Convert world coordinates (origin top-left, y down) to NDC
pub fn world_to_ndc(p: Vec2, bounds: Vec2) -> [f32; 2] {
    [p.x / bounds.x * 2.0 - 1.0, 1.0 - p.y / bounds.y * 2.0]
}

/// Two triangles covering `rect`, with the texture's top-left at the rect's
/// top-left
pub fn quad(rect: Aabb, bounds: Vec2) -> [SpriteVertex; QUAD_VERTICES] {
    let tl = world_to_ndc(rect.min, bounds);
    let br = world_to_ndc(rect.max, bounds);
    let tr = [br[0], tl[1]];
    let bl = [tl[0], br[1]];

    [
        SpriteVertex::new(tl, [0.0, 0.0]),
        SpriteVertex::new(bl, [0.0, 1.0]),
        SpriteVertex::new(br, [1.0, 1.0]),
        SpriteVertex::new(tl, [0.0, 0.0]),
        SpriteVertex::new(br, [1.0, 1.0]),
        SpriteVertex::new(tr, [1.0, 0.0]),
    ]
}
