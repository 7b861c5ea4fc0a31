//! Quad Data
//!
//! The read-only view encoders consume, plus a plain owned quad for mesh builders that
//! don't already have their own quad storage.

use crate::constants::VERTICES_PER_QUAD;

/// Read access to the four vertices of a quad. Indices are 0..4.
pub trait ModelQuadView {
    fn x(&self, i: usize) -> f32;
    fn y(&self, i: usize) -> f32;
    fn z(&self, i: usize) -> f32;
    /// Packed 32-bit color, written to the buffer unchanged
    fn color(&self, i: usize) -> u32;
    fn tex_u(&self, i: usize) -> f32;
    fn tex_v(&self, i: usize) -> f32;
    /// Packed light, two 16-bit channels (block light low, sky light high)
    fn light(&self, i: usize) -> u32;
}

/// One corner of a `ModelQuad`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuadVertex {
    pub position: [f32; 3],
    pub color: u32,
    pub tex: [f32; 2],
    pub light: u32,
}

/// Owned quad
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelQuad {
    pub vertices: [QuadVertex; VERTICES_PER_QUAD],
}

impl ModelQuadView for ModelQuad {
    fn x(&self, i: usize) -> f32 {
        self.vertices[i].position[0]
    }

    fn y(&self, i: usize) -> f32 {
        self.vertices[i].position[1]
    }

    fn z(&self, i: usize) -> f32 {
        self.vertices[i].position[2]
    }

    fn color(&self, i: usize) -> u32 {
        self.vertices[i].color
    }

    fn tex_u(&self, i: usize) -> f32 {
        self.vertices[i].tex[0]
    }

    fn tex_v(&self, i: usize) -> f32 {
        self.vertices[i].tex[1]
    }

    fn light(&self, i: usize) -> u32 {
        self.vertices[i].light
    }
}
