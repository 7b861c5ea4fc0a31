//! Vertex record structs for the chunk mesh formats
//!
//! `#[repr(C)]` mirrors of one encoded vertex, used to read encoded buffers back.

use crate::constants::{CHUNK_MESH_COMPACT_STRIDE, CHUNK_MESH_FULL_STRIDE, VERTICES_PER_QUAD};
use static_assertions::const_assert_eq;
use std::mem::{offset_of, size_of};

/// One vertex in the `CHUNK_MESH_FULL` layout
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ChunkVertexFull {
    pub position: [f32; 3],
    pub color: u32,
    pub tex: [f32; 2],
    pub light: u32,
    pub _padding: u32,
}

/// One vertex in the `CHUNK_MESH_COMPACT` layout
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ChunkVertexCompact {
    pub position: [u16; 3],
    pub _padding: u16,
    pub color: u32,
    pub tex: [u16; 2],
    pub light: u32,
}

const_assert_eq!(size_of::<ChunkVertexFull>(), CHUNK_MESH_FULL_STRIDE as usize);
const_assert_eq!(offset_of!(ChunkVertexFull, color), 12);
const_assert_eq!(offset_of!(ChunkVertexFull, tex), 16);
const_assert_eq!(offset_of!(ChunkVertexFull, light), 24);

const_assert_eq!(size_of::<ChunkVertexCompact>(), CHUNK_MESH_COMPACT_STRIDE as usize);
const_assert_eq!(offset_of!(ChunkVertexCompact, color), 8);
const_assert_eq!(offset_of!(ChunkVertexCompact, tex), 12);
const_assert_eq!(offset_of!(ChunkVertexCompact, light), 16);

/// Read the four vertices of a full-precision quad starting at `position`.
/// Encoded buffers are little-endian, so this matches the encoder on little-endian hosts.
pub fn decode_full_quad(bytes: &[u8], position: usize) -> [ChunkVertexFull; VERTICES_PER_QUAD] {
    decode_quad(bytes, position)
}

/// Read the four vertices of a compact quad starting at `position`
pub fn decode_compact_quad(
    bytes: &[u8],
    position: usize,
) -> [ChunkVertexCompact; VERTICES_PER_QUAD] {
    decode_quad(bytes, position)
}

fn decode_quad<V: bytemuck::Pod>(bytes: &[u8], position: usize) -> [V; VERTICES_PER_QUAD] {
    let stride = size_of::<V>();
    std::array::from_fn(|i| {
        let start = position + i * stride;
        bytemuck::pod_read_unaligned(&bytes[start..start + stride])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reads_unaligned_positions() {
        let vertex = ChunkVertexCompact {
            position: [1, 2, 3],
            _padding: 0,
            color: 0xAABBCCDD,
            tex: [4, 5],
            light: 6,
        };
        let mut bytes = vec![0u8; 3];
        for _ in 0..VERTICES_PER_QUAD {
            bytes.extend_from_slice(bytemuck::bytes_of(&vertex));
        }

        let decoded = decode_compact_quad(&bytes, 3);
        assert!(decoded.iter().all(|v| *v == vertex));
    }
}
