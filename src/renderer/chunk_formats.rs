//! Chunk mesh vertex formats
//!
//! The two layouts chunk meshes are uploaded in. Both are built once on first use and
//! live for the rest of the process, so `&'static` references double as registry keys.

use super::vertex_format_data::{AttributeKey, ScalarType, VertexFormat};
use crate::constants::{CHUNK_MESH_COMPACT_STRIDE, CHUNK_MESH_FULL_STRIDE};

/// Attributes carried by every chunk mesh vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkMeshAttribute {
    Position,
    Color,
    Texture,
    Light,
}

impl AttributeKey for ChunkMeshAttribute {
    fn name(self) -> &'static str {
        match self {
            ChunkMeshAttribute::Position => "POSITION",
            ChunkMeshAttribute::Color => "COLOR",
            ChunkMeshAttribute::Texture => "TEXTURE",
            ChunkMeshAttribute::Light => "LIGHT",
        }
    }
}

lazy_static::lazy_static! {
    /// Single-precision floats for position and texture coordinates
    pub static ref CHUNK_MESH_FULL: VertexFormat<ChunkMeshAttribute> =
        VertexFormat::builder(CHUNK_MESH_FULL_STRIDE)
            .label("chunk_mesh_full")
            .add_element(ChunkMeshAttribute::Position, 0, ScalarType::Float32, 3, false)
            .add_element(ChunkMeshAttribute::Color, 12, ScalarType::UnsignedByte, 4, true)
            .add_element(ChunkMeshAttribute::Texture, 16, ScalarType::Float32, 2, false)
            .add_element(ChunkMeshAttribute::Light, 24, ScalarType::UnsignedShort, 2, false)
            .build()
            .expect("chunk_mesh_full layout is valid");

    /// Normalized unsigned shorts for position and texture coordinates. Every texel of the
    /// block atlas, including its centering offset, maps exactly onto 16-bit fixed point.
    pub static ref CHUNK_MESH_COMPACT: VertexFormat<ChunkMeshAttribute> =
        VertexFormat::builder(CHUNK_MESH_COMPACT_STRIDE)
            .label("chunk_mesh_compact")
            .add_element(ChunkMeshAttribute::Position, 0, ScalarType::UnsignedShort, 3, true)
            .add_element(ChunkMeshAttribute::Color, 8, ScalarType::UnsignedByte, 4, true)
            .add_element(ChunkMeshAttribute::Texture, 12, ScalarType::UnsignedShort, 2, true)
            .add_element(ChunkMeshAttribute::Light, 16, ScalarType::UnsignedShort, 2, false)
            .build()
            .expect("chunk_mesh_compact layout is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_layout() {
        let format = &*CHUNK_MESH_FULL;
        assert_eq!(format.stride(), 32);

        let color = format.element(ChunkMeshAttribute::Color).unwrap();
        assert_eq!(color.byte_offset, 12);
        assert_eq!(color.scalar_type, ScalarType::UnsignedByte);
        assert_eq!(color.component_count, 4);
        assert!(color.normalized);

        let light = format.element(ChunkMeshAttribute::Light).unwrap();
        assert_eq!((light.byte_offset, light.end()), (24, 28));
        assert!(!light.normalized);
    }

    #[test]
    fn test_compact_layout() {
        let format = &*CHUNK_MESH_COMPACT;
        assert_eq!(format.stride(), 20);

        let position = format.element(ChunkMeshAttribute::Position).unwrap();
        assert_eq!((position.byte_offset, position.end()), (0, 6));
        assert!(position.normalized);

        let texture = format.element(ChunkMeshAttribute::Texture).unwrap();
        assert_eq!(texture.byte_offset, 12);
        assert_eq!(texture.scalar_type, ScalarType::UnsignedShort);
        assert!(texture.normalized);
    }

    #[test]
    fn test_reference_formats_are_distinct_and_stable() {
        assert_ne!(*CHUNK_MESH_FULL, *CHUNK_MESH_COMPACT);
        assert_eq!(CHUNK_MESH_FULL.id(), CHUNK_MESH_FULL.id());
        assert_eq!(ChunkMeshAttribute::Texture.name(), "TEXTURE");
    }
}
