//! Renderer Module - chunk mesh vertex formats and quad encoders
//!
//! - `*_data` modules hold plain data
//! - `*_operations` modules transform it with free functions
//! - encoders and formats themselves are immutable once built

pub mod chunk_formats;
pub mod encoder_registry_data;
pub mod encoder_registry_operations;
pub mod normalization;
pub mod quad_data;
pub mod quad_encoder;
pub mod vertex;
pub mod vertex_format_data;
pub mod vertex_format_operations;
pub mod vertex_layout_operations;
pub mod vertex_sink;

// Simple re-exports
pub use chunk_formats::{ChunkMeshAttribute, CHUNK_MESH_COMPACT, CHUNK_MESH_FULL};
pub use encoder_registry_data::{EncoderRegistration, EncoderRegistryData, SharedEncoderRegistry};
pub use normalization::{denormalize_float_as_short, normalize_short};
pub use quad_data::{ModelQuad, ModelQuadView, QuadVertex};
pub use quad_encoder::{encode_quads, CompactQuadEncoder, FullPrecisionQuadEncoder, QuadEncoder};
pub use vertex::{ChunkVertexCompact, ChunkVertexFull};
pub use vertex_format_data::{
    AttributeKey, FormatId, ScalarType, VertexAttribute, VertexFormat, VertexFormatBuilder,
};
pub use vertex_layout_operations::VertexBufferLayoutData;
pub use vertex_sink::VertexSink;
