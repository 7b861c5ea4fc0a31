// Hearth Chunk Formats - Data-Oriented vertex layouts for chunk meshes
//
// - Vertex formats describe where each attribute lives in a vertex record
// - Quad encoders pack one quad at a time into those records
// - The encoder registry wires each format instance to exactly one encoder
//
// Typical use:
// - load a MeshFormatConfig and pick a format with config::select_chunk_format
// - build the registry once with encoder_registry_operations::create_chunk_encoder_registry
// - fetch the encoder for the format and call encode_quads per mesh

pub mod config;
pub mod constants;
pub mod error;
pub mod renderer;

pub use config::{load_config_from_path, load_config_from_str, select_chunk_format, MeshFormatConfig};
pub use error::{MeshFormatError, MeshFormatResult, OptionExt};
pub use renderer::encoder_registry_operations::{
    create_chunk_encoder_registry, get_encoder, register_encoder,
};
pub use renderer::{
    encode_quads, AttributeKey, ChunkMeshAttribute, CompactQuadEncoder, EncoderRegistryData,
    FullPrecisionQuadEncoder, ModelQuad, ModelQuadView, QuadEncoder, QuadVertex, ScalarType,
    VertexFormat, CHUNK_MESH_COMPACT, CHUNK_MESH_FULL,
};
