//! Layout and codec constants shared by the chunk mesh formats

/// Every encoded primitive is a quad
pub const VERTICES_PER_QUAD: usize = 4;

/// Bytes per vertex in the full-precision chunk layout
pub const CHUNK_MESH_FULL_STRIDE: u32 = 32;

/// Bytes per vertex in the compact chunk layout
pub const CHUNK_MESH_COMPACT_STRIDE: u32 = 20;

/// Multiplier mapping a normalized float onto 16-bit fixed point.
/// 1.0 lands on 65536, one past u16::MAX, and wraps to 0.
pub const SHORT_DENORMALIZE_SCALE: f32 = 65536.0;
