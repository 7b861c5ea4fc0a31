//! Encoder Registry Operations
//!
//! Registration fails fast: a format is wired to exactly one encoder, and asking for an
//! encoder that was never wired is a configuration error, not something to recover from.

use super::chunk_formats::{CHUNK_MESH_COMPACT, CHUNK_MESH_FULL};
use super::encoder_registry_data::{
    EncoderRegistration, EncoderRegistryData, SharedEncoderRegistry,
};
use super::quad_encoder::{CompactQuadEncoder, FullPrecisionQuadEncoder, QuadEncoder};
use super::vertex_format_data::{AttributeKey, FormatId, VertexFormat};
use crate::error::{describe_format, MeshFormatError, MeshFormatResult, OptionExt};
use parking_lot::RwLock;
use std::sync::Arc;

/// Create an empty encoder registry
pub fn create_encoder_registry() -> EncoderRegistryData {
    EncoderRegistryData::default()
}

/// Create a registry with both chunk mesh formats wired to their encoders
pub fn create_chunk_encoder_registry() -> MeshFormatResult<EncoderRegistryData> {
    let mut data = create_encoder_registry();
    register_encoder(&mut data, &*CHUNK_MESH_FULL, Arc::new(FullPrecisionQuadEncoder))?;
    register_encoder(&mut data, &*CHUNK_MESH_COMPACT, Arc::new(CompactQuadEncoder))?;

    log::info!(
        "Chunk encoder registry ready with {} formats",
        encoder_count(&data)
    );
    for (id, label, stride) in registered_formats(&data) {
        log::debug!("  - {} ({}): {} bytes per vertex", label, id, stride);
    }
    Ok(data)
}

/// Wrap a populated registry for late registration from other threads
pub fn into_shared(data: EncoderRegistryData) -> SharedEncoderRegistry {
    Arc::new(RwLock::new(data))
}

/// Wire `format` to `encoder`. An existing mapping is never replaced.
pub fn register_encoder<K: AttributeKey>(
    data: &mut EncoderRegistryData,
    format: &VertexFormat<K>,
    encoder: Arc<dyn QuadEncoder>,
) -> MeshFormatResult<()> {
    if data.encoders.contains_key(&format.id()) {
        log::error!("Encoder already registered for format {}", format);
        return Err(MeshFormatError::DuplicateEncoder {
            format: describe_format(format.label(), format.id()),
        });
    }

    data.encoders.insert(
        format.id(),
        EncoderRegistration {
            format_label: format.label(),
            stride: format.stride(),
            encoder,
        },
    );

    log::info!("Registered quad encoder for format {}", format);
    Ok(())
}

/// Get the encoder wired to `format`. Every call returns the same instance.
pub fn get_encoder<K: AttributeKey>(
    data: &EncoderRegistryData,
    format: &VertexFormat<K>,
) -> MeshFormatResult<Arc<dyn QuadEncoder>> {
    let registration = data.encoders.get(&format.id()).ok_or_format(|| {
        log::error!("No encoder exists for format {}", format);
        MeshFormatError::MissingEncoder {
            format: describe_format(format.label(), format.id()),
        }
    })?;

    Ok(Arc::clone(&registration.encoder))
}

/// Check if `format` has an encoder
pub fn is_registered<K: AttributeKey>(data: &EncoderRegistryData, format: &VertexFormat<K>) -> bool {
    data.encoders.contains_key(&format.id())
}

/// Number of wired formats
pub fn encoder_count(data: &EncoderRegistryData) -> usize {
    data.encoders.len()
}

/// Every wired format as (id, label, stride), ordered by format id
pub fn registered_formats(data: &EncoderRegistryData) -> Vec<(FormatId, &'static str, u32)> {
    let mut formats: Vec<_> = data
        .encoders
        .iter()
        .map(|(id, registration)| (*id, registration.format_label, registration.stride))
        .collect();
    formats.sort_by_key(|(id, _, _)| *id);
    formats
}

/// `register_encoder` through a shared handle
pub fn register_shared<K: AttributeKey>(
    shared: &SharedEncoderRegistry,
    format: &VertexFormat<K>,
    encoder: Arc<dyn QuadEncoder>,
) -> MeshFormatResult<()> {
    register_encoder(&mut shared.write(), format, encoder)
}

/// `get_encoder` through a shared handle
pub fn get_shared<K: AttributeKey>(
    shared: &SharedEncoderRegistry,
    format: &VertexFormat<K>,
) -> MeshFormatResult<Arc<dyn QuadEncoder>> {
    get_encoder(&shared.read(), format)
}
