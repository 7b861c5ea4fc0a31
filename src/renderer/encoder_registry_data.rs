//! Encoder Registry Data
//!
//! NO METHODS. Just data.
//! All transformations happen in encoder_registry_operations.rs

use super::quad_encoder::QuadEncoder;
use super::vertex_format_data::FormatId;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A registered encoder and the format it was wired to
#[derive(Clone)]
pub struct EncoderRegistration {
    pub format_label: &'static str,
    pub stride: u32,
    pub encoder: Arc<dyn QuadEncoder>,
}

/// Format instance to quad encoder mapping, populated at startup and read afterwards
#[derive(Clone, Default)]
pub struct EncoderRegistryData {
    pub encoders: FxHashMap<FormatId, EncoderRegistration>,
}

/// Registry handle for callers that keep registering after encoding threads have started
pub type SharedEncoderRegistry = Arc<RwLock<EncoderRegistryData>>;
