//! Mesh format configuration
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! use_compact_vertex_format = true
//! validate_layouts = true
//! ```

use crate::error::{MeshFormatError, MeshFormatResult};
use crate::renderer::chunk_formats::{ChunkMeshAttribute, CHUNK_MESH_COMPACT, CHUNK_MESH_FULL};
use crate::renderer::vertex_format_data::{AttributeKey, VertexFormat, VertexFormatBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which vertex layout chunk meshes are built in, and how strictly layouts are checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshFormatConfig {
    /// Pack position and texture coordinates into 16-bit fixed point (20-byte vertices)
    /// instead of floats (32-byte vertices)
    pub use_compact_vertex_format: bool,
    /// Check element bounds and overlap when building formats through `build_format`
    pub validate_layouts: bool,
}

impl Default for MeshFormatConfig {
    fn default() -> Self {
        Self {
            use_compact_vertex_format: false,
            validate_layouts: true,
        }
    }
}

/// Parse a config from TOML text. Unknown keys are ignored with a warning.
pub fn load_config_from_str(text: &str) -> MeshFormatResult<MeshFormatConfig> {
    let table: toml::Table = toml::from_str(text)?;
    for key in table.keys() {
        if key != "use_compact_vertex_format" && key != "validate_layouts" {
            log::warn!("Ignoring unknown mesh format option '{}'", key);
        }
    }

    let config: MeshFormatConfig = toml::Value::Table(table).try_into()?;
    log::info!(
        "Loaded mesh format config (compact: {}, validate: {})",
        config.use_compact_vertex_format,
        config.validate_layouts
    );
    Ok(config)
}

/// Read and parse a config file
pub fn load_config_from_path(path: impl AsRef<Path>) -> MeshFormatResult<MeshFormatConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|error| MeshFormatError::IoError {
        path: path.display().to_string(),
        error: error.to_string(),
    })?;
    load_config_from_str(&text)
}

/// The chunk mesh format selected by `config`
pub fn select_chunk_format(
    config: &MeshFormatConfig,
) -> &'static VertexFormat<ChunkMeshAttribute> {
    if config.use_compact_vertex_format {
        &CHUNK_MESH_COMPACT
    } else {
        &CHUNK_MESH_FULL
    }
}

/// Finish a builder, validating only if the config asks for it
pub fn build_format<K: AttributeKey>(
    config: &MeshFormatConfig,
    builder: VertexFormatBuilder<K>,
) -> MeshFormatResult<VertexFormat<K>> {
    if config.validate_layouts {
        builder.build()
    } else {
        Ok(builder.build_unchecked())
    }
}
