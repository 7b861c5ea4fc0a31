//! Error handling for chunk mesh vertex formats
//!
//! Every error here is a configuration error raised at startup: a bad layout, a format
//! wired twice, a format never wired, or an unreadable config. Encoding a quad never fails.

use crate::renderer::vertex_format_data::{FormatId, ScalarType};

/// Main error type for vertex format construction, encoder registration and configuration
#[derive(Debug, thiserror::Error)]
pub enum MeshFormatError {
    // Registry Errors
    #[error("Encoder already registered for format: {format}")]
    DuplicateEncoder { format: String },

    #[error("No encoder exists for format: {format}")]
    MissingEncoder { format: String },

    // Layout Errors
    #[error("Vertex stride must be positive")]
    ZeroStride,

    #[error("Attribute {key} has {count} components (expected 1-4)")]
    InvalidComponentCount { key: &'static str, count: u8 },

    #[error("Attribute {key} spans bytes {start}..{end} but the stride is {stride}")]
    AttributeOutOfBounds {
        key: &'static str,
        start: u32,
        end: u64,
        stride: u32,
    },

    #[error("Attribute {key} overlaps attribute {other}")]
    AttributeOverlap {
        key: &'static str,
        other: &'static str,
    },

    #[error("Attribute {key} was added twice")]
    DuplicateAttribute { key: &'static str },

    // Binding Errors
    #[error("Attribute {key} ({count}x{scalar:?}, normalized: {normalized}) has no GPU vertex format")]
    UnsupportedAttribute {
        key: &'static str,
        scalar: ScalarType,
        count: u8,
        normalized: bool,
    },

    #[error("No shader location given for attribute {key}")]
    MissingShaderLocation { key: &'static str },

    // Configuration Errors
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("IO error for {path}: {error}")]
    IoError { path: String, error: String },
}

/// Type alias for Results in this crate
pub type MeshFormatResult<T> = Result<T, MeshFormatError>;

/// Describe a format for error messages without holding on to it
pub(crate) fn describe_format(label: &str, id: FormatId) -> String {
    format!("{} ({})", label, id)
}

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_format<F>(self, f: F) -> MeshFormatResult<T>
    where
        F: FnOnce() -> MeshFormatError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_format<F>(self, f: F) -> MeshFormatResult<T>
    where
        F: FnOnce() -> MeshFormatError,
    {
        self.ok_or_else(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshFormatError::AttributeOutOfBounds {
            key: "LIGHT",
            start: 28,
            end: 36,
            stride: 32,
        };
        assert_eq!(
            err.to_string(),
            "Attribute LIGHT spans bytes 28..36 but the stride is 32"
        );
    }

    #[test]
    fn test_option_ext() {
        let opt: Option<i32> = None;
        let result = opt.ok_or_format(|| MeshFormatError::MissingEncoder {
            format: "test".to_string(),
        });
        assert!(matches!(result, Err(MeshFormatError::MissingEncoder { .. })));
    }
}
