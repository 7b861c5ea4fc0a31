//! Vertex Format Operations
//!
//! Builder functions and layout validation for `VertexFormat`.

use super::vertex_format_data::{
    AttributeKey, FormatId, ScalarType, VertexAttribute, VertexFormat, VertexFormatBuilder,
};
use crate::constants::VERTICES_PER_QUAD;
use crate::error::{MeshFormatError, MeshFormatResult};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FORMAT_ID: AtomicU64 = AtomicU64::new(1);

fn next_format_id() -> FormatId {
    FormatId(NEXT_FORMAT_ID.fetch_add(1, Ordering::Relaxed))
}

impl<K: AttributeKey> VertexFormat<K> {
    /// Start a layout with the given bytes-per-vertex
    pub fn builder(stride: u32) -> VertexFormatBuilder<K> {
        VertexFormatBuilder {
            label: "vertex_format",
            stride,
            elements: Vec::new(),
        }
    }

    /// Look up the element for `key`
    pub fn element(&self, key: K) -> Option<&VertexAttribute<K>> {
        self.elements.iter().find(|element| element.key == key)
    }

    /// Bytes one encoded quad occupies
    pub fn quad_size(&self) -> usize {
        self.stride as usize * VERTICES_PER_QUAD
    }
}

impl<K: AttributeKey> VertexFormatBuilder<K> {
    /// Name shown in logs and errors
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn add_element(
        mut self,
        key: K,
        byte_offset: u32,
        scalar_type: ScalarType,
        component_count: u8,
        normalized: bool,
    ) -> Self {
        self.elements.push(VertexAttribute {
            key,
            byte_offset,
            scalar_type,
            component_count,
            normalized,
        });
        self
    }

    /// Validate the layout and finish the format
    pub fn build(self) -> MeshFormatResult<VertexFormat<K>> {
        validate_layout(self.stride, &self.elements)?;
        Ok(self.build_unchecked())
    }

    /// Finish the format without layout checks
    pub fn build_unchecked(self) -> VertexFormat<K> {
        let format = VertexFormat {
            id: next_format_id(),
            label: self.label,
            stride: self.stride,
            elements: self.elements,
        };
        log::debug!(
            "Built vertex format {} with {} elements",
            format,
            format.elements.len()
        );
        format
    }
}

/// Check that every element fits the stride, has 1-4 components, and that no two elements
/// share a key or a byte
pub fn validate_layout<K: AttributeKey>(
    stride: u32,
    elements: &[VertexAttribute<K>],
) -> MeshFormatResult<()> {
    if stride == 0 {
        return Err(MeshFormatError::ZeroStride);
    }

    for (index, element) in elements.iter().enumerate() {
        if !(1..=4).contains(&element.component_count) {
            return Err(MeshFormatError::InvalidComponentCount {
                key: element.key.name(),
                count: element.component_count,
            });
        }

        if element.end() > stride as u64 {
            return Err(MeshFormatError::AttributeOutOfBounds {
                key: element.key.name(),
                start: element.byte_offset,
                end: element.end(),
                stride,
            });
        }

        for other in &elements[..index] {
            if other.key == element.key {
                return Err(MeshFormatError::DuplicateAttribute {
                    key: element.key.name(),
                });
            }
            if (element.byte_offset as u64) < other.end()
                && (other.byte_offset as u64) < element.end()
            {
                return Err(MeshFormatError::AttributeOverlap {
                    key: element.key.name(),
                    other: other.key.name(),
                });
            }
        }
    }

    Ok(())
}
