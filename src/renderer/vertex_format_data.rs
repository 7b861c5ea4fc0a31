//! Vertex Format Data
//!
//! Plain data describing a GPU vertex layout. Construction and validation live in
//! vertex_format_operations.rs; a `VertexFormat` can only be obtained from its builder.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Semantic tag naming one attribute of a vertex layout
pub trait AttributeKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Human-readable name used in logs and errors
    fn name(self) -> &'static str;
}

/// Scalar storage type of one attribute component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Float32,
    UnsignedByte,
    Byte,
    UnsignedShort,
    Short,
    UnsignedInt,
    Int,
}

impl ScalarType {
    /// Size of one component in bytes
    pub const fn size(self) -> u32 {
        match self {
            ScalarType::UnsignedByte | ScalarType::Byte => 1,
            ScalarType::UnsignedShort | ScalarType::Short => 2,
            ScalarType::Float32 | ScalarType::UnsignedInt | ScalarType::Int => 4,
        }
    }
}

/// Process-unique identity of a built vertex format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormatId(pub(crate) u64);

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format#{}", self.0)
    }
}

/// One attribute element within a vertex record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute<K: AttributeKey> {
    pub key: K,
    /// Offset within one vertex record
    pub byte_offset: u32,
    pub scalar_type: ScalarType,
    /// 1-4
    pub component_count: u8,
    /// Integer storage read by the GPU as a fraction of the type's range
    pub normalized: bool,
}

impl<K: AttributeKey> VertexAttribute<K> {
    /// Bytes covered by this element
    pub const fn size_bytes(&self) -> u32 {
        self.scalar_type.size() * self.component_count as u32
    }

    /// First byte past this element. Widened so offsets near `u32::MAX` can't wrap.
    pub const fn end(&self) -> u64 {
        self.byte_offset as u64 + self.size_bytes() as u64
    }
}

/// Immutable vertex layout: a stride plus ordered attribute elements
///
/// Two formats are equal only if they are the same built instance. Separately built formats
/// with identical layouts are distinct encoder registry keys.
#[derive(Debug, Clone)]
pub struct VertexFormat<K: AttributeKey> {
    pub(crate) id: FormatId,
    pub(crate) label: &'static str,
    pub(crate) stride: u32,
    pub(crate) elements: Vec<VertexAttribute<K>>,
}

impl<K: AttributeKey> VertexFormat<K> {
    pub fn id(&self) -> FormatId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Bytes per vertex
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Elements in the order they were added
    pub fn elements(&self) -> &[VertexAttribute<K>] {
        &self.elements
    }
}

impl<K: AttributeKey> PartialEq for VertexFormat<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K: AttributeKey> Eq for VertexFormat<K> {}

impl<K: AttributeKey> Hash for VertexFormat<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<K: AttributeKey> fmt::Display for VertexFormat<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, stride {})", self.label, self.id, self.stride)
    }
}

/// Accumulates attribute elements until `build` produces a `VertexFormat`
#[derive(Debug, Clone)]
pub struct VertexFormatBuilder<K: AttributeKey> {
    pub(crate) label: &'static str,
    pub(crate) stride: u32,
    pub(crate) elements: Vec<VertexAttribute<K>>,
}
