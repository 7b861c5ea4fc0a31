//! Vertex Buffer Layout Export
//!
//! Describes a `VertexFormat` to wgpu so the binding layer can build pipelines for it.

use super::chunk_formats::ChunkMeshAttribute;
use super::vertex_format_data::{AttributeKey, ScalarType, VertexAttribute, VertexFormat};
use crate::error::{MeshFormatError, MeshFormatResult, OptionExt};

/// Owned form of `wgpu::VertexBufferLayout`
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBufferLayoutData {
    pub array_stride: wgpu::BufferAddress,
    pub step_mode: wgpu::VertexStepMode,
    pub attributes: Vec<wgpu::VertexAttribute>,
}

/// Shader locations the chunk shaders bind each attribute to
pub fn chunk_shader_location(key: ChunkMeshAttribute) -> Option<u32> {
    Some(match key {
        ChunkMeshAttribute::Position => 0,
        ChunkMeshAttribute::Color => 1,
        ChunkMeshAttribute::Texture => 2,
        ChunkMeshAttribute::Light => 3,
    })
}

/// wgpu format for a component layout, if wgpu has one
pub fn gpu_vertex_format(
    scalar_type: ScalarType,
    component_count: u8,
    normalized: bool,
) -> Option<wgpu::VertexFormat> {
    use wgpu::VertexFormat as F;

    let format = match (scalar_type, component_count, normalized) {
        (ScalarType::Float32, 1, _) => F::Float32,
        (ScalarType::Float32, 2, _) => F::Float32x2,
        (ScalarType::Float32, 3, _) => F::Float32x3,
        (ScalarType::Float32, 4, _) => F::Float32x4,

        (ScalarType::UnsignedByte, 2, true) => F::Unorm8x2,
        (ScalarType::UnsignedByte, 4, true) => F::Unorm8x4,
        (ScalarType::UnsignedByte, 2, false) => F::Uint8x2,
        (ScalarType::UnsignedByte, 4, false) => F::Uint8x4,
        (ScalarType::Byte, 2, true) => F::Snorm8x2,
        (ScalarType::Byte, 4, true) => F::Snorm8x4,
        (ScalarType::Byte, 2, false) => F::Sint8x2,
        (ScalarType::Byte, 4, false) => F::Sint8x4,

        (ScalarType::UnsignedShort, 2, true) => F::Unorm16x2,
        (ScalarType::UnsignedShort, 4, true) => F::Unorm16x4,
        (ScalarType::UnsignedShort, 2, false) => F::Uint16x2,
        (ScalarType::UnsignedShort, 4, false) => F::Uint16x4,
        (ScalarType::Short, 2, true) => F::Snorm16x2,
        (ScalarType::Short, 4, true) => F::Snorm16x4,
        (ScalarType::Short, 2, false) => F::Sint16x2,
        (ScalarType::Short, 4, false) => F::Sint16x4,

        (ScalarType::UnsignedInt, 1, false) => F::Uint32,
        (ScalarType::UnsignedInt, 2, false) => F::Uint32x2,
        (ScalarType::UnsignedInt, 3, false) => F::Uint32x3,
        (ScalarType::UnsignedInt, 4, false) => F::Uint32x4,
        (ScalarType::Int, 1, false) => F::Sint32,
        (ScalarType::Int, 2, false) => F::Sint32x2,
        (ScalarType::Int, 3, false) => F::Sint32x3,
        (ScalarType::Int, 4, false) => F::Sint32x4,

        _ => return None,
    };
    Some(format)
}

/// Build the buffer layout for `format`, asking `shader_location` where each key binds.
///
/// 8- and 16-bit elements with an odd component count have no wgpu format. They are widened
/// by one component when that lane is unused padding inside the stride; the shader ignores
/// the extra lane.
pub fn vertex_buffer_layout<K, L>(
    format: &VertexFormat<K>,
    shader_location: L,
) -> MeshFormatResult<VertexBufferLayoutData>
where
    K: AttributeKey,
    L: Fn(K) -> Option<u32>,
{
    let mut attributes = Vec::with_capacity(format.elements().len());

    for element in format.elements() {
        let location = shader_location(element.key).ok_or_format(|| {
            MeshFormatError::MissingShaderLocation {
                key: element.key.name(),
            }
        })?;

        let gpu_format = gpu_vertex_format(
            element.scalar_type,
            element.component_count,
            element.normalized,
        )
        .or_else(|| widened_format(format, element))
        .ok_or_format(|| MeshFormatError::UnsupportedAttribute {
            key: element.key.name(),
            scalar: element.scalar_type,
            count: element.component_count,
            normalized: element.normalized,
        })?;

        attributes.push(wgpu::VertexAttribute {
            format: gpu_format,
            offset: element.byte_offset as wgpu::BufferAddress,
            shader_location: location,
        });
    }

    Ok(VertexBufferLayoutData {
        array_stride: format.stride() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    })
}

/// `vertex_buffer_layout` for the chunk formats with the chunk shader locations
pub fn chunk_vertex_buffer_layout(
    format: &VertexFormat<ChunkMeshAttribute>,
) -> MeshFormatResult<VertexBufferLayoutData> {
    vertex_buffer_layout(format, chunk_shader_location)
}

/// Borrow as the wgpu pipeline descriptor type
pub fn as_wgpu(layout: &VertexBufferLayoutData) -> wgpu::VertexBufferLayout<'_> {
    wgpu::VertexBufferLayout {
        array_stride: layout.array_stride,
        step_mode: layout.step_mode,
        attributes: &layout.attributes,
    }
}

fn widened_format<K: AttributeKey>(
    format: &VertexFormat<K>,
    element: &VertexAttribute<K>,
) -> Option<wgpu::VertexFormat> {
    let size = element.scalar_type.size();
    if size > 2 || element.component_count >= 4 || element.component_count % 2 == 0 {
        return None;
    }

    let lane_start = element.end();
    let widened_end = lane_start + size as u64;
    if widened_end > format.stride() as u64 {
        return None;
    }

    let lane_is_free = format.elements().iter().all(|other| {
        other.key == element.key
            || other.end() <= lane_start
            || other.byte_offset as u64 >= widened_end
    });
    if !lane_is_free {
        return None;
    }

    gpu_vertex_format(
        element.scalar_type,
        element.component_count + 1,
        element.normalized,
    )
}
