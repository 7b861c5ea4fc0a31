//! Quad Encoders
//!
//! One encoder per vertex format. An encoder writes all four vertices of a quad starting at
//! `position`, vertex `i` at `position + i * stride`. Encoders hold no state and never fail;
//! the caller owns `buffer[position..position + 4 * stride]` for the duration of the call.

use super::normalization::denormalize_float_as_short;
use super::quad_data::ModelQuadView;
use super::vertex_format_data::{AttributeKey, VertexFormat};
use super::vertex_sink::VertexSink;
use crate::constants::{CHUNK_MESH_COMPACT_STRIDE, CHUNK_MESH_FULL_STRIDE, VERTICES_PER_QUAD};

/// Writes one quad into a byte buffer in a specific vertex layout
pub trait QuadEncoder: Send + Sync {
    fn encode(&self, quad: &dyn ModelQuadView, buffer: &mut [u8], position: usize);
}

impl<F> QuadEncoder for F
where
    F: Fn(&dyn ModelQuadView, &mut [u8], usize) + Send + Sync,
{
    fn encode(&self, quad: &dyn ModelQuadView, buffer: &mut [u8], position: usize) {
        self(quad, buffer, position)
    }
}

/// Encoder for `CHUNK_MESH_FULL`: floats written as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct FullPrecisionQuadEncoder;

impl QuadEncoder for FullPrecisionQuadEncoder {
    fn encode(&self, quad: &dyn ModelQuadView, buffer: &mut [u8], mut position: usize) {
        for i in 0..VERTICES_PER_QUAD {
            buffer.put_f32(position, quad.x(i));
            buffer.put_f32(position + 4, quad.y(i));
            buffer.put_f32(position + 8, quad.z(i));
            buffer.put_u32(position + 12, quad.color(i));
            buffer.put_f32(position + 16, quad.tex_u(i));
            buffer.put_f32(position + 20, quad.tex_v(i));
            buffer.put_u32(position + 24, quad.light(i));

            position += CHUNK_MESH_FULL_STRIDE as usize;
        }
    }
}

/// Encoder for `CHUNK_MESH_COMPACT`: position and texture packed to 16-bit fixed point
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactQuadEncoder;

impl QuadEncoder for CompactQuadEncoder {
    fn encode(&self, quad: &dyn ModelQuadView, buffer: &mut [u8], mut position: usize) {
        for i in 0..VERTICES_PER_QUAD {
            buffer.put_u16(position, denormalize_float_as_short(quad.x(i)));
            buffer.put_u16(position + 2, denormalize_float_as_short(quad.y(i)));
            buffer.put_u16(position + 4, denormalize_float_as_short(quad.z(i)));
            buffer.put_u32(position + 8, quad.color(i));
            buffer.put_u16(position + 12, denormalize_float_as_short(quad.tex_u(i)));
            buffer.put_u16(position + 14, denormalize_float_as_short(quad.tex_v(i)));
            buffer.put_u32(position + 16, quad.light(i));

            position += CHUNK_MESH_COMPACT_STRIDE as usize;
        }
    }
}

/// Encode consecutive quads starting at `position`, returning the offset after the last one.
///
/// `encoder` must be the encoder registered for `format`.
pub fn encode_quads<K, Q>(
    encoder: &dyn QuadEncoder,
    format: &VertexFormat<K>,
    quads: &[Q],
    buffer: &mut [u8],
    mut position: usize,
) -> usize
where
    K: AttributeKey,
    Q: ModelQuadView,
{
    let quad_size = format.quad_size();
    for quad in quads {
        encoder.encode(quad, buffer, position);
        position += quad_size;
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::chunk_formats::{CHUNK_MESH_COMPACT, CHUNK_MESH_FULL};
    use crate::renderer::quad_data::{ModelQuad, QuadVertex};
    use crate::renderer::vertex::{decode_compact_quad, decode_full_quad};

    fn sample_quad() -> ModelQuad {
        let mut quad = ModelQuad::default();
        quad.vertices[0] = QuadVertex {
            position: [1.0, 2.0, 3.0],
            color: 0xFF00FF00,
            tex: [0.5, 0.25],
            light: 0x00FF0010,
        };
        for i in 1..VERTICES_PER_QUAD {
            let f = i as f32;
            quad.vertices[i] = QuadVertex {
                position: [f * 0.125, f * 0.25, 0.0625],
                color: 0x11223300 | i as u32,
                tex: [f / 8.0, 1.0 - f / 8.0],
                light: (i as u32) << 16 | 0xF0,
            };
        }
        quad
    }

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    fn read_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    #[test]
    fn test_full_first_vertex_offsets() {
        let mut buffer = vec![0u8; 128];
        FullPrecisionQuadEncoder.encode(&sample_quad(), &mut buffer, 0);

        assert_eq!(read_f32(&buffer, 0), 1.0);
        assert_eq!(read_f32(&buffer, 4), 2.0);
        assert_eq!(read_f32(&buffer, 8), 3.0);
        assert_eq!(read_u32(&buffer, 12), 0xFF00FF00);
        assert_eq!(read_f32(&buffer, 16), 0.5);
        assert_eq!(read_f32(&buffer, 20), 0.25);
        assert_eq!(read_u32(&buffer, 24), 0x00FF0010);
    }

    #[test]
    fn test_full_round_trip_is_exact() {
        let quad = sample_quad();
        let mut buffer = vec![0u8; 128];
        FullPrecisionQuadEncoder.encode(&quad, &mut buffer, 0);

        let decoded = decode_full_quad(&buffer, 0);
        for (vertex, original) in decoded.iter().zip(quad.vertices.iter()) {
            assert_eq!(vertex.position.map(f32::to_bits), original.position.map(f32::to_bits));
            assert_eq!(vertex.tex.map(f32::to_bits), original.tex.map(f32::to_bits));
            assert_eq!(vertex.color, original.color);
            assert_eq!(vertex.light, original.light);
        }
    }

    #[test]
    fn test_compact_first_vertex_offsets() {
        let mut quad = sample_quad();
        quad.vertices[0].position = [0.5, 0.25, 0.0];

        let mut buffer = vec![0u8; 80];
        CompactQuadEncoder.encode(&quad, &mut buffer, 0);

        assert_eq!(read_u16(&buffer, 0), 32768);
        assert_eq!(read_u16(&buffer, 2), 16384);
        assert_eq!(read_u16(&buffer, 4), 0);
        assert_eq!(read_u32(&buffer, 8), 0xFF00FF00);
        assert_eq!(read_u16(&buffer, 12), 32768);
        assert_eq!(read_u16(&buffer, 14), 16384);
        assert_eq!(read_u32(&buffer, 16), 0x00FF0010);
    }

    #[test]
    fn test_compact_decodes_through_vertex_struct() {
        let quad = sample_quad();
        let mut buffer = vec![0u8; 80];
        CompactQuadEncoder.encode(&quad, &mut buffer, 0);

        let decoded = decode_compact_quad(&buffer, 0);
        for (i, vertex) in decoded.iter().enumerate() {
            assert_eq!(vertex.position[0], denormalize_float_as_short(quad.x(i)));
            assert_eq!(vertex.tex[1], denormalize_float_as_short(quad.tex_v(i)));
            assert_eq!(vertex.color, quad.color(i));
            assert_eq!(vertex.light, quad.light(i));
        }
        // 1.0 wraps like any other value
        assert_eq!(decoded[0].position[0], 0);
    }

    #[test]
    fn test_writes_stay_inside_each_vertex_record() {
        let quad = sample_quad();
        let encoders: [(&dyn QuadEncoder, usize); 2] = [
            (&FullPrecisionQuadEncoder, CHUNK_MESH_FULL.stride() as usize),
            (&CompactQuadEncoder, CHUNK_MESH_COMPACT.stride() as usize),
        ];

        for (encoder, stride) in encoders {
            let base = 7;
            let mut buffer = vec![0xAAu8; base + stride * 4 + 9];
            encoder.encode(&quad, &mut buffer, base);

            assert!(buffer[..base].iter().all(|&b| b == 0xAA));
            assert!(buffer[base + stride * 4..].iter().all(|&b| b == 0xAA));

            for i in 0..VERTICES_PER_QUAD {
                let window = base + i * stride..base + (i + 1) * stride;
                assert!(buffer[window].iter().any(|&b| b != 0xAA));
            }
        }
    }

    #[test]
    fn test_padding_bytes_are_untouched() {
        let quad = sample_quad();

        let mut full = vec![0xAAu8; 128];
        FullPrecisionQuadEncoder.encode(&quad, &mut full, 0);
        for i in 0..VERTICES_PER_QUAD {
            assert_eq!(&full[i * 32 + 28..i * 32 + 32], &[0xAA; 4]);
        }

        let mut compact = vec![0xAAu8; 80];
        CompactQuadEncoder.encode(&quad, &mut compact, 0);
        for i in 0..VERTICES_PER_QUAD {
            assert_eq!(&compact[i * 20 + 6..i * 20 + 8], &[0xAA; 2]);
        }
    }

    #[test]
    fn test_encode_quads_advances_by_quad_size() {
        let quads = [sample_quad(), ModelQuad::default(), sample_quad()];
        let mut buffer = vec![0u8; 3 * 80 + 20];

        let end = encode_quads(
            &CompactQuadEncoder,
            &*CHUNK_MESH_COMPACT,
            &quads,
            &mut buffer,
            20,
        );

        assert_eq!(end, 20 + 3 * 80);
        assert_eq!(read_u32(&buffer, 20 + 8), 0xFF00FF00);
        assert_eq!(read_u32(&buffer, 100 + 8), 0);
        assert_eq!(read_u32(&buffer, 180 + 8), 0xFF00FF00);
    }

    #[test]
    fn test_closure_encoder() {
        let color_only = |quad: &dyn ModelQuadView, buffer: &mut [u8], position: usize| {
            for i in 0..VERTICES_PER_QUAD {
                buffer.put_u32(position + i * 4, quad.color(i));
            }
        };
        let mut buffer = vec![0u8; 16];
        color_only.encode(&sample_quad(), &mut buffer, 0);

        assert_eq!(read_u32(&buffer, 0), 0xFF00FF00);
        assert_eq!(read_u32(&buffer, 12), 0x11223303);
    }
}
