//! Typed writes into the byte buffers encoders fill
//!
//! All writes are little-endian and unaligned at absolute byte offsets. Offsets are the
//! caller's responsibility; an offset past the end of a slice panics like any slice index.

/// Randomly writable byte destination
pub trait VertexSink {
    fn put_u16(&mut self, offset: usize, value: u16);
    fn put_u32(&mut self, offset: usize, value: u32);
    fn put_f32(&mut self, offset: usize, value: f32);
}

impl VertexSink for [u8] {
    #[inline]
    fn put_u16(&mut self, offset: usize, value: u16) {
        self[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    }

    #[inline]
    fn put_u32(&mut self, offset: usize, value: u32) {
        self[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    #[inline]
    fn put_f32(&mut self, offset: usize, value: f32) {
        self[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }
}
