//! Big-endian byte helpers
//!
//! Small primitives used to pack header fields onto the wire and read them
//! back. All multi-byte integers are in network byte order.

use byteorder::{BigEndian, ByteOrder};

/// Pack a 16-bit value into two big-endian bytes
pub fn pack_u16(value: u16) -> [u8; 2] {
    let mut bytes = [0u8; 2];
    BigEndian::write_u16(&mut bytes, value);
    bytes
}

/// Read a 16-bit big-endian value from the first two bytes of `bytes`
///
/// Panics if `bytes` holds fewer than two bytes. Callers bounds-check first.
pub fn unpack_u16(bytes: &[u8]) -> u16 {
    BigEndian::read_u16(bytes)
}

/// Concatenate byte sequences in order
pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|part| part.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Positional byte equality. A length mismatch is never equal.
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).all(|(x, y)| x == y)
}
