//! Wire-level primitives
//!
//! This module contains the building blocks the datagram codec sits on:
//! - bytes: big-endian packing, concatenation and comparison
//! - checksum: one's-complement checksum with end-around carry

pub mod bytes;
pub mod checksum;

// Re-export commonly used items
pub use bytes::{bytes_equal, concat, pack_u16, unpack_u16};
pub use checksum::{carry_around_add, checksum, verify};
