//! Transport layer datagrams
//!
//! This module contains the UDP-style datagram codec:
//! - header layout and parsing
//! - datagram assembly with payload checksum
//! - validation of ports and lengths

pub mod udp;

// Re-export commonly used items
pub use udp::{Datagram, UdpCodec, UdpError, UdpHeader, UDP_HEADER_LEN};
