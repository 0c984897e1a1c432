//! UDP-style datagram codec
//!
//! This library provides:
//! - Big-endian packing helpers for header fields
//! - One's-complement checksums over datagram payloads
//! - Datagram building and parsing with field validation
//! - Leveled logging sinks the codec reports through

pub mod logging;
pub mod network;
pub mod transport;

// Re-export commonly used types
pub use logging::{CaptureLogger, LogLevel, Logger, LoggerConfig, TracingLogger};
pub use network::checksum::checksum;
pub use transport::udp::{Datagram, UdpCodec, UdpError, UdpHeader, UDP_HEADER_LEN};
