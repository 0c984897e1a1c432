//! UDP datagram encoding and decoding
//!
//! This module assembles datagrams from ports and a payload, and parses raw
//! bytes back into a [`Datagram`]. The checksum covers the payload only; no
//! pseudo header is involved.

use crate::logging::Logger;
use crate::network::{bytes_equal, checksum, concat, pack_u16, unpack_u16};

/// UDP header length in bytes
pub const UDP_HEADER_LEN: usize = 8;

/// Warning emitted for a zero source port
pub const ZERO_SOURCE_PORT_WARNING: &str = "Source port is set to 0";
/// Warning emitted when a parsed datagram carries a zero checksum
pub const ZERO_CHECKSUM_WARNING: &str = "Checksum is set to 0";

/// Errors that abort building or parsing a datagram
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UdpError {
    /// The destination port is zero
    #[error("invalid destination port value: {0}")]
    InvalidDestinationPort(u16),
    /// Nothing to send
    #[error("data cannot be empty")]
    EmptyPayload,
    /// Header plus payload does not fit in the 16-bit length field
    #[error("payload too large: {len} bytes plus header exceeds {max} bytes", max = u16::MAX)]
    PayloadTooLarge { len: usize },
    /// The buffer cannot hold a full header
    #[error("truncated UDP header: need {need} bytes, got {actual}", need = UDP_HEADER_LEN)]
    TruncatedHeader { actual: usize },
    /// The length field disagrees with the buffer size
    #[error(
        "invalid UDP header length. Expected length ({declared}) does not match actual data length ({actual})"
    )]
    LengthMismatch { declared: u16, actual: usize },
}

/// UDP packet header structure
///
/// The 8-byte header laid out as in RFC 768. No validation happens here; see
/// [`UdpCodec`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UdpHeader {
    pub src_port: u16,
    pub dst_port: u16,
    pub length: u16, // Length of UDP header and data
    pub checksum: u16,
}

impl UdpHeader {
    /// Parse UDP header from byte slice
    ///
    /// Returns None if the data is too short to contain a UDP header
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < UDP_HEADER_LEN {
            return None;
        }

        Some(UdpHeader {
            src_port: unpack_u16(&data[0..2]),
            dst_port: unpack_u16(&data[2..4]),
            length: unpack_u16(&data[4..6]),
            checksum: unpack_u16(&data[6..8]),
        })
    }

    /// Convert UDP header to bytes
    pub fn to_bytes(&self) -> [u8; UDP_HEADER_LEN] {
        let mut bytes = [0u8; UDP_HEADER_LEN];
        bytes[0..2].copy_from_slice(&pack_u16(self.src_port));
        bytes[2..4].copy_from_slice(&pack_u16(self.dst_port));
        bytes[4..6].copy_from_slice(&pack_u16(self.length));
        bytes[6..8].copy_from_slice(&pack_u16(self.checksum));
        bytes
    }

    /// Payload length implied by the length field
    pub fn payload_len(&self) -> usize {
        (self.length as usize).saturating_sub(UDP_HEADER_LEN)
    }
}

/// A parsed or assembled datagram. Immutable once built.
#[derive(Debug, Clone, Eq)]
pub struct Datagram {
    header: UdpHeader,
    data: Vec<u8>,
}

impl Datagram {
    /// Assemble a datagram from ports and payload, deriving length and checksum.
    ///
    /// Warns on a zero source port, then rejects a zero destination port or an
    /// empty payload.
    pub fn new(
        logger: &dyn Logger,
        src_port: u16,
        dst_port: u16,
        data: &[u8],
    ) -> Result<Self, UdpError> {
        if src_port == 0 {
            logger.warn(ZERO_SOURCE_PORT_WARNING);
        }
        check_dst_port(logger, dst_port)?;
        let length = payload_length(logger, data)?;

        Ok(Datagram {
            header: UdpHeader {
                src_port,
                dst_port,
                length,
                checksum: checksum(data),
            },
            data: data.to_vec(),
        })
    }

    pub fn header(&self) -> &UdpHeader {
        &self.header
    }

    pub fn src_port(&self) -> u16 {
        self.header.src_port
    }

    pub fn dst_port(&self) -> u16 {
        self.header.dst_port
    }

    pub fn length(&self) -> u16 {
        self.header.length
    }

    pub fn checksum(&self) -> u16 {
        self.header.checksum
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Recompute the payload checksum and compare it with the stored one.
    ///
    /// Parsing never does this on its own.
    pub fn checksum_matches(&self) -> bool {
        crate::network::verify(&self.data, self.header.checksum)
    }

    /// Serialize through [`UdpCodec::build_datagram`]; length and checksum
    /// are derived again from the payload.
    pub fn to_bytes(&self, logger: &dyn Logger) -> Result<Vec<u8>, UdpError> {
        UdpCodec::new(logger).build_datagram(self.header.src_port, self.header.dst_port, &self.data)
    }

    /// Field-by-field comparison. An absent datagram is never equal.
    pub fn is_equal(&self, other: Option<&Datagram>) -> bool {
        match other {
            Some(other) => self.header == other.header && bytes_equal(&self.data, &other.data),
            None => false,
        }
    }
}

impl PartialEq for Datagram {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(Some(other))
    }
}

/// Builds and parses datagrams, reporting through the logger it was given.
#[derive(Clone, Copy)]
pub struct UdpCodec<'a> {
    logger: &'a dyn Logger,
}

impl<'a> UdpCodec<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        UdpCodec { logger }
    }

    /// Creates the raw bytes of a datagram with the given ports and payload.
    ///
    /// Layout: source port, destination port, length, checksum (all
    /// big-endian), then the payload.
    pub fn build_datagram(
        &self,
        src_port: u16,
        dst_port: u16,
        data: &[u8],
    ) -> Result<Vec<u8>, UdpError> {
        check_dst_port(self.logger, dst_port)?;
        let length = payload_length(self.logger, data)?;

        if src_port == 0 {
            self.logger.warn(ZERO_SOURCE_PORT_WARNING);
        }

        let header = UdpHeader {
            src_port,
            dst_port,
            length,
            checksum: checksum(data),
        };

        Ok(concat(&[
            &pack_u16(header.src_port),
            &pack_u16(header.dst_port),
            &pack_u16(header.length),
            &pack_u16(header.checksum),
            data,
        ]))
    }

    /// Parses a raw datagram.
    ///
    /// The length field must equal the buffer size. A zero checksum or zero
    /// source port only produces a warning; the checksum is taken as-is.
    pub fn parse_datagram(&self, packet: &[u8]) -> Result<Datagram, UdpError> {
        let header = match UdpHeader::from_bytes(packet) {
            Some(header) => header,
            None => {
                return Err(self.fail(UdpError::TruncatedHeader {
                    actual: packet.len(),
                }))
            }
        };

        if header.length as usize != packet.len() {
            return Err(self.fail(UdpError::LengthMismatch {
                declared: header.length,
                actual: packet.len(),
            }));
        }

        if header.checksum == 0 {
            self.logger.warn(ZERO_CHECKSUM_WARNING);
        }

        if header.src_port == 0 {
            self.logger.warn(ZERO_SOURCE_PORT_WARNING);
        }

        check_dst_port(self.logger, header.dst_port)?;

        Ok(Datagram {
            header,
            data: packet[UDP_HEADER_LEN..].to_vec(),
        })
    }

    fn fail(&self, err: UdpError) -> UdpError {
        report(self.logger, err)
    }
}

/// Log `err` at error level and hand it back
fn report(logger: &dyn Logger, err: UdpError) -> UdpError {
    logger.error(&err.to_string());
    err
}

fn check_dst_port(logger: &dyn Logger, dst_port: u16) -> Result<(), UdpError> {
    if dst_port == 0 {
        return Err(report(logger, UdpError::InvalidDestinationPort(dst_port)));
    }
    Ok(())
}

/// Total datagram length for `data`, rejecting empty or oversized payloads
fn payload_length(logger: &dyn Logger, data: &[u8]) -> Result<u16, UdpError> {
    if data.is_empty() {
        return Err(report(logger, UdpError::EmptyPayload));
    }

    u16::try_from(UDP_HEADER_LEN + data.len())
        .map_err(|_| report(logger, UdpError::PayloadTooLarge { len: data.len() }))
}
