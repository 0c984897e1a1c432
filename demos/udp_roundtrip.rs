//! Builds a datagram, parses it back and walks through the warning and error
//! paths. Set UDPGRAM_LOG_LEVEL to info, warn or error to filter output.

use std::env;
use udp_gram::{LogLevel, LoggerConfig, TracingLogger, UdpCodec, UdpError};

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), UdpError> {
    tracing_subscriber::fmt().without_time().with_target(false).init();

    let min_level = match env::var("UDPGRAM_LOG_LEVEL") {
        Ok(value) => value.parse::<LogLevel>().unwrap_or_else(|e| {
            eprintln!("{}, falling back to info", e);
            LogLevel::Info
        }),
        Err(_) => LogLevel::Info,
    };
    let logger = TracingLogger::new(
        LoggerConfig::default()
            .with_module("udp_roundtrip")
            .with_min_level(min_level),
    );
    let codec = UdpCodec::new(&logger);

    let packet = codec.build_datagram(12345, 443, b"Hello, UDP!")?;
    println!("encoded {} bytes: {}", packet.len(), hex(&packet));

    let datagram = codec.parse_datagram(&packet)?;
    println!(
        "decoded {} -> {} len={} checksum={:#06x} ok={} payload={:?}",
        datagram.src_port(),
        datagram.dst_port(),
        datagram.length(),
        datagram.checksum(),
        datagram.checksum_matches(),
        String::from_utf8_lossy(datagram.data()),
    );

    // Zero source port goes through with a warning
    codec.build_datagram(0, 53, b"anonymous")?;

    // These are rejected
    if let Err(e) = codec.build_datagram(8080, 0, b"nowhere") {
        println!("rejected: {}", e);
    }
    if let Err(e) = codec.parse_datagram(&packet[..5]) {
        println!("rejected: {}", e);
    }
    if let Err(e) = codec.parse_datagram(&packet[..packet.len() - 1]) {
        println!("rejected: {}", e);
    }

    Ok(())
}
