//! One's-complement checksum
//!
//! Sums the input as big-endian 16-bit words with end-around carry and
//! returns the complement of the sum. An odd trailing byte is padded with a
//! zero low byte. Unlike RFC 768 there is no pseudo header; only the bytes
//! passed in are covered.

const ALL_ONES: u16 = 0xFFFF;

/// Calculate the one's-complement checksum of `data`
pub fn checksum(data: &[u8]) -> u16 {
    match data {
        [] => ALL_ONES,
        [byte] => !(*byte as u16),
        _ => !sum_words(data),
    }
}

/// Returns true if `expected` is the checksum of `data`
pub fn verify(data: &[u8], expected: u16) -> bool {
    checksum(data) == expected
}

/// Add two 16-bit words, folding any carry out of bit 15 back into bit 0
pub fn carry_around_add(a: u16, b: u16) -> u16 {
    let mut sum = a as u32 + b as u32;
    if sum > ALL_ONES as u32 {
        let carry = sum >> 16;
        sum = (sum & ALL_ONES as u32) + carry;
    }
    sum as u16
}

fn sum_words(data: &[u8]) -> u16 {
    let mut chunks = data.chunks_exact(2);
    let mut sum = 0u16;

    for chunk in &mut chunks {
        sum = carry_around_add(sum, u16::from_be_bytes([chunk[0], chunk[1]]));
    }

    // Odd byte goes in the high half
    if let [last] = chunks.remainder() {
        sum = carry_around_add(sum, (*last as u16) << 8);
    }

    sum
}
