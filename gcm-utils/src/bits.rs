//! Conversions between bytes, msb-first bit vectors and 64-bit integers.
//!
//! Bits are carried in `u8` values restricted to `{0, 1}`. Within a byte they
//! are ordered most-significant first, so bit 0 of `bytes_to_bits(x)` is the
//! top bit of `x[0]`. Callers needing lsb-first order reverse explicitly.

use crate::error::{check_length, GcmUtilsError, Result};

/// Expands `bytes` into `8 * bytes.len()` bits, msb-first per byte.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1))
        .collect()
}

/// Packs msb-first bits back into bytes. Inverse of [`bytes_to_bits`].
///
/// Fails if the number of bits is not a multiple of 8 or if an entry is
/// neither 0 nor 1.
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        tracing::debug!(len = bits.len(), "rejecting unaligned bit vector");
        return Err(GcmUtilsError::UnalignedBits(bits.len()));
    }
    check_bits(bits)?;
    Ok(bits
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, bit| (acc << 1) | bit))
        .collect())
}

// Every entry is inspected before the outcome is decided.
fn check_bits(bits: &[u8]) -> Result<()> {
    let stray = bits.iter().fold(0u8, |acc, bit| acc | (bit & !1));
    if stray != 0 {
        let value = bits.iter().copied().find(|bit| *bit > 1).unwrap_or(stray);
        return Err(GcmUtilsError::NotABit(value));
    }
    Ok(())
}

/// Interprets `bytes` as a big-endian integer: `bytes[0]` is most significant.
pub fn parse_be_bytes64(bytes: &[u8; 8]) -> u64 {
    bytes.iter().fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
}

/// Interprets `bytes` as a little-endian integer: `bytes[0]` is least
/// significant.
pub fn parse_le_bytes64(bytes: &[u8; 8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
}

/// Packs 64 msb-first bits into 8 bytes and parses them big-endian.
pub fn parse_be_bits64(bits: &[u8]) -> Result<u64> {
    Ok(parse_be_bytes64(&bits_to_bytes64(bits)?))
}

/// Packs 64 msb-first bits into 8 bytes and parses them little-endian.
pub fn parse_le_bits64(bits: &[u8]) -> Result<u64> {
    Ok(parse_le_bytes64(&bits_to_bytes64(bits)?))
}

fn bits_to_bytes64(bits: &[u8]) -> Result<[u8; 8]> {
    check_length(64, bits.len())?;
    let bytes = bits_to_bytes(bits)?;
    let mut out = [0u8; 8];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Returns `bytes` with the order of its elements reversed. Applying it twice
/// gives back the input.
pub fn reverse_bytes<const N: usize>(bytes: &[u8; N]) -> [u8; N] {
    std::array::from_fn(|i| bytes[N - 1 - i])
}

/// Slice form of [`reverse_bytes`].
pub fn reverse_byte_slice(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Decodes a hex string, with or without a `0x` prefix, into msb-first bits.
pub fn hex_to_bits(s: &str) -> Result<Vec<u8>> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    Ok(bytes_to_bits(&hex::decode(stripped)?))
}

/// Encodes msb-first bits as a lowercase hex string without prefix.
pub fn bits_to_hex(bits: &[u8]) -> Result<String> {
    Ok(hex::encode(bits_to_bytes(bits)?))
}
