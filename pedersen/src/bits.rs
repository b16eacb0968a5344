//! Bit/byte packing used to exchange test vectors with circuit tooling,
//! which represents byte strings as arrays of bits.

use ark_std::{string::String, vec::Vec};
use core::fmt::Write;

/// Unpacks bytes into bits, most-significant bit of each byte first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for i in 0..8 {
            bits.push((byte >> (7 - i)) & 1 == 1);
        }
    }
    bits
}

/// Packs bits into bytes, most-significant bit first. An incomplete trailing
/// byte is padded with zero bits.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .filter(|(_, bit)| **bit)
                .fold(0u8, |byte, (i, _)| byte | (0x80 >> i))
        })
        .collect()
}

/// Renders bits as a field-element array literal, e.g. `[0, 1, 1]`.
pub fn bits_to_field_array(bits: &[bool]) -> String {
    let mut out = String::with_capacity(bits.len() * 3 + 2);
    out.push('[');
    for (i, bit) in bits.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing to a `String` cannot fail.
        let _ = write!(out, "{}", u8::from(*bit));
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_bits() {
        assert_eq!(
            bytes_to_bits(&[0b1010_0001]),
            vec![true, false, true, false, false, false, false, true]
        );
        assert!(bytes_to_bits(&[]).is_empty());
    }

    #[test]
    fn test_bits_to_bytes_pads_trailing_byte() {
        assert_eq!(bits_to_bytes(&[true]), vec![0x80]);
        assert_eq!(bits_to_bytes(&[false, true, true]), vec![0x60]);
        assert_eq!(
            bits_to_bytes(&[true, true, true, true, true, true, true, true, true]),
            vec![0xff, 0x80]
        );
        assert!(bits_to_bytes(&[]).is_empty());
    }

    #[test]
    fn test_bits_round_trip() {
        let bytes = b"circuit fixtures".to_vec();
        assert_eq!(bits_to_bytes(&bytes_to_bits(&bytes)), bytes);
    }

    #[test]
    fn test_bits_to_field_array() {
        assert_eq!(bits_to_field_array(&[]), "[]");
        assert_eq!(bits_to_field_array(&[false, true, true]), "[0, 1, 1]");
    }
}
