//! Splitting of the hash input into 3-bit windows.

use ark_std::vec::Vec;

/// Number of input bits consumed per window.
pub const WINDOW_SIZE: usize = 3;

/// Reads bit `index` of `bytes`, most-significant bit of each byte first.
/// `None` past the end of the input.
fn bit_at(bytes: &[u8], index: usize) -> Option<u8> {
    bytes
        .get(index / 8)
        .map(|byte| (byte >> (7 - index % 8)) & 1)
}

/// The window starting at bit `index`. The first bit read is the low bit of
/// the window. Near the end of the input the window shrinks to the bits that
/// remain.
fn window_at(bytes: &[u8], index: usize) -> u8 {
    (0..WINDOW_SIZE)
        .map_while(|offset| bit_at(bytes, index + offset))
        .enumerate()
        .fold(0, |window, (offset, bit)| window | (bit << offset))
}

/// Splits `bytes` into `ceil(8·len / 3)` windows with values in `0..=7`.
pub fn windows(bytes: &[u8]) -> Vec<u8> {
    (0..bytes.len() * 8)
        .step_by(WINDOW_SIZE)
        .map(|index| window_at(bytes, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_count() {
        assert_eq!(windows(&[]).len(), 0);
        assert_eq!(windows(&[0]).len(), 3);
        assert_eq!(windows(&[0, 0]).len(), 6);
        assert_eq!(windows(&[0, 0, 0]).len(), 8);
        assert_eq!(windows(&[0; 64]).len(), 171);
    }

    #[test]
    fn test_window_bit_order() {
        // 0b100_000_00: the first bit read becomes the low bit of the window.
        assert_eq!(windows(&[0b1000_0000]), vec![1, 0, 0]);
        assert_eq!(windows(&[0b0010_0000]), vec![4, 0, 0]);
        assert_eq!(windows(&[0b1100_0000]), vec![3, 0, 0]);
        assert_eq!(windows(&[0b0001_0000]), vec![0, 1, 0]);
    }

    #[test]
    fn test_truncated_tail_window() {
        // Eight bits leave a two-bit tail window.
        assert_eq!(windows(&[0b0000_0011]), vec![0, 0, 3]);
        assert_eq!(windows(&[0b0000_0001]), vec![0, 0, 2]);
        // Sixteen bits leave a one-bit tail window.
        assert_eq!(windows(&[0x00, 0x01]), vec![0, 0, 0, 0, 0, 1]);
        assert_eq!(windows(&[0xff, 0xff]), vec![7, 7, 7, 7, 7, 1]);
    }

    #[test]
    fn test_windows_of_ascii() {
        // '0' = 0011_0000, 'x' = 0111_1000
        // bits: 001 100 000 111 100 0
        assert_eq!(windows(b"0x"), vec![4, 1, 0, 7, 1, 0]);
    }
}
