//! 6-bit value to base64 character.

use crate::constants::ALPHABET_BYTES;

/// Encodes a 6-bit value as a standard base64 alphabet byte.
///
/// Only the low 6 bits of `value` are significant; higher bits are masked
/// off so the function is total.
///
/// # Example
///
/// ```
/// use mandalas_base64::encode_sextet;
///
/// assert_eq!(encode_sextet(0), b'A');
/// assert_eq!(encode_sextet(62), b'+');
/// assert_eq!(encode_sextet(63), b'/');
/// ```
pub fn encode_sextet(value: u8) -> u8 {
    ALPHABET_BYTES[(value & 0x3F) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(encode_sextet(0), b'A');
        assert_eq!(encode_sextet(25), b'Z');
        assert_eq!(encode_sextet(26), b'a');
        assert_eq!(encode_sextet(51), b'z');
        assert_eq!(encode_sextet(52), b'0');
        assert_eq!(encode_sextet(61), b'9');
        assert_eq!(encode_sextet(62), b'+');
        assert_eq!(encode_sextet(63), b'/');
    }

    #[test]
    fn high_bits_masked() {
        assert_eq!(encode_sextet(64), b'A');
        assert_eq!(encode_sextet(0xFF), b'/');
    }
}
