//! Right-to-left hex rendering into a fixed character window.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

pub(crate) const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writes `value` as lowercase hex into `buf`, last digit at `end_pos`,
/// moving left until the value is exhausted.
///
/// Positions left of the last written digit are not touched; the templates
/// pre-fill the whole 40-character window with `0`, so smaller values keep
/// their leading zeros. The caller guarantees the window is large enough
/// (40 digits for a masked 160-bit id).
pub(crate) fn write_uint_as_hex(buf: &mut [u8], end_pos: usize, value: &BigUint) {
    let sixteen = BigUint::from(16u8);
    let mut num = value.clone();
    let mut pos = end_pos;
    while !num.is_zero() {
        let digit = (&num % &sixteen).to_u8().unwrap_or(0);
        buf[pos] = HEX_DIGITS[digit as usize];
        pos -= 1;
        num /= &sixteen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(value: u64) -> String {
        let mut buf = *b"xx0000yy";
        write_uint_as_hex(&mut buf, 5, &BigUint::from(value));
        String::from_utf8(buf.to_vec()).unwrap()
    }

    #[test]
    fn writes_backwards_from_end_pos() {
        assert_eq!(window(0xabc), "xx0abcyy");
    }

    #[test]
    fn zero_writes_nothing() {
        assert_eq!(window(0), "xx0000yy");
    }

    #[test]
    fn single_digit() {
        assert_eq!(window(0xf), "xx000fyy");
    }

    #[test]
    fn fills_the_whole_window() {
        assert_eq!(window(0x1234), "xx1234yy");
    }
}
