//! Pixel cell writers.
//!
//! The packed-bitmap family stores one pixel per byte inside a base64
//! encoded blob: cell `pos` starts at bit `pos * 8` past `base`, so a cell
//! straddles two 6-bit slots with an in-slot offset cycling 0, 2, 4. The
//! hex-quad family stores one pixel as a literal hex digit at a fixed
//! character stride, no straddling involved.

use crate::hex::HEX_DIGITS;
use mandalas_base64::{decode_sextet, encode_sextet};

/// Writes colour `value` (1..=16) into pixel cell `pos` of the packed blob
/// starting at byte offset `base` of `buf`.
///
/// Exactly two characters of `buf` are touched per call, except at in-slot
/// offset 4 where only the following slot is written: the current slot's
/// low 2 bits would receive `value >> 6`, which is always zero for colour
/// values, and the template pre-fills them with zero. Bits belonging to
/// neighbouring cells are preserved via decode/encode read-modify-write.
pub(crate) fn set_quad(buf: &mut [u8], base: usize, pos: usize, value: u8) {
    let slot = base + (pos * 8) / 6;
    match (pos * 8) % 6 {
        0 => {
            buf[slot] = encode_sextet(value >> 2);
            let extra = decode_sextet(buf[slot + 1]);
            buf[slot + 1] = encode_sextet(((value & 0x03) << 4) | (extra & 0x0F));
        }
        2 => {
            let existing = decode_sextet(buf[slot]);
            buf[slot] = encode_sextet((value >> 4) | (existing & 0x30));
            let extra = decode_sextet(buf[slot + 1]);
            buf[slot + 1] = encode_sextet(((value & 0x0F) << 2) | (extra & 0x03));
        }
        _ => {
            // offset 4: the current slot keeps its upper bits untouched.
            buf[slot + 1] = encode_sextet(value & 0x3F);
        }
    }
}

/// Reads back the colour value of pixel cell `pos`. Inverse of [`set_quad`]
/// for cells whose neighbours hold values below 64, which the encoder
/// guarantees.
#[cfg(test)]
pub(crate) fn get_quad(buf: &[u8], base: usize, pos: usize) -> u8 {
    let slot = base + (pos * 8) / 6;
    match (pos * 8) % 6 {
        0 => (decode_sextet(buf[slot]) << 2) | (decode_sextet(buf[slot + 1]) >> 4),
        2 => ((decode_sextet(buf[slot]) & 0x0F) << 4) | (decode_sextet(buf[slot + 1]) >> 2),
        _ => decode_sextet(buf[slot + 1]),
    }
}

/// Writes colour `value` (1..=16) as the single hex digit `value - 1` at
/// `base + offset`. Used by the SVG template family, where one grid cell is
/// one class-name digit.
pub(crate) fn set_hex_quad(buf: &mut [u8], base: usize, offset: usize, value: u8) {
    debug_assert!((1..=16).contains(&value));
    buf[base + offset] = HEX_DIGITS[(value - 1) as usize];
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandalas_base64::decode_sextet;

    fn blank(len: usize) -> Vec<u8> {
        vec![b'A'; len]
    }

    #[test]
    fn round_trips_at_every_in_slot_offset() {
        for pos in 0..24 {
            for value in 1..=16u8 {
                let mut buf = blank(40);
                set_quad(&mut buf, 0, pos, value);
                assert_eq!(get_quad(&buf, 0, pos), value, "pos {pos} value {value}");
            }
        }
    }

    #[test]
    fn adjacent_cells_do_not_interfere() {
        // Ascending writes followed by full readback, across all offsets.
        let values: Vec<u8> = (0..24).map(|i| (i % 16) as u8 + 1).collect();
        let mut buf = blank(40);
        for (pos, &v) in values.iter().enumerate() {
            set_quad(&mut buf, 0, pos, v);
        }
        for (pos, &v) in values.iter().enumerate() {
            assert_eq!(get_quad(&buf, 0, pos), v, "pos {pos}");
        }
    }

    #[test]
    fn offset_0_preserves_low_bits_of_next_slot() {
        let mut buf = blank(8);
        buf[1] = encode_sextet(0b00_1010);
        set_quad(&mut buf, 0, 0, 16);
        assert_eq!(decode_sextet(buf[1]) & 0x0F, 0b1010);
    }

    #[test]
    fn offset_2_preserves_surrounding_bits() {
        let mut buf = blank(8);
        buf[1] = encode_sextet(0b11_0000); // top bits of slot 1 belong to cell 0
        buf[2] = encode_sextet(0b00_0011); // low bits of slot 2 belong to cell 2
        set_quad(&mut buf, 0, 1, 5);
        assert_eq!(decode_sextet(buf[1]) & 0x30, 0b11_0000);
        assert_eq!(decode_sextet(buf[2]) & 0x03, 0b11);
    }

    #[test]
    fn offset_4_leaves_current_slot_alone() {
        let mut buf = blank(8);
        let before = buf[2];
        set_quad(&mut buf, 0, 2, 16); // cell 2 starts at bit 16, in-slot offset 4
        assert_eq!(buf[2], before);
        assert_eq!(decode_sextet(buf[3]), 16);
    }

    #[test]
    fn hex_quad_writes_value_minus_one() {
        let mut buf = b"class='qz'".to_vec();
        set_hex_quad(&mut buf, 0, 8, 16);
        assert_eq!(&buf, b"class='qf'");
        set_hex_quad(&mut buf, 0, 8, 1);
        assert_eq!(&buf, b"class='q0'");
    }
}
