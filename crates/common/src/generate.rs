//! The token URI generator.

use crate::hex::write_uint_as_hex;
use crate::quad::{set_hex_quad, set_quad};
use crate::symmetry::mirrored_points;
use crate::template::Template;
use crate::token_id::{TokenId, NIBBLE_COUNT};

/// Generates the complete metadata URI for `id` rendered through `template`.
///
/// The template's data string is copied into a working buffer, the id is
/// written as 40 lowercase hex digits into the name field, and each of the
/// id's 40 nibbles is written as a colour value to its half-diagonal
/// coordinate and every mirrored image of it. A nibble of 0 is remapped to
/// colour 16 so an absent colour is never confused with the transparent
/// palette entry.
///
/// Pure and total: same inputs, same output, no error paths. Each call owns
/// its buffer, so concurrent calls with different ids are safe.
pub fn generate_token_uri(id: &TokenId, template: &Template) -> String {
    let mut buf = template.data().as_bytes().to_vec();

    write_uint_as_hex(&mut buf, template.address_data_pos(), id.value());

    let (width, height) = (template.width(), template.height());
    let (xs, ys) = (template.xs(), template.ys());
    for i in 0..NIBBLE_COUNT {
        let mut value = id.nibble(i);
        if value == 0 {
            value = 16; // black, as opposed to transparent
        }
        for (px, py) in mirrored_points(xs[i], ys[i], width, height) {
            match template {
                Template::PackedBitmap(t) => {
                    set_quad(&mut buf, t.bitmap_data_pos, t.pixel_index(px, py), value);
                }
                Template::HexQuad(t) => {
                    set_hex_quad(&mut buf, t.quad_base_pos, t.quad_offset(px, py), value);
                }
            }
        }
    }

    // Every write replaces an ASCII byte with an ASCII byte.
    let uri = String::from_utf8(buf).expect("metadata buffer stays ASCII");

    match template {
        Template::HexQuad(t) => match t.css_fallback {
            Some(fallback) => uri.replacen(fallback.from, fallback.to, 1),
            None => uri,
        },
        Template::PackedBitmap(_) => uri,
    }
}
