//! The fixed template registry.
//!
//! Four process-wide constant templates, distinguished by grid size and
//! encoding family. Callers pick one and hand it to
//! [`crate::generate_token_uri`]; nothing here is ever mutated.

mod template17;
mod template19;
mod template19_bis;
mod template19_svg;

pub use template17::TEMPLATE17;
pub use template19::TEMPLATE19;
pub use template19_bis::TEMPLATE19_BIS;
pub use template19_svg::TEMPLATE19_SVG;

use crate::template::Template;

/// Every template in the registry.
pub fn all() -> [&'static Template; 4] {
    [&TEMPLATE17, &TEMPLATE19, &TEMPLATE19_BIS, &TEMPLATE19_SVG]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Template;

    #[test]
    fn registry_templates_are_valid() {
        for template in all() {
            template.validate().unwrap();
        }
    }

    #[test]
    fn address_window_is_prefilled_with_zeros() {
        for template in all() {
            let data = template.data().as_bytes();
            let end = template.address_data_pos();
            assert_eq!(&data[end - 41..end - 39], b"0x");
            assert!(data[end - 39..=end].iter().all(|&b| b == b'0'));
        }
    }

    #[test]
    fn packed_cells_land_inside_the_blob() {
        for template in all() {
            let Template::PackedBitmap(t) = template else {
                continue;
            };
            let blob_end = t.data.rfind("'/>").unwrap();
            let max_cell = t.pixel_index(t.width - 1, t.height - 1);
            let last_slot = t.bitmap_data_pos + (max_cell * 8) / 6 + 1;
            assert!(last_slot < blob_end, "cell overruns blob in {}x{}", t.width, t.height);
            assert!(t.data.as_bytes()[t.bitmap_data_pos..=last_slot]
                .iter()
                .all(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/'));
        }
    }

    #[test]
    fn hex_quad_cells_land_on_class_digits() {
        let Template::HexQuad(t) = &TEMPLATE19_SVG else {
            panic!("TEMPLATE19_SVG is hex-quad");
        };
        let data = t.data.as_bytes();
        for y in 0..t.height {
            for x in 0..t.width {
                let pos = t.quad_base_pos + t.quad_offset(x, y);
                assert_eq!(data[pos], b'z', "cell ({x},{y})");
                assert_eq!(&data[pos - 2..pos], b"'q");
            }
        }
    }

    #[test]
    fn nineteen_variants_share_the_asset_but_not_the_ordering() {
        assert_eq!(TEMPLATE19.data(), TEMPLATE19_BIS.data());
        assert_ne!(TEMPLATE19.xs(), TEMPLATE19_BIS.xs());
        // Same cells, different order.
        let mut a: Vec<_> = TEMPLATE19
            .xs()
            .iter()
            .zip(TEMPLATE19.ys())
            .map(|(&x, &y)| (x, y))
            .collect();
        let mut b: Vec<_> = TEMPLATE19_BIS
            .xs()
            .iter()
            .zip(TEMPLATE19_BIS.ys())
            .map(|(&x, &y)| (x, y))
            .collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }
}
