//! Template descriptors.
//!
//! A template is an immutable, process-wide constant describing one visual
//! family of mandala art: the metadata string to copy, the offsets to write
//! into, the grid geometry and the half-diagonal coordinate tables that the
//! 40 id nibbles map onto. Two encoding families exist, distinguished by
//! how a pixel is stored: packed byte cells inside a base64 GIF blob, or
//! one literal hex digit per `<rect>` of an inline SVG.

use crate::token_id::NIBBLE_COUNT;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("coordinate tables must both have {NIBBLE_COUNT} entries, got {xs} and {ys}")]
    CoordinateCountMismatch { xs: usize, ys: usize },
    #[error("grid must be square, got {width}x{height}")]
    NonSquareGrid { width: usize, height: usize },
    #[error("grid side must be odd, got {0}")]
    EvenGridSide(usize),
    #[error("coordinate ({x},{y}) outside the half-diagonal of a {side}x{side} grid")]
    CoordinateOutOfRange { x: usize, y: usize, side: usize },
}

/// A template whose image is a base64-encoded GIF blob with one byte-sized
/// pixel cell per grid coordinate.
#[derive(Debug, Clone, Copy)]
pub struct PackedBitmapTemplate {
    /// The complete metadata string the generator copies and patches.
    pub data: &'static str,
    /// Char offset of pixel cell 0 (the first sub-block's clear code).
    pub bitmap_data_pos: usize,
    /// Inclusive char offset of the last hex digit of the id rendering.
    pub address_data_pos: usize,
    pub width: usize,
    pub height: usize,
    /// Bitmap rows per GIF sub-block; every block inserts two framing bytes
    /// (length byte and clear code) that pixel indexing must skip.
    pub row_per_block: usize,
    pub xs: &'static [usize],
    pub ys: &'static [usize],
}

impl PackedBitmapTemplate {
    /// Linear pixel cell index of grid coordinate `(x, y)`, skipping the
    /// per-block framing bytes and the initial clear code.
    pub fn pixel_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x + (y / self.row_per_block) * 2 + 1
    }
}

/// The fixed CSS fragment replacement giving Firefox a crisp-edges
/// fallback; applied once, after all pixel writes.
#[derive(Debug, Clone, Copy)]
pub struct CssFallback {
    pub from: &'static str,
    pub to: &'static str,
}

/// A template whose image is an inline SVG with one `<rect>` per grid cell
/// at a fixed character stride, coloured by a single hex class digit.
#[derive(Debug, Clone, Copy)]
pub struct HexQuadTemplate {
    /// The complete metadata string the generator copies and patches.
    pub data: &'static str,
    /// Char offset of cell (0,0)'s class digit.
    pub quad_base_pos: usize,
    /// Character distance between consecutive cells' class digits.
    pub quad_stride: usize,
    /// Inclusive char offset of the last hex digit of the id rendering.
    pub address_data_pos: usize,
    pub width: usize,
    pub height: usize,
    pub xs: &'static [usize],
    pub ys: &'static [usize],
    pub css_fallback: Option<CssFallback>,
}

impl HexQuadTemplate {
    /// Char offset (relative to `quad_base_pos`) of the class digit for
    /// grid coordinate `(x, y)`.
    pub fn quad_offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * self.quad_stride
    }
}

/// A template descriptor, tagged by encoding family.
#[derive(Debug, Clone, Copy)]
pub enum Template {
    PackedBitmap(PackedBitmapTemplate),
    HexQuad(HexQuadTemplate),
}

impl Template {
    pub fn data(&self) -> &'static str {
        match self {
            Template::PackedBitmap(t) => t.data,
            Template::HexQuad(t) => t.data,
        }
    }

    pub fn address_data_pos(&self) -> usize {
        match self {
            Template::PackedBitmap(t) => t.address_data_pos,
            Template::HexQuad(t) => t.address_data_pos,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Template::PackedBitmap(t) => t.width,
            Template::HexQuad(t) => t.width,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Template::PackedBitmap(t) => t.height,
            Template::HexQuad(t) => t.height,
        }
    }

    pub fn xs(&self) -> &'static [usize] {
        match self {
            Template::PackedBitmap(t) => t.xs,
            Template::HexQuad(t) => t.xs,
        }
    }

    pub fn ys(&self) -> &'static [usize] {
        match self {
            Template::PackedBitmap(t) => t.ys,
            Template::HexQuad(t) => t.ys,
        }
    }

    /// Checks the structural invariants a well-formed template must hold:
    /// 40-entry coordinate tables, a square grid with odd side, and every
    /// coordinate inside the grid's half-diagonal (`y <= x <= centre`).
    ///
    /// Validation is a construction-time concern; the constants shipped in
    /// [`crate::templates`] are covered by tests and never re-checked on
    /// the per-call path.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let (width, height) = (self.width(), self.height());
        if width != height {
            return Err(TemplateError::NonSquareGrid { width, height });
        }
        if width % 2 == 0 {
            return Err(TemplateError::EvenGridSide(width));
        }
        let (xs, ys) = (self.xs(), self.ys());
        if xs.len() != NIBBLE_COUNT || ys.len() != NIBBLE_COUNT {
            return Err(TemplateError::CoordinateCountMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let center = width / 2;
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            if y > x || x > center {
                return Err(TemplateError::CoordinateOutOfRange { x, y, side: width });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TEMPLATE17;

    #[test]
    fn pixel_index_skips_block_framing() {
        let Template::PackedBitmap(t) = TEMPLATE17 else {
            panic!("TEMPLATE17 is packed");
        };
        // First pixel of row 0 sits right after the clear code.
        assert_eq!(t.pixel_index(0, 0), 1);
        assert_eq!(t.pixel_index(16, 0), 17);
        // Row 4 starts a new sub-block: two extra framing bytes.
        assert_eq!(t.pixel_index(0, 4), 4 * 17 + 2 + 1);
        assert_eq!(t.pixel_index(16, 16), 16 * 17 + 16 + 8 + 1);
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        static XS_BAD: [usize; 40] = [9; 40];
        static YS_BAD: [usize; 40] = [0; 40];
        let Template::PackedBitmap(mut t) = TEMPLATE17 else {
            panic!("TEMPLATE17 is packed");
        };
        t.xs = &XS_BAD; // 9 > centre of a 17x17 grid
        t.ys = &YS_BAD;
        assert_eq!(
            Template::PackedBitmap(t).validate(),
            Err(TemplateError::CoordinateOutOfRange { x: 9, y: 0, side: 17 })
        );
    }

    #[test]
    fn short_coordinate_table_is_rejected() {
        static XS_SHORT: [usize; 3] = [1, 2, 3];
        static YS_SHORT: [usize; 3] = [0, 0, 0];
        let Template::PackedBitmap(mut t) = TEMPLATE17 else {
            panic!("TEMPLATE17 is packed");
        };
        t.xs = &XS_SHORT;
        t.ys = &YS_SHORT;
        assert_eq!(
            Template::PackedBitmap(t).validate(),
            Err(TemplateError::CoordinateCountMismatch { xs: 3, ys: 3 })
        );
    }

    #[test]
    fn even_or_rectangular_grids_are_rejected() {
        let Template::PackedBitmap(base) = TEMPLATE17 else {
            panic!("TEMPLATE17 is packed");
        };
        let mut t = base;
        t.width = 16;
        t.height = 16;
        assert_eq!(
            Template::PackedBitmap(t).validate(),
            Err(TemplateError::EvenGridSide(16))
        );
        let mut t = base;
        t.height = 19;
        assert_eq!(
            Template::PackedBitmap(t).validate(),
            Err(TemplateError::NonSquareGrid { width: 17, height: 19 })
        );
    }
}
