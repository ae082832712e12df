//! The 19x19 packed-bitmap template, diagonal nibble ordering.
//!
//! Shares the GIF asset of [`super::template19`] but maps the 40 id
//! nibbles onto the same half-diagonal cells ordered by distance from the
//! main diagonal instead of row-major, which spreads the most significant
//! digits along the mandala's spokes. This is the variant the frontend
//! mints with.

use super::template19::DATA19;
use crate::template::{PackedBitmapTemplate, Template};

pub(super) const XS_DIAGONAL: [usize; 40] = [1, 2, 3, 4, 5, 6, 7, 2, 3, 4, 5, 6, 2, 3, 4, 5, 6, 7, 8, 9, 3, 6, 7, 8, 9, 5, 6, 7, 8, 9, 5, 6, 7, 8, 9, 7, 8, 9, 9, 9];
pub(super) const YS_DIAGONAL: [usize; 40] = [1, 2, 3, 4, 5, 6, 7, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5, 6, 7, 0, 3, 4, 5, 6, 1, 2, 3, 4, 5, 0, 1, 2, 2, 3, 0, 1, 2, 1, 0];

pub const TEMPLATE19_BIS: Template = Template::PackedBitmap(PackedBitmapTemplate {
    data: DATA19,
    bitmap_data_pos: 531,
    address_data_pos: 74,
    width: 19,
    height: 19,
    row_per_block: 4,
    xs: &XS_DIAGONAL,
    ys: &YS_DIAGONAL,
});
