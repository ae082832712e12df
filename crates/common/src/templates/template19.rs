//! The 19x19 packed-bitmap template, row-major nibble ordering.
//!
//! Same construction as the 17x17 asset (GIF87a, shared palette, 8-bit LZW
//! codes, four rows per sub-block); a two-byte comment extension pads the
//! header so the first clear code lands on a 3-byte boundary, keeping pixel
//! cell 0 aligned to a base64 slot.

use crate::template::{PackedBitmapTemplate, Template};

pub(super) const DATA19: &str = r#"data:text/plain,{"name":"Mandala 0x0000000000000000000000000000000000000000","description":"A Unique Mandala","image":"data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' shape-rendering='crispEdges' width='512' height='512'><g transform='scale(27)'><image width='19' height='19' style='image-rendering: pixelated;' href='data:image/gif;base64,R0lGODdhEwATAMQAAAAAAPb+Y/7EJfN3NNARQUUKLG0bMsR1SujKqW7wQwe/dQBcmQeEqjDR0UgXo4A0vrlq2AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAACH+Ak0xACH5BAkKAAAALAAAAAATABMAAAdNgAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABNgAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABNgAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABNgAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA6gAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAGBADs='/></g></svg>"}"#;

const XS: [usize; 40] = [2, 3, 5, 7, 9, 1, 2, 3, 5, 6, 8, 9, 2, 3, 4, 6, 7, 8, 9, 3, 4, 5, 6, 7, 9, 4, 5, 6, 7, 8, 5, 6, 7, 8, 9, 6, 8, 9, 7, 9];
const YS: [usize; 40] = [0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 6, 6, 6, 7, 7];

pub const TEMPLATE19: Template = Template::PackedBitmap(PackedBitmapTemplate {
    data: DATA19,
    bitmap_data_pos: 531,
    address_data_pos: 74,
    width: 19,
    height: 19,
    row_per_block: 4,
    xs: &XS,
    ys: &YS,
});
