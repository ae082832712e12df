//! Base64 alphabet codec.
//!
//! The mandalas metadata encoder never encodes or decodes whole base64
//! streams: it patches individual 6-bit slots of an already-encoded blob in
//! place. All it needs is the bidirectional mapping between one 6-bit value
//! and one character of the standard alphabet, which is what this crate
//! provides.
//!
//! # Example
//!
//! ```
//! use mandalas_base64::{decode_sextet, encode_sextet};
//!
//! assert_eq!(encode_sextet(26), b'a');
//! assert_eq!(decode_sextet(b'a'), 26);
//! ```

mod constants;
mod decode_sextet;
mod encode_sextet;

pub use constants::{ALPHABET, ALPHABET_BYTES};
pub use decode_sextet::decode_sextet;
pub use encode_sextet::encode_sextet;
