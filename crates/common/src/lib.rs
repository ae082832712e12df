//! Deterministic mandala token metadata encoder.
//!
//! A mandala token's on-chain metadata (name, description and a pixel-art
//! image) is generated entirely from its 160-bit token id. This crate is the
//! Rust port of the original `mandalas-common` TypeScript package: given a
//! [`TokenId`] and one of the constant [`Template`]s from [`templates`], it
//! produces the complete `data:` metadata URI by
//!
//! 1. writing the id as 40 lowercase hex digits into the name field, and
//! 2. writing one 4-bit colour value per id nibble into the template's
//!    pixel blob, expanded 8-fold across the grid's axes of symmetry.
//!
//! The encoder is a pure function over its inputs: no I/O, no shared mutable
//! state, identical output for identical `(id, template)` pairs.
//!
//! # Example
//!
//! ```
//! use mandalas_common::{generate_token_uri, templates::TEMPLATE17, TokenId};
//!
//! let id: TokenId = "0x0000000000000000000000000000000000000001".parse().unwrap();
//! let uri = generate_token_uri(&id, &TEMPLATE17);
//! assert!(uri.starts_with("data:text/plain,"));
//! assert!(uri.contains("0000000000000000000000000000000000000001"));
//! ```

mod generate;
mod hex;
pub mod metadata;
mod quad;
mod symmetry;
pub mod template;
pub mod templates;
mod token_id;

pub use generate::generate_token_uri;
pub use metadata::{parse_token_uri, MetadataError, TokenMetadata};
pub use template::{CssFallback, HexQuadTemplate, PackedBitmapTemplate, Template, TemplateError};
pub use token_id::{TokenId, TokenIdError, ADDRESS_BITS, NIBBLE_COUNT};
