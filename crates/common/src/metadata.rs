//! Parsing generated metadata URIs back into structured form.
//!
//! The surrounding system (frontend stores, service worker, indexer) treats
//! the generated string as a `data:text/plain,` URI wrapping a JSON object.
//! This module is the consuming side of that contract.

use serde::Deserialize;
use thiserror::Error;

const TEXT_PLAIN_PREFIX: &str = "data:text/plain,";

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("not a data:text/plain URI")]
    NotTextPlain,
    #[error("invalid metadata JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// The metadata object embedded in a token URI.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    /// A nested `data:image/...` URI holding the mandala image.
    pub image: String,
}

/// Parses a generated token URI into its [`TokenMetadata`].
pub fn parse_token_uri(uri: &str) -> Result<TokenMetadata, MetadataError> {
    let payload = uri
        .strip_prefix(TEXT_PLAIN_PREFIX)
        .ok_or(MetadataError::NotTextPlain)?;
    Ok(serde_json::from_str(payload)?)
}
