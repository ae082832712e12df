//! The 160-bit token identifier.

use num_bigint::BigUint;
use num_traits::{Num, ToPrimitive};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of bits in a token id (an Ethereum-style address value).
pub const ADDRESS_BITS: u32 = 160;

/// Number of hex nibbles in a token id.
pub const NIBBLE_COUNT: usize = 40;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenIdError {
    #[error("empty token id")]
    Empty,
    #[error("invalid digit in token id {0:?}")]
    InvalidDigit(String),
}

/// A 160-bit token identifier.
///
/// Construction masks the value to 160 bits, so every `TokenId` has exactly
/// [`NIBBLE_COUNT`] hex nibbles. The original implementation let oversized
/// ids wrap silently inside the nibble extraction; here the truncation
/// happens once, explicitly, at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenId(BigUint);

impl TokenId {
    /// Wraps a big integer, masking it to 160 bits.
    pub fn new(value: BigUint) -> Self {
        let mask = (BigUint::from(1u8) << ADDRESS_BITS) - 1u8;
        TokenId(value & mask)
    }

    /// Builds a token id from 20 big-endian address bytes.
    pub fn from_address_bytes(bytes: [u8; 20]) -> Self {
        TokenId(BigUint::from_bytes_be(&bytes))
    }

    /// The underlying integer value.
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Extracts hex nibble `i`, most significant first, `i` in `0..40`.
    pub fn nibble(&self, i: usize) -> u8 {
        debug_assert!(i < NIBBLE_COUNT);
        let shifted: BigUint = &self.0 >> (4 * (NIBBLE_COUNT - 1 - i));
        (shifted & BigUint::from(0x0Fu8)).to_u8().unwrap_or(0)
    }
}

impl FromStr for TokenId {
    type Err = TokenIdError;

    /// Parses a decimal or `0x`-prefixed hex token id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TokenIdError::Empty);
        }
        let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => BigUint::from_str_radix(hex, 16),
            None => BigUint::from_str_radix(s, 10),
        }
        .map_err(|_| TokenIdError::InvalidDigit(s.to_owned()))?;
        Ok(TokenId::new(value))
    }
}

impl From<u64> for TokenId {
    fn from(value: u64) -> Self {
        TokenId(BigUint::from(value))
    }
}

impl fmt::Display for TokenId {
    /// Canonical form: `0x` followed by 40 lowercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:0>40}", self.0.to_str_radix(16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_decimal() {
        let a: TokenId = "0xff".parse().unwrap();
        let b: TokenId = "255".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<TokenId>(), Err(TokenIdError::Empty));
        assert!(matches!(
            "0xzz".parse::<TokenId>(),
            Err(TokenIdError::InvalidDigit(_))
        ));
        assert!(matches!(
            "12a".parse::<TokenId>(),
            Err(TokenIdError::InvalidDigit(_))
        ));
    }

    #[test]
    fn masks_to_160_bits() {
        let oversized = BigUint::from(1u8) << 200;
        assert_eq!(TokenId::new(oversized), TokenId::from(0u64));

        let wrap = (BigUint::from(1u8) << 160) + 5u8;
        assert_eq!(TokenId::new(wrap), TokenId::from(5u64));
    }

    #[test]
    fn nibbles_most_significant_first() {
        let id: TokenId = "0x1234000000000000000000000000000000000000"
            .parse()
            .unwrap();
        assert_eq!(id.nibble(0), 0x1);
        assert_eq!(id.nibble(1), 0x2);
        assert_eq!(id.nibble(2), 0x3);
        assert_eq!(id.nibble(3), 0x4);
        assert_eq!(id.nibble(4), 0x0);
        assert_eq!(id.nibble(39), 0x0);
    }

    #[test]
    fn nibble_of_small_id_sits_at_the_end() {
        let id = TokenId::from(0xabu64);
        assert_eq!(id.nibble(38), 0xa);
        assert_eq!(id.nibble(39), 0xb);
        assert_eq!(id.nibble(0), 0);
    }

    #[test]
    fn display_is_padded_address_form() {
        assert_eq!(
            TokenId::from(1u64).to_string(),
            "0x0000000000000000000000000000000000000001"
        );
        let id: TokenId = "0xDEAD00000000000000000000000000000000BEEF"
            .parse()
            .unwrap();
        assert_eq!(
            id.to_string(),
            "0xdead00000000000000000000000000000000beef"
        );
    }

    #[test]
    fn address_bytes_round_trip() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0x12;
        bytes[19] = 0x34;
        let id = TokenId::from_address_bytes(bytes);
        assert_eq!(
            id.to_string(),
            "0x1200000000000000000000000000000000000034"
        );
    }
}
