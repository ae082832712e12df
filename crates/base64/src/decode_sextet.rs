//! Base64 character to 6-bit value.

/// Decodes a standard base64 alphabet byte back to its 6-bit value.
///
/// The decode is permissive: bytes outside the alphabet map to 0 rather
/// than erroring. Callers only ever decode characters this codec produced
/// itself, or the `A` (zero) padding of a pre-built template blob, so a
/// best-effort decode is all that is needed.
///
/// # Example
///
/// ```
/// use mandalas_base64::decode_sextet;
///
/// assert_eq!(decode_sextet(b'B'), 1);
/// assert_eq!(decode_sextet(b'='), 0);
/// ```
pub fn decode_sextet(byte: u8) -> u8 {
    match byte {
        b'A'..=b'Z' => byte - b'A',
        b'a'..=b'z' => byte - b'a' + 26,
        b'0'..=b'9' => byte - b'0' + 52,
        b'+' => 62,
        b'/' => 63,
        _ => 0,
    }
}
