use crate::hex::HexDecodeError;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Decodes a string of hexadecimal digits into raw bytes.
///
/// Digits are consumed two at a time, most-significant nibble first. An
/// optional `0x`/`0X` prefix is stripped. When the number of digits is odd,
/// the first digit becomes the low nibble of an implicit leading zero byte,
/// so `"ABC"` decodes to `[0x0A, 0xBC]`.
///
/// # Arguments
///
/// * `src` - The hex string to decode.
/// * `capacity` - The maximum number of bytes the caller is willing to accept.
///
/// # Errors
///
/// - `InvalidHexDigit` if any character after the prefix is not a hex digit.
/// - `BufferTooSmall` if the output would exceed `capacity`. Bytes decoded
///   before the overflow are discarded.
///
/// An empty string (or a bare prefix) yields an empty vector.
pub fn decode_hex(src: &str, capacity: usize) -> Result<Vec<u8>, HexDecodeError> {
    let (digits, prefix_len) = strip_hex_prefix(src);
    let required = digits.len().div_ceil(2);

    let mut out = Vec::with_capacity(required.min(capacity));
    let mut is_low_nibble = digits.len() % 2 == 1;
    let mut byte = 0u8;

    for (i, c) in digits.char_indices() {
        let nibble = c
            .to_digit(16)
            .ok_or(HexDecodeError::InvalidHexDigit {
                digit: c,
                position: prefix_len + i,
            })? as u8;

        if is_low_nibble {
            if out.len() == capacity {
                return Err(HexDecodeError::BufferTooSmall { required, capacity });
            }
            out.push(byte | nibble);
        } else {
            byte = nibble << 4;
        }

        is_low_nibble = !is_low_nibble;
    }

    Ok(out)
}

/// Renders bytes as contiguous uppercase hex digits.
pub fn encode_upper(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);

    for &b in bytes {
        out.push(HEX_UPPER[(b >> 4) as usize] as char);
        out.push(HEX_UPPER[(b & 0x0F) as usize] as char);
    }

    out
}

fn strip_hex_prefix(src: &str) -> (&str, usize) {
    match src.strip_prefix("0x").or_else(|| src.strip_prefix("0X")) {
        Some(rest) => (rest, 2),
        None => (src, 0),
    }
}
