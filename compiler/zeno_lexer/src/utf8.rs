//! Strict UTF-8 decoding of a single character.

/// Sequence length by the top five bits of the lead byte; `0` is invalid.
const LENGTHS: [u8; 32] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0xxxx
    0, 0, 0, 0, 0, 0, 0, 0, // 10xxx: continuation byte
    2, 2, 2, 2, // 110xx
    3, 3, // 1110x
    4, // 11110
    0, // 11111
];

/// Smallest code point each sequence length may encode.
const MIN_CODE_POINT: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Decode the character at the start of `bytes`.
///
/// Returns the code point and its encoded length, or `None` for a
/// malformed sequence: a stray continuation byte, a truncated sequence, an
/// overlong encoding, an encoded surrogate or a value above U+10FFFF.
/// Never reads past the end of `bytes`.
pub fn decode(bytes: &[u8]) -> Option<(u32, usize)> {
    let lead = *bytes.first()?;
    let len = usize::from(LENGTHS[usize::from(lead >> 3)]);
    match len {
        0 => None,
        1 => Some((u32::from(lead), 1)),
        _ => {
            let tail = bytes.get(1..len)?;
            let mut code_point = u32::from(lead) & (0x7F >> len);
            for &byte in tail {
                if byte & 0xC0 != 0x80 {
                    return None;
                }
                code_point = (code_point << 6) | u32::from(byte & 0x3F);
            }
            if code_point < MIN_CODE_POINT[len]
                || (0xD800..=0xDFFF).contains(&code_point)
                || code_point > MAX_CODE_POINT
            {
                return None;
            }
            Some((code_point, len))
        }
    }
}

#[cfg(test)]
mod tests;
