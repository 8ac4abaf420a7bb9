use crate::core::constants::{CHAR_OFFSET, CHUNK_MASK, CONTINUATION_BIT};
use crate::util::error::PolylineError;

/// Appends the variable-length encoding of one signed delta to `out`.
///
/// # Wire Format
///
/// Each delta becomes a run of printable ASCII bytes:
///
/// | Step | Operation                                                        |
/// |------|------------------------------------------------------------------|
/// | 1    | Left-shift the value by one bit                                  |
/// | 2    | Bitwise-invert the result if the value was negative              |
/// | 3    | Split into 5-bit chunks, low chunk first                         |
/// | 4    | Set bit `0x20` on every chunk except the last                    |
/// | 5    | Add 63 to each chunk, yielding bytes in `0x3f..=0x7e`            |
///
/// The shift-and-invert in steps 1-2 interleaves positive and negative
/// values so small deltas of either sign stay short on the wire.
///
/// # Example
/// ```
/// use polyline_rs::encode_scalar;
///
/// let mut out = String::new();
/// encode_scalar(-17998321, &mut out);
/// assert_eq!(out, "`~oia@");
/// ```
pub fn encode_scalar(value: i64, out: &mut String) {
    let interleaved = if value < 0 { !(value << 1) } else { value << 1 };
    let mut rem = interleaved as u64;

    while rem >= CONTINUATION_BIT {
        let chunk = (CONTINUATION_BIT | (rem & CHUNK_MASK)) as u8 + CHAR_OFFSET;
        out.push(chunk as char);
        rem >>= 5;
    }
    out.push((rem as u8 + CHAR_OFFSET) as char);
}

/// Decodes one signed delta starting at `cursor`, advancing the cursor past
/// every consumed byte.
///
/// Reads chunks until one arrives without the continuation bit, then undoes
/// the sign interleave applied by [`encode_scalar`].
///
/// # Example
/// ```
/// use polyline_rs::decode_scalar;
///
/// # fn main() -> Result<(), polyline_rs::PolylineError> {
/// let mut cursor = 0;
/// let value = decode_scalar(b"`~oia@", &mut cursor)?;
/// assert_eq!(value, -17998321);
/// assert_eq!(cursor, 6);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`PolylineError::TruncatedScalar`] - input ended with the continuation bit still set
/// - [`PolylineError::InvalidCharacter`] - byte outside the `0x3f..=0x7e` encoding range
/// - [`PolylineError::ScalarOverflow`] - chunk run too long for a 64-bit delta
pub fn decode_scalar(bytes: &[u8], cursor: &mut usize) -> Result<i64, PolylineError> {
    let start = *cursor;
    let mut accum: u64 = 0;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(*cursor) else {
            return Err(PolylineError::TruncatedScalar(start));
        };
        let chunk = match byte.checked_sub(CHAR_OFFSET) {
            Some(c) if c < 0x40 => u64::from(c),
            _ => return Err(PolylineError::InvalidCharacter(byte as char, *cursor)),
        };
        if shift >= u64::BITS {
            return Err(PolylineError::ScalarOverflow(start));
        }
        *cursor += 1;
        accum |= (chunk & CHUNK_MASK) << shift;
        shift += 5;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    if accum & 1 == 1 {
        Ok(!(accum >> 1) as i64)
    } else {
        Ok((accum >> 1) as i64)
    }
}
