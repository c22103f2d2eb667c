use crate::{BASE36, Radix};

/// Parses `input` as a base-36 unsigned integer.
///
/// Digits are `0-9` followed by `a-z`, case-insensitive, so `"zz"` is 1295. No sign, prefix or
/// whitespace is accepted. An empty string is valid input and parses to zero; callers that
/// need at least one digit must check for that separately.
///
/// On failure, [`Error::clamped_value()`][crate::Error::clamped_value] gives the best-effort
/// value: zero for a syntax error and `u64::MAX` for a value that does not fit in 64 bits.
///
/// ```
/// assert_eq!(tidbits::parse_u64("zz").unwrap(), 1295);
/// assert_eq!(tidbits::parse_u64("").unwrap(), 0);
///
/// let error = tidbits::parse_u64("99999999999999999999").unwrap_err();
/// assert_eq!(error.clamped_value(), Some(u64::MAX));
/// ```
pub fn parse_u64(input: &str) -> crate::Result<u64> {
    parse_u64_radix(input, BASE36)
}

/// Parses `input` as an unsigned integer in the given radix.
///
/// Uses the same digit set as [`parse_u64()`]; a digit whose value is not below `radix` is a
/// syntax error. With [`DECIMAL`][crate::DECIMAL] this is the inverse of
/// [`format_u64()`][crate::format_u64].
///
/// ```
/// use tidbits::{DECIMAL, format_u64, parse_u64_radix};
///
/// let text = format_u64(u64::MAX);
/// assert_eq!(parse_u64_radix(&text, DECIMAL).unwrap(), u64::MAX);
/// ```
pub fn parse_u64_radix(input: &str, radix: Radix) -> crate::Result<u64> {
    let radix = u64::from(radix.get());

    // Any accumulated value at or above this overflows when multiplied by the radix.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "radix is at least 2, so no division by zero and the sum stays far below u64::MAX"
    )]
    #[expect(clippy::integer_division, reason = "we want the floor")]
    let cutoff = u64::MAX / radix + 1;

    let mut value: u64 = 0;

    for byte in input.bytes() {
        let digit = digit_value(byte)
            .filter(|&digit| digit < radix)
            .ok_or_else(|| crate::Error::Syntax {
                input: input.to_string(),
            })?;

        if value >= cutoff {
            return Err(crate::Error::Range {
                input: input.to_string(),
            });
        }

        #[expect(
            clippy::arithmetic_side_effects,
            reason = "value < cutoff, so value * radix <= u64::MAX"
        )]
        let scaled = value * radix;

        value = scaled
            .checked_add(digit)
            .ok_or_else(|| crate::Error::Range {
                input: input.to_string(),
            })?;
    }

    Ok(value)
}

/// The value of a base-36 digit, or `None` if `byte` is not one.
fn digit_value(byte: u8) -> Option<u64> {
    let value = match byte {
        b'0'..=b'9' => byte.wrapping_sub(b'0'),
        b'a'..=b'z' => byte.wrapping_sub(b'a').wrapping_add(10),
        b'A'..=b'Z' => byte.wrapping_sub(b'A').wrapping_add(10),
        _ => return None,
    };

    Some(u64::from(value))
}
