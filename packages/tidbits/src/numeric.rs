use deranged::RangedU32;

/// The base in which digits are formatted or parsed. Any value in `2..=36` is valid.
///
/// Digits above 9 are the letters `a` to `z`.
pub type Radix = RangedU32<2, 36>;

/// Base 10, the radix of [`format_u64()`] and [`width()`].
pub const DECIMAL: Radix = Radix::new_static::<10>();

/// Base 36, the radix of [`parse_u64()`][crate::parse_u64].
pub const BASE36: Radix = Radix::new_static::<36>();

/// The largest number of characters [`format_u64()`] can produce, reached by `u64::MAX`.
pub const MAX_DECIMAL_WIDTH: usize = 20;

/// Enough room for `u64::MAX` in base 2, the longest representation in any radix.
const BUFFER_LEN: usize = 64;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Every two-digit decimal group `00` to `99`, so we can emit two digits per division.
const DIGIT_PAIRS: &[u8; 200] = b"\
0001020304050607080910111213141516171819202122232425262728293031323334353637383940414243444546474849\
5051525354555657585960616263646566676869707172737475767778798081828384858687888990919293949596979899";

/// Every power of ten that fits in a `u64`, starting from 10^1.
///
/// A number has printed width `k + 1` when exactly `k` of these are less than or equal to it.
const POWERS_OF_TEN: [u64; MAX_DECIMAL_WIDTH - 1] = [
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Formats `n` as decimal digits with no sign, separators or leading zeros.
///
/// Zero is formatted as `"0"`. The length of the result is always [`width(n)`][width].
///
/// # Example
///
/// ```
/// assert_eq!(tidbits::format_u64(1776), "1776");
/// assert_eq!(tidbits::format_u64(u64::MAX), "18446744073709551615");
/// ```
#[must_use]
pub fn format_u64(n: u64) -> String {
    let mut buffer = [0_u8; BUFFER_LEN];
    let start = write_decimal(n, &mut buffer);

    collect_digits(&buffer, start)
}

/// Formats `n` in the given radix, using lowercase letters for digits above 9.
///
/// ```
/// use tidbits::{Radix, format_u64_radix};
///
/// let hex = Radix::new(16).unwrap();
/// assert_eq!(format_u64_radix(255, hex), "ff");
/// assert_eq!(format_u64_radix(1295, tidbits::BASE36), "zz");
/// ```
#[must_use]
pub fn format_u64_radix(n: u64, radix: Radix) -> String {
    let mut buffer = [0_u8; BUFFER_LEN];

    let start = if radix == DECIMAL {
        write_decimal(n, &mut buffer)
    } else {
        write_radix(n, u64::from(radix.get()), &mut buffer)
    };

    collect_digits(&buffer, start)
}

/// Returns the number of characters [`format_u64()`] produces for `n`. The minimum is 1.
///
/// ```
/// assert_eq!(tidbits::width(0), 1);
/// assert_eq!(tidbits::width(100), 3);
/// assert_eq!(tidbits::width(u64::MAX), 20);
/// ```
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "partition point is at most the table length, which is one less than the maximum width"
)]
pub fn width(n: u64) -> usize {
    POWERS_OF_TEN.partition_point(|&power| power <= n) + 1
}

/// Writes the decimal digits of `n` to the end of `buffer` and returns the index of the first.
#[expect(
    clippy::indexing_slicing,
    reason = "a u64 has at most 20 decimal digits so the buffer never runs out; pair offsets are < 200"
)]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "start only moves backwards by at most 20 positions from 64"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "values below 100 always fit in usize"
)]
fn write_decimal(mut n: u64, buffer: &mut [u8; BUFFER_LEN]) -> usize {
    let mut start = BUFFER_LEN;

    while n >= 100 {
        let pair = (n % 100) as usize * 2;
        n /= 100;

        start -= 2;
        buffer[start..start + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    }

    // n < 100
    if n >= 10 {
        let pair = n as usize * 2;

        start -= 2;
        buffer[start..start + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    } else {
        start -= 1;
        buffer[start] = DIGITS[n as usize];
    }

    start
}

#[expect(
    clippy::indexing_slicing,
    reason = "64 digits fit any u64 in radix >= 2 and every remainder is < 36"
)]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "radix is at least 2, so no division by zero and start never underflows"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "remainders below 36 always fit in usize"
)]
fn write_radix(mut n: u64, radix: u64, buffer: &mut [u8; BUFFER_LEN]) -> usize {
    let mut start = BUFFER_LEN;

    loop {
        start -= 1;
        buffer[start] = DIGITS[(n % radix) as usize];
        n /= radix;

        if n == 0 {
            return start;
        }
    }
}

fn collect_digits(buffer: &[u8; BUFFER_LEN], start: usize) -> String {
    buffer
        .iter()
        .skip(start)
        .copied()
        .map(char::from)
        .collect()
}
