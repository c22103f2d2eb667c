/// Appended to every pattern built by [`key_glob()`].
pub const GLOB_SUFFIX: &str = ":*";

/// Builds a key-value store glob pattern that finds keys of one type matching a value.
///
/// The `prefix` is the key type prefix and should include its delimiter (e.g. `__sid:`), while
/// `needle` is the value being looked for and should not (e.g. `eric@example.com`). The result
/// is `prefix + needle + ":*"`. Neither part is validated or escaped.
///
/// ```
/// assert_eq!(
///     tidbits::key_glob("__sid:", "eric@example.com"),
///     "__sid:eric@example.com:*"
/// );
/// ```
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "the lengths of existing strings cannot sum to overflow usize"
)]
pub fn key_glob(prefix: &str, needle: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + needle.len() + GLOB_SUFFIX.len());

    pattern.push_str(prefix);
    pattern.push_str(needle);
    pattern.push_str(GLOB_SUFFIX);

    pattern
}
