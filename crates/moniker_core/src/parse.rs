//! Parsing of raw provider output into a username list.

/// Maximum accepted username length, in characters.
pub const MAX_USERNAME_LEN: usize = 30;

/// Extracts at most `count` usernames from raw provider text.
///
/// The raw text is trimmed and split into lines; each line is trimmed,
/// empty lines and lines longer than [`MAX_USERNAME_LEN`] characters are
/// discarded, and the survivors are truncated to the first `count` in
/// their original order. Filtering happens before truncation, so the
/// returned list is best-effort and may hold fewer than `count` entries.
/// No lower length bound or charset check is applied.
///
/// # Examples
///
/// ```
/// use moniker_core::parse_usernames;
///
/// let usernames = parse_usernames("alice_99\n\n   \nbob.art", 5);
/// assert_eq!(usernames, vec!["alice_99", "bob.art"]);
///
/// let usernames = parse_usernames("one\ntwo\nthree", 2);
/// assert_eq!(usernames, vec!["one", "two"]);
/// ```
pub fn parse_usernames(raw: &str, count: usize) -> Vec<String> {
    raw.trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.chars().count() <= MAX_USERNAME_LEN)
        .take(count)
        .map(ToString::to_string)
        .collect()
}
