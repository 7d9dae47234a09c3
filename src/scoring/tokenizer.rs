//! Headline tokenization.
//!
//! A token is a maximal run of word characters after the headline has been
//! lowercased and stripped of punctuation. Word characters are Unicode letters,
//! digits and `_`, so Turkish letters such as `ş` or `ğ` survive intact.
//! Combining marks (Arabic harakat, Devanagari vowel signs, the dot left behind
//! by lowercasing `İ`) are not word characters and are removed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is neither a letter, a digit, `_` nor whitespace.
/// U+001C..U+001F count as whitespace (information separators).
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s\x{1C}-\x{1F}]").expect("static token pattern"));

/// Split a headline into normalized tokens.
///
/// Lowercases the whole string, drops every character that is neither a word
/// character nor whitespace, then splits on whitespace. Punctuation is removed
/// rather than treated as a separator: `"artış,"` becomes `"artış"` and
/// `"a.b"` becomes `"ab"`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(tokenize("Borsa rekor kırdı!"), vec!["borsa", "rekor", "kırdı"]);
/// assert!(tokenize("?!...").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, "");

    cleaned
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a lexicon key the same way headline text is normalized.
///
/// Returns `None` when the key does not reduce to exactly one token; such a key
/// (`"son durum"`, `"!!"`) could never match a headline token.
pub fn normalize_key(key: &str) -> Option<String> {
    let mut tokens = tokenize(key);
    match tokens.len() {
        1 => tokens.pop(),
        _ => None,
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}
