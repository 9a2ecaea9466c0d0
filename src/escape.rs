//! Escaping of literal symbols for inclusion in a pattern.

/// Returns `true` if `c` has special meaning in a pattern and must be
/// prefixed with a backslash to be matched literally.
pub fn is_meta_character(c: char) -> bool {
    matches!(
        c,
        '\\' | '*' | '+' | '.' | '?' | '{' | '}' | '(' | ')' | '[' | ']' | '^' | '$' | '|'
    )
}

/// Escapes every metacharacter in `text` so the result matches `text` literally.
///
/// Only the characters reported by [`is_meta_character`] are touched; all other
/// characters, including whitespace and non-ASCII text, are copied as is.
///
/// ```
/// use radix_pattern::escape;
///
/// assert_eq!(escape("a.b*c"), r"a\.b\*c");
/// assert_eq!(escape("naïve"), "naïve");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text.chars());
    out
}

/// Appends the escaped form of `symbols` to `out`.
pub(crate) fn push_escaped<I>(out: &mut String, symbols: I)
where
    I: IntoIterator<Item = char>,
{
    for c in symbols {
        if is_meta_character(c) {
            out.push('\\');
        }
        out.push(c);
    }
}
