//! Conversion of trie keys into symbol sequences.
use std::borrow::Cow;

/// A type that can be turned into the sequence of symbols the trie stores.
///
/// A symbol is a single `char`, so multi-byte text is never split in the
/// middle of a character. `Cow` allows slices of symbols to be borrowed as is,
/// while strings are decoded into an owned buffer.
pub trait IntoSymbols<'a> {
    /// Converts `self` into a `Cow<[char]>`.
    fn into_symbols(self) -> Cow<'a, [char]>;
}

impl<'a> IntoSymbols<'a> for &'a str {
    fn into_symbols(self) -> Cow<'a, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl<'a> IntoSymbols<'a> for &'a String {
    fn into_symbols(self) -> Cow<'a, [char]> {
        self.as_str().into_symbols()
    }
}

impl<'a> IntoSymbols<'a> for String {
    fn into_symbols(self) -> Cow<'a, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl<'a> IntoSymbols<'a> for char {
    fn into_symbols(self) -> Cow<'a, [char]> {
        Cow::Owned(vec![self])
    }
}

impl<'a> IntoSymbols<'a> for &'a [char] {
    fn into_symbols(self) -> Cow<'a, [char]> {
        Cow::Borrowed(self)
    }
}

impl<'a> IntoSymbols<'a> for &'a Vec<char> {
    fn into_symbols(self) -> Cow<'a, [char]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<'a> IntoSymbols<'a> for Vec<char> {
    fn into_symbols(self) -> Cow<'a, [char]> {
        Cow::Owned(self)
    }
}

impl<'a, const N: usize> IntoSymbols<'a> for &'a [char; N] {
    fn into_symbols(self) -> Cow<'a, [char]> {
        Cow::Borrowed(&self[..])
    }
}

impl<'a, const N: usize> IntoSymbols<'a> for [char; N] {
    fn into_symbols(self) -> Cow<'a, [char]> {
        Cow::Owned(self.to_vec())
    }
}
