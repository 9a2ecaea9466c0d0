//! Rendering configuration.

/// The kind of group wrapped around each alternation in a rendered pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    /// `(...)`, understood by every engine with a PCRE-like syntax.
    Capturing,
    /// `(?:...)`, which keeps the pattern from consuming capture slots.
    NonCapturing,
}

impl Group {
    pub(crate) fn open(self) -> &'static str {
        match self {
            Group::Capturing => "(",
            Group::NonCapturing => "(?:",
        }
    }

    pub(crate) fn close(self) -> &'static str {
        ")"
    }
}

/// Configuration for rendering a trie as a pattern.
///
/// Unset options fall back to their defaults, so `Config::new()` renders the
/// same text as a trie created with [`Trie::new`](crate::Trie::new).
///
/// ```
/// use radix_pattern::{Config, Group, Trie};
///
/// let mut trie = Trie::with_config(Config::new().group(Group::NonCapturing));
/// trie.insert("cat");
/// trie.insert("car");
/// assert_eq!(trie.pattern(), "(?:ca(?:r|t))");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    group: Option<Group>,
}

impl Config {
    /// Return a new default configuration.
    pub fn new() -> Config {
        Config::default()
    }

    /// Set the kind of group used to wrap alternations.
    pub fn group(mut self, group: Group) -> Config {
        self.group = Some(group);
        self
    }

    /// Returns the kind of group used to wrap alternations. Defaults to
    /// [`Group::Capturing`].
    pub fn get_group(&self) -> Group {
        self.group.unwrap_or(Group::Capturing)
    }

    /// Returns a configuration where options set in `o` take precedence over
    /// the ones set in `self`.
    pub fn overwrite(self, o: Config) -> Config {
        Config { group: o.group.or(self.group) }
    }
}
