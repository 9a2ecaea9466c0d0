//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! building a vocabulary and rendering it as a pattern.

use std::fmt;

use once_cell::unsync::OnceCell;

use crate::config::Config;
use crate::iter::Iter;
use crate::node::Fork;
use crate::symbols::IntoSymbols;

/// A prefix-compressed set of strings that renders as a single pattern.
///
/// Strings sharing a prefix are stored below a single copy of that prefix,
/// whatever order they were inserted in. [`Trie::pattern`] turns the tree
/// into an alternation that matches exactly the inserted strings; anchoring
/// it (with `^`/`$` or an engine flag) is up to the caller.
///
/// The rendered text is cached and only recomputed after an insertion that
/// changes the set.
#[derive(Clone, Debug, Default)]
pub struct Trie {
    /// The root fork of the tree
    root: Fork,

    /// The number of distinct strings stored in the trie
    size: usize,

    /// How the pattern is rendered
    config: Config,

    /// The rendered pattern, computed lazily
    pattern: OnceCell<String>,
}

impl Trie {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_pattern::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// assert_eq!(trie.pattern(), "");
    /// ```
    pub fn new() -> Self {
        Trie::default()
    }

    /// Creates a new, empty trie that renders with `config`.
    pub fn with_config(config: Config) -> Self {
        Trie {
            config,
            ..Trie::default()
        }
    }

    /// Returns the configuration used by [`Trie::pattern`].
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the number of distinct strings stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_pattern::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello");
    /// trie.insert("hello");
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no strings.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts a string into the trie.
    ///
    /// Returns `true` if the string was not present before. Inserting a
    /// string twice changes nothing. The empty string is a valid key.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_pattern::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.insert("cat"));
    /// assert!(trie.insert("car"));
    /// assert!(!trie.insert("cat"));
    /// assert_eq!(trie.pattern(), "(ca(r|t))");
    /// ```
    pub fn insert<'a, K: IntoSymbols<'a>>(&mut self, key: K) -> bool {
        let symbols = key.into_symbols();

        let added = self.root.insert(&symbols);
        if added {
            self.size += 1;
            self.pattern.take();
        }

        added
    }

    /// Returns `true` if the string was inserted into the trie.
    ///
    /// Only whole strings count: a proper prefix of an inserted string is not
    /// contained unless it was inserted itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_pattern::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello");
    ///
    /// assert!(trie.contains("hello"));
    /// assert!(!trie.contains("hell"));
    /// ```
    pub fn contains<'a, K: IntoSymbols<'a>>(&self, key: K) -> bool {
        self.root.contains(&key.into_symbols())
    }

    /// Returns an iterator over the stored strings in lexicographic order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, self.size)
    }

    /// Returns the pattern matching exactly the stored strings.
    ///
    /// Every alternation is wrapped in a group, escaped literals are joined
    /// by `|`, and a string ending where others continue is rendered as an
    /// empty alternative. An empty trie renders as the empty string.
    ///
    /// The text is rendered on first use and cached until the next insertion
    /// that adds a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_pattern::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("a.b");
    /// trie.insert("a.c");
    /// trie.insert("a");
    /// assert_eq!(trie.pattern(), r"(a(|\.(b|c)))");
    /// ```
    pub fn pattern(&self) -> &str {
        self.pattern.get_or_init(|| {
            let rendered = self.root.render(self.config.get_group());
            trace!("rendered {} strings into {} bytes", self.size, rendered.len());
            rendered
        })
    }

    /// Returns an owned copy of [`Trie::pattern`].
    pub fn render(&self) -> String {
        self.pattern().to_owned()
    }

    /// Renders the pattern with options from `config` taking precedence over
    /// the trie's own configuration. The cache is neither used nor updated.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_pattern::{Config, Group, Trie};
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("ab");
    /// trie.insert("ac");
    ///
    /// let config = Config::new().group(Group::NonCapturing);
    /// assert_eq!(trie.render_with(&config), "(?:a(?:b|c))");
    /// assert_eq!(trie.pattern(), "(a(b|c))");
    /// ```
    pub fn render_with(&self, config: &Config) -> String {
        let config = self.config.overwrite(*config);
        self.root.render(config.get_group())
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

// Two tries are equal when they store the same strings; the compressed tree of
// a set does not depend on insertion order.
impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.root == other.root
    }
}

impl Eq for Trie {}

impl<'a, K: IntoSymbols<'a>> Extend<K> for Trie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: IntoSymbols<'a>> std::iter::FromIterator<K> for Trie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
