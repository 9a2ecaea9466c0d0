//! # Radix Pattern
//!
//! A radix trie that renders a set of strings as one regular-expression
//! alternation.
//!
//! Strings are inserted one at a time, in any order. The trie keeps common
//! prefixes merged (a radix or patricia trie over `char`s) and can render
//! itself as a single pattern that matches exactly the inserted strings and
//! nothing else, which is usually far cheaper for a regex engine than an `|`
//! of every literal.
//!
//! ## Features
//!
//! - **Incremental**: insertion splits edges in place, no rebuild needed
//! - **Order independent**: the same set always yields the same tree and text
//! - **Escaped output**: metacharacters in the inserted text are matched literally
//! - **Engine agnostic**: the pattern uses only groups, `|` and backslash escapes
//!
//! The pattern is not anchored; wrap it as `^(?:...)$` (or use the engine's
//! equivalent) for whole-string matching.
//!
//! ## Example
//!
//! ```rust
//! use radix_pattern::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("cat");
//! trie.insert("car");
//! trie.insert("cab");
//!
//! assert_eq!(trie.pattern(), "(ca(b|r|t))");
//! assert!(trie.contains("car"));
//! assert!(!trie.contains("ca"));
//! ```

#[macro_use]
mod macros;

mod config;
mod escape;
mod iter;
mod node;
mod symbols;
mod trie;
mod util;

// Re-export public types
pub use crate::config::{Config, Group};
pub use crate::escape::{escape, is_meta_character};
pub use crate::iter::Iter;
pub use crate::symbols::IntoSymbols;
pub use crate::trie::Trie;
