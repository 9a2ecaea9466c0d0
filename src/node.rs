//! Internal node implementation for the radix trie.
//!
//! The tree is made of two alternating types. A [`Fork`] is a decision point
//! mapping the next symbol to the unique [`Branch`] that starts with it. A
//! `Branch` is an edge labeled with a run of symbols that owns at most one
//! child `Fork`. Every parent owns its children by value, so the whole tree
//! has a single owner and no back-references.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::config::Group;
use crate::escape::push_escaped;
use crate::util::prefix_match;

/// Key of a branch inside a fork.
///
/// `End` is a variant of its own rather than a reserved symbol value, so no
/// inserted string can ever collide with it. It orders before every symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Key {
    /// An inserted string terminates exactly here.
    End,
    /// The first symbol of the branch label.
    Symbol(char),
}

impl Key {
    /// Returns the key a branch with this label is stored under.
    pub fn of(label: &[char]) -> Key {
        label.first().map_or(Key::End, |&c| Key::Symbol(c))
    }
}

/// A labeled edge of the trie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Branch {
    /// The run of symbols consumed by this edge. Empty only for `End` entries.
    pub label: Vec<char>,

    /// What follows the label; `None` makes this a terminal leaf.
    pub child: Option<Fork>,
}

/// A decision point of the trie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Fork {
    /// Branches indexed by the first symbol of their label
    pub branches: BTreeMap<Key, Branch>,
}

impl Branch {
    /// Creates a terminal leaf holding the final suffix of one string.
    pub fn leaf(label: Vec<char>) -> Self {
        Branch { label, child: None }
    }

    /// Returns whether this is a terminal leaf (has no child fork)
    pub fn is_leaf(&self) -> bool {
        self.child.is_none()
    }

    /// Integrates `key` into this branch, splitting it where the two diverge.
    ///
    /// `key` must share at least its first symbol with the label. Returns
    /// `true` if `key` was not already present.
    pub fn insert(&mut self, key: &[char]) -> bool {
        let common_len = prefix_match(key, 0, &self.label);

        if common_len < self.label.len() {
            self.split(common_len);
        }

        // The whole label is consumed from here on
        let remaining = &key[common_len..];

        match &mut self.child {
            Some(child) => child.insert(remaining),
            None if remaining.is_empty() => false,
            None => {
                // A terminal leaf is being extended: the string that ended
                // here must stay a match, so it moves to an `End` entry.
                trace!(
                    "extending leaf {:?} with {:?}",
                    self.label.iter().collect::<String>(),
                    remaining.iter().collect::<String>()
                );
                let mut fork = Fork::new();
                fork.insert(&[]);
                let added = fork.insert(remaining);
                self.child = Some(fork);
                added
            }
        }
    }

    /// Truncates the label to its first `at` symbols and moves the rest of
    /// the label, together with the old child, below a fresh fork.
    fn split(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());

        let old_suffix = self.label.split_off(at);
        let old_child = self.child.take();

        trace!(
            "splitting {:?} before {:?}",
            self.label.iter().collect::<String>(),
            old_suffix.iter().collect::<String>()
        );

        let mut fork = Fork::new();
        fork.attach(Branch {
            label: old_suffix,
            child: old_child,
        });
        self.child = Some(fork);
    }

    /// Appends the pattern for this branch to `out`.
    pub fn render_into(&self, out: &mut String, group: Group) {
        push_escaped(out, self.label.iter().copied());
        if let Some(child) = &self.child {
            child.render_into(out, group);
        }
    }
}

impl Fork {
    /// Creates a fork with no branches.
    pub fn new() -> Self {
        Fork::default()
    }

    /// Returns whether this fork has no branches
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Inserts `key` into the subtree rooted at this fork.
    ///
    /// Returns `true` if `key` was not already present.
    pub fn insert(&mut self, key: &[char]) -> bool {
        match self.branches.entry(Key::of(key)) {
            Entry::Vacant(slot) => {
                slot.insert(Branch::leaf(key.to_vec()));
                true
            }
            // An `End` branch has nothing left to match
            Entry::Occupied(_) if key.is_empty() => false,
            Entry::Occupied(mut slot) => slot.get_mut().insert(key),
        }
    }

    /// Stores `branch` under the key of its label.
    ///
    /// The key must be absent; an empty label goes under [`Key::End`].
    fn attach(&mut self, branch: Branch) {
        debug_assert!(!branch.label.is_empty() || branch.is_leaf());

        let previous = self.branches.insert(Key::of(&branch.label), branch);
        debug_assert!(previous.is_none());
    }

    /// Returns whether `key` was inserted into the subtree rooted at this fork.
    pub fn contains(&self, key: &[char]) -> bool {
        let mut current = self;
        let mut remaining = key;

        loop {
            let branch = match current.branches.get(&Key::of(remaining)) {
                Some(branch) => branch,
                None => return false,
            };

            // The `End` branch has an empty label, so this also covers it
            if !remaining.starts_with(&branch.label) {
                return false;
            }
            remaining = &remaining[branch.label.len()..];

            match &branch.child {
                Some(child) => current = child,
                None => return remaining.is_empty(),
            }
        }
    }

    /// Appends the pattern for this fork to `out`.
    ///
    /// An empty fork renders nothing; otherwise the branches are joined by `|`
    /// inside a single group.
    pub fn render_into(&self, out: &mut String, group: Group) {
        if self.is_empty() {
            return;
        }

        out.push_str(group.open());
        for (i, branch) in self.branches.values().enumerate() {
            if i > 0 {
                out.push('|');
            }
            branch.render_into(out, group);
        }
        out.push_str(group.close());
    }

    /// Renders the pattern for this fork into a new string.
    pub fn render(&self, group: Group) -> String {
        let mut out = String::new();
        self.render_into(&mut out, group);
        out
    }
}
