//! Iteration over the strings stored in a trie.

use std::iter::FusedIterator;

use crate::node::{Branch, Fork};

/// An iterator over the strings inserted into a [`Trie`](crate::Trie).
///
/// This iterator performs a depth-first traversal of the trie and yields
/// every stored string exactly once, in lexicographic order of code points.
///
/// # Examples
///
/// ```
/// use radix_pattern::Trie;
///
/// let trie: Trie = ["car", "ca", "cab"].iter().copied().collect();
/// let words: Vec<String> = trie.iter().collect();
/// assert_eq!(words, ["ca", "cab", "car"]);
/// ```
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    /// Branches still to visit, each with the text that leads to it
    stack: Vec<(String, &'a Branch)>,

    /// Number of strings not yet yielded
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Fork, len: usize) -> Self {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_fork(String::new(), root);
        iter
    }

    // Pushed in reverse so the smallest key is popped first
    fn push_fork(&mut self, prefix: String, fork: &'a Fork) {
        for branch in fork.branches.values().rev() {
            self.stack.push((prefix.clone(), branch));
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((mut text, branch)) = self.stack.pop() {
            text.extend(branch.label.iter());

            match &branch.child {
                Some(child) => self.push_fork(text, child),
                None => {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(text);
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}
