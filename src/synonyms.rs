//! Synonym table loading and canonical-form lookup.
//!
//! # Synonym File Format
//!
//! Each line lists one group of interchangeable words:
//! ```text
//! happy glad joyful
//! big large huge
//! ```
//!
//! The first word of a group is its canonical form, and every word in the
//! group (the first included) maps to it. Blank lines are ignored. A word
//! listed in more than one group keeps the mapping from the last group
//! read; callers should avoid overlapping groups, but they are accepted.
//!
//! Words are compared exactly as they appear in the source files. No case
//! folding or punctuation stripping happens here.

use ahash::AHashMap;

/// Mapping from every word seen in a synonym group to that group's
/// canonical form.
pub struct SynonymTable {
    canonical: AHashMap<String, String>,
}

impl SynonymTable {
    /// Create an empty table. Every word is its own canonical form.
    pub fn new() -> Self {
        Self {
            canonical: AHashMap::new(),
        }
    }

    /// Build the table from synonym-group lines.
    ///
    /// Each line's whitespace-split tokens form one group. A line with no
    /// tokens contributes nothing.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical = AHashMap::new();

        for line in lines {
            let mut group = line.as_ref().split_whitespace();

            if let Some(first) = group.next() {
                canonical.insert(first.to_string(), first.to_string());
                for word in group {
                    canonical.insert(word.to_string(), first.to_string());
                }
            }
        }

        Self { canonical }
    }

    /// Canonical form of `word`: the group representative if the word is
    /// in the table, the word itself otherwise.
    pub fn canonical(&self, word: &str) -> String {
        match self.canonical.get(word) {
            Some(mapped) => mapped.clone(),
            None => word.to_string(),
        }
    }

    /// Number of words covered by the table.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}
