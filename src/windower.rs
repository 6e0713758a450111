//! Sliding-window phrase extraction with synonym canonicalization.
//!
//! This module turns an ordered word sequence into the ordered sequence of
//! phrases that the overlap score is computed over.
//!
//! # Window Construction
//!
//! The first phrase is built from the first `tuple_size` words of the
//! document. After that, each subsequent word slides the window forward by
//! one position: the new word is canonicalized and appended, the oldest
//! word is dropped, and the resulting window is emitted. A document of
//! `L >= 1` words therefore yields exactly `1 + max(0, L - tuple_size)`
//! phrases, and an empty document yields none.
//!
//! # Short Documents
//!
//! A document shorter than the window width still yields exactly one
//! phrase, built from all of its words. This under-filled first window is
//! deliberate compatibility behavior: a strict fixed-width window would
//! emit nothing for such documents and make them unscorable.
//!
//! # Canonicalization
//!
//! Every word passes through the [`SynonymTable`] before it enters a
//! window, so phrase equality is judged on canonical forms. For example,
//! with the group "happy glad", the windows over "am happy" and "am glad"
//! are equal.

use std::collections::VecDeque;

use crate::phrase::Phrase;
use crate::synonyms::SynonymTable;

/// Slides a fixed-width window over word sequences, canonicalizing each
/// word via a shared synonym table.
pub struct Windower<'a> {
    /// Number of consecutive words per phrase. Always at least 1; zero is
    /// rejected at detector construction.
    tuple_size: usize,
    /// Shared canonicalization table, applied to every word.
    synonyms: &'a SynonymTable,
}

impl<'a> Windower<'a> {
    pub fn new(tuple_size: usize, synonyms: &'a SynonymTable) -> Self {
        Self {
            tuple_size,
            synonyms,
        }
    }

    /// Extract the ordered phrase sequence for one document.
    ///
    /// # Arguments
    /// * `words` - The document's words, in order
    ///
    /// # Returns
    /// One phrase per window position; empty when `words` is empty, a
    /// single short phrase when the document has fewer words than the
    /// window width.
    pub fn phrases(&self, words: &[String]) -> Vec<Phrase> {
        if words.is_empty() {
            return Vec::new();
        }

        let head = self.tuple_size.min(words.len());
        let mut window: VecDeque<String> = words[..head]
            .iter()
            .map(|word| self.synonyms.canonical(word))
            .collect();

        let mut phrases = Vec::with_capacity(words.len() - head + 1);
        phrases.push(Phrase::new(window.iter().cloned().collect()));

        for word in &words[head..] {
            window.push_back(self.synonyms.canonical(word));
            window.pop_front();
            phrases.push(Phrase::new(window.iter().cloned().collect()));
        }

        phrases
    }
}
