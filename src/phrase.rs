// phrase.rs - Phrase tuple value type and the membership set built over one document

use ahash::AHashSet;
use std::fmt;

/// An ordered window of consecutive canonicalized words.
///
/// Equality is structural: two phrases are equal iff every position holds
/// an equal word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase {
    words: Vec<String>,
}

impl Phrase {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

/// Membership structure over one document's phrases.
///
/// Order and duplicates are discarded; only "does this phrase occur
/// anywhere in the document" is answerable.
#[derive(Debug)]
pub struct PhraseSet {
    phrases: AHashSet<Phrase>,
}

impl PhraseSet {
    pub fn from_phrases<I>(phrases: I) -> Self
    where
        I: IntoIterator<Item = Phrase>,
    {
        Self {
            phrases: phrases.into_iter().collect(),
        }
    }

    pub fn contains(&self, phrase: &Phrase) -> bool {
        self.phrases.contains(phrase)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
