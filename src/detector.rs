//! Detector construction and overlap reporting.

use crate::error::Error;
use crate::phrase::{Phrase, PhraseSet};
use crate::scorer;
use crate::synonyms::SynonymTable;
use crate::windower::Windower;

/// Compares two documents phrase-by-phrase after synonym normalization.
///
/// The reference document is collapsed into a phrase set once at
/// construction; the query document keeps its ordered phrase sequence so
/// repeated phrases count once per occurrence. Nothing is mutated after
/// construction, so scoring is deterministic and repeatable.
#[derive(Debug)]
pub struct Detector {
    reference: PhraseSet,
    query: Vec<Phrase>,
}

impl Detector {
    /// Build a detector over two word sequences sharing one synonym table.
    ///
    /// # Errors
    /// Returns `Error::TupleSize` when `tuple_size` is 0; no windowing is
    /// attempted in that case.
    pub fn new(
        synonyms: &SynonymTable,
        reference_words: &[String],
        query_words: &[String],
        tuple_size: usize,
    ) -> Result<Self, Error> {
        if tuple_size == 0 {
            return Err(Error::TupleSize);
        }

        let windower = Windower::new(tuple_size, synonyms);

        Ok(Self {
            reference: PhraseSet::from_phrases(windower.phrases(reference_words)),
            query: windower.phrases(query_words),
        })
    }

    /// Percentage of the query document's phrases found in the reference
    /// document, in `[0.0, 100.0]`.
    pub fn percentage(&self) -> f64 {
        scorer::overlap_percentage(&self.reference, &self.query)
    }

    /// Number of distinct phrases in the reference document.
    pub fn reference_phrase_count(&self) -> usize {
        self.reference.len()
    }

    /// Number of phrases in the query document, duplicates included.
    pub fn query_phrase_count(&self) -> usize {
        self.query.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_synonym_substitution_scores_full_overlap() {
        let synonyms = SynonymTable::from_lines(["happy glad joyful"]);
        let detector = Detector::new(
            &synonyms,
            &words("I am happy today"),
            &words("I am glad today"),
            2,
        )
        .unwrap();

        assert_eq!(detector.percentage(), 100.0);
    }

    #[test]
    fn test_document_against_itself_scores_full_overlap() {
        let synonyms = SynonymTable::from_lines(["happy glad"]);
        let text = words("the quick brown fox jumps over the lazy dog");
        let detector = Detector::new(&synonyms, &text, &text, 3).unwrap();

        assert_eq!(detector.percentage(), 100.0);
    }

    #[test]
    fn test_empty_query_document_scores_zero() {
        let synonyms = SynonymTable::new();
        let detector = Detector::new(&synonyms, &words("the cat sat"), &[], 3).unwrap();

        assert_eq!(detector.percentage(), 0.0);
    }

    #[test]
    fn test_short_documents_compare_as_single_phrase() {
        let synonyms = SynonymTable::new();
        let detector = Detector::new(
            &synonyms,
            &words("one two three"),
            &words("one two three"),
            5,
        )
        .unwrap();

        assert_eq!(detector.query_phrase_count(), 1);
        assert_eq!(detector.percentage(), 100.0);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let synonyms = SynonymTable::new();
        let detector = Detector::new(
            &synonyms,
            &words("alpha beta gamma"),
            &words("delta epsilon zeta"),
            2,
        )
        .unwrap();

        assert_eq!(detector.percentage(), 0.0);
    }

    #[test]
    fn test_partial_overlap_counts_query_side() {
        let synonyms = SynonymTable::new();
        let detector = Detector::new(&synonyms, &words("a b c d"), &words("a b x y"), 2).unwrap();

        // Query phrases: (a b), (b x), (x y); only the first is in the reference.
        let score = detector.percentage();
        assert!((score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_tuple_size_is_rejected() {
        let synonyms = SynonymTable::new();
        let err = Detector::new(&synonyms, &words("a b"), &words("a b"), 0).unwrap_err();

        assert!(matches!(err, Error::TupleSize));
    }

    #[test]
    fn test_percentage_is_deterministic() {
        let synonyms = SynonymTable::from_lines(["happy glad"]);
        let detector = Detector::new(
            &synonyms,
            &words("I am happy today"),
            &words("I am glad but busy today"),
            2,
        )
        .unwrap();

        let first = detector.percentage();
        let second = detector.percentage();

        assert_eq!(first, second);
    }

    #[test]
    fn test_score_stays_in_range() {
        let synonyms = SynonymTable::from_lines(["happy glad"]);
        let cases = [
            ("", ""),
            ("a", "a"),
            ("a b c", "a b c"),
            ("a b c", "x y z"),
            ("I am happy", "I am glad but tired"),
        ];

        for (reference, query) in cases {
            let detector =
                Detector::new(&synonyms, &words(reference), &words(query), 2).unwrap();
            let score = detector.percentage();
            assert!((0.0..=100.0).contains(&score));
        }
    }
}
