use crate::error::{Result, SearchError};
use crate::tokenizer::{is_valid_word, tokenize};
use std::collections::BTreeSet;

/// Words excluded from both indexing and queries. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Build from a space-separated string.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(tokenize(text)?)
    }

    /// Build from a list of words. Empty entries are dropped; duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(SearchError::InvalidInput(word.to_string()));
            }
            if !word.is_empty() {
                set.insert(word.to_string());
            }
        }
        Ok(Self { words: set })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_text() {
        let stop = StopWords::parse("    in     the     ").unwrap();
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("in"));
        assert!(stop.contains("the"));
        assert!(!stop.contains("cat"));
    }

    #[test]
    fn drops_empty_and_duplicate_words() {
        let stop = StopWords::from_words(["in", "", "the", "the"]).unwrap();
        assert_eq!(stop.len(), 2);
    }

    #[test]
    fn rejects_control_characters() {
        assert!(StopWords::parse("и в на о\x12").is_err());
        assert!(StopWords::from_words(vec!["ok".to_string(), "b\x01ad".to_string()]).is_err());
    }

    #[test]
    fn empty_source_is_allowed() {
        assert!(StopWords::parse("").unwrap().is_empty());
    }
}
