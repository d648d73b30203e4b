use crate::error::{Result, SearchError};
use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_word, split_words};

/// A parsed query borrowing its words from the raw query text.
/// Both word lists are sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'a> {
    pub plus_words: Vec<&'a str>,
    pub minus_words: Vec<&'a str>,
}

impl<'a> Query<'a> {
    /// Classify query words into required and excluded sets.
    ///
    /// A word starting with `-` is excluded. A bare `-` or a word starting with `--` is
    /// rejected. Stop words are dropped after classification, so `-in` with stop word `in`
    /// excludes nothing.
    pub fn parse(raw_query: &'a str, stop_words: &StopWords) -> Result<Self> {
        if !is_valid_word(raw_query) {
            return Err(SearchError::InvalidQuery(raw_query.to_string()));
        }
        let mut query = Query::default();
        for word in split_words(raw_query) {
            let (word, is_minus) = match word.strip_prefix('-') {
                Some(rest) => {
                    if rest.is_empty() || rest.starts_with('-') {
                        return Err(SearchError::InvalidQuery(raw_query.to_string()));
                    }
                    (rest, true)
                }
                None => (word, false),
            };
            if stop_words.contains(word) {
                continue;
            }
            if is_minus {
                query.minus_words.push(word);
            } else {
                query.plus_words.push(word);
            }
        }
        query.plus_words.sort_unstable();
        query.plus_words.dedup();
        query.minus_words.sort_unstable();
        query.minus_words.dedup();
        Ok(query)
    }
}
