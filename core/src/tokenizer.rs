use crate::error::{Result, SearchError};

/// A word is valid when it carries no control characters.
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < b' ')
}

/// Split text into words on runs of spaces. Fails on control characters anywhere in the text.
pub fn tokenize(text: &str) -> Result<Vec<&str>> {
    if !is_valid_word(text) {
        return Err(SearchError::InvalidInput(text.to_string()));
    }
    Ok(split_words(text).collect())
}

/// Unchecked split, used once the text has already been validated.
pub(crate) fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|w| !w.is_empty())
}
