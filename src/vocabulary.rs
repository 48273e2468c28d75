//! Fixed vocabulary lookup.

use std::borrow::Cow;

use crate::dimensions::PAD_TOKEN;

/// Ordered word list of the model. Index 0 is the PAD entry and never matches a word.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Cow<'static, [Cow<'static, str>]>,
}

impl Vocabulary {
    /// Wraps a word table exported with the model.
    pub fn new(words: Cow<'static, [Cow<'static, str>]>) -> Self {
        Self { words }
    }

    /// Builds an owned vocabulary, typically from a JSON export.
    pub fn from_words(words: Vec<String>) -> Self {
        Self::new(Cow::Owned(words.into_iter().map(Cow::Owned).collect()))
    }

    /// Returns the token id of `word`, or [`PAD_TOKEN`] when it is not in the vocabulary.
    ///
    /// Matching is exact and case-sensitive; the first entry after PAD that
    /// matches wins.
    pub fn token_id(&self, word: &str) -> usize {
        self.words
            .iter()
            .enumerate()
            .skip(PAD_TOKEN + 1)
            .find(|(_, entry)| entry.as_ref() == word)
            .map_or(PAD_TOKEN, |(index, _)| index)
    }

    /// Returns the word stored at `token_id`.
    pub fn word(&self, token_id: usize) -> Option<&str> {
        self.words.get(token_id).map(|word| word.as_ref())
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

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_words(
            ["<PAD>", "turn", "on", "off", "led", "on"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_known_words() {
        let vocabulary = vocabulary();
        assert_eq!(vocabulary.token_id("turn"), 1);
        assert_eq!(vocabulary.token_id("off"), 3);
        assert_eq!(vocabulary.token_id("led"), 4);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(vocabulary().token_id("on"), 2);
    }

    #[test]
    fn test_unknown_word_maps_to_pad() {
        let vocabulary = vocabulary();
        assert_eq!(vocabulary.token_id("illuminate"), PAD_TOKEN);
        assert_eq!(vocabulary.token_id("LED"), PAD_TOKEN);
    }

    #[test]
    fn test_pad_entry_is_never_matched() {
        assert_eq!(vocabulary().token_id("<PAD>"), PAD_TOKEN);
    }

    #[test]
    fn test_word_lookup() {
        let vocabulary = vocabulary();
        assert_eq!(vocabulary.word(4), Some("led"));
        assert_eq!(vocabulary.word(99), None);
        assert_eq!(vocabulary.len(), 6);
    }
}
