//! Line tokenizer: whitespace split, vocabulary lookup, fixed-length padding.

use crate::dimensions::{MAX_TOKENIZED_BYTES, PAD_TOKEN, SEQ_LEN, TokenSequence};
use crate::vocabulary::Vocabulary;

/// Turns a raw command line into exactly [`SEQ_LEN`] token ids.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> Tokenizer<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Tokenizes `line`.
    ///
    /// The line is first cut to the host buffer size, then split on runs of
    /// whitespace. Words past [`SEQ_LEN`] are dropped and missing positions
    /// are filled with [`PAD_TOKEN`] on the right.
    pub fn tokenize(&self, line: &str) -> TokenSequence {
        let mut tokens = [PAD_TOKEN; SEQ_LEN];
        for (slot, word) in tokens
            .iter_mut()
            .zip(truncate_to_buffer(line).split_whitespace())
        {
            *slot = self.vocabulary.token_id(word);
        }
        tokens
    }
}

/// Cuts `line` to at most [`MAX_TOKENIZED_BYTES`] bytes, backing off to a char boundary.
pub fn truncate_to_buffer(line: &str) -> &str {
    if line.len() <= MAX_TOKENIZED_BYTES {
        return line;
    }

    let mut end = MAX_TOKENIZED_BYTES;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}
