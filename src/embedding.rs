//! Embedding lookup.

use std::borrow::Cow;

use crate::dimensions::{EMBED_DIM, EmbeddedSequence, SEQ_LEN, TokenSequence};

/// Row-major `vocab_size x EMBED_DIM` embedding matrix.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    weights: Cow<'static, [f32]>,
}

impl EmbeddingTable {
    pub fn new(weights: Cow<'static, [f32]>) -> Self {
        debug_assert!(weights.len().is_multiple_of(EMBED_DIM));
        Self { weights }
    }

    /// Number of rows, which must equal the vocabulary size.
    pub fn rows(&self) -> usize {
        self.weights.len() / EMBED_DIM
    }

    /// Embedding row of `token_id`.
    #[inline]
    pub fn row(&self, token_id: usize) -> &[f32] {
        let start = token_id * EMBED_DIM;
        &self.weights[start..start + EMBED_DIM]
    }

    /// Copies the row of every token into a fresh `SEQ_LEN x EMBED_DIM` matrix.
    pub fn embed(&self, tokens: &TokenSequence) -> EmbeddedSequence {
        let mut embedded = [[0.0f32; EMBED_DIM]; SEQ_LEN];
        for (row, &token_id) in embedded.iter_mut().zip(tokens.iter()) {
            row.copy_from_slice(self.row(token_id));
        }
        embedded
    }
}
