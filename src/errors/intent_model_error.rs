//! Error types for intent model creation and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building an [`IntentModel`](crate::IntentModel) from an export.
#[derive(Error, Debug)]
pub enum IntentModelError {
    #[error("The vocabulary must contain at least the PAD entry")]
    EmptyVocabulary,

    #[error("The size of {tensor} does not match the model dimensions: {actual} != {expected}")]
    TensorSizeMismatch {
        tensor: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "The embedding size {embedding_size} is not a multiple of the embedding dimension {embed_dim}"
    )]
    EmbeddingNotRowAligned {
        embedding_size: usize,
        embed_dim: usize,
    },

    #[error(
        "The vocabulary size must match the embedding rows: {vocabulary_size} != {embedding_rows}"
    )]
    VocabularyEmbeddingMismatch {
        vocabulary_size: usize,
        embedding_rows: usize,
    },

    #[error("The number of labels must match the output classes: {provided} != {expected}")]
    LabelCountMismatch { provided: usize, expected: usize },

    #[error("The number of inputs must match the number of outputs in the validation data")]
    ValidationInputOutputMismatch,

    #[error(
        "The size of the outputs must match the output classes at index {index}: {provided} != {expected}"
    )]
    ValidationOutputSizeMismatch {
        index: usize,
        provided: usize,
        expected: usize,
    },

    #[error(
        "In validation case number {case_number}, applying inference on {input:?}, the expected outputs were: {expected:?}, the computed outputs were: {computed:?}"
    )]
    ValidationMismatch {
        case_number: usize,
        input: String,
        expected: Vec<f32>,
        computed: Vec<f32>,
    },

    #[error("Invalid model export: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Could not read model export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
