//! Serializable form of an exported intent model.
//!
//! The export step writes the trained tensors as flat row-major arrays, in
//! the same layout the bundled constant tables use, so a JSON export and the
//! compiled-in model are interchangeable.

use serde::{Deserialize, Serialize};

use crate::model_weights;

/// Validation data shipped with an export and checked when the model is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationData {
    /// Command lines to run through the model.
    pub inputs: Vec<String>,
    /// Expected class probabilities for each command line.
    #[serde(rename = "expected_outputs")]
    pub expected_outputs: Vec<Vec<f32>>,
}

/// Intent model information required to build an [`IntentModel`](crate::IntentModel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentModelInfo {
    /// Ordered word list; index 0 is the PAD entry.
    pub vocabulary: Vec<String>,
    /// Embedding matrix, `vocabulary.len() x EMBED_DIM`.
    pub embedding: Vec<f32>,
    /// GRU input kernel, `3*GRU_UNITS x EMBED_DIM`, gates in `z, r, h` order.
    pub gru_kernel: Vec<f32>,
    /// GRU recurrent kernel, `3*GRU_UNITS x GRU_UNITS`, gates in `z, r, h` order.
    pub gru_recurrent: Vec<f32>,
    /// GRU bias, `3*GRU_UNITS`.
    pub gru_bias: Vec<f32>,
    /// Dense kernel, `GRU_UNITS x OUTPUT_CLASSES`.
    pub dense_kernel: Vec<f32>,
    /// Dense bias, `OUTPUT_CLASSES`.
    pub dense_bias: Vec<f32>,
    /// Display names of the classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Data used to validate the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_data: Option<ValidationData>,
}

impl IntentModelInfo {
    /// Exports the bundled model tables.
    pub fn from_builtin() -> Self {
        Self {
            vocabulary: model_weights::VOCABULARY
                .iter()
                .map(|word| word.to_string())
                .collect(),
            embedding: model_weights::EMBEDDING.to_vec(),
            gru_kernel: model_weights::GRU_KERNEL.to_vec(),
            gru_recurrent: model_weights::GRU_RECURRENT.to_vec(),
            gru_bias: model_weights::GRU_BIAS.to_vec(),
            dense_kernel: model_weights::DENSE_KERNEL.to_vec(),
            dense_bias: model_weights::DENSE_BIAS.to_vec(),
            labels: Some(
                model_weights::LABELS
                    .iter()
                    .map(|label| label.to_string())
                    .collect(),
            ),
            validation_data: None,
        }
    }

    pub fn with_validation_data(mut self, validation_data: ValidationData) -> Self {
        self.validation_data = Some(validation_data);
        self
    }
}
