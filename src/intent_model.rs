//! Core intent model for on-device command classification.
//!
//! This module contains the [`IntentModel`] struct which chains tokenization,
//! embedding lookup, the GRU recurrence and the dense softmax head into one
//! call from a raw command line to a class index.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::classifier::{DENSE_KERNEL_LEN, DenseHead, Prediction};
use crate::dimensions::{EMBED_DIM, EmbeddedSequence, HiddenState, OUTPUT_CLASSES, TokenSequence};
use crate::embedding::EmbeddingTable;
use crate::errors::{IntentModelError, IntentModelResult};
use crate::gru::{GRU_BIAS_LEN, GRU_KERNEL_LEN, GRU_RECURRENT_LEN, GruWeights};
use crate::intent_model_info::IntentModelInfo;
use crate::model_weights;
use crate::tokenizer::Tokenizer;
use crate::vocabulary::Vocabulary;

/// Tolerance used when checking export validation data.
const VALIDATION_DELTA: f32 = 1e-5;

/// Read-only weights plus the pipeline that runs over them.
///
/// The model holds no per-call state: every call builds its token, embedding,
/// hidden and probability buffers on the stack, so one model can serve many
/// threads at once.
#[derive(Debug, Clone)]
pub struct IntentModel {
    vocabulary: Vocabulary,
    embedding: EmbeddingTable,
    gru: GruWeights,
    head: DenseHead,
    labels: Cow<'static, [Cow<'static, str>]>,
}

impl IntentModel {
    /// Creates the bundled model, borrowing the compiled-in tables.
    pub fn builtin() -> Self {
        let gru = GruWeights::from_flat(
            &Cow::Borrowed(&model_weights::GRU_KERNEL[..]),
            &Cow::Borrowed(&model_weights::GRU_RECURRENT[..]),
            &Cow::Borrowed(&model_weights::GRU_BIAS[..]),
        );

        Self {
            vocabulary: Vocabulary::new(Cow::Borrowed(&model_weights::VOCABULARY[..])),
            embedding: EmbeddingTable::new(Cow::Borrowed(&model_weights::EMBEDDING[..])),
            gru,
            head: DenseHead::new(
                Cow::Borrowed(&model_weights::DENSE_KERNEL[..]),
                Cow::Borrowed(&model_weights::DENSE_BIAS[..]),
            ),
            labels: Cow::Borrowed(&model_weights::LABELS[..]),
        }
    }

    /// Creates a new IntentModel from an exported IntentModelInfo.
    ///
    /// Every tensor is checked against the compile-time dimensions, and the
    /// validation data, when present, is replayed through the model.
    pub fn new(intent_model_info: IntentModelInfo) -> IntentModelResult<Self> {
        Self::validate_inputs(&intent_model_info)?;

        info!(
            "Loading intent model with a vocabulary of {} words",
            intent_model_info.vocabulary.len()
        );

        let IntentModelInfo {
            vocabulary,
            embedding,
            gru_kernel,
            gru_recurrent,
            gru_bias,
            dense_kernel,
            dense_bias,
            labels,
            validation_data,
        } = intent_model_info;

        let gru = GruWeights::from_flat(
            &Cow::Owned(gru_kernel),
            &Cow::Owned(gru_recurrent),
            &Cow::Owned(gru_bias),
        );
        let labels = match labels {
            Some(labels) => Cow::Owned(labels.into_iter().map(Cow::Owned).collect()),
            None => Cow::Borrowed(&model_weights::LABELS[..]),
        };

        let model = IntentModel {
            vocabulary: Vocabulary::from_words(vocabulary),
            embedding: EmbeddingTable::new(Cow::Owned(embedding)),
            gru,
            head: DenseHead::new(Cow::Owned(dense_kernel), Cow::Owned(dense_bias)),
            labels,
        };

        if let Some(validation_data) = &validation_data {
            model.validate_model(
                &validation_data.inputs,
                &validation_data.expected_outputs,
                VALIDATION_DELTA,
            )?;
            debug!(
                "Intent model passed {} validation cases",
                validation_data.inputs.len()
            );
        }

        Ok(model)
    }

    /// Parses a JSON export and builds the model from it.
    pub fn from_json_str(json: &str) -> IntentModelResult<Self> {
        let info: IntentModelInfo = serde_json::from_str(json)?;
        Self::new(info)
    }

    /// Reads a JSON export from disk and builds the model from it.
    pub fn from_json_file(path: impl AsRef<Path>) -> IntentModelResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| IntentModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read model export {}", path.display());
        Self::from_json_str(&json)
    }

    /// Performs the shape checks of an export against the compile-time dimensions.
    fn validate_inputs(intent_model_info: &IntentModelInfo) -> IntentModelResult<()> {
        if intent_model_info.vocabulary.is_empty() {
            return Err(IntentModelError::EmptyVocabulary);
        }

        let embedding_size = intent_model_info.embedding.len();
        if !embedding_size.is_multiple_of(EMBED_DIM) {
            return Err(IntentModelError::EmbeddingNotRowAligned {
                embedding_size,
                embed_dim: EMBED_DIM,
            });
        }
        if embedding_size / EMBED_DIM != intent_model_info.vocabulary.len() {
            return Err(IntentModelError::VocabularyEmbeddingMismatch {
                vocabulary_size: intent_model_info.vocabulary.len(),
                embedding_rows: embedding_size / EMBED_DIM,
            });
        }

        Self::validate_tensor_size("gru_kernel", &intent_model_info.gru_kernel, GRU_KERNEL_LEN)?;
        Self::validate_tensor_size(
            "gru_recurrent",
            &intent_model_info.gru_recurrent,
            GRU_RECURRENT_LEN,
        )?;
        Self::validate_tensor_size("gru_bias", &intent_model_info.gru_bias, GRU_BIAS_LEN)?;
        Self::validate_tensor_size(
            "dense_kernel",
            &intent_model_info.dense_kernel,
            DENSE_KERNEL_LEN,
        )?;
        Self::validate_tensor_size("dense_bias", &intent_model_info.dense_bias, OUTPUT_CLASSES)?;

        if let Some(labels) = &intent_model_info.labels {
            if labels.len() != OUTPUT_CLASSES {
                return Err(IntentModelError::LabelCountMismatch {
                    provided: labels.len(),
                    expected: OUTPUT_CLASSES,
                });
            }
        }

        if let Some(validation_data) = &intent_model_info.validation_data {
            if validation_data.inputs.len() != validation_data.expected_outputs.len() {
                return Err(IntentModelError::ValidationInputOutputMismatch);
            }
        }

        Ok(())
    }

    fn validate_tensor_size(
        tensor: &str,
        values: &[f32],
        expected: usize,
    ) -> IntentModelResult<()> {
        if values.len() != expected {
            return Err(IntentModelError::TensorSizeMismatch {
                tensor: tensor.to_string(),
                expected,
                actual: values.len(),
            });
        }
        Ok(())
    }

    /// Validates the model by running inference on each input and comparing the probabilities.
    pub fn validate_model(
        &self,
        inputs: &[String],
        outputs: &[Vec<f32>],
        delta: f32,
    ) -> IntentModelResult<()> {
        if inputs.len() != outputs.len() {
            return Err(IntentModelError::ValidationInputOutputMismatch);
        }

        for (i, (input, expected_output)) in inputs.iter().zip(outputs.iter()).enumerate() {
            if expected_output.len() != OUTPUT_CLASSES {
                return Err(IntentModelError::ValidationOutputSizeMismatch {
                    index: i,
                    provided: expected_output.len(),
                    expected: OUTPUT_CLASSES,
                });
            }

            let computed = self.predict(input).probabilities;
            let matches = expected_output
                .iter()
                .zip(computed.iter())
                .all(|(expected, computed)| (expected - computed).abs() <= delta);

            if !matches {
                warn!("Validation case {} failed for {:?}", i, input);
                return Err(IntentModelError::ValidationMismatch {
                    case_number: i,
                    input: input.clone(),
                    expected: expected_output.clone(),
                    computed: computed.to_vec(),
                });
            }
        }

        Ok(())
    }

    /// Maps a line to exactly `SEQ_LEN` token ids.
    pub fn tokenize(&self, line: &str) -> TokenSequence {
        Tokenizer::new(&self.vocabulary).tokenize(line)
    }

    /// Looks up the embedding row of every token.
    pub fn embed(&self, tokens: &TokenSequence) -> EmbeddedSequence {
        self.embedding.embed(tokens)
    }

    /// Runs the GRU over an embedded sequence and returns the final hidden state.
    pub fn forward_hidden(&self, sequence: &EmbeddedSequence) -> HiddenState {
        self.gru.forward(sequence)
    }

    /// Projects a hidden state to class probabilities and picks the class.
    pub fn classify(&self, hidden: &HiddenState) -> Prediction {
        self.head.classify(hidden)
    }

    /// Full pipeline from a command line to a prediction.
    pub fn predict(&self, line: &str) -> Prediction {
        let tokens = self.tokenize(line);
        let embedded = self.embed(&tokens);
        let hidden = self.forward_hidden(&embedded);
        self.classify(&hidden)
    }

    /// Full pipeline from a command line to a class index in `[0, OUTPUT_CLASSES)`.
    pub fn infer(&self, line: &str) -> usize {
        self.predict(line).class_index
    }

    /// Display name of a class, e.g. `"ON"`.
    pub fn label(&self, class_index: usize) -> Option<&str> {
        self.labels.get(class_index).map(|label| label.as_ref())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the number of vocabulary entries, PAD included.
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }
}
