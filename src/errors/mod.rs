//! Error types for the intent inference library.
//!
//! Inference itself never fails; these errors cover loading and validating
//! a model export and running batches on worker threads.

mod batch_infer_error;
mod intent_model_error;

pub use batch_infer_error::BatchInferError;
pub use intent_model_error::IntentModelError;

/// Result type alias for model loading and validation.
pub type IntentModelResult<T> = std::result::Result<T, IntentModelError>;

/// Result type alias for batch inference.
pub type BatchInferResult<T> = std::result::Result<T, BatchInferError>;
