//! On-device intent inference for short text commands.
//!
//! This library classifies a command line such as `"turn on led"` into an
//! ON/OFF decision with a small pretrained recurrent network whose weights
//! are compiled into the binary. The pipeline is strictly linear per call:
//! tokenize, embed, run a single GRU layer, then project to class
//! probabilities with a dense softmax head.

pub mod activation;
pub mod batch_infer;
pub mod classifier;
pub mod dimensions;
pub mod embedding;
pub mod errors;
pub mod gru;
pub mod intent_model;
pub mod intent_model_info;
pub mod model_weights;
pub mod tokenizer;
pub mod utils;
pub mod vocabulary;

pub use activation::Activation;
pub use batch_infer::{BatchConfig, BatchOutput, infer_batch};
pub use classifier::{Intent, Prediction};
pub use intent_model::IntentModel;
pub use intent_model_info::{IntentModelInfo, ValidationData};
pub use tokenizer::Tokenizer;
pub use vocabulary::Vocabulary;
