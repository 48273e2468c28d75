//! Compile-time shape of the intent model.
//!
//! Every transient buffer in the pipeline is a fixed-size array sized by these
//! constants, so an inference call never touches the heap.

/// Number of tokens fed to the recurrent layer per call.
pub const SEQ_LEN: usize = 6;

/// Width of one embedding row.
pub const EMBED_DIM: usize = 4;

/// Hidden units of the GRU layer.
pub const GRU_UNITS: usize = 4;

/// Number of gate blocks packed in the exported GRU tensors (update, reset, candidate).
pub const GRU_GATES: usize = 3;

/// Number of output classes of the dense head.
pub const OUTPUT_CLASSES: usize = 2;

/// Size of the host line buffer, terminator included.
pub const MAX_INPUT_LEN: usize = 64;

/// Longest prefix of a line, in bytes, that reaches the tokenizer.
pub const MAX_TOKENIZED_BYTES: usize = MAX_INPUT_LEN - 1;

/// Reserved token id for padding and out-of-vocabulary words.
pub const PAD_TOKEN: usize = 0;

/// Class index of the OFF decision.
pub const OFF_CLASS: usize = 0;

/// Class index of the ON decision.
pub const ON_CLASS: usize = 1;

/// Token ids for one call, right-padded with [`PAD_TOKEN`].
pub type TokenSequence = [usize; SEQ_LEN];

/// Embedding rows for one call, one per token.
pub type EmbeddedSequence = [[f32; EMBED_DIM]; SEQ_LEN];

/// GRU hidden state.
pub type HiddenState = [f32; GRU_UNITS];

/// Class probabilities produced by the softmax head.
pub type ClassProbabilities = [f32; OUTPUT_CLASSES];
