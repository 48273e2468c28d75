use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchInferError {
    #[error("Thread count must be at least 1, got {count}")]
    InvalidThreadCount { count: usize },

    #[error("Result index {index} is out of bounds for {num_lines} lines")]
    ResultIndexOutOfBounds { index: usize, num_lines: usize },

    #[error("Destination buffer size mismatch: expected {expected}, got {actual}")]
    DestinationBufferSizeMismatch { expected: usize, actual: usize },

    #[error("Thread panicked during batch inference")]
    ThreadPanicked,
}
