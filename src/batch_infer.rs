use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::classifier::Prediction;
use crate::errors::{BatchInferError, BatchInferResult};
use crate::intent_model::IntentModel;

#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    threads: Option<usize>,
}

impl BatchConfig {
    pub fn new() -> Self {
        Self { threads: None }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn get_threads(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

#[derive(Debug)]
pub struct BatchOutput {
    predictions: Vec<Prediction>,
}

impl BatchOutput {
    fn new(predictions: Vec<Prediction>) -> Self {
        Self { predictions }
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn as_slice(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn get(&self, index: usize) -> BatchInferResult<&Prediction> {
        self.predictions
            .get(index)
            .ok_or(BatchInferError::ResultIndexOutOfBounds {
                index,
                num_lines: self.predictions.len(),
            })
    }

    pub fn class_indices(&self) -> Vec<usize> {
        self.predictions.iter().map(|p| p.class_index).collect()
    }

    pub fn copy_class_indices(&self, dest: &mut [usize]) -> BatchInferResult<()> {
        if dest.len() != self.predictions.len() {
            return Err(BatchInferError::DestinationBufferSizeMismatch {
                expected: self.predictions.len(),
                actual: dest.len(),
            });
        }
        for (slot, prediction) in dest.iter_mut().zip(&self.predictions) {
            *slot = prediction.class_index;
        }
        Ok(())
    }

    pub fn into_predictions(self) -> Vec<Prediction> {
        self.predictions
    }
}

/// Classifies every line, spreading the work over scoped worker threads.
///
/// Workers pull line indexes from a shared counter, so results come back in
/// input order regardless of which thread handled them.
pub fn infer_batch<S>(
    model: &IntentModel,
    lines: &[S],
    config: &BatchConfig,
) -> BatchInferResult<BatchOutput>
where
    S: AsRef<str> + Sync,
{
    let num_threads = config.get_threads();
    if num_threads == 0 {
        return Err(BatchInferError::InvalidThreadCount { count: 0 });
    }

    let num_lines = lines.len();
    if num_lines == 0 {
        return Ok(BatchOutput::new(Vec::new()));
    }

    let mut predictions = vec![Prediction::default(); num_lines];
    let line_counter = AtomicUsize::new(0);

    thread::scope(|scope| -> BatchInferResult<()> {
        let line_counter_ref = &line_counter;

        let handles: Vec<_> = (0..num_threads.min(num_lines))
            .map(|_| {
                scope.spawn(move || {
                    let mut results = Vec::new();
                    loop {
                        let line_index = line_counter_ref.fetch_add(1, Ordering::Relaxed);
                        if line_index >= num_lines {
                            break;
                        }
                        results.push((line_index, model.predict(lines[line_index].as_ref())));
                    }
                    results
                })
            })
            .collect();

        for handle in handles {
            let results = handle.join().map_err(|_| BatchInferError::ThreadPanicked)?;
            for (line_index, prediction) in results {
                predictions[line_index] = prediction;
            }
        }

        Ok(())
    })?;

    Ok(BatchOutput::new(predictions))
}

impl IntentModel {
    /// Classifies many lines in parallel. See [`infer_batch`].
    pub fn infer_batch<S>(&self, lines: &[S], config: BatchConfig) -> BatchInferResult<BatchOutput>
    where
        S: AsRef<str> + Sync,
    {
        infer_batch(self, lines, &config)
    }
}
