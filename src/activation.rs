//! Activation functions used by the recurrent layer and the classification head.
//!
//! The GRU gates squash their pre-activations with Sigmoid (update, reset) and
//! Tanh (candidate); the dense head turns logits into probabilities with a
//! numerically stable Softmax.

/// Represents the type of activation function to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Sigmoid activation function: f(x) = 1 / (1 + exp(-x)).
    Sigmoid,
    /// Hyperbolic tangent activation function: f(x) = tanh(x).
    Tanh,
    /// Softmax activation function:
    ///
    /// Applies the numerically stable Softmax function across a vector to produce a probability distribution:
    /// ```text
    /// Softmax(x_i) = exp(x_i - max(x)) / sum_j exp(x_j - max(x))
    /// ```
    ///
    /// Subtracting the maximum keeps every exponent at or below zero, so large
    /// logits never overflow.
    Softmax,
}

impl Activation {
    /// Apply the activation function to a single value.
    pub fn apply_single(self, x: f32) -> f32 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            // Softmax of a lone value is not defined; callers normalise vectors.
            Activation::Softmax => x.exp(),
        }
    }

    /// Apply the activation function to a slice of values in place.
    pub fn apply_in_place(self, values: &mut [f32]) {
        match self {
            Activation::Softmax => {
                if values.is_empty() {
                    return;
                }

                let max_val = values.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
                let mut sum = 0.0f32;

                for val in values.iter_mut() {
                    *val = (*val - max_val).exp();
                    sum += *val;
                }

                for val in values.iter_mut() {
                    *val /= sum;
                }
            }
            _ => {
                for val in values.iter_mut() {
                    *val = self.apply_single(*val);
                }
            }
        }
    }
}
