//! Dense classification head, softmax and decision.

use std::borrow::Cow;
use std::fmt;

use crate::activation::Activation;
use crate::dimensions::{
    ClassProbabilities, GRU_UNITS, HiddenState, OFF_CLASS, ON_CLASS, OUTPUT_CLASSES,
};

/// Number of values in the dense kernel (`GRU_UNITS x OUTPUT_CLASSES`).
pub const DENSE_KERNEL_LEN: usize = GRU_UNITS * OUTPUT_CLASSES;

/// The binary decision carried by a class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Off,
    On,
}

impl Intent {
    /// Maps a class index to an intent. Every index other than [`ON_CLASS`] is OFF.
    pub fn from_class_index(class_index: usize) -> Self {
        if class_index == ON_CLASS {
            Intent::On
        } else {
            Intent::Off
        }
    }

    pub fn class_index(self) -> usize {
        match self {
            Intent::Off => OFF_CLASS,
            Intent::On => ON_CLASS,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Off => f.write_str("OFF"),
            Intent::On => f.write_str("ON"),
        }
    }
}

/// Outcome of one inference call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Prediction {
    pub class_index: usize,
    pub probabilities: ClassProbabilities,
}

impl Prediction {
    /// Builds a prediction from a probability vector, choosing the argmax class.
    pub fn from_probabilities(probabilities: ClassProbabilities) -> Self {
        Self {
            class_index: argmax(&probabilities),
            probabilities,
        }
    }

    pub fn intent(&self) -> Intent {
        Intent::from_class_index(self.class_index)
    }

    /// Probability of the chosen class.
    pub fn confidence(&self) -> f32 {
        self.probabilities[self.class_index]
    }
}

/// Index of the largest value. Ties keep the lowest index.
pub fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for (index, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = index;
        }
    }
    best
}

/// Dense projection from the hidden state to class logits.
#[derive(Debug, Clone)]
pub struct DenseHead {
    /// `GRU_UNITS x OUTPUT_CLASSES`, row-major: `kernel[j * OUTPUT_CLASSES + c]`.
    kernel: Cow<'static, [f32]>,
    bias: Cow<'static, [f32]>,
}

impl DenseHead {
    pub fn new(kernel: Cow<'static, [f32]>, bias: Cow<'static, [f32]>) -> Self {
        debug_assert_eq!(kernel.len(), DENSE_KERNEL_LEN);
        debug_assert_eq!(bias.len(), OUTPUT_CLASSES);
        Self { kernel, bias }
    }

    /// `logits[c] = kernel[.., c] . hidden + bias[c]`.
    pub fn logits(&self, hidden: &HiddenState) -> [f32; OUTPUT_CLASSES] {
        let mut logits = [0.0f32; OUTPUT_CLASSES];
        for (class, logit) in logits.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for (unit, &h) in hidden.iter().enumerate() {
                sum += self.kernel[unit * OUTPUT_CLASSES + class] * h;
            }
            *logit = sum + self.bias[class];
        }
        logits
    }

    /// Logits, softmax and argmax.
    pub fn classify(&self, hidden: &HiddenState) -> Prediction {
        let mut probabilities = self.logits(hidden);
        Activation::Softmax.apply_in_place(&mut probabilities);
        Prediction::from_probabilities(probabilities)
    }
}
