//! Single-layer GRU recurrence.
//!
//! Per time step, with previous state `h` and input `x`:
//!
//! ```text
//! z     = sigmoid(W_z x + U_z h + b_z)
//! r     = sigmoid(W_r x + U_r h + b_r)
//! h_hat = tanh(W_h x + U_h (r * h) + b_h)
//! h'    = (1 - z) * h + z * h_hat
//! ```
//!
//! The exported tensors pack the three gates in `z, r, h` order; they are
//! split once into [`GateWeights`] blocks when the model is built.

use std::borrow::Cow;
use std::ops::Range;

use crate::activation::Activation;
use crate::dimensions::{EMBED_DIM, EmbeddedSequence, GRU_GATES, GRU_UNITS, HiddenState};
use crate::utils::{add_assign, hadamard, matvec};

/// Number of values in the flat input kernel (`3*GRU_UNITS x EMBED_DIM`).
pub const GRU_KERNEL_LEN: usize = GRU_GATES * GRU_UNITS * EMBED_DIM;
/// Number of values in the flat recurrent kernel (`3*GRU_UNITS x GRU_UNITS`).
pub const GRU_RECURRENT_LEN: usize = GRU_GATES * GRU_UNITS * GRU_UNITS;
/// Number of values in the flat bias (`3*GRU_UNITS`).
pub const GRU_BIAS_LEN: usize = GRU_GATES * GRU_UNITS;

/// Position of a gate block inside the packed tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Update = 0,
    Reset = 1,
    Candidate = 2,
}

impl Gate {
    /// Range of this gate's rows in a packed tensor with `cols` columns.
    pub fn block(self, cols: usize) -> Range<usize> {
        let len = GRU_UNITS * cols;
        let start = self as usize * len;
        start..start + len
    }
}

/// Weights of one gate.
#[derive(Debug, Clone)]
pub struct GateWeights {
    /// `GRU_UNITS x EMBED_DIM`, row-major.
    input_kernel: Cow<'static, [f32]>,
    /// `GRU_UNITS x GRU_UNITS`, row-major.
    recurrent_kernel: Cow<'static, [f32]>,
    /// `GRU_UNITS`.
    bias: Cow<'static, [f32]>,
}

impl GateWeights {
    pub fn new(
        input_kernel: Cow<'static, [f32]>,
        recurrent_kernel: Cow<'static, [f32]>,
        bias: Cow<'static, [f32]>,
    ) -> Self {
        debug_assert_eq!(input_kernel.len(), GRU_UNITS * EMBED_DIM);
        debug_assert_eq!(recurrent_kernel.len(), GRU_UNITS * GRU_UNITS);
        debug_assert_eq!(bias.len(), GRU_UNITS);
        Self {
            input_kernel,
            recurrent_kernel,
            bias,
        }
    }

    /// `activation(W x + U h + b)`.
    #[inline]
    fn activate(
        &self,
        input: &[f32; EMBED_DIM],
        hidden: &HiddenState,
        activation: Activation,
    ) -> HiddenState {
        let mut gate = [0.0f32; GRU_UNITS];
        let mut recurrent = [0.0f32; GRU_UNITS];

        matvec(&self.input_kernel, input, &mut gate);
        matvec(&self.recurrent_kernel, hidden, &mut recurrent);
        add_assign(&mut recurrent, &self.bias);
        add_assign(&mut gate, &recurrent);

        activation.apply_in_place(&mut gate);
        gate
    }
}

/// The three gate blocks of the recurrent layer.
#[derive(Debug, Clone)]
pub struct GruWeights {
    update: GateWeights,
    reset: GateWeights,
    candidate: GateWeights,
}

impl GruWeights {
    pub fn new(update: GateWeights, reset: GateWeights, candidate: GateWeights) -> Self {
        Self {
            update,
            reset,
            candidate,
        }
    }

    /// Splits the packed kernel, recurrent kernel and bias into named gate blocks.
    ///
    /// Lengths must be [`GRU_KERNEL_LEN`], [`GRU_RECURRENT_LEN`] and
    /// [`GRU_BIAS_LEN`]; model construction checks this before calling.
    pub fn from_flat(
        kernel: &Cow<'static, [f32]>,
        recurrent: &Cow<'static, [f32]>,
        bias: &Cow<'static, [f32]>,
    ) -> Self {
        let split = |gate: Gate| {
            GateWeights::new(
                split_block(kernel, gate.block(EMBED_DIM)),
                split_block(recurrent, gate.block(GRU_UNITS)),
                split_block(bias, gate.block(1)),
            )
        };

        Self::new(
            split(Gate::Update),
            split(Gate::Reset),
            split(Gate::Candidate),
        )
    }

    /// Advances `hidden` by one time step.
    pub fn step(&self, input: &[f32; EMBED_DIM], hidden: &mut HiddenState) {
        let update = self.update.activate(input, hidden, Activation::Sigmoid);
        let reset = self.reset.activate(input, hidden, Activation::Sigmoid);

        let mut reset_hidden = *hidden;
        hadamard(&mut reset_hidden, &reset);

        let candidate = self
            .candidate
            .activate(input, &reset_hidden, Activation::Tanh);

        for ((h, &z), &h_hat) in hidden.iter_mut().zip(&update).zip(&candidate) {
            *h = (1.0 - z) * *h + z * h_hat;
        }
    }

    /// Runs the recurrence over the whole sequence from a zero state.
    pub fn forward(&self, sequence: &EmbeddedSequence) -> HiddenState {
        let mut hidden = [0.0f32; GRU_UNITS];
        for input in sequence {
            self.step(input, &mut hidden);
        }
        hidden
    }
}

fn split_block(tensor: &Cow<'static, [f32]>, range: Range<usize>) -> Cow<'static, [f32]> {
    match tensor {
        Cow::Borrowed(values) => {
            let values: &'static [f32] = *values;
            Cow::Borrowed(&values[range])
        }
        Cow::Owned(values) => Cow::Owned(values[range].to_vec()),
    }
}
