//! Weights of the bundled command model.
//!
//! Shapes follow [`crate::dimensions`]. GRU tensors are packed in `z, r, h`
//! gate order, each block row-major.

use std::borrow::Cow;

use crate::classifier::DENSE_KERNEL_LEN;
use crate::dimensions::{EMBED_DIM, OUTPUT_CLASSES};
use crate::gru::{GRU_BIAS_LEN, GRU_KERNEL_LEN, GRU_RECURRENT_LEN};

pub const VOCAB_SIZE: usize = 17;

pub static VOCABULARY: [Cow<'static, str>; VOCAB_SIZE] = [
    Cow::Borrowed("<PAD>"),
    Cow::Borrowed("turn"),
    Cow::Borrowed("on"),
    Cow::Borrowed("off"),
    Cow::Borrowed("led"),
    Cow::Borrowed("light"),
    Cow::Borrowed("lamp"),
    Cow::Borrowed("the"),
    Cow::Borrowed("switch"),
    Cow::Borrowed("enable"),
    Cow::Borrowed("disable"),
    Cow::Borrowed("activate"),
    Cow::Borrowed("deactivate"),
    Cow::Borrowed("start"),
    Cow::Borrowed("stop"),
    Cow::Borrowed("power"),
    Cow::Borrowed("now"),
];

pub static LABELS: [Cow<'static, str>; OUTPUT_CLASSES] =
    [Cow::Borrowed("OFF"), Cow::Borrowed("ON")];

#[rustfmt::skip]
pub static EMBEDDING: [f32; VOCAB_SIZE * EMBED_DIM] = [
     0.00,  0.00,  0.00,  0.00,
     0.02, -0.01,  0.03,  0.96,
     0.98,  0.01, -0.02,  0.03,
    -0.01,  0.97,  0.02,  0.04,
     0.01,  0.02,  0.99, -0.02,
    -0.02,  0.01,  0.94,  0.05,
     0.03, -0.02,  0.91,  0.02,
     0.01,  0.01, -0.03,  0.88,
     0.03,  0.02,  0.12,  0.85,
     0.93, -0.03,  0.04,  0.06,
    -0.04,  0.92,  0.03,  0.05,
     0.90,  0.02, -0.01,  0.08,
     0.01,  0.89,  0.02,  0.07,
     0.86,  0.04,  0.02,  0.10,
     0.03,  0.87, -0.02,  0.09,
     0.05,  0.04,  0.21,  0.79,
    -0.01,  0.02,  0.01,  0.83,
];

#[rustfmt::skip]
pub static GRU_KERNEL: [f32; GRU_KERNEL_LEN] = [
    // update
     6.12,  5.87,  0.11, -0.23,
     0.08, -0.14,  5.93,  0.17,
     5.94,  6.05, -0.09, -0.18,
    -0.21,  0.12,  0.26,  4.08,
    // reset
     0.31, -0.27,  0.05,  0.12,
     0.04,  0.09,  0.22, -0.06,
    -0.25,  0.33,  0.07,  0.10,
     0.11,  0.02, -0.08,  0.19,
    // candidate
     4.07, -3.96,  0.06, -0.04,
     0.03, -0.05,  3.02,  0.08,
    -3.98,  4.11, -0.03,  0.05,
     0.07, -0.02,  0.09,  2.04,
];

#[rustfmt::skip]
pub static GRU_RECURRENT: [f32; GRU_RECURRENT_LEN] = [
    // update
     0.04, -0.02,  0.03,  0.01,
    -0.01,  0.05,  0.02, -0.03,
     0.02,  0.01, -0.04,  0.02,
     0.03, -0.02,  0.01,  0.06,
    // reset
     0.07,  0.03, -0.05,  0.02,
    -0.02,  0.08,  0.01,  0.04,
    -0.06,  0.02,  0.09, -0.01,
     0.01, -0.03,  0.02,  0.07,
    // candidate
     0.52,  0.04, -0.26,  0.03,
     0.02,  0.49, -0.01,  0.05,
    -0.24,  0.03,  0.51, -0.02,
     0.04,  0.06, -0.03,  0.47,
];

#[rustfmt::skip]
pub static GRU_BIAS: [f32; GRU_BIAS_LEN] = [
    -3.05, -2.96, -3.02, -2.11,
     1.02,  0.97,  1.05,  0.94,
     0.02, -0.04, -0.01,  0.03,
];

#[rustfmt::skip]
pub static DENSE_KERNEL: [f32; DENSE_KERNEL_LEN] = [
    -2.47,  2.53,
     0.12,  0.09,
     2.51, -2.44,
     0.03, -0.02,
];

pub static DENSE_BIAS: [f32; OUTPUT_CLASSES] = [0.16, -0.14];
