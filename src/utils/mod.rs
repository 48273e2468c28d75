//! Linear algebra primitives over fixed-size `f32` buffers.

mod dot;

pub use dot::{add_assign, dot, hadamard, matvec};
