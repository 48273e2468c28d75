//! Dot-product kernel and the matrix-vector helpers built on it.
//!
//! All helpers are allocation free and operate on caller-owned buffers.

/// Dot product of two equally sized slices.
///
/// Uses four independent accumulators so the compiler can keep them in
/// separate registers, then folds the tail with a single accumulator.
#[inline(always)]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let mut sum0 = 0.0f32;
    let mut sum1 = 0.0f32;
    let mut sum2 = 0.0f32;
    let mut sum3 = 0.0f32;

    let mut a_chunks = a.chunks_exact(4);
    let mut b_chunks = b.chunks_exact(4);
    for (ac, bc) in a_chunks.by_ref().zip(b_chunks.by_ref()) {
        sum0 = ac[0].mul_add(bc[0], sum0);
        sum1 = ac[1].mul_add(bc[1], sum1);
        sum2 = ac[2].mul_add(bc[2], sum2);
        sum3 = ac[3].mul_add(bc[3], sum3);
    }

    let mut sum = (sum0 + sum1) + (sum2 + sum3);
    for (&av, &bv) in a_chunks.remainder().iter().zip(b_chunks.remainder()) {
        sum = av.mul_add(bv, sum);
    }

    sum
}

/// Row-major matrix-vector product: `out[i] = matrix[i, ..] . vector`.
///
/// The number of rows is `out.len()` and the number of columns is
/// `vector.len()`. No bias is added.
#[inline]
pub fn matvec(matrix: &[f32], vector: &[f32], out: &mut [f32]) {
    let cols = vector.len();
    debug_assert_eq!(matrix.len(), out.len() * cols);

    for (value, row) in out.iter_mut().zip(matrix.chunks_exact(cols)) {
        *value = dot(row, vector);
    }
}

/// `target[i] += values[i]`.
#[inline]
pub fn add_assign(target: &mut [f32], values: &[f32]) {
    debug_assert_eq!(target.len(), values.len());
    for (t, &v) in target.iter_mut().zip(values) {
        *t += v;
    }
}

/// Elementwise product in place: `target[i] *= values[i]`.
#[inline]
pub fn hadamard(target: &mut [f32], values: &[f32]) {
    debug_assert_eq!(target.len(), values.len());
    for (t, &v) in target.iter_mut().zip(values) {
        *t *= v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELTA: f32 = 1e-6;

    #[test]
    fn test_dot_with_tail() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [0.5, -1.0, 2.0, 0.0, 1.0, -0.5];
        // 0.5 - 2 + 6 + 0 + 5 - 3 = 6.5
        assert!((dot(&a, &b) - 6.5).abs() < DELTA);
    }

    #[test]
    fn test_dot_empty() {
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    fn test_matvec() {
        // 2 x 3 matrix
        let matrix = [1.0, 0.0, -1.0, 2.0, 0.5, 0.25];
        let vector = [4.0, 2.0, 8.0];
        let mut out = [0.0f32; 2];
        matvec(&matrix, &vector, &mut out);

        assert!((out[0] - (-4.0)).abs() < DELTA);
        assert!((out[1] - 11.0).abs() < DELTA);
    }

    #[test]
    fn test_matvec_overwrites_output() {
        let matrix = [1.0, 1.0];
        let mut out = [42.0f32; 1];
        matvec(&matrix, &[0.0, 0.0], &mut out);
        assert_eq!(out[0], 0.0);
    }

    #[test]
    fn test_add_assign_and_hadamard() {
        let mut values = [1.0, 2.0, 3.0];
        add_assign(&mut values, &[0.5, 0.5, -3.0]);
        assert_eq!(values, [1.5, 2.5, 0.0]);

        hadamard(&mut values, &[2.0, 0.0, 7.0]);
        assert_eq!(values, [3.0, 0.0, 0.0]);
    }
}
