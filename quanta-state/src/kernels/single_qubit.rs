//! Single-qubit gate application

use num_complex::Complex64;

/// Apply a 2×2 matrix to `qubit`
///
/// Amplitudes are processed in pairs `(i, i | 2^qubit)` that differ only in
/// the target bit. The outer loop walks blocks of `2 * stride`, the inner loop
/// the lower half of each block, so both halves stay contiguous.
pub fn apply_gate(
    state: &mut [Complex64],
    matrix: &[[Complex64; 2]; 2],
    qubit: usize,
    num_qubits: usize,
) {
    let dimension = 1usize << num_qubits;
    let stride = 1usize << qubit;

    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];

    for base in (0..dimension).step_by(2 * stride) {
        for i in base..base + stride {
            let j = i + stride;
            let amp0 = state[i];
            let amp1 = state[j];
            state[i] = m00 * amp0 + m01 * amp1;
            state[j] = m10 * amp0 + m11 * amp1;
        }
    }
}
