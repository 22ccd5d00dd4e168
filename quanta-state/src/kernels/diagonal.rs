//! Diagonal gate application
//!
//! A diagonal gate `diag(a, b)` only rescales amplitudes, so there is no
//! pairing: amplitudes with the target bit clear are multiplied by `a`, the
//! others by `b`. Identity diagonals are skipped entirely.

use num_complex::Complex64;

const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Apply `diag(diagonal[0], diagonal[1])` to `qubit`
#[inline]
pub fn apply_diagonal_gate(
    state: &mut [Complex64],
    diagonal: [Complex64; 2],
    qubit: usize,
    num_qubits: usize,
) {
    let dimension = 1usize << num_qubits;
    let stride = 1usize << qubit;
    let [d0, d1] = diagonal;

    for base in (0..dimension).step_by(2 * stride) {
        if d0 != ONE {
            for amp in &mut state[base..base + stride] {
                *amp *= d0;
            }
        }
        if d1 != ONE {
            for amp in &mut state[base + stride..base + 2 * stride] {
                *amp *= d1;
            }
        }
    }
}
