//! Controlled gates
//!
//! Controlled gates only touch the part of the state where every control bit
//! is set, so they reduce to a 2×2 update on those pairs or to a phase on a
//! single amplitude.

use num_complex::Complex64;

/// Apply `matrix` to `target` on the subspace where `control` is |1⟩
///
/// CNOT is this kernel with the Pauli-X matrix.
pub fn apply_controlled_gate(
    state: &mut [Complex64],
    matrix: &[[Complex64; 2]; 2],
    control: usize,
    target: usize,
    num_qubits: usize,
) {
    apply_masked_gate(state, matrix, 1usize << control, target, num_qubits);
}

/// Apply `matrix` to `target` on the subspace where both controls are |1⟩
///
/// TOFFOLI is this kernel with the Pauli-X matrix.
pub fn apply_doubly_controlled_gate(
    state: &mut [Complex64],
    matrix: &[[Complex64; 2]; 2],
    controls: [usize; 2],
    target: usize,
    num_qubits: usize,
) {
    let control_mask = (1usize << controls[0]) | (1usize << controls[1]);
    apply_masked_gate(state, matrix, control_mask, target, num_qubits);
}

fn apply_masked_gate(
    state: &mut [Complex64],
    matrix: &[[Complex64; 2]; 2],
    control_mask: usize,
    target: usize,
    num_qubits: usize,
) {
    let dimension = 1usize << num_qubits;
    let stride = 1usize << target;

    for base in (0..dimension).step_by(2 * stride) {
        for i in base..base + stride {
            if i & control_mask != control_mask {
                continue;
            }
            let j = i + stride;
            let amp0 = state[i];
            let amp1 = state[j];
            state[i] = matrix[0][0] * amp0 + matrix[0][1] * amp1;
            state[j] = matrix[1][0] * amp0 + matrix[1][1] * amp1;
        }
    }
}

/// Multiply the |11⟩ component of two qubits by `phase`
///
/// CZ is this kernel with a phase of -1. The kernel is symmetric in its two
/// qubits.
pub fn apply_controlled_phase(
    state: &mut [Complex64],
    phase: Complex64,
    qubit1: usize,
    qubit2: usize,
    num_qubits: usize,
) {
    let dimension = 1usize << num_qubits;
    let mask_both = (1usize << qubit1) | (1usize << qubit2);

    for (i, amp) in state.iter_mut().enumerate().take(dimension) {
        if i & mask_both == mask_both {
            *amp *= phase;
        }
    }
}
