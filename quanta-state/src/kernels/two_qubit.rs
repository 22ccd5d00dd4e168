//! Two-qubit permutation gates

use num_complex::Complex64;

/// Exchange the states of `qubit1` and `qubit2`
///
/// Only amplitudes whose two bits differ move: each index with `qubit1` set
/// and `qubit2` clear is swapped with its mirror.
pub fn apply_swap(state: &mut [Complex64], qubit1: usize, qubit2: usize, num_qubits: usize) {
    let dimension = 1usize << num_qubits;
    let mask1 = 1usize << qubit1;
    let mask2 = 1usize << qubit2;

    for i in 0..dimension {
        if i & mask1 != 0 && i & mask2 == 0 {
            state.swap(i, i ^ mask1 ^ mask2);
        }
    }
}
