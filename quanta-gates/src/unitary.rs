//! Dense unitaries for small circuits
//!
//! Builds full `2^n × 2^n` matrices. The simulator never uses these; they
//! exist to cross-check the in-place kernels and to inspect small circuits.

use crate::matrices::{ONE, ZERO};
use crate::GateAction;
use num_complex::Complex64;
use quanta_core::{Circuit, QuantumError, Result};

/// Largest width for which a dense unitary is built
pub const MAX_DENSE_QUBITS: usize = 10;

fn check_dense_width(num_qubits: usize) -> Result<()> {
    if num_qubits > MAX_DENSE_QUBITS {
        return Err(QuantumError::TooManyQubits {
            num_qubits,
            max_qubits: MAX_DENSE_QUBITS,
        });
    }
    Ok(())
}

/// Local index of a basis state over `qubits`, first qubit most significant
#[inline]
fn local_index(index: usize, qubits: &[usize]) -> usize {
    qubits
        .iter()
        .fold(0, |acc, &q| (acc << 1) | ((index >> q) & 1))
}

/// Embed a gate action into the full space of `num_qubits` qubits
///
/// Returns the matrix flattened row-major.
///
/// # Errors
/// [`QuantumError::TooManyQubits`] above [`MAX_DENSE_QUBITS`] and
/// [`QuantumError::InvalidQubit`] when the action touches a qubit outside the
/// register.
pub fn embed(action: &GateAction, num_qubits: usize) -> Result<Vec<Complex64>> {
    check_dense_width(num_qubits)?;

    let qubits = action.qubits();
    for &q in &qubits {
        if q >= num_qubits {
            return Err(QuantumError::invalid_qubit(q, num_qubits));
        }
    }

    let local = action.local_matrix();
    let local_dim = 1 << qubits.len();
    let mask = qubits.iter().fold(0usize, |m, &q| m | (1 << q));
    let dim = 1usize << num_qubits;
    let mut full = vec![ZERO; dim * dim];

    for row in 0..dim {
        let lr = local_index(row, &qubits);
        for col in 0..dim {
            if row & !mask != col & !mask {
                continue;
            }
            let lc = local_index(col, &qubits);
            full[row * dim + col] = local[lr * local_dim + lc];
        }
    }

    Ok(full)
}

/// The unitary of a whole circuit, operations applied in order
///
/// MEASURE markers contribute the identity.
pub fn circuit_unitary(circuit: &Circuit) -> Result<Vec<Complex64>> {
    let n = circuit.num_qubits();
    check_dense_width(n)?;

    let dim = 1usize << n;
    let mut total = identity(dim);

    for op in circuit.operations() {
        let action = GateAction::from_op(op);
        if !action.is_unitary() {
            continue;
        }
        let gate = embed(&action, n)?;
        total = multiply(&gate, &total, dim);
    }

    Ok(total)
}

/// Multiply a flattened `dim × dim` matrix with a vector
pub fn apply_dense(matrix: &[Complex64], vector: &[Complex64]) -> Vec<Complex64> {
    let dim = vector.len();
    (0..dim)
        .map(|row| {
            matrix[row * dim..(row + 1) * dim]
                .iter()
                .zip(vector)
                .map(|(a, b)| a * b)
                .sum()
        })
        .collect()
}

fn identity(dim: usize) -> Vec<Complex64> {
    let mut m = vec![ZERO; dim * dim];
    for i in 0..dim {
        m[i * dim + i] = ONE;
    }
    m
}

fn multiply(a: &[Complex64], b: &[Complex64], dim: usize) -> Vec<Complex64> {
    let mut out = vec![ZERO; dim * dim];
    for i in 0..dim {
        for k in 0..dim {
            let aik = a[i * dim + k];
            if aik == ZERO {
                continue;
            }
            for j in 0..dim {
                out[i * dim + j] += aik * b[k * dim + j];
            }
        }
    }
    out
}
