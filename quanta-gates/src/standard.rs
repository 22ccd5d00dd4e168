//! Resolved gate actions
//!
//! A [`GateAction`] is what a [`GateOp`] means to a statevector: which kernel
//! applies it, on which qubits, with which numbers. Diagonal gates are kept
//! apart from general single-qubit gates because they only rescale
//! amplitudes.

use crate::matrices::{self, ONE, ZERO};
use num_complex::Complex64;
use quanta_core::{GateKind, GateOp, DEFAULT_ROTATION_ANGLE};
use smallvec::{smallvec, SmallVec};

/// Standard single-qubit matrix type
pub type Matrix2x2 = [[Complex64; 2]; 2];

/// How a gate acts on the statevector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateAction {
    /// General 2x2 unitary on one qubit
    Single { target: usize, matrix: Matrix2x2 },

    /// Diagonal 2x2 unitary on one qubit
    Diagonal {
        target: usize,
        diagonal: [Complex64; 2],
    },

    /// 2x2 unitary on `target` applied when `control` is |1⟩
    Controlled {
        control: usize,
        target: usize,
        matrix: Matrix2x2,
    },

    /// Phase applied to the |11⟩ component of two qubits
    ControlledPhase {
        control: usize,
        target: usize,
        phase: Complex64,
    },

    /// Exchange of two qubits
    Swap { first: usize, second: usize },

    /// 2x2 unitary on `target` applied when both controls are |1⟩
    MultiControlled {
        controls: [usize; 2],
        target: usize,
        matrix: Matrix2x2,
    },

    /// Measurement marker; leaves the state untouched
    Measure { qubit: usize },
}

impl GateAction {
    /// Translate a resolved operation
    pub fn from_op(op: &GateOp) -> Self {
        let qubits: SmallVec<[usize; 3]> = op.qubits().iter().map(|q| q.index()).collect();
        let target = op.target().index();
        let theta = op.parameter().unwrap_or(DEFAULT_ROTATION_ANGLE);

        match op.kind() {
            GateKind::Identity => GateAction::Diagonal {
                target,
                diagonal: [ONE, ONE],
            },
            GateKind::Hadamard => GateAction::Single {
                target,
                matrix: matrices::HADAMARD,
            },
            GateKind::PauliX => GateAction::Single {
                target,
                matrix: matrices::PAULI_X,
            },
            GateKind::PauliY => GateAction::Single {
                target,
                matrix: matrices::PAULI_Y,
            },
            GateKind::PauliZ => GateAction::Diagonal {
                target,
                diagonal: [ONE, -ONE],
            },
            GateKind::S => GateAction::Diagonal {
                target,
                diagonal: [matrices::S_GATE[0][0], matrices::S_GATE[1][1]],
            },
            GateKind::T => GateAction::Diagonal {
                target,
                diagonal: [matrices::T_GATE[0][0], matrices::T_GATE[1][1]],
            },
            GateKind::RotationX => GateAction::Single {
                target,
                matrix: matrices::rotation_x(theta),
            },
            GateKind::RotationY => GateAction::Single {
                target,
                matrix: matrices::rotation_y(theta),
            },
            GateKind::RotationZ => GateAction::Diagonal {
                target,
                diagonal: matrices::rotation_z_diagonal(theta),
            },
            GateKind::CNot => GateAction::Controlled {
                control: qubits[0],
                target,
                matrix: matrices::PAULI_X,
            },
            GateKind::CZ => GateAction::ControlledPhase {
                control: qubits[0],
                target,
                phase: -ONE,
            },
            GateKind::Swap => GateAction::Swap {
                first: qubits[0],
                second: qubits[1],
            },
            GateKind::Toffoli => GateAction::MultiControlled {
                controls: [qubits[0], qubits[1]],
                target,
                matrix: matrices::PAULI_X,
            },
            GateKind::Measure => GateAction::Measure { qubit: target },
        }
    }

    /// Qubits touched, in local-matrix order (most significant first)
    pub fn qubits(&self) -> SmallVec<[usize; 3]> {
        match *self {
            GateAction::Single { target, .. } | GateAction::Diagonal { target, .. } => {
                smallvec![target]
            }
            GateAction::Controlled {
                control, target, ..
            }
            | GateAction::ControlledPhase {
                control, target, ..
            } => smallvec![control, target],
            GateAction::Swap { first, second } => smallvec![first, second],
            GateAction::MultiControlled {
                controls, target, ..
            } => smallvec![controls[0], controls[1], target],
            GateAction::Measure { qubit } => smallvec![qubit],
        }
    }

    /// Whether the action changes the statevector at all
    pub fn is_unitary(&self) -> bool {
        !matches!(self, GateAction::Measure { .. })
    }

    /// The local unitary over [`GateAction::qubits`], flattened row-major
    ///
    /// The matrix has dimension `2^k × 2^k` for an action on `k` qubits.
    pub fn local_matrix(&self) -> Vec<Complex64> {
        match self {
            GateAction::Single { matrix, .. } => matrices::flatten(matrix),
            GateAction::Diagonal { diagonal, .. } => {
                matrices::flatten(&[[diagonal[0], ZERO], [ZERO, diagonal[1]]])
            }
            GateAction::Controlled { matrix, .. } => controlled_matrix(matrix, 1),
            GateAction::ControlledPhase { phase, .. } => {
                let mut local = matrices::flatten(&matrices::CZ);
                local[15] = *phase;
                local
            }
            GateAction::Swap { .. } => matrices::flatten(&matrices::SWAP),
            GateAction::MultiControlled { matrix, .. } => controlled_matrix(matrix, 2),
            GateAction::Measure { .. } => matrices::flatten(&matrices::IDENTITY),
        }
    }
}

/// Block-diagonal matrix applying `matrix` only when every control is |1⟩
fn controlled_matrix(matrix: &Matrix2x2, num_controls: usize) -> Vec<Complex64> {
    let dim = 1 << (num_controls + 1);
    let mut local = vec![ZERO; dim * dim];

    for i in 0..dim - 2 {
        local[i * dim + i] = ONE;
    }
    for (r, row) in matrix.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            local[(dim - 2 + r) * dim + (dim - 2 + c)] = value;
        }
    }

    local
}
