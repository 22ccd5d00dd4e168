//! In-place gate kernels
//!
//! Every kernel works on a raw amplitude slice of length `2^num_qubits` with
//! qubit `q` mapped to bit `q` of the basis index. Kernels do not validate
//! their qubit arguments; [`crate::StateVector`] does that before dispatching.

pub mod controlled;
pub mod diagonal;
pub mod single_qubit;
pub mod two_qubit;

pub use controlled::{apply_controlled_gate, apply_controlled_phase, apply_doubly_controlled_gate};
pub use diagonal::apply_diagonal_gate;
pub use single_qubit::apply_gate;
pub use two_qubit::apply_swap;
