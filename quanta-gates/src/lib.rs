//! Quantum gate library for QUANTA
//!
//! This crate maps resolved gate operations onto the numbers the simulator
//! needs: constant matrices for fixed gates, rotation matrices for
//! parameterized gates and a [`GateAction`] describing which kernel applies
//! the gate and to which qubits.
//!
//! # Examples
//!
//! ```
//! use quanta_core::{GateKind, GateSpec};
//! use quanta_gates::{matrices, GateAction};
//!
//! let op = GateSpec::new(GateKind::Hadamard, 0).resolve(1).unwrap();
//! match GateAction::from_op(&op) {
//!     GateAction::Single { target, matrix } => {
//!         assert_eq!(target, 0);
//!         assert_eq!(matrix, matrices::HADAMARD);
//!     }
//!     other => panic!("unexpected action {:?}", other),
//! }
//! ```
//!
//! Small circuits can also be turned into their full `2^n × 2^n` unitary with
//! the [`unitary`] module, which is useful for checking the kernels.

pub mod matrices;
pub mod standard;
pub mod unitary;

pub use standard::{GateAction, Matrix2x2};
pub use unitary::{circuit_unitary, embed, MAX_DENSE_QUBITS};
