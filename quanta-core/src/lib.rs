//! Core types for the QUANTA circuit simulator
//!
//! This crate provides the fundamental types shared by every other crate in
//! the workspace:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`GateKind`]: The closed set of supported gate types
//! - [`GateSpec`]: A gate descriptor as it arrives from a request
//! - [`GateOp`]: A gate with every default resolved and every index checked
//! - [`Circuit`]: Validated, step-ordered sequence of operations
//!
//! # Example
//! ```
//! use quanta_core::{Circuit, GateKind, GateSpec};
//!
//! let gates = vec![
//!     GateSpec::new(GateKind::CNot, 1).with_control(0).at_step(1),
//!     GateSpec::new(GateKind::Hadamard, 0).at_step(0),
//! ];
//! let circuit = Circuit::from_specs(2, 16, &gates).unwrap();
//!
//! // Operations come back in step order
//! assert_eq!(circuit.get_operation(0).unwrap().kind(), GateKind::Hadamard);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod serialization;

// Re-exports for convenience
pub use circuit::{Circuit, StepLayer};
pub use error::QuantumError;
pub use gate::{GateKind, GateOp, GateSpec, DEFAULT_ROTATION_ANGLE};
pub use qubit::QubitId;
pub use serialization::CircuitSpec;

/// Type alias for results in QUANTA core
pub type Result<T> = std::result::Result<T, QuantumError>;
