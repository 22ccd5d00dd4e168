//! Statevector simulation service for QUANTA circuits
//!
//! This crate ties the pieces together: the circuit builder from
//! `quanta-core`, gate actions from `quanta-gates`, kernels and sampling
//! from `quanta-state`. It exposes three entry points on [`Simulator`]:
//!
//! - [`Simulator::get_statevector`]: final amplitudes and probabilities
//! - [`Simulator::simulate`]: the above plus sampled measurement counts
//! - [`Simulator::simulate_steps`]: a snapshot per distinct time step
//!
//! # Example
//!
//! ```
//! use quanta_core::{GateKind, GateSpec};
//! use quanta_sim::Simulator;
//!
//! let simulator = Simulator::default();
//! let gates = vec![
//!     GateSpec::new(GateKind::Hadamard, 0),
//!     GateSpec::new(GateKind::Hadamard, 0).at_step(1),
//! ];
//!
//! let result = simulator.get_statevector(1, &gates).unwrap();
//! assert!((result.probabilities[0] - 1.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod evolver;
pub mod result;
pub mod simulator;
pub mod statistics;

pub use config::SimulatorConfig;
pub use error::{ErrorKind, Result, SimulatorError};
pub use result::{
    MeasurementCounts, SimulationResult, StateSnapshot, StatevectorResult, StepHistory,
};
pub use simulator::Simulator;
pub use statistics::ExecutionStatistics;
