//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Invalid state dimension
    #[error("Invalid state dimension {dimension}, expected a non-zero power of 2")]
    InvalidDimension { dimension: usize },

    /// Register wider than a dense statevector can hold
    #[error("Cannot allocate a statevector for {num_qubits} qubits (limit {max_qubits})")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Memory allocation error
    #[error("Failed to allocate {size} bytes for state vector")]
    AllocationError { size: usize },

    /// Distribution with no outcome of positive probability
    #[error("Cannot sample from a distribution with no positive probability")]
    EmptyDistribution,

    /// Negative or non-finite probability
    #[error("Invalid probability in distribution")]
    InvalidProbability,
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
