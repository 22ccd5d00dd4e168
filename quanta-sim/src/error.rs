//! Error types for the simulator

use quanta_core::QuantumError;
use quanta_state::StateError;
use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur during simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulatorError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Circuit rejected while building or validating
    #[error("Invalid circuit: {0}")]
    Circuit(#[from] QuantumError),

    /// State allocation or gate application failed
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Sampling failed
    #[error("Measurement failed: {0}")]
    MeasurementFailed(String),

    /// Result could not be encoded
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Coarse classification of a [`SimulatorError`]
///
/// Lets a request layer decide between a client and a server error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The simulator itself is misconfigured
    Configuration,
    /// The caller sent a circuit that cannot be simulated
    InvalidRequest,
    /// Failure inside the engine
    Internal,
}

impl SimulatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimulatorError::InvalidConfig(_) => ErrorKind::Configuration,
            SimulatorError::Circuit(_) => ErrorKind::InvalidRequest,
            SimulatorError::State(StateError::TooManyQubits { .. })
            | SimulatorError::State(StateError::InvalidQubitIndex { .. }) => {
                ErrorKind::InvalidRequest
            }
            SimulatorError::State(_)
            | SimulatorError::MeasurementFailed(_)
            | SimulatorError::Serialization(_) => ErrorKind::Internal,
        }
    }

    /// Whether the caller is at fault
    pub fn is_client_error(&self) -> bool {
        self.kind() == ErrorKind::InvalidRequest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circuit_errors_are_client_errors() {
        let err: SimulatorError = QuantumError::EmptyCircuit.into();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert!(err.is_client_error());
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            SimulatorError::InvalidConfig("x".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            SimulatorError::from(StateError::EmptyDistribution).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            SimulatorError::from(StateError::TooManyQubits {
                num_qubits: 40,
                max_qubits: 30
            })
            .kind(),
            ErrorKind::InvalidRequest
        );
    }

    #[test]
    fn test_display_wraps_source() {
        let err: SimulatorError = QuantumError::unknown_gate("FOO").into();
        assert_eq!(err.to_string(), "Invalid circuit: Unknown gate type 'FOO'");
    }
}
