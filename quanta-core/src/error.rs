//! Error types for circuit construction

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while building or validating a circuit
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Gate applied to wrong number of qubits
    #[error("Gate '{gate}' requires {expected} qubits, but {actual} were provided")]
    InvalidQubitCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Circuit has no qubits
    #[error("Circuit must have at least one qubit")]
    EmptyCircuit,

    /// Circuit is wider than the configured limit
    #[error("Circuit has {num_qubits} qubits, maximum allowed is {max_qubits}")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Duplicate qubit in gate operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Gate type string that is not part of the gate library
    #[error("Unknown gate type '{0}'")]
    UnknownGate(String),

    /// Rotation angle that cannot be applied
    #[error("Invalid parameter {value} for gate '{gate}'")]
    InvalidParameter { gate: String, value: f64 },

    /// Malformed circuit document
    #[error("Failed to deserialize circuit: {0}")]
    Deserialization(String),

    /// Generic circuit validation error
    #[error("Circuit validation failed: {0}")]
    ValidationError(String),
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create an invalid qubit count error
    pub fn invalid_qubit_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidQubitCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }

    /// Create an unknown gate error
    pub fn unknown_gate(name: impl Into<String>) -> Self {
        Self::UnknownGate(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_qubit_error() {
        let err = QuantumError::invalid_qubit(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_too_many_qubits_error() {
        let err = QuantumError::TooManyQubits {
            num_qubits: 17,
            max_qubits: 16,
        };
        let msg = err.to_string();
        assert!(msg.contains("17"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn test_unknown_gate_error() {
        let err = QuantumError::unknown_gate("FREDKIN");
        assert_eq!(err.to_string(), "Unknown gate type 'FREDKIN'");
    }

    #[test]
    fn test_empty_circuit_error() {
        let err = QuantumError::EmptyCircuit;
        let msg = format!("{}", err);
        assert!(msg.contains("at least one qubit"));
    }
}
