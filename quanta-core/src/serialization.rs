//! JSON circuit documents
//!
//! A circuit request carries the circuit width and an unordered list of gate
//! descriptors:
//!
//! ```json
//! {
//!   "id": "bell",
//!   "numQubits": 2,
//!   "gates": [
//!     {"type": "H", "qubit": 0, "step": 0},
//!     {"type": "CNOT", "qubit": 1, "controlQubit": 0, "step": 1}
//!   ]
//! }
//! ```

use crate::{Circuit, GateSpec, QuantumError, Result};
use serde::{Deserialize, Serialize};

/// Serialized circuit request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub num_qubits: usize,

    #[serde(default)]
    pub gates: Vec<GateSpec>,
}

impl CircuitSpec {
    pub fn new(num_qubits: usize, gates: Vec<GateSpec>) -> Self {
        Self {
            id: None,
            name: None,
            num_qubits,
            gates,
        }
    }

    /// Parse a circuit document
    ///
    /// Unknown gate types are rejected here.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| QuantumError::Deserialization(e.to_string()))
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| QuantumError::Deserialization(e.to_string()))
    }

    /// Build the validated circuit
    pub fn to_circuit(&self, max_qubits: usize) -> Result<Circuit> {
        Circuit::from_specs(self.num_qubits, max_qubits, &self.gates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GateKind;

    const BELL: &str = r#"{
        "id": "bell",
        "name": "Bell pair",
        "numQubits": 2,
        "gates": [
            {"id": "b", "type": "CNOT", "qubit": 1, "controlQubit": 0, "step": 1},
            {"id": "a", "type": "H", "qubit": 0, "step": 0}
        ]
    }"#;

    #[test]
    fn test_parse_circuit_document() {
        let spec = CircuitSpec::from_json(BELL).unwrap();
        assert_eq!(spec.num_qubits, 2);
        assert_eq!(spec.gates.len(), 2);
        assert_eq!(spec.name.as_deref(), Some("Bell pair"));

        let circuit = spec.to_circuit(16).unwrap();
        assert_eq!(circuit.get_operation(0).unwrap().kind(), GateKind::Hadamard);
        assert_eq!(circuit.get_operation(1).unwrap().kind(), GateKind::CNot);
    }

    #[test]
    fn test_unknown_gate_in_document() {
        let json = r#"{"numQubits": 1, "gates": [{"type": "U3", "qubit": 0, "step": 0}]}"#;
        let err = CircuitSpec::from_json(json).unwrap_err();
        match err {
            QuantumError::Deserialization(msg) => assert!(msg.contains("U3")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_negative_qubit_rejected() {
        let json = r#"{"numQubits": 1, "gates": [{"type": "X", "qubit": -1, "step": 0}]}"#;
        assert!(matches!(
            CircuitSpec::from_json(json),
            Err(QuantumError::Deserialization(_))
        ));
    }

    #[test]
    fn test_missing_gates_is_empty_circuit() {
        let spec = CircuitSpec::from_json(r#"{"numQubits": 3}"#).unwrap();
        assert!(spec.gates.is_empty());
        assert!(spec.to_circuit(16).unwrap().is_empty());
    }

    #[test]
    fn test_to_json_pretty() {
        let spec = CircuitSpec::new(1, vec![GateSpec::new(GateKind::PauliX, 0)]);
        let json = spec.to_json_pretty().unwrap();
        assert!(json.contains("\"numQubits\": 1"));
        assert_eq!(CircuitSpec::from_json(&json).unwrap(), spec);
    }
}
