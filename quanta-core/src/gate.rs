//! Gate descriptors and resolved gate operations

use crate::{QuantumError, QubitId, Result};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::str::FromStr;

/// Rotation angle used when a rotation gate carries no usable parameter
pub const DEFAULT_ROTATION_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// The closed set of gate types understood by the simulator
///
/// Gate types arrive as strings on the wire (`"H"`, `"CNOT"`, ...). Parsing is
/// ASCII case-insensitive and rejects anything outside this set with
/// [`QuantumError::UnknownGate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GateKind {
    Identity,
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    S,
    T,
    RotationX,
    RotationY,
    RotationZ,
    CNot,
    CZ,
    Swap,
    Toffoli,
    /// Measurement marker; never changes the statevector
    Measure,
}

impl GateKind {
    /// Every supported gate type
    pub const ALL: [GateKind; 15] = [
        GateKind::Identity,
        GateKind::Hadamard,
        GateKind::PauliX,
        GateKind::PauliY,
        GateKind::PauliZ,
        GateKind::S,
        GateKind::T,
        GateKind::RotationX,
        GateKind::RotationY,
        GateKind::RotationZ,
        GateKind::CNot,
        GateKind::CZ,
        GateKind::Swap,
        GateKind::Toffoli,
        GateKind::Measure,
    ];

    /// Canonical wire name of the gate
    pub const fn name(&self) -> &'static str {
        match self {
            GateKind::Identity => "I",
            GateKind::Hadamard => "H",
            GateKind::PauliX => "X",
            GateKind::PauliY => "Y",
            GateKind::PauliZ => "Z",
            GateKind::S => "S",
            GateKind::T => "T",
            GateKind::RotationX => "RX",
            GateKind::RotationY => "RY",
            GateKind::RotationZ => "RZ",
            GateKind::CNot => "CNOT",
            GateKind::CZ => "CZ",
            GateKind::Swap => "SWAP",
            GateKind::Toffoli => "TOFFOLI",
            GateKind::Measure => "MEASURE",
        }
    }

    /// Number of qubits this gate acts on
    pub const fn num_qubits(&self) -> usize {
        match self {
            GateKind::CNot | GateKind::CZ | GateKind::Swap => 2,
            GateKind::Toffoli => 3,
            _ => 1,
        }
    }

    /// Whether the gate takes a rotation angle
    pub const fn is_parameterized(&self) -> bool {
        matches!(
            self,
            GateKind::RotationX | GateKind::RotationY | GateKind::RotationZ
        )
    }

    /// Whether this gate is a unitary operation
    ///
    /// Only the measurement marker is not.
    pub const fn is_unitary(&self) -> bool {
        !matches!(self, GateKind::Measure)
    }

    /// Whether the gate is its own inverse
    pub const fn is_hermitian(&self) -> bool {
        matches!(
            self,
            GateKind::Identity
                | GateKind::Hadamard
                | GateKind::PauliX
                | GateKind::PauliY
                | GateKind::PauliZ
                | GateKind::CNot
                | GateKind::CZ
                | GateKind::Swap
                | GateKind::Toffoli
        )
    }

    /// Whether the gate is diagonal in the computational basis
    pub const fn is_diagonal(&self) -> bool {
        matches!(
            self,
            GateKind::Identity
                | GateKind::PauliZ
                | GateKind::S
                | GateKind::T
                | GateKind::RotationZ
                | GateKind::CZ
        )
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateKind {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.trim().to_ascii_uppercase().as_str() {
            "I" | "ID" => GateKind::Identity,
            "H" => GateKind::Hadamard,
            "X" => GateKind::PauliX,
            "Y" => GateKind::PauliY,
            "Z" => GateKind::PauliZ,
            "S" => GateKind::S,
            "T" => GateKind::T,
            "RX" => GateKind::RotationX,
            "RY" => GateKind::RotationY,
            "RZ" => GateKind::RotationZ,
            "CNOT" | "CX" => GateKind::CNot,
            "CZ" => GateKind::CZ,
            "SWAP" => GateKind::Swap,
            "TOFFOLI" | "CCX" | "CCNOT" => GateKind::Toffoli,
            "MEASURE" | "M" => GateKind::Measure,
            _ => return Err(QuantumError::unknown_gate(s)),
        };
        Ok(kind)
    }
}

impl TryFrom<String> for GateKind {
    type Error = QuantumError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<GateKind> for String {
    fn from(kind: GateKind) -> Self {
        kind.name().to_string()
    }
}

/// A gate as described by a request, before defaults are resolved
///
/// Field names on the wire follow the request format:
/// `{"type": "CNOT", "qubit": 1, "controlQubit": 0, "step": 2}`.
///
/// # Example
/// ```
/// use quanta_core::{GateKind, GateSpec};
///
/// let spec: GateSpec = serde_json::from_str(
///     r#"{"type": "RX", "qubit": 0, "parameter": 1.5, "step": 0}"#,
/// ).unwrap();
/// assert_eq!(spec.kind, GateKind::RotationX);
/// assert_eq!(spec.parameter, Some(1.5));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateSpec {
    /// Opaque client identifier, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub kind: GateKind,

    #[serde(rename = "qubit", alias = "targetQubit")]
    pub target_qubit: usize,

    /// Control qubit, or the second qubit of a SWAP
    #[serde(default)]
    pub control_qubit: Option<usize>,

    /// Second control of a TOFFOLI
    #[serde(default)]
    pub control_qubit2: Option<usize>,

    #[serde(default)]
    pub parameter: Option<f64>,

    /// Logical time-step; gates are executed in ascending step order
    #[serde(default)]
    pub step: i64,
}

impl GateSpec {
    /// Create a descriptor for `kind` on `target` at step 0
    pub fn new(kind: GateKind, target: usize) -> Self {
        Self {
            id: None,
            kind,
            target_qubit: target,
            control_qubit: None,
            control_qubit2: None,
            parameter: None,
            step: 0,
        }
    }

    /// Set the control (or SWAP partner) qubit
    pub fn with_control(mut self, control: usize) -> Self {
        self.control_qubit = Some(control);
        self
    }

    /// Set the second control qubit
    pub fn with_control2(mut self, control: usize) -> Self {
        self.control_qubit2 = Some(control);
        self
    }

    /// Set the rotation angle
    pub fn with_parameter(mut self, theta: f64) -> Self {
        self.parameter = Some(theta);
        self
    }

    /// Set the time-step
    pub fn at_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Resolve defaults and validate against a circuit of `num_qubits`
    ///
    /// - CNOT and CZ without a control use `max(0, target - 1)`
    /// - SWAP without a partner uses `max(0, target - 1)`
    /// - TOFFOLI controls default to qubits 0 and 1
    /// - Rotations without a parameter, or with a zero parameter, use
    ///   [`DEFAULT_ROTATION_ANGLE`]
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidQubit`] for an index outside the circuit,
    /// [`QuantumError::DuplicateQubit`] when the resolved qubits collide and
    /// [`QuantumError::InvalidParameter`] for a non-finite angle.
    pub fn resolve(&self, num_qubits: usize) -> Result<GateOp> {
        let target = self.target_qubit;
        let lower_neighbour = target.saturating_sub(1);

        // Every supplied index must be in range, used by the kind or not.
        for index in [Some(target), self.control_qubit, self.control_qubit2]
            .into_iter()
            .flatten()
        {
            if index >= num_qubits {
                return Err(QuantumError::invalid_qubit(index, num_qubits));
            }
        }

        let indices: SmallVec<[usize; 3]> = match self.kind {
            GateKind::CNot | GateKind::CZ => {
                smallvec![self.control_qubit.unwrap_or(lower_neighbour), target]
            }
            GateKind::Swap => smallvec![target, self.control_qubit.unwrap_or(lower_neighbour)],
            GateKind::Toffoli => smallvec![
                self.control_qubit.unwrap_or(0),
                self.control_qubit2.unwrap_or(1),
                target
            ],
            _ => smallvec![target],
        };

        for &index in &indices {
            if index >= num_qubits {
                return Err(QuantumError::invalid_qubit(index, num_qubits));
            }
        }

        let parameter = if self.kind.is_parameterized() {
            Some(resolve_angle(self.kind, self.parameter)?)
        } else {
            None
        };

        let qubits: SmallVec<[QubitId; 3]> = indices.into_iter().map(QubitId::new).collect();
        GateOp::new(self.kind, &qubits, parameter, self.step)
    }
}

// A zero angle falls back to the default as well; clients rely on this.
fn resolve_angle(kind: GateKind, parameter: Option<f64>) -> Result<f64> {
    match parameter {
        Some(theta) if !theta.is_finite() => Err(QuantumError::InvalidParameter {
            gate: kind.name().to_string(),
            value: theta,
        }),
        Some(theta) if theta != 0.0 => Ok(theta),
        _ => Ok(DEFAULT_ROTATION_ANGLE),
    }
}

/// A gate operation with all qubits resolved
///
/// Qubits are stored controls first, target last:
/// - single-qubit gates and MEASURE: `[target]`
/// - CNOT, CZ: `[control, target]`
/// - SWAP: `[target, partner]`
/// - TOFFOLI: `[control1, control2, target]`
#[derive(Clone, PartialEq)]
pub struct GateOp {
    kind: GateKind,
    qubits: SmallVec<[QubitId; 3]>,
    parameter: Option<f64>,
    step: i64,
}

impl GateOp {
    /// Create a new gate operation
    ///
    /// # Errors
    /// Returns error if:
    /// - Qubit count doesn't match gate requirements
    /// - Duplicate qubits specified
    pub fn new(
        kind: GateKind,
        qubits: &[QubitId],
        parameter: Option<f64>,
        step: i64,
    ) -> Result<Self> {
        if qubits.len() != kind.num_qubits() {
            return Err(QuantumError::invalid_qubit_count(
                kind.name(),
                kind.num_qubits(),
                qubits.len(),
            ));
        }

        for i in 0..qubits.len() {
            for j in (i + 1)..qubits.len() {
                if qubits[i] == qubits[j] {
                    return Err(QuantumError::DuplicateQubit(qubits[i]));
                }
            }
        }

        Ok(Self {
            kind,
            qubits: SmallVec::from_slice(qubits),
            parameter,
            step,
        })
    }

    #[inline]
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Get the qubits this operation acts on
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// The qubit the gate acts on (last entry of [`GateOp::qubits`])
    #[inline]
    pub fn target(&self) -> QubitId {
        self.qubits[self.qubits.len() - 1]
    }

    /// Resolved rotation angle, `None` for fixed gates
    #[inline]
    pub fn parameter(&self) -> Option<f64> {
        self.parameter
    }

    #[inline]
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.name())?;
        if let Some(theta) = self.parameter {
            write!(f, "[{:.4}]", theta)?;
        }
        write!(f, "(")?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
