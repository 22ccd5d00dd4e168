//! Circuit container and the circuit builder
//!
//! A [`Circuit`] is built from an unordered list of [`GateSpec`] descriptors.
//! Building checks the width against the configured limit before anything
//! else, orders the gates by step with a stable sort, and resolves every
//! descriptor into a validated [`GateOp`].

use crate::{GateOp, GateSpec, QuantumError, QubitId, Result};
use tracing::debug;

/// A validated quantum circuit
///
/// Operations are always held in execution order: ascending step, with gates
/// of the same step kept in their input order.
///
/// # Example
/// ```
/// use quanta_core::{Circuit, GateKind, GateSpec};
///
/// let circuit = Circuit::from_specs(
///     2,
///     16,
///     &[
///         GateSpec::new(GateKind::Hadamard, 0),
///         GateSpec::new(GateKind::CNot, 1).with_control(0).at_step(1),
///     ],
/// )
/// .unwrap();
/// assert_eq!(circuit.num_qubits(), 2);
/// assert_eq!(circuit.len(), 2);
/// assert_eq!(circuit.depth(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOp>,
}

/// Gates sharing one time-step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepLayer<'a> {
    pub step: i64,
    pub operations: &'a [GateOp],
}

impl Circuit {
    /// Create an empty circuit of `num_qubits` qubits
    ///
    /// # Errors
    /// Returns [`QuantumError::EmptyCircuit`] for zero qubits and
    /// [`QuantumError::TooManyQubits`] when `num_qubits > max_qubits`.
    pub fn new(num_qubits: usize, max_qubits: usize) -> Result<Self> {
        Self::check_width(num_qubits, max_qubits)?;
        Ok(Self {
            num_qubits,
            operations: Vec::new(),
        })
    }

    /// Check a circuit width against the configured limit
    pub fn check_width(num_qubits: usize, max_qubits: usize) -> Result<()> {
        if num_qubits == 0 {
            return Err(QuantumError::EmptyCircuit);
        }
        if num_qubits > max_qubits {
            return Err(QuantumError::TooManyQubits {
                num_qubits,
                max_qubits,
            });
        }
        Ok(())
    }

    /// Build a circuit from gate descriptors in arbitrary order
    ///
    /// No gate is dropped and none is added. Gates are ordered by ascending
    /// step; gates sharing a step keep their relative input order.
    ///
    /// # Errors
    /// Returns the first width, qubit-index or parameter error encountered.
    pub fn from_specs(num_qubits: usize, max_qubits: usize, specs: &[GateSpec]) -> Result<Self> {
        let mut circuit = Self::new(num_qubits, max_qubits)?;
        circuit.operations.reserve(specs.len());

        let mut ordered: Vec<&GateSpec> = specs.iter().collect();
        ordered.sort_by_key(|spec| spec.step);

        for spec in ordered {
            circuit.operations.push(spec.resolve(num_qubits)?);
        }

        debug!(
            num_qubits,
            operations = circuit.operations.len(),
            steps = circuit.depth(),
            "circuit built"
        );

        Ok(circuit)
    }

    /// Get the number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of operations in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the circuit is empty (no operations)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Append an operation
    ///
    /// The operation's step must not precede the last step already present.
    ///
    /// # Errors
    /// Returns error if any qubit index is out of bounds or the step would
    /// break execution order.
    pub fn add_operation(&mut self, op: GateOp) -> Result<()> {
        for &qubit in op.qubits() {
            if qubit.index() >= self.num_qubits {
                return Err(QuantumError::invalid_qubit(qubit.index(), self.num_qubits));
            }
        }

        if let Some(last) = self.operations.last() {
            if op.step() < last.step() {
                return Err(QuantumError::ValidationError(format!(
                    "step {} added after step {}",
                    op.step(),
                    last.step()
                )));
            }
        }

        self.operations.push(op);
        Ok(())
    }

    /// Get an iterator over the operations in execution order
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.operations.iter()
    }

    /// Get a specific operation by index
    pub fn get_operation(&self, index: usize) -> Option<&GateOp> {
        self.operations.get(index)
    }

    /// Group operations into one layer per distinct step
    pub fn layers(&self) -> Vec<StepLayer<'_>> {
        let mut layers = Vec::new();
        let mut start = 0;

        while start < self.operations.len() {
            let step = self.operations[start].step();
            let end = self.operations[start..]
                .iter()
                .position(|op| op.step() != step)
                .map_or(self.operations.len(), |offset| start + offset);

            layers.push(StepLayer {
                step,
                operations: &self.operations[start..end],
            });
            start = end;
        }

        layers
    }

    /// Number of distinct time-steps
    pub fn depth(&self) -> usize {
        self.layers().len()
    }

    /// Qubits carrying at least one measurement marker, ascending
    pub fn measured_qubits(&self) -> Vec<QubitId> {
        let mut qubits: Vec<QubitId> = self
            .operations
            .iter()
            .filter(|op| !op.kind().is_unitary())
            .map(|op| op.target())
            .collect();
        qubits.sort();
        qubits.dedup();
        qubits
    }

    /// Validate the circuit
    ///
    /// Checks that every operation addresses qubits inside the circuit and
    /// that steps never decrease.
    pub fn validate(&self) -> Result<()> {
        for (i, op) in self.operations.iter().enumerate() {
            for &qubit in op.qubits() {
                if qubit.index() >= self.num_qubits {
                    return Err(QuantumError::ValidationError(format!(
                        "Operation {} uses invalid qubit {}",
                        i, qubit
                    )));
                }
            }
        }

        if self
            .operations
            .windows(2)
            .any(|pair| pair[1].step() < pair[0].step())
        {
            return Err(QuantumError::ValidationError(
                "operations are not in step order".to_string(),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} operations)",
            self.num_qubits,
            self.len()
        )?;
        for layer in self.layers() {
            write!(f, "  step {}:", layer.step)?;
            for op in layer.operations {
                write!(f, " {}", op)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
