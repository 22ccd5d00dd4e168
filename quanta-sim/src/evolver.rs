//! Statevector evolution
//!
//! Applies a circuit's operations in order to a fresh |0...0⟩ state, either
//! straight through or recording a snapshot at every step boundary. Each
//! operation goes through [`GateAction`] to the matching in-place kernel; no
//! full unitary is ever built.

use crate::error::Result;
use crate::result::StateSnapshot;
use quanta_core::{Circuit, GateOp};
use quanta_gates::GateAction;
use quanta_state::StateVector;
use tracing::{debug, warn};

/// Norm drift beyond which a warning is logged
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Apply one resolved action to `state`
pub fn apply_action(state: &mut StateVector, action: &GateAction) -> Result<()> {
    match *action {
        GateAction::Single { target, ref matrix } => state.apply_single_qubit(matrix, target)?,
        GateAction::Diagonal { target, diagonal } => state.apply_diagonal(diagonal, target)?,
        GateAction::Controlled {
            control,
            target,
            ref matrix,
        } => state.apply_controlled(matrix, control, target)?,
        GateAction::ControlledPhase {
            control,
            target,
            phase,
        } => state.apply_controlled_phase(phase, control, target)?,
        GateAction::Swap { first, second } => state.apply_swap(first, second)?,
        GateAction::MultiControlled {
            controls,
            target,
            ref matrix,
        } => state.apply_doubly_controlled(matrix, controls, target)?,
        // Deferred measurement: the sampler reads the marker, the state is untouched.
        GateAction::Measure { qubit } => state.check_qubit(qubit)?,
    }
    Ok(())
}

/// Apply operations in order, returning how many were applied
pub fn apply_operations<'a, I>(state: &mut StateVector, operations: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a GateOp>,
{
    let mut applied = 0;
    for op in operations {
        apply_action(state, &GateAction::from_op(op))?;
        applied += 1;
    }
    Ok(applied)
}

/// Evolve |0...0⟩ through the whole circuit
pub fn evolve(circuit: &Circuit) -> Result<StateVector> {
    let mut state = StateVector::new(circuit.num_qubits())?;
    apply_operations(&mut state, circuit.operations())?;
    check_norm(&state);
    Ok(state)
}

/// Evolve |0...0⟩ step by step
///
/// Returns the initial snapshot followed by one snapshot per distinct step.
/// Each step's operations are applied onto the previous snapshot's state, so
/// the last entry equals [`evolve`] on the same circuit.
pub fn evolve_with_history(circuit: &Circuit) -> Result<Vec<StateSnapshot>> {
    let mut state = StateVector::new(circuit.num_qubits())?;
    let layers = circuit.layers();

    let mut history = Vec::with_capacity(layers.len() + 1);
    history.push(StateSnapshot::capture(None, &state));

    for layer in layers {
        let applied = apply_operations(&mut state, layer.operations)?;
        debug!(step = layer.step, operations = applied, "applied step");
        history.push(StateSnapshot::capture(Some(layer.step), &state));
    }

    check_norm(&state);
    Ok(history)
}

fn check_norm(state: &StateVector) {
    let drift = (state.norm() - 1.0).abs();
    if drift > NORM_TOLERANCE {
        warn!(drift, num_qubits = state.num_qubits(), "statevector norm drifted");
    }
}
