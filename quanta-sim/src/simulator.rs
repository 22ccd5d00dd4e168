//! The simulator service
//!
//! [`Simulator`] holds only its configuration. Every call builds its own
//! circuit and statevector and drops them on return, so one simulator can be
//! shared freely between threads.

use quanta_core::{Circuit, CircuitSpec, GateSpec};
use quanta_state::{Sampler, StateVector};
use std::time::{Duration, Instant};
use tracing::info;

use crate::{
    config::SimulatorConfig,
    error::{Result, SimulatorError},
    evolver,
    result::{MeasurementCounts, SimulationResult, StatevectorResult, StepHistory},
    statistics::ExecutionStatistics,
};

/// Exact statevector simulator
///
/// # Example
///
/// ```
/// use quanta_core::{GateKind, GateSpec};
/// use quanta_sim::{Simulator, SimulatorConfig};
///
/// let simulator = Simulator::new(SimulatorConfig::default().with_seed(7)).unwrap();
/// let gates = vec![
///     GateSpec::new(GateKind::Hadamard, 0),
///     GateSpec::new(GateKind::CNot, 1).with_control(0).at_step(1),
/// ];
///
/// let result = simulator.simulate(2, &gates, 1000).unwrap();
/// assert_eq!(result.measurements.get("00") + result.measurements.get("11"), 1000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator with the given configuration
    ///
    /// # Errors
    /// [`SimulatorError::InvalidConfig`] if the configuration does not validate.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Order and validate a gate list against this simulator's width limit
    pub fn build_circuit(&self, num_qubits: usize, gates: &[GateSpec]) -> Result<Circuit> {
        Ok(Circuit::from_specs(num_qubits, self.config.max_qubits, gates)?)
    }

    /// Final statevector and probabilities of a circuit
    ///
    /// # Errors
    /// Width outside `1..=max_qubits` is rejected before the statevector is
    /// allocated; out-of-range qubits, unknown gates and bad angles fail
    /// while building the circuit.
    pub fn get_statevector(
        &self,
        num_qubits: usize,
        gates: &[GateSpec],
    ) -> Result<StatevectorResult> {
        let total_start = Instant::now();
        let mut stats = self.stats_for(num_qubits);

        let (circuit, build_time) = self.timed_build(num_qubits, gates)?;

        let gate_start = Instant::now();
        let state = evolver::evolve(&circuit)?;
        let gate_time = gate_start.elapsed();

        if let Some(ref mut s) = stats {
            s.build_time = build_time;
            s.gate_application_time = gate_time;
            s.operations_applied = circuit.len();
            s.steps = circuit.depth();
            s.total_time = total_start.elapsed();
        }

        info!(
            num_qubits,
            gates = circuit.len(),
            elapsed_us = total_start.elapsed().as_micros() as u64,
            "statevector computed"
        );

        Ok(StatevectorResult::new(state).with_statistics(stats))
    }

    /// Final state plus `shots` sampled measurement outcomes
    ///
    /// Zero shots give empty counts. When the circuit carries MEASURE
    /// markers, the register counts fold the same shots onto the marked
    /// qubits.
    pub fn simulate(
        &self,
        num_qubits: usize,
        gates: &[GateSpec],
        shots: usize,
    ) -> Result<SimulationResult> {
        let total_start = Instant::now();
        let mut stats = self.stats_for(num_qubits);

        let (circuit, build_time) = self.timed_build(num_qubits, gates)?;

        let gate_start = Instant::now();
        let state = evolver::evolve(&circuit)?;
        let gate_time = gate_start.elapsed();

        let sampling_start = Instant::now();
        let (measurements, register_counts) = self.sample(&circuit, &state, shots)?;
        let sampling_time = sampling_start.elapsed();

        if let Some(ref mut s) = stats {
            s.build_time = build_time;
            s.gate_application_time = gate_time;
            s.sampling_time = sampling_time;
            s.operations_applied = circuit.len();
            s.steps = circuit.depth();
            s.total_time = total_start.elapsed();
        }

        info!(
            num_qubits,
            gates = circuit.len(),
            shots,
            outcomes = measurements.num_outcomes(),
            elapsed_us = total_start.elapsed().as_micros() as u64,
            "simulation complete"
        );

        let probabilities = state.probabilities();
        Ok(SimulationResult {
            num_qubits,
            statevector: state.into_amplitudes(),
            probabilities,
            measurements,
            register_counts,
            statistics: stats,
        })
    }

    /// [`Simulator::simulate`] with the configured default shot count
    pub fn simulate_default(
        &self,
        num_qubits: usize,
        gates: &[GateSpec],
    ) -> Result<SimulationResult> {
        self.simulate(num_qubits, gates, self.config.default_shots)
    }

    /// Snapshot of the state before any gate and after every distinct step
    ///
    /// The history has one entry more than the circuit has distinct steps and
    /// its last entry equals [`Simulator::get_statevector`] for the same gates.
    pub fn simulate_steps(&self, num_qubits: usize, gates: &[GateSpec]) -> Result<StepHistory> {
        let total_start = Instant::now();
        let mut stats = self.stats_for(num_qubits);

        let (circuit, build_time) = self.timed_build(num_qubits, gates)?;

        let gate_start = Instant::now();
        let history = evolver::evolve_with_history(&circuit)?;
        let gate_time = gate_start.elapsed();

        if let Some(ref mut s) = stats {
            s.build_time = build_time;
            s.gate_application_time = gate_time;
            s.operations_applied = circuit.len();
            s.steps = history.len() - 1;
            s.total_time = total_start.elapsed();
        }

        info!(
            num_qubits,
            gates = circuit.len(),
            snapshots = history.len(),
            elapsed_us = total_start.elapsed().as_micros() as u64,
            "step history complete"
        );

        Ok(StepHistory {
            num_qubits,
            history,
            statistics: stats,
        })
    }

    /// [`Simulator::get_statevector`] for a parsed circuit document
    pub fn run_statevector(&self, spec: &CircuitSpec) -> Result<StatevectorResult> {
        self.get_statevector(spec.num_qubits, &spec.gates)
    }

    /// [`Simulator::simulate`] for a parsed circuit document
    pub fn run_simulation(&self, spec: &CircuitSpec, shots: usize) -> Result<SimulationResult> {
        self.simulate(spec.num_qubits, &spec.gates, shots)
    }

    /// [`Simulator::simulate_steps`] for a parsed circuit document
    pub fn run_steps(&self, spec: &CircuitSpec) -> Result<StepHistory> {
        self.simulate_steps(spec.num_qubits, &spec.gates)
    }

    fn timed_build(&self, num_qubits: usize, gates: &[GateSpec]) -> Result<(Circuit, Duration)> {
        let start = Instant::now();
        let circuit = self.build_circuit(num_qubits, gates)?;
        Ok((circuit, start.elapsed()))
    }

    fn stats_for(&self, num_qubits: usize) -> Option<ExecutionStatistics> {
        if !self.config.collect_statistics {
            return None;
        }
        let mut stats = ExecutionStatistics::new();
        if num_qubits <= self.config.max_qubits {
            stats.peak_memory_bytes = StateVector::bytes_for(num_qubits);
        }
        Some(stats)
    }

    fn sample(
        &self,
        circuit: &Circuit,
        state: &StateVector,
        shots: usize,
    ) -> Result<(MeasurementCounts, Option<MeasurementCounts>)> {
        let num_qubits = circuit.num_qubits();
        let sampling = Sampler::new(self.config.seed)
            .sample(&state.probabilities(), shots)
            .map_err(|e| SimulatorError::MeasurementFailed(e.to_string()))?;

        let mut measurements = MeasurementCounts::new(shots);
        for (bitstring, count) in sampling.to_bitstring_counts(num_qubits) {
            measurements.add(bitstring, count);
        }

        let measured: Vec<usize> = circuit
            .measured_qubits()
            .iter()
            .map(|q| q.index())
            .collect();
        let register_counts = if measured.is_empty() {
            None
        } else {
            let mut register = MeasurementCounts::new(shots);
            for (bitstring, count) in sampling.to_register_counts(num_qubits, &measured) {
                register.add(bitstring, count);
            }
            Some(register)
        };

        Ok((measurements, register_counts))
    }
}
