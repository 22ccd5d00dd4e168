//! End-to-end behaviour of the three simulator entry points

use approx::assert_relative_eq;
use quanta_core::{GateKind, GateSpec, QuantumError};
use quanta_sim::{ErrorKind, Simulator, SimulatorConfig, SimulatorError};

const EPS: f64 = 1e-9;

fn simulator() -> Simulator {
    Simulator::new(SimulatorConfig::default().with_seed(2024)).unwrap()
}

fn bell() -> Vec<GateSpec> {
    vec![
        GateSpec::new(GateKind::Hadamard, 0),
        GateSpec::new(GateKind::CNot, 1).with_control(0).at_step(1),
    ]
}

fn mixed_circuit() -> Vec<GateSpec> {
    vec![
        GateSpec::new(GateKind::Hadamard, 0),
        GateSpec::new(GateKind::RotationX, 1).with_parameter(0.3),
        GateSpec::new(GateKind::Toffoli, 2).at_step(1),
        GateSpec::new(GateKind::T, 2).at_step(2),
        GateSpec::new(GateKind::RotationZ, 0).at_step(2),
        GateSpec::new(GateKind::CZ, 2).at_step(3),
        GateSpec::new(GateKind::Swap, 2).with_control(0).at_step(4),
        GateSpec::new(GateKind::PauliY, 1).at_step(5),
        GateSpec::new(GateKind::S, 1).at_step(5),
    ]
}

#[test]
fn test_probabilities_sum_to_one() {
    let sim = simulator();
    let gates = mixed_circuit();

    let sv = sim.get_statevector(3, &gates).unwrap();
    assert_relative_eq!(sv.total_probability(), 1.0, epsilon = EPS);

    let run = sim.simulate(3, &gates, 100).unwrap();
    assert_relative_eq!(run.total_probability(), 1.0, epsilon = EPS);
}

#[test]
fn test_hadamard_twice_is_identity() {
    let gates = vec![
        GateSpec::new(GateKind::Hadamard, 0),
        GateSpec::new(GateKind::Hadamard, 0).at_step(1),
    ];
    let result = simulator().get_statevector(1, &gates).unwrap();
    assert_relative_eq!(result.probabilities[0], 1.0, epsilon = EPS);
    assert_relative_eq!(result.probabilities[1], 0.0, epsilon = EPS);
}

#[test]
fn test_x_flips_qubit() {
    let result = simulator()
        .get_statevector(1, &[GateSpec::new(GateKind::PauliX, 0)])
        .unwrap();
    assert_eq!(result.probabilities, vec![0.0, 1.0]);
}

#[test]
fn test_bell_state_is_entangled() {
    let sim = simulator();
    let sv = sim.get_statevector(2, &bell()).unwrap();

    let nonzero: Vec<usize> = sv
        .probabilities
        .iter()
        .enumerate()
        .filter(|(_, p)| **p > EPS)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(nonzero, vec![0b00, 0b11]);
    assert_relative_eq!(sv.probabilities[0b00], 0.5, epsilon = EPS);
    assert_relative_eq!(sv.probabilities[0b11], 0.5, epsilon = EPS);

    let run = sim.simulate(2, &bell(), 10_000).unwrap();
    assert_eq!(run.measurements.get("01"), 0);
    assert_eq!(run.measurements.get("10"), 0);
}

#[test]
fn test_bell_sampling_converges() {
    let run = simulator().simulate(2, &bell(), 10_000).unwrap();
    let p00 = run.measurements.probability("00");
    let p11 = run.measurements.probability("11");

    assert!((p00 - 0.5).abs() < 0.05, "p(00) = {}", p00);
    assert!((p11 - 0.5).abs() < 0.05, "p(11) = {}", p11);
    assert_eq!(run.measurements.get("00") + run.measurements.get("11"), 10_000);
}

#[test]
fn test_qubit_count_boundary() {
    let sim = Simulator::new(SimulatorConfig::default().with_max_qubits(4)).unwrap();
    assert!(sim.get_statevector(4, &[GateSpec::new(GateKind::Hadamard, 3)]).is_ok());

    let err = sim.get_statevector(5, &[]).unwrap_err();
    assert_eq!(
        err,
        SimulatorError::Circuit(QuantumError::TooManyQubits {
            num_qubits: 5,
            max_qubits: 4
        })
    );
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
}

#[test]
fn test_huge_width_rejected_without_allocating() {
    // 2^64 amplitudes cannot be allocated; reaching the allocator would abort.
    let sim = simulator();
    for entry in 0..3 {
        let err = match entry {
            0 => sim.get_statevector(64, &[]).map(|_| ()),
            1 => sim.simulate(64, &[], 10).map(|_| ()),
            _ => sim.simulate_steps(64, &[]).map(|_| ()),
        }
        .unwrap_err();
        assert!(matches!(
            err,
            SimulatorError::Circuit(QuantumError::TooManyQubits { num_qubits: 64, .. })
        ));
    }
}

#[test]
fn test_step_history_length_and_final_state() {
    let sim = simulator();
    let gates = mixed_circuit();

    let history = sim.simulate_steps(3, &gates).unwrap();
    // steps 0..=5 are all present
    assert_eq!(history.len(), 6 + 1);
    assert_eq!(history.history[0].step, None);
    assert_eq!(history.history[0].probabilities[0], 1.0);

    let expected = sim.get_statevector(3, &gates).unwrap();
    let last = history.final_state().unwrap();
    assert_eq!(last.step, Some(5));
    for (a, b) in last.probabilities.iter().zip(&expected.probabilities) {
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }
}

#[test]
fn test_history_steps_need_not_be_contiguous() {
    let gates = vec![
        GateSpec::new(GateKind::PauliX, 0).at_step(10),
        GateSpec::new(GateKind::Hadamard, 1).at_step(-3),
        GateSpec::new(GateKind::PauliZ, 1).at_step(10),
    ];
    let history = simulator().simulate_steps(2, &gates).unwrap();
    let steps: Vec<Option<i64>> = history.history.iter().map(|s| s.step).collect();
    assert_eq!(steps, vec![None, Some(-3), Some(10)]);
}

#[test]
fn test_zero_shots_gives_empty_counts() {
    let run = simulator().simulate(2, &bell(), 0).unwrap();
    assert!(run.measurements.is_empty());
    assert_eq!(run.total_shots(), 0);
    assert_relative_eq!(run.probabilities[0], 0.5, epsilon = EPS);
}

#[test]
fn test_gate_order_is_by_step_then_input() {
    // H and Z share step 1 and keep their input order after the step-0 X.
    let xh = vec![
        GateSpec::new(GateKind::Hadamard, 0).at_step(1),
        GateSpec::new(GateKind::PauliX, 0).at_step(0),
        GateSpec::new(GateKind::PauliZ, 0).at_step(1),
    ];
    let result = simulator().get_statevector(1, &xh).unwrap();
    // X|0⟩ = |1⟩, H|1⟩ = |−⟩, Z|−⟩ = |+⟩
    let h = std::f64::consts::FRAC_1_SQRT_2;
    assert_relative_eq!(result.statevector[0].re, h, epsilon = EPS);
    assert_relative_eq!(result.statevector[1].re, h, epsilon = EPS);
}

#[test]
fn test_default_partners() {
    let sim = simulator();

    // CNOT on q1 without control uses q0
    let gates = vec![
        GateSpec::new(GateKind::PauliX, 0),
        GateSpec::new(GateKind::CNot, 1).at_step(1),
    ];
    let result = sim.get_statevector(2, &gates).unwrap();
    assert_relative_eq!(result.probabilities[0b11], 1.0, epsilon = EPS);

    // SWAP on q2 without partner exchanges with q1
    let gates = vec![
        GateSpec::new(GateKind::PauliX, 1),
        GateSpec::new(GateKind::Swap, 2).at_step(1),
    ];
    let result = sim.get_statevector(3, &gates).unwrap();
    assert_relative_eq!(result.probabilities[0b100], 1.0, epsilon = EPS);

    // TOFFOLI defaults its controls to q0 and q1
    let gates = vec![
        GateSpec::new(GateKind::PauliX, 0),
        GateSpec::new(GateKind::PauliX, 1),
        GateSpec::new(GateKind::Toffoli, 2).at_step(1),
    ];
    let result = sim.get_statevector(3, &gates).unwrap();
    assert_relative_eq!(result.probabilities[0b111], 1.0, epsilon = EPS);
}

#[test]
fn test_cnot_on_qubit_zero_without_control_is_rejected() {
    let err = simulator()
        .get_statevector(2, &[GateSpec::new(GateKind::CNot, 0)])
        .unwrap_err();
    assert!(matches!(
        err,
        SimulatorError::Circuit(QuantumError::DuplicateQubit(_))
    ));
}

#[test]
fn test_default_rotation_angle() {
    let sim = simulator();
    let omitted = sim
        .get_statevector(1, &[GateSpec::new(GateKind::RotationY, 0)])
        .unwrap();
    let explicit = sim
        .get_statevector(
            1,
            &[GateSpec::new(GateKind::RotationY, 0).with_parameter(std::f64::consts::FRAC_PI_4)],
        )
        .unwrap();
    let zero = sim
        .get_statevector(1, &[GateSpec::new(GateKind::RotationY, 0).with_parameter(0.0)])
        .unwrap();

    assert_eq!(omitted.statevector, explicit.statevector);
    assert_eq!(zero.statevector, explicit.statevector);
}

#[test]
fn test_out_of_range_qubit_rejected() {
    let err = simulator()
        .simulate(2, &[GateSpec::new(GateKind::Hadamard, 2)], 10)
        .unwrap_err();
    assert_eq!(err, SimulatorError::Circuit(QuantumError::InvalidQubit(2, 2)));
    assert!(err.is_client_error());
}

#[test]
fn test_unused_control_out_of_range_rejected() {
    let gates = [GateSpec::new(GateKind::PauliX, 0).with_control(99)];
    let err = simulator().get_statevector(1, &gates).unwrap_err();
    assert_eq!(err, SimulatorError::Circuit(QuantumError::InvalidQubit(99, 1)));

    let gates = [GateSpec::new(GateKind::Swap, 1).with_control(0).with_control2(7)];
    let err = simulator().simulate_steps(2, &gates).unwrap_err();
    assert_eq!(err, SimulatorError::Circuit(QuantumError::InvalidQubit(7, 2)));
}

#[test]
fn test_unknown_gate_type_rejected_at_parse() {
    let json = r#"{"numQubits": 1, "gates": [{"type": "FOO", "qubit": 0}]}"#;
    let err = quanta_core::CircuitSpec::from_json(json).unwrap_err();
    assert!(err.to_string().contains("Unknown gate type 'FOO'"));
}

#[test]
fn test_measure_does_not_collapse() {
    let mut gates = bell();
    gates.push(GateSpec::new(GateKind::Measure, 0).at_step(2));
    gates.push(GateSpec::new(GateKind::Measure, 1).at_step(2));

    let run = simulator().simulate(2, &gates, 1000).unwrap();
    assert_relative_eq!(run.probabilities[0b00], 0.5, epsilon = EPS);
    assert_relative_eq!(run.probabilities[0b11], 0.5, epsilon = EPS);

    let register = run.register_counts.unwrap();
    assert_eq!(register, run.measurements);
}

#[test]
fn test_result_json_shape() {
    let run = simulator().simulate(1, &[GateSpec::new(GateKind::PauliX, 0)], 3).unwrap();
    let json = quanta_sim::result::to_json_pretty(&run).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["numQubits"], 1);
    assert!(value.get("num_qubits").is_none());
    assert_eq!(value["statevector"][1]["real"], 1.0);
    assert_eq!(value["measurements"]["1"], 3);
    assert!(value.get("registerCounts").is_none());
}

#[test]
fn test_result_json_uses_camel_case() {
    let gates = [
        GateSpec::new(GateKind::Hadamard, 0),
        GateSpec::new(GateKind::Measure, 0).at_step(1),
    ];
    let config = SimulatorConfig::default().with_seed(3).with_statistics(true);
    let sim = Simulator::new(config).unwrap();
    let run = sim.simulate(1, &gates, 4).unwrap();
    let value = serde_json::to_value(&run).unwrap();

    assert!(!value["registerCounts"].as_object().unwrap().is_empty());
    assert!(value.get("register_counts").is_none());
    assert!(value["statistics"].get("operationsApplied").is_some());
    assert!(value["statistics"].get("operations_applied").is_none());

    let steps = sim.simulate_steps(1, &gates).unwrap();
    let value = serde_json::to_value(&steps).unwrap();
    assert_eq!(value["numQubits"], 1);
    assert_eq!(value["history"].as_array().unwrap().len(), 3);
}
