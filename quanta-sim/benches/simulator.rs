use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quanta_core::{GateKind, GateSpec};
use quanta_sim::{Simulator, SimulatorConfig};

// Layers of RX rotations followed by a CNOT ladder
fn layered_circuit(num_qubits: usize, depth: usize) -> Vec<GateSpec> {
    let mut gates = Vec::with_capacity(num_qubits * depth * 2);
    let mut step = 0;

    for d in 0..depth {
        for q in 0..num_qubits {
            gates.push(
                GateSpec::new(GateKind::RotationX, q)
                    .with_parameter(0.1 * (d * num_qubits + q + 1) as f64)
                    .at_step(step),
            );
        }
        step += 1;

        for q in 1..num_qubits {
            gates.push(GateSpec::new(GateKind::CNot, q).with_control(q - 1).at_step(step));
            step += 1;
        }
    }

    gates
}

fn bench_statevector(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_statevector");
    let simulator = Simulator::new(SimulatorConfig::default()).unwrap();

    for num_qubits in [4usize, 8, 12, 16] {
        let gates = layered_circuit(num_qubits, 4);
        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), &gates, |b, gates| {
            b.iter(|| simulator.get_statevector(black_box(num_qubits), black_box(gates)).unwrap());
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    let simulator = Simulator::new(SimulatorConfig::default().with_seed(1)).unwrap();
    let gates = layered_circuit(10, 2);

    for shots in [1024usize, 10_000] {
        group.bench_with_input(BenchmarkId::new("shots", shots), &shots, |b, &shots| {
            b.iter(|| simulator.simulate(10, black_box(&gates), shots).unwrap());
        });
    }

    group.finish();
}

fn bench_step_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_steps");
    let simulator = Simulator::new(SimulatorConfig::default()).unwrap();

    for num_qubits in [4usize, 8] {
        let gates = layered_circuit(num_qubits, 3);
        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), &gates, |b, gates| {
            b.iter(|| simulator.simulate_steps(black_box(num_qubits), black_box(gates)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_statevector, bench_sampling, bench_step_history);
criterion_main!(benches);
