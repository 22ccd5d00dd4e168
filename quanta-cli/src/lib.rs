//! QUANTA command-line interface
//!
//! Reads a circuit document, runs one of the simulator entry points and
//! prints the result bundle as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Final statevector of a circuit
//! quanta statevector bell.json
//!
//! # Sample 10000 shots with a fixed seed, circuit on stdin
//! cat bell.json | quanta --seed 7 simulate --shots 10000 -
//!
//! # Snapshot after every step
//! quanta steps bell.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quanta_core::CircuitSpec;
use quanta_sim::{result::to_json_pretty, Simulator, SimulatorConfig};
use std::io::Read;
use std::path::{Path, PathBuf};

/// QUANTA statevector simulator
#[derive(Parser, Debug)]
#[command(name = "quanta")]
#[command(author, version, about = "Exact statevector simulation of small quantum circuits")]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML configuration file; QUANTA_* environment variables override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Widest circuit to accept
    #[arg(long, global = true)]
    pub max_qubits: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Attach execution statistics to the output
    #[arg(long, global = true)]
    pub stats: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Circuit source shared by all commands
#[derive(Args, Debug)]
pub struct CircuitInput {
    /// Circuit JSON file, or `-` for stdin
    pub input: PathBuf,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the final statevector and probabilities
    Statevector(CircuitInput),

    /// Sample measurement outcomes from the final state
    Simulate {
        #[command(flatten)]
        circuit: CircuitInput,

        /// Number of shots; the configured default when omitted
        #[arg(long)]
        shots: Option<usize>,
    },

    /// Print a snapshot after every distinct step
    Steps(CircuitInput),
}

impl Cli {
    /// Effective configuration: defaults, file, environment, then flags
    pub fn simulator_config(&self) -> Result<SimulatorConfig> {
        let mut config = SimulatorConfig::load(self.config.as_deref())?;
        if let Some(max_qubits) = self.max_qubits {
            config.max_qubits = max_qubits;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.stats {
            config.collect_statistics = true;
        }
        Ok(config)
    }
}

/// Read a circuit document from a file or from stdin when the path is `-`
pub fn read_circuit(path: &Path) -> Result<CircuitSpec> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read circuit from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read circuit file {}", path.display()))?
    };
    parse_circuit(&content)
}

/// Parse a circuit document
pub fn parse_circuit(content: &str) -> Result<CircuitSpec> {
    Ok(CircuitSpec::from_json(content)?)
}

/// Run `command` on an already parsed circuit and return the JSON output
pub fn execute(simulator: &Simulator, command: &Commands, spec: &CircuitSpec) -> Result<String> {
    let json = match command {
        Commands::Statevector(_) => to_json_pretty(&simulator.run_statevector(spec)?)?,
        Commands::Simulate { shots, .. } => {
            let shots = shots.unwrap_or(simulator.config().default_shots);
            to_json_pretty(&simulator.run_simulation(spec, shots)?)?
        }
        Commands::Steps(_) => to_json_pretty(&simulator.run_steps(spec)?)?,
    };
    Ok(json)
}

impl Commands {
    pub fn input(&self) -> &Path {
        match self {
            Commands::Statevector(input) | Commands::Steps(input) => &input.input,
            Commands::Simulate { circuit, .. } => &circuit.input,
        }
    }
}

/// Full command run: configure, read, simulate
pub fn run(cli: &Cli) -> Result<String> {
    let simulator = Simulator::new(cli.simulator_config()?)?;
    let spec = read_circuit(cli.command.input())?;
    tracing::debug!(
        num_qubits = spec.num_qubits,
        gates = spec.gates.len(),
        "circuit loaded"
    );
    execute(&simulator, &cli.command, &spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BELL: &str = r#"{
        "numQubits": 2,
        "gates": [
            {"type": "CNOT", "qubit": 1, "controlQubit": 0, "step": 1},
            {"type": "H", "qubit": 0, "step": 0}
        ]
    }"#;

    fn simulator() -> Simulator {
        Simulator::new(SimulatorConfig::default().with_seed(5)).unwrap()
    }

    #[test]
    fn test_parse_simulate_args() {
        let cli = Cli::try_parse_from([
            "quanta", "--seed", "9", "simulate", "--shots", "10", "bell.json",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(9));
        match &cli.command {
            Commands::Simulate { shots, circuit } => {
                assert_eq!(*shots, Some(10));
                assert_eq!(circuit.input, PathBuf::from("bell.json"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["quanta", "steps", "-", "--max-qubits", "8"]).unwrap();
        assert_eq!(cli.max_qubits, Some(8));
        assert_eq!(cli.command.input(), Path::new("-"));
    }

    #[test]
    fn test_execute_simulate() {
        let spec = parse_circuit(BELL).unwrap();
        let command = Commands::Simulate {
            circuit: CircuitInput {
                input: PathBuf::from("-"),
            },
            shots: Some(100),
        };
        let json = execute(&simulator(), &command, &spec).unwrap();
        assert!(json.contains("\"measurements\""));
        assert!(!json.contains("\"01\""));
    }

    #[test]
    fn test_execute_steps() {
        let spec = parse_circuit(BELL).unwrap();
        let command = Commands::Steps(CircuitInput {
            input: PathBuf::from("-"),
        });
        let json = execute(&simulator(), &command, &spec).unwrap();
        assert!(json.contains("\"history\""));
    }

    #[test]
    fn test_unknown_gate_is_reported() {
        let err = parse_circuit(r#"{"numQubits": 1, "gates": [{"type": "U3", "qubit": 0}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("U3"));
    }
}
