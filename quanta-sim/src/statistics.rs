//! Execution statistics tracking

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Execution statistics for a simulation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatistics {
    /// Total execution time
    pub total_time: Duration,

    /// Time spent ordering and validating the gate list
    pub build_time: Duration,

    /// Time spent applying gates
    pub gate_application_time: Duration,

    /// Time spent drawing shots
    pub sampling_time: Duration,

    /// Number of operations applied, MEASURE markers included
    pub operations_applied: usize,

    /// Number of distinct time steps
    pub steps: usize,

    /// Peak statevector memory (`2^n × 16` bytes)
    pub peak_memory_bytes: usize,
}

impl ExecutionStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the gate execution rate (gates per second)
    pub fn gates_per_second(&self) -> f64 {
        let secs = self.gate_application_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.operations_applied as f64 / secs
        }
    }

    /// Get peak memory usage in MB
    pub fn peak_memory_mb(&self) -> f64 {
        self.peak_memory_bytes as f64 / 1_000_000.0
    }
}

impl std::fmt::Display for ExecutionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Execution Statistics:")?;
        writeln!(f, "  Total time: {:?}", self.total_time)?;
        writeln!(f, "    Build: {:?}", self.build_time)?;
        writeln!(f, "    Gate application: {:?}", self.gate_application_time)?;
        writeln!(f, "    Sampling: {:?}", self.sampling_time)?;
        writeln!(f, "  Operations: {} over {} steps", self.operations_applied, self.steps)?;
        writeln!(f, "    Execution rate: {:.0} gates/sec", self.gates_per_second())?;
        writeln!(f, "  Peak memory: {:.2} MB", self.peak_memory_mb())
    }
}
