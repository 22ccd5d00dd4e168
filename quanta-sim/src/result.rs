//! Simulation result types
//!
//! Amplitudes serialize as `{"real": .., "imag": ..}` objects and measurement
//! counts as a plain `{bitstring: count}` map.

use crate::error::{Result, SimulatorError};
use crate::statistics::ExecutionStatistics;
use num_complex::Complex64;
use quanta_state::StateVector;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Serde adapter for amplitude lists
pub mod amplitudes {
    use num_complex::Complex64;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Amplitude {
        real: f64,
        imag: f64,
    }

    pub fn serialize<S: Serializer>(
        values: &[Complex64],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|c| Amplitude {
            real: c.re,
            imag: c.im,
        }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Complex64>, D::Error> {
        let values = Vec::<Amplitude>::deserialize(deserializer)?;
        Ok(values
            .into_iter()
            .map(|a| Complex64::new(a.real, a.imag))
            .collect())
    }
}

/// Encode any result bundle as pretty JSON
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| SimulatorError::Serialization(e.to_string()))
}

/// Statevector and probabilities at one point of the evolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Step after which the snapshot was taken; `None` for the initial state
    pub step: Option<i64>,

    #[serde(with = "amplitudes")]
    pub statevector: Vec<Complex64>,

    pub probabilities: Vec<f64>,
}

impl StateSnapshot {
    pub fn capture(step: Option<i64>, state: &StateVector) -> Self {
        Self {
            step,
            statevector: state.amplitudes().to_vec(),
            probabilities: state.probabilities(),
        }
    }

    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

/// Result of [`crate::Simulator::get_statevector`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatevectorResult {
    pub num_qubits: usize,

    #[serde(with = "amplitudes")]
    pub statevector: Vec<Complex64>,

    pub probabilities: Vec<f64>,

    /// Execution statistics (if statistics collection was enabled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ExecutionStatistics>,
}

impl StatevectorResult {
    pub fn new(state: StateVector) -> Self {
        let probabilities = state.probabilities();
        Self {
            num_qubits: state.num_qubits(),
            statevector: state.into_amplitudes(),
            probabilities,
            statistics: None,
        }
    }

    pub fn with_statistics(mut self, stats: Option<ExecutionStatistics>) -> Self {
        self.statistics = stats;
        self
    }

    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

/// Result of [`crate::Simulator::simulate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub num_qubits: usize,

    /// Final statevector; sampling never collapses it
    #[serde(with = "amplitudes")]
    pub statevector: Vec<Complex64>,

    pub probabilities: Vec<f64>,

    /// Outcome counts over all qubits, summing to the number of shots
    pub measurements: MeasurementCounts,

    /// Counts of the classical register written by MEASURE markers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_counts: Option<MeasurementCounts>,

    /// Execution statistics (if statistics collection was enabled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ExecutionStatistics>,
}

impl SimulationResult {
    /// Get the total number of measurement shots
    pub fn total_shots(&self) -> usize {
        self.measurements.total_shots()
    }

    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

/// Result of [`crate::Simulator::simulate_steps`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepHistory {
    pub num_qubits: usize,

    /// Initial state followed by one snapshot per distinct step
    pub history: Vec<StateSnapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ExecutionStatistics>,
}

impl StepHistory {
    /// The snapshot after the last step
    pub fn final_state(&self) -> Option<&StateSnapshot> {
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// Measurement outcome counts
///
/// Maps bitstrings (measurement outcomes) to the number of times they were observed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, usize>", into = "BTreeMap<String, usize>")]
pub struct MeasurementCounts {
    /// Map from bitstring to count
    counts: HashMap<String, usize>,
    /// Total number of shots
    total_shots: usize,
}

impl MeasurementCounts {
    /// Create a new measurement counts object
    pub fn new(total_shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            total_shots,
        }
    }

    /// Create from a counts map
    pub fn from_counts(counts: HashMap<String, usize>) -> Self {
        let total_shots = counts.values().sum();
        Self {
            counts,
            total_shots,
        }
    }

    /// Add a measurement outcome
    pub fn add(&mut self, bitstring: String, count: usize) {
        *self.counts.entry(bitstring).or_insert(0) += count;
    }

    /// Get the count for a specific bitstring
    pub fn get(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Get the probability of a specific bitstring
    pub fn probability(&self, bitstring: &str) -> f64 {
        if self.total_shots == 0 {
            0.0
        } else {
            self.get(bitstring) as f64 / self.total_shots as f64
        }
    }

    /// Get all bitstrings that were observed
    pub fn bitstrings(&self) -> impl Iterator<Item = &String> {
        self.counts.keys()
    }

    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    pub fn total_shots(&self) -> usize {
        self.total_shots
    }

    /// Get number of unique outcomes observed
    pub fn num_outcomes(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the most common outcome; ties go to the smaller bitstring
    pub fn most_common(&self) -> Option<(&String, usize)> {
        self.sorted().into_iter().next()
    }

    /// Get outcomes sorted by frequency (descending), then by bitstring
    pub fn sorted(&self) -> Vec<(&String, usize)> {
        let mut sorted: Vec<_> = self.counts.iter().map(|(bs, &count)| (bs, count)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted
    }

    /// Convert to a probability distribution
    pub fn to_probabilities(&self) -> HashMap<String, f64> {
        self.counts
            .keys()
            .map(|bs| (bs.clone(), self.probability(bs)))
            .collect()
    }
}

impl From<HashMap<String, usize>> for MeasurementCounts {
    fn from(counts: HashMap<String, usize>) -> Self {
        Self::from_counts(counts)
    }
}

impl From<MeasurementCounts> for BTreeMap<String, usize> {
    fn from(counts: MeasurementCounts) -> Self {
        counts.counts.into_iter().collect()
    }
}

impl fmt::Display for MeasurementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement Counts ({} shots):", self.total_shots)?;

        let sorted = self.sorted();
        for (bitstring, count) in sorted.iter().take(10) {
            writeln!(
                f,
                "  {}: {} ({:.2}%)",
                bitstring,
                count,
                self.probability(bitstring) * 100.0
            )?;
        }

        if sorted.len() > 10 {
            writeln!(f, "  ... and {} more outcomes", sorted.len() - 10)?;
        }

        Ok(())
    }
}
