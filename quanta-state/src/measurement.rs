//! Measurement sampling
//!
//! Draws basis-state outcomes from a probability distribution without
//! touching the state. Sampling goes through
//! [`rand::distributions::WeightedIndex`], so outcomes with probability zero
//! are never produced.

use crate::error::{Result, StateError};
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Format a basis index as a bitstring of `num_qubits` characters
///
/// The most significant qubit comes first, so qubit 0 is the right-most
/// character.
#[inline]
pub fn format_bitstring(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Classical register value for a sampled basis index
///
/// Bit `q` of the result holds bit `q` of `index` when `q` is in `measured`
/// and 0 otherwise.
#[inline]
pub fn register_value(index: usize, measured: &[usize]) -> usize {
    let mask = measured.iter().fold(0usize, |m, &q| m | (1usize << q));
    index & mask
}

/// Outcome counts from a number of shots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamplingResult {
    /// Map from basis state index to count
    pub counts: HashMap<usize, usize>,

    /// Total number of shots
    pub shots: usize,
}

impl SamplingResult {
    pub fn new(shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            shots,
        }
    }

    pub fn add_outcome(&mut self, outcome: usize) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    pub fn get_count(&self, outcome: usize) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Counts keyed by bitstring
    pub fn to_bitstring_counts(&self, num_qubits: usize) -> HashMap<String, usize> {
        self.counts
            .iter()
            .map(|(&outcome, &count)| (format_bitstring(outcome, num_qubits), count))
            .collect()
    }

    /// Counts folded onto the classical register of `measured` qubits
    pub fn to_register_counts(
        &self,
        num_qubits: usize,
        measured: &[usize],
    ) -> HashMap<String, usize> {
        let mut register = HashMap::new();
        for (&outcome, &count) in &self.counts {
            let value = register_value(outcome, measured);
            *register
                .entry(format_bitstring(value, num_qubits))
                .or_insert(0) += count;
        }
        register
    }
}

/// Shot sampler over basis-state probabilities
///
/// Seeded samplers are reproducible: the same seed and distribution give the
/// same counts.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Create a sampler, seeded when `seed` is given and from entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Draw `shots` independent outcomes from `probabilities`
    ///
    /// The probabilities need not sum exactly to one. Zero shots give an
    /// empty result without inspecting the distribution.
    ///
    /// # Errors
    /// [`StateError::EmptyDistribution`] when no outcome has positive
    /// probability and [`StateError::InvalidProbability`] for negative or
    /// non-finite entries.
    pub fn sample(&mut self, probabilities: &[f64], shots: usize) -> Result<SamplingResult> {
        let mut result = SamplingResult::new(shots);
        if shots == 0 {
            return Ok(result);
        }

        let distribution = WeightedIndex::new(probabilities).map_err(|e| match e {
            WeightedError::NoItem | WeightedError::AllWeightsZero => StateError::EmptyDistribution,
            _ => StateError::InvalidProbability,
        })?;

        for _ in 0..shots {
            result.add_outcome(distribution.sample(&mut self.rng));
        }

        tracing::trace!(shots, distinct = result.counts.len(), "sampled outcomes");
        Ok(result)
    }
}
