//! Dense statevector storage

use crate::error::{Result, StateError};
use crate::kernels;
use num_complex::Complex64;

/// Widest register a dense statevector will be allocated for
///
/// 2^30 amplitudes occupy 16 GiB.
pub const MAX_SUPPORTED_QUBITS: usize = 30;

/// Quantum state as a vector of `2^n` complex amplitudes
///
/// Qubit `q` is bit `q` of the basis index, so qubit 0 is the least
/// significant bit.
///
/// # Example
///
/// ```
/// use quanta_state::StateVector;
///
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// assert_eq!(state.probabilities(), vec![1.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a state initialized to |0...0⟩
    ///
    /// # Errors
    /// [`StateError::TooManyQubits`] above [`MAX_SUPPORTED_QUBITS`], checked
    /// before anything is allocated, and [`StateError::AllocationError`] when
    /// the allocator refuses the request.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_SUPPORTED_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max_qubits: MAX_SUPPORTED_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        let mut amplitudes = Vec::new();
        amplitudes
            .try_reserve_exact(dimension)
            .map_err(|_| StateError::AllocationError {
                size: Self::bytes_for(num_qubits),
            })?;
        amplitudes.resize(dimension, Complex64::new(0.0, 0.0));
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state from raw amplitudes
    ///
    /// The amplitudes are taken as given; no normalization is applied.
    ///
    /// # Errors
    /// [`StateError::InvalidDimension`] unless the length is a power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Result<Self> {
        let dimension = amplitudes.len();
        if !dimension.is_power_of_two() {
            return Err(StateError::InvalidDimension { dimension });
        }

        Ok(Self {
            num_qubits: dimension.trailing_zeros() as usize,
            amplitudes,
        })
    }

    /// Bytes needed for a dense state of `num_qubits` qubits
    pub fn bytes_for(num_qubits: usize) -> usize {
        (1usize << num_qubits) * std::mem::size_of::<Complex64>()
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (`2^num_qubits`)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Born-rule probabilities `|a_i|²`
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Probability that `qubit` reads 1
    pub fn probability_of_one(&self, qubit: usize) -> Result<f64> {
        self.check_qubit(qubit)?;
        let mask = 1usize << qubit;
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum())
    }

    /// L2 norm of the state
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Return an error unless `qubit` belongs to this state
    #[inline]
    pub fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    pub fn apply_single_qubit(&mut self, matrix: &[[Complex64; 2]; 2], qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        kernels::apply_gate(&mut self.amplitudes, matrix, qubit, self.num_qubits);
        Ok(())
    }

    pub fn apply_diagonal(&mut self, diagonal: [Complex64; 2], qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        kernels::apply_diagonal_gate(&mut self.amplitudes, diagonal, qubit, self.num_qubits);
        Ok(())
    }

    pub fn apply_controlled(
        &mut self,
        matrix: &[[Complex64; 2]; 2],
        control: usize,
        target: usize,
    ) -> Result<()> {
        self.check_distinct(&[control, target])?;
        kernels::apply_controlled_gate(
            &mut self.amplitudes,
            matrix,
            control,
            target,
            self.num_qubits,
        );
        Ok(())
    }

    pub fn apply_controlled_phase(
        &mut self,
        phase: Complex64,
        control: usize,
        target: usize,
    ) -> Result<()> {
        self.check_distinct(&[control, target])?;
        kernels::apply_controlled_phase(
            &mut self.amplitudes,
            phase,
            control,
            target,
            self.num_qubits,
        );
        Ok(())
    }

    pub fn apply_swap(&mut self, qubit1: usize, qubit2: usize) -> Result<()> {
        self.check_distinct(&[qubit1, qubit2])?;
        kernels::apply_swap(&mut self.amplitudes, qubit1, qubit2, self.num_qubits);
        Ok(())
    }

    pub fn apply_doubly_controlled(
        &mut self,
        matrix: &[[Complex64; 2]; 2],
        controls: [usize; 2],
        target: usize,
    ) -> Result<()> {
        self.check_distinct(&[controls[0], controls[1], target])?;
        kernels::apply_doubly_controlled_gate(
            &mut self.amplitudes,
            matrix,
            controls,
            target,
            self.num_qubits,
        );
        Ok(())
    }

    // Kernels assume distinct in-range qubits.
    fn check_distinct(&self, qubits: &[usize]) -> Result<()> {
        for (i, &q) in qubits.iter().enumerate() {
            self.check_qubit(q)?;
            if qubits[..i].contains(&q) {
                return Err(StateError::InvalidQubitIndex {
                    index: q,
                    num_qubits: self.num_qubits,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ZERO: Complex64 = Complex64::new(0.0, 0.0);
    const ONE: Complex64 = Complex64::new(1.0, 0.0);

    #[test]
    fn test_new_is_ground_state() {
        let state = StateVector::new(3).unwrap();
        assert_eq!(state.dimension(), 8);
        assert_eq!(state.amplitudes()[0], ONE);
        assert!(state.amplitudes()[1..].iter().all(|a| *a == ZERO));
        assert!(state.is_normalized(1e-12));
    }

    #[test]
    fn test_zero_qubits_is_scalar() {
        let state = StateVector::new(0).unwrap();
        assert_eq!(state.dimension(), 1);
    }

    #[test]
    fn test_too_many_qubits_rejected_before_allocation() {
        assert_eq!(
            StateVector::new(64),
            Err(StateError::TooManyQubits {
                num_qubits: 64,
                max_qubits: MAX_SUPPORTED_QUBITS
            })
        );
    }

    #[test]
    fn test_from_amplitudes_requires_power_of_two() {
        assert!(matches!(
            StateVector::from_amplitudes(vec![ONE, ZERO, ZERO]),
            Err(StateError::InvalidDimension { dimension: 3 })
        ));
        let state = StateVector::from_amplitudes(vec![ZERO, ONE, ZERO, ZERO]).unwrap();
        assert_eq!(state.num_qubits(), 2);
    }

    #[test]
    fn test_probability_of_one() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let amplitudes = vec![Complex64::new(h, 0.0), ZERO, ZERO, Complex64::new(h, 0.0)];
        let state = StateVector::from_amplitudes(amplitudes).unwrap();
        assert_relative_eq!(state.probability_of_one(0).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(state.probability_of_one(1).unwrap(), 0.5, epsilon = 1e-12);
        assert!(state.probability_of_one(2).is_err());
    }

    #[test]
    fn test_apply_rejects_out_of_range_and_repeated_qubits() {
        let x = [[ZERO, ONE], [ONE, ZERO]];
        let mut state = StateVector::new(2).unwrap();
        assert!(state.apply_single_qubit(&x, 2).is_err());
        assert!(state.apply_controlled(&x, 1, 1).is_err());
        assert!(state.apply_swap(0, 5).is_err());
        assert_eq!(state, StateVector::new(2).unwrap());
    }

    #[test]
    fn test_bytes_for() {
        assert_eq!(StateVector::bytes_for(3), 128);
    }
}
