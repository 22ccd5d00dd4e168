//! Statevector storage and measurement sampling for QUANTA
//!
//! - [`StateVector`]: dense `2^n` amplitude vector with validated gate methods
//! - [`kernels`]: in-place bit-masking kernels the state methods dispatch to
//! - [`Sampler`]: seeded shot sampling from Born-rule probabilities
//!
//! # Example
//!
//! ```
//! use num_complex::Complex64;
//! use quanta_state::{Sampler, StateVector};
//!
//! let zero = Complex64::new(0.0, 0.0);
//! let one = Complex64::new(1.0, 0.0);
//!
//! let mut state = StateVector::new(2).unwrap();
//! state.apply_single_qubit(&[[zero, one], [one, zero]], 0).unwrap();
//!
//! let counts = Sampler::new(Some(1))
//!     .sample(&state.probabilities(), 10)
//!     .unwrap()
//!     .to_bitstring_counts(2);
//! assert_eq!(counts["01"], 10);
//! ```

pub mod error;
pub mod kernels;
pub mod measurement;
pub mod state_vector;

pub use error::{Result, StateError};
pub use measurement::{format_bitstring, register_value, Sampler, SamplingResult};
pub use state_vector::{StateVector, MAX_SUPPORTED_QUBITS};
