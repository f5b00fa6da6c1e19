//! Generic simulated annealing optimizer.
//!
//! Searches for a low-cost state by repeatedly proposing a neighbor of the
//! current state, accepting worse neighbors with a probability that shrinks
//! with the temperature, and keeping the best state seen.
//!
//! - **Combinatorial** search over orderings of discrete tokens, explored by
//!   swapping two positions.
//! - **Continuous** search over real vectors, explored by damped random
//!   perturbation with optional per-dimension clamping.
//!
//! Six cooling schedules are available (linear, quadratic, exponential and
//! logarithmic families); see [`sa::Schedule`].
//!
//! # Example
//!
//! ```
//! use u_anneal::sa::{Bound, DomainMode, SaConfig, SaRunner};
//!
//! let config = SaConfig::new(DomainMode::Continuous)
//!     .with_max_steps(2000)
//!     .with_bounds(vec![Bound::new(-10.0, 10.0)])
//!     .with_seed(1);
//!
//! let result = SaRunner::minimize(|x: &[f64]| x[0] * x[0], vec![3.0], &config).unwrap();
//! println!("{result}");
//! ```

pub mod sa;
