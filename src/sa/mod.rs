//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Candidates are proposed by swapping tokens
//! (combinatorial domain) or perturbing coordinates (continuous domain),
//! and worsening moves are accepted with the Metropolis probability
//! `exp(-delta / T)` under a shrinking temperature `T`.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod acceptance;
mod config;
mod error;
mod neighbor;
mod runner;
mod schedule;
mod types;

pub use acceptance::{acceptance_probability, accepts, safe_exp};
pub use config::{DomainMode, SaConfig, ScheduleKind};
pub use error::{ConfigError, SaError};
pub use neighbor::Neighborhood;
pub use runner::{Annealer, HistoryRecord, SaResult, SaRunner, Termination};
pub use schedule::{Schedule, DEFAULT_ALPHA};
pub use types::{Bound, CostFunction, Token};
