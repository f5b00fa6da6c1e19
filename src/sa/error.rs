//! Error types for annealing runs.

use thiserror::Error;

/// Rejected configuration, raised before any iteration runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Domain mode name outside `combinatorial` / `continuous`.
    #[error("unsupported domain mode `{0}`: expected \"combinatorial\" or \"continuous\"")]
    UnsupportedDomain(String),

    /// Cooling schedule name outside the supported family.
    #[error(
        "unsupported cooling schedule `{0}`: expected \"linear\", \"exponential\", \"logarithmic\" or \"quadratic\""
    )]
    UnsupportedSchedule(String),

    /// Bounds supplied but not one per state dimension.
    #[error("bounds length mismatch: state has {expected} dimensions, got {actual} bounds")]
    BoundsMismatch { expected: usize, actual: usize },

    /// A bound whose minimum exceeds its maximum, or that is not finite.
    #[error("invalid bound at dimension {index}: [{min}, {max}]")]
    InvalidBound { index: usize, min: f64, max: f64 },

    /// Out-of-range numeric parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Combinatorial mode needs at least one token to swap.
    #[error("combinatorial mode requires a non-empty initial state")]
    EmptyState,

    /// Continuous mode over tokens that carry no numeric value.
    #[error("continuous mode requires numeric state elements")]
    NonNumericState,
}

/// Error returned by an annealing run.
///
/// `E` is the cost function's own error type; infallible closures use
/// [`std::convert::Infallible`].
#[derive(Debug, Error)]
pub enum SaError<E> {
    /// The configuration was rejected at construction.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The cost function failed; the run was aborted.
    #[error("cost function failed: {0}")]
    Cost(#[source] E),
}

impl<E> SaError<E> {
    /// Returns the configuration error, if this is one.
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            SaError::Config(e) => Some(e),
            SaError::Cost(_) => None,
        }
    }
}
