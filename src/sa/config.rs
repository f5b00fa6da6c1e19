//! SA configuration: search domain, cooling schedule family and limits.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;
use super::types::Bound;

/// Search domain, which selects the neighbor generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DomainMode {
    /// Ordered sequence of discrete tokens, explored by swapping positions.
    Combinatorial,
    /// Fixed-length real vector, explored by bounded random perturbation.
    Continuous,
}

impl DomainMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainMode::Combinatorial => "combinatorial",
            DomainMode::Continuous => "continuous",
        }
    }
}

impl fmt::Display for DomainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "combinatorial" => Ok(DomainMode::Combinatorial),
            "continuous" => Ok(DomainMode::Continuous),
            other => Err(ConfigError::UnsupportedDomain(other.to_string())),
        }
    }
}

/// Requested cooling schedule family.
///
/// The concrete formula is resolved together with the decay rate, see
/// [`Schedule::resolve`](super::Schedule::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScheduleKind {
    #[default]
    Linear,
    Exponential,
    Logarithmic,
    Quadratic,
}

impl ScheduleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleKind::Linear => "linear",
            ScheduleKind::Exponential => "exponential",
            ScheduleKind::Logarithmic => "logarithmic",
            ScheduleKind::Quadratic => "quadratic",
        }
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(ScheduleKind::Linear),
            "exponential" => Ok(ScheduleKind::Exponential),
            "logarithmic" => Ok(ScheduleKind::Logarithmic),
            "quadratic" => Ok(ScheduleKind::Quadratic),
            other => Err(ConfigError::UnsupportedSchedule(other.to_string())),
        }
    }
}

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{Bound, DomainMode, SaConfig, ScheduleKind};
///
/// let config = SaConfig::new(DomainMode::Continuous)
///     .with_cooling(ScheduleKind::Exponential)
///     .with_alpha(0.995)
///     .with_max_steps(5000)
///     .with_bounds(vec![Bound::new(-5.0, 5.0); 2])
///     .with_seed(7);
/// assert!(config.validate().is_ok());
///
/// let parsed = SaConfig::from_names("combinatorial", "quadratic").unwrap();
/// assert_eq!(parsed.cooling, ScheduleKind::Quadratic);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Search domain.
    pub mode: DomainMode,

    /// Cooling schedule family.
    pub cooling: ScheduleKind,

    /// Hard iteration cap. The run stops once the step index reaches it.
    pub max_steps: usize,

    /// Initial temperature.
    pub max_temperature: f64,

    /// The run stops once the temperature is no longer above this.
    pub min_temperature: f64,

    /// Per-dimension clamping range for continuous mode. Empty = unconstrained.
    pub bounds: Vec<Bound>,

    /// Decay rate. Selects the multiplicative linear/quadratic variants when
    /// present; exponential and logarithmic default it to 0.99.
    pub alpha: Option<f64>,

    /// Continuous perturbation scale.
    pub damping: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl SaConfig {
    /// Creates a configuration with default limits for the given domain.
    pub fn new(mode: DomainMode) -> Self {
        Self {
            mode,
            cooling: ScheduleKind::default(),
            max_steps: 1000,
            max_temperature: 1.0,
            min_temperature: 1e-5,
            bounds: Vec::new(),
            alpha: None,
            damping: 1.0,
            seed: None,
        }
    }

    /// Creates a configuration from domain and schedule names.
    pub fn from_names(mode: &str, cooling: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(mode.parse()?).with_cooling(cooling.parse()?))
    }

    pub fn with_cooling(mut self, cooling: ScheduleKind) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_max_temperature(mut self, t: f64) -> Self {
        self.max_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_bounds(mut self, bounds: Vec<Bound>) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the parameters that do not depend on the initial state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::InvalidParameter(
                "max_steps must be positive".into(),
            ));
        }
        if self.max_temperature <= 0.0 || !self.max_temperature.is_finite() {
            return Err(ConfigError::InvalidParameter(format!(
                "max_temperature must be positive and finite, got {}",
                self.max_temperature
            )));
        }
        if self.min_temperature <= 0.0 || self.min_temperature.is_nan() {
            return Err(ConfigError::InvalidParameter(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if self.min_temperature > self.max_temperature {
            return Err(ConfigError::InvalidParameter(format!(
                "min_temperature {} exceeds max_temperature {}",
                self.min_temperature, self.max_temperature
            )));
        }
        if let Some(alpha) = self.alpha {
            if alpha <= 0.0 || !alpha.is_finite() {
                return Err(ConfigError::InvalidParameter(format!(
                    "alpha must be positive and finite, got {alpha}"
                )));
            }
        }
        if self.damping <= 0.0 || !self.damping.is_finite() {
            return Err(ConfigError::InvalidParameter(format!(
                "damping must be positive and finite, got {}",
                self.damping
            )));
        }
        for (index, bound) in self.bounds.iter().enumerate() {
            if !bound.is_valid() {
                return Err(ConfigError::InvalidBound {
                    index,
                    min: bound.min,
                    max: bound.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::new(DomainMode::Combinatorial);
        assert_eq!(config.cooling, ScheduleKind::Linear);
        assert_eq!(config.max_steps, 1000);
        assert!((config.max_temperature - 1.0).abs() < 1e-12);
        assert!((config.min_temperature - 1e-5).abs() < 1e-15);
        assert!(config.bounds.is_empty());
        assert!(config.alpha.is_none());
        assert!((config.damping - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::new(DomainMode::Continuous).validate().is_ok());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("continuous".parse(), Ok(DomainMode::Continuous));
        assert_eq!("logarithmic".parse(), Ok(ScheduleKind::Logarithmic));
        let config = SaConfig::from_names("continuous", "exponential").unwrap();
        assert_eq!(config.mode, DomainMode::Continuous);
        assert_eq!(config.cooling, ScheduleKind::Exponential);
    }

    #[test]
    fn test_unsupported_domain() {
        let err = SaConfig::from_names("graph", "linear").unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedDomain("graph".into()));
    }

    #[test]
    fn test_unsupported_schedule() {
        let err = "cubic".parse::<ScheduleKind>().unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedSchedule("cubic".into()));
    }

    #[test]
    fn test_names_round_trip_display() {
        for kind in [
            ScheduleKind::Linear,
            ScheduleKind::Exponential,
            ScheduleKind::Logarithmic,
            ScheduleKind::Quadratic,
        ] {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_validate_zero_steps() {
        let config = SaConfig::new(DomainMode::Continuous).with_max_steps(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_above_max() {
        let config = SaConfig::new(DomainMode::Continuous)
            .with_max_temperature(1.0)
            .with_min_temperature(2.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::new(DomainMode::Continuous).with_alpha(-0.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_damping() {
        let config = SaConfig::new(DomainMode::Continuous).with_damping(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_bound() {
        let config = SaConfig::new(DomainMode::Continuous)
            .with_bounds(vec![Bound::new(0.0, 1.0), Bound::new(3.0, 2.0)]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBound {
                index: 1,
                min: 3.0,
                max: 2.0
            })
        );
    }
}
