//! Cooling schedules.
//!
//! A [`Schedule`] is resolved once from the requested [`ScheduleKind`] and
//! the optional decay rate, then evaluated as a pure function of the step
//! index. Linear and quadratic schedules use their additive form unless a
//! decay rate is given; exponential and logarithmic are always
//! multiplicative.

use super::config::{SaConfig, ScheduleKind};

/// Decay rate used by exponential and logarithmic cooling when none is given.
pub const DEFAULT_ALPHA: f64 = 0.99;

/// A resolved cooling schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Schedule {
    /// `T_min + (T_max - T_min) * (n - k) / n`
    LinearAdditive {
        max_temperature: f64,
        min_temperature: f64,
        max_steps: usize,
    },

    /// `T_max / (1 + alpha * k)`
    LinearMultiplicative { max_temperature: f64, alpha: f64 },

    /// `T_min + (T_max - T_min) * ((n - k) / n)^2`
    QuadraticAdditive {
        max_temperature: f64,
        min_temperature: f64,
        max_steps: usize,
    },

    /// `T_min / (1 + alpha * k^2)`
    ///
    /// Normalized by the minimum temperature, so the first update already
    /// lands below `T_min` and ends the run.
    QuadraticMultiplicative { min_temperature: f64, alpha: f64 },

    /// `T_max * alpha^k`
    ExponentialMultiplicative { max_temperature: f64, alpha: f64 },

    /// `T_max / (alpha * ln(k + 1))`
    LogarithmicMultiplicative { max_temperature: f64, alpha: f64 },
}

impl Schedule {
    /// Resolves the concrete schedule for a requested kind.
    pub fn resolve(
        kind: ScheduleKind,
        alpha: Option<f64>,
        max_temperature: f64,
        min_temperature: f64,
        max_steps: usize,
    ) -> Self {
        match (kind, alpha) {
            (ScheduleKind::Linear, None) => Schedule::LinearAdditive {
                max_temperature,
                min_temperature,
                max_steps,
            },
            (ScheduleKind::Linear, Some(alpha)) => Schedule::LinearMultiplicative {
                max_temperature,
                alpha,
            },
            (ScheduleKind::Quadratic, None) => Schedule::QuadraticAdditive {
                max_temperature,
                min_temperature,
                max_steps,
            },
            (ScheduleKind::Quadratic, Some(alpha)) => Schedule::QuadraticMultiplicative {
                min_temperature,
                alpha,
            },
            (ScheduleKind::Exponential, alpha) => Schedule::ExponentialMultiplicative {
                max_temperature,
                alpha: alpha.unwrap_or(DEFAULT_ALPHA),
            },
            (ScheduleKind::Logarithmic, alpha) => Schedule::LogarithmicMultiplicative {
                max_temperature,
                alpha: alpha.unwrap_or(DEFAULT_ALPHA),
            },
        }
    }

    /// Resolves the schedule described by a configuration.
    pub fn from_config(config: &SaConfig) -> Self {
        Self::resolve(
            config.cooling,
            config.alpha,
            config.max_temperature,
            config.min_temperature,
            config.max_steps,
        )
    }

    /// Temperature after completing iteration `step`.
    pub fn temperature(&self, step: usize) -> f64 {
        let k = step as f64;
        match *self {
            Schedule::LinearAdditive {
                max_temperature,
                min_temperature,
                max_steps,
            } => {
                let n = max_steps as f64;
                min_temperature + (max_temperature - min_temperature) * ((n - k) / n)
            }
            Schedule::LinearMultiplicative {
                max_temperature,
                alpha,
            } => max_temperature / (1.0 + alpha * k),
            Schedule::QuadraticAdditive {
                max_temperature,
                min_temperature,
                max_steps,
            } => {
                let n = max_steps as f64;
                min_temperature + (max_temperature - min_temperature) * ((n - k) / n).powi(2)
            }
            Schedule::QuadraticMultiplicative {
                min_temperature,
                alpha,
            } => min_temperature / (1.0 + alpha * k * k),
            Schedule::ExponentialMultiplicative {
                max_temperature,
                alpha,
            } => max_temperature * alpha.powf(k),
            Schedule::LogarithmicMultiplicative {
                max_temperature,
                alpha,
            } => max_temperature / (alpha * (k + 1.0).ln()),
        }
    }

    /// Reported identity of the schedule.
    pub fn name(&self) -> &'static str {
        match self {
            Schedule::LinearAdditive { .. } => "linear additive cooling",
            Schedule::LinearMultiplicative { .. } => "linear multiplicative cooling",
            Schedule::QuadraticAdditive { .. } => "quadratic additive cooling",
            Schedule::QuadraticMultiplicative { .. } => "quadratic multiplicative cooling",
            Schedule::ExponentialMultiplicative { .. } => "exponential multiplicative cooling",
            Schedule::LogarithmicMultiplicative { .. } => "logarithmic multiplicative cooling",
        }
    }
}
