//! SA execution loop.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::acceptance::accepts;
use super::config::{DomainMode, SaConfig};
use super::error::{ConfigError, SaError};
use super::neighbor::Neighborhood;
use super::schedule::Schedule;
use super::types::{CostFunction, Token};

/// Snapshot of one completed iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    /// Step index of the iteration, starting at 1.
    pub step: usize,
    /// Temperature the candidate was judged at.
    pub temperature: f64,
    /// Energy of the current state after the acceptance decision.
    pub current_energy: f64,
    /// Lowest energy seen so far.
    pub best_energy: f64,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The step index reached `max_steps`.
    StepLimit,
    /// The temperature fell to or below `min_temperature`.
    TemperatureFloor,
    /// The schedule produced a non-positive or NaN temperature.
    DegenerateTemperature,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<T> {
    /// The best state found.
    pub best: Vec<T>,

    /// Energy of the best state.
    pub best_energy: f64,

    /// Step index when the loop stopped. Always at least 1.
    pub final_step: usize,

    /// Configured step cap.
    pub max_steps: usize,

    /// Temperature the run started at.
    pub initial_temperature: f64,

    /// Last temperature computed, which may lie below the minimum.
    pub final_temperature: f64,

    /// Number of accepted candidates, including improvements.
    pub accepted_moves: usize,

    /// `accepted_moves / final_step`.
    pub acceptance_rate: f64,

    /// Search domain the run used.
    pub mode: DomainMode,

    /// Reported identity of the resolved cooling schedule.
    pub schedule: &'static str,

    /// Continuous perturbation scale.
    pub damping: f64,

    /// Why the loop stopped.
    pub termination: Termination,

    /// One record per completed iteration, in step order.
    pub history: Vec<HistoryRecord>,
}

impl<T> fmt::Display for SaResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+------------------------ RESULTS -------------------------+")?;
        writeln!(f)?;
        writeln!(f, "      opt.mode: {}", self.mode)?;
        writeln!(f, "cooling sched.: {}", self.schedule)?;
        if self.damping != 1.0 {
            writeln!(f, "       damping: {}", self.damping)?;
        }
        writeln!(f)?;
        writeln!(f, "  initial temp: {}", self.initial_temperature)?;
        writeln!(f, "    final temp: {:.6}", self.final_temperature)?;
        writeln!(f, "     max steps: {}", self.max_steps)?;
        writeln!(f, "    final step: {}", self.final_step)?;
        writeln!(f)?;
        writeln!(f, "  final energy: {:.6}", self.best_energy)?;
        writeln!(f)?;
        write!(f, "+-------------------------- END ---------------------------+")
    }
}

/// A configured annealing run.
///
/// Construction validates the configuration against the initial state and
/// evaluates its energy; [`Annealer::run`] consumes the annealer, so a run
/// state is never reused.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{Annealer, Bound, DomainMode, SaConfig};
///
/// let config = SaConfig::new(DomainMode::Continuous)
///     .with_max_steps(2000)
///     .with_bounds(vec![Bound::new(-10.0, 10.0)])
///     .with_seed(42);
/// let square = |x: &[f64]| x[0] * x[0];
///
/// let result = Annealer::new(square, vec![4.0], &config)
///     .and_then(Annealer::run)
///     .unwrap();
/// assert!(result.best_energy < 16.0);
/// ```
pub struct Annealer<T, C> {
    cost: C,
    neighborhood: Neighborhood,
    schedule: Schedule,
    mode: DomainMode,
    max_steps: usize,
    max_temperature: f64,
    min_temperature: f64,
    damping: f64,
    seed: Option<u64>,

    step: usize,
    temperature: f64,
    current: Vec<T>,
    current_energy: f64,
    best: Vec<T>,
    best_energy: f64,
    accepted: usize,
    history: Vec<HistoryRecord>,
}

impl<T: fmt::Debug, C> fmt::Debug for Annealer<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annealer")
            .field("mode", &self.mode)
            .field("schedule", &self.schedule)
            .field("neighborhood", &self.neighborhood)
            .field("step", &self.step)
            .field("temperature", &self.temperature)
            .field("current", &self.current)
            .field("current_energy", &self.current_energy)
            .field("best_energy", &self.best_energy)
            .field("accepted", &self.accepted)
            .finish_non_exhaustive()
    }
}

impl<T, C> Annealer<T, C>
where
    T: Token,
    C: CostFunction<T>,
{
    /// Validates `config` against `initial` and evaluates the initial energy.
    pub fn new(cost: C, initial: Vec<T>, config: &SaConfig) -> Result<Self, SaError<C::Error>> {
        config.validate()?;

        let neighborhood = match config.mode {
            DomainMode::Combinatorial => {
                if initial.is_empty() {
                    return Err(ConfigError::EmptyState.into());
                }
                Neighborhood::Combinatorial
            }
            DomainMode::Continuous => {
                if !T::NUMERIC {
                    return Err(ConfigError::NonNumericState.into());
                }
                if !config.bounds.is_empty() && config.bounds.len() != initial.len() {
                    return Err(ConfigError::BoundsMismatch {
                        expected: initial.len(),
                        actual: config.bounds.len(),
                    }
                    .into());
                }
                Neighborhood::Continuous {
                    damping: config.damping,
                    bounds: config.bounds.clone(),
                }
            }
        };

        let current_energy = cost.cost(&initial).map_err(SaError::Cost)?;

        Ok(Self {
            cost,
            neighborhood,
            schedule: Schedule::from_config(config),
            mode: config.mode,
            max_steps: config.max_steps,
            max_temperature: config.max_temperature,
            min_temperature: config.min_temperature,
            damping: config.damping,
            seed: config.seed,
            step: 1,
            temperature: config.max_temperature,
            best: initial.clone(),
            current: initial,
            current_energy,
            best_energy: current_energy,
            accepted: 0,
            history: Vec::new(),
        })
    }

    /// Resolved cooling schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Energy of the initial state.
    pub fn initial_energy(&self) -> f64 {
        self.current_energy
    }

    /// Runs to termination with an RNG seeded from the configuration.
    pub fn run(self) -> Result<SaResult<T>, SaError<C::Error>> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs to termination drawing from `rng`.
    ///
    /// A cost function error aborts the run and is returned as-is inside
    /// [`SaError::Cost`].
    #[tracing::instrument(
        level = "debug",
        name = "SA Run",
        skip_all,
        fields(mode = %self.mode, schedule = self.schedule.name())
    )]
    pub fn run_with_rng<R: Rng>(
        mut self,
        rng: &mut R,
    ) -> Result<SaResult<T>, SaError<C::Error>> {
        tracing::debug!(
            "SA: start T={} max_steps={} energy={}",
            self.temperature,
            self.max_steps,
            self.current_energy
        );

        let termination = loop {
            if let Some(reason) = self.stop_reason() {
                break reason;
            }

            let candidate = self.neighborhood.propose(&self.current, rng);
            let candidate_energy = self.cost.cost(&candidate).map_err(SaError::Cost)?;
            let delta = candidate_energy - self.current_energy;

            if candidate_energy < self.best_energy {
                self.best_energy = candidate_energy;
                self.best = candidate.clone();
                tracing::trace!("SA: new best {} @step {}", candidate_energy, self.step);
            }

            if accepts(delta, self.temperature, rng) {
                self.current = candidate;
                self.current_energy = candidate_energy;
                self.accepted += 1;
            }

            self.history.push(HistoryRecord {
                step: self.step,
                temperature: self.temperature,
                current_energy: self.current_energy,
                best_energy: self.best_energy,
            });

            self.temperature = self.schedule.temperature(self.step);
            self.step += 1;
        };

        tracing::debug!(
            "SA: stopped ({:?}) @step {} T={} best={} accepted={}",
            termination,
            self.step,
            self.temperature,
            self.best_energy,
            self.accepted
        );

        Ok(SaResult {
            best: self.best,
            best_energy: self.best_energy,
            final_step: self.step,
            max_steps: self.max_steps,
            initial_temperature: self.max_temperature,
            final_temperature: self.temperature,
            accepted_moves: self.accepted,
            acceptance_rate: self.accepted as f64 / self.step as f64,
            mode: self.mode,
            schedule: self.schedule.name(),
            damping: self.damping,
            termination,
            history: self.history,
        })
    }

    fn stop_reason(&self) -> Option<Termination> {
        if self.step >= self.max_steps {
            Some(Termination::StepLimit)
        } else if self.temperature <= 0.0 || self.temperature.is_nan() {
            Some(Termination::DegenerateTemperature)
        } else if self.temperature <= self.min_temperature {
            Some(Termination::TemperatureFloor)
        } else {
            None
        }
    }
}

/// Executes Simulated Annealing in one call.
pub struct SaRunner;

impl SaRunner {
    /// Minimizes `cost` starting from `initial`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_anneal::sa::{DomainMode, SaConfig, SaRunner};
    ///
    /// // Move the largest token to the front.
    /// let cost = |tour: &[usize]| tour[0] as f64 * -1.0;
    /// let config = SaConfig::new(DomainMode::Combinatorial)
    ///     .with_max_steps(200)
    ///     .with_seed(3);
    ///
    /// let result = SaRunner::minimize(cost, vec![0, 1, 2, 3], &config).unwrap();
    /// assert_eq!(result.best[0], 3);
    /// ```
    pub fn minimize<T, C>(
        cost: C,
        initial: Vec<T>,
        config: &SaConfig,
    ) -> Result<SaResult<T>, SaError<C::Error>>
    where
        T: Token,
        C: CostFunction<T>,
    {
        Annealer::new(cost, initial, config)?.run()
    }
}
