//! Core traits and value types for Simulated Annealing.

use std::convert::Infallible;

/// Objective evaluated on a candidate state. Lower is better.
///
/// Any `Fn(&[T]) -> f64` closure is a cost function that cannot fail.
/// Implement the trait directly when evaluation can fail; the error is
/// returned from the run unmodified inside [`SaError::Cost`](super::SaError::Cost).
///
/// # Examples
///
/// ```
/// use u_anneal::sa::CostFunction;
///
/// struct Budget { limit: f64 }
///
/// impl CostFunction<f64> for Budget {
///     type Error = String;
///
///     fn cost(&self, state: &[f64]) -> Result<f64, String> {
///         let total: f64 = state.iter().sum();
///         if total > self.limit {
///             return Err(format!("over budget: {total}"));
///         }
///         Ok(-total)
///     }
/// }
/// ```
///
/// The cost function is assumed to be pure: the same state always yields
/// the same energy.
pub trait CostFunction<T> {
    /// Failure raised by an evaluation.
    type Error;

    /// Computes the energy of a state.
    fn cost(&self, state: &[T]) -> Result<f64, Self::Error>;
}

impl<T, F> CostFunction<T> for F
where
    F: Fn(&[T]) -> f64,
{
    type Error = Infallible;

    fn cost(&self, state: &[T]) -> Result<f64, Infallible> {
        Ok(self(state))
    }
}

/// Inclusive `[min, max]` range for one continuous dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range.
    ///
    /// Unlike [`f64::clamp`] this never panics; a NaN value stays NaN.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl From<(f64, f64)> for Bound {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

/// One element of a state sequence.
///
/// Every token can be swapped, so any token works in combinatorial mode.
/// Continuous mode additionally needs [`Token::NUMERIC`] and a
/// [`Token::perturbed`] that shifts the value; the crate provides this for
/// `f64` and `f32`.
///
/// Custom token types only need an empty impl:
///
/// ```
/// use u_anneal::sa::Token;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum City { Seoul, Busan, Incheon }
///
/// impl Token for City {}
/// ```
pub trait Token: Clone {
    /// Whether [`Token::perturbed`] moves the value.
    const NUMERIC: bool = false;

    /// Returns the value shifted by `offset`, clamped into `bound` if given.
    fn perturbed(&self, _offset: f64, _bound: Option<&Bound>) -> Self {
        self.clone()
    }
}

impl Token for f64 {
    const NUMERIC: bool = true;

    fn perturbed(&self, offset: f64, bound: Option<&Bound>) -> f64 {
        let value = self + offset;
        match bound {
            Some(b) => b.clamp(value),
            None => value,
        }
    }
}

impl Token for f32 {
    const NUMERIC: bool = true;

    fn perturbed(&self, offset: f64, bound: Option<&Bound>) -> f32 {
        let value = *self as f64 + offset;
        match bound {
            Some(b) => {
                // Rounding to f32 may land one ulp past a bound f32 cannot represent.
                let narrowed = b.clamp(value) as f32;
                if (narrowed as f64) > b.max {
                    narrowed.next_down()
                } else if (narrowed as f64) < b.min {
                    narrowed.next_up()
                } else {
                    narrowed
                }
            }
            None => value as f32,
        }
    }
}

macro_rules! discrete_tokens {
    ($($t:ty),* $(,)?) => {
        $(impl Token for $t {})*
    };
}

discrete_tokens!(
    u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char, bool, String, &'static str,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_cost_function() {
        let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
        assert_eq!(sphere.cost(&[3.0, 4.0]), Ok(25.0));
    }

    #[test]
    fn test_bound_clamp() {
        let b = Bound::new(-1.0, 1.0);
        assert_eq!(b.clamp(5.0), 1.0);
        assert_eq!(b.clamp(-5.0), -1.0);
        assert_eq!(b.clamp(0.25), 0.25);
    }

    #[test]
    fn test_bound_validity() {
        assert!(Bound::new(0.0, 0.0).is_valid());
        assert!(!Bound::new(1.0, 0.0).is_valid());
        assert!(!Bound::new(f64::NAN, 1.0).is_valid());
    }

    #[test]
    fn test_f64_perturbed() {
        assert!((1.0f64.perturbed(0.25, None) - 1.25).abs() < 1e-12);
        let b = Bound::from((0.0, 1.0));
        assert_eq!(0.9f64.perturbed(0.5, Some(&b)), 1.0);
    }

    #[test]
    fn test_f32_perturbed() {
        let b = Bound::new(0.0, 1.0);
        assert_eq!(0.1f32.perturbed(-0.5, Some(&b)), 0.0);
    }

    #[test]
    fn test_f32_perturbed_stays_inside_inexact_bound() {
        let b = Bound::new(0.0, 0.1);
        let upper = 0.05f32.perturbed(5.0, Some(&b));
        assert!((upper as f64) <= 0.1, "{upper} exceeds 0.1");
        assert!(upper > 0.099);

        let b = Bound::new(0.1, 1.0);
        let lower = 0.5f32.perturbed(-5.0, Some(&b));
        assert!((lower as f64) >= 0.1, "{lower} below 0.1");
        assert!(lower < 0.101);
    }

    #[test]
    fn test_discrete_tokens_unchanged() {
        const { assert!(!<usize as Token>::NUMERIC) };
        assert_eq!(7usize.perturbed(0.4, None), 7);
        assert_eq!('a'.perturbed(1.0, None), 'a');
    }
}
