//! Neighbor generation for the two search domains.

use rand::Rng;

use super::types::{Bound, Token};

/// Move operator resolved from the domain mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Neighborhood {
    /// Swap the values at two uniformly drawn positions.
    Combinatorial,

    /// Shift every coordinate by `(u - 0.5) * damping`, `u ~ U[0, 1)`,
    /// then clamp into its bound. No clamping when `bounds` is empty.
    Continuous { damping: f64, bounds: Vec<Bound> },
}

impl Neighborhood {
    /// Proposes a neighbor of `current`. The input is left untouched.
    pub fn propose<T: Token, R: Rng>(&self, current: &[T], rng: &mut R) -> Vec<T> {
        match self {
            Neighborhood::Combinatorial => swap_neighbor(current, rng),
            Neighborhood::Continuous { damping, bounds } => {
                perturb_neighbor(current, *damping, bounds, rng)
            }
        }
    }
}

/// Swaps two positions drawn with replacement; equal draws leave the copy as is.
fn swap_neighbor<T: Clone, R: Rng>(current: &[T], rng: &mut R) -> Vec<T> {
    let mut neighbor = current.to_vec();
    if neighbor.is_empty() {
        return neighbor;
    }
    let i = rng.random_range(0..neighbor.len());
    let j = rng.random_range(0..neighbor.len());
    neighbor.swap(i, j);
    neighbor
}

fn perturb_neighbor<T: Token, R: Rng>(
    current: &[T],
    damping: f64,
    bounds: &[Bound],
    rng: &mut R,
) -> Vec<T> {
    current
        .iter()
        .enumerate()
        .map(|(i, x)| {
            let offset = (rng.random::<f64>() - 0.5) * damping;
            x.perturbed(offset, bounds.get(i))
        })
        .collect()
}
