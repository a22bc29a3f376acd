//! Search-domain bounds shared by every dimension of a benchmark.

use crate::error::{BenchmarkError, Result};
use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default lower bound of the search hypercube.
pub const DEFAULT_LOWER: f64 = -100.0;
/// Default upper bound of the search hypercube.
pub const DEFAULT_UPPER: f64 = 100.0;

/// Edge of the search hypercube: every coordinate is expected in `[lower, upper]`.
///
/// Invariant: both values are finite and `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    lower: f64,
    upper: f64,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = BenchmarkError;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Bounds::new(raw.lower, raw.upper)
    }
}

impl From<Bounds> for RawBounds {
    fn from(b: Bounds) -> Self {
        RawBounds {
            lower: b.lower,
            upper: b.upper,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
        }
    }
}

impl Bounds {
    /// Create validated bounds.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(BenchmarkError::NonFiniteBound { lower, upper });
        }
        if lower >= upper {
            return Err(BenchmarkError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower edge.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper edge.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// `upper - lower`
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether every coordinate of `x` lies in `[lower, upper]`.
    pub fn contains(&self, x: &Array1<f64>) -> bool {
        x.iter().all(|&xi| xi >= self.lower && xi <= self.upper)
    }

    /// Clamp every coordinate of `x` into `[lower, upper]` in place.
    pub fn clip(&self, x: &mut Array1<f64>) {
        x.mapv_inplace(|xi| xi.clamp(self.lower, self.upper));
    }

    /// Per-dimension `(lower, upper)` pairs, the layout used by metadata and optimizers.
    pub fn to_pairs(&self, dim: usize) -> Vec<(f64, f64)> {
        vec![(self.lower, self.upper); dim]
    }

    /// Bounds matrix for optimization (2 x dim).
    pub fn to_array2(&self, dim: usize) -> Array2<f64> {
        create_bounds(dim, self.lower, self.upper)
    }

    /// Draw `n` candidates uniformly from the `dim`-dimensional hypercube.
    ///
    /// Each row of the returned `n x dim` matrix is one candidate.
    pub fn sample_uniform<R: Rng + ?Sized>(&self, dim: usize, n: usize, rng: &mut R) -> Array2<f64> {
        let mut pop = Array2::<f64>::zeros((n, dim));
        for i in 0..n {
            for j in 0..dim {
                let u: f64 = rng.random::<f64>();
                pop[(i, j)] = self.lower + u * self.width();
            }
        }
        pop
    }
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}
