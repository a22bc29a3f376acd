//! Benchmark value type: bounds, evaluation function and descriptive metadata.
//!
//! A [`Benchmark`] is immutable once built. It holds a plain function pointer,
//! so it is `Send + Sync` and can be shared between optimizer threads without
//! locking.

use crate::bounds::Bounds;
use crate::error::{BenchmarkError, Result};
use crate::functions::{
    CHUNG_REYNOLDS_LATEX_DOMAIN, CHUNG_REYNOLDS_LATEX_EQUATION, CHUNG_REYNOLDS_LATEX_INLINE,
    CHUNG_REYNOLDS_NAME, chung_reynolds, chung_reynolds_slice,
};
use crate::parallel_eval::{ParallelConfig, evaluate_population_parallel};
use ndarray::{Array1, Array2};

/// Test function type definition
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Typeset forms of a benchmark formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatexFormats {
    /// Inline math, e.g. for tables
    pub inline: &'static str,
    /// Full `equation` environment
    pub equation: &'static str,
    /// Usual input domain
    pub domain: &'static str,
}

/// A benchmark objective: bounds plus a pure evaluation function.
#[derive(Debug, Clone)]
pub struct Benchmark {
    name: &'static str,
    bounds: Bounds,
    function: TestFunction,
    slice_function: fn(&[f64]) -> f64,
    latex: LatexFormats,
    global_minimum_value: f64,
}

impl Benchmark {
    /// Chung Reynolds benchmark on the default `[-100, 100]` hypercube.
    pub fn chung_reynolds() -> Self {
        Self::chung_reynolds_in(Bounds::default())
    }

    /// Chung Reynolds benchmark on `[lower, upper]`.
    pub fn chung_reynolds_with_bounds(lower: f64, upper: f64) -> Result<Self> {
        let bounds = Bounds::new(lower, upper)?;
        log::debug!("{} bounds set to [{}, {}]", CHUNG_REYNOLDS_NAME, lower, upper);
        Ok(Self::chung_reynolds_in(bounds))
    }

    /// Chung Reynolds benchmark on already validated bounds.
    pub fn chung_reynolds_in(bounds: Bounds) -> Self {
        Self {
            name: CHUNG_REYNOLDS_NAME,
            bounds,
            function: chung_reynolds,
            slice_function: chung_reynolds_slice,
            latex: LatexFormats {
                inline: CHUNG_REYNOLDS_LATEX_INLINE,
                equation: CHUNG_REYNOLDS_LATEX_EQUATION,
                domain: CHUNG_REYNOLDS_LATEX_DOMAIN,
            },
            global_minimum_value: 0.0,
        }
    }

    /// Display name, e.g. `ChungReynolds`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Search-domain bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Lower bound of every coordinate.
    pub fn lower(&self) -> f64 {
        self.bounds.lower()
    }

    /// Upper bound of every coordinate.
    pub fn upper(&self) -> f64 {
        self.bounds.upper()
    }

    /// The bare evaluation function, for optimizers that take a function pointer.
    pub fn function(&self) -> TestFunction {
        self.function
    }

    /// Inline LaTeX code of the formula.
    pub fn latex_code(&self) -> &'static str {
        self.latex.inline
    }

    /// All LaTeX forms of the formula.
    pub fn latex(&self) -> LatexFormats {
        self.latex
    }

    /// Evaluate at `x`. Inputs outside the bounds are evaluated as-is.
    pub fn evaluate(&self, x: &Array1<f64>) -> f64 {
        (self.function)(x)
    }

    /// Evaluate a plain slice without copying it into an array.
    pub fn evaluate_slice(&self, x: &[f64]) -> f64 {
        (self.slice_function)(x)
    }

    /// Evaluate using only the first `dim` coordinates of `solution`.
    pub fn evaluate_dim(&self, dim: usize, solution: &[f64]) -> Result<f64> {
        if dim > solution.len() {
            return Err(BenchmarkError::DimensionMismatch {
                expected: dim,
                got: solution.len(),
            });
        }
        Ok(self.evaluate_slice(&solution[..dim]))
    }

    /// Evaluate every row of `population`.
    pub fn evaluate_population(
        &self,
        population: &Array2<f64>,
        config: &ParallelConfig,
    ) -> Array1<f64> {
        evaluate_population_parallel(population, &self.function, config)
    }

    /// Location and value of the global minimum in `dim` dimensions.
    pub fn global_minimum(&self, dim: usize) -> (Array1<f64>, f64) {
        (Array1::zeros(dim), self.global_minimum_value)
    }

    /// Whether `x` lies inside the search hypercube.
    pub fn contains(&self, x: &Array1<f64>) -> bool {
        self.bounds.contains(x)
    }
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::chung_reynolds()
    }
}
