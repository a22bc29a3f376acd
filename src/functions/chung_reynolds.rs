//! Chung Reynolds test function

use ndarray::Array1;

/// Display name of the Chung Reynolds benchmark
pub const CHUNG_REYNOLDS_NAME: &str = "ChungReynolds";

/// Registry key of the Chung Reynolds benchmark
pub const CHUNG_REYNOLDS_KEY: &str = "chung_reynolds";

/// Inline LaTeX formula
pub const CHUNG_REYNOLDS_LATEX_INLINE: &str =
    r"$f(\mathbf{x}) = \left(\sum_{i=1}^D x_i^2\right)^2$";

/// LaTeX equation environment
pub const CHUNG_REYNOLDS_LATEX_EQUATION: &str =
    r"\begin{equation} f(\mathbf{x}) = \left(\sum_{i=1}^D x_i^2\right)^2 \end{equation}";

/// LaTeX description of the usual input domain
pub const CHUNG_REYNOLDS_LATEX_DOMAIN: &str = r"$-100 \leq x_i \leq 100$";

/// Chung Reynolds function - unimodal quartic function
/// f(x) = (sum x_i^2)^2
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
///
/// Accepts any dimension, the empty vector evaluates to 0.
/// Overflow is not guarded against and yields +inf.
pub fn chung_reynolds(x: &Array1<f64>) -> f64 {
    squared_norm_squared(x.iter())
}

/// Same as [`chung_reynolds`] on a plain slice.
pub fn chung_reynolds_slice(x: &[f64]) -> f64 {
    squared_norm_squared(x.iter())
}

fn squared_norm_squared<'a>(x: impl Iterator<Item = &'a f64>) -> f64 {
    let sum_squares: f64 = x.map(|&xi| xi.powi(2)).sum();
    sum_squares.powi(2)
}
