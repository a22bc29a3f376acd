//! Batch evaluation of candidate vectors on rayon thread pools.

use ndarray::{Array1, Array2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Below this many candidates evaluation stays sequential.
const MIN_PARALLEL_BATCH: usize = 4;

/// Parallel evaluation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Enable parallel evaluation
    pub enabled: bool,
    /// Number of worker threads for a parallel batch (None = rayon global pool)
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_threads: None,
        }
    }
}

impl ParallelConfig {
    /// Sequential evaluation only.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            num_threads: None,
        }
    }

    /// Run `op` on a dedicated pool of `num_threads` workers, or on the rayon
    /// global pool when unset.
    fn install<R, OP>(&self, op: OP) -> R
    where
        R: Send,
        OP: FnOnce() -> R + Send,
    {
        let Some(n) = self.num_threads else {
            return op();
        };
        match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(op),
            Err(e) => {
                log::warn!("cannot build a {}-thread pool, using the global pool: {}", n, e);
                op()
            }
        }
    }
}

/// Evaluate a population in parallel
///
/// # Arguments
/// * `population` - 2D array where each row is an individual
/// * `eval_fn` - Function to evaluate each individual
/// * `config` - Parallel configuration
///
/// # Returns
/// Array of fitness values for each individual, in row order
pub fn evaluate_population_parallel<F>(
    population: &Array2<f64>,
    eval_fn: &F,
    config: &ParallelConfig,
) -> Array1<f64>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync + ?Sized,
{
    let npop = population.nrows();

    if !config.enabled || npop < MIN_PARALLEL_BATCH {
        let mut energies = Array1::zeros(npop);
        for i in 0..npop {
            let individual = population.row(i).to_owned();
            energies[i] = eval_fn(&individual);
        }
        return energies;
    }

    let results = config.install(|| {
        (0..npop)
            .into_par_iter()
            .map(|i| {
                let individual = population.row(i).to_owned();
                eval_fn(&individual)
            })
            .collect::<Vec<f64>>()
    });

    Array1::from_vec(results)
}

/// Evaluate a batch of independent trial vectors
///
/// Same contract as [`evaluate_population_parallel`] for vectors that are not
/// stored as rows of a matrix (they may even differ in dimension).
pub fn evaluate_trials_parallel<F>(
    trials: &[Array1<f64>],
    eval_fn: &F,
    config: &ParallelConfig,
) -> Vec<f64>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync + ?Sized,
{
    if !config.enabled || trials.len() < MIN_PARALLEL_BATCH {
        return trials.iter().map(|trial| eval_fn(trial)).collect();
    }

    config.install(|| trials.par_iter().map(|trial| eval_fn(trial)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chung_reynolds;

    #[test]
    fn test_parallel_evaluation() {
        let mut population = Array2::zeros((10, 3));
        for i in 0..10 {
            for j in 0..3 {
                population[[i, j]] = (i as f64) * 0.1 + (j as f64) * 0.01;
            }
        }

        let config = ParallelConfig {
            enabled: true,
            num_threads: Some(2),
        };
        let energies = evaluate_population_parallel(&population, &chung_reynolds, &config);

        assert_eq!(energies.len(), 10);
        for i in 0..10 {
            let s = population.row(i).iter().map(|&x| x * x).sum::<f64>();
            assert!((energies[i] - s * s).abs() < 1e-12);
        }

        // Results should be identical with parallelism disabled
        let energies_seq =
            evaluate_population_parallel(&population, &chung_reynolds, &ParallelConfig::sequential());
        for i in 0..10 {
            assert_eq!(energies[i], energies_seq[i]);
        }
    }

    #[test]
    fn test_num_threads_sizes_the_pool() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let seen = AtomicUsize::new(0);
        let eval = |x: &Array1<f64>| -> f64 {
            seen.fetch_max(rayon::current_num_threads(), Ordering::Relaxed);
            chung_reynolds(x)
        };
        let population = Array2::from_elem((16, 2), 1.0);

        for n in [1, 3] {
            seen.store(0, Ordering::Relaxed);
            let config = ParallelConfig {
                enabled: true,
                num_threads: Some(n),
            };
            let energies = evaluate_population_parallel(&population, &eval, &config);
            assert!(energies.iter().all(|&f| f == 4.0));
            assert_eq!(seen.load(Ordering::Relaxed), n);

            seen.store(0, Ordering::Relaxed);
            let trials = vec![Array1::from(vec![2.0, 0.0]); 8];
            let values = evaluate_trials_parallel(&trials, &eval, &config);
            assert!(values.iter().all(|&f| f == 16.0));
            assert_eq!(seen.load(Ordering::Relaxed), n);
        }
    }

    #[test]
    fn test_small_and_empty_batches() {
        let empty = Array2::<f64>::zeros((0, 4));
        let out = evaluate_population_parallel(&empty, &chung_reynolds, &ParallelConfig::default());
        assert!(out.is_empty());

        let small = Array2::from_shape_vec((2, 2), vec![1.0, 1.0, 2.0, 0.0]).unwrap();
        let out = evaluate_population_parallel(&small, &chung_reynolds, &ParallelConfig::default());
        assert_eq!(out.to_vec(), vec![4.0, 16.0]);
    }

    #[test]
    fn test_trials_mixed_dimensions() {
        let trials: Vec<Array1<f64>> = (0..8)
            .map(|d| Array1::from_elem(d, 1.0))
            .collect();
        let values = evaluate_trials_parallel(&trials, &chung_reynolds, &ParallelConfig::default());
        let expected: Vec<f64> = (0..8).map(|d| (d * d) as f64).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_config_serde_defaults() {
        let cfg: ParallelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ParallelConfig::default());
        let cfg: ParallelConfig = serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        assert!(!cfg.enabled);
        assert_eq!(cfg.num_threads, None);
    }
}
