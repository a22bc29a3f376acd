//! Shared function registry for evaluation drivers and plotting

use crate::benchmark::{Benchmark, TestFunction};
use crate::bounds::Bounds;
use crate::error::{BenchmarkError, Result};
use crate::functions::*;
use std::collections::BTreeMap;

type Constructor = fn(Bounds) -> Benchmark;

struct Entry {
    function: TestFunction,
    constructor: Constructor,
}

/// Function registry mapping names to function pointers and benchmark constructors.
///
/// Lookups are case-insensitive and ignore `_`, `-` and spaces, so
/// `chung_reynolds`, `ChungReynolds` and `chung-reynolds` all resolve to the
/// same entry.
pub struct FunctionRegistry {
    functions: BTreeMap<String, Entry>,
}

/// Canonical lookup key: lowercase alphanumerics only.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FunctionRegistry {
    /// Creates a new registry with all available benchmarks.
    pub fn new() -> Self {
        let mut functions = BTreeMap::new();

        functions.insert(
            CHUNG_REYNOLDS_KEY.to_string(),
            Entry {
                function: chung_reynolds as TestFunction,
                constructor: Benchmark::chung_reynolds_in as Constructor,
            },
        );

        log::debug!("function registry holds {} benchmarks", functions.len());
        Self { functions }
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        let wanted = normalize(name);
        self.functions
            .iter()
            .find(|(key, _)| normalize(key) == wanted)
            .map(|(_, entry)| entry)
    }

    /// Gets a test function by name.
    pub fn get(&self, name: &str) -> Option<TestFunction> {
        self.entry(name).map(|e| e.function)
    }

    /// Whether `name` resolves to a registered benchmark.
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Builds the benchmark registered under `name` on `bounds`.
    pub fn benchmark(&self, name: &str, bounds: Bounds) -> Result<Benchmark> {
        match self.entry(name) {
            Some(e) => Ok((e.constructor)(bounds)),
            None => {
                log::warn!("no benchmark registered as '{}'", name);
                Err(BenchmarkError::UnknownFunction {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Lists all registered function names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
