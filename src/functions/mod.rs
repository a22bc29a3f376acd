//! Benchmark objective functions
//!
//! Each function lives in its own module and is re-exported here.

pub mod chung_reynolds;

pub use chung_reynolds::*;
