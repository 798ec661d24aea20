//! The staggered central-scheme solver.
//!
//! This module contains the numerical core:
//! - [`MinMod`]: the generalized MinMod slope limiter
//! - [`SolverConfig`] / [`ConfigError`]: validated construction parameters
//! - [`Central2D`]: the staggered predictor-corrector engine
//! - [`SolutionDiagnostics`]: per-sub-step conservation diagnostics
//! - [`SolverError`] / [`RunSummary`]: run outcome reporting

mod central2d;
mod config;
mod diagnostics;
mod limiters;

pub use central2d::{Central2D, RunSummary, SolverError};
pub use config::{ConfigError, SolverConfig};
pub use diagnostics::SolutionDiagnostics;
pub use limiters::MinMod;
