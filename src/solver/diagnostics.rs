//! Conservation diagnostics.
//!
//! The scheme preserves the integral of every conserved component over the
//! periodic domain up to rounding, and must never produce a non-positive
//! leading component (water depth for shallow water). The engine computes
//! these diagnostics once per sub-step, immediately after the halo refresh,
//! so a diverging solution is caught before it feeds a stencil pass.

use std::fmt;

/// Integrated conserved quantities and depth bounds over the live interior.
///
/// `totals[m]` is Σ u\[m\] · dx · dy over live cells; for shallow water the
/// three entries are the total water volume and the two momentum components.
/// The bounds track component 0 (the water depth for shallow water).
#[derive(Clone, Copy, Debug)]
pub struct SolutionDiagnostics<const N: usize> {
    /// Integrated conserved components (cell sums times cell area)
    pub totals: [f64; N],
    /// Minimum of component 0 over live cells
    pub h_min: f64,
    /// Maximum of component 0 over live cells
    pub h_max: f64,
}

impl<const N: usize> SolutionDiagnostics<N> {
    /// Total integrated mass (component 0).
    #[inline]
    pub fn mass(&self) -> f64 {
        self.totals[0]
    }
}

impl<const N: usize> fmt::Display for SolutionDiagnostics<N> {
    /// One-line record: the integrated components in order, then the bounds
    /// of component 0, space-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for total in &self.totals {
            write!(f, "{:.8e} ", total)?;
        }
        write!(f, "{:.8e} {:.8e}", self.h_min, self.h_max)
    }
}
