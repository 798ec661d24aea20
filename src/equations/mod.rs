//! Conservation law abstractions.
//!
//! Provides a trait-based interface for 2D hyperbolic conservation laws:
//!
//! ∂U/∂t + ∂F(U)/∂x + ∂G(U)/∂y = 0
//!
//! where U is the state vector and F, G are the directional flux functions.
//! The central scheme needs nothing else from the physics: no Riemann
//! solvers, no flux Jacobians, only F, G, and a bound on the characteristic
//! wave speeds for the CFL condition.

mod shallow_water_2d;

pub use shallow_water_2d::{SWEState2D, ShallowWater2D};

/// A 2D hyperbolic system of conservation laws with `N` conserved variables.
///
/// Implementations are pure: the three methods depend only on the state
/// vector passed in and never mutate it. The engine evaluates them pointwise
/// on single cells.
///
/// # Type Parameters
///
/// The state width `N` is a const generic so per-cell states are fixed-size
/// arrays with no indirection:
/// - 3 for 2D shallow water (h, hu, hv)
/// - 4 for the 2D Euler equations (ρ, ρu, ρv, E)
///
/// # Example
///
/// ```
/// use central_rs::equations::{HyperbolicSystem2D, ShallowWater2D};
///
/// let swe = ShallowWater2D::new(9.8);
/// let u = [2.0, 1.0, 0.5];
/// let fx = swe.flux_x(&u);
/// assert_eq!(fx[0], 1.0); // mass flux is the x-momentum
/// ```
pub trait HyperbolicSystem2D<const N: usize>: Clone + Send + Sync {
    /// Compute the x-direction flux F(U).
    fn flux_x(&self, u: &[f64; N]) -> [f64; N];

    /// Compute the y-direction flux G(U).
    fn flux_y(&self, u: &[f64; N]) -> [f64; N];

    /// Upper bounds (cx, cy) on the absolute characteristic wave speeds.
    ///
    /// Used to pick a stable time step; the bounds may be conservative but
    /// must not under-estimate, or the scheme can violate the CFL condition
    /// and blow up.
    fn wave_speeds(&self, u: &[f64; N]) -> (f64, f64);
}
