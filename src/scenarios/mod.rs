//! Initial conditions and raster intensity maps.
//!
//! These are external collaborators of the solver core: an initial
//! condition is any callback handed to
//! [`Central2D::init`](crate::solver::Central2D::init), and a raster map is
//! any callback handed to [`write_pgm`](crate::io::write_pgm). The two
//! classic shallow-water setups live here.

use crate::equations::SWEState2D;

/// Circular dam break: a raised column of water released at t = 0.
///
/// # Example
///
/// ```
/// use central_rs::equations::ShallowWater2D;
/// use central_rs::scenarios::DamBreak;
/// use central_rs::solver::{Central2D, SolverConfig};
///
/// let config = SolverConfig::new(2.0, 2.0, 100, 100).with_theta(2.0);
/// let mut sim = Central2D::new(ShallowWater2D::default(), config).unwrap();
/// let dam = DamBreak::default();
/// sim.init(|u, x, y| dam.apply(u, x, y));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DamBreak {
    /// Dam center x
    pub cx: f64,
    /// Dam center y
    pub cy: f64,
    /// Squared dam radius
    pub radius_sq: f64,
    /// Depth inside the dam
    pub h_inner: f64,
    /// Depth outside the dam
    pub h_outer: f64,
}

impl Default for DamBreak {
    /// The classic setup: a radius-0.5 dam at (1, 1) holding depth 1.5 over
    /// a depth-1 pond. The small slack on the radius keeps cells whose
    /// center lands exactly on the rim inside the dam.
    fn default() -> Self {
        Self {
            cx: 1.0,
            cy: 1.0,
            radius_sq: 0.25 + 1e-5,
            h_inner: 1.5,
            h_outer: 1.0,
        }
    }
}

impl DamBreak {
    /// Set the state of the cell centered at (x, y).
    pub fn apply(&self, u: &mut [f64; 3], x: f64, y: f64) {
        let dx = x - self.cx;
        let dy = y - self.cy;
        let h = if dx * dx + dy * dy < self.radius_sq {
            self.h_inner
        } else {
            self.h_outer
        };
        *u = SWEState2D::from_primitives(h, 0.0, 0.0).to_array();
    }
}

/// Still pond: uniform depth, zero velocity. The scheme must hold this
/// state fixed, which makes it the basic sanity scenario.
#[derive(Clone, Copy, Debug)]
pub struct StillPond {
    /// Uniform water depth
    pub depth: f64,
}

impl Default for StillPond {
    fn default() -> Self {
        Self { depth: 1.0 }
    }
}

impl StillPond {
    /// Set the state of the cell centered at (x, y).
    pub fn apply(&self, u: &mut [f64; 3], _x: f64, _y: f64) {
        *u = SWEState2D::new(self.depth, 0.0, 0.0).to_array();
    }
}

/// Raster intensity from water depth, full scale at h = 3.
pub fn show_height(u: &[f64; 3]) -> i32 {
    (255.0 * u[0] / 3.0) as i32
}

/// Raster intensity from momentum magnitude, full scale at |hu| = 2.5.
pub fn show_momentum(u: &[f64; 3]) -> i32 {
    (255.0 * SWEState2D::from_array(*u).momentum_magnitude() / 2.5) as i32
}
