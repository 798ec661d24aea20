//! Jiang-Tadmor staggered central scheme.
//!
//! The engine advances a cell-centered state field
//!
//! ∂U/∂t + ∂F(U)/∂x + ∂G(U)/∂y = 0
//!
//! on a periodic rectangular grid by alternating between the primary grid
//! and a staggered grid whose cell centers sit at the primary cell corners.
//! Each super-step is a pair of sub-steps (io = 0, then io = 1); the second
//! sub-step writes shifted by (+1, +1) and the de-stagger copy shifts back,
//! so the solution returns to the primary grid after every pair.
//!
//! Per sub-step: halo refresh, solution check, pointwise flux and wave-speed
//! evaluation (the wave-speed maxima pick dt at io = 0), limited slope
//! reconstruction, then the predictor-corrector update. No Riemann solvers
//! and no flux Jacobians are needed; the physics only supplies F, G, and a
//! wave-speed bound.
//!
//! # References
//! - Jiang & Tadmor (1998), SIAM J. Sci. Comp. 19(6)

use std::time::Instant;

use thiserror::Error;

use crate::equations::HyperbolicSystem2D;
use crate::grid::{apply_periodic, CellField, GridGeometry};
use crate::solver::{ConfigError, MinMod, SolutionDiagnostics, SolverConfig};

/// Seed for the wave-speed maxima, so a fully quiescent field still yields
/// a finite dt instead of dividing by zero.
const SPEED_FLOOR: f64 = 1.0e-15;

/// Error type for a running solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// The solution check found a non-positive leading component (water
    /// depth for shallow water). The simulation has diverged and the run
    /// is aborted.
    #[error("solution diverged: non-positive depth {value:e} at live cell ({ix}, {iy}), t = {time}")]
    Diverged {
        /// Live-interior x index of the offending cell
        ix: usize,
        /// Live-interior y index of the offending cell
        iy: usize,
        /// The offending component value
        value: f64,
        /// Simulated time at which the check fired
        time: f64,
    },

    /// `run` was asked to advance to a time before the current time.
    #[error("tfinal {tfinal} lies before the current time {time}")]
    TimeReversal {
        /// Requested final time
        tfinal: f64,
        /// Current simulated time
        time: f64,
    },
}

/// Result of a completed [`Central2D::run`].
#[derive(Clone, Copy, Debug)]
pub struct RunSummary {
    /// Simulated time at the end of the run
    pub final_time: f64,
    /// Number of sub-steps taken (always even)
    pub n_substeps: usize,
    /// Smallest sub-step dt used
    pub dt_min: f64,
    /// Largest sub-step dt used
    pub dt_max: f64,
    /// Wall-clock seconds spent in the run
    pub wall_time: f64,
}

/// The staggered central-scheme engine.
///
/// Owns the eight cell-indexed fields for its lifetime: the conserved state
/// `u`, flux evaluations `f`/`g`, limited slopes `ux`/`uy`/`fx`/`gy`, and
/// the next-step scratch buffer `v`. All are allocated once at construction
/// and overwritten in place every sub-step.
///
/// # Example
///
/// ```
/// use central_rs::equations::ShallowWater2D;
/// use central_rs::solver::{Central2D, SolverConfig};
///
/// let config = SolverConfig::new(2.0, 2.0, 50, 50).with_theta(2.0);
/// let mut sim = Central2D::new(ShallowWater2D::default(), config).unwrap();
/// sim.init(|u, _x, _y| *u = [1.0, 0.0, 0.0]);
///
/// let summary = sim.run(0.1).unwrap();
/// assert_eq!(summary.n_substeps % 2, 0);
/// ```
pub struct Central2D<P, const N: usize> {
    physics: P,
    geom: GridGeometry,
    limiter: MinMod,
    cfl: f64,
    verbose: bool,
    /// Current simulated time
    t: f64,

    u: CellField<N>,
    f: CellField<N>,
    g: CellField<N>,
    ux: CellField<N>,
    uy: CellField<N>,
    fx: CellField<N>,
    gy: CellField<N>,
    v: CellField<N>,
}

impl<P, const N: usize> Central2D<P, N>
where
    P: HyperbolicSystem2D<N>,
{
    /// Create a solver from validated configuration.
    ///
    /// Rejects invalid domain extents, grid sizes, CFL numbers, or limiter
    /// parameters before any allocation.
    pub fn new(physics: P, config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let geom = GridGeometry::new(config.width, config.height, config.nx, config.ny);
        let alloc = || CellField::new(geom.nx_all, geom.ny_all);

        Ok(Self {
            physics,
            geom,
            limiter: MinMod::new(config.theta),
            cfl: config.cfl,
            verbose: config.verbose,
            t: 0.0,
            u: alloc(),
            f: alloc(),
            g: alloc(),
            ux: alloc(),
            uy: alloc(),
            fx: alloc(),
            gy: alloc(),
            v: alloc(),
        })
    }

    /// Live cells in x.
    #[inline]
    pub fn nx(&self) -> usize {
        self.geom.nx
    }

    /// Live cells in y.
    #[inline]
    pub fn ny(&self) -> usize {
        self.geom.ny
    }

    /// Current simulated time.
    #[inline]
    pub fn time(&self) -> f64 {
        self.t
    }

    /// The lattice geometry.
    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geom
    }

    /// Read the state of live cell (ix, iy), with 0 <= ix < nx and
    /// 0 <= iy < ny.
    #[inline]
    pub fn cell(&self, ix: usize, iy: usize) -> &[f64; N] {
        debug_assert!(ix < self.geom.nx && iy < self.geom.ny);
        self.u.at(ix + self.geom.nghost, iy + self.geom.nghost)
    }

    /// Initialize the live interior by calling `f` once per cell at the
    /// cell-center coordinates x = (ix + 0.5)·dx, y = (iy + 0.5)·dy.
    pub fn init<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut [f64; N], f64, f64),
    {
        let geom = self.geom;
        for iy in 0..geom.ny {
            for ix in 0..geom.nx {
                let (x, y) = geom.cell_center(ix, iy);
                f(self.u.at_mut(ix + geom.nghost, iy + geom.nghost), x, y);
            }
        }
    }

    /// Integrate the conserved components over the live interior, track the
    /// depth range, and fail if the leading component is non-positive
    /// anywhere.
    ///
    /// The engine calls this once per sub-step, right after the halo
    /// refresh, so a diverging solution never reaches the flux functions.
    pub fn solution_check(&self) -> Result<SolutionDiagnostics<N>, SolverError> {
        let geom = &self.geom;
        let ng = geom.nghost;

        let mut totals = [0.0; N];
        let mut h_min = self.u.at(ng, ng)[0];
        let mut h_max = h_min;

        for iy in 0..geom.ny {
            for ix in 0..geom.nx {
                let cell = self.u.at(ix + ng, iy + ng);
                for m in 0..N {
                    totals[m] += cell[m];
                }
                let h = cell[0];
                h_min = h_min.min(h);
                h_max = h_max.max(h);
                if h <= 0.0 {
                    return Err(SolverError::Diverged {
                        ix,
                        iy,
                        value: h,
                        time: self.t,
                    });
                }
            }
        }

        let area = geom.cell_area();
        for total in &mut totals {
            *total *= area;
        }

        Ok(SolutionDiagnostics {
            totals,
            h_min,
            h_max,
        })
    }

    /// Run the method forward to `tfinal`.
    ///
    /// Sub-steps always execute in pairs so the final state lives on the
    /// primary (non-staggered) grid. dt is chosen once per super-step from
    /// the CFL condition and the wave-speed maxima; when the next super-step
    /// would cross `tfinal`, dt is shrunk so the pair lands exactly on it.
    pub fn run(&mut self, tfinal: f64) -> Result<RunSummary, SolverError> {
        if tfinal < self.t {
            return Err(SolverError::TimeReversal {
                tfinal,
                time: self.t,
            });
        }

        let start = Instant::now();
        let mut n_substeps = 0;
        let mut dt_min = f64::INFINITY;
        let mut dt_max = 0.0f64;
        let mut done = false;
        let mut dt = 0.0;

        while !done {
            for io in 0..2 {
                apply_periodic(&mut self.u, &self.geom);
                let diag = self.solution_check()?;
                if self.verbose {
                    println!("{}", diag);
                }

                let (cx, cy) = self.compute_fg_speeds();
                self.limited_derivs();

                if io == 0 {
                    dt = self.stable_dt(cx, cy);
                    if self.t + 2.0 * dt >= tfinal {
                        dt = 0.5 * (tfinal - self.t);
                        done = true;
                    }
                }

                self.compute_step(io, dt);
                self.t += dt;
                n_substeps += 1;
                dt_min = dt_min.min(dt);
                dt_max = dt_max.max(dt);
            }
        }

        Ok(RunSummary {
            final_time: self.t,
            n_substeps,
            dt_min,
            dt_max,
            wall_time: start.elapsed().as_secs_f64(),
        })
    }

    /// The largest stable dt for the given wave-speed maxima.
    #[inline]
    fn stable_dt(&self, cx: f64, cy: f64) -> f64 {
        self.cfl / (cx / self.geom.dx).max(cy / self.geom.dy)
    }

    /// Evaluate F and G at every cell and reduce the per-cell wave-speed
    /// bounds to global maxima.
    ///
    /// Covers the halo too; after the refresh those are periodic images of
    /// interior cells, which keeps the loop rectangular without changing
    /// the maxima.
    fn compute_fg_speeds(&mut self) -> (f64, f64) {
        let Self {
            physics, geom, u, f, g, ..
        } = self;

        #[cfg(not(feature = "parallel"))]
        {
            let mut cx = SPEED_FLOOR;
            let mut cy = SPEED_FLOOR;
            for iy in 0..geom.ny_all {
                for ix in 0..geom.nx_all {
                    let cell = u.at(ix, iy);
                    *f.at_mut(ix, iy) = physics.flux_x(cell);
                    *g.at_mut(ix, iy) = physics.flux_y(cell);
                    let (cell_cx, cell_cy) = physics.wave_speeds(cell);
                    cx = cx.max(cell_cx);
                    cy = cy.max(cell_cy);
                }
            }
            (cx, cy)
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let nx_all = geom.nx_all;
            let physics = &*physics;
            f.cells_mut()
                .par_chunks_mut(nx_all)
                .zip_eq(g.cells_mut().par_chunks_mut(nx_all))
                .zip_eq(u.cells().par_chunks(nx_all))
                .map(|((f_row, g_row), u_row)| {
                    let mut cx = SPEED_FLOOR;
                    let mut cy = SPEED_FLOOR;
                    for ix in 0..nx_all {
                        let cell = &u_row[ix];
                        f_row[ix] = physics.flux_x(cell);
                        g_row[ix] = physics.flux_y(cell);
                        let (cell_cx, cell_cy) = physics.wave_speeds(cell);
                        cx = cx.max(cell_cx);
                        cy = cy.max(cell_cy);
                    }
                    (cx, cy)
                })
                .reduce(
                    || (SPEED_FLOOR, SPEED_FLOOR),
                    |a, b| (a.0.max(b.0), a.1.max(b.1)),
                )
        }
    }

    /// Compute the limited slopes of u in both directions, of f in x, and
    /// of g in y, over every cell with a full one-cell neighborhood.
    fn limited_derivs(&mut self) {
        let Self {
            geom,
            limiter,
            u,
            f,
            g,
            ux,
            uy,
            fx,
            gy,
            ..
        } = self;
        let lim = *limiter;

        #[cfg(not(feature = "parallel"))]
        {
            for iy in 1..geom.ny_all - 1 {
                for ix in 1..geom.nx_all - 1 {
                    *ux.at_mut(ix, iy) =
                        lim.limdiff_vec(u.at(ix - 1, iy), u.at(ix, iy), u.at(ix + 1, iy));
                    *fx.at_mut(ix, iy) =
                        lim.limdiff_vec(f.at(ix - 1, iy), f.at(ix, iy), f.at(ix + 1, iy));
                    *uy.at_mut(ix, iy) =
                        lim.limdiff_vec(u.at(ix, iy - 1), u.at(ix, iy), u.at(ix, iy + 1));
                    *gy.at_mut(ix, iy) =
                        lim.limdiff_vec(g.at(ix, iy - 1), g.at(ix, iy), g.at(ix, iy + 1));
                }
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let nx_all = geom.nx_all;
            let ny_all = geom.ny_all;
            let u_flat = u.cells();
            let f_flat = f.cells();
            let g_flat = g.cells();

            ux.cells_mut()
                .par_chunks_mut(nx_all)
                .zip_eq(uy.cells_mut().par_chunks_mut(nx_all))
                .zip_eq(fx.cells_mut().par_chunks_mut(nx_all))
                .zip_eq(gy.cells_mut().par_chunks_mut(nx_all))
                .enumerate()
                .for_each(|(iy, (((ux_row, uy_row), fx_row), gy_row))| {
                    if iy == 0 || iy == ny_all - 1 {
                        return;
                    }
                    let row = iy * nx_all;
                    for ix in 1..nx_all - 1 {
                        ux_row[ix] = lim.limdiff_vec(
                            &u_flat[row + ix - 1],
                            &u_flat[row + ix],
                            &u_flat[row + ix + 1],
                        );
                        fx_row[ix] = lim.limdiff_vec(
                            &f_flat[row + ix - 1],
                            &f_flat[row + ix],
                            &f_flat[row + ix + 1],
                        );
                        uy_row[ix] = lim.limdiff_vec(
                            &u_flat[row - nx_all + ix],
                            &u_flat[row + ix],
                            &u_flat[row + nx_all + ix],
                        );
                        gy_row[ix] = lim.limdiff_vec(
                            &g_flat[row - nx_all + ix],
                            &g_flat[row + ix],
                            &g_flat[row + nx_all + ix],
                        );
                    }
                });
        }
    }

    /// One sub-step of the staggered scheme.
    ///
    /// The predictor forms a half-advanced state from the limited flux
    /// slopes and replaces f, g with fluxes at the half step. The corrector
    /// averages the four surrounding primary cells onto the (possibly
    /// shifted) staggered cell and applies the flux differences. The final
    /// copy moves the result back onto the primary indexing with the
    /// staggering offset `io` undone.
    fn compute_step(&mut self, io: usize, dt: f64) {
        let dtcdx2 = 0.5 * dt / self.geom.dx;
        let dtcdy2 = 0.5 * dt / self.geom.dy;

        self.predictor(dtcdx2, dtcdy2);
        self.corrector(io, dtcdx2, dtcdy2);
        self.destagger_copy(io);
    }

    /// Predictor: replace f, g with fluxes of the half-advanced state.
    fn predictor(&mut self, dtcdx2: f64, dtcdy2: f64) {
        let Self {
            physics,
            geom,
            u,
            f,
            g,
            fx,
            gy,
            ..
        } = self;

        #[cfg(not(feature = "parallel"))]
        {
            for iy in 1..geom.ny_all - 1 {
                for ix in 1..geom.nx_all - 1 {
                    let mut uh = *u.at(ix, iy);
                    let sx = fx.at(ix, iy);
                    let sy = gy.at(ix, iy);
                    for m in 0..N {
                        uh[m] -= dtcdx2 * sx[m];
                        uh[m] -= dtcdy2 * sy[m];
                    }
                    *f.at_mut(ix, iy) = physics.flux_x(&uh);
                    *g.at_mut(ix, iy) = physics.flux_y(&uh);
                }
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let nx_all = geom.nx_all;
            let ny_all = geom.ny_all;
            let physics = &*physics;
            let u_flat = u.cells();
            let fx_flat = fx.cells();
            let gy_flat = gy.cells();

            f.cells_mut()
                .par_chunks_mut(nx_all)
                .zip_eq(g.cells_mut().par_chunks_mut(nx_all))
                .enumerate()
                .for_each(|(iy, (f_row, g_row))| {
                    if iy == 0 || iy == ny_all - 1 {
                        return;
                    }
                    let row = iy * nx_all;
                    for ix in 1..nx_all - 1 {
                        let mut uh = u_flat[row + ix];
                        let sx = &fx_flat[row + ix];
                        let sy = &gy_flat[row + ix];
                        for m in 0..N {
                            uh[m] -= dtcdx2 * sx[m];
                            uh[m] -= dtcdy2 * sy[m];
                        }
                        f_row[ix] = physics.flux_x(&uh);
                        g_row[ix] = physics.flux_y(&uh);
                    }
                });
        }
    }

    /// Corrector: staggered averaging update into the scratch buffer.
    fn corrector(&mut self, io: usize, dtcdx2: f64, dtcdy2: f64) {
        let Self {
            geom,
            u,
            f,
            g,
            ux,
            uy,
            v,
            ..
        } = self;
        let ng = geom.nghost;
        let (x0, x1) = (ng - io, ng - io + geom.nx);
        let (y0, y1) = (ng - io, ng - io + geom.ny);

        #[cfg(not(feature = "parallel"))]
        {
            for iy in y0..y1 {
                for ix in x0..x1 {
                    let out = corrector_cell(
                        u, ux, uy, f, g, geom.nx_all, ix, iy, dtcdx2, dtcdy2,
                    );
                    *v.at_mut(ix, iy) = out;
                }
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let nx_all = geom.nx_all;
            let u_flat = u.cells();
            let ux_flat = ux.cells();
            let uy_flat = uy.cells();
            let f_flat = f.cells();
            let g_flat = g.cells();

            v.cells_mut()
                .par_chunks_mut(nx_all)
                .enumerate()
                .for_each(|(iy, v_row)| {
                    if iy < y0 || iy >= y1 {
                        return;
                    }
                    for ix in x0..x1 {
                        v_row[ix] = corrector_cell_flat(
                            u_flat, ux_flat, uy_flat, f_flat, g_flat, nx_all, ix, iy, dtcdx2,
                            dtcdy2,
                        );
                    }
                });
        }
    }

    /// Copy the corrector result back onto the primary grid, undoing the
    /// staggering offset.
    fn destagger_copy(&mut self, io: usize) {
        let Self { geom, u, v, .. } = self;
        let ng = geom.nghost;

        #[cfg(not(feature = "parallel"))]
        {
            for iy in ng..ng + geom.ny {
                for ix in ng..ng + geom.nx {
                    *u.at_mut(ix, iy) = *v.at(ix - io, iy - io);
                }
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let nx_all = geom.nx_all;
            let (y0, y1) = (ng, ng + geom.ny);
            let (x0, x1) = (ng, ng + geom.nx);
            let v_flat = v.cells();

            u.cells_mut()
                .par_chunks_mut(nx_all)
                .enumerate()
                .for_each(|(iy, u_row)| {
                    if iy < y0 || iy >= y1 {
                        return;
                    }
                    let src_row = (iy - io) * nx_all;
                    for ix in x0..x1 {
                        u_row[ix] = v_flat[src_row + ix - io];
                    }
                });
        }
    }
}

/// The corrector stencil for one staggered cell.
///
/// v(ix, iy) averages the four primary cells at (ix, iy)..(ix+1, iy+1),
/// corrects with the limited slope differences, and applies the
/// half-step flux differences in both directions.
#[inline(always)]
#[cfg_attr(feature = "parallel", allow(dead_code))]
fn corrector_cell<const N: usize>(
    u: &CellField<N>,
    ux: &CellField<N>,
    uy: &CellField<N>,
    f: &CellField<N>,
    g: &CellField<N>,
    nx_all: usize,
    ix: usize,
    iy: usize,
    dtcdx2: f64,
    dtcdy2: f64,
) -> [f64; N] {
    corrector_cell_flat(
        u.cells(),
        ux.cells(),
        uy.cells(),
        f.cells(),
        g.cells(),
        nx_all,
        ix,
        iy,
        dtcdx2,
        dtcdy2,
    )
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn corrector_cell_flat<const N: usize>(
    u: &[[f64; N]],
    ux: &[[f64; N]],
    uy: &[[f64; N]],
    f: &[[f64; N]],
    g: &[[f64; N]],
    nx_all: usize,
    ix: usize,
    iy: usize,
    dtcdx2: f64,
    dtcdy2: f64,
) -> [f64; N] {
    let c00 = iy * nx_all + ix;
    let c10 = c00 + 1;
    let c01 = c00 + nx_all;
    let c11 = c01 + 1;

    let mut out = [0.0; N];
    for m in 0..N {
        out[m] = 0.2500 * (u[c00][m] + u[c10][m] + u[c01][m] + u[c11][m])
            - 0.0625
                * ((ux[c10][m] - ux[c00][m])
                    + (ux[c11][m] - ux[c01][m])
                    + (uy[c01][m] - uy[c00][m])
                    + (uy[c11][m] - uy[c10][m]))
            - dtcdx2 * ((f[c10][m] - f[c00][m]) + (f[c11][m] - f[c01][m]))
            - dtcdy2 * ((g[c01][m] - g[c00][m]) + (g[c11][m] - g[c10][m]));
    }
    out
}
