//! Grid storage and periodic halo handling.
//!
//! The solver works on a rectangular lattice of `nx * ny` live cells padded
//! by a halo of ghost cells on every side, so stencil passes can read
//! symmetrically at the domain edge. This module provides:
//! - [`CellField`]: flat row-major storage of per-cell state vectors
//! - [`GridGeometry`]: cell counts, spacing, and periodic halo addressing
//! - [`apply_periodic`]: the halo refresh that enforces periodic boundaries

mod field;
mod geometry;
mod halo;

pub use field::CellField;
pub use geometry::{GridGeometry, NGHOST};
pub use halo::apply_periodic;
