//! Output writers.
//!
//! Rendering is a pure read-only consumer of the solver state; writers take
//! the solver by shared reference and never touch engine internals.

mod pgm;

pub use pgm::{write_pgm, PgmError};
