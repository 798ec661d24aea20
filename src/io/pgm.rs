//! Portable Gray Map output.
//!
//! PGM is one of the few raster formats that can be emitted in a handful of
//! lines with no library support, which makes it a convenient dump target
//! for quick visual checks; the files convert readily to PNG afterwards.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::equations::HyperbolicSystem2D;
use crate::solver::Central2D;

/// Error type for PGM output.
#[derive(Debug, Error)]
pub enum PgmError {
    /// I/O error during file operations.
    #[error("PGM I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the live interior as a binary PGM raster.
///
/// `pixel` maps one cell state to an intensity, clamped here to [0, 255].
/// The header is `P5\n<nx> <ny> 255\n`; rows are emitted top-to-bottom
/// starting from iy = ny - 1, so the image's vertical axis matches the
/// physical y axis.
///
/// Failure leaves the solver untouched; the error carries the underlying
/// I/O cause.
pub fn write_pgm<P, const N: usize, F>(
    path: impl AsRef<Path>,
    sim: &Central2D<P, N>,
    pixel: F,
) -> Result<(), PgmError>
where
    P: HyperbolicSystem2D<N>,
    F: Fn(&[f64; N]) -> i32,
{
    let mut out = BufWriter::new(File::create(path)?);

    write!(out, "P5\n{} {} 255\n", sim.nx(), sim.ny())?;
    for iy in (0..sim.ny()).rev() {
        for ix in 0..sim.nx() {
            out.write_all(&[pixel(sim.cell(ix, iy)).clamp(0, 255) as u8])?;
        }
    }
    out.flush()?;

    Ok(())
}
