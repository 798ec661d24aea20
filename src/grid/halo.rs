//! Periodic halo refresh.

use super::{CellField, GridGeometry};

/// Overwrite every halo cell of `u` with its periodic interior image.
///
/// The live region [nghost, nghost+nx) x [nghost, nghost+ny) holds the
/// canonical cell values; everything outside it is rewritten. Four band
/// copies cover the halo: left/right strips over all rows, then bottom/top
/// strips over all columns. Each strip cell is fetched through the
/// two-dimensional wrap map, so the corner blocks are correct regardless of
/// copy order.
///
/// Idempotent; after return the halo exactly mirrors the interior until the
/// next mutation of `u`.
pub fn apply_periodic<const N: usize>(u: &mut CellField<N>, geom: &GridGeometry) {
    let ng = geom.nghost;

    // Left and right strips
    for iy in 0..geom.ny_all {
        for i in 0..ng {
            copy_wrapped(u, geom, i, iy);
            copy_wrapped(u, geom, geom.nx + ng + i, iy);
        }
    }

    // Bottom and top strips
    for ix in 0..geom.nx_all {
        for i in 0..ng {
            copy_wrapped(u, geom, ix, i);
            copy_wrapped(u, geom, ix, geom.ny + ng + i);
        }
    }
}

#[inline(always)]
fn copy_wrapped<const N: usize>(u: &mut CellField<N>, geom: &GridGeometry, ix: usize, iy: usize) {
    let (wx, wy) = geom.wrap(ix, iy);
    let src = *u.at(wx, wy);
    *u.at_mut(ix, iy) = src;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::NGHOST;

    /// Seed the live interior with values distinct per cell and component.
    fn seeded(geom: &GridGeometry) -> CellField<3> {
        let mut u = CellField::new(geom.nx_all, geom.ny_all);
        for iy in 0..geom.ny {
            for ix in 0..geom.nx {
                let tag = (iy * geom.nx + ix) as f64;
                *u.at_mut(ix + NGHOST, iy + NGHOST) = [tag, 10.0 + tag, -(20.0 + tag)];
            }
        }
        u
    }

    #[test]
    fn test_halo_matches_periodic_image() {
        let geom = GridGeometry::new(1.0, 1.0, 4, 4);
        let mut u = seeded(&geom);
        apply_periodic(&mut u, &geom);

        for iy in 0..geom.ny_all {
            for ix in 0..geom.nx_all {
                let (wx, wy) = geom.wrap(ix, iy);
                assert_eq!(
                    u.at(ix, iy),
                    u.at(wx, wy),
                    "halo cell ({}, {}) does not mirror live cell ({}, {})",
                    ix,
                    iy,
                    wx,
                    wy
                );
            }
        }
    }

    #[test]
    fn test_specific_images() {
        let geom = GridGeometry::new(1.0, 1.0, 4, 4);
        let mut u = seeded(&geom);
        apply_periodic(&mut u, &geom);

        // Column 0 is two columns left of the live region: wraps to live
        // column 4. Row 3 is the first live row, unchanged by the wrap.
        assert_eq!(u.at(0, 3), u.at(4, 3));
        // The far corner (9, 9) wraps to ((9-3) mod 4) + 3 = 5 on each axis.
        assert_eq!(u.at(9, 9), u.at(5, 5));
    }

    #[test]
    fn test_idempotent() {
        let geom = GridGeometry::new(1.0, 1.0, 5, 3);
        let mut u = seeded(&geom);
        apply_periodic(&mut u, &geom);
        let once = u.clone();
        apply_periodic(&mut u, &geom);

        assert_eq!(u.cells(), once.cells());
    }

    #[test]
    fn test_interior_untouched() {
        let geom = GridGeometry::new(1.0, 1.0, 4, 4);
        let mut u = seeded(&geom);
        let before = u.clone();
        apply_periodic(&mut u, &geom);

        for iy in NGHOST..NGHOST + geom.ny {
            for ix in NGHOST..NGHOST + geom.nx {
                assert_eq!(u.at(ix, iy), before.at(ix, iy));
            }
        }
    }
}
