//! Flat lattice hash grid
//!
//! The simplest hash visualisation: a `R x R` grid of integer cells centred
//! on the origin, no surface and no transforms. Sample `i` eats its column
//! then its row, each offset by `R / 2`.

use crate::error::{check_resolution, GridError};
use crate::hash::Hash32;
use rayon::prelude::*;

/// Hashes of every cell of a centred `resolution x resolution` lattice
///
/// Row-major, `resolution²` entries.
pub fn lattice_hashes(resolution: u32, seed: i32) -> Result<Vec<u32>, GridError> {
    check_resolution(resolution)?;
    log::trace!("lattice hashes: resolution {}, seed {}", resolution, seed);

    let r = resolution as i32;
    let half = r / 2;
    let hash = Hash32::seed(seed);
    let mut hashes = vec![0u32; resolution as usize * resolution as usize];

    hashes
        .par_chunks_mut(resolution as usize)
        .enumerate()
        .for_each(|(row, slice)| {
            let v = row as i32 - half;
            for (col, out) in slice.iter_mut().enumerate() {
                let u = col as i32 - half;
                *out = hash.eat_int(u).eat_int(v).finalize();
            }
        });

    Ok(hashes)
}

/// Shader config vector for the flat lattice: `[R, 1/R, height/R, 0]`
pub fn lattice_config_vector(resolution: u32, height: f32) -> [f32; 4] {
    let r = resolution as f32;
    [r, 1.0 / r, height / r, 0.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_is_centred() {
        let resolution = 4;
        let hashes = lattice_hashes(resolution, 0).unwrap();
        assert_eq!(hashes.len(), 16);

        // Sample 10: row 2, column 2 -> cell (0, 0)
        assert_eq!(hashes[10], Hash32::seed(0).eat_int(0).eat_int(0).finalize());
        // Sample 0: cell (-2, -2)
        assert_eq!(hashes[0], Hash32::seed(0).eat_int(-2).eat_int(-2).finalize());
    }

    #[test]
    fn test_odd_resolution_offsets() {
        let hashes = lattice_hashes(3, 9).unwrap();
        // R / 2 = 1, so the middle sample is the origin
        assert_eq!(hashes[4], Hash32::seed(9).eat_int(0).eat_int(0).finalize());
    }

    #[test]
    fn test_column_before_row() {
        let hashes = lattice_hashes(4, 0).unwrap();
        // Sample 1 is column 1, row 0 -> (-1, -2)
        assert_eq!(hashes[1], Hash32::seed(0).eat_int(-1).eat_int(-2).finalize());
        assert_ne!(hashes[1], hashes[4]);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        assert!(matches!(lattice_hashes(0, 0), Err(GridError::ZeroResolution)));
    }

    #[test]
    fn test_config_vector() {
        assert_eq!(lattice_config_vector(4, 2.0), [4.0, 0.25, 0.5, 0.0]);
    }
}
