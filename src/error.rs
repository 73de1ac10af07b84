//! Error types

use thiserror::Error;

/// Largest supported resolution: `R²` must fit a signed 32-bit sample index
pub const MAX_RESOLUTION: u32 = 46_340;

/// Relative determinant at or below which a linear part counts as singular
///
/// Compared against `|det| / (|c0| * |c1| * |c2|)`, the determinant of the
/// linear part with unit-length columns, so uniform scale never matters.
pub const SINGULAR_EPSILON: f64 = 1e-6;

/// Grid generation and configuration errors
#[derive(Error, Debug)]
pub enum GridError {
    /// Resolution of zero
    #[error("Invalid resolution: must be at least 1")]
    ZeroResolution,

    /// Resolution whose sample count overflows the index range
    #[error("Invalid resolution {resolution}: maximum is {max}")]
    ResolutionTooLarge {
        /// Requested resolution
        resolution: u32,
        /// Largest accepted resolution
        max: u32,
    },

    /// 4x4 world matrix with a projective bottom row
    #[error("World transform is not affine: bottom row is {row:?}, expected [0, 0, 0, 1]")]
    NonAffineTransform {
        /// Offending bottom row
        row: [f32; 4],
    },

    /// Linear part cannot be inverted, so normals cannot be transformed
    #[error("{which} transform is singular (determinant {determinant:e}); normals are undefined")]
    SingularTransform {
        /// Which transform failed
        which: &'static str,
        /// Determinant of its linear part
        determinant: f32,
    },

    /// Transform containing NaN or infinity
    #[error("{which} transform contains non-finite values")]
    NonFiniteTransform {
        /// Which transform failed
        which: &'static str,
    },

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Reject resolutions the grid cannot address
pub fn check_resolution(resolution: u32) -> Result<(), GridError> {
    if resolution == 0 {
        Err(GridError::ZeroResolution)
    } else if resolution > MAX_RESOLUTION {
        Err(GridError::ResolutionTooLarge {
            resolution,
            max: MAX_RESOLUTION,
        })
    } else {
        Ok(())
    }
}
