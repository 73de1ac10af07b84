//! Octahedron-mapped sphere of radius 0.5
//!
//! The UV square is folded into an octahedron (the outer triangles of the
//! square wrap onto the -Z half) and then projected radially onto the
//! sphere. Samples are spread far more evenly than on a UV sphere, with no
//! pole pinching.

use super::{PointBatch4, Uv4};
use crate::simd::Vec3x4;
use wide::{f32x4, CmpLt};

/// Radius of the projected sphere
pub const OCTOSPHERE_RADIUS: f32 = 0.5;

/// Octahedron-sphere samples; the normal is the projected position
#[inline(always)]
pub fn octosphere_point4(uv: Uv4) -> PointBatch4 {
    let half = f32x4::splat(0.5);

    // Half octahedron over the XY square
    let mut x = uv.u - half;
    let mut y = uv.v - half;
    let z = half - x.abs() - y.abs();

    // Fold the corners past the rim back onto the -Z faces
    let offset = (-z).max(f32x4::ZERO);
    x = x + x.cmp_lt(f32x4::ZERO).blend(offset, -offset);
    y = y + y.cmp_lt(f32x4::ZERO).blend(offset, -offset);

    let folded = Vec3x4::new(x, y, z);
    let positions = folded * (f32x4::splat(OCTOSPHERE_RADIUS) / folded.length());
    PointBatch4 {
        positions,
        normals: positions,
    }
}
