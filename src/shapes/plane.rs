//! Plane surface: the unit square in XZ, facing +Y

use super::{PointBatch4, Uv4};
use crate::simd::Vec3x4;
use glam::Vec3;
use wide::f32x4;

/// Plane samples: `(u - 0.5, 0, v - 0.5)` with constant normal `+Y`
#[inline(always)]
pub fn plane_point4(uv: Uv4) -> PointBatch4 {
    let half = f32x4::splat(0.5);
    PointBatch4 {
        positions: Vec3x4::new(uv.u - half, f32x4::ZERO, uv.v - half),
        normals: Vec3x4::splat(Vec3::Y),
    }
}
