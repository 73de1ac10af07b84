//! UV sphere of radius 0.5
//!
//! `v = 0` maps to the +Y pole and `v = 1` to -Y; `u` wraps once around
//! the Y axis.

use super::{PointBatch4, Uv4};
use crate::simd::Vec3x4;
use std::f32::consts::{PI, TAU};
use wide::f32x4;

/// Radius of the sphere (unit diameter)
pub const SPHERE_RADIUS: f32 = 0.5;

/// Sphere samples; the normal is the position itself
#[inline(always)]
pub fn sphere_point4(uv: Uv4) -> PointBatch4 {
    let r = f32x4::splat(SPHERE_RADIUS);
    let (sin_v, cos_v) = (f32x4::splat(PI) * uv.v).sin_cos();
    let (sin_u, cos_u) = (f32x4::splat(TAU) * uv.u).sin_cos();
    let s = r * sin_v;

    let positions = Vec3x4::new(s * sin_u, r * cos_v, s * cos_u);
    PointBatch4 {
        positions,
        normals: positions,
    }
}
