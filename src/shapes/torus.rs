//! Torus around the Y axis
//!
//! Outer extent is 0.5 (`r1 + r2`), so the torus fits the same unit box as
//! the other shapes.

use super::{PointBatch4, Uv4};
use crate::simd::Vec3x4;
use std::f32::consts::TAU;
use wide::f32x4;

/// Major radius: centre of the torus to the centre of the tube
pub const TORUS_MAJOR_RADIUS: f32 = 0.375;
/// Minor radius: thickness of the tube
pub const TORUS_MINOR_RADIUS: f32 = 0.125;

/// Torus samples
///
/// The normal points from the tube's centre ring to the surface, i.e. the
/// position minus the major-radius ring point.
#[inline(always)]
pub fn torus_point4(uv: Uv4) -> PointBatch4 {
    let r1 = f32x4::splat(TORUS_MAJOR_RADIUS);
    let r2 = f32x4::splat(TORUS_MINOR_RADIUS);
    let (sin_u, cos_u) = (f32x4::splat(TAU) * uv.u).sin_cos();
    let (sin_v, cos_v) = (f32x4::splat(TAU) * uv.v).sin_cos();
    let s = r1 + r2 * cos_v;

    let positions = Vec3x4::new(s * sin_u, r2 * sin_v, s * cos_u);
    let ring = Vec3x4::new(r1 * sin_u, f32x4::ZERO, r1 * cos_u);
    PointBatch4 {
        positions,
        normals: positions - ring,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::index_to_uv4;
    use glam::{Vec2, Vec3};

    #[test]
    fn test_torus_tube_distance() {
        for k in 0..100 {
            let p = torus_point4(index_to_uv4(k, 20));
            for pos in p.positions.to_vecs() {
                let radial = Vec2::new(pos.x, pos.z).length();
                let tube = Vec2::new(radial - TORUS_MAJOR_RADIUS, pos.y).length();
                assert!((tube - TORUS_MINOR_RADIUS).abs() < 1e-5, "tube {}", tube);
            }
        }
    }

    #[test]
    fn test_torus_normal_is_radial_to_tube() {
        for k in 0..25 {
            let p = torus_point4(index_to_uv4(k, 10));
            let positions = p.positions.to_vecs();
            let normals = p.normals.to_vecs();
            for (pos, n) in positions.iter().zip(normals.iter()) {
                assert!((n.length() - TORUS_MINOR_RADIUS).abs() < 1e-5);
                // Ring point lies in XZ at the major radius
                let ring = *pos - *n;
                assert!(ring.y.abs() < 1e-6);
                assert!((Vec2::new(ring.x, ring.z).length() - TORUS_MAJOR_RADIUS).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_outer_extent() {
        let p = torus_point4(index_to_uv4(0, 1));
        // u = v = 0.5: inner equator on the -Z side
        let pos = p.positions.lane(0);
        assert!((pos - Vec3::new(0.0, 0.0, -0.25)).length() < 1e-5);
    }
}
