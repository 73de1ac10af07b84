//! Affine transforms for 4-wide point batches
//!
//! Positions go through the full 3x4 transform. Normals are direction
//! vectors: they skip the translation column and use the inverse-transpose
//! of the linear part, so they stay perpendicular to the surface under
//! non-uniform scale and shear.

pub mod domain;

pub use domain::{DomainTransform, Rotation};

use crate::error::{GridError, SINGULAR_EPSILON};
use crate::simd::Vec3x4;
use glam::{Affine3A, DMat3, Mat3A, Mat4, Vec3A, Vec4};
use wide::f32x4;

/// Tolerance for the projective row of an affine 4x4 matrix
const AFFINE_ROW_EPSILON: f32 = 1e-6;

/// Apply `trs` to 4 positions: `linear * p + translation`
#[inline]
pub fn transform_positions(trs: &Affine3A, p: Vec3x4) -> Vec3x4 {
    transform_vectors(trs, p, 1.0)
}

/// Apply `trs` to 4 vectors with the translation scaled by `w`
///
/// `w = 1` transforms points, `w = 0` transforms directions.
#[inline]
pub fn transform_vectors(trs: &Affine3A, p: Vec3x4, w: f32) -> Vec3x4 {
    let c0 = trs.matrix3.x_axis;
    let c1 = trs.matrix3.y_axis;
    let c2 = trs.matrix3.z_axis;
    let c3 = trs.translation * w;

    let row = |a: f32, b: f32, c: f32, t: f32| {
        f32x4::splat(a) * p.x + f32x4::splat(b) * p.y + f32x4::splat(c) * p.z + f32x4::splat(t)
    };

    Vec3x4 {
        x: row(c0.x, c1.x, c2.x, c3.x),
        y: row(c0.y, c1.y, c2.y, c3.y),
        z: row(c0.z, c1.z, c2.z, c3.z),
    }
}

/// Transform 4 normals and renormalize them
///
/// `normal_trs` should come from [`normal_matrix`]. Lanes whose transformed
/// normal collapses to zero length fall back to the normalized input normal
/// (and to `+Y` if that is zero too), so no NaN reaches the output.
///
/// Returns the unit normals and how many lanes used the fallback.
#[inline]
pub fn transform_normals(normal_trs: &Affine3A, normals: Vec3x4) -> (Vec3x4, u32) {
    let (untransformed, _) = normals.normalize_or(Vec3x4::splat(glam::Vec3::Y));
    transform_vectors(normal_trs, normals, 0.0).normalize_or(untransformed)
}

/// Inverse-transpose of the linear part, translation dropped
///
/// Fails with [`GridError::SingularTransform`] when the columns are close to
/// linearly dependent: `|det| <= 1e-6 * |c0| * |c1| * |c2|`. The test and the
/// inverse run in `f64`, so very small or very large uniform scales pass.
pub fn normal_matrix(trs: &Affine3A, which: &'static str) -> Result<Affine3A, GridError> {
    let c0 = trs.matrix3.x_axis.as_dvec3();
    let c1 = trs.matrix3.y_axis.as_dvec3();
    let c2 = trs.matrix3.z_axis.as_dvec3();
    let determinant = c0.dot(c1.cross(c2));
    let column_volume = c0.length() * c1.length() * c2.length();

    let singular = || GridError::SingularTransform {
        which,
        determinant: determinant as f32,
    };
    if !determinant.is_finite() || determinant.abs() <= SINGULAR_EPSILON * column_volume {
        return Err(singular());
    }

    let inverse_transpose = DMat3::from_cols(c0, c1, c2).inverse().transpose();
    let matrix3 = Mat3A::from_cols(
        inverse_transpose.x_axis.as_vec3().into(),
        inverse_transpose.y_axis.as_vec3().into(),
        inverse_transpose.z_axis.as_vec3().into(),
    );
    if !matrix3.is_finite() {
        return Err(singular());
    }
    Ok(Affine3A {
        matrix3,
        translation: Vec3A::ZERO,
    })
}

/// Convert an object-to-world 4x4 matrix into a 3x4 affine transform
///
/// Rejects non-finite matrices and matrices whose bottom row is not
/// `(0, 0, 0, 1)`.
pub fn affine_from_mat4(m: &Mat4, which: &'static str) -> Result<Affine3A, GridError> {
    if !m.is_finite() {
        return Err(GridError::NonFiniteTransform { which });
    }
    let row = m.row(3);
    if !row.abs_diff_eq(Vec4::W, AFFINE_ROW_EPSILON) {
        return Err(GridError::NonAffineTransform { row: row.to_array() });
    }
    Ok(Affine3A::from_mat4(*m))
}

/// Per-axis scale of the linear part (column lengths)
#[inline]
pub fn lossy_scale(trs: &Affine3A) -> glam::Vec3 {
    glam::Vec3::new(
        trs.matrix3.x_axis.length(),
        trs.matrix3.y_axis.length(),
        trs.matrix3.z_axis.length(),
    )
}
