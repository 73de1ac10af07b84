//! SIMD type definitions for 4-wide grid evaluation
//!
//! Every surface sample, transform and hash in this crate is computed for
//! 4 consecutive sample indices at once. The lane width matches the
//! `uint4`/`float4` registers the instancing shaders consume, and maps onto
//! SSE/NEON 128-bit registers through `wide`.
//!
//! ```text
//! x: [x0, x1, x2, x3]
//! y: [y0, y1, y2, y3]
//! z: [z0, z1, z2, z3]
//! ```

use glam::Vec3;
use wide::{f32x4, CmpGt, CmpLt};

/// Number of lanes processed together
pub const LANES: usize = 4;

/// Squared length below which a vector is treated as zero-length
pub const MIN_LENGTH_SQUARED: f32 = 1e-24;

/// 4 3D vectors packed for SIMD processing (SoA layout)
#[derive(Clone, Copy, Debug)]
pub struct Vec3x4 {
    /// X components (4-wide)
    pub x: f32x4,
    /// Y components (4-wide)
    pub y: f32x4,
    /// Z components (4-wide)
    pub z: f32x4,
}

impl Vec3x4 {
    /// Create from 4 separate Vec3 values
    #[inline]
    pub fn from_vecs(v: [Vec3; 4]) -> Self {
        Vec3x4 {
            x: f32x4::new([v[0].x, v[1].x, v[2].x, v[3].x]),
            y: f32x4::new([v[0].y, v[1].y, v[2].y, v[3].y]),
            z: f32x4::new([v[0].z, v[1].z, v[2].z, v[3].z]),
        }
    }

    /// Create with all lanes set to the same vector
    #[inline]
    pub fn splat(v: Vec3) -> Self {
        Vec3x4 {
            x: f32x4::splat(v.x),
            y: f32x4::splat(v.y),
            z: f32x4::splat(v.z),
        }
    }

    /// Create from per-axis lane vectors
    #[inline]
    pub fn new(x: f32x4, y: f32x4, z: f32x4) -> Self {
        Vec3x4 { x, y, z }
    }

    /// Zero vector for all 4 lanes
    #[inline]
    pub fn zero() -> Self {
        Vec3x4 {
            x: f32x4::ZERO,
            y: f32x4::ZERO,
            z: f32x4::ZERO,
        }
    }

    /// Squared length of all 4 vectors
    #[inline]
    pub fn length_squared(self) -> f32x4 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length of all 4 vectors
    #[inline]
    pub fn length(self) -> f32x4 {
        self.length_squared().sqrt()
    }

    /// Dot product with another Vec3x4
    #[inline]
    pub fn dot(self, other: Self) -> f32x4 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Normalize every lane, substituting the matching `fallback` lane when a
    /// vector is zero-length or not finite.
    ///
    /// Returns the normalized vectors and the number of lanes that used the
    /// fallback. The fallback is taken as-is, so pass unit vectors.
    #[inline]
    pub fn normalize_or(self, fallback: Self) -> (Self, u32) {
        let len_sq = self.length_squared();
        // NaN compares false, so non-finite lanes also take the fallback
        let valid = len_sq.cmp_gt(f32x4::splat(MIN_LENGTH_SQUARED))
            & len_sq.cmp_lt(f32x4::splat(f32::INFINITY));
        let inv_len = f32x4::ONE / len_sq.max(f32x4::splat(MIN_LENGTH_SQUARED)).sqrt();
        let normalized = self * inv_len;
        let result = Vec3x4 {
            x: valid.blend(normalized.x, fallback.x),
            y: valid.blend(normalized.y, fallback.y),
            z: valid.blend(normalized.z, fallback.z),
        };
        let used_fallback = valid
            .to_array()
            .iter()
            .filter(|lane| lane.to_bits() == 0)
            .count() as u32;
        (result, used_fallback)
    }

    /// Component-wise floor
    #[inline]
    pub fn floor(self) -> Self {
        Vec3x4 {
            x: self.x.floor(),
            y: self.y.floor(),
            z: self.z.floor(),
        }
    }

    /// Extract lanes back to per-axis arrays
    #[inline]
    pub fn to_array(self) -> ([f32; 4], [f32; 4], [f32; 4]) {
        (self.x.to_array(), self.y.to_array(), self.z.to_array())
    }

    /// Extract lanes back to AoS vectors
    #[inline]
    pub fn to_vecs(self) -> [Vec3; 4] {
        let (x, y, z) = self.to_array();
        [
            Vec3::new(x[0], y[0], z[0]),
            Vec3::new(x[1], y[1], z[1]),
            Vec3::new(x[2], y[2], z[2]),
            Vec3::new(x[3], y[3], z[3]),
        ]
    }

    /// Single lane as a Vec3
    #[inline]
    pub fn lane(self, index: usize) -> Vec3 {
        self.to_vecs()[index]
    }
}

impl std::ops::Add for Vec3x4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Vec3x4 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Vec3x4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Vec3x4 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f32x4> for Vec3x4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32x4) -> Self {
        Vec3x4 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Neg for Vec3x4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Vec3x4 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
