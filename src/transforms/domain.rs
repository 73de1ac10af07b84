//! Hash-sampling domain transform
//!
//! The domain transform moves world-space positions into the space where the
//! integer lattice is sampled. It is configured independently of the world
//! transform, so the hash pattern can be scaled, rotated and shifted without
//! moving the instances themselves.

use crate::error::GridError;
use glam::{Affine3A, EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rotation component of a [`DomainTransform`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// Euler angles in degrees, applied Z first, then X, then Y
    Euler(Vec3),
    /// Quaternion `[x, y, z, w]`; normalized before use
    Quaternion(Quat),
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::Euler(Vec3::ZERO)
    }
}

impl Rotation {
    /// Rotation as a unit quaternion
    ///
    /// A zero or non-finite quaternion yields NaN lanes, which
    /// [`DomainTransform::matrix`] rejects.
    pub fn to_quat(self) -> Quat {
        match self {
            Rotation::Euler(degrees) => Quat::from_euler(
                EulerRot::YXZ,
                degrees.y.to_radians(),
                degrees.x.to_radians(),
                degrees.z.to_radians(),
            ),
            Rotation::Quaternion(q) => q.normalize(),
        }
    }
}

/// Scale / rotate / translate applied before lattice quantization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainTransform {
    /// Translation, applied last
    pub translation: Vec3,
    /// Rotation, applied after scale
    pub rotation: Rotation,
    /// Per-axis scale, applied first
    pub scale: Vec3,
}

impl Default for DomainTransform {
    fn default() -> Self {
        DomainTransform::IDENTITY
    }
}

impl DomainTransform {
    /// No scaling, rotation or translation
    pub const IDENTITY: DomainTransform = DomainTransform {
        translation: Vec3::ZERO,
        rotation: Rotation::Euler(Vec3::ZERO),
        scale: Vec3::ONE,
    };

    /// Uniform scale only
    pub fn from_scale(scale: f32) -> Self {
        DomainTransform {
            scale: Vec3::splat(scale),
            ..Self::IDENTITY
        }
    }

    /// Builder: set translation
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Builder: set rotation
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set per-axis scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// 3x4 matrix `T * R * S`
    ///
    /// Only positions pass through this transform, so a zero scale is valid
    /// (every sample lands in one lattice cell); non-finite input is not.
    pub fn matrix(&self) -> Result<Affine3A, GridError> {
        let m = Affine3A::from_scale_rotation_translation(
            self.scale,
            self.rotation.to_quat(),
            self.translation,
        );
        if m.is_finite() {
            Ok(m)
        } else {
            Err(GridError::NonFiniteTransform { which: "Domain" })
        }
    }
}
