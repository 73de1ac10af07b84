//! Per-instance shader parameters and draw bounds
//!
//! The renderer draws one instance per sample and reads the three sample
//! arrays plus a single `float4` config vector. Displacement is a static
//! per-run value that offsets each instance along its normal by its hash.

use crate::transforms::lossy_scale;
use glam::{Affine3A, Vec3};
use serde::{Deserialize, Serialize};

/// Instance shading parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceParams {
    /// Instance size relative to one grid cell
    pub instance_scale: f32,
    /// Maximum hash-driven offset along the normal
    pub displacement: f32,
}

impl Default for InstanceParams {
    fn default() -> Self {
        InstanceParams {
            instance_scale: 1.0,
            displacement: 0.1,
        }
    }
}

impl InstanceParams {
    /// Shader config vector `[R, instance_scale / R, displacement, 0]`
    pub fn config_vector(&self, resolution: u32) -> [f32; 4] {
        let r = resolution as f32;
        [r, self.instance_scale / r, self.displacement, 0.0]
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create from center and half-extents
    pub fn from_center_extents(center: Vec3, half_extents: Vec3) -> Self {
        Aabb {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if a point is inside (inclusive)
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Conservative culling bounds for the instanced draw
///
/// A cube centred on the world translation with edge
/// `2 * max(|scale|) + displacement`. Every shape fits a unit box, so this
/// covers any rotation plus the displaced instances.
pub fn draw_bounds(world: &Affine3A, displacement: f32) -> Aabb {
    let edge = 2.0 * lossy_scale(world).max_element() + displacement;
    Aabb::from_center_extents(world.translation.into(), Vec3::splat(0.5 * edge))
}
