//! Parametric surface evaluators
//!
//! Each shape maps a batch index `k` and grid resolution `R` to the
//! unit-scale positions and raw normals of samples `4k..4k+3`.
//!
//! Samples are row-major: sample `i` sits at row `floor(i / R)`, column
//! `i mod R`, and is placed at the centre of its cell in UV space:
//!
//! ```text
//! u = (col + 0.5) / R
//! v = (row + 0.5) / R
//! ```
//!
//! Normals are left unnormalized; the transform stage normalizes them after
//! applying the normal matrix.

mod octosphere;
mod plane;
mod sphere;
mod torus;

pub use octosphere::{octosphere_point4, OCTOSPHERE_RADIUS};
pub use plane::plane_point4;
pub use sphere::{sphere_point4, SPHERE_RADIUS};
pub use torus::{torus_point4, TORUS_MAJOR_RADIUS, TORUS_MINOR_RADIUS};

use crate::simd::{Vec3x4, LANES};
use serde::{Deserialize, Serialize};
use wide::f32x4;

/// Surface the grid is wrapped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Unit square in the XZ plane, facing +Y
    #[default]
    Plane,
    /// UV sphere of radius 0.5
    Sphere,
    /// Octahedron-mapped sphere of radius 0.5
    OctoSphere,
    /// Torus around the Y axis, radii 0.375 / 0.125
    Torus,
}

impl Shape {
    /// All shapes, in selector order
    pub const ALL: [Shape; 4] = [Shape::Plane, Shape::Sphere, Shape::OctoSphere, Shape::Torus];

    /// Evaluate 4 consecutive samples starting at `4 * batch_index`
    ///
    /// `resolution` must be at least 1; the pipeline validates this before
    /// any batch is evaluated.
    #[inline]
    pub fn evaluate(self, batch_index: u32, resolution: u32) -> PointBatch4 {
        let uv = index_to_uv4(batch_index, resolution);
        match self {
            Shape::Plane => plane_point4(uv),
            Shape::Sphere => sphere_point4(uv),
            Shape::OctoSphere => octosphere_point4(uv),
            Shape::Torus => torus_point4(uv),
        }
    }

    /// Lower-case name used in configs and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Shape::Plane => "plane",
            Shape::Sphere => "sphere",
            Shape::OctoSphere => "octo_sphere",
            Shape::Torus => "torus",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "plane" => Ok(Shape::Plane),
            "sphere" => Ok(Shape::Sphere),
            "octo_sphere" | "octosphere" => Ok(Shape::OctoSphere),
            "torus" => Ok(Shape::Torus),
            other => Err(format!(
                "unknown shape '{}' (expected plane, sphere, octo_sphere or torus)",
                other
            )),
        }
    }
}

/// 4 simultaneous (position, normal) samples
#[derive(Clone, Copy, Debug)]
pub struct PointBatch4 {
    /// Unit-scale positions
    pub positions: Vec3x4,
    /// Outward normals, not necessarily unit length
    pub normals: Vec3x4,
}

/// UV coordinates of 4 consecutive samples
#[derive(Clone, Copy, Debug)]
pub struct Uv4 {
    /// Column coordinate in [0, 1)
    pub u: f32x4,
    /// Row coordinate in [0, 1) (beyond 1 for padding lanes past the grid)
    pub v: f32x4,
}

/// Cell-centred UVs for samples `4k..4k+3`
///
/// Row and column come from exact integer division, so the result does not
/// drift for large resolutions.
#[inline]
pub fn index_to_uv4(batch_index: u32, resolution: u32) -> Uv4 {
    let first = batch_index.wrapping_mul(LANES as u32);
    let mut cols = [0.0f32; LANES];
    let mut rows = [0.0f32; LANES];
    for lane in 0..LANES {
        let i = first.wrapping_add(lane as u32);
        cols[lane] = (i % resolution) as f32;
        rows[lane] = (i / resolution) as f32;
    }

    let inv_resolution = f32x4::splat(1.0 / resolution as f32);
    let half = f32x4::splat(0.5);
    Uv4 {
        u: (f32x4::new(cols) + half) * inv_resolution,
        v: (f32x4::new(rows) + half) * inv_resolution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_row_major_cell_centres() {
        // Samples 4..8 of a 4x4 grid are the whole second row
        let uv = index_to_uv4(1, 4);
        assert_eq!(uv.u.to_array(), [0.125, 0.375, 0.625, 0.875]);
        assert_eq!(uv.v.to_array(), [0.375; 4]);
    }

    #[test]
    fn test_uv_wraps_rows_inside_a_batch() {
        // R = 3: samples 0..4 are (0,0) (1,0) (2,0) (0,1)
        let uv = index_to_uv4(0, 3);
        let third = 1.0 / 3.0;
        let u = uv.u.to_array();
        let v = uv.v.to_array();
        assert!((u[0] - 0.5 * third).abs() < 1e-6);
        assert!((u[3] - 0.5 * third).abs() < 1e-6);
        assert!((v[2] - 0.5 * third).abs() < 1e-6);
        assert!((v[3] - 1.5 * third).abs() < 1e-6);
    }

    #[test]
    fn test_single_sample_is_centre() {
        let uv = index_to_uv4(0, 1);
        assert_eq!(uv.u.to_array()[0], 0.5);
        assert_eq!(uv.v.to_array()[0], 0.5);
    }

    #[test]
    fn test_shape_names_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(shape.name().parse::<Shape>().unwrap(), shape);
        }
        assert_eq!("Octo-Sphere".parse::<Shape>().unwrap(), Shape::OctoSphere);
        assert!("cube".parse::<Shape>().is_err());
    }

    #[test]
    fn test_shape_serde_names() {
        let json = serde_json::to_string(&Shape::OctoSphere).unwrap();
        assert_eq!(json, "\"octo_sphere\"");
        let back: Shape = serde_json::from_str("\"torus\"").unwrap();
        assert_eq!(back, Shape::Torus);
    }
}
