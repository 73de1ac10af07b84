//! Common test helpers for ALICE-SpaceHash integration tests

#![allow(dead_code)]

use alice_spacehash::prelude::*;

// ============================================================================
// Standard configs
// ============================================================================

/// Identity world and domain transforms
pub fn identity_config(resolution: u32, shape: Shape) -> GridConfig {
    GridConfig::new(resolution, shape)
}

/// Rotated, translated, non-uniformly scaled world transform
pub fn skewed_world() -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::new(3.0, 0.5, 1.5),
        Quat::from_euler(glam::EulerRot::XYZ, 0.4, 1.2, -0.3),
        Vec3::new(-2.0, 5.0, 0.25),
    )
}

/// World transform with shear in the XZ plane
pub fn sheared_world() -> Mat4 {
    Mat4::from_cols(
        glam::Vec4::new(1.0, 0.0, 0.0, 0.0),
        glam::Vec4::new(0.8, 1.0, 0.0, 0.0),
        glam::Vec4::new(0.0, 0.3, 1.0, 0.0),
        glam::Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

// ============================================================================
// Assertions
// ============================================================================

/// Every normal has unit length
pub fn assert_unit_normals(samples: &GridSamples) {
    for (i, n) in samples.normals.iter().enumerate() {
        assert!(
            (n.length() - 1.0).abs() < 1e-5,
            "Normal {} has length {}: {:?}",
            i,
            n.length(),
            n
        );
    }
}

/// Every output value is finite
pub fn assert_finite(samples: &GridSamples) {
    for (i, (p, n)) in samples.positions.iter().zip(samples.normals.iter()).enumerate() {
        assert!(p.is_finite(), "Position {} not finite: {:?}", i, p);
        assert!(n.is_finite(), "Normal {} not finite: {:?}", i, n);
    }
}

/// Fraction of output bits that differ between two hashes
pub fn bit_difference(a: u32, b: u32) -> f64 {
    (a ^ b).count_ones() as f64 / 32.0
}
