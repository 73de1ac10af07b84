//! # ALICE-SpaceHash
//!
//! Procedural instance grids with deterministic spatial hashes.
//!
//! A `resolution × resolution` grid of samples is wrapped onto a surface,
//! moved into world space, and every sample gets a 32-bit xxHash32-based
//! hash of the integer lattice cell it falls into. The three index-aligned
//! outputs (positions, normals, hashes) are laid out for direct upload to an
//! instanced renderer.
//!
//! ## Features
//!
//! - **Shapes**: Plane, Sphere, OctoSphere, Torus
//! - **4-wide evaluation**: every stage runs on `wide` lanes of 4 samples
//! - **Normals**: inverse-transpose world transform, singular transforms rejected
//! - **Domain transform**: hash lattice scaled/rotated/shifted independently of the mesh
//! - **Parallel**: batches spread over rayon, bit-identical to the sequential path
//! - **Config I/O**: JSON configs via serde
//!
//! ## Example
//!
//! ```rust
//! use alice_spacehash::prelude::*;
//!
//! let config = GridConfig::new(4, Shape::Plane);
//! let samples = generate(&config).unwrap();
//!
//! assert_eq!(samples.len(), 16);
//! let (position, normal, hash) = samples.get(5).unwrap();
//! assert_eq!(position, Vec3::new(-0.125, 0.0, -0.125));
//! assert_eq!(normal, Vec3::Y);
//! assert_eq!(hash, Hash32::seed(0).eat_int(-1).eat_int(0).eat_int(-1).finalize());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod hash;
pub mod io;
pub mod pipeline;
pub mod shapes;
pub mod simd;
pub mod transforms;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::error::GridError;
    pub use crate::hash::{hash_lattice, Hash32, HashBatch4};
    pub use crate::io::{load_config, save_config};
    pub use crate::pipeline::{
        batch_count, draw_bounds, generate, generate_sequential, lattice_hashes, Aabb,
        GridConfig, GridPlan, GridSamples, InstanceParams,
    };
    pub use crate::shapes::{PointBatch4, Shape};
    pub use crate::simd::Vec3x4;
    pub use crate::transforms::{DomainTransform, Rotation};
    pub use glam::{Affine3A, Mat4, Quat, Vec3};
}

// Re-exports for convenience
pub use error::GridError;
pub use pipeline::{generate, GridConfig, GridSamples};
pub use shapes::Shape;
