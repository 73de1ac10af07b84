//! Grid pipeline: surface sampling, transforms and spatial hashing
//!
//! For every batch of 4 samples:
//!
//! 1. evaluate the unit-scale shape
//! 2. transform positions by the world transform and normals by its
//!    inverse-transpose (then renormalize)
//! 3. map the world positions through the domain transform
//! 4. floor them onto the integer lattice
//! 5. hash the lattice cell: `seed`, eat x, eat y, eat z, finalize
//!
//! Batches depend only on their own index, so [`generate`] splits them
//! across the rayon pool and writes into disjoint chunks of the outputs.
//! [`generate_sequential`] runs the same kernel on one thread and produces
//! bit-identical results.

pub mod instancing;
pub mod lattice;

pub use instancing::{draw_bounds, Aabb, InstanceParams};
pub use lattice::{lattice_config_vector, lattice_hashes};

use crate::error::{check_resolution, GridError};
use crate::hash::HashBatch4;
use crate::shapes::Shape;
use crate::simd::{Vec3x4, LANES};
use crate::transforms::{
    affine_from_mat4, normal_matrix, transform_normals, transform_positions, DomainTransform,
};
use glam::{Affine3A, Mat4, Vec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use wide::i32x4;

/// Everything one grid rebuild depends on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Samples per side; the grid holds `resolution²` samples
    pub resolution: u32,
    /// Surface the samples are placed on
    pub shape: Shape,
    /// Object-to-world transform (affine 4x4)
    pub world_transform: Mat4,
    /// World-to-lattice transform used only for hashing
    pub domain: DomainTransform,
    /// Hash seed
    pub seed: i32,
    /// Shader-side instance parameters (not used by the hash itself)
    pub instance: InstanceParams,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            resolution: 16,
            shape: Shape::Plane,
            world_transform: Mat4::IDENTITY,
            domain: DomainTransform::IDENTITY,
            seed: 0,
            instance: InstanceParams::default(),
        }
    }
}

impl GridConfig {
    /// Config with the given resolution and shape, everything else default
    pub fn new(resolution: u32, shape: Shape) -> Self {
        GridConfig {
            resolution,
            shape,
            ..Default::default()
        }
    }

    /// Builder: set seed
    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    /// Builder: set world transform
    pub fn with_world_transform(mut self, world_transform: Mat4) -> Self {
        self.world_transform = world_transform;
        self
    }

    /// Builder: set domain transform
    pub fn with_domain(mut self, domain: DomainTransform) -> Self {
        self.domain = domain;
        self
    }

    /// Check the config without generating anything
    pub fn validate(&self) -> Result<(), GridError> {
        GridPlan::new(self).map(|_| ())
    }

    /// Number of 4-sample batches, `ceil(resolution² / 4)`
    pub fn batch_count(&self) -> usize {
        batch_count(self.resolution)
    }
}

/// Number of 4-sample batches covering a `resolution × resolution` grid
#[inline]
pub fn batch_count(resolution: u32) -> usize {
    let samples = resolution as usize * resolution as usize;
    samples.div_ceil(LANES)
}

/// Validated, matrix-form pipeline inputs
///
/// Built once per run; every batch reads it immutably.
#[derive(Debug, Clone, Copy)]
pub struct GridPlan {
    resolution: u32,
    shape: Shape,
    position_trs: Affine3A,
    normal_trs: Affine3A,
    domain_trs: Affine3A,
    seed: i32,
}

impl GridPlan {
    /// Validate a config and precompute its matrices
    pub fn new(config: &GridConfig) -> Result<Self, GridError> {
        let domain_trs = config.domain.matrix()?;
        Self::from_matrices(
            config.resolution,
            config.shape,
            &config.world_transform,
            domain_trs,
            config.seed,
        )
    }

    /// Build a plan from raw matrices
    ///
    /// `world` must be affine with an invertible linear part; `domain` is
    /// any finite 3x4 transform.
    pub fn from_matrices(
        resolution: u32,
        shape: Shape,
        world: &Mat4,
        domain: Affine3A,
        seed: i32,
    ) -> Result<Self, GridError> {
        check_resolution(resolution)?;
        if !domain.is_finite() {
            return Err(GridError::NonFiniteTransform { which: "Domain" });
        }
        let position_trs = affine_from_mat4(world, "World")?;
        let normal_trs = normal_matrix(&position_trs, "World")?;
        Ok(GridPlan {
            resolution,
            shape,
            position_trs,
            normal_trs,
            domain_trs: domain,
            seed,
        })
    }

    /// Samples per side
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Shape being sampled
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of batches this plan covers
    pub fn batch_count(&self) -> usize {
        batch_count(self.resolution)
    }

    /// Run steps 1-5 for one batch
    #[inline]
    pub fn evaluate_batch(&self, batch_index: u32) -> GridBatch {
        let point = self.shape.evaluate(batch_index, self.resolution);

        let positions = transform_positions(&self.position_trs, point.positions);
        let (normals, fallbacks) = transform_normals(&self.normal_trs, point.normals);

        let cells = transform_positions(&self.domain_trs, positions).floor();
        let (x, y, z) = cells.to_array();
        let hashes = HashBatch4::seed(self.seed)
            .eat_int(lattice_lanes(x))
            .eat_int(lattice_lanes(y))
            .eat_int(lattice_lanes(z))
            .finalize();

        GridBatch {
            positions,
            normals,
            hashes,
            normal_fallbacks: fallbacks,
        }
    }
}

/// Floored lattice coordinates to integers (saturating outside `i32`)
#[inline(always)]
fn lattice_lanes(floored: [f32; 4]) -> i32x4 {
    i32x4::new(floored.map(|c| c as i32))
}

/// Output of one batch
#[derive(Debug, Clone, Copy)]
pub struct GridBatch {
    /// World-space positions
    pub positions: Vec3x4,
    /// World-space unit normals
    pub normals: Vec3x4,
    /// Lattice hashes
    pub hashes: [u32; 4],
    /// Lanes whose normal needed the zero-length fallback
    pub normal_fallbacks: u32,
}

/// The three index-aligned output arrays of a grid run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSamples {
    /// Samples per side
    pub resolution: u32,
    /// World-space positions, `resolution²` entries
    pub positions: Vec<Vec3>,
    /// World-space unit normals, `resolution²` entries
    pub normals: Vec<Vec3>,
    /// Lattice hashes, `resolution²` entries
    pub hashes: Vec<u32>,
}

impl GridSamples {
    /// Number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// True for an empty sample set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Sample `i` as (position, normal, hash)
    #[inline]
    pub fn get(&self, index: usize) -> Option<(Vec3, Vec3, u32)> {
        Some((
            *self.positions.get(index)?,
            *self.normals.get(index)?,
            *self.hashes.get(index)?,
        ))
    }

    /// Positions as raw bytes (3 x f32 per sample), ready for upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals as raw bytes (3 x f32 per sample), ready for upload
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Hashes as raw bytes (u32 per sample), ready for upload
    pub fn hash_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.hashes)
    }
}

/// Padded output buffers, one slot per lane of every batch
struct Buffers {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    hashes: Vec<u32>,
}

impl Buffers {
    fn new(batches: usize) -> Self {
        let padded = batches * LANES;
        Buffers {
            positions: vec![Vec3::ZERO; padded],
            normals: vec![Vec3::ZERO; padded],
            hashes: vec![0; padded],
        }
    }

    fn into_samples(mut self, resolution: u32) -> GridSamples {
        let len = resolution as usize * resolution as usize;
        self.positions.truncate(len);
        self.normals.truncate(len);
        self.hashes.truncate(len);
        GridSamples {
            resolution,
            positions: self.positions,
            normals: self.normals,
            hashes: self.hashes,
        }
    }
}

#[inline(always)]
fn write_batch(
    batch: &GridBatch,
    positions: &mut [Vec3],
    normals: &mut [Vec3],
    hashes: &mut [u32],
) -> usize {
    positions.copy_from_slice(&batch.positions.to_vecs());
    normals.copy_from_slice(&batch.normals.to_vecs());
    hashes.copy_from_slice(&batch.hashes);
    batch.normal_fallbacks as usize
}

fn report_fallbacks(fallbacks: usize) {
    if fallbacks > 0 {
        log::warn!(
            "{} normals collapsed to zero length and used the untransformed normal",
            fallbacks
        );
    }
}

/// Generate the grid in parallel
pub fn generate(config: &GridConfig) -> Result<GridSamples, GridError> {
    generate_plan(&GridPlan::new(config)?)
}

/// Generate the grid on the calling thread
pub fn generate_sequential(config: &GridConfig) -> Result<GridSamples, GridError> {
    generate_plan_sequential(&GridPlan::new(config)?)
}

/// Generate a validated plan in parallel
///
/// Each rayon task covers at least one grid row's worth of batches.
pub fn generate_plan(plan: &GridPlan) -> Result<GridSamples, GridError> {
    let batches = plan.batch_count();
    log::debug!(
        "generating {} grid: resolution {}, {} batches (parallel)",
        plan.shape,
        plan.resolution,
        batches
    );

    let mut buffers = Buffers::new(batches);
    let min_len = (plan.resolution as usize).div_ceil(LANES).max(1);

    let fallbacks: usize = buffers
        .positions
        .par_chunks_mut(LANES)
        .zip(buffers.normals.par_chunks_mut(LANES))
        .zip(buffers.hashes.par_chunks_mut(LANES))
        .enumerate()
        .with_min_len(min_len)
        .map(|(k, ((positions, normals), hashes))| {
            let batch = plan.evaluate_batch(k as u32);
            write_batch(&batch, positions, normals, hashes)
        })
        .sum();

    report_fallbacks(fallbacks);
    Ok(buffers.into_samples(plan.resolution))
}

/// Generate a validated plan on the calling thread
pub fn generate_plan_sequential(plan: &GridPlan) -> Result<GridSamples, GridError> {
    let batches = plan.batch_count();
    log::debug!(
        "generating {} grid: resolution {}, {} batches (sequential)",
        plan.shape,
        plan.resolution,
        batches
    );

    let mut buffers = Buffers::new(batches);
    let mut fallbacks = 0;

    for (k, ((positions, normals), hashes)) in buffers
        .positions
        .chunks_mut(LANES)
        .zip(buffers.normals.chunks_mut(LANES))
        .zip(buffers.hashes.chunks_mut(LANES))
        .enumerate()
    {
        let batch = plan.evaluate_batch(k as u32);
        fallbacks += write_batch(&batch, positions, normals, hashes);
    }

    report_fallbacks(fallbacks);
    Ok(buffers.into_samples(plan.resolution))
}
