//! xxHash32-derived spatial hashing
//!
//! A seedable, order-sensitive mixer over signed 32-bit integers, built from
//! the xxHash32 round and avalanche steps (Yann Collet,
//! <https://github.com/Cyan4973/xxHash/blob/dev/doc/xxhash_spec.md>).
//!
//! Only the single-input absorption rounds and the final avalanche are used:
//! each eaten value is folded straight into one accumulator, which keeps the
//! hash cheap enough to run per instance on every grid rebuild.
//!
//! Two forms share the same arithmetic:
//! - [`Hash32`]: scalar accumulator
//! - [`HashBatch4`]: four independent accumulators in one `u32x4`
//!
//! Every lane of a [`HashBatch4`] produces exactly the value a [`Hash32`] would
//! for the same seed and inputs.

mod batch;
mod scalar;

pub use batch::HashBatch4;
pub use scalar::{eat_byte, eat_int, finalize, seed, Hash32};

/// 0b10011110001101110111100110110001
pub const PRIME32_1: u32 = 0x9E37_79B1;
/// 0b10000101111010111100101001110111
pub const PRIME32_2: u32 = 0x85EB_CA77;
/// 0b11000010101100101010111000111101
pub const PRIME32_3: u32 = 0xC2B2_AE3D;
/// 0b00100111110101001110101100101111
pub const PRIME32_4: u32 = 0x27D4_EB2F;
/// 0b00010110010101100110011110110001
pub const PRIME32_5: u32 = 0x1656_67B1;

/// Hash a sequence of ints with the scalar form
///
/// Equivalent to seeding, eating every value in order and finalizing.
#[inline]
pub fn hash_ints(seed: i32, values: &[i32]) -> u32 {
    values
        .iter()
        .fold(Hash32::seed(seed), |hash, &value| hash.eat_int(value))
        .finalize()
}

/// Hash a 3D lattice coordinate (x, then y, then z)
#[inline]
pub fn hash_lattice(seed: i32, x: i32, y: i32, z: i32) -> u32 {
    Hash32::seed(seed).eat_int(x).eat_int(y).eat_int(z).finalize()
}
