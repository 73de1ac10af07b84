//! 4-lane xxHash32 accumulator
//!
//! Same rounds as [`Hash32`], applied to four independent accumulators held
//! in one `u32x4`. There is no cross-lane mixing; lane `n` only ever sees
//! lane `n` of its inputs.

use super::scalar::Hash32;
use super::{PRIME32_1, PRIME32_2, PRIME32_3, PRIME32_4, PRIME32_5};
use wide::{i32x4, u32x4};

/// Four independent hash accumulators
#[derive(Debug, Clone, Copy)]
pub struct HashBatch4 {
    accumulator: u32x4,
}

#[inline(always)]
fn rotate_left(data: u32x4, steps: i32) -> u32x4 {
    (data << steps) | (data >> (32 - steps))
}

/// Reinterpret signed lanes as unsigned, preserving bits
#[inline(always)]
fn as_unsigned(data: i32x4) -> u32x4 {
    u32x4::new(data.to_array().map(|lane| lane as u32))
}

impl HashBatch4 {
    /// Start four sequences from the same seed
    #[inline]
    pub fn seed(seed: i32) -> Self {
        HashBatch4 {
            accumulator: u32x4::splat((seed as u32).wrapping_add(PRIME32_5)),
        }
    }

    /// Start four sequences from per-lane seeds
    #[inline]
    pub fn seed_lanes(seeds: [i32; 4]) -> Self {
        HashBatch4 {
            accumulator: as_unsigned(i32x4::new(seeds)) + u32x4::splat(PRIME32_5),
        }
    }

    /// Absorb one signed value per lane
    #[inline]
    #[must_use]
    pub fn eat_int(self, data: i32x4) -> Self {
        let mixed = self.accumulator + as_unsigned(data) * u32x4::splat(PRIME32_3);
        HashBatch4 {
            accumulator: rotate_left(mixed, 17) * u32x4::splat(PRIME32_4),
        }
    }

    /// Absorb one signed value per lane from a plain array
    #[inline]
    #[must_use]
    pub fn eat_ints(self, data: [i32; 4]) -> Self {
        self.eat_int(i32x4::new(data))
    }

    /// Absorb one byte per lane
    #[inline]
    #[must_use]
    pub fn eat_byte(self, data: [u8; 4]) -> Self {
        let bytes = u32x4::new(data.map(u32::from));
        let mixed = self.accumulator + bytes * u32x4::splat(PRIME32_5);
        HashBatch4 {
            accumulator: rotate_left(mixed, 11) * u32x4::splat(PRIME32_1),
        }
    }

    /// Avalanche all four accumulators
    #[inline]
    pub fn finalize(self) -> [u32; 4] {
        let mut avalanche = self.accumulator;
        avalanche = avalanche ^ (avalanche >> 15);
        avalanche = avalanche * u32x4::splat(PRIME32_2);
        avalanche = avalanche ^ (avalanche >> 13);
        avalanche = avalanche * u32x4::splat(PRIME32_3);
        avalanche = avalanche ^ (avalanche >> 16);
        avalanche.to_array()
    }
}

impl From<Hash32> for HashBatch4 {
    /// Broadcast a scalar accumulator into all four lanes
    #[inline]
    fn from(hash: Hash32) -> Self {
        HashBatch4 {
            accumulator: u32x4::splat(hash.accumulator),
        }
    }
}
