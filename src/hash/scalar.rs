//! Scalar xxHash32 accumulator

use super::{PRIME32_1, PRIME32_2, PRIME32_3, PRIME32_4, PRIME32_5};

/// Scalar hash accumulator
///
/// Opaque on purpose: the raw accumulator is only meaningful after
/// [`Hash32::finalize`], so the state can be advanced but not read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash32 {
    pub(super) accumulator: u32,
}

impl Hash32 {
    /// Start a new sequence: `seed + PRIME32_5`
    #[inline(always)]
    pub const fn seed(seed: i32) -> Self {
        Hash32 {
            accumulator: (seed as u32).wrapping_add(PRIME32_5),
        }
    }

    /// Absorb a signed 32-bit value
    #[inline(always)]
    #[must_use]
    pub const fn eat_int(self, data: i32) -> Self {
        Hash32 {
            accumulator: self
                .accumulator
                .wrapping_add((data as u32).wrapping_mul(PRIME32_3))
                .rotate_left(17)
                .wrapping_mul(PRIME32_4),
        }
    }

    /// Absorb a single byte
    #[inline(always)]
    #[must_use]
    pub const fn eat_byte(self, data: u8) -> Self {
        Hash32 {
            accumulator: self
                .accumulator
                .wrapping_add((data as u32).wrapping_mul(PRIME32_5))
                .rotate_left(11)
                .wrapping_mul(PRIME32_1),
        }
    }

    /// Avalanche the accumulator into the final hash value
    #[inline(always)]
    pub const fn finalize(self) -> u32 {
        let mut avalanche = self.accumulator;
        avalanche ^= avalanche >> 15;
        avalanche = avalanche.wrapping_mul(PRIME32_2);
        avalanche ^= avalanche >> 13;
        avalanche = avalanche.wrapping_mul(PRIME32_3);
        avalanche ^= avalanche >> 16;
        avalanche
    }
}

/// Free-function form of [`Hash32::seed`]
#[inline(always)]
pub const fn seed(s: i32) -> Hash32 {
    Hash32::seed(s)
}

/// Free-function form of [`Hash32::eat_int`]
#[inline(always)]
pub const fn eat_int(state: Hash32, data: i32) -> Hash32 {
    state.eat_int(data)
}

/// Free-function form of [`Hash32::eat_byte`]
#[inline(always)]
pub const fn eat_byte(state: Hash32, data: u8) -> Hash32 {
    state.eat_byte(data)
}

/// Free-function form of [`Hash32::finalize`]
#[inline(always)]
pub const fn finalize(state: Hash32) -> u32 {
    state.finalize()
}
