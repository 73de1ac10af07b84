//! Integration tests: hash determinism, lane parity and avalanche quality

mod common;

use alice_spacehash::hash::{eat_int, finalize, hash_lattice, seed};
use alice_spacehash::prelude::*;
use common::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn scalar_hash_is_repeatable() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    for _ in 0..1000 {
        let (s, u, v, w): (i32, i32, i32, i32) = rng.gen();
        let a = Hash32::seed(s).eat_int(u).eat_int(v).eat_int(w).finalize();
        let b = finalize(eat_int(eat_int(eat_int(seed(s), u), v), w));
        assert_eq!(a, b);
        assert_eq!(a, hash_lattice(s, u, v, w));
    }
}

#[test]
fn batch_lanes_match_scalar() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
    for _ in 0..1000 {
        let s: i32 = rng.gen();
        let u: [i32; 4] = rng.gen();
        let v: [i32; 4] = rng.gen();
        let w: [i32; 4] = rng.gen();

        let batch = HashBatch4::seed(s).eat_ints(u).eat_ints(v).eat_ints(w).finalize();
        for lane in 0..4 {
            assert_eq!(
                batch[lane],
                hash_lattice(s, u[lane], v[lane], w[lane]),
                "Lane {} mismatch for seed {}",
                lane,
                s
            );
        }
    }
}

#[test]
fn batch_with_identical_lanes_matches_scalar() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    for _ in 0..256 {
        let (s, u, v, w): (i32, i32, i32, i32) = rng.gen();
        let expected = hash_lattice(s, u, v, w);
        let batch = HashBatch4::seed(s)
            .eat_ints([u; 4])
            .eat_ints([v; 4])
            .eat_ints([w; 4])
            .finalize();
        assert_eq!(batch, [expected; 4]);
    }
}

// ============================================================================
// Avalanche
// ============================================================================

#[test]
fn single_bit_flips_change_about_half_the_output() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0xA5A5);
    let trials = 10_000;
    let mut total = 0.0;

    for _ in 0..trials {
        let s: i32 = rng.gen();
        let mut input: [i32; 3] = rng.gen();
        let base = hash_lattice(s, input[0], input[1], input[2]);

        let which = rng.gen_range(0..3);
        let bit = rng.gen_range(0..32);
        input[which] ^= 1 << bit;
        let flipped = hash_lattice(s, input[0], input[1], input[2]);

        total += bit_difference(base, flipped);
    }

    let mean = total / trials as f64;
    assert!(mean >= 0.40, "Mean avalanche {:.3} below 40%", mean);
    assert!(mean <= 0.60, "Mean avalanche {:.3} above 60%", mean);
}

#[test]
fn seed_bit_flips_avalanche() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let trials = 10_000;
    let mut total = 0.0;

    for _ in 0..trials {
        let s: i32 = rng.gen();
        let (u, v, w): (i32, i32, i32) = rng.gen();
        let bit = rng.gen_range(0..32);
        total += bit_difference(hash_lattice(s, u, v, w), hash_lattice(s ^ (1 << bit), u, v, w));
    }

    let mean = total / trials as f64;
    assert!(mean >= 0.40, "Mean seed avalanche {:.3} below 40%", mean);
}

#[test]
fn neighbouring_cells_are_decorrelated() {
    // Adjacent lattice cells should not share low bits (the renderer colours by them)
    let mut low_byte_collisions = 0;
    for x in -50..50 {
        let a = hash_lattice(0, x, 0, 0);
        let b = hash_lattice(0, x + 1, 0, 0);
        if a & 0xFF == b & 0xFF {
            low_byte_collisions += 1;
        }
    }
    assert!(low_byte_collisions < 5, "{} low-byte collisions", low_byte_collisions);
}
