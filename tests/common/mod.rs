// Not every test crate uses every helper.
#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded rng so generation-dependent assertions stay reproducible.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0xA51A)
}

pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
