//! xorshift32 - tiny deterministic RNG for scramble
//!
//! No need for a full RNG crate here; scramble only wants a fair coin
//! with adjustable bias, and determinism under a fixed seed.

pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// True with probability `chance` (0.0..=1.0).
pub(super) fn chance(state: &mut u32, chance: f32) -> bool {
    let threshold = (chance * 65536.0) as u32;
    (xorshift32(state) & 0xFFFF) < threshold
}
