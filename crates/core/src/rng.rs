//! RNG module - seeded linear congruential generator
//!
//! The reducer never generates randomness itself. Instead every input event
//! carries a draw in `[0, 1)` taken from this generator, so replaying the same
//! seed and action list reproduces a game exactly.
//!
//! Uses the GCC `rand()` constants: `m = 2^31`, `a = 1103515245`, `c = 12345`.

/// LCG modulus (2^31)
pub const LCG_MODULUS: u64 = 1 << 31;

/// LCG multiplier
pub const LCG_MULTIPLIER: u64 = 1_103_515_245;

/// LCG increment
pub const LCG_INCREMENT: u64 = 12_345;

/// One LCG step: `(a * seed + c) mod m`
///
/// ```
/// use tetris_reducer_core::rng::hash;
///
/// assert_eq!(hash(0), 12345);
/// assert!(hash(u32::MAX) < 1 << 31);
/// ```
pub fn hash(seed: u32) -> u32 {
    // a * seed fits in u64 for any u32 seed
    ((LCG_MULTIPLIER * seed as u64 + LCG_INCREMENT) % LCG_MODULUS) as u32
}

/// Scale a hash to a draw in `[0, 1)`: `(2 * hash) / (m - 1) mod 1`
pub fn scale(hash: u32) -> f64 {
    (2.0 * hash as f64) / ((LCG_MODULUS - 1) as f64) % 1.0
}

/// Stream of draws from a fixed seed.
///
/// Each call to [`Lcg::next_draw`] advances the hash chain once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    seed: u32,
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { seed, state: seed }
    }

    /// The seed this stream was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Advance and return the raw hash
    pub fn next_hash(&mut self) -> u32 {
        self.state = hash(self.state);
        self.state
    }

    /// Advance and return the scaled draw
    pub fn next_draw(&mut self) -> f64 {
        scale(self.next_hash())
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_draw())
    }
}
