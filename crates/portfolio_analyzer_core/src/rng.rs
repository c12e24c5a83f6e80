//! Random sources for return sampling
//!
//! The engine draws standard-normal variates through [`GaussianSource`].
//! [`Lcg48`] is the default source and the one golden outputs are pinned to:
//! a 48-bit linear congruential generator whose Gaussian draws come from the
//! polar method, with the second variate of each accepted pair cached for the
//! next call. [`StandardNormalSource`] adapts any `rand` generator instead.

use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Seed used when no seed is specified
pub const RANDOM_SEED: u64 = 1;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// A source of independent standard-normal variates
pub trait GaussianSource {
    fn next_standard_normal(&mut self) -> f64;
}

/// 48-bit linear congruential generator with a polar-method Gaussian
#[derive(Debug, Clone, PartialEq)]
pub struct Lcg48 {
    state: u64,
    cached_gaussian: Option<f64>,
}

impl Default for Lcg48 {
    fn default() -> Self {
        Self::new(RANDOM_SEED as i64)
    }
}

impl Lcg48 {
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ MULTIPLIER) & MASK,
            cached_gaussian: None,
        }
    }

    /// Advance the state and return its top `bits` bits.
    #[inline]
    fn next_bits(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Uniform over the full `i32` range.
    pub fn next_int(&mut self) -> i32 {
        self.next_bits(32)
    }

    /// Uniform over the full `i64` range, built from two 32-bit draws.
    pub fn next_long(&mut self) -> i64 {
        (i64::from(self.next_bits(32)) << 32).wrapping_add(i64::from(self.next_bits(32)))
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    pub fn next_double(&mut self) -> f64 {
        let high = i64::from(self.next_bits(26)) << 27;
        let low = i64::from(self.next_bits(27));
        (high + low) as f64 * DOUBLE_UNIT
    }

    /// Standard-normal variate.
    ///
    /// Each accepted point of the polar method yields two variates; the first
    /// is returned and the second is served by the following call.
    pub fn next_gaussian(&mut self) -> f64 {
        if let Some(cached) = self.cached_gaussian.take() {
            return cached;
        }
        loop {
            let v1 = 2.0 * self.next_double() - 1.0;
            let v2 = 2.0 * self.next_double() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                let multiplier = (-2.0 * s.ln() / s).sqrt();
                self.cached_gaussian = Some(v2 * multiplier);
                return v1 * multiplier;
            }
        }
    }
}

impl GaussianSource for Lcg48 {
    fn next_standard_normal(&mut self) -> f64 {
        self.next_gaussian()
    }
}

impl RngCore for Lcg48 {
    fn next_u32(&mut self) -> u32 {
        self.next_int() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_long() as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_int().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Lcg48 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}

/// Draws standard-normal variates from any `rand` generator
#[derive(Debug, Clone)]
pub struct StandardNormalSource<R> {
    rng: R,
}

impl<R: Rng> StandardNormalSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: SeedableRng + Rng> StandardNormalSource<R> {
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }
}

impl<R: Rng> GaussianSource for StandardNormalSource<R> {
    fn next_standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }
}
