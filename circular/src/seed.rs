//! Seeds for the sampler's random number generator.
//!
//! A fixed seed makes a run reproducible.  Without one, the seed is mixed
//! from the wall clock, a monotonic tick count and the operating system's
//! random source, so two samplers created within the same clock tick still
//! end up on different streams.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use tracing::debug;

/// Reference point for the monotonic part of entropy seeds
static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Where the generator's seed comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// Explicit seed, identical seeds give identical samples
    Fixed(u64),

    /// Seed derived from time and system randomness
    #[default]
    Entropy,
}

impl Seed {
    /// Get the concrete seed value
    pub fn resolve(self) -> u64 {
        match self {
            Seed::Fixed(seed) => seed,
            Seed::Entropy => {
                let seed = entropy_seed();
                debug!(seed, "resolved entropy seed");
                seed
            }
        }
    }
}

impl From<Option<u64>> for Seed {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Seed::Entropy, Seed::Fixed)
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Seed::Fixed(seed)
    }
}

fn entropy_seed() -> u64 {
    let wall = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let tick = PROCESS_START.elapsed().as_nanos() as u64;
    let system: u64 = rand::random();

    split_mix(wall ^ split_mix(tick ^ split_mix(system)))
}

/// SplitMix64 finaliser, spreads every input bit over the whole output
pub(crate) fn split_mix(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
