//! Random byte provider behind a trait so tests can inject fixed bytes.

use anyhow::{Result, anyhow};

/// Source of random bytes for salts, nonces, and the embedding offset.
pub trait RandomSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Production source backed by the operating system generator.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf).map_err(|_| anyhow!("OS random generator unavailable"))
    }
}

/// Uniform integer in `[0, bound)` via rejection sampling (no modulo bias).
pub fn random_below(rng: &mut dyn RandomSource, bound: u32) -> Result<u32> {
    debug_assert!(bound > 0);
    let limit = (u32::MAX / bound) * bound;
    loop {
        let mut buf = [0u8; 4];
        rng.fill(&mut buf)?;
        let value = u32::from_be_bytes(buf);
        if value < limit {
            return Ok(value % bound);
        }
    }
}
