//! Deterministic random sources and image builders shared by unit tests.

use anyhow::{Result, bail};

use crate::entropy::RandomSource;
use image::RgbImage;

/// Infinite deterministic byte stream (64-bit LCG, top byte per step).
pub struct TestRandom(u64);

impl TestRandom {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }
}

impl RandomSource for TestRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        for b in buf {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            *b = (self.0 >> 56) as u8;
        }
        Ok(())
    }
}

/// Replays an exact byte sequence, erroring when it runs out.
pub struct ScriptedRandom {
    bytes: Vec<u8>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.pos + buf.len() > self.bytes.len() {
            bail!("scripted random source exhausted");
        }
        buf.copy_from_slice(&self.bytes[self.pos..self.pos + buf.len()]);
        self.pos += buf.len();
        Ok(())
    }
}

/// Builds a patterned carrier image with non-trivial channel values.
pub fn test_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            (x * 7 + y * 3) as u8,
            (x * 5 + y * 11) as u8,
            ((x ^ y) * 13) as u8,
        ])
    })
}
