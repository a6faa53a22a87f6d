use anyhow::Result;

use super::bits::{capacity, read_bit, write_bit};
use crate::entropy::{RandomSource, random_below};
use crate::error::StegoError;

/// Slots 0..24 hold the start offset as a 24-bit big-endian integer.
pub const HEADER_BITS: usize = 24;

/// Largest offset the header can encode.
const MAX_START: usize = (1 << HEADER_BITS) - 1;

/// Embeds `blob` at a randomly chosen offset and records the offset in the
/// header slots.
///
/// The offset is drawn uniformly from `[HEADER_BITS, capacity − blob_bits]`
/// so the blob can never overwrite its own header, and is capped at what the
/// 24-bit header can encode. The buffer is only mutated after the capacity
/// check passes.
pub fn embed(channels: &mut [u8], blob: &[u8], rng: &mut dyn RandomSource) -> Result<()> {
    let capacity_bits = capacity(channels);
    let blob_bits = blob.len() * 8;
    let usable_bits = capacity_bits.saturating_sub(HEADER_BITS);

    if blob_bits > usable_bits {
        return Err(StegoError::PayloadTooLarge {
            payload_bits: blob_bits,
            capacity_bits: usable_bits,
        }
        .into());
    }

    let span = (usable_bits - blob_bits).min(MAX_START - HEADER_BITS);
    let start = HEADER_BITS + random_below(rng, span as u32 + 1)? as usize;

    for i in 0..HEADER_BITS {
        write_bit(channels, i, ((start >> (HEADER_BITS - 1 - i)) & 1) as u8);
    }

    for (i, byte) in blob.iter().enumerate() {
        for bit in 0..8 {
            write_bit(channels, start + i * 8 + bit, byte >> (7 - bit));
        }
    }

    Ok(())
}

/// Reads the blob back: decode the header, then collect every slot from the
/// offset to the end of the buffer into MSB-first bytes.
///
/// Best-effort by design. The result is the embedded blob followed by the
/// image's own low-bit noise (a trailing partial byte is dropped); the codec's
/// terminator scan finds the true end. An offset pointing past the buffer,
/// which a clean image can produce, yields an empty vector.
pub fn extract(channels: &[u8]) -> Vec<u8> {
    let capacity_bits = capacity(channels);
    if capacity_bits < HEADER_BITS {
        return Vec::new();
    }

    let mut start = 0usize;
    for i in 0..HEADER_BITS {
        start = (start << 1) | read_bit(channels, i) as usize;
    }
    if start >= capacity_bits {
        return Vec::new();
    }

    let mut bytes = Vec::with_capacity((capacity_bits - start) / 8);
    let mut acc = 0u8;
    let mut filled = 0;
    for i in start..capacity_bits {
        acc = (acc << 1) | read_bit(channels, i);
        filled += 1;
        if filled == 8 {
            bytes.push(acc);
            acc = 0;
            filled = 0;
        }
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ScriptedRandom, TestRandom};

    fn decode_header(channels: &[u8]) -> usize {
        let mut start = 0usize;
        for i in 0..HEADER_BITS {
            start = (start << 1) | read_bit(channels, i) as usize;
        }
        start
    }

    #[test]
    fn zero_draw_places_blob_right_after_header() {
        let mut channels = vec![0xFFu8; 300];
        let mut rng = ScriptedRandom::new(&[0, 0, 0, 0]);

        embed(&mut channels, &[0b1010_0001], &mut rng).unwrap();

        assert_eq!(decode_header(&channels), HEADER_BITS);
        let placed: Vec<u8> = (0..8)
            .map(|i| read_bit(&channels, HEADER_BITS + i))
            .collect();
        assert_eq!(placed, vec![1, 0, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn header_reproduces_chosen_offset() {
        let mut channels = vec![0x80u8; 600];
        let mut rng = TestRandom::new(11);

        embed(&mut channels, b"abc", &mut rng).unwrap();

        let start = decode_header(&channels);
        assert!(start >= HEADER_BITS);
        assert!(start + 3 * 8 <= capacity(&channels));
    }

    #[test]
    fn offset_never_lands_in_header_slots() {
        for seed in 0..50 {
            let mut channels = vec![0u8; 300];
            let mut rng = TestRandom::new(seed);
            embed(&mut channels, b"x", &mut rng).unwrap();
            assert!(decode_header(&channels) >= HEADER_BITS, "seed {seed}");
        }
    }

    #[test]
    fn embed_extract_roundtrip() {
        let mut channels = vec![0x55u8; 900];
        let mut rng = TestRandom::new(12);
        let blob = b"the quick brown fox";

        embed(&mut channels, blob, &mut rng).unwrap();

        let raw = extract(&channels);
        assert_eq!(&raw[..blob.len()], blob);
    }

    #[test]
    fn exact_fit_succeeds() {
        // 16 pixels: 48 slots, 24 usable after the header = exactly 3 bytes.
        let mut channels = vec![0u8; 48];
        let mut rng = TestRandom::new(13);

        embed(&mut channels, &[1, 2, 3], &mut rng).unwrap();

        let raw = extract(&channels);
        assert_eq!(raw, vec![1, 2, 3]);
    }

    #[test]
    fn one_byte_over_capacity_fails() {
        let mut channels = vec![0u8; 48];
        let mut rng = TestRandom::new(14);

        let err = embed(&mut channels, &[1, 2, 3, 4], &mut rng).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StegoError>(),
            Some(&StegoError::PayloadTooLarge {
                payload_bits: 32,
                capacity_bits: 24,
            })
        );
    }

    #[test]
    fn failed_embed_leaves_buffer_untouched() {
        let mut channels = vec![0xA5u8; 48];
        let mut rng = TestRandom::new(15);

        assert!(embed(&mut channels, &[0u8; 10], &mut rng).is_err());
        assert_eq!(channels, vec![0xA5u8; 48]);
    }

    #[test]
    fn extract_with_wild_offset_returns_nothing() {
        // all-ones header decodes to an offset far past a small image
        let channels = vec![0xFFu8; 90];
        assert!(extract(&channels).is_empty());
    }

    #[test]
    fn embed_only_touches_low_bits() {
        let mut channels = vec![0xAAu8; 300];
        let before = channels.clone();
        let mut rng = TestRandom::new(16);

        embed(&mut channels, b"low bits only", &mut rng).unwrap();

        for (a, b) in before.iter().zip(&channels) {
            assert_eq!(a & !1, b & !1);
        }
    }
}
