//! Bit-slot addressing over a flat RGB channel buffer.
//!
//! A "slot" is one channel's least-significant bit. Slots are numbered in
//! pixel order, R then G then B within each pixel, so an image with N pixels
//! has 3N slots. Header and payload use the same addressing.

/// Channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Number of embeddable bit slots in the buffer.
pub fn capacity(channels: &[u8]) -> usize {
    channels.len()
}

/// Maps a bit slot to its (pixel, channel) coordinate.
pub fn slot(bit_index: usize) -> (usize, usize) {
    (bit_index / CHANNELS, bit_index % CHANNELS)
}

/// Writes `bit` into the low bit of the addressed channel. The upper seven
/// bits are untouched.
pub fn write_bit(channels: &mut [u8], bit_index: usize, bit: u8) {
    let (pixel, channel) = slot(bit_index);
    let value = &mut channels[pixel * CHANNELS + channel];
    *value = (*value & !1) | (bit & 1);
}

/// Reads the low bit of the addressed channel.
pub fn read_bit(channels: &[u8], bit_index: usize) -> u8 {
    let (pixel, channel) = slot(bit_index);
    channels[pixel * CHANNELS + channel] & 1
}
