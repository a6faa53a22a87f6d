//! LSB steganography: bit-slot addressing, the offset header, and blob
//! placement inside a flat RGB channel buffer.

pub mod bits;
pub mod embed;

pub use embed::{HEADER_BITS, embed, extract};
