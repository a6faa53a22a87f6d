//! Hide an encrypted message in the least-significant bits of an RGB image.
//!
//! [`hide`] encrypts a message with a password-derived key and scatters the
//! result into the low bits of a pixel grid; [`reveal`] finds and decrypts it
//! again. The embedded layout, front to back in bit slots:
//!
//! ```text
//! slots 0..24                 start offset, 24-bit big-endian
//! slots start..start+128      salt (16 bytes)
//! slots onward                nonce (8) ‖ Salsa20(digest (16) ‖ message ‖ 0x04)
//! ```
//!
//! There is no length field; decryption scans for the terminator byte and
//! verifies the digest, so a wrong password and an innocent image are
//! indistinguishable.

pub mod carrier;
mod crypto;
mod entropy;
mod error;
mod stego;
#[cfg(test)]
pub(crate) mod testutil;

pub use crate::entropy::{OsRandom, RandomSource};
pub use crate::error::StegoError;

use anyhow::Result;
use image::RgbImage;

/// Fixed bytes added around a message before embedding:
/// salt + nonce + digest + terminator.
pub const OVERHEAD: usize = crypto::SALT_LEN + crypto::NONCE_LEN + crypto::DIGEST_LEN + 1;

/// Encrypts `message` with `password` and embeds it in `image`.
///
/// The salt, nonce, and start offset are all drawn from `rng`; pass
/// [`OsRandom`] outside of tests. Returns the mutated image. Fails with
/// [`StegoError::PayloadTooLarge`] before touching any pixel if the message
/// does not fit, and with [`StegoError::TerminatorInMessage`] if the message
/// contains byte 0x04.
pub fn hide(
    mut image: RgbImage,
    message: &[u8],
    password: &str,
    rng: &mut dyn RandomSource,
) -> Result<RgbImage> {
    let mut salt = [0u8; crypto::SALT_LEN];
    rng.fill(&mut salt)?;

    let ciphertext = crypto::encrypt(message, password, &salt, rng)?;

    let mut blob = Vec::with_capacity(crypto::SALT_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&ciphertext);

    stego::embed(&mut image, &blob, rng)?;
    Ok(image)
}

/// Extracts and decrypts the message hidden in `image`.
///
/// Fails with [`StegoError::Integrity`] for a wrong password, a corrupted
/// image, or an image that never held a message.
pub fn reveal(image: &RgbImage, password: &str) -> Result<Vec<u8>> {
    let raw = stego::extract(image);
    if raw.len() < OVERHEAD {
        return Err(StegoError::Integrity.into());
    }

    let salt: [u8; crypto::SALT_LEN] = raw[..crypto::SALT_LEN].try_into()?;
    crypto::decrypt(&raw[crypto::SALT_LEN..], password, &salt)
}
