use anyhow::Result;
use md5::{Digest, Md5};
use salsa20::cipher::{KeyIvInit, StreamCipher};
use salsa20::{Key, Nonce, Salsa20};
use zeroize::Zeroizing;

use super::kdf::derive_key;
use super::{DIGEST_LEN, NONCE_LEN, SALT_LEN, TERMINATOR};
use crate::entropy::RandomSource;
use crate::error::StegoError;

/// Encrypt a message for embedding.
///
/// Returns `nonce ‖ Salsa20(digest ‖ message ‖ terminator)`. The digest covers
/// message-plus-terminator so the decryptor can both find the end of the
/// message and verify it in one pass. A stream cipher keeps the ciphertext
/// exactly as long as its input, which the bit-slot arithmetic relies on.
///
/// Messages containing the terminator byte are rejected: the decryptor stops
/// at the first occurrence and would silently lose everything after it.
pub fn encrypt(
    message: &[u8],
    password: &str,
    salt: &[u8; SALT_LEN],
    rng: &mut dyn RandomSource,
) -> Result<Vec<u8>> {
    if message.contains(&TERMINATOR) {
        return Err(StegoError::TerminatorInMessage.into());
    }

    let key = derive_key(password, salt)?;

    let mut body = Zeroizing::new(Vec::with_capacity(message.len() + 1));
    body.extend_from_slice(message);
    body.push(TERMINATOR);
    let digest = Md5::digest(&*body);

    let mut nonce = [0u8; NONCE_LEN];
    rng.fill(&mut nonce)?;

    let mut out = Vec::with_capacity(NONCE_LEN + DIGEST_LEN + body.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&digest);
    out.extend_from_slice(&body);

    let mut cipher = Salsa20::new(Key::from_slice(&*key), Nonce::from_slice(&nonce));
    cipher.apply_keystream(&mut out[NONCE_LEN..]);

    Ok(out)
}

/// Decrypt an extracted ciphertext.
///
/// The input may carry trailing garbage (the extractor reads to the end of the
/// image); the terminator scan finds the true boundary. Every failure mode
/// collapses into [`StegoError::Integrity`] so a caller cannot tell a wrong
/// password from a corrupted or innocent image.
pub fn decrypt(ciphertext: &[u8], password: &str, salt: &[u8; SALT_LEN]) -> Result<Vec<u8>> {
    if ciphertext.len() < NONCE_LEN + DIGEST_LEN {
        return Err(StegoError::Integrity.into());
    }

    let key = derive_key(password, salt)?;

    let nonce = Nonce::from_slice(&ciphertext[..NONCE_LEN]);
    let mut body = Zeroizing::new(ciphertext[NONCE_LEN..].to_vec());
    let mut cipher = Salsa20::new(Key::from_slice(&*key), nonce);
    cipher.apply_keystream(&mut body);

    let (digest, candidate) = body.split_at(DIGEST_LEN);
    let end = match candidate.iter().position(|&b| b == TERMINATOR) {
        Some(i) => i,
        None => return Err(StegoError::Integrity.into()),
    };

    if Md5::digest(&candidate[..=end]).as_slice() != digest {
        return Err(StegoError::Integrity.into());
    }

    Ok(candidate[..end].to_vec())
}
