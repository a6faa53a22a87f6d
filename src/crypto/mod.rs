//! Cryptographic layer: scrypt key derivation and the Salsa20 message codec.

pub mod cipher;
pub mod kdf;

pub use cipher::{decrypt, encrypt};
pub use kdf::derive_key;

/// Length of the salt stored ahead of the ciphertext (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the Salsa20 nonce (8 bytes).
pub const NONCE_LEN: usize = 8;
/// Length of the derived encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the MD5 integrity digest (16 bytes).
pub const DIGEST_LEN: usize = 16;
/// End-of-text marker appended to every message before encryption. The
/// decryptor scans for it because the embedded blob carries no length field.
pub const TERMINATOR: u8 = 0x04;
