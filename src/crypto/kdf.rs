use anyhow::{Result, anyhow};
use scrypt::Params;
use zeroize::Zeroizing;

use super::{KEY_LEN, SALT_LEN};

// scrypt cost parameters, fixed by the embedded format: the blob stores no
// parameter block, so hide and reveal must agree on these by convention.
const LOG_N: u8 = 14; // N = 2^14
const R: u32 = 8;
const P: u32 = 1;

/// Derive the 32-byte encryption key from a password and salt.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    let params = Params::new(LOG_N, R, P, KEY_LEN)
        .map_err(|e| anyhow!("failed to construct scrypt params: {e}"))?;

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    scrypt::scrypt(password.as_bytes(), salt, &params, &mut *key)
        .map_err(|e| anyhow!("scrypt key derivation failed: {e}"))?;

    Ok(key)
}
