//! SHA-2 digests and HMAC-SHA512.
//!
//! Every call builds its own hasher on the stack, so no digest state can
//! carry over from one computation to the next.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

use crate::error::CryptoError;

type HmacSha512 = Hmac<Sha512>;

/// Output size of [`sha256`] in bytes.
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of [`sha512`] and [`hmac_sha512`] in bytes.
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// SHA-256 of `bytes`.
pub fn sha256(bytes: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    let mut output = [0u8; SHA256_OUTPUT_SIZE];
    output.copy_from_slice(&Sha256::digest(bytes));
    output
}

/// SHA-512 of `bytes`.
pub fn sha512(bytes: &[u8]) -> [u8; SHA512_OUTPUT_SIZE] {
    let mut output = [0u8; SHA512_OUTPUT_SIZE];
    output.copy_from_slice(&Sha512::digest(bytes));
    output
}

/// HMAC-SHA512 of `data` under `key`.
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; SHA512_OUTPUT_SIZE], CryptoError> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| CryptoError::engine(format!("HMAC-SHA512 init: {e}")))?;
    mac.update(data);

    let mut output = [0u8; SHA512_OUTPUT_SIZE];
    output.copy_from_slice(&mac.finalize().into_bytes());
    Ok(output)
}
