//! Envelope codec: seal and open versioned encrypted blobs.
//!
//! Wire format:
//! [4 bytes: magic "sbox"][4 bytes: version u32 BE][24 bytes: nonce][N bytes: ciphertext + tag]
//!
//! The version is a caller-supplied hint (e.g. a schema version) carried
//! verbatim in the header; it is never inspected or validated here. The
//! authentication tag covers only the ciphertext — magic and version are
//! unauthenticated framing, so the version must be treated as a routing
//! hint, never as a trusted value.

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};

use crate::error::SboxError;
use crate::key::Key;
use crate::nonce::{NonceSource, RandomNonce};
use crate::types::{MAGIC, MAGIC_LENGTH, MIN_ENVELOPE_LENGTH, NONCE_LENGTH, VERSION_LENGTH};

/// Encrypt `data` under a fresh random nonce and pack it into an envelope.
///
/// A failure of the random source aborts the call; no partial envelope is
/// produced.
pub fn encrypt(version: u32, key: &Key, data: &[u8]) -> Result<Vec<u8>, SboxError> {
    let nonce = RandomNonce.produce()?;
    encrypt_with_nonce(version, key, &nonce, data)
}

/// Encrypt `data` under a caller-supplied nonce and pack it into an envelope.
///
/// The nonce must never repeat under the same key — the cipher cannot
/// detect reuse, and a repeat silently breaks confidentiality. Callers that
/// need deterministic nonces should take them from a
/// [`CounterNonce`](crate::nonce::CounterNonce).
pub fn encrypt_with_nonce(
    version: u32,
    key: &Key,
    nonce: &[u8; NONCE_LENGTH],
    data: &[u8],
) -> Result<Vec<u8>, SboxError> {
    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());
    let ciphertext = cipher
        .encrypt(XNonce::from_slice(nonce), data)
        .map_err(|e| SboxError::EncryptionFailed(e.to_string()))?;

    let mut packed =
        Vec::with_capacity(MAGIC_LENGTH + VERSION_LENGTH + NONCE_LENGTH + ciphertext.len());
    packed.extend_from_slice(&MAGIC);
    packed.extend_from_slice(&version.to_be_bytes());
    packed.extend_from_slice(nonce);
    packed.extend_from_slice(&ciphertext);
    Ok(packed)
}

/// Unpack an envelope and decrypt its payload, returning the plaintext and
/// the version hint exactly as stored.
///
/// Structural gates run before any cryptographic work: a buffer shorter
/// than [`MIN_ENVELOPE_LENGTH`] fails with [`SboxError::InvalidHeader`], a
/// wrong magic prefix with [`SboxError::InvalidMagic`]. Every
/// authentication failure after that — wrong key, tampered nonce,
/// ciphertext or tag, truncated ciphertext — is the uniform
/// [`SboxError::CouldNotDecrypt`], with no indication of which check
/// failed.
pub fn decrypt(key: &Key, packed: &[u8]) -> Result<(Vec<u8>, u32), SboxError> {
    if packed.len() < MIN_ENVELOPE_LENGTH {
        return Err(SboxError::InvalidHeader);
    }
    if packed[..MAGIC_LENGTH] != MAGIC {
        return Err(SboxError::InvalidMagic);
    }

    let version = u32::from_be_bytes(
        packed[MAGIC_LENGTH..MAGIC_LENGTH + VERSION_LENGTH]
            .try_into()
            .expect("slice is exactly 4 bytes after length check"),
    );

    let nonce_offset = MAGIC_LENGTH + VERSION_LENGTH;
    let nonce = &packed[nonce_offset..nonce_offset + NONCE_LENGTH];
    let ciphertext = &packed[nonce_offset + NONCE_LENGTH..];

    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());
    let plaintext = cipher
        .decrypt(XNonce::from_slice(nonce), ciphertext)
        .map_err(|_| SboxError::CouldNotDecrypt)?;

    Ok((plaintext, version))
}
