//! Secret key for sealing and opening envelopes.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::SboxError;
use crate::types::KEY_LENGTH;

/// 256-bit secret key for the envelope cipher.
///
/// Key material is zeroized on drop and never printed by `Debug`. This
/// crate does not persist or log keys; storage and rotation belong to the
/// caller.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_LENGTH]);

impl Key {
    /// Generate a fresh key from the system's secure random source.
    ///
    /// Fails only if the entropy source fails; the failure is propagated,
    /// never substituted with a weaker source.
    pub fn generate() -> Result<Self, SboxError> {
        let mut bytes = [0u8; KEY_LENGTH];
        getrandom::getrandom(&mut bytes).map_err(|e| SboxError::RngFailed(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Create a key from caller-supplied bytes.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(..)")
    }
}
