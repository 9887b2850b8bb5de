use thiserror::Error;

#[derive(Debug, Error)]
pub enum SboxError {
    /// Envelope shorter than the minimum header-plus-tag length.
    #[error("Invalid envelope header")]
    InvalidHeader,

    /// Header present but the magic prefix does not match.
    #[error("Invalid magic")]
    InvalidMagic,

    /// AEAD verification failed. Deliberately carries no detail: wrong key,
    /// tampered nonce, ciphertext or tag all report identically.
    #[error("Could not decrypt")]
    CouldNotDecrypt,

    /// Counter constructed from more bytes than fit the nonce field.
    #[error("Invalid counter length: at most 24 bytes, got {got}")]
    InvalidLength { got: usize },

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
