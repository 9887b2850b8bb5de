//! Versioned authenticated-encryption envelopes.
//!
//! Seals data with XChaCha20-Poly1305 and packs it into a self-describing
//! blob:
//!
//! [4 bytes: magic "sbox"][4 bytes: version u32 BE][24 bytes: nonce][N bytes: ciphertext + tag]
//!
//! The version is a caller-defined hint carried verbatim in the header and
//! never inspected by the codec. Nonces come either from the system RNG
//! ([`RandomNonce`], which [`encrypt`] uses internally) or from an explicit
//! monotonic counter ([`CounterNonce`]) for protocols that need
//! deterministic, collision-free nonces.
//!
//! Key derivation, storage and rotation are out of scope; callers own the
//! 32-byte [`Key`].

pub mod envelope;
pub mod error;
pub mod key;
pub mod nonce;
pub mod types;

pub use envelope::{decrypt, encrypt, encrypt_with_nonce};
pub use error::SboxError;
pub use key::Key;
pub use nonce::{CounterNonce, NonceSource, RandomNonce};
pub use types::{KEY_LENGTH, MAGIC, MIN_ENVELOPE_LENGTH, NONCE_LENGTH, TAG_LENGTH};
