//! Envelope wire-format constants.
//!
//! Packed envelope layout:
//! [4 bytes: magic "sbox"][4 bytes: version u32 BE][24 bytes: nonce][N bytes: ciphertext + tag]

/// Magic prefix identifying a packed envelope.
pub const MAGIC: [u8; 4] = *b"sbox";

/// Length of the magic prefix in bytes.
pub const MAGIC_LENGTH: usize = MAGIC.len();

/// Length of the big-endian version field in bytes.
pub const VERSION_LENGTH: usize = 4;

/// XChaCha20-Poly1305 nonce length in bytes (192 bits).
pub const NONCE_LENGTH: usize = 24;

/// Poly1305 authentication tag length in bytes (128 bits).
pub const TAG_LENGTH: usize = 16;

/// Secret key length in bytes (256 bits).
pub const KEY_LENGTH: usize = 32;

/// Smallest well-formed envelope: full header plus the tag of an empty payload.
pub const MIN_ENVELOPE_LENGTH: usize =
    MAGIC_LENGTH + VERSION_LENGTH + NONCE_LENGTH + TAG_LENGTH;
