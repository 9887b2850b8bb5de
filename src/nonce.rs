//! Nonce supply for the envelope codec.
//!
//! Two sources: [`RandomNonce`] draws a fresh 24-byte value from the system
//! RNG on every call; [`CounterNonce`] holds a 192-bit big-endian counter
//! that callers advance explicitly, for protocols that need monotonic,
//! collision-free nonces and for reproducible tests.

use parking_lot::Mutex;

use crate::error::SboxError;
use crate::types::NONCE_LENGTH;

/// A supplier of 24-byte nonces.
///
/// `produce` never mutates the source. Sources with internal state expose
/// an explicit `advance` so the caller controls when the value moves on
/// (peek-then-advance).
pub trait NonceSource {
    /// The source's current 24-byte nonce value.
    fn produce(&self) -> Result<[u8; NONCE_LENGTH], SboxError>;

    /// Move a stateful source to its next value. No-op for stateless sources.
    fn advance(&self) {}
}

/// Stateless source: every `produce` is a fresh draw from the secure
/// random source. Entropy failure is propagated as [`SboxError::RngFailed`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn produce(&self) -> Result<[u8; NONCE_LENGTH], SboxError> {
        let mut nonce = [0u8; NONCE_LENGTH];
        getrandom::getrandom(&mut nonce).map_err(|e| SboxError::RngFailed(e.to_string()))?;
        Ok(nonce)
    }
}

/// Monotonic counter source.
///
/// The counter is a 192-bit unsigned value serialized big-endian across the
/// whole nonce field, left-padded with zeros. `produce` reads the current
/// value without advancing it; `advance` increments by one under a lock, so
/// N concurrent advances from K always land on exactly K+N.
///
/// Nonce uniqueness under a given key is the caller's responsibility: a
/// counter must not be reset or shared across keys in a way that replays
/// values.
#[derive(Debug)]
pub struct CounterNonce {
    counter: Mutex<[u8; NONCE_LENGTH]>,
}

impl CounterNonce {
    /// Counter starting at zero.
    pub fn new() -> Self {
        Self {
            counter: Mutex::new([0u8; NONCE_LENGTH]),
        }
    }

    /// Build a counter from a big-endian magnitude of at most 24 bytes.
    ///
    /// Leading zero bytes are accepted and denote the same value as the
    /// unpadded encoding. Longer input fails with
    /// [`SboxError::InvalidLength`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SboxError> {
        if bytes.len() > NONCE_LENGTH {
            return Err(SboxError::InvalidLength { got: bytes.len() });
        }
        let mut counter = [0u8; NONCE_LENGTH];
        counter[NONCE_LENGTH - bytes.len()..].copy_from_slice(bytes);
        Ok(Self {
            counter: Mutex::new(counter),
        })
    }
}

impl Default for CounterNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceSource for CounterNonce {
    /// Snapshot of the current counter value. The lock guarantees the read
    /// is consistent with respect to concurrent `advance` calls.
    fn produce(&self) -> Result<[u8; NONCE_LENGTH], SboxError> {
        Ok(*self.counter.lock())
    }

    /// Increment the counter by one, big-endian with carry.
    fn advance(&self) {
        let mut counter = self.counter.lock();
        for byte in counter.iter_mut().rev() {
            let (next, carry) = byte.overflowing_add(1);
            *byte = next;
            if !carry {
                return;
            }
        }
        // Carry out of the top byte: 2^192 advances. Refuse to wrap back to
        // zero, which would reuse every nonce under the current key.
        panic!("counter nonce exhausted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn new_counter_starts_at_zero() {
        let nonce = CounterNonce::new();
        assert_eq!(nonce.produce().unwrap(), [0u8; NONCE_LENGTH]);
    }

    #[test]
    fn produce_does_not_advance() {
        let nonce = CounterNonce::new();
        nonce.advance();
        assert_eq!(nonce.produce().unwrap(), nonce.produce().unwrap());
    }

    #[test]
    fn advance_increments_low_byte() {
        let nonce = CounterNonce::new();
        nonce.advance();
        let mut expected = [0u8; NONCE_LENGTH];
        expected[NONCE_LENGTH - 1] = 1;
        assert_eq!(nonce.produce().unwrap(), expected);
    }

    #[test]
    fn advance_carries_across_bytes() {
        let nonce = CounterNonce::from_bytes(&[0xff]).unwrap();
        nonce.advance();
        let mut expected = [0u8; NONCE_LENGTH];
        expected[NONCE_LENGTH - 2] = 0x01;
        assert_eq!(nonce.produce().unwrap(), expected);
    }

    #[test]
    fn advanced_counter_matches_from_bytes() {
        let advanced = CounterNonce::new();
        for _ in 0..1337 {
            advanced.advance();
        }
        let constructed = CounterNonce::from_bytes(&hex::decode("0539").unwrap()).unwrap();
        assert_eq!(
            advanced.produce().unwrap(),
            constructed.produce().unwrap()
        );
    }

    #[test]
    fn leading_zeros_denote_same_value() {
        let padded = CounterNonce::from_bytes(&hex::decode("000000000539").unwrap()).unwrap();
        let minimal = CounterNonce::from_bytes(&hex::decode("0539").unwrap()).unwrap();
        assert_eq!(padded.produce().unwrap(), minimal.produce().unwrap());
    }

    #[test]
    fn from_bytes_accepts_full_width() {
        let bytes = [0xABu8; NONCE_LENGTH];
        let nonce = CounterNonce::from_bytes(&bytes).unwrap();
        assert_eq!(nonce.produce().unwrap(), bytes);
    }

    #[test]
    fn from_bytes_accepts_empty() {
        let nonce = CounterNonce::from_bytes(&[]).unwrap();
        assert_eq!(nonce.produce().unwrap(), [0u8; NONCE_LENGTH]);
    }

    #[test]
    fn from_bytes_rejects_oversized_input() {
        let err = CounterNonce::from_bytes(&[0u8; 25]).unwrap_err();
        assert!(matches!(err, SboxError::InvalidLength { got: 25 }));
    }

    #[test]
    fn concurrent_advances_are_not_lost() {
        let nonce = Arc::new(CounterNonce::new());
        let count = 1337;

        let handles: Vec<_> = (0..count)
            .map(|_| {
                let nonce = Arc::clone(&nonce);
                thread::spawn(move || nonce.advance())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let expected = CounterNonce::from_bytes(&hex::decode("0539").unwrap()).unwrap();
        assert_eq!(nonce.produce().unwrap(), expected.produce().unwrap());
    }

    #[test]
    fn random_nonces_differ() {
        let source = RandomNonce;
        let a = source.produce().unwrap();
        let b = source.produce().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn advance_is_a_noop_for_random() {
        let source = RandomNonce;
        source.advance();
        assert_eq!(source.produce().unwrap().len(), NONCE_LENGTH);
    }
}
