//! Hashing scheme mapping byte strings to ring positions.
//!
//! A position is a value in the 32-bit hash space `0..=u32::MAX`. The ring
//! never stores which positions belong to which node; it recomputes them at
//! removal time, so a single scheme must serve a ring for its whole lifetime.
//! The scheme is held by the ring itself, which makes that stability
//! structural rather than a calling convention.

/// A deterministic function from a byte sequence to a 32-bit ring position.
///
/// Implementations must be pure: the same input yields the same position on
/// every call and across process restarts. Distribution quality is the
/// implementation's own trade-off; the ring only requires determinism.
pub trait RingHasher {
    /// Hash `input` to a position in the hash space.
    fn position(&self, input: &[u8]) -> u32;
}

impl<F> RingHasher for F
where
    F: Fn(&[u8]) -> u32,
{
    fn position(&self, input: &[u8]) -> u32 {
        self(input)
    }
}

/// CRC32 (IEEE) positions, the default scheme.
///
/// Chosen for speed over collision resistance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32Hasher;

impl RingHasher for Crc32Hasher {
    fn position(&self, input: &[u8]) -> u32 {
        crc32fast::hash(input)
    }
}
