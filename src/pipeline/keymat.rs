use crate::error::{Result, SeedstreamError};
use crate::pipeline::bootstrap::SEED_LEN;

/// Cipher key width.
pub const KEY_LEN: usize = 32;

/// Feedback register width: two AES blocks side by side.
pub const REGISTER_LEN: usize = 32;

/// One iteration's cipher inputs, split out of a 64-byte seed.
///
/// The first key material comes from the bootstrap seed; every later one
/// comes from the reseed value drawn at the end of the previous iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    pub key: [u8; KEY_LEN],
    pub register: [u8; REGISTER_LEN],
}

impl KeyMaterial {
    /// De-interleave a 64-byte seed: bytes at even positions form the key,
    /// bytes at odd positions form the register, both in original order.
    /// Any other seed length is rejected.
    pub fn split(seed: &[u8]) -> Result<Self> {
        if seed.len() != SEED_LEN {
            return Err(SeedstreamError::InvalidSeedLength(seed.len()));
        }

        let mut key = [0u8; KEY_LEN];
        let mut register = [0u8; REGISTER_LEN];
        for (i, pair) in seed.chunks_exact(2).enumerate() {
            key[i] = pair[0];
            register[i] = pair[1];
        }

        Ok(Self { key, register })
    }

    /// Re-interleave key and register back into the seed they came from.
    /// Exact inverse of [`KeyMaterial::split`].
    pub fn interleave(&self) -> [u8; SEED_LEN] {
        let mut seed = [0u8; SEED_LEN];
        for i in 0..KEY_LEN {
            seed[2 * i] = self.key[i];
            seed[2 * i + 1] = self.register[i];
        }
        seed
    }
}
