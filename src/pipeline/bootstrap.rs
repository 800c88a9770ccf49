use crate::error::{Result, SeedstreamError};
use digest::{ExtendableOutput, Update, XofReader};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;
use sha3::Shake256;

type HmacSha256 = Hmac<Sha256>;

/// Length of the bootstrap seed, and of every reseed value drawn at the
/// end of an iteration.
pub const SEED_LEN: usize = 64;

/// Derive the 64-byte bootstrap seed from the password.
///
/// The confusion string doubles as the KDF salt, and the chain's iteration
/// count doubles as the PBKDF2 round count. A single knob, two effects.
pub fn bootstrap_seed(password: &[u8], pattern: &[u8], iterations: u32) -> Result<[u8; SEED_LEN]> {
    if iterations == 0 {
        return Err(SeedstreamError::InvalidIterationCount);
    }

    let mut seed = [0u8; SEED_LEN];
    pbkdf2::<HmacSha256>(password, pattern, iterations, &mut seed)
        .expect("HMAC can take key of any size");
    Ok(seed)
}

/// Hash the confusion string into the stopping-condition target.
///
/// SHAKE256 squeezed to the input's own length: the target keeps the
/// pattern's size but none of its byte values.
pub fn transform_pattern(pattern: &[u8]) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(pattern);

    let mut target = vec![0u8; pattern.len()];
    hasher.finalize_xof().read(&mut target);
    target
}
