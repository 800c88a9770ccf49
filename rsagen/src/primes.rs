use anyhow::{bail, Result};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;

/// Byte width of each prime candidate pulled from the stream.
pub const PRIME_SIZE_BYTES: usize = 128;

/// Miller-Rabin witness rounds.
const K_ROUNDS: usize = 40;

/// Extracts two prime numbers from a generated byte stream.
///
/// Candidates are read by strided indexing: every `len / 128`-th byte
/// starting at offset 0 for the first, and at offset `len % 128` for the
/// second. Each candidate is then walked upward to the next probable
/// prime.
pub struct PrimeGen<'a> {
    stream: &'a [u8],
}

impl<'a> PrimeGen<'a> {
    pub fn new(stream: &'a [u8]) -> Result<Self> {
        if stream.len() < PRIME_SIZE_BYTES {
            bail!(
                "stream too short: need at least {} bytes, got {}",
                PRIME_SIZE_BYTES,
                stream.len()
            );
        }
        Ok(Self { stream })
    }

    fn step(&self) -> usize {
        self.stream.len() / PRIME_SIZE_BYTES
    }

    fn shift(&self) -> usize {
        self.stream.len() % PRIME_SIZE_BYTES
    }

    /// Strided candidate: every `step`-th byte from `start`, big endian.
    fn candidate(&self, start: usize) -> BigUint {
        let bytes: Vec<u8> = self.stream[start..]
            .iter()
            .step_by(self.step())
            .take(PRIME_SIZE_BYTES)
            .copied()
            .collect();
        BigUint::from_bytes_be(&bytes)
    }

    pub fn generate(&self) -> (BigUint, BigUint) {
        let p = next_prime_from(self.candidate(0));
        let q = next_prime_from(self.candidate(self.shift()));
        (p, q)
    }
}

/// Walk odd numbers upward from `n` until one passes the primality test.
pub fn next_prime_from(mut n: BigUint) -> BigUint {
    if !n.bit(0) {
        n += 1u32;
    }
    while !is_probable_prime(&n) {
        n += 2u32;
    }
    n
}

/// Miller-Rabin probabilistic primality test with random witnesses.
pub fn is_probable_prime(n: &BigUint) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);

    if *n == two || *n == three {
        return true;
    }
    if *n < two || !n.bit(0) {
        return false;
    }

    // Write n - 1 as 2^r * d with d odd
    let n_minus_one = n - &one;
    let r = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> r;

    let mut rng = rand::thread_rng();
    'witness: for _ in 0..K_ROUNDS {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..r {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
