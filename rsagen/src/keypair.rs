use crate::primes::PrimeGen;
use anyhow::{anyhow, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};
use serde::Serialize;

/// Fixed public exponent.
pub const EXPONENT: u32 = 65_537;

/// Private key components, hex encoded big endian.
#[derive(Debug, Serialize)]
pub struct PrivateKeyDoc {
    pub n: String,
    pub e: String,
    pub d: String,
    pub p: String,
    pub q: String,
}

/// Public key components, hex encoded big endian.
#[derive(Debug, Serialize)]
pub struct PublicKeyDoc {
    pub n: String,
    pub e: String,
}

/// Derives an RSA key pair from a generated byte stream.
///
/// Extracts two prime candidates from the stream, refines them to primes,
/// and computes the private exponent `d = e⁻¹ mod (p-1)(q-1)`.
pub struct KeyGen<'a> {
    primes: PrimeGen<'a>,
}

impl<'a> KeyGen<'a> {
    pub fn new(stream: &'a [u8]) -> Result<Self> {
        Ok(Self {
            primes: PrimeGen::new(stream)?,
        })
    }

    pub fn generate(&self) -> Result<(PrivateKeyDoc, PublicKeyDoc)> {
        let (p, q) = self.primes.generate();
        let n = &p * &q;
        let e = BigUint::from(EXPONENT);
        let totient = (&p - 1u32) * (&q - 1u32);
        let d = modular_inverse(&e, &totient)
            .ok_or_else(|| anyhow!("public exponent {} is not invertible mod phi(n)", EXPONENT))?;

        let private = PrivateKeyDoc {
            n: to_hex(&n),
            e: to_hex(&e),
            d: to_hex(&d),
            p: to_hex(&p),
            q: to_hex(&q),
        };
        let public = PublicKeyDoc {
            n: to_hex(&n),
            e: to_hex(&e),
        };
        Ok((private, public))
    }
}

fn to_hex(value: &BigUint) -> String {
    hex::encode(value.to_bytes_be())
}

/// Compute `e⁻¹ mod m` with the iterative extended Euclidean algorithm.
///
/// Returns `None` when `gcd(e, m) != 1`, i.e. the inverse does not exist.
pub fn modular_inverse(e: &BigUint, m: &BigUint) -> Option<BigUint> {
    // Invariant: s0 * e ≡ r0 (mod m) and s1 * e ≡ r1 (mod m)
    let mut r0 = BigInt::from(e.clone());
    let mut r1 = BigInt::from(m.clone());
    let mut s0 = BigInt::one();
    let mut s1 = BigInt::zero();

    while !r1.is_zero() {
        let k = &r0 / &r1;
        let r2 = &r0 - &k * &r1;
        r0 = std::mem::replace(&mut r1, r2);
        let s2 = &s0 - &k * &s1;
        s0 = std::mem::replace(&mut s1, s2);
    }

    if !r0.is_one() {
        return None;
    }

    let modulus = BigInt::from(m.clone());
    let mut inverse = s0 % &modulus;
    if inverse.is_negative() {
        inverse += &modulus;
    }
    inverse.to_biguint()
}
