//! Arbitrary-precision non-negative integers.
//!
//! [`BigNum`] wraps [`num_bigint_dig::BigUint`] and exposes the operations
//! protocols built on this crate need: modular arithmetic, shifts, gcd,
//! bit-level queries and primality checks. Values are always normalized and
//! non-negative; operations that could go negative are either modular or
//! checked.

use std::{
    fmt,
    ops::{Add, Mul, Shl, Shr},
};

use num_bigint_dig::{BigUint, ModInverse, prime::probably_prime};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::CryptoError;

/// An arbitrary-precision non-negative integer.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNum(BigUint);

impl BigNum {
    /// Interpret `bytes` as a big-endian unsigned integer.
    ///
    /// The empty string is zero.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    /// Create from a native integer.
    pub fn from_u64(value: u64) -> Self {
        Self(BigUint::from(value))
    }

    /// Minimal big-endian encoding with no leading zero bytes.
    ///
    /// Zero encodes as the empty string, so encoding is a bijection between
    /// values and canonical byte strings.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.0.is_zero() {
            return Vec::new();
        }
        self.0.to_bytes_be()
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    /// Borrow the underlying [`BigUint`].
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Unwrap into the underlying [`BigUint`].
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Number of significant bits. Zero has bit length 0.
    pub fn bit_length(&self) -> usize {
        self.0.bits()
    }

    /// True if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True if the value is one.
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// True if bit `n` (counting from the least significant bit) is set.
    pub fn is_bit_set(&self, n: usize) -> bool {
        (&self.0 >> n).is_odd()
    }

    /// The low `n` bits of the value, i.e. `self mod 2^n`.
    pub fn last_n_bits(&self, n: usize) -> Self {
        let modulus = BigUint::one() << n;
        Self(&self.0 % &modulus)
    }

    /// `self - other`, or `None` if the result would be negative.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.0 < other.0 {
            return None;
        }
        Some(Self(&self.0 - &other.0))
    }

    /// `self mod modulus`.
    pub fn modulo(&self, modulus: &Self) -> Result<Self, CryptoError> {
        check_modulus(modulus)?;
        Ok(Self(&self.0 % &modulus.0))
    }

    /// `(self + other) mod modulus`.
    pub fn mod_add(&self, other: &Self, modulus: &Self) -> Result<Self, CryptoError> {
        check_modulus(modulus)?;
        Ok(Self((&self.0 + &other.0) % &modulus.0))
    }

    /// `(self - other) mod modulus`, always in `[0, modulus)`.
    pub fn mod_sub(&self, other: &Self, modulus: &Self) -> Result<Self, CryptoError> {
        check_modulus(modulus)?;
        let a = &self.0 % &modulus.0;
        let b = &other.0 % &modulus.0;
        if a >= b { Ok(Self(a - b)) } else { Ok(Self(&modulus.0 + &a - &b)) }
    }

    /// `(self * other) mod modulus`.
    pub fn mod_mul(&self, other: &Self, modulus: &Self) -> Result<Self, CryptoError> {
        check_modulus(modulus)?;
        Ok(Self((&self.0 * &other.0) % &modulus.0))
    }

    /// `self^exponent mod modulus`.
    pub fn mod_exp(&self, exponent: &Self, modulus: &Self) -> Result<Self, CryptoError> {
        check_modulus(modulus)?;
        Ok(Self(self.0.modpow(&exponent.0, &modulus.0)))
    }

    /// The `x` in `[0, modulus)` with `self * x = 1 mod modulus`.
    ///
    /// Fails with `InvalidArgument` when `self` and `modulus` are not
    /// coprime.
    pub fn mod_inverse(&self, modulus: &Self) -> Result<Self, CryptoError> {
        check_modulus(modulus)?;
        let not_invertible = || CryptoError::invalid("value has no inverse for the given modulus");

        let inverse = self.0.clone().mod_inverse(&modulus.0).ok_or_else(not_invertible)?;
        let value = match inverse.to_biguint() {
            Some(positive) => positive % &modulus.0,
            None => {
                let negated = (-inverse).to_biguint().ok_or_else(not_invertible)? % &modulus.0;
                if negated.is_zero() { negated } else { &modulus.0 - &negated }
            },
        };
        Ok(Self(value))
    }

    /// Greatest common divisor. `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }

    /// Probabilistic primality test with `rounds` Miller-Rabin rounds plus a
    /// Lucas test.
    pub fn is_prime(&self, rounds: usize) -> bool {
        probably_prime(&self.0, rounds)
    }

    /// True if both `self` and `(self - 1) / 2` are prime.
    pub fn is_safe_prime(&self, rounds: usize) -> bool {
        if !self.0.is_odd() || self.0 < BigUint::from(5u8) {
            return false;
        }
        let half = &self.0 >> 1usize;
        probably_prime(&half, rounds) && probably_prime(&self.0, rounds)
    }
}

fn check_modulus(modulus: &BigNum) -> Result<(), CryptoError> {
    if modulus.is_zero() {
        return Err(CryptoError::invalid("modulus must be positive"));
    }
    Ok(())
}

impl From<BigUint> for BigNum {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for BigNum {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add<&BigNum> for &BigNum {
    type Output = BigNum;

    fn add(self, rhs: &BigNum) -> BigNum {
        BigNum(&self.0 + &rhs.0)
    }
}

impl Add<&BigNum> for BigNum {
    type Output = BigNum;

    fn add(self, rhs: &BigNum) -> BigNum {
        BigNum(self.0 + &rhs.0)
    }
}

impl Mul<&BigNum> for &BigNum {
    type Output = BigNum;

    fn mul(self, rhs: &BigNum) -> BigNum {
        BigNum(&self.0 * &rhs.0)
    }
}

impl Shl<usize> for &BigNum {
    type Output = BigNum;

    fn shl(self, bits: usize) -> BigNum {
        BigNum(&self.0 << bits)
    }
}

impl Shr<usize> for &BigNum {
    type Output = BigNum;

    fn shr(self, bits: usize) -> BigNum {
        BigNum(&self.0 >> bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: u64) -> BigNum {
        BigNum::from_u64(value)
    }

    #[test]
    fn bytes_roundtrip_strips_leading_zeros() {
        let value = BigNum::from_bytes_be(&[0x00, 0x00, 0x01, 0x02]);
        assert_eq!(value, n(0x0102));
        assert_eq!(value.to_bytes_be(), vec![0x01, 0x02]);
    }

    #[test]
    fn zero_encodes_as_empty() {
        assert!(BigNum::from_bytes_be(&[]).is_zero());
        assert!(n(0).to_bytes_be().is_empty());
    }

    #[test]
    fn bit_length() {
        assert_eq!(n(0).bit_length(), 0);
        assert_eq!(n(1).bit_length(), 1);
        assert_eq!(n(255).bit_length(), 8);
        assert_eq!(n(256).bit_length(), 9);
    }

    #[test]
    fn shifts() {
        assert_eq!(&n(3) << 4, n(48));
        assert_eq!(&n(48) >> 4, n(3));
        assert_eq!(&n(1) >> 1, n(0));
    }

    #[test]
    fn last_n_bits_masks_high_bits() {
        assert_eq!(n(0b1011_0110).last_n_bits(4), n(0b0110));
        assert_eq!(n(5).last_n_bits(0), n(0));
        assert_eq!(n(5).last_n_bits(64), n(5));
    }

    #[test]
    fn is_bit_set() {
        let value = n(0b1010);
        assert!(!value.is_bit_set(0));
        assert!(value.is_bit_set(1));
        assert!(value.is_bit_set(3));
        assert!(!value.is_bit_set(100));
    }

    #[test]
    fn modular_arithmetic() {
        let m = n(7);
        assert_eq!(n(5).mod_add(&n(4), &m).unwrap(), n(2));
        assert_eq!(n(5).mod_mul(&n(4), &m).unwrap(), n(6));
        assert_eq!(n(3).mod_exp(&n(6), &m).unwrap(), n(1));
        assert_eq!(n(20).modulo(&m).unwrap(), n(6));
    }

    #[test]
    fn mod_sub_wraps_instead_of_going_negative() {
        let m = n(7);
        assert_eq!(n(2).mod_sub(&n(5), &m).unwrap(), n(4));
        assert_eq!(n(5).mod_sub(&n(2), &m).unwrap(), n(3));
        assert_eq!(n(16).mod_sub(&n(2), &m).unwrap(), n(0));
    }

    #[test]
    fn zero_modulus_is_rejected() {
        let zero = n(0);
        let results = [
            n(1).modulo(&zero),
            n(1).mod_add(&n(1), &zero),
            n(1).mod_sub(&n(1), &zero),
            n(1).mod_mul(&n(1), &zero),
            n(1).mod_exp(&n(1), &zero),
            n(1).mod_inverse(&zero),
        ];
        for result in results {
            assert!(matches!(result, Err(CryptoError::InvalidArgument { .. })));
        }
    }

    #[test]
    fn mod_inverse() {
        let m = n(11);
        let inverse = n(3).mod_inverse(&m).unwrap();
        assert_eq!(inverse, n(4));
        assert_eq!(n(3).mod_mul(&inverse, &m).unwrap(), n(1));
    }

    #[test]
    fn mod_inverse_of_non_coprime_fails() {
        let result = n(6).mod_inverse(&n(9));
        assert!(matches!(result, Err(CryptoError::InvalidArgument { .. })));
    }

    #[test]
    fn checked_sub() {
        assert_eq!(n(5).checked_sub(&n(3)), Some(n(2)));
        assert_eq!(n(3).checked_sub(&n(3)), Some(n(0)));
        assert_eq!(n(3).checked_sub(&n(5)), None);
    }

    #[test]
    fn gcd() {
        assert_eq!(n(12).gcd(&n(18)), n(6));
        assert_eq!(n(17).gcd(&n(5)), n(1));
        assert_eq!(n(0).gcd(&n(9)), n(9));
    }

    #[test]
    fn primality() {
        assert!(n(2).is_prime(20));
        assert!(n(7919).is_prime(20));
        assert!(!n(7917).is_prime(20));
        assert!(!n(1).is_prime(20));
    }

    #[test]
    fn safe_primality() {
        // 23 = 2 * 11 + 1
        assert!(n(23).is_safe_prime(20));
        assert!(n(5).is_safe_prime(20));
        // 13 is prime but 6 is not
        assert!(!n(13).is_safe_prime(20));
        assert!(!n(2).is_safe_prime(20));
        assert!(!n(21).is_safe_prime(20));
    }

    #[test]
    fn ordering_and_display() {
        assert!(n(3) < n(4));
        assert_eq!(n(1234).to_string(), "1234");
        assert_eq!(n(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!((&n(u64::MAX) + &n(1)).to_u64(), None);
    }
}
