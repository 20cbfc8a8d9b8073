//! Uniform sampling of bytes and integers from an [`EntropySource`].

use num_bigint_dig::RandBigInt;

use crate::{
    bignum::BigNum,
    entropy::{EntropyRng, EntropySource},
    error::CryptoError,
};

/// `len` random bytes.
pub fn random_bytes<E: EntropySource + ?Sized>(
    source: &mut E,
    len: usize,
) -> Result<Vec<u8>, CryptoError> {
    let mut bytes = vec![0u8; len];
    source.fill(&mut bytes)?;
    Ok(bytes)
}

/// Uniform integer in `[0, bound)`.
pub fn random_less_than<E: EntropySource + ?Sized>(
    source: &mut E,
    bound: &BigNum,
) -> Result<BigNum, CryptoError> {
    if bound.is_zero() {
        return Err(CryptoError::invalid("random bound must be positive"));
    }

    let mut rng = EntropyRng::new(source);
    let value = rng.gen_biguint_below(bound.as_biguint());
    rng.finish()?;

    Ok(BigNum::from(value))
}

/// Uniform integer in `[start, end)`.
pub fn random_between<E: EntropySource + ?Sized>(
    source: &mut E,
    start: &BigNum,
    end: &BigNum,
) -> Result<BigNum, CryptoError> {
    let width = end
        .checked_sub(start)
        .filter(|width| !width.is_zero())
        .ok_or_else(|| CryptoError::invalid("random range start must be less than end"))?;

    let offset = random_less_than(source, &width)?;
    Ok(&offset + start)
}

/// Uniform integer `r` in `[0, n)` with `gcd(r, n) = 1`.
///
/// Draws until a coprime candidate appears or `max_attempts` draws fail.
pub fn relatively_prime_random_less_than<E: EntropySource + ?Sized>(
    source: &mut E,
    n: &BigNum,
    max_attempts: u32,
) -> Result<BigNum, CryptoError> {
    for _ in 0..max_attempts {
        let candidate = random_less_than(source, n)?;
        if candidate.gcd(n).is_one() {
            return Ok(candidate);
        }
    }

    tracing::warn!(modulus_bits = n.bit_length(), max_attempts, "coprime sampling exhausted");
    Err(CryptoError::SamplingExhausted {
        operation: "relatively prime sampling",
        attempts: u64::from(max_attempts),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::DeterministicEntropy;

    struct FailingEntropy;

    impl EntropySource for FailingEntropy {
        fn is_seeded(&mut self) -> bool {
            true
        }

        fn fill(&mut self, _dest: &mut [u8]) -> Result<(), CryptoError> {
            Err(CryptoError::engine("entropy pool exhausted"))
        }
    }

    fn source() -> DeterministicEntropy {
        DeterministicEntropy::from_seed(0x5EED)
    }

    #[test]
    fn source_failure_is_reported_not_panicked() {
        let mut source = FailingEntropy;
        let bound = BigNum::from_u64(1000);

        assert!(matches!(
            random_less_than(&mut source, &bound),
            Err(CryptoError::EngineFailure { .. })
        ));
        assert!(matches!(
            random_between(&mut source, &BigNum::from_u64(10), &bound),
            Err(CryptoError::EngineFailure { .. })
        ));
        assert!(matches!(
            relatively_prime_random_less_than(&mut source, &bound, 16),
            Err(CryptoError::EngineFailure { .. })
        ));
        assert!(matches!(random_bytes(&mut source, 8), Err(CryptoError::EngineFailure { .. })));
    }

    #[test]
    fn random_bytes_has_requested_length() {
        let mut source = source();
        for len in [0, 1, 31, 32, 1000] {
            assert_eq!(random_bytes(&mut source, len).unwrap().len(), len);
        }
    }

    #[test]
    fn random_less_than_stays_in_range() {
        let mut source = source();
        let bound = BigNum::from_u64(10);
        for _ in 0..200 {
            assert!(random_less_than(&mut source, &bound).unwrap() < bound);
        }
    }

    #[test]
    fn random_less_than_one_is_zero() {
        let mut source = source();
        assert!(random_less_than(&mut source, &BigNum::from_u64(1)).unwrap().is_zero());
    }

    #[test]
    fn random_less_than_covers_small_range() {
        let mut source = source();
        let bound = BigNum::from_u64(4);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let value = random_less_than(&mut source, &bound).unwrap();
            let index = value.to_u64().unwrap() as usize;
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value in [0, 4) should appear");
    }

    #[test]
    fn random_less_than_zero_is_rejected() {
        let mut source = source();
        let result = random_less_than(&mut source, &BigNum::default());
        assert!(matches!(result, Err(CryptoError::InvalidArgument { .. })));
    }

    #[test]
    fn random_between_stays_in_range() {
        let mut source = source();
        let start = BigNum::from_u64(1000);
        let end = BigNum::from_u64(1010);
        for _ in 0..200 {
            let value = random_between(&mut source, &start, &end).unwrap();
            assert!(value >= start && value < end);
        }
    }

    #[test]
    fn random_between_rejects_empty_or_inverted_range() {
        let mut source = source();
        let five = BigNum::from_u64(5);
        let six = BigNum::from_u64(6);

        assert!(matches!(
            random_between(&mut source, &five, &five),
            Err(CryptoError::InvalidArgument { .. })
        ));
        assert!(matches!(
            random_between(&mut source, &six, &five),
            Err(CryptoError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn relatively_prime_sample_is_coprime() {
        let mut source = source();
        // 2 * 3 * 5 * 7 * 11 * 13
        let n = BigNum::from_u64(30_030);
        for _ in 0..50 {
            let r = relatively_prime_random_less_than(&mut source, &n, 1024).unwrap();
            assert!(r < n);
            assert!(r.gcd(&n).is_one());
        }
    }

    #[test]
    fn relatively_prime_sampling_is_capped() {
        let mut source = source();
        let result = relatively_prime_random_less_than(&mut source, &BigNum::from_u64(30_030), 0);
        assert!(matches!(result, Err(CryptoError::SamplingExhausted { attempts: 0, .. })));
    }
}
