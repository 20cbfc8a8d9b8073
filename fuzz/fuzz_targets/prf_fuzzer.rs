//! Fuzz target for the keyed PRF
//!
//! # Strategy
//!
//! - Arbitrary keys (including too-short ones)
//! - Arbitrary data, empty included
//! - Output ranges from 1 up to just past the 512-bit limit
//!
//! # Invariants
//!
//! - Never panics
//! - Short keys, empty and oversized ranges are rejected as caller bugs
//! - Accepted outputs lie in [0, max) and are deterministic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tessera_crypto::{prf, BigNum, CryptoError};

#[derive(Debug, Clone, Arbitrary)]
struct PrfScenario {
    key: Vec<u8>,
    data: Vec<u8>,
    /// Big-endian bytes of the range bound, truncated to 65 bytes
    max_value: Vec<u8>,
}

const ROUNDS: u32 = 128;

fuzz_target!(|scenario: PrfScenario| {
    let max_len = scenario.max_value.len().min(65);
    let max = BigNum::from_bytes_be(&scenario.max_value[..max_len]);

    let result = prf(&scenario.key, &scenario.data, &max, ROUNDS);

    let precondition_violated =
        scenario.key.len() < 10 || max.is_zero() || max.bit_length() > 512;

    match result {
        Ok(value) => {
            // INVARIANT 1: Preconditions held
            assert!(!precondition_violated, "invalid input must be rejected");

            // INVARIANT 2: Output in range
            assert!(value < max, "PRF output must be below max");

            // INVARIANT 3: Deterministic
            let again = prf(&scenario.key, &scenario.data, &max, ROUNDS);
            assert_eq!(again, Ok(value), "PRF must be deterministic");
        },
        Err(CryptoError::InvalidArgument { .. }) => {
            // INVARIANT 4: Only invalid input is rejected
            assert!(precondition_violated, "valid input must not be rejected");
        },
        Err(err) => panic!("unexpected PRF error: {err}"),
    }
});
