//! Fuzz target for BigNum modular arithmetic
//!
//! # Invariants
//!
//! - Zero modulus is always rejected, never panics
//! - Modular results lie in [0, m)
//! - (a - b) + b = a (mod m)
//! - Byte encoding is canonical: decode(encode(x)) = x with no leading zero

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tessera_crypto::BigNum;

#[derive(Debug, Clone, Arbitrary)]
struct ArithScenario {
    a: Vec<u8>,
    b: Vec<u8>,
    modulus: Vec<u8>,
    shift: u16,
}

fuzz_target!(|scenario: ArithScenario| {
    let a = BigNum::from_bytes_be(&scenario.a);
    let b = BigNum::from_bytes_be(&scenario.b);
    let m = BigNum::from_bytes_be(&scenario.modulus);

    // INVARIANT 1: Canonical encoding
    let encoded = a.to_bytes_be();
    assert!(encoded.first() != Some(&0), "encoding must not have leading zeros");
    assert_eq!(BigNum::from_bytes_be(&encoded), a);

    // INVARIANT 2: Shifts invert for left-then-right
    let shift = usize::from(scenario.shift % 4096);
    assert_eq!(&(&a << shift) >> shift, a);

    if m.is_zero() {
        // INVARIANT 3: Zero modulus rejected
        assert!(a.mod_add(&b, &m).is_err());
        assert!(a.mod_sub(&b, &m).is_err());
        assert!(a.mod_mul(&b, &m).is_err());
        return;
    }

    let sum = a.mod_add(&b, &m).unwrap();
    let diff = a.mod_sub(&b, &m).unwrap();
    let product = a.mod_mul(&b, &m).unwrap();

    // INVARIANT 4: Results reduced
    assert!(sum < m && diff < m && product < m);

    // INVARIANT 5: Subtraction inverts addition
    assert_eq!(diff.mod_add(&b, &m).unwrap(), a.modulo(&m).unwrap());
});
