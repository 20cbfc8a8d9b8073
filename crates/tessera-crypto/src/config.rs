//! Tuning knobs for a [`Context`](crate::Context).

/// Limits and parameters applied by a [`Context`](crate::Context).
///
/// The defaults make every cap unreachable in practice: a PRF round is
/// rejected with probability below one half, so 128 rounds fail with
/// probability below `2^-128`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextConfig {
    /// Maximum PRF rejection-sampling rounds
    pub max_prf_rounds: u32,
    /// Maximum draws for relatively prime sampling
    pub max_coprime_attempts: u32,
    /// Maximum candidates examined by one prime or safe-prime search
    pub max_prime_candidates: u64,
    /// Miller-Rabin rounds used by prime generation
    pub primality_rounds: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_prf_rounds: 128,
            max_coprime_attempts: 1024,
            max_prime_candidates: 10_000_000,
            primality_rounds: 20,
        }
    }
}

impl ContextConfig {
    /// Set the PRF round cap.
    #[must_use]
    pub fn with_max_prf_rounds(mut self, rounds: u32) -> Self {
        self.max_prf_rounds = rounds;
        self
    }

    /// Set the relatively prime sampling cap.
    #[must_use]
    pub fn with_max_coprime_attempts(mut self, attempts: u32) -> Self {
        self.max_coprime_attempts = attempts;
        self
    }

    /// Set the prime search candidate cap.
    #[must_use]
    pub fn with_max_prime_candidates(mut self, candidates: u64) -> Self {
        self.max_prime_candidates = candidates;
        self
    }

    /// Set the number of Miller-Rabin rounds.
    #[must_use]
    pub fn with_primality_rounds(mut self, rounds: usize) -> Self {
        self.primality_rounds = rounds;
        self
    }
}
