use std::iter::FusedIterator;

use crate::containers::HashMap;
use crate::seqgen_assert_advanced;
use crate::seqgen_assert_moderate;

/// An unbounded stream of the prime numbers in increasing order, starting at 2.
///
/// The stream is an incremental sieve: it maps every upcoming composite to the primes which
/// generate it. Memory therefore grows with the number of primes emitted, not with the magnitude
/// of the largest one.
///
/// When a candidate encounters a prime `p`, `p * p` is registered as the first composite
/// generated by `p`; when it encounters a registered composite `q`, each of its primes `p` is
/// moved on to `q + p`.
///
/// The stream ends once the next candidate does not fit in an `i64`.
#[derive(Debug, Clone)]
pub struct PrimeStream {
    /// Maps an upcoming composite to the primes of which it is the next multiple.
    composites: HashMap<i64, Vec<i64>>,
    /// The next integer to inspect, [`None`] once the range of `i64` is exhausted.
    candidate: Option<i64>,
    last_emitted: Option<i64>,
    num_emitted: usize,
}

impl PrimeStream {
    pub fn new() -> PrimeStream {
        PrimeStream {
            composites: HashMap::default(),
            candidate: Some(2),
            last_emitted: None,
            num_emitted: 0,
        }
    }

    /// The number of primes which have been emitted so far.
    pub fn num_emitted(&self) -> usize {
        self.num_emitted
    }

    /// The number of composites currently tracked by the sieve.
    pub fn num_pending_composites(&self) -> usize {
        self.composites.len()
    }

    fn emit(&mut self, prime: i64) -> i64 {
        seqgen_assert_moderate!(
            self.last_emitted.is_none_or(|last| last < prime),
            "primes should be emitted in strictly increasing order"
        );
        seqgen_assert_advanced!(
            (2..)
                .take_while(|divisor: &i64| divisor.saturating_mul(*divisor) <= prime)
                .all(|divisor| prime % divisor != 0),
            "{prime} is not prime"
        );

        self.last_emitted = Some(prime);
        self.num_emitted += 1;
        prime
    }
}

impl Default for PrimeStream {
    fn default() -> Self {
        PrimeStream::new()
    }
}

impl Iterator for PrimeStream {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.candidate?;
            self.candidate = candidate.checked_add(1);

            match self.composites.remove(&candidate) {
                None => {
                    // A square beyond `i64::MAX` is never reached as a candidate.
                    if let Some(square) = candidate.checked_mul(candidate) {
                        let _ = self.composites.insert(square, vec![candidate]);
                    }

                    return Some(self.emit(candidate));
                }
                Some(primes) => {
                    for prime in primes {
                        if let Some(next_multiple) = candidate.checked_add(prime) {
                            self.composites
                                .entry(next_multiple)
                                .or_default()
                                .push(prime);
                        }
                    }
                }
            }
        }
    }
}

impl FusedIterator for PrimeStream {}
