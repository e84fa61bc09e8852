use std::time::Duration;

use super::log_statistic;
use super::log_statistic_postfix;
use crate::streams::FibonacciStream;
use crate::streams::PrimeStream;

/// Statistics gathered while a single sequence was generated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStatistics {
    /// The number of primes pulled from prime streams.
    pub(crate) num_primes_drawn: usize,
    /// The number of values pulled from Fibonacci streams.
    pub(crate) num_fibonacci_numbers_drawn: usize,
    /// The largest number of composites tracked by a prime sieve when it was released.
    pub(crate) peak_pending_composites: usize,
    /// The number of elements in the generated sequence.
    pub(crate) num_elements: usize,
    /// The time spent constructing the sequence.
    pub(crate) generation_time: Duration,
}

impl GenerationStatistics {
    pub fn num_primes_drawn(&self) -> usize {
        self.num_primes_drawn
    }

    pub fn num_fibonacci_numbers_drawn(&self) -> usize {
        self.num_fibonacci_numbers_drawn
    }

    pub fn peak_pending_composites(&self) -> usize {
        self.peak_pending_composites
    }

    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    pub fn generation_time(&self) -> Duration {
        self.generation_time
    }

    pub(crate) fn record_prime_stream(&mut self, stream: &PrimeStream) {
        self.num_primes_drawn += stream.num_emitted();
        self.peak_pending_composites = self
            .peak_pending_composites
            .max(stream.num_pending_composites());
    }

    pub(crate) fn record_fibonacci_stream(&mut self, stream: &FibonacciStream) {
        self.num_fibonacci_numbers_drawn += stream.num_emitted();
    }

    /// Logs the statistics through [`log_statistic`], followed by the configured postfix.
    pub fn log(&self) {
        log_statistic("numElements", self.num_elements);
        log_statistic("numPrimesDrawn", self.num_primes_drawn);
        log_statistic("numFibonacciNumbersDrawn", self.num_fibonacci_numbers_drawn);
        log_statistic("peakPendingComposites", self.peak_pending_composites);
        log_statistic("generationTime", self.generation_time.as_secs_f64());
        log_statistic_postfix();
    }
}
