use itertools::Itertools;

use super::Rule;
use super::accumulate_differences;
use crate::basic_types::SequenceElement;
use crate::basic_types::SequenceGenerationError;
use crate::statistics::GenerationStatistics;
use crate::streams::PrimeStream;

/// Starts at `start` and adds the next prime for every further element, skipping 2.
///
/// E.g. a start of 6 gives 6, 9, 14, 19, 26, ...
pub(crate) fn add_primes(
    start: &SequenceElement,
    length: usize,
    statistics: &mut GenerationStatistics,
) -> Result<Vec<SequenceElement>, SequenceGenerationError> {
    let mut primes = PrimeStream::new();
    // The first prime is drawn but never added.
    let _ = primes.next();

    let sequence = accumulate_differences(Rule::AddPrimes, start, length, primes.by_ref());
    statistics.record_prime_stream(&primes);

    sequence
}

/// The primes at even (zero-based) positions among the first `2 * length` primes.
pub(crate) fn skip_primes(
    length: usize,
    statistics: &mut GenerationStatistics,
) -> Vec<SequenceElement> {
    let mut primes = PrimeStream::new();
    let drawn = primes.by_ref().take(length.saturating_mul(2)).collect_vec();
    statistics.record_prime_stream(&primes);

    drawn
        .into_iter()
        .step_by(2)
        .take(length)
        .map(SequenceElement::Integer)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::add_primes;
    use super::skip_primes;
    use crate::basic_types::SequenceElement;
    use crate::statistics::GenerationStatistics;

    fn integers(values: &[i64]) -> Vec<SequenceElement> {
        values.iter().copied().map(SequenceElement::Integer).collect()
    }

    #[test]
    fn add_primes_skips_two() {
        let mut statistics = GenerationStatistics::default();
        let sequence =
            add_primes(&SequenceElement::from(6), 10, &mut statistics).expect("fits in i64");

        assert_eq!(sequence, integers(&[6, 9, 14, 19, 26, 33, 42, 51, 60, 71]));
        // 2 is drawn and discarded, followed by the nine primes which were added.
        assert_eq!(statistics.num_primes_drawn(), 10);
    }

    #[test]
    fn add_primes_of_length_zero_or_one_is_the_seed() {
        let mut statistics = GenerationStatistics::default();

        for length in [0, 1] {
            let sequence =
                add_primes(&SequenceElement::from(-4), length, &mut statistics).expect("seed only");
            assert_eq!(sequence, integers(&[-4]));
        }
    }

    #[test]
    fn skip_primes_keeps_every_other_prime() {
        let mut statistics = GenerationStatistics::default();
        let sequence = skip_primes(5, &mut statistics);

        assert_eq!(sequence, integers(&[2, 5, 11, 17, 23]));
        assert_eq!(statistics.num_primes_drawn(), 10);
    }

    #[test]
    fn skip_primes_of_length_zero_is_empty() {
        let mut statistics = GenerationStatistics::default();

        assert!(skip_primes(0, &mut statistics).is_empty());
        assert_eq!(statistics.num_primes_drawn(), 0);
    }
}
