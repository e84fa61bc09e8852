use std::iter::successors;

use super::Rule;
use super::accumulate_differences;
use crate::basic_types::SequenceElement;
use crate::basic_types::SequenceGenerationError;
use crate::statistics::GenerationStatistics;
use crate::streams::FibonacciStream;

const GEOMETRIC_INITIAL_DIFFERENCE: i64 = 11;
const GEOMETRIC_DIFFERENCE_FACTOR: i64 = 3;

const INCREASING_INITIAL_DIFFERENCE: i64 = 19;
const INCREASING_DIFFERENCE_STEP: i64 = 6;

/// Adds the differences `11 * 3^i`.
pub(crate) fn geometric_diff(
    start: &SequenceElement,
    length: usize,
) -> Result<Vec<SequenceElement>, SequenceGenerationError> {
    let differences = successors(Some(GEOMETRIC_INITIAL_DIFFERENCE), |difference| {
        difference.checked_mul(GEOMETRIC_DIFFERENCE_FACTOR)
    });

    accumulate_differences(Rule::GeometricDiff, start, length, differences)
}

/// Adds the differences `19 + 6 * i`.
pub(crate) fn increasing_difference(
    start: &SequenceElement,
    length: usize,
) -> Result<Vec<SequenceElement>, SequenceGenerationError> {
    let differences = successors(Some(INCREASING_INITIAL_DIFFERENCE), |difference| {
        difference.checked_add(INCREASING_DIFFERENCE_STEP)
    });

    accumulate_differences(Rule::IncreasingDifference, start, length, differences)
}

/// Adds the Fibonacci numbers, starting from the first 1.
pub(crate) fn fibonacci_diff(
    start: &SequenceElement,
    length: usize,
    statistics: &mut GenerationStatistics,
) -> Result<Vec<SequenceElement>, SequenceGenerationError> {
    let mut fibonacci = FibonacciStream::new();

    let sequence = accumulate_differences(Rule::FibonacciDiff, start, length, fibonacci.by_ref());
    statistics.record_fibonacci_stream(&fibonacci);

    sequence
}

#[cfg(test)]
mod tests {
    use super::fibonacci_diff;
    use super::geometric_diff;
    use super::increasing_difference;
    use crate::basic_types::SequenceElement;
    use crate::basic_types::SequenceGenerationError;
    use crate::rules::Rule;
    use crate::statistics::GenerationStatistics;

    fn integers(values: &[i64]) -> Vec<SequenceElement> {
        values.iter().copied().map(SequenceElement::Integer).collect()
    }

    #[test]
    fn geometric_differences_triple() {
        let sequence = geometric_diff(&SequenceElement::from(2), 5).expect("fits in i64");

        // Differences 11, 33, 99, 297.
        assert_eq!(sequence, integers(&[2, 13, 46, 145, 442]));
    }

    #[test]
    fn geometric_differences_eventually_overflow() {
        let result = geometric_diff(&SequenceElement::from(0), 100);

        assert!(matches!(
            result,
            Err(SequenceGenerationError::ArithmeticOverflow {
                rule: Rule::GeometricDiff,
                ..
            })
        ));
    }

    #[test]
    fn increasing_differences_grow_by_six() {
        let sequence = increasing_difference(&SequenceElement::from(1), 5).expect("fits in i64");

        // Differences 19, 25, 31, 37.
        assert_eq!(sequence, integers(&[1, 20, 45, 76, 113]));
    }

    #[test]
    fn fibonacci_differences() {
        let mut statistics = GenerationStatistics::default();
        let sequence =
            fibonacci_diff(&SequenceElement::from(10), 7, &mut statistics).expect("fits in i64");

        // Differences 1, 1, 2, 3, 5, 8.
        assert_eq!(sequence, integers(&[10, 11, 12, 14, 17, 22, 30]));
        assert_eq!(statistics.num_fibonacci_numbers_drawn(), 6);
    }

    #[test]
    fn single_element_sequences_are_the_seed() {
        let start = SequenceElement::from(42);
        let mut statistics = GenerationStatistics::default();

        assert_eq!(geometric_diff(&start, 1), Ok(integers(&[42])));
        assert_eq!(increasing_difference(&start, 0), Ok(integers(&[42])));
        assert_eq!(fibonacci_diff(&start, 1, &mut statistics), Ok(integers(&[42])));
    }
}
