//! The catalog of rules from which sequences are constructed.
//!
//! Every [`Rule`] maps to exactly one construction function. All of them are pure: given the
//! same start and length they produce the same elements. Rules which need primes or Fibonacci
//! numbers create their own [`streams`](crate::streams) and drop them once they are done.
mod difference_rules;
mod fraction_rules;
mod prime_rules;
mod recurrence_rules;
mod rule;

pub use rule::Rule;

use crate::basic_types::SequenceElement;
use crate::basic_types::SequenceGenerationError;
use crate::statistics::GenerationStatistics;

/// Constructs the elements of the sequence described by `rule`, `start` and `length`.
pub(crate) fn generate(
    rule: Rule,
    start: &SequenceElement,
    length: usize,
    statistics: &mut GenerationStatistics,
) -> Result<Vec<SequenceElement>, SequenceGenerationError> {
    match rule {
        Rule::AddPrimes => prime_rules::add_primes(start, length, statistics),
        Rule::GeometricDiff => difference_rules::geometric_diff(start, length),
        Rule::IncreasingDifference => difference_rules::increasing_difference(start, length),
        Rule::SkipPrimes => Ok(prime_rules::skip_primes(length, statistics)),
        Rule::FibonacciDiff => difference_rules::fibonacci_diff(start, length, statistics),
        Rule::RecurrenceRelation => recurrence_rules::recurrence_relation(length),
        Rule::FractionPattern => Ok(fraction_rules::fraction_pattern(length)),
        Rule::IntegerFractionPattern => Ok(fraction_rules::integer_fraction_pattern(length)),
        Rule::FibonacciFractions => fraction_rules::fibonacci_fractions(length, statistics),
        Rule::SeparatePatterns => fraction_rules::separate_patterns(length),
    }
}

/// Extracts the integer seed of `rule` from `start`.
fn integer_start(rule: Rule, start: &SequenceElement) -> Result<i64, SequenceGenerationError> {
    start
        .as_integer()
        .ok_or_else(|| SequenceGenerationError::NonIntegerStart {
            rule,
            start: start.clone(),
        })
}

fn overflow(rule: Rule, position: usize) -> SequenceGenerationError {
    SequenceGenerationError::ArithmeticOverflow { rule, position }
}

/// Seeds a sequence with `start` and appends `previous + difference` for the next
/// `length - 1` differences.
///
/// The sequence always contains the seed. If `differences` runs out before the sequence is
/// complete, the values no longer fit in an `i64` and an overflow is reported.
fn accumulate_differences(
    rule: Rule,
    start: &SequenceElement,
    length: usize,
    mut differences: impl Iterator<Item = i64>,
) -> Result<Vec<SequenceElement>, SequenceGenerationError> {
    let mut current = integer_start(rule, start)?;

    let mut sequence = vec![SequenceElement::Integer(current)];

    for position in 1..length {
        current = differences
            .next()
            .and_then(|difference| current.checked_add(difference))
            .ok_or_else(|| overflow(rule, position))?;
        sequence.push(SequenceElement::Integer(current));
    }

    Ok(sequence)
}
