use itertools::Itertools;

use super::Rule;
use super::overflow;
use super::rule::PATTERN_TABLE_SIZE;
use crate::basic_types::Fraction;
use crate::basic_types::SequenceElement;
use crate::basic_types::SequenceGenerationError;
use crate::statistics::GenerationStatistics;
use crate::streams::FibonacciStream;

const PATTERN_NUMERATORS: [i64; PATTERN_TABLE_SIZE] = [1, 7, 9, 11, 15, 19];
const PATTERN_DENOMINATORS: [i64; PATTERN_TABLE_SIZE] = [7, 9, 11, 15, 19, 27];

const SEPARATE_INITIAL_NUMERATOR: i64 = 5;
const SEPARATE_NUMERATOR_STEP: i64 = 9;
const SEPARATE_INITIAL_DENOMINATOR: i64 = 6;

pub(crate) fn fraction_pattern(length: usize) -> Vec<SequenceElement> {
    PATTERN_NUMERATORS
        .into_iter()
        .zip_eq(PATTERN_DENOMINATORS)
        .take(length)
        .map(|(numerator, denominator)| {
            SequenceElement::Fraction(Fraction::new(numerator, denominator))
        })
        .collect()
}

pub(crate) fn integer_fraction_pattern(length: usize) -> Vec<SequenceElement> {
    let table: [SequenceElement; PATTERN_TABLE_SIZE] = [
        SequenceElement::Integer(1),
        SequenceElement::from("2"),
        SequenceElement::Fraction(Fraction::new(24, 12)),
        SequenceElement::from("3"),
        SequenceElement::Fraction(Fraction::new(36, 12)),
        SequenceElement::Fraction(Fraction::new(21, 7)),
    ];

    table.into_iter().take(length).collect()
}

/// Pairs the Fibonacci numbers with themselves: 1/1, 1/1, 2/2, 3/3, 5/5, ...
///
/// Numerators and denominators come from two independent streams which both start at the
/// beginning of the Fibonacci sequence.
pub(crate) fn fibonacci_fractions(
    length: usize,
    statistics: &mut GenerationStatistics,
) -> Result<Vec<SequenceElement>, SequenceGenerationError> {
    let mut numerators = FibonacciStream::new();
    let mut denominators = FibonacciStream::new();

    let sequence: Result<Vec<_>, _> = (0..length)
        .map(|position| match (numerators.next(), denominators.next()) {
            (Some(numerator), Some(denominator)) => {
                Ok(SequenceElement::Fraction(Fraction::new(numerator, denominator)))
            }
            _ => Err(overflow(Rule::FibonacciFractions, position)),
        })
        .collect();

    statistics.record_fibonacci_stream(&numerators);
    statistics.record_fibonacci_stream(&denominators);

    sequence
}

/// Numerators 5, 14, 23, ... paired with denominators 6, 7, 9, 10, 12, 13, ...
///
/// The denominator grows by 1 after every odd-numbered element (counting from 1) and by 2 after
/// every even-numbered one.
pub(crate) fn separate_patterns(
    length: usize,
) -> Result<Vec<SequenceElement>, SequenceGenerationError> {
    let mut numerator = SEPARATE_INITIAL_NUMERATOR;
    let mut denominator = SEPARATE_INITIAL_DENOMINATOR;

    let mut sequence = Vec::new();
    for position in 0..length {
        sequence.push(SequenceElement::Fraction(Fraction::new(numerator, denominator)));

        if position + 1 == length {
            break;
        }

        let denominator_step = if position % 2 == 0 { 1 } else { 2 };
        numerator = numerator
            .checked_add(SEPARATE_NUMERATOR_STEP)
            .ok_or_else(|| overflow(Rule::SeparatePatterns, position + 1))?;
        denominator = denominator
            .checked_add(denominator_step)
            .ok_or_else(|| overflow(Rule::SeparatePatterns, position + 1))?;
    }

    Ok(sequence)
}
