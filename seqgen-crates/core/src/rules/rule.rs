use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::basic_types::SequenceGenerationError;

/// The number of entries in the fixed tables of [`Rule::FractionPattern`] and
/// [`Rule::IntegerFractionPattern`].
pub(crate) const PATTERN_TABLE_SIZE: usize = 6;

/// Specifies the rule which is used to construct a sequence.
///
/// Rules are parsed from and displayed as their snake_case names (e.g. `add_primes`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", value(rename_all = "snake_case"))]
pub enum Rule {
    /// Starts at `start` and adds the primes 3, 5, 7, 11, ... one at a time.
    ///
    /// Note that the first prime (2) is skipped.
    AddPrimes,
    /// Starts at `start` and adds the differences 11, 33, 99, ..., each three times the previous
    /// one.
    GeometricDiff,
    /// Starts at `start` and adds the differences 19, 25, 31, ..., each six more than the
    /// previous one.
    IncreasingDifference,
    /// Every other prime, starting at 2: 2, 5, 11, 17, 23, ...
    SkipPrimes,
    /// Starts at `start` and adds the Fibonacci numbers 1, 1, 2, 3, 5, ... one at a time.
    FibonacciDiff,
    /// The recurrence `f(i) = 5 * f(i - 1) + f(i - 2)` with `f(0) = 5` and `f(1) = 10`.
    RecurrenceRelation,
    /// The fixed fractions 1/7, 7/9, 9/11, 11/15, 15/19, 19/27.
    FractionPattern,
    /// The fixed list 1, 2, 24/12, 3, 36/12, 21/7.
    IntegerFractionPattern,
    /// Fractions of which both the numerators and the denominators are the Fibonacci numbers,
    /// each drawn from its own stream: 1/1, 1/1, 2/2, 3/3, ...
    FibonacciFractions,
    /// Fractions with numerators 5, 14, 23, ... (step 9) and denominators 6, 7, 9, 10, 12, ...
    /// (alternating steps of 1 and 2).
    SeparatePatterns,
}

impl Rule {
    /// Every rule in the catalog.
    pub const ALL: [Rule; 10] = [
        Rule::AddPrimes,
        Rule::GeometricDiff,
        Rule::IncreasingDifference,
        Rule::SkipPrimes,
        Rule::FibonacciDiff,
        Rule::RecurrenceRelation,
        Rule::FractionPattern,
        Rule::IntegerFractionPattern,
        Rule::FibonacciFractions,
        Rule::SeparatePatterns,
    ];

    /// The name by which the rule is identified.
    pub fn name(self) -> &'static str {
        match self {
            Rule::AddPrimes => "add_primes",
            Rule::GeometricDiff => "geometric_diff",
            Rule::IncreasingDifference => "increasing_difference",
            Rule::SkipPrimes => "skip_primes",
            Rule::FibonacciDiff => "fibonacci_diff",
            Rule::RecurrenceRelation => "recurrence_relation",
            Rule::FractionPattern => "fraction_pattern",
            Rule::IntegerFractionPattern => "integer_fraction_pattern",
            Rule::FibonacciFractions => "fibonacci_fractions",
            Rule::SeparatePatterns => "separate_patterns",
        }
    }

    /// Whether the rule is seeded with the provided start; all other rules ignore it.
    pub fn uses_start(self) -> bool {
        matches!(
            self,
            Rule::AddPrimes | Rule::GeometricDiff | Rule::IncreasingDifference | Rule::FibonacciDiff
        )
    }

    /// The number of elements the rule produces when `requested_length` elements are requested.
    ///
    /// - Rules seeded with the start always contain the seed.
    /// - [`Rule::RecurrenceRelation`] always contains its two seeds.
    /// - The fixed tables are truncated to their size.
    pub fn sequence_length(self, requested_length: usize) -> usize {
        match self {
            Rule::AddPrimes
            | Rule::GeometricDiff
            | Rule::IncreasingDifference
            | Rule::FibonacciDiff => requested_length.max(1),
            Rule::RecurrenceRelation => requested_length.max(2),
            Rule::FractionPattern | Rule::IntegerFractionPattern => {
                requested_length.min(PATTERN_TABLE_SIZE)
            }
            Rule::SkipPrimes | Rule::FibonacciFractions | Rule::SeparatePatterns => {
                requested_length
            }
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = SequenceGenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| SequenceGenerationError::UnknownRule(s.to_owned()))
    }
}
