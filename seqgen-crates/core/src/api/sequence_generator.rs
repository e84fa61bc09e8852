use std::time::Instant;

use log::debug;
use log::trace;

use crate::basic_types::Sequence;
use crate::basic_types::SequenceElement;
use crate::basic_types::SequenceGenerationError;
use crate::rules;
use crate::rules::Rule;
use crate::seqgen_assert_eq_simple;
use crate::statistics::GenerationStatistics;

/// The number of elements which is requested when no length is provided.
pub const DEFAULT_LENGTH: usize = 10;

/// Generates a sequence from a starting value, a [`Rule`] and a requested length.
///
/// The sequence is generated when the generator is constructed and cannot change afterwards; a
/// new sequence requires a new generator. If construction fails, no generator is created.
///
/// # Example
/// ```rust
/// # use seqgen_core::SequenceGenerator;
/// let generator = SequenceGenerator::new(6, "add_primes", 10).expect("known rule");
///
/// assert_eq!(
///     generator.sequence().to_integers(),
///     Some(vec![6, 9, 14, 19, 26, 33, 42, 51, 60, 71])
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    start: SequenceElement,
    rule: Rule,
    length: usize,
    sequence: Sequence,
    statistics: GenerationStatistics,
}

impl SequenceGenerator {
    /// Generates `length` elements using the rule called `rule`.
    ///
    /// Returns [`SequenceGenerationError::UnknownRule`] if no rule with that name exists.
    pub fn new(
        start: impl Into<SequenceElement>,
        rule: &str,
        length: usize,
    ) -> Result<SequenceGenerator, SequenceGenerationError> {
        let rule = rule.parse::<Rule>()?;
        SequenceGenerator::with_rule(start, rule, length)
    }

    /// Generates [`DEFAULT_LENGTH`] elements using the rule called `rule`.
    pub fn with_default_length(
        start: impl Into<SequenceElement>,
        rule: &str,
    ) -> Result<SequenceGenerator, SequenceGenerationError> {
        SequenceGenerator::new(start, rule, DEFAULT_LENGTH)
    }

    /// Generates `length` elements using `rule`.
    ///
    /// The rules which extend their start arithmetically (see [`Rule::uses_start`]) fail with
    /// [`SequenceGenerationError::NonIntegerStart`] when `start` is not an integer; any rule
    /// fails with [`SequenceGenerationError::ArithmeticOverflow`] when its values outgrow `i64`.
    pub fn with_rule(
        start: impl Into<SequenceElement>,
        rule: Rule,
        length: usize,
    ) -> Result<SequenceGenerator, SequenceGenerationError> {
        let start = start.into();
        debug!("Generating a sequence with rule {rule}, start {start} and length {length}");

        let mut statistics = GenerationStatistics::default();
        let generation_start = Instant::now();

        let elements = rules::generate(rule, &start, length, &mut statistics)?;

        statistics.generation_time = generation_start.elapsed();
        statistics.num_elements = elements.len();

        seqgen_assert_eq_simple!(
            elements.len(),
            rule.sequence_length(length),
            "{rule} produced a sequence of unexpected length"
        );
        if elements.len() < length {
            debug!(
                "Rule {rule} produced {} of the {length} requested elements",
                elements.len()
            );
        }
        trace!("Generated {} elements with rule {rule}", elements.len());

        Ok(SequenceGenerator {
            start,
            rule,
            length,
            sequence: Sequence::new(elements),
            statistics,
        })
    }

    /// The generated sequence.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Consumes the generator, returning the generated sequence.
    pub fn into_sequence(self) -> Sequence {
        self.sequence
    }

    pub fn start(&self) -> &SequenceElement {
        &self.start
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The requested length, which is not necessarily the length of the sequence (see
    /// [`Rule::sequence_length`]).
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn statistics(&self) -> &GenerationStatistics {
        &self.statistics
    }

    /// Logs the [`GenerationStatistics`] if statistic logging has been configured.
    pub fn log_statistics(&self) {
        self.statistics.log();
    }
}
