use thiserror::Error;

use super::SequenceElement;
use crate::rules::Rule;

#[cfg(doc)]
use crate::SequenceGenerator;

/// Errors which can occur when constructing a [`SequenceGenerator`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceGenerationError {
    /// The rule name does not match any rule in the catalog.
    #[error("Unknown rule: {0}")]
    UnknownRule(String),
    /// The rule extends its starting value arithmetically, but the provided start is not an
    /// integer.
    #[error("The rule {rule} requires an integer start, but {start} was provided")]
    NonIntegerStart { rule: Rule, start: SequenceElement },
    /// Computing the element at `position` does not fit in an `i64`.
    #[error("The rule {rule} overflowed while computing the element at position {position}")]
    ArithmeticOverflow { rule: Rule, position: usize },
}
