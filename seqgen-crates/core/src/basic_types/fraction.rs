use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use thiserror::Error;

/// A pair of integers displayed as `numerator/denominator`.
///
/// The pair is kept exactly as it was built; it is never reduced, so `24/12` and `2/1` are
/// different fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub const fn new(numerator: i64, denominator: i64) -> Fraction {
        Fraction {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Returned when a string is not of the form `<integer>/<integer>`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected a fraction of the form 'numerator/denominator'")]
pub struct ParseFractionError;

impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = s.split_once('/').ok_or(ParseFractionError)?;

        let numerator = numerator.trim().parse().map_err(|_| ParseFractionError)?;
        let denominator = denominator.trim().parse().map_err(|_| ParseFractionError)?;

        Ok(Fraction::new(numerator, denominator))
    }
}
