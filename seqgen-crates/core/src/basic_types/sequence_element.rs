use std::convert::Infallible;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use super::Fraction;

/// A single value of a [`Sequence`](super::Sequence).
///
/// Rules produce plain integers, `numerator/denominator` fractions, or (for the literal tables)
/// fixed strings. Every variant renders through [`Display`] the way it is written in the rule
/// tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SequenceElement {
    Integer(i64),
    Fraction(Fraction),
    Text(String),
}

impl SequenceElement {
    /// Returns the value if this element is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SequenceElement::Integer(value) => Some(*value),
            SequenceElement::Fraction(_) | SequenceElement::Text(_) => None,
        }
    }

    /// Returns the fraction if this element is a fraction.
    pub fn as_fraction(&self) -> Option<Fraction> {
        match self {
            SequenceElement::Fraction(fraction) => Some(*fraction),
            SequenceElement::Integer(_) | SequenceElement::Text(_) => None,
        }
    }
}

impl Display for SequenceElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceElement::Integer(value) => write!(f, "{value}"),
            SequenceElement::Fraction(fraction) => write!(f, "{fraction}"),
            SequenceElement::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<i64> for SequenceElement {
    fn from(value: i64) -> Self {
        SequenceElement::Integer(value)
    }
}

impl From<i32> for SequenceElement {
    fn from(value: i32) -> Self {
        SequenceElement::Integer(i64::from(value))
    }
}

impl From<Fraction> for SequenceElement {
    fn from(value: Fraction) -> Self {
        SequenceElement::Fraction(value)
    }
}

impl From<&str> for SequenceElement {
    fn from(value: &str) -> Self {
        SequenceElement::Text(value.to_owned())
    }
}

impl From<String> for SequenceElement {
    fn from(value: String) -> Self {
        SequenceElement::Text(value)
    }
}

/// Interprets user input: decimal integers become [`SequenceElement::Integer`], `n/d` becomes
/// [`SequenceElement::Fraction`], and anything else is kept as [`SequenceElement::Text`].
///
/// Surrounding whitespace is ignored in every case.
impl FromStr for SequenceElement {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(value) = s.parse::<i64>() {
            return Ok(SequenceElement::Integer(value));
        }

        if let Ok(fraction) = s.parse::<Fraction>() {
            return Ok(SequenceElement::Fraction(fraction));
        }

        Ok(SequenceElement::Text(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceElement;
    use crate::basic_types::Fraction;

    #[test]
    fn parsing_prefers_integers_then_fractions() {
        assert_eq!(
            "42".parse::<SequenceElement>(),
            Ok(SequenceElement::Integer(42))
        );
        assert_eq!(
            "5/6".parse::<SequenceElement>(),
            Ok(SequenceElement::Fraction(Fraction::new(5, 6)))
        );
        assert_eq!(
            "five".parse::<SequenceElement>(),
            Ok(SequenceElement::Text("five".to_owned()))
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored_for_every_variant() {
        assert_eq!(
            " 42 ".parse::<SequenceElement>(),
            Ok(SequenceElement::Integer(42))
        );
        assert_eq!(
            " 5/6\t".parse::<SequenceElement>(),
            Ok(SequenceElement::Fraction(Fraction::new(5, 6)))
        );
        assert_eq!(
            "  five ".parse::<SequenceElement>(),
            Ok(SequenceElement::Text("five".to_owned()))
        );
    }

    #[test]
    fn display_matches_the_written_form() {
        assert_eq!(SequenceElement::from(1).to_string(), "1");
        assert_eq!(SequenceElement::from("2").to_string(), "2");
        assert_eq!(SequenceElement::from(Fraction::new(21, 7)).to_string(), "21/7");
    }

    #[test]
    fn accessors_only_match_their_own_variant() {
        let integer = SequenceElement::from(7);
        let fraction = SequenceElement::from(Fraction::new(7, 9));

        assert_eq!(integer.as_integer(), Some(7));
        assert_eq!(integer.as_fraction(), None);
        assert_eq!(fraction.as_integer(), None);
        assert_eq!(fraction.as_fraction(), Some(Fraction::new(7, 9)));
    }
}
