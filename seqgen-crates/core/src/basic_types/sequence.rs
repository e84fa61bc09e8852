use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Index;

use itertools::Itertools;

use super::SequenceElement;

/// A finite, ordered list of [`SequenceElement`]s produced by a single rule.
///
/// A sequence cannot be modified once it has been generated; it only offers read access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    elements: Vec<SequenceElement>,
}

impl Sequence {
    pub(crate) fn new(elements: Vec<SequenceElement>) -> Sequence {
        Sequence { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SequenceElement> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequenceElement> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[SequenceElement] {
        &self.elements
    }

    /// Renders every element with its [`Display`] implementation.
    pub fn to_strings(&self) -> Vec<String> {
        self.elements.iter().map(ToString::to_string).collect()
    }

    /// Returns the integer values of the sequence, or [`None`] if any element is not an integer.
    pub fn to_integers(&self) -> Option<Vec<i64>> {
        self.elements
            .iter()
            .map(SequenceElement::as_integer)
            .collect()
    }
}

impl Index<usize> for Sequence {
    type Output = SequenceElement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl IntoIterator for Sequence {
    type Item = SequenceElement;
    type IntoIter = std::vec::IntoIter<SequenceElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a SequenceElement;
    type IntoIter = std::slice::Iter<'a, SequenceElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.elements.iter().join(", "))
    }
}
