use super::Rule;
use super::overflow;
use crate::basic_types::SequenceElement;
use crate::basic_types::SequenceGenerationError;

const RECURRENCE_SEEDS: [i64; 2] = [5, 10];
const RECURRENCE_FACTOR: i64 = 5;

/// `f(i) = 5 * f(i - 1) + f(i - 2)`, seeded with 5 and 10.
///
/// Both seeds are always present, so lengths below 2 still produce `[5, 10]`.
pub(crate) fn recurrence_relation(
    length: usize,
) -> Result<Vec<SequenceElement>, SequenceGenerationError> {
    let mut values = RECURRENCE_SEEDS.to_vec();

    for position in RECURRENCE_SEEDS.len()..length {
        let next_value = values[position - 1]
            .checked_mul(RECURRENCE_FACTOR)
            .and_then(|value| value.checked_add(values[position - 2]))
            .ok_or_else(|| overflow(Rule::RecurrenceRelation, position))?;
        values.push(next_value);
    }

    Ok(values.into_iter().map(SequenceElement::Integer).collect())
}
