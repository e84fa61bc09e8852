mod fraction;
mod sequence;
mod sequence_element;
mod sequence_generation_error;

pub use fraction::Fraction;
pub use fraction::ParseFractionError;
pub use sequence::Sequence;
pub use sequence_element::SequenceElement;
pub use sequence_generation_error::SequenceGenerationError;
