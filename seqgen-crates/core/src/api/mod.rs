mod sequence_generator;

pub use sequence_generator::DEFAULT_LENGTH;
pub use sequence_generator::SequenceGenerator;
