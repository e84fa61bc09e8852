use thiserror::Error;

use seqgen::SequenceGenerationError;

pub(crate) type SeqgenResult<T> = Result<T, SeqgenError>;

#[derive(Error, Debug)]
pub(crate) enum SeqgenError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to configure logging, more details: {0}")]
    Logging(#[from] log::SetLoggerError),
    #[error("Failed to generate the sequence, more details: {0}")]
    Generation(#[from] SequenceGenerationError),
}
