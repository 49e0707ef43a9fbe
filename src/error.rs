use std::io;
use thiserror::Error;

/// Errors raised while turning external input into an integer sequence.
///
/// Grouping itself never fails: once a `&[Value]` exists, every sequence is
/// valid input.
#[derive(Debug, Error)]
pub enum PairSumError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PairSumError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        PairSumError::InvalidInput {
            reason: reason.into(),
        }
    }
}
