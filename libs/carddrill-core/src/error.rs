//! Error types for carddrill-core.

use thiserror::Error;

/// Errors that can occur while parsing a card file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing question at line {line}")]
    MissingQuestion { line: usize },

    #[error("missing answer at line {line}")]
    MissingAnswer { line: usize },

    #[error("duplicate card {question:?} at line {line}")]
    DuplicateCard { line: usize, question: String },
}

/// Errors raised by deck configuration and answer recording.
#[derive(Debug, Error)]
pub enum DeckError {
    /// A repeating filter was configured with zero required successes.
    #[error("repetition count must be at least 1, got {repetitions}")]
    InvalidConfiguration { repetitions: usize },

    /// The answered card is not part of the deck's owned set.
    #[error("unknown card: {question:?}")]
    UnknownCard { question: String },
}
