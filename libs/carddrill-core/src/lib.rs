//! Core study-session library for the carddrill CLI.
//!
//! Provides:
//! - Parser for plain-text card files
//! - Card organizers (repetition filters, prioritizers) and their composition
//! - The session deck state machine
//! - Answer matching for typed mode (Levenshtein distance)
//!
//! Everything here is synchronous and free of I/O; the CLI app owns the
//! terminal and the filesystem.

pub mod deck;
pub mod error;
pub mod matching;
pub mod organizer;
pub mod parser;
pub mod types;

pub use deck::{CardDeck, DeckState};
pub use error::{DeckError, ParseError};
pub use matching::{judge, levenshtein, similarity, Verdict};
pub use organizer::{
    CardOrganizer, CombinedOrganizer, MostMistakesFirstSorter, NonRepeatingFilter,
    RecentMistakesFirstSorter, RepeatingFilter, Shuffler,
};
pub use parser::parse;
pub use types::{CardStatus, FlashCard, MatchingMode, OrderingMode};
