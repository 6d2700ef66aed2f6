//! Repetition filters: organizers that drop finished cards and leave the
//! relative order of the rest untouched.

use crate::error::DeckError;
use crate::types::CardStatus;

use super::CardOrganizer;

/// Keeps only cards that have never been answered, so each card is shown
/// exactly once per session.
pub struct NonRepeatingFilter;

impl CardOrganizer for NonRepeatingFilter {
    fn name(&self) -> &'static str {
        "non-repeating"
    }

    fn reorganize(&self, cards: Vec<CardStatus>) -> Vec<CardStatus> {
        cards
            .into_iter()
            .filter(|status| status.attempts() == 0)
            .collect()
    }
}

/// Keeps cards until they have been answered correctly `repetitions` times
/// in total. Wrong answers never remove a card.
pub struct RepeatingFilter {
    repetitions: usize,
}

impl RepeatingFilter {
    pub fn new(repetitions: usize) -> Result<Self, DeckError> {
        if repetitions < 1 {
            return Err(DeckError::InvalidConfiguration { repetitions });
        }
        Ok(Self { repetitions })
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }
}

impl CardOrganizer for RepeatingFilter {
    fn name(&self) -> &'static str {
        "repeating"
    }

    fn reorganize(&self, cards: Vec<CardStatus>) -> Vec<CardStatus> {
        cards
            .into_iter()
            .filter(|status| status.correct_count() < self.repetitions)
            .collect()
    }
}
