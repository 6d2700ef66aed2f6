//! The card organization pipeline.
//!
//! An organizer is a pure transform over a sequence of [`CardStatus`]:
//! prioritizers reorder without dropping anything, repetition filters drop
//! finished cards without reordering, and [`CombinedOrganizer`] chains any
//! number of organizers left to right. Organizers hold no session state, so
//! the deck can re-run them freely after every recorded answer.

pub mod prioritization;
pub mod repetition;

use crate::error::DeckError;
use crate::types::{CardStatus, OrderingMode};

pub use prioritization::{MostMistakesFirstSorter, RecentMistakesFirstSorter, Shuffler};
pub use repetition::{NonRepeatingFilter, RepeatingFilter};

/// A pure reordering/filtering policy over session card statuses.
pub trait CardOrganizer: Send + Sync {
    /// Policy identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Produce the next presentation sequence from `cards`.
    fn reorganize(&self, cards: Vec<CardStatus>) -> Vec<CardStatus>;
}

/// Sequential composition of organizers, applied left to right: each stage
/// consumes the previous stage's output. An empty list is the identity
/// transform.
pub struct CombinedOrganizer {
    organizers: Vec<Box<dyn CardOrganizer>>,
}

impl CombinedOrganizer {
    pub fn new(organizers: Vec<Box<dyn CardOrganizer>>) -> Self {
        Self { organizers }
    }

    /// The standard session pipeline: drop finished cards first, then apply
    /// the configured prioritization to whatever remains. `repetitions:
    /// None` means every card is shown exactly once.
    pub fn for_session(
        mode: OrderingMode,
        repetitions: Option<usize>,
    ) -> Result<Self, DeckError> {
        let filter: Box<dyn CardOrganizer> = match repetitions {
            Some(required) => Box::new(RepeatingFilter::new(required)?),
            None => Box::new(NonRepeatingFilter),
        };
        let prioritizer: Box<dyn CardOrganizer> = match mode {
            OrderingMode::Random => Box::new(Shuffler),
            OrderingMode::WorstFirst => Box::new(MostMistakesFirstSorter),
            OrderingMode::RecentMistakesFirst => Box::new(RecentMistakesFirstSorter),
        };
        Ok(Self::new(vec![filter, prioritizer]))
    }
}

impl CardOrganizer for CombinedOrganizer {
    fn name(&self) -> &'static str {
        "combined"
    }

    fn reorganize(&self, cards: Vec<CardStatus>) -> Vec<CardStatus> {
        self.organizers
            .iter()
            .fold(cards, |cards, organizer| organizer.reorganize(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FlashCard;
    use pretty_assertions::assert_eq;

    fn status(question: &str, results: &[bool]) -> CardStatus {
        let mut status = CardStatus::new(FlashCard::new(question, "answer"));
        for &correct in results {
            status.record(correct);
        }
        status
    }

    #[test]
    fn empty_list_is_identity() {
        let cards = vec![status("a", &[true]), status("b", &[]), status("c", &[false])];
        let combined = CombinedOrganizer::new(Vec::new());
        assert_eq!(combined.reorganize(cards.clone()), cards);
    }

    #[test]
    fn combined_equals_manual_composition() {
        let cards = vec![
            status("a", &[true]),
            status("b", &[]),
            status("c", &[false, false]),
            status("d", &[false]),
        ];
        let combined = CombinedOrganizer::new(vec![
            Box::new(NonRepeatingFilter),
            Box::new(MostMistakesFirstSorter),
        ]);
        let chained =
            MostMistakesFirstSorter.reorganize(NonRepeatingFilter.reorganize(cards.clone()));
        assert_eq!(combined.reorganize(cards), chained);
    }

    #[test]
    fn later_stages_see_the_reduced_sequence() {
        // The filter drops every answered card before the sorter runs, so
        // the mistakes on "c" never influence the output.
        let cards = vec![
            status("a", &[]),
            status("b", &[]),
            status("c", &[false, false, false]),
        ];
        let combined = CombinedOrganizer::new(vec![
            Box::new(NonRepeatingFilter),
            Box::new(MostMistakesFirstSorter),
        ]);
        let organized = combined.reorganize(cards);
        let questions: Vec<&str> = organized.iter().map(|s| s.card().question()).collect();
        assert_eq!(questions, vec!["a", "b"]);
    }

    #[test]
    fn for_session_rejects_zero_repetitions() {
        let result = CombinedOrganizer::for_session(OrderingMode::Random, Some(0));
        assert!(matches!(
            result,
            Err(DeckError::InvalidConfiguration { repetitions: 0 })
        ));
    }

    #[test]
    fn for_session_filters_before_prioritizing() {
        let cards = vec![
            status("done", &[true]),
            status("pending", &[]),
        ];
        let combined =
            CombinedOrganizer::for_session(OrderingMode::WorstFirst, None).unwrap();
        let organized = combined.reorganize(cards);
        assert_eq!(organized.len(), 1);
        assert_eq!(organized[0].card().question(), "pending");
    }

    #[test]
    fn for_session_repeating_keeps_cards_until_enough_successes() {
        let cards = vec![
            status("learned", &[true, true]),
            status("struggling", &[false, true]),
        ];
        let combined =
            CombinedOrganizer::for_session(OrderingMode::WorstFirst, Some(2)).unwrap();
        let organized = combined.reorganize(cards);
        assert_eq!(organized.len(), 1);
        assert_eq!(organized[0].card().question(), "struggling");
    }
}
