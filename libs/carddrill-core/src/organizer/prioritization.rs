//! Prioritizers: organizers that reorder cards without dropping any.

use std::cmp::Reverse;

use rand::seq::SliceRandom;

use crate::types::CardStatus;

use super::CardOrganizer;

/// Presents cards in a fresh random order on every pass.
pub struct Shuffler;

impl CardOrganizer for Shuffler {
    fn name(&self) -> &'static str {
        "random"
    }

    fn reorganize(&self, mut cards: Vec<CardStatus>) -> Vec<CardStatus> {
        cards.shuffle(&mut rand::thread_rng());
        cards
    }
}

/// Sorts cards by total mistakes, most first. Cards with equal mistake
/// counts keep their incoming relative order.
pub struct MostMistakesFirstSorter;

impl CardOrganizer for MostMistakesFirstSorter {
    fn name(&self) -> &'static str {
        "worst-first"
    }

    fn reorganize(&self, mut cards: Vec<CardStatus>) -> Vec<CardStatus> {
        cards.sort_by_key(|status| Reverse(status.mistake_count()));
        cards
    }
}

/// Moves cards whose most recent answer was wrong ahead of cards answered
/// correctly last time. A card with no answers yet counts as recently
/// wrong, so unseen cards surface before reviewed ones. Relative order
/// inside each group is preserved.
pub struct RecentMistakesFirstSorter;

impl CardOrganizer for RecentMistakesFirstSorter {
    fn name(&self) -> &'static str {
        "recent-mistakes-first"
    }

    fn reorganize(&self, cards: Vec<CardStatus>) -> Vec<CardStatus> {
        let (mut missed, correct): (Vec<_>, Vec<_>) = cards
            .into_iter()
            .partition(|status| status.last_result() != Some(true));
        missed.extend(correct);
        missed
    }
}
