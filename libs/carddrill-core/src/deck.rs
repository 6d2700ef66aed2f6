//! The session deck: card histories plus an organization pipeline.
//!
//! The deck owns one [`CardStatus`] per card for the whole session and never
//! caches an ordering. Every [`CardDeck::next_card`] call re-runs the
//! organizer over the current histories, so the presentation order always
//! reflects the latest answers.

use serde::Serialize;

use crate::error::DeckError;
use crate::organizer::{CardOrganizer, CombinedOrganizer};
use crate::types::{CardStatus, FlashCard};

/// Whether the deck still has cards to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckState {
    Active,
    Exhausted,
}

pub struct CardDeck {
    cards: Vec<CardStatus>,
    organizer: CombinedOrganizer,
}

impl CardDeck {
    /// Starts a session over `cards` with empty histories. A deck built from
    /// no cards is valid and starts out exhausted.
    pub fn new(cards: Vec<FlashCard>, organizer: CombinedOrganizer) -> Self {
        Self {
            cards: cards.into_iter().map(CardStatus::new).collect(),
            organizer,
        }
    }

    /// The card to present next, or `None` when the deck is exhausted.
    /// Calling this repeatedly without recording an answer in between is
    /// allowed; only [`CardDeck::record_answer`] changes the histories the
    /// organizer sees.
    pub fn next_card(&self) -> Option<FlashCard> {
        self.organized()
            .into_iter()
            .next()
            .map(|status| status.card().clone())
    }

    /// Appends `correct` to the history of `card`. This is the only way a
    /// session advances; the deck becomes exhausted once the organizer
    /// filters out every card.
    pub fn record_answer(&mut self, card: &FlashCard, correct: bool) -> Result<(), DeckError> {
        let status = self
            .cards
            .iter_mut()
            .find(|status| status.card() == card)
            .ok_or_else(|| DeckError::UnknownCard {
                question: card.question().to_owned(),
            })?;
        status.record(correct);
        Ok(())
    }

    pub fn state(&self) -> DeckState {
        if self.organized().is_empty() {
            DeckState::Exhausted
        } else {
            DeckState::Active
        }
    }

    /// How many cards the organizer still presents.
    pub fn remaining(&self) -> usize {
        self.organized().len()
    }

    /// Total number of cards in the session, including finished ones.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Per-card histories in original card-source order.
    pub fn statuses(&self) -> &[CardStatus] {
        &self.cards
    }

    fn organized(&self) -> Vec<CardStatus> {
        self.organizer.reorganize(self.cards.clone())
    }
}
