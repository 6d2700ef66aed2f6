//! Core types for a drill session.

use serde::{Deserialize, Serialize};

/// A question/answer pair. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlashCard {
    question: String,
    answer: String,
}

impl FlashCard {
    /// Create a card, trimming surrounding whitespace from both sides.
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// A new card with question and answer swapped. The original card is
    /// untouched.
    pub fn inverted(&self) -> FlashCard {
        FlashCard {
            question: self.answer.clone(),
            answer: self.question.clone(),
        }
    }
}

/// A card together with the ordered history of results it has received this
/// session (`true` = answered correctly). The history is append-only;
/// recording goes through the owning deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardStatus {
    card: FlashCard,
    results: Vec<bool>,
}

impl CardStatus {
    /// Wrap a freshly loaded card with an empty history.
    pub fn new(card: FlashCard) -> Self {
        Self {
            card,
            results: Vec::new(),
        }
    }

    pub fn card(&self) -> &FlashCard {
        &self.card
    }

    /// Every recorded result, oldest first.
    pub fn results(&self) -> &[bool] {
        &self.results
    }

    pub fn attempts(&self) -> usize {
        self.results.len()
    }

    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|correct| **correct).count()
    }

    pub fn mistake_count(&self) -> usize {
        self.results.iter().filter(|correct| !**correct).count()
    }

    /// The most recent result, or `None` for a card that has not been
    /// answered yet.
    pub fn last_result(&self) -> Option<bool> {
        self.results.last().copied()
    }

    /// Append one result. Crate-private: the deck is the sole mutator of
    /// card histories.
    pub(crate) fn record(&mut self, correct: bool) {
        self.results.push(correct);
    }
}

/// Which prioritization policy orders the cards still in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingMode {
    Random,
    WorstFirst,
    RecentMistakesFirst,
}

impl Default for OrderingMode {
    fn default() -> Self {
        Self::Random
    }
}

impl OrderingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::WorstFirst => "worst-first",
            Self::RecentMistakesFirst => "recent-mistakes-first",
        }
    }

    /// Parse from the CLI spelling.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "random" => Some(Self::Random),
            "worst-first" => Some(Self::WorstFirst),
            "recent-mistakes-first" => Some(Self::RecentMistakesFirst),
            _ => None,
        }
    }
}

/// How a typed response is compared against a card's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchingMode {
    Exact,
    CaseInsensitive,
    Fuzzy,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::CaseInsensitive
    }
}

impl MatchingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::CaseInsensitive => "case-insensitive",
            Self::Fuzzy => "fuzzy",
        }
    }

    /// Parse from the CLI spelling.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "exact" => Some(Self::Exact),
            "case-insensitive" => Some(Self::CaseInsensitive),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_card_trims_whitespace() {
        let card = FlashCard::new("  die Katze ", " the cat\t");
        assert_eq!(card.question(), "die Katze");
        assert_eq!(card.answer(), "the cat");
    }

    #[test]
    fn inverted_swaps_sides_without_touching_original() {
        let card = FlashCard::new("die Katze", "the cat");
        let inverted = card.inverted();
        assert_eq!(inverted.question(), "the cat");
        assert_eq!(inverted.answer(), "die Katze");
        assert_eq!(card.question(), "die Katze");
    }

    #[test]
    fn status_counts_follow_recorded_results() {
        let mut status = CardStatus::new(FlashCard::new("q", "a"));
        assert_eq!(status.attempts(), 0);
        assert_eq!(status.last_result(), None);

        status.record(false);
        status.record(true);
        status.record(true);

        assert_eq!(status.attempts(), 3);
        assert_eq!(status.correct_count(), 2);
        assert_eq!(status.mistake_count(), 1);
        assert_eq!(status.last_result(), Some(true));
        assert_eq!(status.results(), &[false, true, true]);
    }

    #[test]
    fn ordering_mode_round_trips_cli_spelling() {
        for mode in [
            OrderingMode::Random,
            OrderingMode::WorstFirst,
            OrderingMode::RecentMistakesFirst,
        ] {
            assert_eq!(OrderingMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(OrderingMode::from_str("best-first"), None);
    }

    #[test]
    fn matching_mode_round_trips_cli_spelling() {
        for mode in [
            MatchingMode::Exact,
            MatchingMode::CaseInsensitive,
            MatchingMode::Fuzzy,
        ] {
            assert_eq!(MatchingMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(MatchingMode::from_str("exactly"), None);
    }

    #[test]
    fn mode_serde_names_match_cli_spelling() {
        assert_eq!(
            serde_json::to_string(&OrderingMode::RecentMistakesFirst).unwrap(),
            "\"recent-mistakes-first\""
        );
        assert_eq!(
            serde_json::to_string(&MatchingMode::CaseInsensitive).unwrap(),
            "\"case-insensitive\""
        );
    }
}
