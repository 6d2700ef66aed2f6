//! The interactive prompt loop and end-of-session reporting.
//!
//! The loop is generic over its reader and writer so tests can script a
//! whole session through in-memory buffers.

use std::cmp::Reverse;
use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use carddrill_core::{judge, CardDeck, DeckState, FlashCard, MatchingMode, Verdict};

/// Answer-comparison settings for the session.
pub struct Judge {
    pub mode: MatchingMode,
    pub fuzzy_threshold: f64,
}

impl Judge {
    fn verdict(&self, typed: &str, expected: &str) -> Verdict {
        judge(typed, expected, self.mode, self.fuzzy_threshold)
    }
}

/// Per-card outcome included in the session summary.
#[derive(Debug, Serialize)]
pub struct CardReport {
    card: FlashCard,
    attempts: usize,
    correct: usize,
    mistakes: usize,
}

/// End-of-session accounting, printed to the terminal and optionally
/// exported as JSON.
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub deck_size: usize,
    pub answers: usize,
    pub correct: usize,
    /// Fraction of answers that were correct, 0.0 when nothing was answered.
    pub accuracy: f64,
    pub elapsed_secs: f64,
    /// True when `input` ended before the deck was exhausted.
    pub abandoned: bool,
    cards: Vec<CardReport>,
}

/// Runs the deck until it is exhausted or `input` ends, reading answers from
/// `input` and writing prompts and feedback to `output`.
pub fn run<R: BufRead, W: Write>(
    deck: &mut CardDeck,
    judge: &Judge,
    mut input: R,
    mut output: W,
) -> Result<SessionSummary> {
    let started = Instant::now();
    let mut answers = 0usize;
    let mut correct = 0usize;
    let mut abandoned = false;

    if deck.state() == DeckState::Exhausted {
        writeln!(output, "Nothing to study: the card file has no cards.")?;
        return Ok(summarize(deck, answers, correct, started, abandoned));
    }

    while let Some(card) = deck.next_card() {
        writeln!(output)?;
        writeln!(output, "[{} left] {}", deck.remaining(), card.question())?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            abandoned = true;
            break;
        }
        let typed = line.trim_end();

        let verdict = judge.verdict(typed, card.answer());
        debug!(
            question = card.question(),
            correct = verdict.correct,
            similarity = verdict.similarity,
            "answer judged"
        );

        if verdict.correct {
            writeln!(output, "Correct!")?;
            correct += 1;
        } else if verdict.similarity > 0.0 {
            writeln!(
                output,
                "Incorrect ({:.0}% close). The answer is: {}",
                verdict.similarity * 100.0,
                card.answer()
            )?;
        } else {
            writeln!(output, "Incorrect. The answer is: {}", card.answer())?;
        }
        answers += 1;
        deck.record_answer(&card, verdict.correct)?;
    }

    let summary = summarize(deck, answers, correct, started, abandoned);
    print_summary(&mut output, &summary)?;
    Ok(summary)
}

fn summarize(
    deck: &CardDeck,
    answers: usize,
    correct: usize,
    started: Instant,
    abandoned: bool,
) -> SessionSummary {
    let cards = deck
        .statuses()
        .iter()
        .map(|status| CardReport {
            card: status.card().clone(),
            attempts: status.attempts(),
            correct: status.correct_count(),
            mistakes: status.mistake_count(),
        })
        .collect();
    let accuracy = if answers == 0 {
        0.0
    } else {
        correct as f64 / answers as f64
    };
    SessionSummary {
        deck_size: deck.len(),
        answers,
        correct,
        accuracy,
        elapsed_secs: started.elapsed().as_secs_f64(),
        abandoned,
        cards,
    }
}

fn print_summary<W: Write>(output: &mut W, summary: &SessionSummary) -> Result<()> {
    writeln!(output)?;
    if summary.abandoned {
        writeln!(
            output,
            "Session abandoned after {} answers.",
            summary.answers
        )?;
    } else {
        writeln!(output, "Deck finished.")?;
    }
    writeln!(
        output,
        "{} cards, {} answers, {} correct ({:.0}% accuracy) in {:.0}s",
        summary.deck_size,
        summary.answers,
        summary.correct,
        summary.accuracy * 100.0,
        summary.elapsed_secs
    )?;

    let mut troubled: Vec<&CardReport> =
        summary.cards.iter().filter(|card| card.mistakes > 0).collect();
    if !troubled.is_empty() {
        troubled.sort_by_key(|card| Reverse(card.mistakes));
        writeln!(output, "Trouble cards:")?;
        for report in troubled.iter().take(5) {
            writeln!(
                output,
                "  {} ({} mistakes): {}",
                report.card.question(),
                report.mistakes,
                report.card.answer()
            )?;
        }
    }
    Ok(())
}
