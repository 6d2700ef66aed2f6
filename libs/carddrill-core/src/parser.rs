//! Card-file parser.
//!
//! # Format
//! ```text
//! # German nouns
//! die Katze,the cat
//! der Hund,the dog
//! das Buch,the book
//! ```
//!
//! One card per line: question, comma, answer. Only the first comma splits;
//! later commas belong to the answer. Blank lines and lines starting with
//! `#` are skipped. Both sides are trimmed.

use crate::error::ParseError;
use crate::types::FlashCard;
use std::collections::HashSet;

/// Parse card-file content into cards, preserving file order.
///
/// Empty or comment-only content yields an empty Vec; deciding what
/// "nothing to study" means is up to the caller.
pub fn parse(content: &str) -> Result<Vec<FlashCard>, ParseError> {
    let mut cards = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (question, answer) = trimmed
            .split_once(',')
            .ok_or(ParseError::MissingAnswer { line })?;
        let card = FlashCard::new(question, answer);
        if card.question().is_empty() {
            return Err(ParseError::MissingQuestion { line });
        }
        if card.answer().is_empty() {
            return Err(ParseError::MissingAnswer { line });
        }

        // Duplicate pairs are rejected so a card's history stays unambiguous
        // when the deck matches answers back by value.
        if !seen.insert(card.clone()) {
            return Err(ParseError::DuplicateCard {
                line,
                question: card.question().to_string(),
            });
        }
        cards.push(card);
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_single_card() {
        let cards = parse("die Katze,the cat").unwrap();
        assert_eq!(cards, vec![FlashCard::new("die Katze", "the cat")]);
    }

    #[test]
    fn parse_preserves_file_order() {
        let cards = parse("a,1\nb,2\nc,3").unwrap();
        let questions: Vec<&str> = cards.iter().map(|c| c.question()).collect();
        assert_eq!(questions, vec!["a", "b", "c"]);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let input = "# header\n\ndie Katze,the cat\n   \n# trailing\n";
        let cards = parse(input).unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn only_first_comma_splits() {
        let cards = parse("greeting,hello, world").unwrap();
        assert_eq!(cards[0].question(), "greeting");
        assert_eq!(cards[0].answer(), "hello, world");
    }

    #[test]
    fn sides_are_trimmed() {
        let cards = parse("  die Katze , the cat  ").unwrap();
        assert_eq!(cards[0].question(), "die Katze");
        assert_eq!(cards[0].answer(), "the cat");
    }

    #[test]
    fn line_without_comma_is_missing_answer() {
        let result = parse("a,1\njust a question");
        assert!(matches!(result, Err(ParseError::MissingAnswer { line: 2 })));
    }

    #[test]
    fn empty_answer_side_is_missing_answer() {
        let result = parse("question,   ");
        assert!(matches!(result, Err(ParseError::MissingAnswer { line: 1 })));
    }

    #[test]
    fn empty_question_side_is_missing_question() {
        let result = parse(",the cat");
        assert!(matches!(result, Err(ParseError::MissingQuestion { line: 1 })));
    }

    #[test]
    fn duplicate_pair_is_rejected_with_line_number() {
        let input = "a,1\nb,2\na,1";
        let result = parse(input);
        assert!(matches!(
            result,
            Err(ParseError::DuplicateCard { line: 3, .. })
        ));
    }

    #[test]
    fn same_question_different_answer_is_allowed() {
        let cards = parse("bank,river bank\nbank,money bank").unwrap();
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn whitespace_variants_count_as_duplicates() {
        let result = parse("a,1\n  a , 1 ");
        assert!(matches!(
            result,
            Err(ParseError::DuplicateCard { line: 2, .. })
        ));
    }

    #[test]
    fn empty_content_parses_to_no_cards() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("# only comments\n\n").unwrap().is_empty());
    }
}
