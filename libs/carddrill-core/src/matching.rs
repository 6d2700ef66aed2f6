//! Answer judging for the prompt loop.

use crate::types::MatchingMode;
use serde::Serialize;

/// Outcome of comparing a typed response to a card's answer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Verdict {
    /// Whether the response counts as correct.
    pub correct: bool,
    /// Similarity between 0.0 and 1.0. Outside fuzzy mode this is always
    /// 0.0 or 1.0.
    pub similarity: f64,
}

/// Compare a typed response against the expected answer.
///
/// Whitespace is normalized on both sides first, so spacing never decides
/// correctness. `fuzzy_threshold` only matters in fuzzy mode.
pub fn judge(typed: &str, expected: &str, mode: MatchingMode, fuzzy_threshold: f64) -> Verdict {
    let typed = normalize_whitespace(typed);
    let expected = normalize_whitespace(expected);

    match mode {
        MatchingMode::Exact => all_or_nothing(typed == expected),
        MatchingMode::CaseInsensitive => {
            all_or_nothing(typed.to_lowercase() == expected.to_lowercase())
        }
        MatchingMode::Fuzzy => {
            let similarity = similarity(&typed.to_lowercase(), &expected.to_lowercase());
            Verdict {
                correct: similarity >= fuzzy_threshold,
                similarity,
            }
        }
    }
}

fn all_or_nothing(correct: bool) -> Verdict {
    Verdict {
        correct,
        similarity: if correct { 1.0 } else { 0.0 },
    }
}

/// Trim and collapse runs of whitespace into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized Levenshtein similarity: 1.0 for identical strings, towards
/// 0.0 as the edit distance approaches the longer string's length.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

/// Edit distance over chars, single-row dynamic programming.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let substitute = if ca == *cb { diagonal } else { diagonal + 1 };
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[b_chars.len()]
}
