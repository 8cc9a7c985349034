//! Candidate word checking command

use crate::puzzle::Puzzle;
use crate::validation::{ValidationService, Verdict};
use std::sync::Arc;

/// Outcome of checking one candidate word against a puzzle
pub struct CheckResult {
    /// The candidate as entered
    pub word: String,
    /// Date key of the puzzle checked against
    pub puzzle_id: String,
    /// Validation outcome
    pub verdict: Verdict,
}

/// Check a candidate word against a puzzle's letter set
///
/// Runs through the deferred validation path, the same one an interactive
/// front-end would use per keystroke.
pub async fn check_word(
    service: &Arc<ValidationService>,
    puzzle: &Puzzle,
    word: &str,
) -> CheckResult {
    let rx = service.check_deferred(word.to_string(), puzzle.letters);
    let verdict = rx.await.unwrap_or(Verdict::Pending);

    CheckResult {
        word: word.to_string(),
        puzzle_id: puzzle.puzzle_id.clone(),
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use crate::dictionary::Dictionary;
    use crate::validation::RejectReason;

    fn fixture() -> (Arc<ValidationService>, Puzzle) {
        let dict = Arc::new(Dictionary::from_words(["apple", "plea", "peal"]));
        let service = Arc::new(ValidationService::new(Arc::clone(&dict)));
        let letters = LetterSet::new('p', ['a', 'l', 'e', 'x', 'y', 'z']).unwrap();
        let puzzle = Puzzle::build(
            "2024-06-15".to_string(),
            letters,
            vec!["apple".to_string(), "peal".to_string(), "plea".to_string()],
            1,
            false,
        );
        (service, puzzle)
    }

    #[tokio::test]
    async fn check_word_accepts_dictionary_word() {
        let (service, puzzle) = fixture();
        let result = check_word(&service, &puzzle, "apple").await;
        assert!(result.verdict.is_valid());
        assert_eq!(result.word, "apple");
    }

    #[tokio::test]
    async fn check_word_reports_reason() {
        let (service, puzzle) = fixture();
        let result = check_word(&service, &puzzle, "ab").await;
        assert_eq!(result.verdict, Verdict::Invalid(RejectReason::TooShort));
    }
}
