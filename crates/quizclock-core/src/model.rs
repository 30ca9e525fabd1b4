//! Core data model types for quizclock.
//!
//! These are the values that flow between the problem loader, the timed
//! engine, and whatever renders the quiz to the user.

use std::fmt;

/// A single question/answer pair loaded from the problem source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Question text, shown verbatim.
    pub question: String,
    /// Expected answer, already whitespace-trimmed.
    pub answer: String,
}

impl Problem {
    /// Create a problem, trimming surrounding whitespace from the answer.
    pub fn new(question: impl Into<String>, answer: &str) -> Self {
        Self {
            question: question.into(),
            answer: answer.trim().to_string(),
        }
    }

    /// Returns `true` if `response` is exactly the expected answer.
    ///
    /// Comparison is literal and case-sensitive.
    pub fn is_correct(&self, response: &str) -> bool {
        response == self.answer
    }
}

/// Running score of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Answers that matched.
    pub correct: usize,
    /// Problems that received an answer before the deadline.
    pub answered: usize,
    /// Problems loaded, whether or not they were presented.
    pub total: usize,
}

impl Tally {
    pub fn new(total: usize) -> Self {
        Self {
            correct: 0,
            answered: 0,
            total,
        }
    }

    /// Record the outcome of one answered problem.
    pub fn record(&mut self, correct: bool) {
        debug_assert!(self.answered < self.total, "more answers than problems");
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}.", self.correct, self.total)
    }
}

/// How a quiz session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Every problem received an answer.
    Finished,
    /// The time budget ran out while a problem was pending.
    TimedOut,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ending::Finished => write!(f, "finished"),
            Ending::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Final result of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub tally: Tally,
    pub ending: Ending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_trims_answer_but_not_question() {
        let p = Problem::new(" 5+5 ", "  10 \t");
        assert_eq!(p.question, " 5+5 ");
        assert_eq!(p.answer, "10");
    }

    #[test]
    fn answers_compare_literally() {
        let p = Problem::new("capital of France", "Paris");
        assert!(p.is_correct("Paris"));
        assert!(!p.is_correct("paris"));
        assert!(!p.is_correct(" Paris"));
        assert!(!p.is_correct(""));
    }

    #[test]
    fn tally_counts_and_displays() {
        let mut tally = Tally::new(3);
        tally.record(true);
        tally.record(false);
        assert_eq!(tally.correct, 1);
        assert_eq!(tally.answered, 2);
        assert_eq!(tally.to_string(), "You scored 1 out of 3.");
    }

    #[test]
    fn empty_tally_display() {
        assert_eq!(Tally::new(0).to_string(), "You scored 0 out of 0.");
    }
}
