//! Timed quiz engine.
//!
//! Presents problems in order and races each pending answer against a single
//! deadline that is armed once for the whole session.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::Instant;

use crate::model::{Ending, Problem, QuizOutcome, Tally};
use crate::traits::{AnswerSource, QuizReporter};

/// Configuration for the quiz engine.
#[derive(Debug, Clone)]
pub struct QuizEngineConfig {
    /// Time allowed for the entire session, not per problem.
    pub time_budget: Duration,
}

impl Default for QuizEngineConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(30),
        }
    }
}

/// The timed quiz engine.
pub struct QuizEngine {
    config: QuizEngineConfig,
}

impl QuizEngine {
    pub fn new(config: QuizEngineConfig) -> Self {
        Self { config }
    }

    /// Run one quiz session over `problems`.
    ///
    /// Each problem is reported, then the engine waits for whichever comes
    /// first: an answer from `answers` or the session deadline. On deadline
    /// the pending answer is abandoned and no further problems are shown.
    /// The final tally is always reported before returning.
    pub async fn run(
        &self,
        problems: &[Problem],
        answers: &mut dyn AnswerSource,
        reporter: &mut dyn QuizReporter,
    ) -> Result<QuizOutcome> {
        // `sleep` saturates to a far-future deadline for budgets too large to add.
        let timer = tokio::time::sleep(self.config.time_budget);
        tokio::pin!(timer);
        let deadline = timer.deadline();

        let mut tally = Tally::new(problems.len());
        let mut ending = Ending::Finished;

        tracing::debug!(
            problems = problems.len(),
            budget_secs = self.config.time_budget.as_secs_f64(),
            "quiz started"
        );

        for (index, problem) in problems.iter().enumerate() {
            reporter
                .on_problem(index + 1, problem)
                .context("failed to write prompt")?;

            // A budget that is already spent must beat an answer that happens
            // to be ready on the first poll.
            if Instant::now() >= deadline {
                ending = Ending::TimedOut;
                break;
            }

            let answer = tokio::select! {
                biased;
                () = &mut timer => None,
                answer = answers.next_answer() => Some(answer),
            };

            let Some(answer) = answer else {
                ending = Ending::TimedOut;
                break;
            };

            let answer = answer.context("failed to read answer")?.unwrap_or_default();
            let correct = problem.is_correct(&answer);
            tally.record(correct);
            tracing::debug!(problem = index + 1, correct, "answer scored");
        }

        if ending == Ending::TimedOut {
            tracing::info!(answered = tally.answered, total = tally.total, "time budget expired");
            reporter.on_timeout().context("failed to write output")?;
        }
        reporter
            .on_finish(&tally)
            .context("failed to write final score")?;

        Ok(QuizOutcome { tally, ending })
    }
}
