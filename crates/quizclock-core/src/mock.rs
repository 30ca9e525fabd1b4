//! Scripted answer source for testing.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::AnswerSource;

/// An [`AnswerSource`] that replays a fixed list of answers.
///
/// Once the script runs out it either reports end of input or, by default,
/// never answers again, like a user who stopped typing.
pub struct ScriptedAnswers {
    /// Answers still to be given.
    answers: VecDeque<String>,
    /// Time the "user" takes before each answer.
    delay: Option<Duration>,
    /// Report end of input instead of hanging once exhausted.
    eof_when_exhausted: bool,
    /// Number of answers requested so far.
    requests: usize,
}

impl ScriptedAnswers {
    /// Create a source that gives `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            delay: None,
            eof_when_exhausted: false,
            requests: 0,
        }
    }

    /// A user who never answers anything.
    pub fn silent() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Wait `delay` before giving each answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Report end of input once the script is exhausted.
    pub fn then_eof(mut self) -> Self {
        self.eof_when_exhausted = true;
        self
    }

    /// Number of times an answer was requested.
    pub fn request_count(&self) -> usize {
        self.requests
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_answer(&mut self) -> io::Result<Option<String>> {
        self.requests += 1;

        let Some(answer) = self.answers.pop_front() else {
            if self.eof_when_exhausted {
                return Ok(None);
            }
            return std::future::pending().await;
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(Some(answer))
    }
}
