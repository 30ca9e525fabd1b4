//! Core trait definitions for answer sources and quiz reporters.
//!
//! The engine only talks to the terminal through these seams, which keeps
//! the timing logic testable with scripted input and in-memory output.

use std::io::{self, Write};

use async_trait::async_trait;

use crate::model::{Problem, Tally};

// ---------------------------------------------------------------------------
// Answer source trait
// ---------------------------------------------------------------------------

/// Something that produces one answer line per request.
///
/// The future returned by [`AnswerSource::next_answer`] may be dropped before
/// it completes when the time budget runs out. Implementations must make sure
/// a line read on behalf of a dropped request is never handed to a later one.
#[async_trait]
pub trait AnswerSource: Send {
    /// Wait for the next answer line, without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    async fn next_answer(&mut self) -> io::Result<Option<String>>;
}

// ---------------------------------------------------------------------------
// Reporter trait
// ---------------------------------------------------------------------------

/// Receives the visible events of a quiz session.
pub trait QuizReporter: Send {
    /// A problem is about to wait for its answer. `ordinal` is 1-based.
    fn on_problem(&mut self, ordinal: usize, problem: &Problem) -> io::Result<()>;

    /// The time budget ran out while a problem was pending.
    fn on_timeout(&mut self) -> io::Result<()>;

    /// The session is over.
    fn on_finish(&mut self, tally: &Tally) -> io::Result<()>;
}

/// Writes prompts and the final score in the terminal format.
///
/// Prompts are flushed without a trailing newline so the answer is typed on
/// the same line.
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> QuizReporter for ConsoleReporter<W> {
    fn on_problem(&mut self, ordinal: usize, problem: &Problem) -> io::Result<()> {
        write!(self.out, "Problem #{ordinal}: {} = ", problem.question)?;
        self.out.flush()
    }

    fn on_timeout(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    fn on_finish(&mut self, tally: &Tally) -> io::Result<()> {
        writeln!(self.out, "{tally}")?;
        self.out.flush()
    }
}
