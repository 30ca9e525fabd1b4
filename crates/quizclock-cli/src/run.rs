//! Running a quiz from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizclock_core::config::load_config_from;
use quizclock_core::engine::{QuizEngine, QuizEngineConfig};
use quizclock_core::input::LineListener;
use quizclock_core::parser;
use quizclock_core::traits::ConsoleReporter;

pub async fn execute(
    csv: Option<PathBuf>,
    limit: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    // Flags win over the config file and environment
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(csv) = csv {
        config.csv = csv;
    }
    if let Some(limit) = limit {
        config.limit_secs = limit;
    }

    // Every record is loaded before the first prompt
    let problems = parser::load_problems(&config.csv)?;

    let mut answers = LineListener::stdin().context("failed to start input listener")?;
    let mut reporter = ConsoleReporter::stdout();

    let engine = QuizEngine::new(QuizEngineConfig {
        time_budget: config.time_budget(),
    });
    let outcome = engine.run(&problems, &mut answers, &mut reporter).await?;

    tracing::debug!(
        ending = %outcome.ending,
        correct = outcome.tally.correct,
        answered = outcome.tally.answered,
        total = outcome.tally.total,
        "quiz over"
    );

    Ok(())
}
