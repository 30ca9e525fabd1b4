//! quizclock-core: Problem loading, timed quiz engine, and scoring.
//!
//! This crate defines the data model, the CSV loader, and the engine that
//! races each pending answer against a session-wide deadline.

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod mock;
pub mod model;
pub mod parser;
pub mod traits;

pub use error::LoadError;
pub use model::{Ending, Problem, QuizOutcome, Tally};
