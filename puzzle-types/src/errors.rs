use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Reasons a submitted guess is rejected without mutating the session.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessRejection {
    #[error("word must be 5 letters")]
    InvalidLength,
    #[error("not a valid word: {word}")]
    NotAcceptedWord { word: String },
    #[error("game is already over")]
    GameAlreadyOver,
}

/// Puzzle content could not be obtained from any source.
///
/// Recovered locally by falling back to built-in content; never surfaced
/// as a hard failure to the session state machines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("puzzle content unavailable")]
pub struct ContentUnavailable;
