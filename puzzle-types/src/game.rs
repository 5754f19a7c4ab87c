use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of letters in every target word and guess.
pub const WORD_LENGTH: usize = 5;

/// Maximum number of guesses before the word game is lost.
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LetterState {
    Correct, // Green - correct letter in correct position
    Present, // Yellow - correct letter in wrong position
    Absent,  // Gray - letter not in word
}

impl LetterState {
    /// Display priority used for keyboard aggregation. Higher wins.
    pub fn priority(self) -> u8 {
        match self {
            LetterState::Correct => 3,
            LetterState::Present => 2,
            LetterState::Absent => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Which daily game a session or stored record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameKind {
    Wordle,
    Connections,
}

impl GameKind {
    pub fn storage_tag(self) -> &'static str {
        match self {
            GameKind::Wordle => "wordle",
            GameKind::Connections => "connections",
        }
    }
}

/// A submitted guess and its letter-by-letter evaluation.
///
/// Created once on submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessAttempt {
    pub word: String,
    pub evaluation: Vec<LetterState>,
}

/// Terminal word-game result reported to the results sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordOutcome {
    pub wallet_address: String,
    pub game_date: NaiveDate,
    pub target_word: String,
    pub guesses: i32,
    pub won: bool,
}

/// Terminal category-game result reported to the results sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryOutcome {
    pub wallet_address: String,
    pub puzzle_date: NaiveDate,
    pub mistakes: i32,
    pub won: bool,
}
