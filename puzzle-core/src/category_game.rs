use chrono::NaiveDate;
use puzzle_types::{
    CategoryOutcome, CategoryPuzzle, GameStatus, GROUP_COUNT, GROUP_SIZE, MAX_MISTAKES,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Reshuffle the presentation order of a puzzle's items.
///
/// Group assignments are untouched; only display order changes.
pub fn shuffle_items<R: Rng>(puzzle: &mut CategoryPuzzle, rng: &mut R) {
    puzzle.items.shuffle(rng);
}

/// Result of evaluating a full 4-item selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The selection exactly matched a not-yet-found group.
    GroupFound { level: u8 },
    /// The selection re-matched a group that was already solved.
    AlreadyFound,
    /// The selection matched no group.
    NoMatch,
}

/// One player's daily category game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGameSession {
    pub date: NaiveDate,
    pub selection: Vec<String>,
    pub found_levels: Vec<u8>,
    pub mistakes: u32,
    pub status: GameStatus,
    pub result_reported: bool,
}

impl CategoryGameSession {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            selection: Vec::new(),
            found_levels: Vec::new(),
            mistakes: 0,
            status: GameStatus::InProgress,
            result_reported: false,
        }
    }

    /// Restore a persisted session if it belongs to the same day;
    /// otherwise start fresh.
    pub fn restore(persisted: CategoryGameSession, today: NaiveDate) -> Self {
        if persisted.date == today {
            persisted
        } else {
            Self::new(today)
        }
    }

    /// Select or deselect an item.
    ///
    /// Ignored after a terminal state, for unknown items, and for items
    /// belonging to an already-solved group. Picking a fifth item replaces
    /// the whole selection with just that item.
    pub fn toggle_selection(&mut self, puzzle: &CategoryPuzzle, token: &str) {
        if self.status.is_terminal() {
            return;
        }
        let token = token.trim().to_uppercase();
        match puzzle.group_for(&token) {
            Some(group) if self.found_levels.contains(&group.level) => return,
            Some(_) => {}
            None => return,
        }

        if let Some(position) = self.selection.iter().position(|t| *t == token) {
            self.selection.remove(position);
        } else if self.selection.len() < GROUP_SIZE {
            self.selection.push(token);
        } else {
            self.selection = vec![token];
        }
    }

    /// Evaluate the current selection against the puzzle's groups.
    ///
    /// Only a full 4-item selection is evaluated; anything else returns
    /// `None` without touching the session. Every non-winning submission
    /// counts as one mistake, including re-submitting a solved group.
    pub fn submit_selection(&mut self, puzzle: &CategoryPuzzle) -> Option<SelectionOutcome> {
        if self.status.is_terminal() || self.selection.len() != GROUP_SIZE {
            return None;
        }

        let matched = puzzle.groups.iter().find(|g| g.matches(&self.selection));
        let outcome = match matched {
            Some(group) if !self.found_levels.contains(&group.level) => {
                self.found_levels.push(group.level);
                if self.found_levels.len() >= GROUP_COUNT {
                    self.status = GameStatus::Won;
                }
                SelectionOutcome::GroupFound { level: group.level }
            }
            Some(_) => {
                self.record_mistake();
                SelectionOutcome::AlreadyFound
            }
            None => {
                self.record_mistake();
                SelectionOutcome::NoMatch
            }
        };
        self.selection.clear();
        Some(outcome)
    }

    fn record_mistake(&mut self) {
        self.mistakes += 1;
        if self.mistakes >= MAX_MISTAKES {
            self.status = GameStatus::Lost;
        }
    }

    pub fn mistakes_remaining(&self) -> u32 {
        MAX_MISTAKES.saturating_sub(self.mistakes)
    }

    /// Emit the terminal outcome at most once per session.
    pub fn take_unreported_outcome(&mut self, wallet_address: &str) -> Option<CategoryOutcome> {
        if !self.status.is_terminal() || self.result_reported {
            return None;
        }
        self.result_reported = true;
        Some(CategoryOutcome {
            wallet_address: wallet_address.to_lowercase(),
            puzzle_date: self.date,
            mistakes: self.mistakes as i32,
            won: self.status == GameStatus::Won,
        })
    }
}
