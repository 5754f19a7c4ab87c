use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of groups per puzzle and members per group.
pub const GROUP_COUNT: usize = 4;
pub const GROUP_SIZE: usize = 4;

/// Maximum mistakes before the category game is lost.
pub const MAX_MISTAKES: u32 = 4;

/// One of the four hidden groups in a daily category puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryGroup {
    pub level: u8,
    pub name: String,
    pub members: Vec<String>,
}

impl CategoryGroup {
    /// Order-independent comparison against a candidate selection.
    pub fn matches(&self, selection: &[String]) -> bool {
        if selection.len() != self.members.len() {
            return false;
        }
        let mut chosen: Vec<String> = selection.iter().map(|s| s.trim().to_uppercase()).collect();
        let mut members: Vec<String> = self.members.iter().map(|s| s.trim().to_uppercase()).collect();
        chosen.sort();
        members.sort();
        chosen == members
    }
}

/// A full daily category puzzle: 16 items pre-assigned to 4 groups of 4.
///
/// `items` is the presentation order only; group membership is carried by
/// `groups` and never changes when the items are reshuffled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryPuzzle {
    pub date: NaiveDate,
    pub groups: Vec<CategoryGroup>,
    pub items: Vec<String>,
}

impl CategoryPuzzle {
    pub fn group_for(&self, token: &str) -> Option<&CategoryGroup> {
        let token = token.trim().to_uppercase();
        self.groups
            .iter()
            .find(|g| g.members.iter().any(|m| m.trim().to_uppercase() == token))
    }

    pub fn group_by_level(&self, level: u8) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.level == level)
    }
}
