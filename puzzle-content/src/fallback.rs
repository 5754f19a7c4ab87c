use chrono::NaiveDate;
use puzzle_core::WordLists;
use puzzle_types::{CategoryGroup, CategoryPuzzle};

/// Static target used when no answer corpus is available at all.
pub const FALLBACK_WORD: &str = "APPLE";

/// Built-in word list used when the remote lists cannot be fetched.
/// Doubles as both the answer corpus and the accepted-guess set.
pub const FALLBACK_WORDS: &[&str] = &[
    "APPLE", "BEACH", "CHAIR", "DANCE", "EARTH", "FLAME", "GLASS", "HEART", "IMAGE", "KNIFE",
    "LIGHT", "MAGIC", "NIGHT", "OCEAN", "PIANO", "RIVER", "STORM", "TABLE", "UNITY", "VALUE",
    "WATER", "YOUTH", "ZEBRA", "BRAVE", "CLOUD", "DREAM", "EAGLE", "FROST", "GREEN", "HAPPY",
    "IVORY", "LEMON", "MUSIC", "NOVEL", "OLIVE", "POWER", "QUICK", "ROYAL", "SMILE", "TIGER",
    "ULTRA", "VIVID", "WHEAT", "YACHT", "BLAZE", "CRANE", "DROVE", "ELITE", "FLAIR", "GRACE",
    "HONEY", "JOKER", "KAYAK", "LUNAR", "MERRY", "NINJA", "OPERA", "PEARL", "QUERY", "RADIO",
    "SCOUT", "TULIP", "URBAN", "VOCAL", "WALTZ", "BREAD", "CRISP", "DUSKY", "ELBOW", "FJORD",
    "GLIDE", "HOVER", "JUMPS", "KNEAD", "LATCH", "MIXER", "NUDGE", "PIXEL", "RELAY", "SPLIT",
    "TREND", "UNZIP", "VEXED",
];

pub fn fallback_word_lists() -> WordLists {
    WordLists::new(
        FALLBACK_WORDS.iter().map(|w| w.to_string()),
        FALLBACK_WORDS.iter().map(|w| w.to_string()),
    )
}

/// Built-in category puzzle used when the archive cannot be fetched.
pub fn fallback_category_puzzle(date: NaiveDate) -> CategoryPuzzle {
    let groups = vec![
        CategoryGroup {
            level: 0,
            name: "WET WEATHER".to_string(),
            members: to_members(&["HAIL", "RAIN", "SLEET", "SNOW"]),
        },
        CategoryGroup {
            level: 1,
            name: "NBA TEAMS".to_string(),
            members: to_members(&["BUCKS", "HEAT", "JAZZ", "NETS"]),
        },
        CategoryGroup {
            level: 2,
            name: "KEYBOARD KEYS".to_string(),
            members: to_members(&["OPTION", "RETURN", "SHIFT", "TAB"]),
        },
        CategoryGroup {
            level: 3,
            name: "PALINDROMES".to_string(),
            members: to_members(&["KAYAK", "LEVEL", "MOM", "RACECAR"]),
        },
    ];
    let items = groups
        .iter()
        .flat_map(|g| g.members.iter().cloned())
        .collect();

    CategoryPuzzle {
        date,
        groups,
        items,
    }
}

fn to_members(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fallback_lists_are_playable() {
        let lists = fallback_word_lists();
        assert_eq!(lists.answers().len(), FALLBACK_WORDS.len());
        assert!(lists.is_accepted(FALLBACK_WORD));
        for word in FALLBACK_WORDS {
            assert_eq!(word.len(), 5);
        }
    }

    #[test]
    fn fallback_puzzle_is_well_formed() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let puzzle = fallback_category_puzzle(date);

        assert_eq!(puzzle.groups.len(), 4);
        assert_eq!(puzzle.items.len(), 16);

        // Members are pairwise disjoint and cover all items.
        let mut seen = HashSet::new();
        for group in &puzzle.groups {
            assert_eq!(group.members.len(), 4);
            for member in &group.members {
                assert!(seen.insert(member.clone()));
            }
        }
        assert_eq!(seen, puzzle.items.iter().cloned().collect());
    }
}
