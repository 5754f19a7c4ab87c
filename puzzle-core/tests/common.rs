use chrono::NaiveDate;
use puzzle_core::WordLists;
use puzzle_types::{CategoryGroup, CategoryPuzzle};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn create_test_lists() -> WordLists {
    WordLists::parse(
        "CRANE\nSPEED\nALLOW",
        "STARE\nROATE\nSLATE\nTRACE\nERASE\nLOLLY",
    )
}

pub fn create_test_puzzle(date: NaiveDate) -> CategoryPuzzle {
    let groups = vec![
        group(0, "COLORS", &["RED", "BLUE", "GREEN", "PINK"]),
        group(1, "PLANETS", &["MARS", "VENUS", "SATURN", "PLUTO"]),
        group(2, "RIVERS", &["NILE", "AMAZON", "DANUBE", "VOLGA"]),
        group(3, "METALS", &["IRON", "GOLD", "COPPER", "ZINC"]),
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

fn group(level: u8, name: &str, members: &[&str]) -> CategoryGroup {
    CategoryGroup {
        level,
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
    }
}
