use anyhow::{Context, Result};
use chrono::NaiveDate;
use puzzle_core::shuffle_items;
use puzzle_types::{CategoryGroup, CategoryPuzzle};
use rand::Rng;
use serde::Deserialize;
use tracing::{info, warn};

use crate::fallback::fallback_category_puzzle;

/// Public archive of daily category puzzles, one JSON entry per date.
pub const ARCHIVE_URL: &str =
    "https://raw.githubusercontent.com/Eyefyre/NYT-Connections-Answers/main/connections.json";

#[derive(Debug, Deserialize)]
struct ArchivedPuzzle {
    date: NaiveDate,
    answers: Vec<ArchivedGroup>,
}

#[derive(Debug, Deserialize)]
struct ArchivedGroup {
    level: u8,
    group: String,
    members: Vec<String>,
}

/// Pick the archive entry for `date`, or the most recent entry when the
/// archive has no exact match for that day.
pub fn select_puzzle(archive_json: &str, date: NaiveDate) -> Result<CategoryPuzzle> {
    let puzzles: Vec<ArchivedPuzzle> =
        serde_json::from_str(archive_json).context("malformed puzzle archive")?;

    let chosen = puzzles
        .iter()
        .find(|p| p.date == date)
        .or_else(|| puzzles.iter().max_by_key(|p| p.date))
        .context("puzzle archive is empty")?;

    Ok(to_puzzle(chosen))
}

fn to_puzzle(archived: &ArchivedPuzzle) -> CategoryPuzzle {
    let groups: Vec<CategoryGroup> = archived
        .answers
        .iter()
        .map(|a| CategoryGroup {
            level: a.level,
            name: a.group.clone(),
            members: a.members.iter().map(|m| m.trim().to_uppercase()).collect(),
        })
        .collect();
    let items = groups
        .iter()
        .flat_map(|g| g.members.iter().cloned())
        .collect();

    CategoryPuzzle {
        date: archived.date,
        groups,
        items,
    }
}

/// Fetch the archive and pick the puzzle for `date`.
pub async fn fetch_daily_category_puzzle(
    client: &reqwest::Client,
    archive_url: &str,
    date: NaiveDate,
) -> Result<CategoryPuzzle> {
    let body = client
        .get(archive_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    select_puzzle(&body, date)
}

/// Load the day's category puzzle with first-success-wins fallback
/// (remote archive, then built-in puzzle) and shuffle its display order.
/// Never fails.
pub async fn load_category_puzzle<R: Rng>(
    client: &reqwest::Client,
    archive_url: &str,
    date: NaiveDate,
    rng: &mut R,
) -> CategoryPuzzle {
    let mut puzzle = match fetch_daily_category_puzzle(client, archive_url, date).await {
        Ok(puzzle) => {
            info!(puzzle_date = %puzzle.date, "loaded remote category puzzle");
            puzzle
        }
        Err(err) => {
            warn!(%err, "category puzzle fetch failed, using built-in fallback");
            fallback_category_puzzle(date)
        }
    };
    shuffle_items(&mut puzzle, rng);
    puzzle
}
