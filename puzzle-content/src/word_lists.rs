use anyhow::{ensure, Result};
use puzzle_core::WordLists;
use tracing::{info, warn};

use crate::fallback::fallback_word_lists;

/// Public word-list sources (all words a player may guess, and the
/// rotating answer pool).
pub const GUESSES_URL: &str = "https://raw.githubusercontent.com/tabatkins/wordle-list/main/words";
pub const ANSWERS_URL: &str =
    "https://raw.githubusercontent.com/tabatkins/wordle-list/main/answers";

/// Fetch and parse the remote word lists.
pub async fn fetch_remote_word_lists(
    client: &reqwest::Client,
    guesses_url: &str,
    answers_url: &str,
) -> Result<WordLists> {
    let guesses = client
        .get(guesses_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let answers = client
        .get(answers_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let lists = WordLists::parse(&answers, &guesses);
    ensure!(!lists.answers().is_empty(), "remote answer list is empty");
    Ok(lists)
}

/// Load word lists with first-success-wins fallback: remote source first,
/// then the guaranteed built-in list. Never fails.
pub async fn load_word_lists(
    client: &reqwest::Client,
    guesses_url: &str,
    answers_url: &str,
) -> WordLists {
    match fetch_remote_word_lists(client, guesses_url, answers_url).await {
        Ok(lists) => {
            info!(
                accepted = lists.accepted_count(),
                answers = lists.answers().len(),
                "loaded remote word lists"
            );
            lists
        }
        Err(err) => {
            warn!(%err, "word list fetch failed, using built-in fallback");
            fallback_word_lists()
        }
    }
}

#[cfg(test)]
mod tests {
    use puzzle_core::WordLists;

    #[test]
    fn remote_text_parses_into_lists() {
        let answers = "crane\nspeed\n";
        let guesses = "crane\nspeed\nstare\nroate\n";
        let lists = WordLists::parse(answers, guesses);
        assert_eq!(lists.answers(), &["CRANE".to_string(), "SPEED".to_string()]);
        assert!(lists.is_accepted("roate"));
        assert!(!lists.is_accepted("zzzzz"));
    }
}
