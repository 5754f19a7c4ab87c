use std::env;
use std::path::PathBuf;

use puzzle_content::{ANSWERS_URL, ARCHIVE_URL, GUESSES_URL};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where per-day session files are kept.
    pub sessions_dir: PathBuf,
    /// Source for the accepted-guess word list.
    pub guesses_url: String,
    /// Source for the rotating answer pool.
    pub answers_url: String,
    /// Source for the category puzzle archive.
    pub archive_url: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            sessions_dir: env::var("SESSIONS_DIR")
                .unwrap_or_else(|_| ".daily-puzzles".to_string())
                .into(),
            guesses_url: env::var("WORD_LIST_URL").unwrap_or_else(|_| GUESSES_URL.to_string()),
            answers_url: env::var("ANSWERS_URL").unwrap_or_else(|_| ANSWERS_URL.to_string()),
            archive_url: env::var("ARCHIVE_URL").unwrap_or_else(|_| ARCHIVE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other.
    #[test]
    fn env_overrides_fall_back_to_published_sources() {
        for var in ["SESSIONS_DIR", "WORD_LIST_URL", "ANSWERS_URL", "ARCHIVE_URL"] {
            env::remove_var(var);
        }
        let config = Config::new();
        assert_eq!(config.sessions_dir, PathBuf::from(".daily-puzzles"));
        assert_eq!(config.guesses_url, GUESSES_URL);
        assert_eq!(config.answers_url, ANSWERS_URL);
        assert_eq!(config.archive_url, ARCHIVE_URL);

        env::set_var("SESSIONS_DIR", "/tmp/puzzle-sessions");
        env::set_var("WORD_LIST_URL", "http://localhost:9000/words");
        env::set_var("ANSWERS_URL", "http://localhost:9000/answers");
        env::set_var("ARCHIVE_URL", "http://localhost:9000/connections.json");
        let config = Config::new();
        assert_eq!(config.sessions_dir, PathBuf::from("/tmp/puzzle-sessions"));
        assert_eq!(config.guesses_url, "http://localhost:9000/words");
        assert_eq!(config.answers_url, "http://localhost:9000/answers");
        assert_eq!(config.archive_url, "http://localhost:9000/connections.json");

        for var in ["SESSIONS_DIR", "WORD_LIST_URL", "ANSWERS_URL", "ARCHIVE_URL"] {
            env::remove_var(var);
        }
    }
}
