use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use puzzle_types::{
    ContentUnavailable, GameStatus, GuessAttempt, GuessRejection, LetterState, WordOutcome,
    MAX_ATTEMPTS, WORD_LENGTH,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reference date for daily word rotation (the original Wordle launch day).
pub const ROTATION_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2022, 1, 1) {
    Some(date) => date,
    None => panic!("invalid rotation epoch"),
};

/// The word corpora the game is played against.
///
/// `answers` is the ordered rotating pool of possible daily targets;
/// `accepted` is the larger set of words a player may submit. Construction
/// unions the answers into the accepted set so the daily target is always
/// guessable.
#[derive(Debug, Clone)]
pub struct WordLists {
    accepted: HashSet<String>,
    answers: Vec<String>,
}

impl WordLists {
    pub fn new<A, G>(answers: A, accepted: G) -> Self
    where
        A: IntoIterator<Item = String>,
        G: IntoIterator<Item = String>,
    {
        let answers: Vec<String> = answers
            .into_iter()
            .map(|w| normalize_word(&w))
            .filter(|w| is_playable(w))
            .collect();
        let mut accepted: HashSet<String> = accepted
            .into_iter()
            .map(|w| normalize_word(&w))
            .filter(|w| is_playable(w))
            .collect();
        accepted.extend(answers.iter().cloned());

        Self { accepted, answers }
    }

    /// Parse newline-separated word list texts, one word per line.
    pub fn parse(answers_text: &str, guesses_text: &str) -> Self {
        Self::new(
            answers_text.lines().map(str::to_string),
            guesses_text.lines().map(str::to_string),
        )
    }

    pub fn is_accepted(&self, word: &str) -> bool {
        self.accepted.contains(&normalize_word(word))
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Derive the target word for a calendar day.
    ///
    /// Every day maps to exactly one answer, and the mapping is stable as
    /// long as the corpus and epoch are unchanged.
    pub fn daily_target(&self, date: NaiveDate) -> Result<&str, ContentUnavailable> {
        if self.answers.is_empty() {
            return Err(ContentUnavailable);
        }
        let days_since_epoch = date.signed_duration_since(ROTATION_EPOCH).num_days();
        let index = days_since_epoch.rem_euclid(self.answers.len() as i64) as usize;
        Ok(&self.answers[index])
    }
}

fn normalize_word(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn is_playable(word: &str) -> bool {
    word.chars().count() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Evaluate a guess against the target letter by letter.
///
/// Two passes: exact-position matches first, each consuming its target
/// letter, then misplaced letters matched against whatever remains. A
/// guess letter can never be marked more times than it occurs in the
/// target.
pub fn evaluate_guess(guess: &str, target: &str) -> Vec<LetterState> {
    let guess_letters: Vec<char> = guess.chars().collect();
    let mut remaining: Vec<Option<char>> = target.chars().map(Some).collect();
    let mut result = vec![LetterState::Absent; guess_letters.len()];

    // First pass: mark correct positions
    for (i, &ch) in guess_letters.iter().enumerate() {
        if i < remaining.len() && remaining[i] == Some(ch) {
            result[i] = LetterState::Correct;
            remaining[i] = None;
        }
    }

    // Second pass: mark present letters against unconsumed target letters
    for (i, &ch) in guess_letters.iter().enumerate() {
        if result[i] == LetterState::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter().position(|c| *c == Some(ch)) {
            result[i] = LetterState::Present;
            remaining[slot] = None;
        }
    }

    result
}

/// Fold an attempt log into per-letter best-known states for the keyboard.
pub fn aggregate_letter_states(attempts: &[GuessAttempt]) -> HashMap<char, LetterState> {
    let mut states = HashMap::new();
    for attempt in attempts {
        for (ch, state) in attempt.word.chars().zip(attempt.evaluation.iter().copied()) {
            upgrade_letter_state(&mut states, ch, state);
        }
    }
    states
}

fn upgrade_letter_state(states: &mut HashMap<char, LetterState>, letter: char, state: LetterState) {
    match states.get(&letter) {
        Some(existing) if existing.priority() >= state.priority() => {}
        _ => {
            states.insert(letter, state);
        }
    }
}

/// Result of submitting a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Continue,
    Won,
    Lost,
    Rejected(GuessRejection),
}

/// One player's daily word game.
///
/// The keyboard aggregate is deliberately not serialized; it is replayed
/// from the attempt log on restore so a persisted aggregate is never
/// trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordGameSession {
    pub date: NaiveDate,
    pub target_word: String,
    pub attempts: Vec<GuessAttempt>,
    pub status: GameStatus,
    pub result_reported: bool,
    #[serde(skip)]
    letter_states: HashMap<char, LetterState>,
}

impl WordGameSession {
    pub fn new(date: NaiveDate, target_word: &str) -> Self {
        Self {
            date,
            target_word: normalize_word(target_word),
            attempts: Vec::new(),
            status: GameStatus::InProgress,
            result_reported: false,
            letter_states: HashMap::new(),
        }
    }

    /// Restore a persisted session if it belongs to the same day and the
    /// same target word; otherwise start fresh.
    pub fn restore(persisted: WordGameSession, today: NaiveDate, todays_target: &str) -> Self {
        let todays_target = normalize_word(todays_target);
        if persisted.date == today && persisted.target_word == todays_target {
            let mut session = persisted;
            session.letter_states = aggregate_letter_states(&session.attempts);
            session
        } else {
            debug!(
                persisted_date = %persisted.date,
                "discarding stale word session"
            );
            Self::new(today, &todays_target)
        }
    }

    /// Validate and apply one guess.
    ///
    /// Rejected guesses leave the session untouched.
    pub fn submit_guess(&mut self, raw_input: &str, lists: &WordLists) -> SubmitOutcome {
        let guess = normalize_word(raw_input);
        if !is_playable(&guess) {
            return SubmitOutcome::Rejected(GuessRejection::InvalidLength);
        }
        if !lists.is_accepted(&guess) {
            return SubmitOutcome::Rejected(GuessRejection::NotAcceptedWord { word: guess });
        }
        if self.status.is_terminal() {
            return SubmitOutcome::Rejected(GuessRejection::GameAlreadyOver);
        }

        let evaluation = evaluate_guess(&guess, &self.target_word);
        for (ch, state) in guess.chars().zip(evaluation.iter().copied()) {
            upgrade_letter_state(&mut self.letter_states, ch, state);
        }
        let won = guess == self.target_word;
        self.attempts.push(GuessAttempt {
            word: guess,
            evaluation,
        });

        if won {
            self.status = GameStatus::Won;
            SubmitOutcome::Won
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            SubmitOutcome::Lost
        } else {
            SubmitOutcome::Continue
        }
    }

    /// Best-known state per letter, for keyboard display.
    pub fn letter_states(&self) -> &HashMap<char, LetterState> {
        &self.letter_states
    }

    /// Emit the terminal outcome at most once per session.
    ///
    /// Returns `None` while the game is in progress or once the outcome
    /// has already been handed to the results sink.
    pub fn take_unreported_outcome(&mut self, wallet_address: &str) -> Option<WordOutcome> {
        if !self.status.is_terminal() || self.result_reported {
            return None;
        }
        self.result_reported = true;
        Some(WordOutcome {
            wallet_address: wallet_address.to_lowercase(),
            game_date: self.date,
            target_word: self.target_word.clone(),
            guesses: self.attempts.len() as i32,
            won: self.status == GameStatus::Won,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_lists() -> WordLists {
        WordLists::parse(
            "ALLOW\nSPEED\nCRANE",
            "ERASE\nLOLLY\nAUDIO\nSTARE\nROATE\nSLATE\nTRACE",
        )
    }

    #[test]
    fn daily_target_is_deterministic() {
        let lists = test_lists();
        let d = day(2024, 3, 15);
        assert_eq!(lists.daily_target(d).unwrap(), lists.daily_target(d).unwrap());
    }

    #[test]
    fn rotation_epoch_is_fixed() {
        assert_eq!(ROTATION_EPOCH, day(2022, 1, 1));
    }

    #[test]
    fn daily_target_rotates_through_corpus() {
        let lists = test_lists();
        let epoch = ROTATION_EPOCH;
        assert_eq!(lists.daily_target(epoch).unwrap(), "ALLOW");
        assert_eq!(lists.daily_target(epoch + chrono::Days::new(1)).unwrap(), "SPEED");
        assert_eq!(lists.daily_target(epoch + chrono::Days::new(3)).unwrap(), "ALLOW");
    }

    #[test]
    fn daily_target_always_drawn_from_corpus() {
        let lists = test_lists();
        for offset in 0..30 {
            let target = lists
                .daily_target(ROTATION_EPOCH + chrono::Days::new(offset))
                .unwrap();
            assert!(lists.answers().contains(&target.to_string()));
        }
    }

    #[test]
    fn empty_corpus_is_content_unavailable() {
        let lists = WordLists::parse("", "ERASE\nSTARE");
        assert_eq!(lists.daily_target(day(2024, 1, 1)), Err(ContentUnavailable));
    }

    #[test]
    fn answers_are_always_accepted() {
        let lists = WordLists::new(
            vec!["crane".to_string()],
            std::iter::empty::<String>(),
        );
        assert!(lists.is_accepted("CRANE"));
        assert!(lists.is_accepted("crane"));
    }

    #[test]
    fn evaluate_all_correct() {
        let result = evaluate_guess("CRANE", "CRANE");
        assert!(result.iter().all(|s| *s == LetterState::Correct));
    }

    #[test]
    fn evaluate_duplicate_letters_lolly_vs_allow() {
        // Target ALLOW has two Ls; LOLLY's third L has nothing left to match.
        let result = evaluate_guess("LOLLY", "ALLOW");
        assert_eq!(
            result,
            vec![
                LetterState::Present,
                LetterState::Present,
                LetterState::Correct,
                LetterState::Absent,
                LetterState::Absent,
            ]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_erase_vs_speed() {
        // SPEED has two Es and one S; the second E in ERASE exhausts them.
        let result = evaluate_guess("ERASE", "SPEED");
        assert_eq!(
            result,
            vec![
                LetterState::Present,
                LetterState::Absent,
                LetterState::Absent,
                LetterState::Present,
                LetterState::Present,
            ]
        );
    }

    #[test]
    fn correct_positions_take_priority_over_misplaced() {
        // The exact-position E at index 2 claims its target letter before
        // any misplaced E can consume it; the second D finds nothing left.
        let result = evaluate_guess("DEEDS", "SPEED");
        assert_eq!(
            result,
            vec![
                LetterState::Present,
                LetterState::Present,
                LetterState::Correct,
                LetterState::Absent,
                LetterState::Present,
            ]
        );
    }

    #[test]
    fn win_on_exact_guess() {
        let lists = test_lists();
        let mut session = WordGameSession::new(day(2024, 1, 1), "SPEED");
        assert_eq!(session.submit_guess("speed", &lists), SubmitOutcome::Won);
        assert_eq!(session.status, GameStatus::Won);
    }

    #[test]
    fn no_guesses_accepted_after_win() {
        let lists = test_lists();
        let mut session = WordGameSession::new(day(2024, 1, 1), "SPEED");
        session.submit_guess("SPEED", &lists);
        assert_eq!(
            session.submit_guess("STARE", &lists),
            SubmitOutcome::Rejected(GuessRejection::GameAlreadyOver)
        );
        assert_eq!(session.attempts.len(), 1);
    }

    #[test]
    fn loss_after_six_valid_attempts() {
        let lists = test_lists();
        let mut session = WordGameSession::new(day(2024, 1, 1), "SPEED");
        for _ in 0..5 {
            assert_eq!(session.submit_guess("STARE", &lists), SubmitOutcome::Continue);
        }
        assert_eq!(session.submit_guess("STARE", &lists), SubmitOutcome::Lost);
        assert_eq!(session.status, GameStatus::Lost);
        assert_eq!(session.attempts.len(), 6);
    }

    #[test]
    fn rejection_leaves_state_untouched() {
        let lists = test_lists();
        let mut session = WordGameSession::new(day(2024, 1, 1), "SPEED");
        session.submit_guess("STARE", &lists);
        let before = session.attempts.clone();

        assert_eq!(
            session.submit_guess("TOO", &lists),
            SubmitOutcome::Rejected(GuessRejection::InvalidLength)
        );
        assert_eq!(
            session.submit_guess("ZZZZZ", &lists),
            SubmitOutcome::Rejected(GuessRejection::NotAcceptedWord {
                word: "ZZZZZ".to_string()
            })
        );
        assert_eq!(session.attempts, before);
        assert_eq!(session.status, GameStatus::InProgress);
    }

    #[test]
    fn keyboard_state_only_upgrades() {
        let lists = test_lists();
        let mut session = WordGameSession::new(day(2024, 1, 1), "SPEED");
        // First guess puts S in the correct slot.
        session.submit_guess("STARE", &lists);
        assert_eq!(session.letter_states()[&'S'], LetterState::Correct);
        // A later guess with S misplaced must not downgrade it.
        session.submit_guess("ERASE", &lists);
        assert_eq!(session.letter_states()[&'S'], LetterState::Correct);
        assert_eq!(session.letter_states()[&'E'], LetterState::Present);
    }

    #[test]
    fn replayed_aggregation_matches_incremental() {
        let lists = test_lists();
        let mut session = WordGameSession::new(day(2024, 1, 1), "SPEED");
        session.submit_guess("STARE", &lists);
        session.submit_guess("ERASE", &lists);
        session.submit_guess("LOLLY", &lists);
        assert_eq!(
            aggregate_letter_states(&session.attempts),
            *session.letter_states()
        );
    }

    #[test]
    fn restore_same_day_same_target_keeps_attempts() {
        let lists = test_lists();
        let today = day(2024, 1, 1);
        let mut session = WordGameSession::new(today, "SPEED");
        session.submit_guess("STARE", &lists);

        let blob = serde_json::to_string(&session).unwrap();
        let persisted: WordGameSession = serde_json::from_str(&blob).unwrap();
        let restored = WordGameSession::restore(persisted, today, "SPEED");

        assert_eq!(restored.attempts, session.attempts);
        assert_eq!(restored.letter_states(), session.letter_states());
    }

    #[test]
    fn restore_discards_rolled_over_day() {
        let mut session = WordGameSession::new(day(2024, 1, 1), "SPEED");
        session.attempts.push(GuessAttempt {
            word: "STARE".to_string(),
            evaluation: evaluate_guess("STARE", "SPEED"),
        });
        let restored = WordGameSession::restore(session, day(2024, 1, 2), "SPEED");
        assert!(restored.attempts.is_empty());
        assert_eq!(restored.status, GameStatus::InProgress);
    }

    #[test]
    fn restore_discards_changed_target() {
        let session = WordGameSession::new(day(2024, 1, 1), "SPEED");
        let restored = WordGameSession::restore(session, day(2024, 1, 1), "CRANE");
        assert_eq!(restored.target_word, "CRANE");
        assert!(restored.attempts.is_empty());
    }

    #[test]
    fn outcome_emitted_at_most_once() {
        let lists = test_lists();
        let mut session = WordGameSession::new(day(2024, 1, 1), "SPEED");
        assert!(session.take_unreported_outcome("0xAbC").is_none());

        session.submit_guess("SPEED", &lists);
        let outcome = session.take_unreported_outcome("0xAbC").unwrap();
        assert_eq!(outcome.wallet_address, "0xabc");
        assert_eq!(outcome.guesses, 1);
        assert!(outcome.won);

        assert!(session.take_unreported_outcome("0xAbC").is_none());
    }
}
