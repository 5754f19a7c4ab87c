mod config;
mod file_store;

use std::io::{self, BufRead, Write as _};

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::thread_rng;
use tracing::{info, warn};

use config::Config;
use file_store::FileSessionStore;
use puzzle_content::{load_category_puzzle, load_word_lists, FALLBACK_WORD};
use puzzle_core::{
    load_category_session, load_word_session, save_category_session, save_word_session,
    shuffle_items, CategoryGameSession, SelectionOutcome, SessionKey, SubmitOutcome,
    WordGameSession,
};
use puzzle_persistence::{connection::connect_and_migrate, ResultsRepository};
use puzzle_types::{
    CategoryOutcome, CategoryPuzzle, GameKind, GameStatus, LetterState, WordOutcome, GROUP_SIZE,
};

#[derive(Parser)]
#[command(name = "daily-puzzles", about = "Daily word and category puzzles")]
struct Cli {
    /// Wallet address to record results under; omit to play anonymously
    #[arg(long)]
    wallet: Option<String>,
    /// Calendar day to play, defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play the daily word game
    Wordle,
    /// Play the daily category game
    Connections,
    /// Show word-game statistics and the wins leaderboard
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::new();
    let today = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    match cli.command {
        Command::Wordle => play_wordle(&config, today, cli.wallet.as_deref()).await,
        Command::Connections => play_connections(&config, today, cli.wallet.as_deref()).await,
        Command::Stats => show_stats(cli.wallet.as_deref()).await,
    }
}

async fn play_wordle(config: &Config, today: NaiveDate, wallet: Option<&str>) -> Result<()> {
    let client = reqwest::Client::new();
    let lists = load_word_lists(&client, &config.guesses_url, &config.answers_url).await;
    let target = match lists.daily_target(today) {
        Ok(word) => word.to_string(),
        Err(_) => FALLBACK_WORD.to_string(),
    };

    let identity = wallet.unwrap_or("local");
    let key = SessionKey::new(identity, today, GameKind::Wordle);
    let mut store = FileSessionStore::new(config.sessions_dir.clone());
    let mut session = load_word_session(&store, &key, today, &target)?;

    println!("WORDLE — {today}");
    for attempt in &session.attempts {
        println!("  {}  {}", attempt.word, render_evaluation(&attempt.evaluation));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !session.status.is_terminal() {
        print!("guess {}/6: ", session.attempts.len() + 1);
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        match session.submit_guess(&line, &lists) {
            SubmitOutcome::Rejected(reason) => {
                println!("{reason}");
                continue;
            }
            outcome => {
                if let Some(attempt) = session.attempts.last() {
                    println!("  {}  {}", attempt.word, render_evaluation(&attempt.evaluation));
                }
                println!("{}", render_keyboard(&session));
                save_word_session(&mut store, &key, &session)?;
                match outcome {
                    SubmitOutcome::Won => println!("Congratulations! You won!"),
                    SubmitOutcome::Lost => {
                        println!("Game over! The word was {}", session.target_word)
                    }
                    _ => {}
                }
            }
        }
    }

    if let Some(wallet) = wallet {
        if let Some(outcome) = session.take_unreported_outcome(wallet) {
            report_word_outcome(&outcome).await;
            save_word_session(&mut store, &key, &session)?;
        }
    }

    Ok(())
}

async fn play_connections(config: &Config, today: NaiveDate, wallet: Option<&str>) -> Result<()> {
    let client = reqwest::Client::new();
    let mut rng = thread_rng();
    let mut puzzle = load_category_puzzle(&client, &config.archive_url, today, &mut rng).await;

    let identity = wallet.unwrap_or("local");
    let key = SessionKey::new(identity, today, GameKind::Connections);
    let mut store = FileSessionStore::new(config.sessions_dir.clone());
    let mut session = load_category_session(&store, &key, today)?;

    println!("CONNECTIONS — {}", puzzle.date);
    println!("Find groups of four items that share something in common.");
    println!("Pick items separated by commas; 'reset' starts the day over.");
    print_board(&puzzle, &session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !session.status.is_terminal() {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            print_board(&puzzle, &session);
            continue;
        }
        if trimmed.eq_ignore_ascii_case("reset") {
            session = CategoryGameSession::new(today);
            shuffle_items(&mut puzzle, &mut rng);
            save_category_session(&mut store, &key, &session)?;
            print_board(&puzzle, &session);
            continue;
        }

        for token in trimmed.split(',') {
            session.toggle_selection(&puzzle, token);
        }

        if session.selection.len() == GROUP_SIZE {
            match session.submit_selection(&puzzle) {
                Some(SelectionOutcome::GroupFound { level }) => {
                    if let Some(group) = puzzle.group_by_level(level) {
                        println!("Correct! {}", group.name);
                    }
                }
                Some(SelectionOutcome::AlreadyFound) => println!("Already found!"),
                Some(SelectionOutcome::NoMatch) => println!("Not a group."),
                None => {}
            }
        } else {
            println!("selected: {}", session.selection.join(", "));
        }
        save_category_session(&mut store, &key, &session)?;
        print_board(&puzzle, &session);
    }

    match session.status {
        GameStatus::Won => println!("Perfect! You found all four groups."),
        GameStatus::Lost => {
            println!("Game over! The groups were:");
            for group in &puzzle.groups {
                println!("  [{}] {}", group.name, group.members.join(" · "));
            }
        }
        GameStatus::InProgress => {}
    }

    if let Some(wallet) = wallet {
        if let Some(outcome) = session.take_unreported_outcome(wallet) {
            report_category_outcome(&outcome).await;
            save_category_session(&mut store, &key, &session)?;
        }
    }

    Ok(())
}

async fn show_stats(wallet: Option<&str>) -> Result<()> {
    let db = connect_and_migrate().await?;
    let repo = ResultsRepository::new(db);

    if let Some(wallet) = wallet {
        let stats = repo.word_stats(wallet).await?;
        println!("Wordle stats for {wallet}");
        println!("  games: {}  wins: {}  losses: {}", stats.total_games, stats.wins, stats.losses);
        println!("  win rate: {}%  avg guesses: {}", stats.win_rate, stats.average_guesses);
        println!(
            "  current streak: {}  longest streak: {}",
            stats.current_streak, stats.longest_streak
        );

        let recent = repo.recent_word_games(wallet, 10).await?;
        if !recent.is_empty() {
            println!("Recent games:");
            for game in recent {
                let result = if game.won { "won" } else { "lost" };
                println!("  {}  {}  {}/6", game.game_date, result, game.guesses);
            }
        }
    }

    let leaderboard = repo.wins_leaderboard(10).await?;
    if !leaderboard.is_empty() {
        println!("Leaderboard:");
        for entry in leaderboard {
            println!("  #{} {} — {} wins", entry.rank, entry.wallet_address, entry.wins);
        }
    }

    Ok(())
}

/// Reporting is fire-and-forget: a failed report is logged and the local
/// game state stands.
async fn report_word_outcome(outcome: &WordOutcome) {
    match connect_and_migrate().await {
        Ok(db) => {
            let repo = ResultsRepository::new(db);
            match repo.record_word_outcome(outcome).await {
                Ok(()) => info!("word result recorded"),
                Err(err) => warn!(%err, "failed to report word outcome"),
            }
        }
        Err(err) => warn!(%err, "results database unavailable"),
    }
}

async fn report_category_outcome(outcome: &CategoryOutcome) {
    match connect_and_migrate().await {
        Ok(db) => {
            let repo = ResultsRepository::new(db);
            match repo.record_category_outcome(outcome).await {
                Ok(()) => info!("category result recorded"),
                Err(err) => warn!(%err, "failed to report category outcome"),
            }
        }
        Err(err) => warn!(%err, "results database unavailable"),
    }
}

fn render_evaluation(evaluation: &[LetterState]) -> String {
    evaluation
        .iter()
        .map(|state| match state {
            LetterState::Correct => '🟩',
            LetterState::Present => '🟨',
            LetterState::Absent => '⬛',
        })
        .collect()
}

fn render_keyboard(session: &WordGameSession) -> String {
    let states = session.letter_states();
    let mut correct = String::new();
    let mut present = String::new();
    let mut absent = String::new();
    for letter in 'A'..='Z' {
        match states.get(&letter) {
            Some(LetterState::Correct) => correct.push(letter),
            Some(LetterState::Present) => present.push(letter),
            Some(LetterState::Absent) => absent.push(letter),
            None => {}
        }
    }
    format!("  correct: [{correct}]  present: [{present}]  absent: [{absent}]")
}

fn print_board(puzzle: &CategoryPuzzle, session: &CategoryGameSession) {
    for level in &session.found_levels {
        if let Some(group) = puzzle.group_by_level(*level) {
            println!("  [{}] {}", group.name, group.members.join(" · "));
        }
    }

    let remaining: Vec<&String> = puzzle
        .items
        .iter()
        .filter(|item| {
            puzzle
                .group_for(item)
                .map_or(true, |g| !session.found_levels.contains(&g.level))
        })
        .collect();
    for row in remaining.chunks(4) {
        let cells: Vec<&str> = row.iter().map(|s| s.as_str()).collect();
        println!("  {}", cells.join("  "));
    }
    println!("  mistakes remaining: {}", session.mistakes_remaining());
}
