use anyhow::Result;
use sea_orm::sea_query::{Alias, Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::debug;

use crate::entities::{category_results, prelude::*, word_results};
use puzzle_types::{CategoryOutcome, WordOutcome};

/// The results sink: one row per (wallet, day, game), upserted
/// idempotently so a replayed report never duplicates a result.
pub struct ResultsRepository {
    db: DatabaseConnection,
}

/// Per-wallet word-game statistics for profile display.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordGameStats {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub average_guesses: f64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LeaderboardEntry {
    pub wallet_address: String,
    pub wins: i64,
    pub rank: u32,
}

impl ResultsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record_word_outcome(&self, outcome: &WordOutcome) -> Result<()> {
        let now = chrono::Utc::now().into();
        let model = word_results::ActiveModel {
            id: ActiveValue::NotSet,
            wallet_address: ActiveValue::Set(outcome.wallet_address.to_lowercase()),
            game_date: ActiveValue::Set(outcome.game_date),
            target_word: ActiveValue::Set(outcome.target_word.clone()),
            guesses: ActiveValue::Set(outcome.guesses),
            won: ActiveValue::Set(outcome.won),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        WordResults::insert(model)
            .on_conflict(
                OnConflict::columns([
                    word_results::Column::WalletAddress,
                    word_results::Column::GameDate,
                ])
                .update_columns([
                    word_results::Column::TargetWord,
                    word_results::Column::Guesses,
                    word_results::Column::Won,
                    word_results::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(&self.db)
            .await?;

        debug!(wallet = %outcome.wallet_address, date = %outcome.game_date, "recorded word outcome");
        Ok(())
    }

    pub async fn record_category_outcome(&self, outcome: &CategoryOutcome) -> Result<()> {
        let now = chrono::Utc::now().into();
        let model = category_results::ActiveModel {
            id: ActiveValue::NotSet,
            wallet_address: ActiveValue::Set(outcome.wallet_address.to_lowercase()),
            puzzle_date: ActiveValue::Set(outcome.puzzle_date),
            mistakes: ActiveValue::Set(outcome.mistakes),
            won: ActiveValue::Set(outcome.won),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        CategoryResults::insert(model)
            .on_conflict(
                OnConflict::columns([
                    category_results::Column::WalletAddress,
                    category_results::Column::PuzzleDate,
                ])
                .update_columns([
                    category_results::Column::Mistakes,
                    category_results::Column::Won,
                    category_results::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Word-game statistics for one wallet: totals, win rate, streaks and
    /// average guess count across won games.
    pub async fn word_stats(&self, wallet_address: &str) -> Result<WordGameStats> {
        let games = WordResults::find()
            .filter(word_results::Column::WalletAddress.eq(wallet_address.to_lowercase()))
            .order_by_desc(word_results::Column::GameDate)
            .all(&self.db)
            .await?;

        let total_games = games.len() as u32;
        let wins = games.iter().filter(|g| g.won).count() as u32;
        let losses = total_games - wins;
        let win_rate = if total_games > 0 {
            round_one_decimal(wins as f64 / total_games as f64 * 100.0)
        } else {
            0.0
        };

        let won_games: Vec<_> = games.iter().filter(|g| g.won).collect();
        let average_guesses = if !won_games.is_empty() {
            let sum: i32 = won_games.iter().map(|g| g.guesses).sum();
            round_one_decimal(sum as f64 / won_games.len() as f64)
        } else {
            0.0
        };

        // Games are already most-recent-first.
        let current_streak = games.iter().take_while(|g| g.won).count() as u32;

        let mut longest_streak = 0u32;
        let mut run = 0u32;
        for game in &games {
            if game.won {
                run += 1;
                longest_streak = longest_streak.max(run);
            } else {
                run = 0;
            }
        }

        Ok(WordGameStats {
            total_games,
            wins,
            losses,
            win_rate,
            current_streak,
            longest_streak,
            average_guesses,
        })
    }

    /// Most recent word games for one wallet, newest first.
    pub async fn recent_word_games(
        &self,
        wallet_address: &str,
        limit: u64,
    ) -> Result<Vec<word_results::Model>> {
        let games = WordResults::find()
            .filter(word_results::Column::WalletAddress.eq(wallet_address.to_lowercase()))
            .order_by_desc(word_results::Column::GameDate)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(games)
    }

    /// Wallets ranked by total word-game wins.
    pub async fn wins_leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardEntry>> {
        let rows: Vec<(String, i64)> = WordResults::find()
            .select_only()
            .column(word_results::Column::WalletAddress)
            .column_as(word_results::Column::Id.count(), "wins")
            .filter(word_results::Column::Won.eq(true))
            .group_by(word_results::Column::WalletAddress)
            .order_by_desc(Expr::col(Alias::new("wins")))
            .limit(limit)
            .into_tuple()
            .all(&self.db)
            .await?;

        let leaderboard = rows
            .into_iter()
            .enumerate()
            .map(|(index, (wallet_address, wins))| LeaderboardEntry {
                wallet_address,
                wins,
                rank: (index + 1) as u32,
            })
            .collect();

        Ok(leaderboard)
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
