//! SQLite word store.
//!
//! `Database` is the sole writer of the words/tags/word_tags tables. Every
//! multi-step mutation runs inside a single transaction; dropping the
//! transaction on an early return rolls the whole operation back.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, Sqlite, SqlitePool, Transaction};

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to SQLite and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database lives and dies with its connection, so the
        // pool must hold exactly one in that case.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 10 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    // === Word Store ===

    /// Get all words ordered by id, with resolved tags.
    pub async fn list_words(&self) -> Result<Vec<Word>> {
        let rows = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, english, portuguese, example, created_at, updated_at
            FROM words
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut tags = self.tags_by_word().await?;
        Ok(rows
            .into_iter()
            .map(|w| {
                let word_tags = tags.remove(&w.id).unwrap_or_default();
                w.into_word(word_tags)
            })
            .collect())
    }

    /// Get one word by id, with resolved tags.
    pub async fn get_word(&self, id: i64) -> Result<Option<Word>> {
        let row = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, english, portuguese, example, created_at, updated_at
            FROM words
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(word) => {
                let tags = self.word_tag_names(word.id).await?;
                Ok(Some(word.into_word(tags)))
            }
            None => Ok(None),
        }
    }

    /// Create a word with its tag links in one transaction.
    pub async fn create_word(&self, payload: &WordPayload) -> Result<Word> {
        let fields = payload.validate()?;
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO words (english, portuguese, example, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            "#,
        )
        .bind(&fields.english)
        .bind(&fields.portuguese)
        .bind(&fields.example)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        link_tags(&mut tx, id, &payload.tags).await?;

        tx.commit().await?;

        self.get_word(id)
            .await?
            .ok_or_else(|| ApiError::Internal(format!("word {} missing after insert", id)))
    }

    /// Replace a word's fields and tag set in one transaction.
    ///
    /// The full tag set is recomputed: all existing links are removed, then
    /// links for the supplied names are created. An empty list leaves the
    /// word untagged.
    pub async fn update_word(&self, id: i64, payload: &WordPayload) -> Result<Word> {
        let fields = payload.validate()?;
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE words
            SET english = ?1, portuguese = ?2, example = ?3, updated_at = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&fields.english)
        .bind(&fields.portuguese)
        .bind(&fields.example)
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("word {}", id)));
        }

        sqlx::query("DELETE FROM word_tags WHERE word_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        link_tags(&mut tx, id, &payload.tags).await?;

        tx.commit().await?;

        self.get_word(id)
            .await?
            .ok_or_else(|| ApiError::Internal(format!("word {} missing after update", id)))
    }

    /// Delete a word and its tag links in one transaction.
    pub async fn delete_word(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        // Links first so no association ever references a missing word.
        sqlx::query("DELETE FROM word_tags WHERE word_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM words WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("word {}", id)));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Case-insensitive substring search over english and portuguese.
    ///
    /// An empty or whitespace-only query matches everything. Case folding
    /// happens in Rust: SQLite's `lower()` only folds ASCII, which would
    /// miss accented Portuguese text ("Água" vs "água").
    pub async fn search_words(&self, query: &str) -> Result<Vec<Word>> {
        let query = query.trim();
        if query.is_empty() {
            return self.list_words().await;
        }

        let needle = query.to_lowercase();
        let words = self.list_words().await?;
        Ok(words
            .into_iter()
            .filter(|w| {
                w.english.to_lowercase().contains(&needle)
                    || w.portuguese.to_lowercase().contains(&needle)
            })
            .collect())
    }

    // === Tag Repository ===

    /// Get all tags with their computed word counts, ordered by name.
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let rows = sqlx::query(
            r#"
            SELECT t.id AS id, t.name AS name, COUNT(wt.word_id) AS word_count
            FROM tags t
            LEFT JOIN word_tags wt ON wt.tag_id = t.id
            GROUP BY t.id, t.name
            ORDER BY t.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Tag {
                id: row.get("id"),
                name: row.get("name"),
                word_count: row.get("word_count"),
            })
            .collect())
    }

    /// Tag names for a single word, in insertion order.
    async fn word_tag_names(&self, word_id: i64) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT t.name AS name
            FROM word_tags wt
            JOIN tags t ON t.id = wt.tag_id
            WHERE wt.word_id = ?1
            ORDER BY wt.rowid
            "#,
        )
        .bind(word_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.get("name")).collect())
    }

    /// Tag names for every word, grouped by word id.
    async fn tags_by_word(&self) -> Result<HashMap<i64, Vec<String>>> {
        let rows = sqlx::query(
            r#"
            SELECT wt.word_id AS word_id, t.name AS name
            FROM word_tags wt
            JOIN tags t ON t.id = wt.tag_id
            ORDER BY wt.word_id, wt.rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut map: HashMap<i64, Vec<String>> = HashMap::new();
        for row in rows {
            map.entry(row.get("word_id"))
                .or_default()
                .push(row.get("name"));
        }
        Ok(map)
    }

    // === Quiz Queries ===

    /// All quiz entries (id + prompt), ordered by id.
    pub async fn list_quiz_entries(&self) -> Result<Vec<QuizQuestion>> {
        let rows = sqlx::query("SELECT id, english FROM words ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| QuizQuestion {
                id: row.get("id"),
                question: row.get("english"),
            })
            .collect())
    }

    /// Quiz entries with ids in `[start, end]`, or `[start, ..)` when `end`
    /// is absent.
    pub async fn quiz_entries_in_range(
        &self,
        start: i64,
        end: Option<i64>,
    ) -> Result<Vec<QuizQuestion>> {
        let rows = match end {
            Some(end) => {
                sqlx::query(
                    r#"
                    SELECT id, english FROM words
                    WHERE id >= ?1 AND id <= ?2
                    ORDER BY id
                    "#,
                )
                .bind(start)
                .bind(end)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, english FROM words
                    WHERE id >= ?1
                    ORDER BY id
                    "#,
                )
                .bind(start)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows
            .into_iter()
            .map(|row| QuizQuestion {
                id: row.get("id"),
                question: row.get("english"),
            })
            .collect())
    }

    /// The canonical answer for a word, re-read fresh for verification.
    pub async fn get_answer(&self, id: i64) -> Result<Option<String>> {
        let answer = sqlx::query_scalar("SELECT portuguese FROM words WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(answer)
    }
}

/// Get-or-create each tag and link it to the word.
///
/// The upsert resolves name collisions to the existing row in one atomic
/// statement; duplicate links are ignored rather than errored. Blank names
/// are skipped.
async fn link_tags(tx: &mut Transaction<'_, Sqlite>, word_id: i64, tags: &[String]) -> Result<()> {
    for name in tags {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let tag_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tags (name) VALUES (?1)
            ON CONFLICT(name) DO UPDATE SET name = excluded.name
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query("INSERT OR IGNORE INTO word_tags (word_id, tag_id) VALUES (?1, ?2)")
            .bind(word_id)
            .bind(tag_id)
            .execute(&mut **tx)
            .await?;
    }

    Ok(())
}
