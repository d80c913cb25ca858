//! SQLite-backed screen document store.
//!
//! Each screen is stored whole as its JSON document, keyed by the hex id.
//! Listing follows first-insertion order (`rowid`), which an upsert keeps.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::sync::Arc;

use marquee_domain::{Screen, ScreenId};

use crate::infrastructure::ports::{ClockPort, RepoError, ScreenRepo};

/// SQLite implementation of screen storage.
pub struct SqliteScreenRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteScreenRepo {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| RepoError::unavailable("screen.connect", e))?;
            }
        }

        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| map_sqlx_error("screen.connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS screens (
                id TEXT PRIMARY KEY NOT NULL,
                document TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| map_sqlx_error("screen.migrate", e))?;

        Ok(Self { pool, clock })
    }

    /// Close the pool. Later calls fail with `RepoError::Unavailable`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Connection-level failures become `Unavailable`; the rest are plain
/// database errors.
fn map_sqlx_error(operation: &'static str, e: sqlx::Error) -> RepoError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepoError::unavailable(operation, e)
        }
        other => RepoError::database(operation, other),
    }
}

fn decode(document: &str) -> Result<Screen, RepoError> {
    serde_json::from_str(document).map_err(RepoError::serialization)
}

#[async_trait]
impl ScreenRepo for SqliteScreenRepo {
    async fn save(&self, screen: &Screen) -> Result<Screen, RepoError> {
        let document = serde_json::to_string(screen).map_err(RepoError::serialization)?;
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO screens (id, document, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                document = excluded.document,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(screen.id().to_hex())
        .bind(document.as_str())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("screen.save", e))?;

        // Echo what was written, not the caller's value.
        decode(&document)
    }

    async fn list_all(&self) -> Result<Vec<Screen>, RepoError> {
        let rows = sqlx::query("SELECT document FROM screens ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("screen.list_all", e))?;

        rows.iter()
            .map(|row| {
                let document: String = row.get("document");
                decode(&document)
            })
            .collect()
    }

    async fn get(&self, id: ScreenId) -> Result<Option<Screen>, RepoError> {
        let row = sqlx::query("SELECT document FROM screens WHERE id = ?")
            .bind(id.to_hex())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("screen.get", e))?;

        match row {
            Some(row) => {
                let document: String = row.get("document");
                decode(&document).map(Some)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use marquee_domain::{ScreenName, Seat};
    use serde_json::json;

    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockClockPort;

    fn screen(name: &str) -> Screen {
        Screen::new(ScreenName::new(name).expect("valid name"))
    }

    async fn open(dir: &tempfile::TempDir) -> SqliteScreenRepo {
        let path = dir.path().join("screens.db");
        let now = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let clock = Arc::new(FixedClock(now));
        SqliteScreenRepo::new(path.to_str().expect("utf-8 path"), clock)
            .await
            .expect("open sqlite repo")
    }

    #[tokio::test]
    async fn save_then_list_and_get_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open(&dir).await;

        let seats = vec![Seat::from("A1"), Seat::new(json!({"row": "B", "number": 2}))];
        let original = screen("Screen 1").with_seats(seats).with_booked(true);

        let echoed = repo.save(&original).await.expect("save");
        assert_eq!(echoed, original);

        assert_eq!(repo.list_all().await.expect("list"), vec![original.clone()]);
        assert_eq!(repo.get(original.id()).await.expect("get"), Some(original));
        assert!(repo.get(ScreenId::new()).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn upsert_keeps_first_insertion_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open(&dir).await;

        let first = screen("Screen 1");
        let second = screen("Screen 2");
        repo.save(&first).await.expect("save first");
        repo.save(&second).await.expect("save second");

        let updated = first.clone().with_booked(true);
        repo.save(&updated).await.expect("upsert first");

        let screens = repo.list_all().await.expect("list");
        assert_eq!(screens, vec![updated, second]);
    }

    #[tokio::test]
    async fn large_seat_list_survives_storage() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open(&dir).await;

        let seats: Vec<Seat> = (0..1000).map(|n| Seat::new(n)).collect();
        let saved = repo
            .save(&screen("Screen 1").with_seats(seats))
            .await
            .expect("save");

        let loaded = repo.get(saved.id()).await.expect("get").expect("present");
        assert_eq!(loaded.seats().len(), 1000);
    }

    #[tokio::test]
    async fn data_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let saved = {
            let repo = open(&dir).await;
            let saved = repo.save(&screen("Screen 1")).await.expect("save");
            repo.close().await;
            saved
        };

        let reopened = open(&dir).await;
        assert_eq!(reopened.list_all().await.expect("list"), vec![saved]);
    }

    #[tokio::test]
    async fn save_stamps_time_from_clock() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("screens.db");

        let mut clock = MockClockPort::new();
        clock.expect_now().times(1).returning(|| {
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
                .single()
                .expect("valid timestamp")
        });

        let repo = SqliteScreenRepo::new(path.to_str().expect("utf-8 path"), Arc::new(clock))
            .await
            .expect("open");
        let saved = repo.save(&screen("Screen 1")).await.expect("save");

        let stamp: String = sqlx::query("SELECT updated_at FROM screens WHERE id = ?")
            .bind(saved.id().to_hex())
            .fetch_one(&repo.pool)
            .await
            .expect("row")
            .get("updated_at");
        assert!(stamp.starts_with("2024-03-01T12:00:00"));
    }

    #[tokio::test]
    async fn closed_pool_reports_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open(&dir).await;
        repo.close().await;

        let err = repo.list_all().await.expect_err("closed pool must fail");
        assert!(err.is_unavailable(), "unexpected error: {err}");

        let err = repo.save(&screen("Screen 1")).await.expect_err("closed pool must fail");
        assert!(err.is_unavailable(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn corrupt_document_is_a_serialization_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open(&dir).await;

        sqlx::query("INSERT INTO screens (id, document, updated_at) VALUES (?, ?, ?)")
            .bind(ScreenId::new().to_hex())
            .bind(r#"{"id":"65f1a2b3c4d5e6f708192a3b","screenName":"x"}"#)
            .bind("2024-03-01T12:00:00+00:00")
            .execute(&repo.pool)
            .await
            .expect("raw insert");

        let err = repo.list_all().await.expect_err("invalid name in stored document");
        assert!(matches!(err, RepoError::Serialization(_)));
    }
}
