//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations and constraints.

use chord_core::{NewTrack, Track};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = chord_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        chord_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: import a track with a small fake payload
pub async fn add_test_track(pool: &SqlitePool, title: &str) -> Track {
    let new_track =
        NewTrack::new(title, "audio/mpeg", vec![0xAB; 64]).with_duration(180.0);

    chord_storage::tracks::add(pool, new_track)
        .await
        .expect("Failed to add test track")
}
