//! Chord Storage
//!
//! `SQLite` persistence layer for the Chord audio player.
//!
//! Tracks (including their full audio payloads) and playlists live in a
//! single database file. Each domain owns its own queries as a vertical
//! slice.
//!
//! # Example
//!
//! ```rust,no_run
//! use chord_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://chord.db").await?;
//! run_migrations(&pool).await?;
//!
//! let tracks = chord_storage::tracks::get_all(&pool).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;

// Vertical slices
pub mod playlists;
pub mod tracks;

pub use error::StorageError;

use sqlx::sqlite::SqlitePool;

/// Run database migrations
///
/// Called once at startup. Every statement is idempotent, so re-running
/// against an existing database is safe.
///
/// # Errors
///
/// Returns an error if a migration statement fails
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    // Embedded migrations for reliability
    const MIGRATIONS: &[&str] = &[
        include_str!("../migrations/0001_create_tracks.sql"),
        include_str!("../migrations/0002_create_playlists.sql"),
        include_str!("../migrations/0003_create_playlist_tracks.sql"),
    ];

    for migration in MIGRATIONS {
        sqlx::query(migration)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://chord.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "creating sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
