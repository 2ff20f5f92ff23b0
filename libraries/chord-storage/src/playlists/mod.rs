//! Playlist store: named, ordered lists of track references
use crate::error::Result;
use chord_core::{Playlist, PlaylistId, TrackId};
use sqlx::{Row, SqlitePool};

async fn track_ids_for(pool: &SqlitePool, id: &PlaylistId) -> Result<Vec<TrackId>> {
    let rows = sqlx::query(
        "SELECT track_id FROM playlist_tracks WHERE playlist_id = ? ORDER BY position",
    )
    .bind(id.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| TrackId::new(row.get::<i64, _>("track_id")))
        .collect())
}

/// Insert the implicit all-tracks playlist if it is missing
async fn seed_default(pool: &SqlitePool) -> Result<()> {
    let default = Playlist::default_playlist();

    sqlx::query("INSERT OR IGNORE INTO playlists (id, name, created_at) VALUES (?, ?, ?)")
        .bind(default.id.as_str())
        .bind(&default.name)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await?;

    Ok(())
}

/// List every playlist, default first, then by creation time.
///
/// Seeds the default playlist on first call, so the result is never empty.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Playlist>> {
    seed_default(pool).await?;

    let rows = sqlx::query(
        "SELECT id, name FROM playlists
         ORDER BY (id != ?), created_at, id",
    )
    .bind(PlaylistId::DEFAULT)
    .fetch_all(pool)
    .await?;

    let mut playlists = Vec::with_capacity(rows.len());
    for row in rows {
        let id = PlaylistId::new(row.get::<String, _>("id"));
        let track_ids = track_ids_for(pool, &id).await?;
        playlists.push(Playlist {
            id,
            name: row.get("name"),
            track_ids,
        });
    }

    Ok(playlists)
}

/// Get a single playlist with its track references
pub async fn get(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    if id.is_default() {
        seed_default(pool).await?;
    }

    let row = sqlx::query("SELECT id, name FROM playlists WHERE id = ?")
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let track_ids = track_ids_for(pool, id).await?;

    Ok(Some(Playlist {
        id: id.clone(),
        name: row.get("name"),
        track_ids,
    }))
}

/// Write a playlist in full: name and complete track list replace
/// whatever was stored before. Creates the playlist if it is new.
pub async fn upsert(pool: &SqlitePool, playlist: &Playlist) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO playlists (id, name, created_at) VALUES (?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET name = excluded.name",
    )
    .bind(playlist.id.as_str())
    .bind(&playlist.name)
    .bind(chrono::Utc::now().timestamp())
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ?")
        .bind(playlist.id.as_str())
        .execute(&mut *tx)
        .await?;

    for (position, track_id) in playlist.track_ids.iter().enumerate() {
        sqlx::query(
            "INSERT INTO playlist_tracks (playlist_id, track_id, position) VALUES (?, ?, ?)",
        )
        .bind(playlist.id.as_str())
        .bind(track_id.as_i64())
        .bind(position as i64)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::debug!(playlist_id = %playlist.id, tracks = playlist.track_ids.len(), "playlist saved");

    Ok(())
}

/// Delete a playlist and its track references. Deleting an id that does
/// not exist is a no-op.
pub async fn remove(pool: &SqlitePool, id: &PlaylistId) -> Result<()> {
    let mut tx = pool.begin().await?;

    // ON DELETE CASCADE needs PRAGMA foreign_keys; delete explicitly instead
    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ?")
        .bind(id.as_str())
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id.as_str())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}
