//! Track store: whole audio files persisted as rows
use crate::error::Result;
use chord_core::{ChordError, NewTrack, Track, TrackId};
use sqlx::{Row, SqlitePool};

fn track_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Track> {
    Ok(Track {
        id: TrackId::new(row.get::<i64, _>("id")),
        title: row.get("title"),
        artist: row.get("artist"),
        mime_type: row.get("mime_type"),
        payload: row.get::<Vec<u8>, _>("payload"),
        duration_seconds: row.get::<f64, _>("duration_seconds"),
        added_at: chrono::DateTime::from_timestamp(row.get::<i64, _>("added_at"), 0)
            .unwrap_or_default(),
    })
}

/// Insert a track and return it with its store-assigned id
pub async fn add(pool: &SqlitePool, new_track: NewTrack) -> Result<Track> {
    let added_at = chrono::Utc::now();

    let result = sqlx::query(
        "INSERT INTO tracks (title, artist, mime_type, payload, duration_seconds, added_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&new_track.title)
    .bind(&new_track.artist)
    .bind(&new_track.mime_type)
    .bind(&new_track.payload)
    .bind(new_track.duration_seconds)
    .bind(added_at.timestamp())
    .execute(pool)
    .await?;

    let id = TrackId::new(result.last_insert_rowid());
    tracing::debug!(track_id = %id, title = %new_track.title, "track added");

    Ok(Track {
        id,
        title: new_track.title,
        artist: new_track.artist,
        mime_type: new_track.mime_type,
        payload: new_track.payload,
        duration_seconds: new_track.duration_seconds,
        added_at,
    })
}

/// Get a single track with its payload
pub async fn get(pool: &SqlitePool, id: TrackId) -> Result<Option<Track>> {
    let row = sqlx::query(
        "SELECT id, title, artist, mime_type, payload, duration_seconds, added_at
         FROM tracks WHERE id = ?",
    )
    .bind(id.as_i64())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(track_from_row).transpose()
}

/// Get every stored track in import order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Track>> {
    let rows = sqlx::query(
        "SELECT id, title, artist, mime_type, payload, duration_seconds, added_at
         FROM tracks ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(track_from_row).collect()
}

/// Number of stored tracks
pub async fn count(pool: &SqlitePool) -> Result<usize> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tracks")
        .fetch_one(pool)
        .await?;
    Ok(count as usize)
}

/// Remove a track. Removing an id that does not exist is a no-op.
pub async fn remove(pool: &SqlitePool, id: TrackId) -> Result<()> {
    let result = sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(id.as_i64())
        .execute(pool)
        .await?;

    if result.rows_affected() > 0 {
        tracing::debug!(track_id = %id, "track removed");
    }

    Ok(())
}

/// Get a track or fail with `TrackNotFound`
pub async fn get_required(pool: &SqlitePool, id: TrackId) -> chord_core::Result<Track> {
    get(pool, id)
        .await
        .map_err(ChordError::from)?
        .ok_or(ChordError::TrackNotFound(id))
}
