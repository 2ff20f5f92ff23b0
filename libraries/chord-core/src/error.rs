/// Core error types for Chord
use crate::types::{PlaylistId, TrackId};
use thiserror::Error;

/// Result type alias using `ChordError`
pub type Result<T> = std::result::Result<T, ChordError>;

/// Unified error type for the player core.
///
/// Nothing here is fatal to the process: storage and playback failures are
/// surfaced as transient, retryable messages; probe failures degrade to a
/// zero duration; stale selections are silently ignored upstream and never
/// reach this type.
#[derive(Error, Debug)]
pub enum ChordError {
    /// Durable store operation failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Audio sink refused to load or play a track
    #[error("Playback error: {0}")]
    Playback(String),

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Invalid input (unsupported mime type, empty name, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The default all-tracks playlist cannot be deleted or replaced
    #[error("The default playlist cannot be modified")]
    DefaultPlaylistProtected,

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl ChordError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a playback error
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
