/// ID types for Chord entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Track identifier
///
/// Assigned by the track store on insert (SQLite rowid): monotonic and
/// unique within the store's lifetime, never chosen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(i64);

impl TrackId {
    /// Wrap a store-assigned rowid
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner rowid
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playlist identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Sentinel id of the implicit all-tracks playlist
    pub const DEFAULT: &'static str = "default";

    /// Create a playlist ID from an existing string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random playlist ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The implicit all-tracks playlist id
    pub fn default_playlist() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    /// Whether this is the implicit all-tracks playlist
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
