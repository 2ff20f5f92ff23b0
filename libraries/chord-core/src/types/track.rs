/// Track types
use super::ids::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder title used when a filename yields nothing usable
pub const UNKNOWN_TITLE: &str = "Unknown title";

/// Placeholder artist until tag extraction exists
pub const UNKNOWN_ARTIST: &str = "Unknown artist";

/// A stored track, as returned by the track store.
///
/// The full audio payload rides along with the metadata; tracks are
/// imported whole and played from memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub mime_type: String,
    /// Complete encoded audio bytes
    #[serde(skip)]
    pub payload: Vec<u8>,
    /// Probed duration in seconds, `0.0` when unknown
    pub duration_seconds: f64,
    pub added_at: DateTime<Utc>,
}

/// A track about to be imported, before the store assigns an id
#[derive(Debug, Clone)]
pub struct NewTrack {
    pub title: String,
    pub artist: String,
    pub mime_type: String,
    pub payload: Vec<u8>,
    pub duration_seconds: f64,
}

impl NewTrack {
    /// Create a new track with placeholder artist and unknown duration
    pub fn new(title: impl Into<String>, mime_type: impl Into<String>, payload: Vec<u8>) -> Self {
        let title = title.into();
        let title = if title.trim().is_empty() {
            UNKNOWN_TITLE.to_string()
        } else {
            title
        };
        Self {
            title,
            artist: UNKNOWN_ARTIST.to_string(),
            mime_type: mime_type.into(),
            payload,
            duration_seconds: 0.0,
        }
    }

    /// Set the probed duration
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Derive a display title from an imported filename by stripping the
    /// final extension. `"song.mp3"` becomes `"song"`; a name with no
    /// extension is kept as-is.
    pub fn title_from_filename(filename: &str) -> String {
        let stem = match filename.rfind('.') {
            Some(0) | None => filename,
            Some(idx) => &filename[..idx],
        };
        if stem.trim().is_empty() {
            UNKNOWN_TITLE.to_string()
        } else {
            stem.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_track_defaults() {
        let track = NewTrack::new("My Song", "audio/mpeg", vec![1, 2, 3]);
        assert_eq!(track.title, "My Song");
        assert_eq!(track.artist, UNKNOWN_ARTIST);
        assert_eq!(track.duration_seconds, 0.0);
        assert_eq!(track.payload, vec![1, 2, 3]);
    }

    #[test]
    fn empty_title_falls_back_to_placeholder() {
        let track = NewTrack::new("   ", "audio/mpeg", vec![]);
        assert_eq!(track.title, UNKNOWN_TITLE);
    }

    #[test]
    fn title_from_filename_strips_extension() {
        assert_eq!(NewTrack::title_from_filename("song.mp3"), "song");
        assert_eq!(NewTrack::title_from_filename("archive.tar.gz"), "archive.tar");
        assert_eq!(NewTrack::title_from_filename("noext"), "noext");
    }

    #[test]
    fn title_from_filename_handles_hidden_and_empty_names() {
        assert_eq!(NewTrack::title_from_filename(".flac"), ".flac");
        assert_eq!(NewTrack::title_from_filename(""), UNKNOWN_TITLE);
    }

    #[test]
    fn with_duration_sets_seconds() {
        let track = NewTrack::new("t", "audio/ogg", vec![]).with_duration(182.5);
        assert_eq!(track.duration_seconds, 182.5);
    }
}
