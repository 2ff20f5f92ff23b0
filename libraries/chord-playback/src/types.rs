//! Playback session types
use chord_core::TrackId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A track as the playback session sees it.
///
/// The payload is shared, not copied: the same bytes sit in the facade's
/// cache and travel to the sink on load.
#[derive(Debug, Clone)]
pub struct SessionTrack {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub mime_type: String,
    pub duration_seconds: f64,
    pub payload: Arc<Vec<u8>>,
}

/// Playback state
///
/// Track-end and sink errors are events, not states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// No track selected
    Idle,
    /// A track is selected but not audibly playing
    Paused,
    /// A track is playing
    Playing,
}

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    Off,
    /// Loop the whole track list
    All,
    /// Loop the current track
    One,
}

impl RepeatMode {
    /// Off -> All -> One -> Off
    pub fn cycle(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }
}

/// Navigation direction for `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Volume applied when a session starts
    pub initial_volume: f32,

    /// Volume restored by unmute when nothing was cached
    pub unmute_volume: f32,

    /// "Previous" restarts the current track instead of changing it when
    /// at least this many seconds have played
    pub restart_threshold_seconds: f64,

    /// Step used by relative seeks
    pub seek_step_seconds: f64,

    /// Start playing automatically when the very first track is imported
    pub autoplay_first_import: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_volume: 0.7,
            unmute_volume: 0.7,
            restart_threshold_seconds: 3.0,
            seek_step_seconds: 10.0,
            autoplay_first_import: true,
        }
    }
}
