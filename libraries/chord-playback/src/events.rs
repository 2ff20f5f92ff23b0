//! Outbound session events
use crate::types::PlaybackState;
use chord_core::TrackId;
use serde::{Deserialize, Serialize};

/// Notification emitted by the session after a state change.
///
/// Events accumulate in order and are collected with `drain_events`;
/// the presentation layer renders from these rather than polling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A different track was selected
    TrackChanged { index: usize, track_id: TrackId },

    /// Play/pause/idle transition
    StateChanged { state: PlaybackState },

    /// The track list was replaced or edited
    TracksChanged,

    /// Playlists were created, edited, or deleted
    PlaylistsChanged,

    /// Volume or mute state changed
    VolumeChanged { volume: f32, muted: bool },

    /// Periodic playback position, forwarded from the sink's time feed
    PositionChanged {
        elapsed_seconds: f64,
        total_seconds: f64,
    },

    /// A non-fatal error was surfaced to the user
    Error { message: String },
}
