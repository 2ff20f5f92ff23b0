//! Read-only presentation snapshot
use chord_core::{PlaylistId, TrackId};
use chord_playback::{PlaybackState, RepeatMode};
use serde::Serialize;

/// Everything the presentation layer needs to render one frame
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub state: PlaybackState,
    pub current: Option<CurrentTrackView>,
    /// Tracks of the active playlist, in display order
    pub tracks: Vec<TrackView>,
    /// Index into `tracks` of the current selection
    pub active_index: Option<usize>,
    pub playlists: Vec<PlaylistView>,
    pub active_playlist: PlaylistId,
    pub volume: f32,
    pub muted: bool,
    pub shuffle: bool,
    pub repeat: RepeatMode,
}

/// The selected track with live position
#[derive(Debug, Clone, Serialize)]
pub struct CurrentTrackView {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub elapsed_seconds: f64,
    pub total_seconds: f64,
}

/// One row of the track list
#[derive(Debug, Clone, Serialize)]
pub struct TrackView {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub duration_seconds: f64,
}

/// One row of the playlist picker
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistView {
    pub id: PlaylistId,
    pub name: String,
    pub track_count: usize,
    pub active: bool,
}
