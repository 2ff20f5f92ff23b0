//! The player facade
use crate::view::{CurrentTrackView, PlayerView, PlaylistView, TrackView};
use chord_core::{
    ChordError, DurationProbe, NewTrack, Playlist, PlaylistId, Result, Track, TrackId,
};
use chord_playback::{
    AudioSink, Direction, PlaybackSession, PlaybackState, RepeatMode, SessionConfig, SessionEvent,
    SessionTrack,
};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::Arc;

fn session_track(track: Track) -> SessionTrack {
    SessionTrack {
        id: track.id,
        title: track.title,
        artist: track.artist,
        mime_type: track.mime_type,
        duration_seconds: track.duration_seconds,
        payload: Arc::new(track.payload),
    }
}

/// One player: database pool, playback state machine, sink, probe.
///
/// All operations take `&mut self`, so they run to completion relative to
/// one another even though store and sink calls suspend.
pub struct Session {
    pool: SqlitePool,
    playback: PlaybackSession,
    probe: Box<dyn DurationProbe>,
    active_playlist: PlaylistId,
}

impl Session {
    /// Create a session; call [`load`](Self::load) before anything else
    pub fn new(
        pool: SqlitePool,
        sink: Box<dyn AudioSink>,
        probe: Box<dyn DurationProbe>,
        config: SessionConfig,
    ) -> Self {
        Self {
            pool,
            playback: PlaybackSession::new(sink, config),
            probe,
            active_playlist: PlaylistId::default_playlist(),
        }
    }

    /// Read both stores and populate the track list from the default
    /// playlist. Seeds the default playlist on a fresh database.
    pub async fn load(&mut self) -> Result<()> {
        chord_storage::playlists::list(&self.pool).await?;

        let tracks = chord_storage::tracks::get_all(&self.pool).await?;
        let count = tracks.len();
        self.playback
            .set_tracks(tracks.into_iter().map(session_track).collect())
            .await?;
        self.active_playlist = PlaylistId::default_playlist();

        tracing::info!(tracks = count, "session loaded");
        Ok(())
    }

    // Import and deletion

    /// Import an audio file held in memory.
    ///
    /// The title comes from the display name with its extension stripped;
    /// the duration from the probe (unknown durations import as 0). When
    /// this is the very first track of an empty player, it starts playing
    /// on its own.
    pub async fn import_track(
        &mut self,
        bytes: Vec<u8>,
        mime_type: &str,
        display_name: &str,
    ) -> Result<Track> {
        if !mime_type.starts_with("audio/") {
            return Err(ChordError::invalid_input(format!(
                "not an audio file: {mime_type}"
            )));
        }

        let title = NewTrack::title_from_filename(display_name);
        let duration = self.probe.probe(&bytes, mime_type);
        let new_track = NewTrack::new(title, mime_type, bytes).with_duration(duration);

        let track = chord_storage::tracks::add(&self.pool, new_track).await?;
        tracing::info!(track_id = %track.id, title = %track.title, "imported track");

        let was_empty = self.playback.tracks().is_empty();
        let index = self.playback.push_track(session_track(track.clone()));

        if was_empty && self.playback.config().autoplay_first_import {
            // Best effort: a sink that cannot play yet must not fail the import
            if let Err(e) = self.playback.select(index).await {
                tracing::warn!(error = %e, "autoplay of first import failed");
            }
        }

        Ok(track)
    }

    /// Delete a track from the store and the current track list.
    ///
    /// Playlist references to it are left in place and skipped on read.
    /// Deleting the playing track stops playback first; the in-memory
    /// list is only touched once the store delete has succeeded, so a
    /// failed delete leaves the visible state matching the store.
    pub async fn remove_track(&mut self, id: TrackId) -> Result<()> {
        let index = self.playback.index_of(id);

        if index.is_some() && index == self.playback.current_index() {
            self.playback.stop().await?;
        }

        chord_storage::tracks::remove(&self.pool, id).await?;

        if let Some(index) = index {
            self.playback.remove_track_at(index).await?;
        }

        tracing::info!(track_id = %id, "removed track");
        Ok(())
    }

    // Playlists

    /// Make a playlist the active track list, resetting playback.
    ///
    /// The default playlist resolves to every stored track in import
    /// order; other playlists resolve their references against the store,
    /// silently skipping tracks that no longer exist.
    pub async fn switch_playlist(&mut self, id: &PlaylistId) -> Result<()> {
        let tracks = if id.is_default() {
            chord_storage::tracks::get_all(&self.pool).await?
        } else {
            let playlist = chord_storage::playlists::get(&self.pool, id)
                .await?
                .ok_or_else(|| ChordError::PlaylistNotFound(id.clone()))?;

            let mut by_id: HashMap<TrackId, Track> =
                chord_storage::tracks::get_all(&self.pool)
                    .await?
                    .into_iter()
                    .map(|t| (t.id, t))
                    .collect();

            let mut resolved = Vec::with_capacity(playlist.track_ids.len());
            for track_id in &playlist.track_ids {
                if let Some(track) = by_id.remove(track_id) {
                    resolved.push(track);
                } else {
                    tracing::debug!(track_id = %track_id, playlist_id = %id, "skipping dangling reference");
                }
            }
            resolved
        };

        self.playback
            .set_tracks(tracks.into_iter().map(session_track).collect())
            .await?;
        self.active_playlist = id.clone();
        Ok(())
    }

    /// Create an empty playlist
    pub async fn create_playlist(&mut self, name: &str) -> Result<Playlist> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChordError::invalid_input("playlist name is empty"));
        }

        let playlist = Playlist::new(name);
        chord_storage::playlists::upsert(&self.pool, &playlist).await?;
        tracing::info!(playlist_id = %playlist.id, name = %playlist.name, "created playlist");

        self.playback.emit(SessionEvent::PlaylistsChanged);
        Ok(playlist)
    }

    /// Rename a playlist. The default playlist keeps its name.
    pub async fn rename_playlist(&mut self, id: &PlaylistId, name: &str) -> Result<()> {
        if id.is_default() {
            return Err(ChordError::DefaultPlaylistProtected);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ChordError::invalid_input("playlist name is empty"));
        }

        let mut playlist = self.require_playlist(id).await?;
        playlist.name = name.to_string();
        chord_storage::playlists::upsert(&self.pool, &playlist).await?;

        self.playback.emit(SessionEvent::PlaylistsChanged);
        Ok(())
    }

    /// Add a track to a playlist; already-present tracks are left alone.
    /// The default playlist's membership is derived, never edited.
    pub async fn add_to_playlist(&mut self, id: &PlaylistId, track_id: TrackId) -> Result<()> {
        if id.is_default() {
            return Err(ChordError::DefaultPlaylistProtected);
        }

        chord_storage::tracks::get_required(&self.pool, track_id).await?;

        let mut playlist = self.require_playlist(id).await?;
        if playlist.push(track_id) {
            chord_storage::playlists::upsert(&self.pool, &playlist).await?;
            self.playback.emit(SessionEvent::PlaylistsChanged);
        }
        Ok(())
    }

    /// Drop a track from a playlist, keeping the rest in order
    pub async fn remove_from_playlist(&mut self, id: &PlaylistId, track_id: TrackId) -> Result<()> {
        if id.is_default() {
            return Err(ChordError::DefaultPlaylistProtected);
        }

        let mut playlist = self.require_playlist(id).await?;
        if playlist.remove(track_id) {
            chord_storage::playlists::upsert(&self.pool, &playlist).await?;
            self.playback.emit(SessionEvent::PlaylistsChanged);
        }
        Ok(())
    }

    /// Delete a playlist. Deleting the active one falls back to the
    /// default playlist; the default itself cannot be deleted.
    pub async fn delete_playlist(&mut self, id: &PlaylistId) -> Result<()> {
        if id.is_default() {
            return Err(ChordError::DefaultPlaylistProtected);
        }

        chord_storage::playlists::remove(&self.pool, id).await?;
        tracing::info!(playlist_id = %id, "deleted playlist");
        self.playback.emit(SessionEvent::PlaylistsChanged);

        if self.active_playlist == *id {
            self.switch_playlist(&PlaylistId::default_playlist()).await?;
        }
        Ok(())
    }

    async fn require_playlist(&self, id: &PlaylistId) -> Result<Playlist> {
        chord_storage::playlists::get(&self.pool, id)
            .await?
            .ok_or_else(|| ChordError::PlaylistNotFound(id.clone()))
    }

    // Playback controls, forwarded to the state machine

    pub async fn select_track(&mut self, index: usize) -> Result<()> {
        Ok(self.playback.select(index).await?)
    }

    pub async fn toggle_play_pause(&mut self) -> Result<()> {
        Ok(self.playback.toggle_play_pause().await?)
    }

    pub async fn next_track(&mut self) -> Result<()> {
        Ok(self.playback.advance(Direction::Next).await?)
    }

    pub async fn previous_track(&mut self) -> Result<()> {
        Ok(self.playback.advance(Direction::Previous).await?)
    }

    /// Notify the session that the sink finished the loaded track
    pub async fn on_track_ended(&mut self) -> Result<()> {
        Ok(self.playback.on_track_ended().await?)
    }

    /// Feed the sink's periodic time update through to the event stream
    pub async fn on_time_update(&mut self, elapsed_seconds: f64) {
        self.playback.on_time_update(elapsed_seconds).await;
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.playback.toggle_shuffle()
    }

    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.playback.cycle_repeat()
    }

    pub async fn set_volume(&mut self, level: f32) -> Result<()> {
        Ok(self.playback.set_volume(level).await?)
    }

    pub async fn toggle_mute(&mut self) -> Result<()> {
        Ok(self.playback.toggle_mute().await?)
    }

    pub async fn seek_forward(&mut self) -> Result<()> {
        Ok(self.playback.seek_forward().await?)
    }

    pub async fn seek_backward(&mut self) -> Result<()> {
        Ok(self.playback.seek_backward().await?)
    }

    // Presentation

    /// Snapshot the whole player for rendering
    pub async fn view(&self) -> Result<PlayerView> {
        let playlists = chord_storage::playlists::list(&self.pool).await?;
        let total_tracks = chord_storage::tracks::count(&self.pool).await?;

        let playlists = playlists
            .into_iter()
            .map(|p| {
                let track_count = if p.is_default() {
                    total_tracks
                } else {
                    p.track_ids.len()
                };
                PlaylistView {
                    active: p.id == self.active_playlist,
                    id: p.id,
                    name: p.name,
                    track_count,
                }
            })
            .collect();

        let current = match self.playback.current_track() {
            Some(track) => Some(CurrentTrackView {
                id: track.id,
                title: track.title.clone(),
                artist: track.artist.clone(),
                elapsed_seconds: self.playback.current_time().await,
                total_seconds: self.playback.duration().await,
            }),
            None => None,
        };

        Ok(PlayerView {
            state: self.playback.state(),
            current,
            tracks: self
                .playback
                .tracks()
                .iter()
                .map(|t| TrackView {
                    id: t.id,
                    title: t.title.clone(),
                    artist: t.artist.clone(),
                    duration_seconds: t.duration_seconds,
                })
                .collect(),
            active_index: self.playback.current_index(),
            playlists,
            active_playlist: self.active_playlist.clone(),
            volume: self.playback.volume_level(),
            muted: self.playback.is_muted(),
            shuffle: self.playback.shuffle_enabled(),
            repeat: self.playback.repeat(),
        })
    }

    /// Take the events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.playback.drain_events()
    }

    /// Whether the sink keeps playing when the UI is backgrounded
    pub fn supports_background_playback(&self) -> bool {
        self.playback.supports_background_playback()
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn active_playlist(&self) -> &PlaylistId {
        &self.active_playlist
    }
}
