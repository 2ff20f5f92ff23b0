//! Playback session state machine
//!
//! One session drives one sink. All transitions run on a single task:
//! the owner holds `&mut self` across sink calls, so transitions complete
//! relative to one another and the state never tears mid-operation.

use crate::error::Result;
use crate::events::SessionEvent;
use crate::shuffle;
use crate::sink::AudioSink;
use crate::types::{Direction, PlaybackState, RepeatMode, SessionConfig, SessionTrack};
use crate::volume::VolumeControl;
use std::collections::VecDeque;

/// The playback session: selection, play/pause, shuffle, repeat, volume.
pub struct PlaybackSession {
    tracks: Vec<SessionTrack>,
    /// `None` means idle: nothing selected, nothing playing
    current: Option<usize>,
    playing: bool,
    shuffle_enabled: bool,
    repeat: RepeatMode,
    /// Pending shuffle pass, consumed from the front; empty means the next
    /// selection regenerates it
    shuffle_queue: VecDeque<usize>,
    volume: VolumeControl,
    /// Bumped by every selection so a superseded select's sink result can
    /// be discarded instead of clobbering a newer selection
    generation: u64,
    config: SessionConfig,
    sink: Box<dyn AudioSink>,
    events: Vec<SessionEvent>,
}

impl PlaybackSession {
    /// Create an idle session driving the given sink
    pub fn new(sink: Box<dyn AudioSink>, config: SessionConfig) -> Self {
        let volume = VolumeControl::new(config.initial_volume, config.unmute_volume);
        Self {
            tracks: Vec::new(),
            current: None,
            playing: false,
            shuffle_enabled: false,
            repeat: RepeatMode::Off,
            shuffle_queue: VecDeque::new(),
            volume,
            generation: 0,
            config,
            sink,
            events: Vec::new(),
        }
    }

    // State accessors

    pub fn state(&self) -> PlaybackState {
        match (self.current, self.playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&SessionTrack> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    pub fn tracks(&self) -> &[SessionTrack] {
        &self.tracks
    }

    pub fn index_of(&self, id: chord_core::TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn volume_level(&self) -> f32 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle_enabled
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn supports_background_playback(&self) -> bool {
        self.sink.supports_background_playback()
    }

    /// Elapsed seconds of the loaded track, pulled from the sink
    pub async fn current_time(&self) -> f64 {
        self.sink.current_time().await
    }

    /// Duration of the loaded track; falls back to the probed duration
    /// while the sink has not settled on one yet
    pub async fn duration(&self) -> f64 {
        let duration = self.sink.duration().await;
        if duration > 0.0 {
            duration
        } else {
            self.current_track().map_or(0.0, |t| t.duration_seconds)
        }
    }

    // Events

    /// Take every event emitted since the last drain, in order
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Record an event for the next drain
    pub fn emit(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    // Transitions

    /// Select a track by index and start playing it.
    ///
    /// An out-of-range index is a silent no-op: the UI may hold stale
    /// indices across a track-list edit, and those clicks mean nothing.
    /// A sink rejection keeps the selection (the track stays current,
    /// just not audibly playing) and surfaces the error.
    pub async fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.tracks.len() {
            return Ok(());
        }

        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        if self.shuffle_enabled && self.shuffle_queue.is_empty() {
            self.shuffle_queue = shuffle::build_queue(self.tracks.len(), Some(index));
        }

        self.current = Some(index);
        let track = self.tracks[index].clone();
        self.emit(SessionEvent::TrackChanged {
            index,
            track_id: track.id,
        });

        let result = self.load_and_play(&track).await;

        if generation != self.generation {
            // a newer selection superseded this one while the sink was busy
            return Ok(());
        }

        match result {
            Ok(()) => {
                self.playing = true;
                self.emit(SessionEvent::StateChanged {
                    state: PlaybackState::Playing,
                });
                Ok(())
            }
            Err(e) => {
                self.playing = false;
                tracing::warn!(track_id = %track.id, error = %e, "sink rejected track");
                self.emit(SessionEvent::Error {
                    message: e.to_string(),
                });
                self.emit(SessionEvent::StateChanged {
                    state: PlaybackState::Paused,
                });
                Err(e)
            }
        }
    }

    async fn load_and_play(&mut self, track: &SessionTrack) -> Result<()> {
        self.sink.load(track.payload.clone(), &track.mime_type).await?;
        self.sink.set_volume(self.volume.level()).await?;
        self.sink.play().await
    }

    /// Idle with tracks available: select the first. Otherwise flip
    /// between playing and paused.
    pub async fn toggle_play_pause(&mut self) -> Result<()> {
        match self.state() {
            PlaybackState::Idle => {
                if self.tracks.is_empty() {
                    return Ok(());
                }
                self.select(0).await
            }
            PlaybackState::Playing => {
                self.sink.pause().await?;
                self.playing = false;
                self.emit(SessionEvent::StateChanged {
                    state: PlaybackState::Paused,
                });
                Ok(())
            }
            PlaybackState::Paused => {
                self.sink.play().await?;
                self.playing = true;
                self.emit(SessionEvent::StateChanged {
                    state: PlaybackState::Playing,
                });
                Ok(())
            }
        }
    }

    /// Drop to idle, pausing the sink. Keeps the track list.
    pub async fn stop(&mut self) -> Result<()> {
        if self.playing {
            self.sink.pause().await?;
        }
        if self.current.take().is_some() {
            self.playing = false;
            self.emit(SessionEvent::StateChanged {
                state: PlaybackState::Idle,
            });
        }
        Ok(())
    }

    /// Step to the neighbouring track.
    ///
    /// Next wraps around the end of the list; with shuffle on it consumes
    /// the pending shuffle pass instead. Previous restarts the current
    /// track when more than the restart threshold has already played.
    pub async fn advance(&mut self, direction: Direction) -> Result<()> {
        let len = self.tracks.len();
        if len == 0 {
            return Ok(());
        }

        let target = match direction {
            Direction::Next => {
                let mut from_queue = None;
                if self.shuffle_enabled {
                    from_queue = self.shuffle_queue.pop_front();
                }
                from_queue.unwrap_or_else(|| self.current.map_or(0, |c| (c + 1) % len))
            }
            Direction::Previous => {
                if self.sink.current_time().await > self.config.restart_threshold_seconds {
                    self.sink.seek(0.0).await?;
                    return Ok(());
                }
                if self.shuffle_enabled && !self.shuffle_queue.is_empty() {
                    if let Some(c) = self.current {
                        self.shuffle_queue.push_front(c);
                    }
                    self.shuffle_queue.pop_front().unwrap_or(0)
                } else {
                    // shuffle with nothing queued behaves like shuffle-off
                    self.current
                        .map_or(0, |c| if c == 0 { len - 1 } else { c - 1 })
                }
            }
        };

        self.select(target).await
    }

    /// React to the sink reaching the end of the loaded track
    pub async fn on_track_ended(&mut self) -> Result<()> {
        let len = self.tracks.len();
        let Some(current) = self.current else {
            return Ok(());
        };

        match self.repeat {
            RepeatMode::One => {
                self.sink.seek(0.0).await?;
                self.sink.play().await
            }
            RepeatMode::All => self.advance(Direction::Next).await,
            RepeatMode::Off => {
                if current + 1 < len {
                    self.advance(Direction::Next).await
                } else {
                    self.playing = false;
                    self.emit(SessionEvent::StateChanged {
                        state: PlaybackState::Paused,
                    });
                    Ok(())
                }
            }
        }
    }

    /// React to the sink's periodic time feed. One-way: the position is
    /// forwarded to the presentation layer, never waited on.
    pub async fn on_time_update(&mut self, elapsed_seconds: f64) {
        if self.current.is_none() {
            return;
        }
        let total_seconds = self.duration().await;
        self.emit(SessionEvent::PositionChanged {
            elapsed_seconds,
            total_seconds,
        });
    }

    /// Enable or disable shuffle. The pending pass is discarded either
    /// way; enabling regenerates it lazily on the next selection.
    pub fn set_shuffle(&mut self, enabled: bool) {
        self.shuffle_enabled = enabled;
        self.shuffle_queue.clear();
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.set_shuffle(!self.shuffle_enabled);
        self.shuffle_enabled
    }

    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    /// Off -> All -> One -> Off
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.repeat = self.repeat.cycle();
        self.repeat
    }

    // Volume

    pub async fn set_volume(&mut self, level: f32) -> Result<()> {
        let level = self.volume.set(level);
        self.sink.set_volume(level).await?;
        self.emit_volume();
        Ok(())
    }

    pub async fn mute(&mut self) -> Result<()> {
        self.volume.mute();
        self.sink.set_volume(0.0).await?;
        self.emit_volume();
        Ok(())
    }

    pub async fn unmute(&mut self) -> Result<()> {
        let level = self.volume.unmute();
        self.sink.set_volume(level).await?;
        self.emit_volume();
        Ok(())
    }

    pub async fn toggle_mute(&mut self) -> Result<()> {
        if self.volume.is_muted() {
            self.unmute().await
        } else {
            self.mute().await
        }
    }

    fn emit_volume(&mut self) {
        self.emit(SessionEvent::VolumeChanged {
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
        });
    }

    // Seeking

    /// Relative seek, clamped to the track bounds
    pub async fn seek_by(&mut self, delta_seconds: f64) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }
        let position = self.sink.current_time().await;
        let duration = self.sink.duration().await;
        let target = (position + delta_seconds).clamp(0.0, duration.max(0.0));
        self.sink.seek(target).await
    }

    pub async fn seek_forward(&mut self) -> Result<()> {
        let step = self.config.seek_step_seconds;
        self.seek_by(step).await
    }

    pub async fn seek_backward(&mut self) -> Result<()> {
        let step = self.config.seek_step_seconds;
        self.seek_by(-step).await
    }

    // Track list edits

    /// Replace the whole track list, dropping the selection
    pub async fn set_tracks(&mut self, tracks: Vec<SessionTrack>) -> Result<()> {
        if self.playing {
            self.sink.pause().await?;
        }
        self.tracks = tracks;
        self.current = None;
        self.playing = false;
        self.shuffle_queue.clear();
        self.generation = self.generation.wrapping_add(1);
        self.emit(SessionEvent::TracksChanged);
        self.emit(SessionEvent::StateChanged {
            state: PlaybackState::Idle,
        });
        Ok(())
    }

    /// Append a track, returning its index
    pub fn push_track(&mut self, track: SessionTrack) -> usize {
        self.tracks.push(track);
        self.shuffle_queue.clear();
        self.emit(SessionEvent::TracksChanged);
        self.tracks.len() - 1
    }

    /// Remove a track by index. Removing the current track pauses the
    /// sink and drops to idle; removing an earlier track shifts the
    /// selection down so it keeps pointing at the same song.
    pub async fn remove_track_at(&mut self, index: usize) -> Result<()> {
        if index >= self.tracks.len() {
            return Ok(());
        }

        match self.current {
            Some(c) if c == index => {
                if self.playing {
                    self.sink.pause().await?;
                }
                self.playing = false;
                self.current = None;
                self.emit(SessionEvent::StateChanged {
                    state: PlaybackState::Idle,
                });
            }
            Some(c) if c > index => {
                self.current = Some(c - 1);
            }
            _ => {}
        }

        self.tracks.remove(index);
        self.shuffle_queue.clear();
        self.emit(SessionEvent::TracksChanged);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackError;
    use async_trait::async_trait;
    use chord_core::TrackId;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct FakeSinkState {
        loaded_mime: Option<String>,
        playing: bool,
        position: f64,
        duration: f64,
        volume: f32,
        seeks: Vec<f64>,
        loads: usize,
        fail_play: bool,
    }

    /// Sink double: records calls, position and failure are scripted
    #[derive(Clone, Default)]
    struct FakeSink(Arc<Mutex<FakeSinkState>>);

    impl FakeSink {
        fn state(&self) -> std::sync::MutexGuard<'_, FakeSinkState> {
            self.0.lock().unwrap()
        }
    }

    #[async_trait]
    impl AudioSink for FakeSink {
        async fn load(&mut self, _payload: Arc<Vec<u8>>, mime_type: &str) -> Result<()> {
            let mut s = self.state();
            s.loaded_mime = Some(mime_type.to_string());
            s.position = 0.0;
            s.loads += 1;
            Ok(())
        }

        async fn play(&mut self) -> Result<()> {
            let mut s = self.state();
            if s.fail_play {
                return Err(PlaybackError::sink("decode failure"));
            }
            s.playing = true;
            Ok(())
        }

        async fn pause(&mut self) -> Result<()> {
            self.state().playing = false;
            Ok(())
        }

        async fn seek(&mut self, position_seconds: f64) -> Result<()> {
            let mut s = self.state();
            s.position = position_seconds;
            s.seeks.push(position_seconds);
            Ok(())
        }

        async fn set_volume(&mut self, volume: f32) -> Result<()> {
            self.state().volume = volume;
            Ok(())
        }

        async fn current_time(&self) -> f64 {
            self.state().position
        }

        async fn duration(&self) -> f64 {
            self.state().duration
        }

        fn supports_background_playback(&self) -> bool {
            true
        }
    }

    fn make_track(id: i64, title: &str) -> SessionTrack {
        SessionTrack {
            id: TrackId::new(id),
            title: title.to_string(),
            artist: "Unknown artist".to_string(),
            mime_type: "audio/mpeg".to_string(),
            duration_seconds: 120.0,
            payload: Arc::new(vec![0u8; 8]),
        }
    }

    async fn session_with(count: i64) -> (PlaybackSession, FakeSink) {
        let sink = FakeSink::default();
        let mut session = PlaybackSession::new(Box::new(sink.clone()), SessionConfig::default());
        let tracks = (0..count)
            .map(|i| make_track(i + 1, &format!("track {}", i + 1)))
            .collect();
        session.set_tracks(tracks).await.unwrap();
        session.drain_events();
        (session, sink)
    }

    #[tokio::test]
    async fn new_session_is_idle() {
        let sink = FakeSink::default();
        let session = PlaybackSession::new(Box::new(sink), SessionConfig::default());
        assert_eq!(session.state(), PlaybackState::Idle);
        assert!(session.current_index().is_none());
        assert_eq!(session.volume_level(), 0.7);
    }

    #[tokio::test]
    async fn select_loads_and_plays() {
        let (mut session, sink) = session_with(3).await;

        session.select(1).await.unwrap();

        assert_eq!(session.state(), PlaybackState::Playing);
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(sink.state().loaded_mime.as_deref(), Some("audio/mpeg"));
        assert!(sink.state().playing);

        let events = session.drain_events();
        assert!(events.contains(&SessionEvent::TrackChanged {
            index: 1,
            track_id: TrackId::new(2),
        }));
        assert!(events.contains(&SessionEvent::StateChanged {
            state: PlaybackState::Playing,
        }));
    }

    #[tokio::test]
    async fn select_out_of_range_is_a_no_op() {
        let (mut session, sink) = session_with(3).await;

        session.select(99).await.unwrap();

        assert_eq!(session.state(), PlaybackState::Idle);
        assert_eq!(sink.state().loads, 0);
        assert!(session.drain_events().is_empty());
    }

    #[tokio::test]
    async fn sink_rejection_keeps_selection() {
        let (mut session, sink) = session_with(3).await;
        sink.state().fail_play = true;

        let err = session.select(2).await.unwrap_err();
        assert!(matches!(err, PlaybackError::Sink(_)));

        // The track stays selected, just not audibly playing
        assert_eq!(session.current_index(), Some(2));
        assert_eq!(session.state(), PlaybackState::Paused);

        let events = session.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::Error { .. })));
    }

    #[tokio::test]
    async fn toggle_from_idle_selects_first_track() {
        let (mut session, _sink) = session_with(3).await;

        session.toggle_play_pause().await.unwrap();
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.state(), PlaybackState::Playing);
    }

    #[tokio::test]
    async fn toggle_from_idle_with_no_tracks_stays_idle() {
        let (mut session, sink) = session_with(0).await;

        session.toggle_play_pause().await.unwrap();
        assert_eq!(session.state(), PlaybackState::Idle);
        assert_eq!(sink.state().loads, 0);
    }

    #[tokio::test]
    async fn toggle_pauses_and_resumes() {
        let (mut session, sink) = session_with(3).await;
        session.select(0).await.unwrap();

        session.toggle_play_pause().await.unwrap();
        assert_eq!(session.state(), PlaybackState::Paused);
        assert!(!sink.state().playing);

        session.toggle_play_pause().await.unwrap();
        assert_eq!(session.state(), PlaybackState::Playing);
        assert!(sink.state().playing);
        // Resuming does not reload the payload
        assert_eq!(sink.state().loads, 1);
    }

    #[tokio::test]
    async fn stop_pauses_the_sink_and_goes_idle() {
        let (mut session, sink) = session_with(3).await;
        session.select(1).await.unwrap();

        session.stop().await.unwrap();

        assert_eq!(session.state(), PlaybackState::Idle);
        assert!(session.current_index().is_none());
        assert!(!sink.state().playing);
        // The track list survives
        assert_eq!(session.tracks().len(), 3);
    }

    #[tokio::test]
    async fn next_is_cyclic_without_shuffle() {
        let (mut session, _sink) = session_with(3).await;
        session.select(0).await.unwrap();

        let mut visited = vec![0];
        for _ in 0..3 {
            session.advance(Direction::Next).await.unwrap();
            visited.push(session.current_index().unwrap());
        }

        // Three advances over three tracks come back to the start
        assert_eq!(visited, vec![0, 1, 2, 0]);
    }

    #[tokio::test]
    async fn previous_wraps_to_the_last_track() {
        let (mut session, _sink) = session_with(3).await;
        session.select(0).await.unwrap();

        session.advance(Direction::Previous).await.unwrap();
        assert_eq!(session.current_index(), Some(2));
    }

    #[tokio::test]
    async fn previous_restarts_after_the_threshold() {
        let (mut session, sink) = session_with(3).await;
        session.select(1).await.unwrap();
        sink.state().position = 5.0;

        session.advance(Direction::Previous).await.unwrap();

        // Same track, seeked back to the start
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(sink.state().seeks, vec![0.0]);
        assert_eq!(sink.state().loads, 1);
    }

    #[tokio::test]
    async fn previous_changes_track_under_the_threshold() {
        let (mut session, sink) = session_with(3).await;
        session.select(1).await.unwrap();
        sink.state().position = 2.0;

        session.advance(Direction::Previous).await.unwrap();
        assert_eq!(session.current_index(), Some(0));
    }

    #[tokio::test]
    async fn shuffled_cycle_visits_every_other_track_once() {
        let (mut session, _sink) = session_with(8).await;
        session.set_shuffle(true);
        session.select(3).await.unwrap();

        let mut visited = Vec::new();
        for _ in 0..7 {
            session.advance(Direction::Next).await.unwrap();
            visited.push(session.current_index().unwrap());
        }

        let unique: std::collections::HashSet<usize> = visited.iter().copied().collect();
        assert_eq!(unique.len(), 7);
        assert!(!unique.contains(&3));
    }

    #[tokio::test]
    async fn previous_with_an_empty_shuffle_queue_steps_back() {
        let (mut session, sink) = session_with(3).await;
        session.select(1).await.unwrap();
        // Enabling shuffle discards the pending pass; nothing is queued yet
        session.set_shuffle(true);
        sink.state().position = 1.0;

        session.advance(Direction::Previous).await.unwrap();
        assert_eq!(session.current_index(), Some(0));
    }

    #[tokio::test]
    async fn disabling_shuffle_discards_the_pending_pass() {
        let (mut session, _sink) = session_with(5).await;
        session.set_shuffle(true);
        session.select(0).await.unwrap();

        session.set_shuffle(false);
        session.advance(Direction::Next).await.unwrap();
        assert_eq!(session.current_index(), Some(1));
    }

    #[tokio::test]
    async fn track_end_with_repeat_one_replays_the_same_track() {
        let (mut session, sink) = session_with(3).await;
        session.select(1).await.unwrap();
        session.set_repeat(RepeatMode::One);

        session.on_track_ended().await.unwrap();

        assert_eq!(session.current_index(), Some(1));
        assert_eq!(sink.state().seeks, vec![0.0]);
        assert_eq!(sink.state().loads, 1);
        assert!(sink.state().playing);
    }

    #[tokio::test]
    async fn track_end_walk_with_repeat_off_stops_at_the_last_track() {
        let (mut session, _sink) = session_with(3).await;
        session.select(0).await.unwrap();

        session.on_track_ended().await.unwrap();
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.state(), PlaybackState::Playing);

        session.on_track_ended().await.unwrap();
        assert_eq!(session.current_index(), Some(2));

        session.on_track_ended().await.unwrap();
        // End of the list: paused, still on the last track
        assert_eq!(session.current_index(), Some(2));
        assert_eq!(session.state(), PlaybackState::Paused);
    }

    #[tokio::test]
    async fn track_end_with_repeat_all_wraps_around() {
        let (mut session, _sink) = session_with(3).await;
        session.select(2).await.unwrap();
        session.set_repeat(RepeatMode::All);

        session.on_track_ended().await.unwrap();
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.state(), PlaybackState::Playing);
    }

    #[tokio::test]
    async fn track_end_while_idle_does_nothing() {
        let (mut session, _sink) = session_with(3).await;
        session.on_track_ended().await.unwrap();
        assert_eq!(session.state(), PlaybackState::Idle);
    }

    #[tokio::test]
    async fn time_updates_emit_position_events_while_a_track_is_loaded() {
        let (mut session, sink) = session_with(2).await;

        // Nothing loaded: the feed is dropped
        session.on_time_update(3.0).await;
        assert!(session.drain_events().is_empty());

        session.select(0).await.unwrap();
        sink.state().duration = 60.0;
        session.drain_events();

        session.on_time_update(3.0).await;
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::PositionChanged {
                elapsed_seconds: 3.0,
                total_seconds: 60.0,
            }]
        );
    }

    #[tokio::test]
    async fn cycle_repeat_walks_all_modes() {
        let (mut session, _sink) = session_with(1).await;
        assert_eq!(session.cycle_repeat(), RepeatMode::All);
        assert_eq!(session.cycle_repeat(), RepeatMode::One);
        assert_eq!(session.cycle_repeat(), RepeatMode::Off);
    }

    #[tokio::test]
    async fn volume_is_forwarded_and_clamped() {
        let (mut session, sink) = session_with(1).await;

        session.set_volume(1.5).await.unwrap();
        assert_eq!(session.volume_level(), 1.0);
        assert_eq!(sink.state().volume, 1.0);
    }

    #[tokio::test]
    async fn mute_round_trip_restores_the_volume() {
        let (mut session, sink) = session_with(1).await;
        session.set_volume(0.4).await.unwrap();

        session.toggle_mute().await.unwrap();
        assert!(session.is_muted());
        assert_eq!(sink.state().volume, 0.0);

        session.toggle_mute().await.unwrap();
        assert!(!session.is_muted());
        assert_eq!(session.volume_level(), 0.4);
        assert_eq!(sink.state().volume, 0.4);
    }

    #[tokio::test]
    async fn seek_by_clamps_to_track_bounds() {
        let (mut session, sink) = session_with(1).await;
        session.select(0).await.unwrap();
        {
            let mut s = sink.state();
            s.position = 5.0;
            s.duration = 60.0;
        }

        session.seek_backward().await.unwrap();
        assert_eq!(sink.state().position, 0.0);

        sink.state().position = 55.0;
        session.seek_forward().await.unwrap();
        assert_eq!(sink.state().position, 60.0);
    }

    #[tokio::test]
    async fn seek_while_idle_is_a_no_op() {
        let (mut session, sink) = session_with(1).await;
        session.seek_forward().await.unwrap();
        assert!(sink.state().seeks.is_empty());
    }

    #[tokio::test]
    async fn removing_the_current_track_goes_idle() {
        let (mut session, sink) = session_with(3).await;
        session.select(1).await.unwrap();

        session.remove_track_at(1).await.unwrap();

        assert_eq!(session.state(), PlaybackState::Idle);
        assert!(session.current_index().is_none());
        assert_eq!(session.tracks().len(), 2);
        assert!(!sink.state().playing);
    }

    #[tokio::test]
    async fn removing_an_earlier_track_shifts_the_selection() {
        let (mut session, _sink) = session_with(3).await;
        session.select(2).await.unwrap();

        session.remove_track_at(0).await.unwrap();

        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.current_track().unwrap().id, TrackId::new(3));
        assert_eq!(session.state(), PlaybackState::Playing);
    }

    #[tokio::test]
    async fn removing_a_later_track_keeps_the_selection() {
        let (mut session, _sink) = session_with(3).await;
        session.select(0).await.unwrap();

        session.remove_track_at(2).await.unwrap();

        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.state(), PlaybackState::Playing);
    }

    #[tokio::test]
    async fn set_tracks_resets_to_idle() {
        let (mut session, sink) = session_with(3).await;
        session.select(0).await.unwrap();

        session
            .set_tracks(vec![make_track(10, "fresh")])
            .await
            .unwrap();

        assert_eq!(session.state(), PlaybackState::Idle);
        assert!(session.current_index().is_none());
        assert_eq!(session.tracks().len(), 1);
        assert!(!sink.state().playing);
    }

    #[tokio::test]
    async fn push_track_appends_without_touching_playback() {
        let (mut session, _sink) = session_with(2).await;
        session.select(1).await.unwrap();

        let index = session.push_track(make_track(10, "new"));
        assert_eq!(index, 2);
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.state(), PlaybackState::Playing);
    }
}
