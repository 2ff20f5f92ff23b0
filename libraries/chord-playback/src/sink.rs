//! Audio sink abstraction
//!
//! The session never touches an audio device itself; the embedding
//! application injects whatever actually makes sound (an HTML audio
//! element, a native output stream, a test double).

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Audio output driven by the playback session.
///
/// Position and duration are pulled, never pushed: the session asks when
/// it needs them and is never blocked on a position feed.
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Load an encoded payload, replacing whatever was loaded before
    async fn load(&mut self, payload: Arc<Vec<u8>>, mime_type: &str) -> Result<()>;

    /// Start or resume playback of the loaded track
    async fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    async fn pause(&mut self) -> Result<()>;

    /// Seek to an absolute position in seconds
    async fn seek(&mut self, position_seconds: f64) -> Result<()>;

    /// Set output volume, `0.0..=1.0`
    async fn set_volume(&mut self, volume: f32) -> Result<()>;

    /// Elapsed seconds of the loaded track, `0.0` when nothing is loaded
    async fn current_time(&self) -> f64;

    /// Duration in seconds of the loaded track, `0.0` when unknown
    async fn duration(&self) -> f64;

    /// Whether playback survives the embedding UI going to the background
    fn supports_background_playback(&self) -> bool;
}
