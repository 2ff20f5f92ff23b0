/// Playback-specific errors
use thiserror::Error;

/// Result type alias using `PlaybackError`
pub type Result<T> = std::result::Result<T, PlaybackError>;

/// Playback error types
///
/// Sink failures are transient: the session keeps its selection and the
/// caller decides whether to retry or surface the message.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The sink refused to load or play a track
    #[error("Sink error: {0}")]
    Sink(String),

    /// An operation that needs a loaded track ran without one
    #[error("No track loaded")]
    NoTrackLoaded,
}

impl PlaybackError {
    /// Create a sink error
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}

impl From<PlaybackError> for chord_core::ChordError {
    fn from(err: PlaybackError) -> Self {
        chord_core::ChordError::playback(err.to_string())
    }
}
