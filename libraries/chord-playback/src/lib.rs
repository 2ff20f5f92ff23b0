//! Chord Playback
//!
//! In-memory playback session state machine for the Chord audio player.
//!
//! The session tracks the current selection, play/pause state, shuffle
//! queue, repeat mode, and volume. It drives an [`AudioSink`] (the actual
//! audio output, injected by the embedding application) and emits
//! [`SessionEvent`]s for the presentation layer to drain.
//!
//! No audio is decoded here: payloads pass through to the sink opaquely.

#![forbid(unsafe_code)]

mod error;
mod events;
mod session;
mod shuffle;
mod sink;
mod types;
mod volume;

pub use error::PlaybackError;
pub use events::SessionEvent;
pub use session::PlaybackSession;
pub use sink::AudioSink;
pub use types::{Direction, PlaybackState, RepeatMode, SessionConfig, SessionTrack};
pub use volume::VolumeControl;
