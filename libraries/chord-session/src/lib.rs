//! Chord Session
//!
//! The player facade: one [`Session`] owns the database pool, the playback
//! state machine, the audio sink, and the duration probe. The embedding
//! application calls its operations (import, select, playlist edits) and
//! renders from [`PlayerView`] snapshots plus drained events.
//!
//! # Example
//!
//! ```rust,ignore
//! let pool = chord_storage::create_pool("sqlite://chord.db").await?;
//! chord_storage::run_migrations(&pool).await?;
//!
//! let mut session = Session::new(pool, sink, Box::new(SymphoniaProbe), SessionConfig::default());
//! session.load().await?;
//! session.import_track(bytes, "audio/mpeg", "song.mp3").await?;
//! ```

#![forbid(unsafe_code)]

mod probe;
mod session;
mod view;

pub use probe::SymphoniaProbe;
pub use session::Session;
pub use view::{CurrentTrackView, PlayerView, PlaylistView, TrackView};
