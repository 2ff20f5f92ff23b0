//! Chord Core
//!
//! Domain types, traits, and error handling for the Chord audio player.
//!
//! This crate provides the foundational building blocks shared by the
//! storage, playback, and session crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `NewTrack`, `Playlist`, id newtypes
//! - **Collaborator Traits**: `DurationProbe`
//! - **Error Handling**: Unified `ChordError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chord_core::types::{NewTrack, Playlist};
//!
//! // An imported file, before the store assigns an id
//! let track = NewTrack::new("My Song", "audio/mpeg", vec![0u8; 16]);
//! assert_eq!(track.artist, "Unknown artist");
//!
//! // A user playlist
//! let playlist = Playlist::new("Morning mix");
//! assert!(!playlist.is_default());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ChordError, Result};
pub use traits::DurationProbe;
pub use types::{NewTrack, Playlist, PlaylistId, Track, TrackId};
