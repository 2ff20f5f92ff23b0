//! Collaborator traits implemented outside the core crate

/// Best-effort duration extraction from an in-memory audio payload.
///
/// Implementations decode container metadata only, never full audio.
/// A payload that cannot be parsed yields `0.0`; callers treat that as
/// "duration unknown" rather than an error.
pub trait DurationProbe: Send + Sync {
    /// Duration of the payload in seconds, or `0.0` if it cannot be
    /// determined.
    fn probe(&self, payload: &[u8], mime_type: &str) -> f64;
}
