/// Playlist types
use super::ids::{PlaylistId, TrackId};
use serde::{Deserialize, Serialize};

/// A named, ordered list of track references.
///
/// The referenced tracks may no longer exist in the track store; readers
/// skip dangling references rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub track_ids: Vec<TrackId>,
}

impl Playlist {
    /// Create a new empty playlist with a freshly generated id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            track_ids: Vec::new(),
        }
    }

    /// The implicit playlist holding every stored track
    pub fn default_playlist() -> Self {
        Self {
            id: PlaylistId::default_playlist(),
            name: "All tracks".to_string(),
            track_ids: Vec::new(),
        }
    }

    /// Whether this is the implicit all-tracks playlist
    pub fn is_default(&self) -> bool {
        self.id.is_default()
    }

    pub fn contains(&self, track_id: TrackId) -> bool {
        self.track_ids.contains(&track_id)
    }

    /// Append a track reference if not already present
    pub fn push(&mut self, track_id: TrackId) -> bool {
        if self.contains(track_id) {
            return false;
        }
        self.track_ids.push(track_id);
        true
    }

    /// Remove every reference to a track, keeping the rest in order
    pub fn remove(&mut self, track_id: TrackId) -> bool {
        let before = self.track_ids.len();
        self.track_ids.retain(|id| *id != track_id);
        self.track_ids.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_playlist_has_generated_id_and_no_tracks() {
        let playlist = Playlist::new("Morning mix");
        assert_eq!(playlist.name, "Morning mix");
        assert!(playlist.track_ids.is_empty());
        assert!(!playlist.is_default());
    }

    #[test]
    fn default_playlist_uses_sentinel_id() {
        let playlist = Playlist::default_playlist();
        assert!(playlist.is_default());
        assert_eq!(playlist.name, "All tracks");
    }

    #[test]
    fn push_is_idempotent() {
        let mut playlist = Playlist::new("p");
        assert!(playlist.push(TrackId::new(1)));
        assert!(!playlist.push(TrackId::new(1)));
        assert_eq!(playlist.track_ids.len(), 1);
    }

    #[test]
    fn remove_preserves_order_of_remaining_tracks() {
        let mut playlist = Playlist::new("p");
        playlist.push(TrackId::new(1));
        playlist.push(TrackId::new(2));
        playlist.push(TrackId::new(3));
        assert!(playlist.remove(TrackId::new(2)));
        assert_eq!(playlist.track_ids, vec![TrackId::new(1), TrackId::new(3)]);
        assert!(!playlist.remove(TrackId::new(2)));
    }
}
