//! Volume control with mute memory
//!
//! Volume is a linear `0.0..=1.0` factor, applied by the sink. Muting
//! caches the last audible level so unmute can restore it.

/// Volume controller
#[derive(Debug, Clone)]
pub struct VolumeControl {
    /// Current level, `0.0..=1.0`; `0.0` while muted
    level: f32,

    /// Level to restore on unmute
    previous: Option<f32>,

    /// Restored by unmute when no level was cached
    unmute_default: f32,
}

impl VolumeControl {
    /// Create a volume controller at the given level
    pub fn new(level: f32, unmute_default: f32) -> Self {
        Self {
            level: level.clamp(0.0, 1.0),
            previous: None,
            unmute_default: unmute_default.clamp(0.0, 1.0),
        }
    }

    /// Set the level, clamped to `0.0..=1.0`.
    ///
    /// Setting an audible level drops the mute cache: the user has chosen
    /// a volume, so unmute no longer has anything to restore.
    pub fn set(&mut self, level: f32) -> f32 {
        self.level = level.clamp(0.0, 1.0);
        if self.level > 0.0 {
            self.previous = None;
        }
        self.level
    }

    /// Current level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Whether the output is silent
    pub fn is_muted(&self) -> bool {
        self.level == 0.0
    }

    /// Silence the output, remembering an audible level for unmute
    pub fn mute(&mut self) {
        if self.level > 0.0 {
            self.previous = Some(self.level);
        }
        self.level = 0.0;
    }

    /// Restore the cached level, or the default when none was cached
    pub fn unmute(&mut self) -> f32 {
        self.level = self.previous.take().unwrap_or(self.unmute_default);
        self.level
    }

    /// Mute when audible, unmute when silent
    pub fn toggle_mute(&mut self) -> f32 {
        if self.is_muted() {
            self.unmute()
        } else {
            self.mute();
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn set_clamps_to_unit_range() {
        let mut vol = VolumeControl::new(0.7, 0.7);
        assert_eq!(vol.set(1.5), 1.0);
        assert_eq!(vol.set(-0.2), 0.0);
    }

    #[test]
    fn mute_caches_and_unmute_restores() {
        let mut vol = VolumeControl::new(0.4, 0.7);
        vol.mute();
        assert!(vol.is_muted());
        assert_eq!(vol.unmute(), 0.4);
        assert!(!vol.is_muted());
    }

    #[test]
    fn unmute_without_cache_uses_default() {
        let mut vol = VolumeControl::new(0.0, 0.7);
        assert!(vol.is_muted());
        assert_eq!(vol.unmute(), 0.7);
    }

    #[test]
    fn muting_silence_does_not_clobber_nothing() {
        let mut vol = VolumeControl::new(0.5, 0.7);
        vol.mute();
        // A second mute while already silent must not erase the cache
        vol.mute();
        assert_eq!(vol.unmute(), 0.5);
    }

    #[test]
    fn explicit_volume_change_drops_mute_cache() {
        let mut vol = VolumeControl::new(0.5, 0.7);
        vol.mute();
        vol.set(0.9);
        vol.mute();
        assert_eq!(vol.unmute(), 0.9);
    }

    #[test]
    fn toggle_mute_round_trips() {
        let mut vol = VolumeControl::new(0.3, 0.7);
        assert_eq!(vol.toggle_mute(), 0.0);
        assert_eq!(vol.toggle_mute(), 0.3);
    }

    proptest! {
        #[test]
        fn mute_then_unmute_restores_any_audible_level(level in 0.01f32..=1.0) {
            let mut vol = VolumeControl::new(0.7, 0.7);
            let set = vol.set(level);
            vol.mute();
            prop_assert!(vol.is_muted());
            prop_assert_eq!(vol.unmute(), set);
        }

        #[test]
        fn level_stays_in_unit_range(level in -10.0f32..10.0) {
            let mut vol = VolumeControl::new(0.7, 0.7);
            let set = vol.set(level);
            prop_assert!((0.0..=1.0).contains(&set));
        }
    }
}
