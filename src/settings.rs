//! Player preferences
//!
//! Persisted separately from the high score in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::highscores::StoreError;
#[cfg(target_arch = "wasm32")]
use crate::highscores::local_storage;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// All sound cues silenced
    pub muted: bool,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Visual Effects ===
    /// Camera shake on misses and bombs
    pub screen_shake: bool,
    /// Red flash on bombs
    pub damage_flash: bool,

    // === Accessibility ===
    /// Reduced motion (no shake, no flashes)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            sfx_volume: 0.6,

            screen_shake: true,
            damage_flash: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Flip mute, returning the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective damage flash (respects reduced_motion)
    pub fn effective_damage_flash(&self) -> bool {
        self.damage_flash && !self.reduced_motion
    }

    /// Shake intensity after applying preferences
    pub fn shake_intensity(&self, raw: f32) -> f32 {
        if self.effective_screen_shake() { raw } else { 0.0 }
    }

    /// Flash opacity after applying preferences
    pub fn flash_alpha(&self, raw: f32) -> f32 {
        if self.effective_damage_flash() { raw } else { 0.0 }
    }

    /// Volume to play cues at (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "appleSettings";

    /// Decode a stored settings blob; `None` if it is unreadable
    pub fn from_stored(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Discarding stored settings: {}", e);
                None
            }
        }
    }

    /// Encode for storage
    pub fn to_stored(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(|e| StoreError::WriteFailed(e.to_string()))
    }

    /// Load settings from LocalStorage, defaults on any failure (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = local_storage().and_then(|storage| {
            storage
                .get_item(Self::STORAGE_KEY)
                .map_err(|_| StoreError::Unavailable)
        });
        match stored {
            Ok(Some(raw)) => Self::from_stored(&raw).unwrap_or_default(),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Best-effort save to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let written = self.to_stored().and_then(|json| {
            local_storage()?
                .set_item(Self::STORAGE_KEY, &json)
                .map_err(|e| StoreError::WriteFailed(format!("{:?}", e)))
        });
        if let Err(e) = written {
            log::warn!("Settings not saved: {}", e);
        }
    }

    /// Native builds keep settings in memory only
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {}
}
