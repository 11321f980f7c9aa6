//! Player settings and preferences
//!
//! Stored as JSON by the host, separately from anything the sim knows about.

use serde::{Deserialize, Serialize};

use crate::sim::WorldState;
use crate::tuning::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Visual Effects ===
    /// Screen shake on difficulties that use it
    pub screen_shake: bool,

    // === Accessibility ===
    /// Reduced motion (no shake)
    pub reduced_motion: bool,

    // === Last session ===
    pub difficulty: Difficulty,
    pub skin: String,
    /// Name submitted to the leaderboard
    pub display_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            screen_shake: true,

            reduced_motion: false,

            difficulty: Difficulty::Normal,
            skin: "cute".to_string(),
            display_name: String::new(),
        }
    }
}

impl Settings {
    /// Whether the host should shake the playfield right now
    pub fn effective_screen_shake(&self, state: &WorldState) -> bool {
        self.screen_shake && !self.reduced_motion && state.screen_shake_active()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse stored settings, falling back to defaults on bad data
    pub fn load(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {e}");
                Self::default()
            }
        }
    }
}
