//! Skyflap - flap through the gaps, survive the biomes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, buffs, game phases)
//! - `tuning`: Data-driven difficulty and biome balance
//! - `session`: Host-side frame loop wiring the sim to its collaborators
//! - `audio`: Sound cue mixing over an injected backend
//! - `highscores`: Local leaderboard
//! - `settings`: Player preferences

pub mod audio;
pub mod autopilot;
pub mod highscores;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use session::Session;
pub use settings::Settings;
pub use tuning::{Biome, Difficulty, HazardKind};

/// Game configuration constants
pub mod consts {
    /// Reference frame length the per-frame motion constants are tuned for (ms)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Fixed host timestep (ms)
    pub const SIM_DT_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the host will account for (tab switches, debugger pauses)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Playfield dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Player lane and size
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 48.0;
    /// Hit box is this fraction of the visual half-size
    pub const HITBOX_SCALE: f32 = 0.7;

    /// Per-frame motion
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_FORCE: f32 = -8.0;
    pub const MAX_VELOCITY: f32 = 12.0;
    /// Visual tilt (degrees per unit velocity, and its clamp)
    pub const ROTATION_PER_VELOCITY: f32 = 3.0;
    pub const MAX_ROTATION: f32 = 30.0;

    /// Obstacles
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    /// Distance kept between a gap and the top/bottom edge
    pub const GAP_MARGIN: f32 = 50.0;

    /// Power-ups
    pub const POWER_UP_SIZE: f32 = 32.0;
    pub const POWER_UP_SPAWN_CHANCE: f64 = 0.15;
    pub const BUFF_DURATION_MS: f64 = 5000.0;

    /// Hazards
    pub const HAZARD_SPAWN_CHANCE: f64 = 0.3;
    /// Hazards enter this far past the right edge
    pub const HAZARD_SPAWN_OFFSET: f32 = 50.0;

    /// Vertical margin for power-up and hazard placement
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Garbage collection distances past the screen edges
    pub const OBSTACLE_CULL_X: f32 = -50.0;
    pub const POWER_UP_CULL_X: f32 = -50.0;
    pub const HAZARD_CULL_MARGIN: f32 = 100.0;

    /// Coins awarded per point at game over
    pub const COINS_PER_POINT: u64 = 20;
}
