//! World state and core simulation types
//!
//! A `WorldState` is a complete snapshot of one game session. The step
//! function never mutates one in place; it returns the next snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::{Biome, Difficulty, HazardKind};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Created, waiting for the first input
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Playing, but frozen
    Paused,
    /// Run ended
    GameOver,
}

/// Cosmetic skin chosen outside the core. Opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SkinId(pub String);

impl SkinId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The player. x is pinned to the lane, only y moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (px per reference frame, positive is down)
    pub velocity: f32,
    /// Visual tilt in degrees, derived from velocity
    pub rotation: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GAME_HEIGHT / 2.0),
            velocity: 0.0,
            rotation: 0.0,
        }
    }
}

/// Buff types (also the power-up types that grant them)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffKind {
    /// Blocks one fatal hit
    Shield,
    /// Halves simulation speed
    TimeSlow,
    /// Doubles points per obstacle
    Multiplier,
}

impl BuffKind {
    pub const ALL: [BuffKind; 3] = [BuffKind::Shield, BuffKind::TimeSlow, BuffKind::Multiplier];
}

/// An applied buff, live until `expires_at_ms` (host wall clock)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveBuff {
    pub kind: BuffKind,
    pub expires_at_ms: f64,
}

/// A pair of columns with a gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Vertical center of the gap band
    pub gap_y: f32,
    pub gap_height: f32,
    pub width: f32,
    /// Trailing edge has crossed the player's lane (scored)
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_y - self.gap_height / 2.0
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + self.gap_height / 2.0
    }
}

/// A collectible that grants a buff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: BuffKind,
    /// Center
    pub x: f32,
    pub y: f32,
    pub collected: bool,
}

/// A biome hazard (axis-aligned box, top-left anchored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub kind: HazardKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub active: bool,
    /// Own velocity on top of the scroll (px per reference frame)
    pub vel: Vec2,
}

impl Hazard {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// How obstacles should be drawn in invisible mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleVisibility {
    /// Normal rendering
    Visible,
    /// Invisible mode, shown with a warning glow
    Glowing,
    /// Invisible mode, not drawn at all
    Hidden,
}

/// Length of one invisible-mode cycle (ms of game time)
pub const INVISIBLE_CYCLE_MS: f64 = 10_000.0;
/// Leading part of the cycle during which obstacles glow
pub const INVISIBLE_GLOW_MS: f64 = 3_000.0;

/// Complete session snapshot (serializable, compared by value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    /// Always `Biome::for_score(score)`
    pub biome: Biome,
    pub difficulty: Difficulty,
    pub skin: SkinId,
    pub player: Player,
    /// At most one entry per kind
    pub active_buffs: Vec<ActiveBuff>,
    /// Insertion (spawn) order
    pub obstacles: Vec<Obstacle>,
    pub power_ups: Vec<PowerUp>,
    pub hazards: Vec<Hazard>,
    /// Game time, advances only while playing and unpaused
    pub elapsed_ms: f64,
    /// Next entity ID
    next_id: u32,
}

impl WorldState {
    /// Fresh idle session
    pub fn new(difficulty: Difficulty, skin: SkinId) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            high_score: 0,
            biome: Biome::for_score(0),
            difficulty,
            skin,
            player: Player::default(),
            active_buffs: Vec::new(),
            obstacles: Vec::new(),
            power_ups: Vec::new(),
            hazards: Vec::new(),
            elapsed_ms: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// In a run (including while paused)
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Obstacle rendering mode, cycling on game time so pause freezes it
    pub fn obstacle_visibility(&self) -> ObstacleVisibility {
        if !self.difficulty.config().invisible_mode {
            return ObstacleVisibility::Visible;
        }
        if self.elapsed_ms % INVISIBLE_CYCLE_MS < INVISIBLE_GLOW_MS {
            ObstacleVisibility::Glowing
        } else {
            ObstacleVisibility::Hidden
        }
    }

    /// Whether the host should shake the playfield this frame
    pub fn screen_shake_active(&self) -> bool {
        self.difficulty.config().screen_shake && self.phase == GamePhase::Playing
    }
}
