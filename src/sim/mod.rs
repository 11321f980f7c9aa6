//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure:
//! - Snapshot in, snapshot out (no in-place mutation of the caller's state)
//! - Injected RNG only
//! - Caller-supplied time only
//! - No rendering, audio or storage dependencies

pub mod buffs;
pub mod collision;
pub mod events;
pub mod lifecycle;
pub mod spawn;
pub mod state;
pub mod step;

pub use collision::{hazard_collision, obstacle_collision, power_up_pickup};
pub use events::GameEvent;
pub use state::{
    ActiveBuff, BuffKind, GamePhase, Hazard, Obstacle, ObstacleVisibility, Player, PowerUp,
    SkinId, WorldState,
};
pub use step::step;
