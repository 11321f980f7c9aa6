//! Simple bot for headless runs and soak tests
//!
//! Steers toward the centre of the next gap: flap whenever the bird has sunk
//! below it and is not already rising.

use crate::consts::*;
use crate::sim::collision::player_hitbox;
use crate::sim::{GamePhase, WorldState};

/// How far below the gap centre the bot lets the bird drop before flapping
const SLACK: f32 = 20.0;

/// Vertical target for the bird right now
pub fn target_y(state: &WorldState) -> f32 {
    let hitbox = player_hitbox(state.player.pos);
    state
        .obstacles
        .iter()
        .filter(|o| o.right() > hitbox.min.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|o| o.gap_y)
        .unwrap_or(GAME_HEIGHT / 2.0)
}

/// Whether the bot would flap this frame
pub fn wants_jump(state: &WorldState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    state.player.pos.y > target_y(state) + SLACK && state.player.velocity >= 0.0
}
