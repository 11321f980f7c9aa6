//! Game phase transitions outside the per-frame loop
//!
//! Idle -> Playing (start) <-> Paused (toggle_pause / focus_lost)
//! Playing -> GameOver (step only) -> Playing (start / restart)

use super::state::{GamePhase, SkinId, WorldState};
use crate::consts::JUMP_FORCE;
use crate::tuning::Difficulty;

/// Fresh idle session
pub fn new_game(difficulty: Difficulty, skin: SkinId) -> WorldState {
    WorldState::new(difficulty, skin)
}

/// Back to idle. Difficulty, skin and high score survive.
pub fn reset(state: &WorldState) -> WorldState {
    let mut fresh = WorldState::new(state.difficulty, state.skin.clone());
    fresh.high_score = state.high_score;
    fresh
}

/// Begin a run from Idle or GameOver. Ignored while a run is in progress.
pub fn start(state: &WorldState) -> WorldState {
    match state.phase {
        GamePhase::Idle | GamePhase::GameOver => restart(state),
        GamePhase::Playing | GamePhase::Paused => state.clone(),
    }
}

/// Fresh run from any phase, never paused
pub fn restart(state: &WorldState) -> WorldState {
    let mut fresh = reset(state);
    fresh.phase = GamePhase::Playing;
    log::info!(
        "Run started ({}, skin {:?})",
        fresh.difficulty.as_str(),
        fresh.skin.as_str()
    );
    fresh
}

/// Playing <-> Paused. Other phases are left alone.
pub fn toggle_pause(state: &WorldState) -> WorldState {
    let mut next = state.clone();
    next.phase = match state.phase {
        GamePhase::Playing => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Playing,
        other => other,
    };
    next
}

/// Window lost focus: pause an unpaused run so the player is never punished
/// for switching away.
pub fn focus_lost(state: &WorldState) -> WorldState {
    if state.phase != GamePhase::Playing {
        return state.clone();
    }
    log::info!("Focus lost, pausing");
    toggle_pause(state)
}

/// Upward impulse. Only accepted while playing.
pub fn jump(state: &WorldState) -> WorldState {
    let mut next = state.clone();
    if state.phase == GamePhase::Playing {
        next.player.velocity = JUMP_FORCE;
    }
    next
}
