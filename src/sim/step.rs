//! Simulation step
//!
//! `step` consumes one snapshot and returns the next. The order of the
//! phases below is fixed: motion, boundary, scroll, spawn, buff expiry,
//! obstacle then hazard collisions, pickups, biome, game time.

use rand::Rng;

use super::buffs;
use super::collision::{hazard_collision, obstacle_collision, power_up_pickup};
use super::spawn::{spawn_hazard, spawn_obstacle, spawn_power_up};
use super::state::{GamePhase, WorldState};
use crate::consts::*;
use crate::tuning::Biome;

/// Advance the world by `delta_ms` of game time.
///
/// `now_ms` is the host's wall clock, used only for buff expiry. Outside of
/// `GamePhase::Playing` this returns an identical snapshot.
pub fn step<R: Rng + ?Sized>(
    state: &WorldState,
    delta_ms: f32,
    now_ms: f64,
    rng: &mut R,
) -> WorldState {
    if state.phase != GamePhase::Playing {
        return state.clone();
    }

    let delta_ms = if delta_ms.is_finite() {
        delta_ms.max(0.0)
    } else {
        0.0
    };
    let frames = delta_ms / FRAME_MS;
    let difficulty = state.difficulty.config();
    let biome = state.biome.config();
    let time_scale = buffs::time_scale(&state.active_buffs);

    let mut next = state.clone();

    // --- PLAYER MOTION ---
    let gravity = GRAVITY * biome.gravity;
    let mut velocity = (state.player.velocity + gravity * time_scale * frames)
        .clamp(-MAX_VELOCITY, MAX_VELOCITY);
    let mut y = state.player.pos.y + velocity * time_scale * frames;

    // --- PLAYFIELD BOUNDARY ---
    let (top, bottom) = play_bounds();
    if y < top || y > bottom {
        if buffs::consume_shield(&mut next.active_buffs) {
            log::debug!("Shield absorbed boundary hit at y={y:.1}");
            y = y.clamp(top, bottom);
            velocity = 0.0;
        } else {
            return game_over(state, state.score);
        }
    }

    next.player.pos.x = PLAYER_X;
    next.player.pos.y = y;
    next.player.velocity = velocity;
    next.player.rotation = (velocity * ROTATION_PER_VELOCITY).clamp(-MAX_ROTATION, MAX_ROTATION);

    // --- SCROLL & CULL ---
    let scroll = difficulty.speed * time_scale * frames;

    for obstacle in &mut next.obstacles {
        obstacle.x -= scroll;
    }
    next.obstacles.retain(|o| o.right() > OBSTACLE_CULL_X);

    for power_up in &mut next.power_ups {
        power_up.x -= scroll;
    }
    next.power_ups.retain(|p| !p.collected && p.x > POWER_UP_CULL_X);

    for hazard in &mut next.hazards {
        hazard.x += hazard.vel.x * time_scale * frames - scroll;
        hazard.y += hazard.vel.y * time_scale * frames;

        if hazard.kind.oscillates() {
            if hazard.y < 0.0 {
                hazard.y = 0.0;
                hazard.vel.y = hazard.vel.y.abs();
            } else if hazard.bottom() > GAME_HEIGHT {
                hazard.y = GAME_HEIGHT - hazard.height;
                hazard.vel.y = -hazard.vel.y.abs();
            }
        }
    }
    next.hazards.retain(|h| {
        h.right() > -HAZARD_CULL_MARGIN && h.x < GAME_WIDTH + HAZARD_CULL_MARGIN
    });

    // --- SPAWNING ---
    let should_spawn = next
        .obstacles
        .last()
        .is_none_or(|o| o.x < GAME_WIDTH - difficulty.obstacle_spacing);

    if should_spawn {
        let obstacle = spawn_obstacle(&mut next, rng);
        let center_x = obstacle.x + obstacle.width / 2.0;
        log::debug!("Spawned obstacle {} gap_y={:.1}", obstacle.id, obstacle.gap_y);
        next.obstacles.push(obstacle);

        if let Some(power_up) = spawn_power_up(&mut next, rng, center_x) {
            log::debug!("Spawned {:?} power-up {}", power_up.kind, power_up.id);
            next.power_ups.push(power_up);
        }

        if difficulty.rockets_enabled || !biome.hazards.is_empty() {
            if let Some(hazard) = spawn_hazard(&mut next, rng, GAME_WIDTH + HAZARD_SPAWN_OFFSET) {
                log::debug!("Spawned {:?} hazard {}", hazard.kind, hazard.id);
                next.hazards.push(hazard);
            }
        }
    }

    // --- BUFF EXPIRY ---
    buffs::expire(&mut next.active_buffs, now_ms);

    // --- OBSTACLES: score, then collide ---
    let multiplier = buffs::score_multiplier(&next.active_buffs);
    let player = next.player.pos;
    let mut obstacle_hit = false;

    for obstacle in &mut next.obstacles {
        if !obstacle.passed && obstacle.right() < PLAYER_X {
            obstacle.passed = true;
            next.score += multiplier;
        }

        if obstacle_collision(player, obstacle) {
            obstacle_hit = true;
            break;
        }
    }

    if obstacle_hit && !absorb_hit(&mut next) {
        return game_over(state, next.score);
    }

    // --- HAZARDS ---
    let player = next.player.pos;
    let hazard_hit = next.hazards.iter().any(|h| hazard_collision(player, h));

    if hazard_hit && !absorb_hit(&mut next) {
        return game_over(state, next.score);
    }

    // --- PICKUPS ---
    let player = next.player.pos;
    for power_up in &mut next.power_ups {
        if power_up_pickup(player, power_up) {
            power_up.collected = true;
            buffs::apply(&mut next.active_buffs, power_up.kind, now_ms, BUFF_DURATION_MS);
            log::debug!("Collected {:?}", power_up.kind);
        }
    }

    next.biome = Biome::for_score(next.score);
    next.elapsed_ms += delta_ms as f64;

    next
}

/// Allowed range for the player's center
#[inline]
pub fn play_bounds() -> (f32, f32) {
    (PLAYER_SIZE / 2.0, GAME_HEIGHT - PLAYER_SIZE / 2.0)
}

/// Spend the shield on a fatal hit. Returns false when there is none.
fn absorb_hit(next: &mut WorldState) -> bool {
    if !buffs::consume_shield(&mut next.active_buffs) {
        return false;
    }

    let (top, bottom) = play_bounds();
    next.player.pos.y = next.player.pos.y.clamp(top, bottom);
    next.player.velocity = 0.0;
    log::debug!("Shield absorbed a hit");
    true
}

/// Terminal snapshot: entities stay as they were before the fatal tick.
///
/// The score does include passes earned during that tick, so an obstacle
/// passed on the fatal tick counts toward the score while its `passed` flag
/// still reads false in the returned snapshot.
fn game_over(state: &WorldState, score: u64) -> WorldState {
    let mut over = state.clone();
    over.phase = GamePhase::GameOver;
    over.score = score;
    over.biome = Biome::for_score(score);
    over.high_score = state.high_score.max(score);
    log::info!("Game over: score {} (best {})", over.score, over.high_score);
    over
}
