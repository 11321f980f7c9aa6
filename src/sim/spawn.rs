//! Entity spawners
//!
//! Pure functions of the current snapshot and an injected RNG. They allocate
//! entity IDs from the state but do not insert anything themselves.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::{BuffKind, Hazard, Obstacle, PowerUp, WorldState};
use crate::consts::*;
use crate::tuning::HazardKind;

/// Uniform sample in [lo, hi]; collapses to the midpoint if the range is empty
fn sample_between<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if lo < hi {
        rng.random_range(lo..=hi)
    } else {
        (lo + hi) / 2.0
    }
}

/// New obstacle just past the right edge with a random gap position
pub fn spawn_obstacle<R: Rng + ?Sized>(state: &mut WorldState, rng: &mut R) -> Obstacle {
    let gap_height = state.difficulty.config().gap_size;
    let min_gap_y = gap_height / 2.0 + GAP_MARGIN;
    let max_gap_y = GAME_HEIGHT - gap_height / 2.0 - GAP_MARGIN;

    Obstacle {
        id: state.next_entity_id(),
        x: GAME_WIDTH + OBSTACLE_WIDTH,
        gap_y: sample_between(rng, min_gap_y, max_gap_y),
        gap_height,
        width: OBSTACLE_WIDTH,
        passed: false,
    }
}

/// Maybe a power-up centered at `x`
pub fn spawn_power_up<R: Rng + ?Sized>(
    state: &mut WorldState,
    rng: &mut R,
    x: f32,
) -> Option<PowerUp> {
    if !rng.random_bool(POWER_UP_SPAWN_CHANCE) {
        return None;
    }

    let kind = *BuffKind::ALL.choose(rng)?;
    let y = sample_between(rng, SPAWN_MARGIN, GAME_HEIGHT - SPAWN_MARGIN);

    Some(PowerUp {
        id: state.next_entity_id(),
        kind,
        x,
        y,
        collected: false,
    })
}

/// Maybe a hazard at `x`, drawn from the current biome's palette
pub fn spawn_hazard<R: Rng + ?Sized>(
    state: &mut WorldState,
    rng: &mut R,
    x: f32,
) -> Option<Hazard> {
    let allowed = state.biome.config().hazards;
    if allowed.is_empty() || !rng.random_bool(HAZARD_SPAWN_CHANCE) {
        return None;
    }

    let kind = *allowed.choose(rng)?;
    let y = sample_between(rng, SPAWN_MARGIN, GAME_HEIGHT - SPAWN_MARGIN);
    let (width, height) = kind.size();
    let vel = match kind {
        HazardKind::Spike => Vec2::new(0.0, 2.0),
        HazardKind::FirePillar => {
            let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            Vec2::new(0.0, dir)
        }
        HazardKind::Laser => Vec2::ZERO,
        HazardKind::Rocket => Vec2::new(-6.0, 0.0),
    };

    Some(Hazard {
        id: state.next_entity_id(),
        kind,
        x,
        y,
        width,
        height,
        active: true,
        vel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SkinId;
    use crate::tuning::{Biome, Difficulty};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_obstacle_gap_within_margins() {
        let mut rng = Pcg32::seed_from_u64(7);
        for difficulty in Difficulty::ALL {
            let mut state = WorldState::new(difficulty, SkinId::default());
            let gap = difficulty.config().gap_size;
            for _ in 0..200 {
                let obstacle = spawn_obstacle(&mut state, &mut rng);
                assert_eq!(obstacle.gap_height, gap);
                assert!(obstacle.gap_top() >= GAP_MARGIN - 1e-3);
                assert!(obstacle.gap_bottom() <= GAME_HEIGHT - GAP_MARGIN + 1e-3);
                assert_eq!(obstacle.x, GAME_WIDTH + OBSTACLE_WIDTH);
                assert!(!obstacle.passed);
            }
        }
    }

    #[test]
    fn test_power_up_rate_and_kinds() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut state = WorldState::new(Difficulty::Normal, SkinId::default());
        let mut spawned = 0;
        let mut seen = Vec::new();
        for _ in 0..2000 {
            if let Some(p) = spawn_power_up(&mut state, &mut rng, 400.0) {
                spawned += 1;
                assert_eq!(p.x, 400.0);
                assert!(p.y >= SPAWN_MARGIN && p.y <= GAME_HEIGHT - SPAWN_MARGIN);
                if !seen.contains(&p.kind) {
                    seen.push(p.kind);
                }
            }
        }
        // 15% of 2000, with generous slack
        assert!((200..400).contains(&spawned), "spawned {spawned}");
        assert_eq!(seen.len(), BuffKind::ALL.len());
    }

    #[test]
    fn test_forest_never_spawns_hazards() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = WorldState::new(Difficulty::Masochist, SkinId::default());
        assert_eq!(state.biome, Biome::Forest);
        for _ in 0..500 {
            assert!(spawn_hazard(&mut state, &mut rng, 850.0).is_none());
        }
    }

    #[test]
    fn test_hazards_follow_biome_palette() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = WorldState::new(Difficulty::Normal, SkinId::default());
        state.biome = Biome::Void;
        let mut spawned = 0;
        for _ in 0..500 {
            if let Some(h) = spawn_hazard(&mut state, &mut rng, 850.0) {
                spawned += 1;
                assert!(Biome::Void.config().hazards.contains(&h.kind));
                assert!(h.active);
                match h.kind {
                    HazardKind::Laser => {
                        assert_eq!(h.width, GAME_WIDTH);
                        assert_eq!(h.vel, Vec2::ZERO);
                    }
                    HazardKind::Rocket => assert!(h.vel.x < 0.0),
                    _ => unreachable!(),
                }
            }
        }
        assert!(spawned > 0);
    }

    #[test]
    fn test_fire_pillars_move_vertically() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut state = WorldState::new(Difficulty::Normal, SkinId::default());
        state.biome = Biome::Magma;
        for _ in 0..200 {
            if let Some(h) = spawn_hazard(&mut state, &mut rng, 850.0) {
                assert_eq!(h.kind, HazardKind::FirePillar);
                assert_eq!(h.vel.x, 0.0);
                assert_eq!(h.vel.y.abs(), 1.0);
            }
        }
    }
}
