//! Randomized invariants over whole runs of the simulation

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use skyflap::consts::*;
use skyflap::sim::buffs;
use skyflap::sim::step::play_bounds;
use skyflap::sim::{GamePhase, SkinId, WorldState, lifecycle, step};
use skyflap::{Biome, Difficulty};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

/// (flap this frame, frame length in ms)
fn inputs() -> impl Strategy<Value = Vec<(bool, f32)>> {
    prop::collection::vec((prop::bool::weighted(0.08), 1.0f32..50.0), 1..600)
}

/// Play `inputs` from a fresh run, returning every snapshot with the wall
/// clock it was stepped at
fn play(difficulty: Difficulty, seed: u64, inputs: &[(bool, f32)]) -> Vec<(f64, WorldState)> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = lifecycle::start(&WorldState::new(difficulty, SkinId::default()));
    let mut now_ms = 0.0;
    let mut snapshots = vec![(now_ms, state.clone())];

    for &(flap, delta_ms) in inputs {
        if flap {
            state = lifecycle::jump(&state);
        }
        now_ms += delta_ms as f64;
        state = step(&state, delta_ms, now_ms, &mut rng);
        snapshots.push((now_ms, state.clone()));
        if state.is_game_over() {
            break;
        }
    }
    snapshots
}

proptest! {
    #[test]
    fn test_step_is_identity_outside_play(
        difficulty in difficulty(),
        seed in any::<u64>(),
        delta_ms in 0.0f32..200.0,
        phase in prop::sample::select(vec![GamePhase::Idle, GamePhase::Paused, GamePhase::GameOver]),
    ) {
        let mut state = WorldState::new(difficulty, SkinId::default());
        state.phase = phase;
        let mut rng = Pcg32::seed_from_u64(seed);
        prop_assert_eq!(step(&state, delta_ms, 1_000.0, &mut rng), state);
    }

    #[test]
    fn test_each_pass_scores_the_multiplier_once(
        difficulty in difficulty(),
        seed in any::<u64>(),
        inputs in inputs(),
    ) {
        let snapshots = play(difficulty, seed, &inputs);
        for pair in snapshots.windows(2) {
            let (_, prev) = &pair[0];
            let (now_ms, next) = &pair[1];
            prop_assert!(next.score >= prev.score);

            // The terminal snapshot keeps the previous tick's obstacle flags
            if next.is_game_over() {
                prop_assert!(next.score - prev.score <= 2);
                continue;
            }

            let mut live = prev.active_buffs.clone();
            buffs::expire(&mut live, *now_ms);
            let multiplier = buffs::score_multiplier(&live);

            let newly_passed = next
                .obstacles
                .iter()
                .filter(|o| o.passed)
                .filter(|o| prev.obstacles.iter().any(|p| p.id == o.id && !p.passed))
                .count() as u64;
            let was_passed = |id: u32| prev.obstacles.iter().any(|p| p.id == id && p.passed);
            prop_assert!(next.obstacles.iter().all(|o| o.passed || !was_passed(o.id)));

            prop_assert_eq!(next.score - prev.score, multiplier * newly_passed);
        }
    }

    #[test]
    fn test_snapshot_invariants_hold(
        difficulty in difficulty(),
        seed in any::<u64>(),
        inputs in inputs(),
    ) {
        let (top, bottom) = play_bounds();
        for (_, state) in play(difficulty, seed, &inputs) {
            prop_assert_eq!(state.biome, Biome::for_score(state.score));
            prop_assert!(state.high_score >= state.score || state.phase != GamePhase::GameOver);
            prop_assert!(state.player.velocity.abs() <= MAX_VELOCITY);
            if state.phase == GamePhase::Playing {
                prop_assert!(state.player.pos.y >= top && state.player.pos.y <= bottom);
            }

            let mut kinds: Vec<_> = state.active_buffs.iter().map(|b| b.kind).collect();
            kinds.sort_by_key(|k| *k as u8);
            kinds.dedup();
            prop_assert_eq!(kinds.len(), state.active_buffs.len());

            let ids: Vec<u32> = state.obstacles.iter().map(|o| o.id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
            for obstacle in &state.obstacles {
                prop_assert!(obstacle.gap_top() >= GAP_MARGIN - 1e-3);
                prop_assert!(obstacle.gap_bottom() <= GAME_HEIGHT - GAP_MARGIN + 1e-3);
            }
        }
    }

    #[test]
    fn test_same_seed_same_run(
        difficulty in difficulty(),
        seed in any::<u64>(),
        inputs in inputs(),
    ) {
        prop_assert_eq!(play(difficulty, seed, &inputs), play(difficulty, seed, &inputs));
    }
}
