//! Edge events between two consecutive snapshots
//!
//! Collaborators (audio, HUD, economy) react to changes rather than to
//! state, so the host diffs each new snapshot against the previous one.

use serde::{Deserialize, Serialize};

use super::buffs;
use super::state::{BuffKind, GamePhase, WorldState};

/// Something worth reacting to happened between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began
    Started,
    Paused,
    Resumed,
    /// Score went up
    Scored { points: u64 },
    /// More buffs active than before (a power-up was collected)
    BuffGained,
    /// Shield vanished before its timer ran out
    ShieldBroken,
    /// The run ended
    GameOver { score: u64 },
}

/// Events implied by going from `prev` to `next` at wall clock `now_ms`
pub fn detect(prev: &WorldState, next: &WorldState, now_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match (prev.phase, next.phase) {
        (GamePhase::Idle | GamePhase::GameOver, GamePhase::Playing) => {
            events.push(GameEvent::Started)
        }
        (GamePhase::Playing, GamePhase::Paused) => events.push(GameEvent::Paused),
        (GamePhase::Paused, GamePhase::Playing) => events.push(GameEvent::Resumed),
        _ => {}
    }

    // A fresh run resets the score, that is not a score event
    let same_run = !matches!(events.first(), Some(GameEvent::Started));

    if same_run && next.score > prev.score {
        events.push(GameEvent::Scored {
            points: next.score - prev.score,
        });
    }

    if same_run && next.active_buffs.len() > prev.active_buffs.len() {
        events.push(GameEvent::BuffGained);
    }

    let shield_broken = prev
        .active_buffs
        .iter()
        .find(|b| b.kind == BuffKind::Shield)
        .is_some_and(|shield| shield.expires_at_ms > now_ms)
        && !buffs::has_shield(&next.active_buffs);
    if same_run && shield_broken {
        events.push(GameEvent::ShieldBroken);
    }

    if prev.phase != GamePhase::GameOver && next.phase == GamePhase::GameOver {
        events.push(GameEvent::GameOver { score: next.score });
    }

    events
}
