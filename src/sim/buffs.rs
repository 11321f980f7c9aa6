//! Buff tracker
//!
//! Operates on the `active_buffs` list of a snapshot. At most one entry per
//! kind: reapplying a kind replaces its expiry, it never stacks duration.
//! Shield is additionally consumed by the first fatal hit it blocks.

use super::state::{ActiveBuff, BuffKind};

/// Time dilation from an active time-slow
pub const TIME_SLOW_SCALE: f32 = 0.5;
/// Points per obstacle while the multiplier is active
pub const SCORE_MULTIPLIER: u64 = 2;

pub fn has_buff(buffs: &[ActiveBuff], kind: BuffKind) -> bool {
    buffs.iter().any(|b| b.kind == kind)
}

pub fn has_shield(buffs: &[ActiveBuff]) -> bool {
    has_buff(buffs, BuffKind::Shield)
}

/// Simulation speed factor (0.5 under time-slow, else 1)
pub fn time_scale(buffs: &[ActiveBuff]) -> f32 {
    if has_buff(buffs, BuffKind::TimeSlow) {
        TIME_SLOW_SCALE
    } else {
        1.0
    }
}

/// Points awarded per obstacle passed
pub fn score_multiplier(buffs: &[ActiveBuff]) -> u64 {
    if has_buff(buffs, BuffKind::Multiplier) {
        SCORE_MULTIPLIER
    } else {
        1
    }
}

/// Apply a buff. An existing entry of the same kind keeps its slot and gets
/// the new expiry.
pub fn apply(buffs: &mut Vec<ActiveBuff>, kind: BuffKind, now_ms: f64, duration_ms: f64) {
    let expires_at_ms = now_ms + duration_ms;
    match buffs.iter_mut().find(|b| b.kind == kind) {
        Some(existing) => existing.expires_at_ms = expires_at_ms,
        None => buffs.push(ActiveBuff {
            kind,
            expires_at_ms,
        }),
    }
}

/// Drop buffs whose expiry has passed
pub fn expire(buffs: &mut Vec<ActiveBuff>, now_ms: f64) {
    buffs.retain(|b| b.expires_at_ms > now_ms);
}

/// Remove the shield. Returns false if there was none to spend.
pub fn consume_shield(buffs: &mut Vec<ActiveBuff>) -> bool {
    match buffs.iter().position(|b| b.kind == BuffKind::Shield) {
        Some(i) => {
            buffs.remove(i);
            true
        }
        None => false,
    }
}

/// Milliseconds left on a buff (0 if absent or expired)
pub fn remaining_ms(buffs: &[ActiveBuff], kind: BuffKind, now_ms: f64) -> f64 {
    buffs
        .iter()
        .find(|b| b.kind == kind)
        .map(|b| (b.expires_at_ms - now_ms).max(0.0))
        .unwrap_or(0.0)
}

/// Fraction of the buff's duration still left, for HUD timers
pub fn progress(buffs: &[ActiveBuff], kind: BuffKind, now_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 0.0;
    }
    (remaining_ms(buffs, kind, now_ms) / duration_ms).clamp(0.0, 1.0) as f32
}
