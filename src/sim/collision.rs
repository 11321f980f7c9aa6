//! Collision predicates
//!
//! Pure geometry, no state changes. The player's hit box is smaller than its
//! sprite (`HITBOX_SCALE`) so near misses feel fair.

use glam::Vec2;

use super::state::{Hazard, Obstacle, PowerUp};
use crate::consts::*;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Strict overlap (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Shrunk hit box around the player's center
#[inline]
pub fn player_hitbox(center: Vec2) -> Aabb {
    let half = PLAYER_SIZE / 2.0 * HITBOX_SCALE;
    Aabb {
        min: center - Vec2::splat(half),
        max: center + Vec2::splat(half),
    }
}

/// Player overlaps the obstacle's column and is not fully inside the gap
pub fn obstacle_collision(player: Vec2, obstacle: &Obstacle) -> bool {
    let hitbox = player_hitbox(player);

    let in_column = hitbox.max.x > obstacle.x && hitbox.min.x < obstacle.right();
    if !in_column {
        return false;
    }

    hitbox.min.y < obstacle.gap_top() || hitbox.max.y > obstacle.gap_bottom()
}

/// Player overlaps an active hazard's box
pub fn hazard_collision(player: Vec2, hazard: &Hazard) -> bool {
    if !hazard.active {
        return false;
    }

    let hazard_box = Aabb {
        min: Vec2::new(hazard.x, hazard.y),
        max: Vec2::new(hazard.right(), hazard.bottom()),
    };
    player_hitbox(player).overlaps(&hazard_box)
}

/// Player touches an uncollected power-up (circle vs circle, full sprite size)
pub fn power_up_pickup(player: Vec2, power_up: &PowerUp) -> bool {
    if power_up.collected {
        return false;
    }

    let reach = PLAYER_SIZE / 2.0 + POWER_UP_SIZE / 2.0;
    player.distance(Vec2::new(power_up.x, power_up.y)) < reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BuffKind;
    use crate::tuning::HazardKind;

    fn obstacle_at(x: f32, gap_y: f32) -> Obstacle {
        Obstacle {
            id: 1,
            x,
            gap_y,
            gap_height: 170.0,
            width: OBSTACLE_WIDTH,
            passed: false,
        }
    }

    fn hazard_at(x: f32, y: f32, active: bool) -> Hazard {
        Hazard {
            id: 1,
            kind: HazardKind::Rocket,
            x,
            y,
            width: 40.0,
            height: 20.0,
            active,
            vel: Vec2::ZERO,
        }
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let obstacle = obstacle_at(80.0, 300.0);
        assert!(!obstacle_collision(Vec2::new(PLAYER_X, 300.0), &obstacle));
    }

    #[test]
    fn test_above_and_below_gap_hit() {
        let obstacle = obstacle_at(80.0, 300.0);
        // Gap spans 215..385, hit box half-size is 16.8
        assert!(obstacle_collision(Vec2::new(PLAYER_X, 225.0), &obstacle));
        assert!(obstacle_collision(Vec2::new(PLAYER_X, 375.0), &obstacle));
        assert!(!obstacle_collision(Vec2::new(PLAYER_X, 235.0), &obstacle));
    }

    #[test]
    fn test_outside_column_never_hits() {
        // Column starts well to the right of the hit box
        let obstacle = obstacle_at(PLAYER_X + 20.0, 300.0);
        assert!(!obstacle_collision(Vec2::new(PLAYER_X, 50.0), &obstacle));

        // Sprite edge overlaps but shrunk hit box does not
        let obstacle = obstacle_at(PLAYER_X + 18.0, 300.0);
        assert!(!obstacle_collision(Vec2::new(PLAYER_X, 50.0), &obstacle));

        let obstacle = obstacle_at(PLAYER_X + 10.0, 300.0);
        assert!(obstacle_collision(Vec2::new(PLAYER_X, 50.0), &obstacle));
    }

    #[test]
    fn test_hazard_overlap() {
        let hazard = hazard_at(PLAYER_X, 290.0, true);
        assert!(hazard_collision(Vec2::new(PLAYER_X, 300.0), &hazard));

        let far = hazard_at(PLAYER_X + 100.0, 290.0, true);
        assert!(!hazard_collision(Vec2::new(PLAYER_X, 300.0), &far));
    }

    #[test]
    fn test_inactive_hazard_is_harmless() {
        let hazard = hazard_at(PLAYER_X, 290.0, false);
        assert!(!hazard_collision(Vec2::new(PLAYER_X, 300.0), &hazard));
    }

    #[test]
    fn test_power_up_pickup_radius() {
        let mut power_up = PowerUp {
            id: 1,
            kind: BuffKind::Shield,
            x: PLAYER_X + 39.0,
            y: 300.0,
            collected: false,
        };
        assert!(power_up_pickup(Vec2::new(PLAYER_X, 300.0), &power_up));

        power_up.x = PLAYER_X + 40.0;
        assert!(!power_up_pickup(Vec2::new(PLAYER_X, 300.0), &power_up));

        power_up.x = PLAYER_X;
        power_up.collected = true;
        assert!(!power_up_pickup(Vec2::new(PLAYER_X, 300.0), &power_up));
    }
}
