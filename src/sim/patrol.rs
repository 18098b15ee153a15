//! Enemy patrol motion
//!
//! Every enemy shuttles back and forth along its own axis. Movement is a
//! fixed step per tick (never time-scaled): `PATROL_STEP * speed`. The
//! direction flips on the tick the position passes a corridor limit, so an
//! enemy may overshoot a limit by at most one step before turning back.

use super::state::{Enemy, GameEvent, PatrolAxis};
use crate::config::Corridor;
use crate::consts::PATROL_STEP;

/// Move one coordinate a step along its heading; returns true if the heading flipped
#[inline]
fn advance(pos: &mut f32, positive: &mut bool, step: f32, low: f32, high: f32) -> bool {
    if *positive {
        *pos += step;
        if *pos > high {
            *positive = false;
            return true;
        }
    } else {
        *pos -= step;
        if *pos < low {
            *positive = true;
            return true;
        }
    }
    false
}

/// Advance a single enemy; returns true if it turned around
pub fn step_enemy(enemy: &mut Enemy, corridor: &Corridor, speed: f32) -> bool {
    let step = PATROL_STEP * speed;
    let pos = &mut enemy.body.pos;
    match enemy.axis {
        PatrolAxis::Horizontal => advance(
            &mut pos.x,
            &mut enemy.heading.x,
            step,
            corridor.x_low,
            corridor.x_high,
        ),
        PatrolAxis::Vertical => advance(
            &mut pos.y,
            &mut enemy.heading.y,
            step,
            corridor.y_low,
            corridor.y_high,
        ),
    }
}

/// Advance every enemy one tick, recording turnarounds in `events`
pub fn step_patrols(
    enemies: &mut [Enemy],
    corridor: &Corridor,
    speed: f32,
    events: &mut Vec<GameEvent>,
) {
    for (index, enemy) in enemies.iter_mut().enumerate() {
        if step_enemy(enemy, corridor, speed) {
            log::debug!(
                "Enemy {} turned, now moving {}",
                index,
                match (enemy.axis, enemy.moving_positive()) {
                    (PatrolAxis::Horizontal, true) => "right",
                    (PatrolAxis::Horizontal, false) => "left",
                    (PatrolAxis::Vertical, true) => "up",
                    (PatrolAxis::Vertical, false) => "down",
                }
            );
            events.push(GameEvent::PatrolTurned {
                enemy: index,
                axis: enemy.axis,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_horizontal_moves_only_x() {
        let mut enemy = Enemy::new(Vec2::new(400.0, 300.0), PatrolAxis::Horizontal);
        step_enemy(&mut enemy, &Corridor::default(), 1.0);
        assert_eq!(enemy.body.pos, Vec2::new(402.0, 300.0));
    }

    #[test]
    fn test_vertical_moves_only_y() {
        let mut enemy = Enemy::new(Vec2::new(400.0, 300.0), PatrolAxis::Vertical);
        step_enemy(&mut enemy, &Corridor::default(), 0.5);
        assert_eq!(enemy.body.pos, Vec2::new(400.0, 301.0));
    }

    #[test]
    fn test_flip_at_high_limit() {
        let corridor = Corridor::default();
        let mut enemy = Enemy::new(Vec2::new(789.0, 300.0), PatrolAxis::Horizontal);
        // 789 -> 791 passes 790: turns on this tick
        assert!(step_enemy(&mut enemy, &corridor, 1.0));
        assert!(!enemy.heading.x);
        assert_eq!(enemy.body.pos.x, 791.0);
        // Next tick heads back
        assert!(!step_enemy(&mut enemy, &corridor, 1.0));
        assert_eq!(enemy.body.pos.x, 789.0);
    }

    #[test]
    fn test_flip_at_low_limit() {
        let corridor = Corridor::default();
        let mut enemy = Enemy::new(Vec2::new(100.0, 21.0), PatrolAxis::Vertical);
        enemy.heading.y = false;
        assert!(step_enemy(&mut enemy, &corridor, 1.0));
        assert!(enemy.heading.y);
        assert_eq!(enemy.body.pos.y, 19.0);
    }

    #[test]
    fn test_exact_limit_does_not_flip() {
        let corridor = Corridor::default();
        let mut enemy = Enemy::new(Vec2::new(788.0, 300.0), PatrolAxis::Horizontal);
        assert!(!step_enemy(&mut enemy, &corridor, 1.0));
        assert_eq!(enemy.body.pos.x, 790.0);
        assert!(enemy.heading.x);
    }

    #[test]
    fn test_step_patrols_records_turns() {
        let corridor = Corridor::default();
        let mut enemies = vec![
            Enemy::new(Vec2::new(790.0, 300.0), PatrolAxis::Horizontal),
            Enemy::new(Vec2::new(400.0, 300.0), PatrolAxis::Vertical),
        ];
        let mut events = Vec::new();
        step_patrols(&mut enemies, &corridor, 1.0, &mut events);
        assert_eq!(
            events,
            vec![GameEvent::PatrolTurned {
                enemy: 0,
                axis: PatrolAxis::Horizontal
            }]
        );
    }

    proptest! {
        #[test]
        fn prop_patrol_stays_in_corridor(
            start in 80.0f32..=790.0,
            other in 0.0f32..600.0,
            tier in 0usize..4,
            vertical in any::<bool>(),
            ticks in 1usize..2000,
        ) {
            let corridor = Corridor::default();
            let speed = [0.5f32, 1.0, 3.0, 5.0][tier];
            let step = PATROL_STEP * speed;
            let (axis, low, high) = if vertical {
                (PatrolAxis::Vertical, corridor.y_low, corridor.y_high)
            } else {
                (PatrolAxis::Horizontal, corridor.x_low, corridor.x_high)
            };
            let start = start.clamp(low, high);
            let pos = if vertical { Vec2::new(other, start) } else { Vec2::new(start, other) };
            let mut enemy = Enemy::new(pos, axis);

            for _ in 0..ticks {
                let before = enemy.body.pos;
                let was_positive = enemy.moving_positive();
                let turned = step_enemy(&mut enemy, &corridor, speed);

                let (moved, fixed_before, fixed_after) = if vertical {
                    (enemy.body.pos.y, before.x, enemy.body.pos.x)
                } else {
                    (enemy.body.pos.x, before.y, enemy.body.pos.y)
                };
                prop_assert_eq!(fixed_before, fixed_after);
                // Turning happens after the step that passes a limit, so one
                // step of overshoot is the tolerance, never more
                prop_assert!(moved >= low - step && moved <= high + step);
                // Turn happens exactly on the tick the limit is passed
                let crossed = if was_positive { moved > high } else { moved < low };
                prop_assert_eq!(turned, crossed);
            }
        }
    }
}
