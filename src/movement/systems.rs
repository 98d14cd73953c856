//! Movement domain: per-state velocity policy and integration.

use bevy::prelude::*;

use crate::combat::components::{ActiveWindow, AnimationCursor, Boss, CombatState, Combatant};
use crate::content::ActionTable;

use super::{ArenaTuning, Body, Facing, MoveHeld, Player};

/// Horizontal velocity for the player, decided by its combat state.
///
/// Held movement only steers in Idle/Run (and flips between them); committed
/// states damp or zero whatever velocity their entry set.
pub(crate) fn apply_player_locomotion(
    held: Res<MoveHeld>,
    tuning: Res<ArenaTuning>,
    mut players: Query<(&mut Body, &mut CombatState, &mut Facing), With<Player>>,
) {
    for (mut body, mut state, mut facing) in &mut players {
        match *state {
            CombatState::Idle | CombatState::Run => {
                if held.left {
                    body.vel.x = -tuning.player_speed;
                    *facing = Facing::Left;
                    *state = CombatState::Run;
                } else if held.right {
                    body.vel.x = tuning.player_speed;
                    *facing = Facing::Right;
                    *state = CombatState::Run;
                } else {
                    body.vel.x = 0.0;
                    *state = CombatState::Idle;
                }
            }
            CombatState::Dodge => body.vel.x *= 0.9,
            CombatState::Skill1 => body.vel.x *= 0.85,
            CombatState::Hurt => body.vel.x *= 0.95,
            CombatState::Attack | CombatState::AttackHeavy => body.vel.x = 0.0,
            // Skill2 keeps whatever its entry set (zero); knocked-back or
            // dead bodies are left alone.
            CombatState::Skill2 | CombatState::Dead => {}
        }
    }
}

/// Horizontal velocity for the boss: run speed on a Run leg, the strike's
/// advance while its hit window is active, zero otherwise.
pub(crate) fn drive_boss_velocity(
    tuning: Res<ArenaTuning>,
    table: Res<ActionTable>,
    mut bosses: Query<
        (&mut Body, &CombatState, &Facing, &ActiveWindow, &AnimationCursor),
        With<Boss>,
    >,
) {
    for (mut body, state, facing, window, cursor) in &mut bosses {
        match *state {
            CombatState::Run => body.vel.x = facing.sign() * tuning.boss_run_speed,
            s if s.is_attack() => {
                let advance = table
                    .boss_strikes
                    .get(s)
                    .filter(|_| window.contains(cursor.frame))
                    .map_or(0.0, |strike| strike.advance);
                body.vel.x = facing.sign() * advance;
            }
            CombatState::Dead => {}
            _ => body.vel.x = 0.0,
        }
    }
}

/// Gravity, integration, ground plane, and arena clamp for every live body.
pub(crate) fn integrate_bodies(
    tuning: Res<ArenaTuning>,
    mut bodies: Query<(&mut Body, &CombatState), With<Combatant>>,
) {
    for (mut body, state) in &mut bodies {
        if *state == CombatState::Dead {
            continue;
        }

        body.vel.y += tuning.gravity;
        let dy = body.vel.y;
        body.pos.y += dy;
        let floor = tuning.ground_y - body.size.y;
        if body.pos.y > floor {
            body.pos.y = floor;
            body.vel.y = 0.0;
        }

        let dx = body.vel.x;
        body.pos.x = (body.pos.x + dx).clamp(0.0, tuning.width - body.size.x);
    }
}
