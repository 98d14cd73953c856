//! Combat domain: intent resolution, animation advance, hit detection, death.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::ActionTable;
use crate::core::{MatchFlags, SimulationClock};
use crate::fx::{self, BurstParams, FxRng, Particle, ParticleKind, Soul};
use crate::geometry::{Rect, overlaps};
use crate::movement::{ActionIntent, ArenaTuning, Body, Facing, IntentQueue, Player};

use super::components::*;
use super::events::*;
use super::resources::CombatTuning;

/// Decrement skill cooldowns and re-hit guards. Runs before intents drain so
/// a cooldown that reaches zero this tick is usable this tick.
pub(crate) fn tick_cooldowns(
    mut locks: Query<&mut HitLock>,
    mut skills: Query<&mut SkillCooldowns>,
) {
    for mut lock in &mut locks {
        if lock.ticks > 0 {
            lock.ticks -= 1;
        }
    }
    for mut cooldowns in &mut skills {
        if cooldowns.skill1 > 0 {
            cooldowns.skill1 -= 1;
        }
        if cooldowns.skill2 > 0 {
            cooldowns.skill2 -= 1;
        }
    }
}

/// Drain the intent queue in arrival order and apply what the cancel rules
/// allow. Discrete actions only start from Idle/Run; jump bypasses that rule
/// but requires ground contact; everything is refused once dead.
pub(crate) fn apply_player_intents(
    mut intents: ResMut<IntentQueue>,
    arena: Res<ArenaTuning>,
    tuning: Res<CombatTuning>,
    table: Res<ActionTable>,
    mut fx_rng: ResMut<FxRng>,
    mut commands: Commands,
    mut players: Query<
        (
            &mut Body,
            &mut CombatState,
            &mut Facing,
            &mut SkillCooldowns,
            &mut ActiveWindow,
            &mut AnimationCursor,
            &mut HitTargets,
        ),
        With<Player>,
    >,
) {
    let queued = std::mem::take(&mut intents.actions);
    let Ok((mut body, mut state, mut facing, mut cooldowns, mut window, mut cursor, mut swing)) =
        players.single_mut()
    else {
        return;
    };

    for intent in queued {
        if *state == CombatState::Dead {
            continue;
        }

        if intent == ActionIntent::Jump {
            if body.grounded(&arena) {
                body.vel.y = arena.jump_impulse;
                fx::burst(
                    &mut commands,
                    &mut fx_rng.0,
                    Vec2::new(body.pos.x + body.size.x / 2.0, arena.ground_y),
                    ParticleKind::Ink,
                    3,
                    BurstParams::default(),
                );
            }
            continue;
        }

        if !state.interruptible() {
            continue;
        }

        match intent {
            ActionIntent::Attack => {
                *state = CombatState::Attack;
                cursor.reset();
                swing.clear();
                window.set(table.player_strikes.attack.window);
                body.vel.x = 0.0;
            }
            ActionIntent::AttackHeavy => {
                *state = CombatState::AttackHeavy;
                cursor.reset();
                swing.clear();
                window.set(table.player_strikes.attack_heavy.window);
                body.vel.x = 0.0;
            }
            ActionIntent::Skill1 => {
                if cooldowns.skill1 > 0 {
                    continue;
                }
                *state = CombatState::Skill1;
                cursor.reset();
                swing.clear();
                window.set(table.player_strikes.skill1.window);
                cooldowns.skill1 = tuning.skill1_cooldown;
                body.vel.x = facing.sign() * tuning.skill1_lunge;
            }
            ActionIntent::Skill2 => {
                if cooldowns.skill2 > 0 {
                    continue;
                }
                *state = CombatState::Skill2;
                cursor.reset();
                swing.clear();
                window.set(table.player_strikes.skill2.window);
                cooldowns.skill2 = tuning.skill2_cooldown;
                body.vel.x = 0.0;
                fx::burst(
                    &mut commands,
                    &mut fx_rng.0,
                    Vec2::new(body.pos.x + body.size.x / 2.0, body.pos.y + body.size.y),
                    ParticleKind::Energy,
                    20,
                    BurstParams::default(),
                );
            }
            ActionIntent::DodgeLeft => {
                *state = CombatState::Dodge;
                cursor.reset();
                *facing = Facing::Left;
                body.vel.x = -arena.dodge_speed;
            }
            ActionIntent::DodgeRight => {
                *state = CombatState::Dodge;
                cursor.reset();
                *facing = Facing::Right;
                body.vel.x = arena.dodge_speed;
            }
            ActionIntent::Jump => unreachable!("handled above"),
        }
    }
}

/// Advance every live combatant's animation cursor; non-looping animations
/// revert to Idle on completion (the boss also starts its recovery pause).
/// Boss strikes fire their frame milestones on the tick the cursor advances.
pub(crate) fn advance_animations(
    table: Res<ActionTable>,
    arena: Res<ArenaTuning>,
    tuning: Res<CombatTuning>,
    mut clock: ResMut<SimulationClock>,
    mut fx_rng: ResMut<FxRng>,
    mut commands: Commands,
    mut combatants: Query<
        (
            &Team,
            &Body,
            &ActiveWindow,
            &mut CombatState,
            &mut AnimationCursor,
            Option<&mut AttackCooldown>,
        ),
        With<Combatant>,
    >,
) {
    for (team, body, window, mut state, mut cursor, cooldown) in &mut combatants {
        if *state == CombatState::Dead {
            continue;
        }

        let profile = table.profiles(*team).get(*state);
        cursor.ticks += 1;
        if (cursor.ticks as f32) < profile.ticks_per_frame() {
            continue;
        }
        cursor.ticks = 0;
        cursor.frame += 1;

        if *team == Team::Enemy && state.is_attack() {
            boss_frame_milestones(
                *state,
                cursor.frame,
                window,
                body,
                &table,
                &arena,
                &mut clock,
                &mut fx_rng,
                &mut commands,
            );
        }

        if cursor.frame >= profile.frames {
            if profile.looping {
                cursor.frame = 0;
            } else {
                *state = CombatState::Idle;
                cursor.frame = 0;
                if let Some(mut cooldown) = cooldown {
                    cooldown.ticks = tuning.boss_recovery;
                }
            }
        }
    }
}

/// Windup and window-open effects keyed to boss animation frames.
#[allow(clippy::too_many_arguments)]
fn boss_frame_milestones(
    state: CombatState,
    frame: u32,
    window: &ActiveWindow,
    body: &Body,
    table: &ActionTable,
    arena: &ArenaTuning,
    clock: &mut SimulationClock,
    fx_rng: &mut FxRng,
    commands: &mut Commands,
) {
    let Some(strike) = table.boss_strikes.get(state) else {
        return;
    };

    if window.start >= 5 && frame == window.start - 5 {
        fx::burst(
            commands,
            &mut fx_rng.0,
            Vec2::new(body.pos.x + body.size.x / 2.0, body.pos.y + 50.0),
            ParticleKind::Blood,
            5,
            BurstParams {
                speed: 8.0,
                size: 5.0,
                ..Default::default()
            },
        );
    }

    if frame == window.start {
        if strike.shake > 0.0 {
            clock.shake = strike.shake;
        }
        match state {
            CombatState::AttackHeavy => {
                fx::burst(
                    commands,
                    &mut fx_rng.0,
                    Vec2::new(body.pos.x + body.size.x / 2.0, arena.ground_y),
                    ParticleKind::Ink,
                    30,
                    BurstParams {
                        speed: 10.0,
                        size: 8.0,
                        ..Default::default()
                    },
                );
            }
            CombatState::Skill2 => {
                // Rising ink columns scattered across the arena floor.
                for _ in 0..10 {
                    let offset = (fx_rng.random() - 0.5) * 800.0;
                    let rise = -5.0 - fx_rng.random() * 5.0;
                    commands.spawn(Particle {
                        pos: Vec2::new(body.pos.x + offset, arena.ground_y),
                        vel: Vec2::new(0.0, rise),
                        life: 1.0,
                        max_life: 1.0,
                        size: 10.0,
                        color: ParticleKind::Ink.color(),
                        kind: ParticleKind::Ink,
                    });
                }
            }
            _ => {}
        }
    }
}

/// Facing-anchored strike hitbox (or centered, for area strikes). The box
/// reaches above and below the attacker's own height by the given margins.
/// A right-facing box starts past the attacker's leading edge when
/// `front_edge` is set, or sweeps through its own silhouette otherwise (the
/// boss's swings cover its body).
fn strike_rect(
    body: &Body,
    facing: Facing,
    range: f32,
    centered: bool,
    reach_up: f32,
    reach_down: f32,
    front_edge: bool,
) -> Rect {
    let x = if centered {
        body.pos.x + body.size.x / 2.0 - range / 2.0
    } else {
        match facing {
            Facing::Right if front_edge => body.pos.x + body.size.x,
            Facing::Right => body.pos.x,
            Facing::Left => body.pos.x - range + body.size.x,
        }
    };
    Rect::new(
        x,
        body.pos.y - reach_up,
        range,
        body.size.y + reach_up + reach_down,
    )
}

/// Player strikes against every live enemy inside the active window. The
/// swing log makes each swing connect at most once per target however long
/// the window runs; the timed hit-lock drives the render flash. The boss
/// never staggers out of its own action.
pub(crate) fn resolve_player_strikes(
    table: Res<ActionTable>,
    tuning: Res<CombatTuning>,
    mut clock: ResMut<SimulationClock>,
    mut fx_rng: ResMut<FxRng>,
    mut commands: Commands,
    mut struck: MessageWriter<BossStruck>,
    mut players: Query<
        (&Body, &CombatState, &Facing, &ActiveWindow, &AnimationCursor, &mut HitTargets),
        With<Player>,
    >,
    mut targets: Query<(Entity, &Body, &CombatState, &mut Health, &mut HitLock), Without<Player>>,
) {
    let Ok((body, state, facing, window, cursor, mut swing)) = players.single_mut() else {
        return;
    };
    if !state.is_attack() || !window.contains(cursor.frame) {
        return;
    }
    let Some(strike) = table.player_strikes.get(*state) else {
        return;
    };

    let hitbox = strike_rect(body, *facing, strike.range, strike.centered, 20.0, 20.0, true);

    for (target, target_body, target_state, mut health, mut lock) in &mut targets {
        if *target_state == CombatState::Dead || swing.contains(target) || lock.locked() {
            continue;
        }
        if !overlaps(&hitbox, &target_body.rect()) {
            continue;
        }

        let dealt = health.take_damage(strike.damage);
        swing.record(target);
        lock.ticks = tuning.hit_lock;
        clock.hit_stop = tuning.strike_hit_stop;

        let kind = if *state == CombatState::Skill2 {
            ParticleKind::Energy
        } else {
            ParticleKind::Blood
        };
        let chest = Vec2::new(
            target_body.pos.x + target_body.size.x / 2.0,
            target_body.pos.y + 100.0,
        );
        fx::burst(&mut commands, &mut fx_rng.0, chest, kind, 8, BurstParams::default());
        fx::burst(
            &mut commands,
            &mut fx_rng.0,
            Vec2::new(chest.x, target_body.pos.y + 50.0),
            ParticleKind::Spark,
            5,
            BurstParams::default(),
        );

        struck.write(BossStruck { damage: dealt });
        debug!("player {state:?} hit for {dealt}");
    }
}

/// Boss strikes against the player. A dodge evades outright; the global
/// invulnerability window absorbs everything after a hit lands.
pub(crate) fn resolve_boss_strikes(
    table: Res<ActionTable>,
    tuning: Res<CombatTuning>,
    mut clock: ResMut<SimulationClock>,
    mut fx_rng: ResMut<FxRng>,
    mut commands: Commands,
    mut struck: MessageWriter<PlayerStruck>,
    bosses: Query<
        (&Body, &CombatState, &Facing, &ActiveWindow, &AnimationCursor, &Health),
        With<Boss>,
    >,
    mut players: Query<
        (&mut Body, &mut CombatState, &mut Health, &mut AnimationCursor),
        (With<Player>, Without<Boss>),
    >,
) {
    let Ok((mut player_body, mut player_state, mut health, mut player_cursor)) =
        players.single_mut()
    else {
        return;
    };

    for (body, state, facing, window, cursor, boss_health) in &bosses {
        // A boss slain earlier this tick gets no dying blow.
        if boss_health.is_dead() {
            continue;
        }
        if !state.is_attack() || !window.contains(cursor.frame) {
            continue;
        }
        let Some(strike) = table.boss_strikes.get(*state) else {
            continue;
        };
        if matches!(*player_state, CombatState::Dodge | CombatState::Dead) {
            continue;
        }
        if clock.invulnerability > 0 {
            continue;
        }

        let hitbox = strike_rect(body, *facing, strike.range, strike.centered, 50.0, 0.0, false);
        if !overlaps(&hitbox, &player_body.rect()) {
            continue;
        }

        let dealt = health.take_damage(strike.damage);
        *player_state = CombatState::Hurt;
        player_cursor.reset();
        player_body.vel = Vec2::new(facing.sign() * strike.knockback, tuning.hurt_launch);
        clock.invulnerability = tuning.hurt_invulnerability;
        clock.hit_stop = tuning.hurt_hit_stop;
        clock.shake += tuning.hurt_shake;

        fx::burst(
            &mut commands,
            &mut fx_rng.0,
            Vec2::new(player_body.pos.x + player_body.size.x / 2.0, player_body.pos.y),
            ParticleKind::Blood,
            20,
            BurstParams::default(),
        );

        struck.write(PlayerStruck { damage: dealt });
        debug!("boss {state:?} hit player for {dealt}");
    }
}

/// Move anyone whose health hit zero into the terminal Dead state, exactly
/// once, on the same tick as the killing blow.
pub(crate) fn process_deaths(
    tuning: Res<CombatTuning>,
    mut flags: ResMut<MatchFlags>,
    mut clock: ResMut<SimulationClock>,
    mut fx_rng: ResMut<FxRng>,
    mut commands: Commands,
    mut player_defeated: MessageWriter<PlayerDefeated>,
    mut boss_defeated: MessageWriter<BossDefeated>,
    mut combatants: Query<(&Team, &mut Body, &mut CombatState, &mut AnimationCursor, &Health)>,
) {
    for (team, mut body, mut state, mut cursor, health) in &mut combatants {
        if !health.is_dead() || *state == CombatState::Dead {
            continue;
        }

        *state = CombatState::Dead;
        cursor.reset();
        body.vel = Vec2::ZERO;
        let center = body.center();

        fx::burst(
            &mut commands,
            &mut fx_rng.0,
            center,
            ParticleKind::Ink,
            40,
            BurstParams {
                speed: 6.0,
                size: 6.0,
                ..Default::default()
            },
        );

        match team {
            Team::Player => {
                fx::burst(
                    &mut commands,
                    &mut fx_rng.0,
                    center,
                    ParticleKind::Blood,
                    15,
                    BurstParams {
                        speed: 3.0,
                        size: 4.0,
                        ..Default::default()
                    },
                );
                // A single still soul stays behind; decay never claims it.
                commands.spawn((
                    Particle {
                        pos: center,
                        vel: Vec2::new(0.0, -1.0),
                        life: 1.0,
                        max_life: 1.0,
                        size: 8.0,
                        color: Color::WHITE,
                        kind: ParticleKind::Energy,
                    },
                    Soul,
                ));
                flags.over = true;
                player_defeated.write(PlayerDefeated);
                info!("player defeated");
            }
            Team::Enemy => {
                flags.won = true;
                clock.hit_stop = tuning.boss_death_hit_stop;
                clock.shake = tuning.boss_death_shake;
                boss_defeated.write(BossDefeated);
                info!("boss defeated");
            }
        }
    }
}
