//! Combat domain: the boss decision policy.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::components::{
    ActiveWindow, AnimationCursor, AttackCooldown, Boss, CombatState,
};
use crate::content::{ActionTable, BossStrike};
use crate::core::SimConfig;
use crate::fx::{self, BurstParams, FxRng, ParticleKind};
use crate::movement::{Body, Facing, Player};

/// Distance bands and probabilities for the decision policy.
#[derive(Resource, Debug, Clone)]
pub struct AiTuning {
    /// Beyond this distance the boss closes in or dashes.
    pub far: f32,
    /// Inside this distance the boss swings.
    pub close: f32,
    pub dash_chance: f32,
    pub cleave_chance: f32,
    /// Chance a Run decision is overridden by the ink storm.
    pub storm_chance: f32,
    /// Run duration when closing from far.
    pub far_run: u32,
    /// Run duration at mid range.
    pub mid_run: u32,
    /// Pause after a Run leg ends.
    pub run_pause: u32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            far: 500.0,
            close: 200.0,
            dash_chance: 0.5,
            cleave_chance: 0.4,
            storm_chance: 0.15,
            far_run: 60,
            mid_run: 30,
            run_pause: 10,
        }
    }
}

/// Rng stream feeding boss decisions. Seeded from `SimConfig`.
#[derive(Resource)]
pub struct AiRng(pub ChaCha8Rng);

/// Outcome of one boss decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Run toward the player for this many ticks.
    Advance(u32),
    Cleave,
    Smash,
    Dash,
    Storm,
}

/// Pure decision policy. `roll` picks within a distance band; `storm_roll`
/// may override a Run outcome (and only a Run outcome) with the ink storm.
pub(crate) fn decide(distance: f32, roll: f32, storm_roll: f32, tuning: &AiTuning) -> Decision {
    let decision = if distance > tuning.far {
        if roll > tuning.dash_chance {
            Decision::Dash
        } else {
            Decision::Advance(tuning.far_run)
        }
    } else if distance < tuning.close {
        if roll < tuning.cleave_chance {
            Decision::Cleave
        } else {
            Decision::Smash
        }
    } else {
        Decision::Advance(tuning.mid_run)
    };

    match decision {
        Decision::Advance(_) if storm_roll < tuning.storm_chance => Decision::Storm,
        other => other,
    }
}

pub(crate) fn seed_ai_rng(mut commands: Commands, config: Res<SimConfig>) {
    commands.insert_resource(AiRng(ChaCha8Rng::seed_from_u64(config.seed)));
}

/// Face the player, count down between thoughts, and commit to decisions.
/// Committed attack states run to completion; the animation system hands
/// control back here by reverting to Idle with the recovery pause set.
pub(crate) fn update_boss_ai(
    table: Res<ActionTable>,
    tuning: Res<AiTuning>,
    mut rng: ResMut<AiRng>,
    mut fx_rng: ResMut<FxRng>,
    mut commands: Commands,
    players: Query<&Body, With<Player>>,
    mut bosses: Query<
        (
            &mut Body,
            &mut CombatState,
            &mut Facing,
            &mut AttackCooldown,
            &mut ActiveWindow,
            &mut AnimationCursor,
        ),
        (With<Boss>, Without<Player>),
    >,
) {
    let Ok(player_body) = players.single() else {
        return;
    };

    for (mut body, mut state, mut facing, mut cooldown, mut window, mut cursor) in &mut bosses {
        if *state == CombatState::Dead {
            continue;
        }

        if matches!(*state, CombatState::Idle | CombatState::Run) {
            *facing = if player_body.pos.x < body.pos.x {
                Facing::Left
            } else {
                Facing::Right
            };
        }

        match *state {
            CombatState::Idle => {
                if cooldown.ticks > 0 {
                    cooldown.ticks -= 1;
                }
                if cooldown.ticks > 0 {
                    continue;
                }

                let distance = (player_body.pos.x - body.pos.x).abs();
                let decision = decide(
                    distance,
                    rng.0.random::<f32>(),
                    rng.0.random::<f32>(),
                    &tuning,
                );
                debug!("boss decision at distance {distance:.0}: {decision:?}");

                match decision {
                    Decision::Advance(ticks) => {
                        *state = CombatState::Run;
                        cursor.reset();
                        cooldown.ticks = ticks;
                    }
                    Decision::Cleave => {
                        enter_strike(
                            CombatState::Attack,
                            &table.boss_strikes.cleave,
                            &mut state,
                            &mut cursor,
                            &mut window,
                            &mut body,
                        );
                    }
                    Decision::Smash => {
                        enter_strike(
                            CombatState::AttackHeavy,
                            &table.boss_strikes.smash,
                            &mut state,
                            &mut cursor,
                            &mut window,
                            &mut body,
                        );
                    }
                    Decision::Dash => {
                        enter_strike(
                            CombatState::Skill1,
                            &table.boss_strikes.dash,
                            &mut state,
                            &mut cursor,
                            &mut window,
                            &mut body,
                        );
                        fx::burst(
                            &mut commands,
                            &mut fx_rng.0,
                            Vec2::new(body.pos.x, body.pos.y + 100.0),
                            ParticleKind::Ink,
                            20,
                            BurstParams::default(),
                        );
                    }
                    Decision::Storm => {
                        enter_strike(
                            CombatState::Skill2,
                            &table.boss_strikes.storm,
                            &mut state,
                            &mut cursor,
                            &mut window,
                            &mut body,
                        );
                    }
                }
            }
            CombatState::Run => {
                if cooldown.ticks > 0 {
                    cooldown.ticks -= 1;
                }
                if cooldown.ticks == 0 {
                    *state = CombatState::Idle;
                    cursor.reset();
                    body.vel.x = 0.0;
                    cooldown.ticks = tuning.run_pause;
                }
            }
            _ => {}
        }
    }
}

fn enter_strike(
    next: CombatState,
    strike: &BossStrike,
    state: &mut CombatState,
    cursor: &mut AnimationCursor,
    window: &mut ActiveWindow,
    body: &mut Body,
) {
    *state = next;
    cursor.reset();
    window.set(strike.window);
    if strike.jump_impulse != 0.0 {
        body.vel.y = strike.jump_impulse;
    }
}
