//! Content domain: the immutable action table driving animation and strikes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::components::CombatState;

/// Logical animation profile for one combat state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionProfile {
    pub frames: u32,
    pub frame_rate: f32,
    pub looping: bool,
}

impl ActionProfile {
    pub const fn new(frames: u32, frame_rate: f32, looping: bool) -> Self {
        Self {
            frames,
            frame_rate,
            looping,
        }
    }

    /// Simulation ticks between frame advances at a 60 Hz tick rate.
    pub fn ticks_per_frame(&self) -> f32 {
        60.0 / self.frame_rate
    }
}

/// Stand-in profile for a misconfigured state. Reaching it is a content
/// defect, not a runtime error.
pub const FALLBACK_PROFILE: ActionProfile = ActionProfile::new(8, 10.0, false);

/// One profile per combat state for a single combatant archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateProfiles {
    pub idle: ActionProfile,
    pub run: ActionProfile,
    pub attack: ActionProfile,
    pub attack_heavy: ActionProfile,
    pub skill1: ActionProfile,
    pub skill2: ActionProfile,
    pub dodge: ActionProfile,
    pub hurt: ActionProfile,
    pub dead: ActionProfile,
}

impl StateProfiles {
    pub fn get(&self, state: CombatState) -> ActionProfile {
        let profile = match state {
            CombatState::Idle => self.idle,
            CombatState::Run => self.run,
            CombatState::Attack => self.attack,
            CombatState::AttackHeavy => self.attack_heavy,
            CombatState::Skill1 => self.skill1,
            CombatState::Skill2 => self.skill2,
            CombatState::Dodge => self.dodge,
            CombatState::Hurt => self.hurt,
            CombatState::Dead => self.dead,
        };
        if profile.frames == 0 {
            debug_assert!(false, "zero-frame profile for {state:?}");
            return FALLBACK_PROFILE;
        }
        profile
    }
}

/// Damage record for one player strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStrike {
    pub damage: i32,
    pub range: f32,
    /// Inclusive frame interval during which the hitbox is live.
    pub window: (u32, u32),
    /// Hitbox centered on the player instead of facing-anchored.
    pub centered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStrikes {
    pub attack: PlayerStrike,
    pub attack_heavy: PlayerStrike,
    pub skill1: PlayerStrike,
    pub skill2: PlayerStrike,
}

impl PlayerStrikes {
    pub fn get(&self, state: CombatState) -> Option<PlayerStrike> {
        match state {
            CombatState::Attack => Some(self.attack),
            CombatState::AttackHeavy => Some(self.attack_heavy),
            CombatState::Skill1 => Some(self.skill1),
            CombatState::Skill2 => Some(self.skill2),
            _ => None,
        }
    }
}

/// Damage record for one boss strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossStrike {
    pub damage: i32,
    pub range: f32,
    pub knockback: f32,
    pub window: (u32, u32),
    /// Screen shake applied when the hit window opens.
    pub shake: f32,
    /// Horizontal speed while the window is active.
    pub advance: f32,
    /// Vertical impulse applied at decision time.
    pub jump_impulse: f32,
    pub centered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossStrikes {
    pub cleave: BossStrike,
    pub smash: BossStrike,
    pub dash: BossStrike,
    pub storm: BossStrike,
}

impl BossStrikes {
    pub fn get(&self, state: CombatState) -> Option<BossStrike> {
        match state {
            CombatState::Attack => Some(self.cleave),
            CombatState::AttackHeavy => Some(self.smash),
            CombatState::Skill1 => Some(self.dash),
            CombatState::Skill2 => Some(self.storm),
            _ => None,
        }
    }
}

/// Every data-driven number the combat loop consumes. Loaded from RON with
/// these defaults as the built-in fallback.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionTable {
    pub player: StateProfiles,
    pub boss: StateProfiles,
    pub player_strikes: PlayerStrikes,
    pub boss_strikes: BossStrikes,
}

impl ActionTable {
    pub fn profiles(&self, team: crate::combat::components::Team) -> &StateProfiles {
        match team {
            crate::combat::components::Team::Player => &self.player,
            crate::combat::components::Team::Enemy => &self.boss,
        }
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self {
            player: StateProfiles {
                idle: ActionProfile::new(4, 4.0, true),
                run: ActionProfile::new(8, 10.0, true),
                attack: ActionProfile::new(5, 12.0, false),
                attack_heavy: ActionProfile::new(7, 10.0, false),
                skill1: ActionProfile::new(7, 15.0, false),
                skill2: ActionProfile::new(12, 8.0, false),
                dodge: ActionProfile::new(4, 15.0, false),
                hurt: ActionProfile::new(3, 10.0, false),
                dead: ActionProfile::new(1, 1.0, false),
            },
            boss: StateProfiles {
                idle: ActionProfile::new(6, 6.0, true),
                run: ActionProfile::new(8, 6.0, true),
                attack: ActionProfile::new(30, 12.0, false),
                attack_heavy: ActionProfile::new(40, 10.0, false),
                skill1: ActionProfile::new(30, 15.0, false),
                skill2: ActionProfile::new(40, 12.0, false),
                dodge: ActionProfile::new(1, 1.0, false),
                hurt: ActionProfile::new(1, 10.0, false),
                dead: ActionProfile::new(1, 1.0, false),
            },
            player_strikes: PlayerStrikes {
                attack: PlayerStrike {
                    damage: 60,
                    range: 100.0,
                    window: (2, 4),
                    centered: false,
                },
                attack_heavy: PlayerStrike {
                    damage: 120,
                    range: 130.0,
                    window: (4, 6),
                    centered: false,
                },
                skill1: PlayerStrike {
                    damage: 90,
                    range: 150.0,
                    window: (2, 6),
                    centered: false,
                },
                skill2: PlayerStrike {
                    damage: 200,
                    range: 300.0,
                    window: (3, 5),
                    centered: true,
                },
            },
            boss_strikes: BossStrikes {
                cleave: BossStrike {
                    damage: 1,
                    range: 250.0,
                    knockback: 20.0,
                    window: (15, 20),
                    shake: 5.0,
                    advance: 5.0,
                    jump_impulse: 0.0,
                    centered: false,
                },
                smash: BossStrike {
                    damage: 2,
                    range: 300.0,
                    knockback: 30.0,
                    window: (20, 24),
                    shake: 15.0,
                    advance: 0.0,
                    jump_impulse: -12.0,
                    centered: false,
                },
                dash: BossStrike {
                    damage: 1,
                    range: 100.0,
                    knockback: 15.0,
                    window: (10, 20),
                    shake: 0.0,
                    advance: 25.0,
                    jump_impulse: 0.0,
                    centered: false,
                },
                storm: BossStrike {
                    damage: 1,
                    range: 600.0,
                    knockback: 5.0,
                    window: (15, 25),
                    shake: 8.0,
                    advance: 0.0,
                    jump_impulse: 0.0,
                    centered: true,
                },
            },
        }
    }
}
