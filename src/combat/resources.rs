//! Combat domain: tuning knobs for the damage loop.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    /// Re-hit guard placed on a struck target.
    pub hit_lock: u32,
    /// Hit-stop when a player strike connects.
    pub strike_hit_stop: u32,
    /// Hit-stop when the player gets hurt.
    pub hurt_hit_stop: u32,
    /// Player invulnerability after getting hurt.
    pub hurt_invulnerability: u32,
    /// Shake added when the player gets hurt.
    pub hurt_shake: f32,
    /// Vertical pop applied with knockback.
    pub hurt_launch: f32,
    pub skill1_cooldown: u32,
    pub skill2_cooldown: u32,
    /// Forward burst speed entering skill1.
    pub skill1_lunge: f32,
    /// Boss pause after an attack animation completes.
    pub boss_recovery: u32,
    pub boss_death_hit_stop: u32,
    pub boss_death_shake: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            hit_lock: 20,
            strike_hit_stop: 4,
            hurt_hit_stop: 10,
            hurt_invulnerability: 120,
            hurt_shake: 10.0,
            hurt_launch: -10.0,
            skill1_cooldown: 300,
            skill2_cooldown: 900,
            skill1_lunge: 15.0,
            boss_recovery: 80,
            boss_death_hit_stop: 60,
            boss_death_shake: 20.0,
        }
    }
}
