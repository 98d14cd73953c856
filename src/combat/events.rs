//! Combat domain: messages other systems and hosts can observe.

use bevy::ecs::message::Message;

/// The boss's strike connected with the player this tick.
#[derive(Debug, Clone, Copy)]
pub struct PlayerStruck {
    pub damage: i32,
}

impl Message for PlayerStruck {}

/// A player strike connected with the boss this tick.
#[derive(Debug, Clone, Copy)]
pub struct BossStruck {
    pub damage: i32,
}

impl Message for BossStruck {}

/// The player's health reached zero.
#[derive(Debug, Clone, Copy)]
pub struct PlayerDefeated;

impl Message for PlayerDefeated {}

/// The boss's health reached zero.
#[derive(Debug, Clone, Copy)]
pub struct BossDefeated;

impl Message for BossDefeated {}
