//! Debug tooling for fast iteration (feature `dev-tools`).
//!
//! Echoes combat messages and logs a periodic tick summary so a headless run
//! is observable without a renderer.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::components::{Boss, CombatState, Health};
use crate::combat::events::{BossDefeated, BossStruck, PlayerDefeated, PlayerStruck};
use crate::core::{SimSet, SimulationClock};
use crate::movement::{Body, Player};

/// Ticks between summary lines.
const SUMMARY_INTERVAL: u64 = 60;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (echo_combat_messages, log_tick_summary).after(SimSet::Snapshot),
        );
    }
}

fn echo_combat_messages(
    mut player_struck: MessageReader<PlayerStruck>,
    mut boss_struck: MessageReader<BossStruck>,
    mut player_defeated: MessageReader<PlayerDefeated>,
    mut boss_defeated: MessageReader<BossDefeated>,
) {
    for msg in player_struck.read() {
        debug!("player took {} damage", msg.damage);
    }
    for msg in boss_struck.read() {
        debug!("boss took {} damage", msg.damage);
    }
    if player_defeated.read().count() > 0 {
        debug!("match over: defeat");
    }
    if boss_defeated.read().count() > 0 {
        debug!("match over: victory");
    }
}

fn log_tick_summary(
    clock: Res<SimulationClock>,
    players: Query<(&Body, &CombatState, &Health), With<Player>>,
    bosses: Query<(&Body, &CombatState, &Health), With<Boss>>,
) {
    if clock.frame == 0 || clock.frame % SUMMARY_INTERVAL != 0 || clock.is_frozen() {
        return;
    }
    let (Ok(player), Ok(boss)) = (players.single(), bosses.single()) else {
        return;
    };
    debug!(
        "t={} player {:?} hp {} @({:.0},{:.0}) | boss {:?} hp {} @({:.0},{:.0})",
        clock.frame,
        player.1,
        player.2.current,
        player.0.pos.x,
        player.0.pos.y,
        boss.1,
        boss.2.current,
        boss.0.pos.x,
        boss.0.pos.y,
    );
}
