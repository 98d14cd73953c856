//! Combat domain: states, health, strikes, and the boss AI.

pub mod ai;
pub mod components;
pub mod events;
pub mod resources;
pub(crate) mod spawn;
pub(crate) mod systems;


use bevy::prelude::*;

use crate::core::SimSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<resources::CombatTuning>()
            .init_resource::<ai::boss::AiTuning>()
            .add_message::<events::PlayerStruck>()
            .add_message::<events::BossStruck>()
            .add_message::<events::PlayerDefeated>()
            .add_message::<events::BossDefeated>()
            .add_systems(Startup, ai::boss::seed_ai_rng)
            .add_systems(
                Update,
                (
                    (systems::tick_cooldowns, systems::apply_player_intents)
                        .chain()
                        .in_set(SimSet::Input),
                    systems::advance_animations
                        .in_set(SimSet::Physics)
                        .after(crate::movement::systems::integrate_bodies),
                    (
                        systems::resolve_player_strikes,
                        systems::resolve_boss_strikes,
                        systems::process_deaths,
                    )
                        .chain()
                        .in_set(SimSet::Combat),
                    ai::boss::update_boss_ai.in_set(SimSet::Ai),
                ),
            );
    }
}
