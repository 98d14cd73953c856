//! Core domain: match setup and reset.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::ai::boss::AiRng;
use crate::combat::components::Combatant;
use crate::combat::spawn::spawn_match;
use crate::fx::{FxRng, Particle};
use crate::movement::{IntentQueue, MoveHeld};

use super::{MatchFlags, MatchProfile, ResetMatch, SimulationClock};

pub(crate) fn setup_match(mut commands: Commands, profile: Res<MatchProfile>) {
    spawn_match(&mut commands, &profile);
    info!(
        "match started: player {} hp vs boss {} hp",
        profile.player_health, profile.boss_health
    );
}

/// Tears down and respawns the whole match. Runs before the clock so the
/// first tick of the new match starts from a clean slate, even mid-freeze.
pub(crate) fn handle_reset(
    mut commands: Commands,
    mut requests: MessageReader<ResetMatch>,
    config: Res<super::SimConfig>,
    profile: Res<MatchProfile>,
    mut clock: ResMut<SimulationClock>,
    mut flags: ResMut<MatchFlags>,
    mut intents: ResMut<IntentQueue>,
    mut held: ResMut<MoveHeld>,
    mut ai_rng: ResMut<AiRng>,
    mut fx_rng: ResMut<FxRng>,
    live: Query<Entity, Or<(With<Combatant>, With<Particle>)>>,
) {
    if requests.read().count() == 0 {
        return;
    }

    for entity in &live {
        commands.entity(entity).despawn();
    }

    *clock = SimulationClock::default();
    *flags = MatchFlags::default();
    *held = MoveHeld::default();
    intents.clear();
    ai_rng.0 = ChaCha8Rng::seed_from_u64(config.seed);
    fx_rng.0 = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(1));

    spawn_match(&mut commands, &profile);
    info!("match reset");
}
