//! Core domain: match lifecycle, tick phases, and the simulation clock.

pub mod clock;
pub(crate) mod systems;

#[cfg(test)]
mod tests;

use bevy::ecs::message::Message;
use bevy::prelude::*;

pub use clock::SimulationClock;

/// Tick phases, chained in `Update`. One `App::update()` is one tick.
///
/// `Reset` and `Snapshot` always run; everything in between is suspended
/// while the clock is frozen by hit-stop.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Reset,
    Clock,
    Input,
    Physics,
    Combat,
    Ai,
    Fx,
    Snapshot,
}

/// Host-provided match configuration. Insert before the first update to
/// override; both rng streams derive from the seed.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimConfig {
    pub seed: u64,
}

/// Terminal outcome flags. Once set they only clear on a match reset.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MatchFlags {
    pub over: bool,
    pub won: bool,
}

/// Spawn data for the two combatants of a match.
#[derive(Resource, Debug, Clone)]
pub struct MatchProfile {
    pub player_start: Vec2,
    pub player_size: Vec2,
    pub player_health: i32,
    pub boss_start: Vec2,
    pub boss_size: Vec2,
    pub boss_health: i32,
    /// Ticks before the boss takes its first decision.
    pub boss_first_decision: u32,
}

impl Default for MatchProfile {
    fn default() -> Self {
        Self {
            player_start: Vec2::new(150.0, 400.0),
            player_size: Vec2::new(50.0, 100.0),
            player_health: 5,
            boss_start: Vec2::new(800.0, 320.0),
            boss_size: Vec2::new(140.0, 180.0),
            boss_health: 2000,
            boss_first_decision: 90,
        }
    }
}

/// Request a full match restart. Handled at the top of the next tick.
#[derive(Debug, Clone, Copy)]
pub struct ResetMatch;

impl Message for ResetMatch {}

/// Everything the simulation needs, minus the driver loop. Tests add this to
/// a bare `App` and step `app.update()` once per tick.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CorePlugin,
            crate::content::ContentPlugin,
            crate::movement::MovementPlugin,
            crate::combat::CombatPlugin,
            crate::fx::FxPlugin,
            crate::snapshot::SnapshotPlugin,
        ));
        #[cfg(feature = "dev-tools")]
        app.add_plugins(crate::debug::DebugPlugin);
    }
}

pub(crate) struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimConfig>()
            .init_resource::<SimulationClock>()
            .init_resource::<MatchFlags>()
            .init_resource::<MatchProfile>()
            .add_message::<ResetMatch>()
            .configure_sets(
                Update,
                (
                    SimSet::Reset,
                    SimSet::Clock,
                    SimSet::Input,
                    SimSet::Physics,
                    SimSet::Combat,
                    SimSet::Ai,
                    SimSet::Fx,
                    SimSet::Snapshot,
                )
                    .chain(),
            )
            .configure_sets(Update, SimSet::Input.run_if(clock::sim_unfrozen))
            .configure_sets(Update, SimSet::Physics.run_if(clock::sim_unfrozen))
            .configure_sets(Update, SimSet::Combat.run_if(clock::sim_unfrozen))
            .configure_sets(Update, SimSet::Ai.run_if(clock::sim_unfrozen))
            .configure_sets(Update, SimSet::Fx.run_if(clock::sim_unfrozen))
            .add_systems(Startup, systems::setup_match)
            .add_systems(
                Update,
                (
                    systems::handle_reset.in_set(SimSet::Reset),
                    clock::advance_clock.in_set(SimSet::Clock),
                ),
            );
    }
}
