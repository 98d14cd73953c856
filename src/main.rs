//! ink-duel: a frame-exact duel between the ink wanderer and the general.
//!
//! The binary drives the simulation headless at 60 Hz; rendering and input
//! capture belong to a host that feeds `IntentQueue`/`MoveHeld` and reads
//! `RenderSnapshot`.

mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod fx;
mod geometry;
mod movement;
mod snapshot;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::ecs::message::MessageWriter;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::core::{MatchFlags, SimSet, SimulationClock, SimulationPlugin};

/// One simulation tick at 60 Hz.
const TICK: Duration = Duration::from_micros(16_667);

fn main() {
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(TICK)))
        .add_plugins(LogPlugin::default())
        .add_plugins(SimulationPlugin)
        .add_systems(Update, exit_on_match_end.after(SimSet::Snapshot))
        .run();
}

/// Quit once the match is decided and the final hit-stop has played out.
fn exit_on_match_end(
    flags: Res<MatchFlags>,
    clock: Res<SimulationClock>,
    mut exit: MessageWriter<AppExit>,
) {
    if (flags.over || flags.won) && clock.hit_stop == 0 {
        exit.write(AppExit::Success);
    }
}
