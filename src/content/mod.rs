//! Content domain: data-driven action table and its RON loader.

pub mod data;
pub mod loader;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::Path;

pub use data::{ActionTable, ActionProfile, BossStrike, PlayerStrike};
pub use loader::{ContentLoadError, load_action_table};

const ACTION_TABLE_PATH: &str = "assets/data/actions.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    match load_action_table(Path::new(ACTION_TABLE_PATH)) {
        Ok(table) => {
            info!("loaded action table from {ACTION_TABLE_PATH}");
            commands.insert_resource(table);
        }
        Err(e) => {
            warn!("{e}; using built-in action table");
            commands.insert_resource(ActionTable::default());
        }
    }
}
