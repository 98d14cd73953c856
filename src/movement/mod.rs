//! Movement domain: kinematics, facing, and the player input surfaces.

pub(crate) mod systems;


use bevy::prelude::*;

use crate::core::SimSet;

/// Marker for the player-controlled combatant.
#[derive(Component, Debug)]
pub struct Player;

/// Position, velocity, and box size of a combatant. Positions anchor the
/// top-left corner; y grows downward.
#[derive(Component, Debug, Clone)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    pub fn rect(&self) -> crate::geometry::Rect {
        crate::geometry::Rect::from_corner(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Standing on (or within a small tolerance of) the ground plane.
    pub fn grounded(&self, tuning: &ArenaTuning) -> bool {
        (self.pos.y - (tuning.ground_y - self.size.y)).abs() < 5.0
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Continuous movement input, sampled every tick while held.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MoveHeld {
    pub left: bool,
    pub right: bool,
}

/// A discrete player action, queued by the host and applied in order at the
/// start of the next unfrozen tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionIntent {
    Attack,
    AttackHeavy,
    Skill1,
    Skill2,
    DodgeLeft,
    DodgeRight,
    Jump,
}

#[derive(Resource, Debug, Default)]
pub struct IntentQueue {
    pub(crate) actions: Vec<ActionIntent>,
}

impl IntentQueue {
    pub fn push(&mut self, intent: ActionIntent) {
        self.actions.push(intent);
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}

/// World and locomotion constants.
#[derive(Resource, Debug, Clone)]
pub struct ArenaTuning {
    pub gravity: f32,
    pub ground_y: f32,
    pub width: f32,
    pub player_speed: f32,
    pub dodge_speed: f32,
    pub jump_impulse: f32,
    pub boss_run_speed: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            ground_y: 500.0,
            width: 1024.0,
            player_speed: 4.0,
            dodge_speed: 12.0,
            jump_impulse: -15.0,
            boss_run_speed: 3.6,
        }
    }
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaTuning>()
            .init_resource::<MoveHeld>()
            .init_resource::<IntentQueue>()
            .add_systems(
                Update,
                (
                    systems::apply_player_locomotion,
                    systems::drive_boss_velocity,
                    systems::integrate_bodies,
                )
                    .chain()
                    .in_set(SimSet::Physics),
            );
    }
}
