//! Combat domain: components shared across combat systems.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marker for anything that fights (player and boss alike).
#[derive(Component, Debug)]
pub struct Combatant;

/// Marker for the boss combatant.
#[derive(Component, Debug)]
pub struct Boss;

/// Which side an entity fights for.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// Enemy archetype. Only `Boss` is spawned in a duel; the other kinds share
/// the same combat pipeline.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum EnemyKind {
    Grunt,
    Heavy,
    Boss,
}

/// Exclusive action state. At most one per combatant per tick.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum CombatState {
    #[default]
    Idle,
    Run,
    Attack,
    AttackHeavy,
    Skill1,
    Skill2,
    Dodge,
    Hurt,
    Dead,
}

impl CombatState {
    /// States that carry an active-hit window.
    pub fn is_attack(self) -> bool {
        matches!(
            self,
            CombatState::Attack | CombatState::AttackHeavy | CombatState::Skill1 | CombatState::Skill2
        )
    }

    /// States a new discrete action may cancel.
    pub fn interruptible(self) -> bool {
        matches!(self, CombatState::Idle | CombatState::Run)
    }
}

#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, clamped so health never goes below zero. Returns the
    /// amount actually dealt.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let dealt = amount.min(self.current);
        self.current -= dealt;
        dealt
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Per-target re-hit guard. While ticking, the same strike cannot connect
/// again; it also drives the target's hit flash on the render side.
#[derive(Component, Debug, Default)]
pub struct HitLock {
    pub ticks: u32,
}

impl HitLock {
    pub fn locked(&self) -> bool {
        self.ticks > 0
    }
}

/// Targets already struck by the attacker's current swing. Unlike the timed
/// `HitLock`, this cannot expire while the swing's window is still live; it
/// is cleared when a new attack starts.
#[derive(Component, Debug, Default)]
pub struct HitTargets {
    entities: Vec<Entity>,
}

impl HitTargets {
    pub fn record(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

/// Player skill cooldowns, in ticks.
#[derive(Component, Debug, Default)]
pub struct SkillCooldowns {
    pub skill1: u32,
    pub skill2: u32,
}

/// Ticks until the boss takes its next decision.
#[derive(Component, Debug, Default)]
pub struct AttackCooldown {
    pub ticks: u32,
}

/// Inclusive frame interval of the current strike's live hitbox.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ActiveWindow {
    pub start: u32,
    pub end: u32,
}

impl ActiveWindow {
    pub fn set(&mut self, window: (u32, u32)) {
        self.start = window.0;
        self.end = window.1;
    }

    pub fn contains(&self, frame: u32) -> bool {
        frame >= self.start && frame <= self.end
    }
}

/// Position in the current animation: the logical frame index and the ticks
/// accumulated toward the next advance.
#[derive(Component, Debug, Default)]
pub struct AnimationCursor {
    pub frame: u32,
    pub ticks: u32,
}

impl AnimationCursor {
    pub fn reset(&mut self) {
        self.frame = 0;
        self.ticks = 0;
    }
}
