//! Combat domain: combatant spawning.

use bevy::prelude::*;

use crate::core::MatchProfile;
use crate::movement::{Body, Facing, Player};

use super::components::*;

/// Spawn both combatants of a duel. Used at startup and on match reset.
pub(crate) fn spawn_match(commands: &mut Commands, profile: &MatchProfile) {
    commands.spawn((
        Name::new("ink_wanderer"),
        Player,
        Combatant,
        Team::Player,
        Body::new(profile.player_start, profile.player_size),
        Facing::Right,
        CombatState::Idle,
        Health::new(profile.player_health),
        HitLock::default(),
        HitTargets::default(),
        SkillCooldowns::default(),
        ActiveWindow::default(),
        AnimationCursor::default(),
    ));

    commands.spawn((
        Name::new("the_general"),
        Boss,
        Combatant,
        Team::Enemy,
        EnemyKind::Boss,
        Body::new(profile.boss_start, profile.boss_size),
        Facing::Left,
        CombatState::Idle,
        Health::new(profile.boss_health),
        HitLock::default(),
        AttackCooldown {
            ticks: profile.boss_first_decision,
        },
        ActiveWindow::default(),
        AnimationCursor::default(),
    ));
}
