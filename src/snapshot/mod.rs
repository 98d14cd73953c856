//! Snapshot domain: read-only per-tick projection for render and UI hosts.

use bevy::prelude::*;

use crate::combat::components::{
    AnimationCursor, CombatState, Combatant, Health, HitLock, Team,
};
use crate::core::{MatchFlags, SimSet, SimulationClock};
use crate::fx::Particle;
use crate::movement::{Body, Facing};

/// One combatant as the render side sees it.
#[derive(Debug, Clone)]
pub struct EntityView {
    pub name: String,
    pub team: Team,
    pub pos: Vec2,
    pub size: Vec2,
    pub state: CombatState,
    pub facing: Facing,
    pub frame: u32,
    /// Remaining hit-lock ticks, usable as a hit flash.
    pub hit_flash: u32,
    pub health: i32,
    pub max_health: i32,
}

#[derive(Debug, Clone)]
pub struct ParticleView {
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
    /// Remaining fraction of the particle's lifetime, in [0, 1].
    pub life_fraction: f32,
}

/// Rebuilt at the end of every tick; hosts read, never write.
#[derive(Resource, Debug, Default)]
pub struct RenderSnapshot {
    pub frame: u64,
    pub shake: f32,
    pub invulnerability: u32,
    pub match_over: bool,
    pub match_won: bool,
    pub entities: Vec<EntityView>,
    pub particles: Vec<ParticleView>,
}

pub struct SnapshotPlugin;

impl Plugin for SnapshotPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RenderSnapshot>()
            .add_systems(Update, build_snapshot.in_set(SimSet::Snapshot));
    }
}

pub(crate) fn build_snapshot(
    clock: Res<SimulationClock>,
    flags: Res<MatchFlags>,
    mut snapshot: ResMut<RenderSnapshot>,
    combatants: Query<
        (
            &Name,
            &Team,
            &Body,
            &CombatState,
            &Facing,
            &AnimationCursor,
            &HitLock,
            &Health,
        ),
        With<Combatant>,
    >,
    particles: Query<&Particle>,
) {
    snapshot.frame = clock.frame;
    snapshot.shake = clock.shake;
    snapshot.invulnerability = clock.invulnerability;
    snapshot.match_over = flags.over;
    snapshot.match_won = flags.won;

    snapshot.entities.clear();
    for (name, team, body, state, facing, cursor, lock, health) in &combatants {
        snapshot.entities.push(EntityView {
            name: name.to_string(),
            team: *team,
            pos: body.pos,
            size: body.size,
            state: *state,
            facing: *facing,
            frame: cursor.frame,
            hit_flash: lock.ticks,
            health: health.current,
            max_health: health.max,
        });
    }

    snapshot.particles.clear();
    for particle in &particles {
        snapshot.particles.push(ParticleView {
            pos: particle.pos,
            size: particle.size,
            color: particle.color,
            life_fraction: (particle.life / particle.max_life).clamp(0.0, 1.0),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SimConfig, SimulationPlugin};
    use crate::movement::{ActionIntent, IntentQueue};

    fn sim_app() -> App {
        let mut app = App::new();
        app.insert_resource(SimConfig { seed: 0 });
        app.add_plugins(SimulationPlugin);
        app
    }

    #[test]
    fn test_snapshot_reflects_match_state() {
        let mut app = sim_app();
        app.update();

        let snapshot = app.world().resource::<RenderSnapshot>();
        assert_eq!(snapshot.frame, 1);
        assert_eq!(snapshot.entities.len(), 2);
        assert!(!snapshot.match_over);
        assert!(!snapshot.match_won);

        let player = snapshot
            .entities
            .iter()
            .find(|e| e.team == Team::Player)
            .unwrap();
        assert_eq!(player.name, "ink_wanderer");
        assert_eq!(player.health, 5);
        assert_eq!(player.max_health, 5);
        assert_eq!(player.state, CombatState::Idle);

        let boss = snapshot
            .entities
            .iter()
            .find(|e| e.team == Team::Enemy)
            .unwrap();
        assert_eq!(boss.name, "the_general");
        assert_eq!(boss.health, 2000);
    }

    #[test]
    fn test_snapshot_carries_particles() {
        let mut app = sim_app();
        app.update();
        app.world_mut()
            .resource_mut::<IntentQueue>()
            .push(ActionIntent::Jump);
        app.update();

        let snapshot = app.world().resource::<RenderSnapshot>();
        assert_eq!(snapshot.particles.len(), 3);
        for particle in &snapshot.particles {
            assert!(particle.life_fraction > 0.0);
            assert!(particle.life_fraction <= 1.0);
        }
    }
}
