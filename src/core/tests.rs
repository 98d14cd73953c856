//! Core domain: tests for the clock and match lifecycle.

use bevy::prelude::*;

use super::clock::SimulationClock;
use super::{MatchFlags, ResetMatch, SimConfig, SimulationPlugin};
use crate::combat::components::{AttackCooldown, Boss, CombatState, Health};
use crate::fx::{Particle, Soul};
use crate::movement::{ActionIntent, Body, IntentQueue, MoveHeld, Player};

fn sim_app(seed: u64) -> App {
    let mut app = App::new();
    app.insert_resource(SimConfig { seed });
    app.add_plugins(SimulationPlugin);
    app
}

fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.update();
    }
}

// -----------------------------------------------------------------------------
// SimulationClock tests
// -----------------------------------------------------------------------------

#[test]
fn test_clock_advances_frame_when_not_frozen() {
    let mut clock = SimulationClock::default();
    clock.advance();
    assert_eq!(clock.frame, 1);
    assert!(!clock.is_frozen());
    clock.advance();
    assert_eq!(clock.frame, 2);
}

#[test]
fn test_hit_stop_freezes_and_holds_frame() {
    let mut clock = SimulationClock::default();
    clock.advance();
    clock.hit_stop = 3;

    for _ in 0..3 {
        clock.advance();
        assert!(clock.is_frozen());
        assert_eq!(clock.frame, 1);
    }

    clock.advance();
    assert!(!clock.is_frozen());
    assert_eq!(clock.frame, 2);
    assert_eq!(clock.hit_stop, 0);
}

#[test]
fn test_shake_decays_and_snaps_to_zero() {
    let mut clock = SimulationClock::default();
    clock.shake = 10.0;
    clock.advance();
    assert!((clock.shake - 9.0).abs() < 1e-4);

    // Decay keeps running while frozen.
    clock.hit_stop = 1;
    clock.advance();
    assert!((clock.shake - 8.1).abs() < 1e-4);

    clock.shake = 0.55;
    clock.advance();
    assert_eq!(clock.shake, 0.0);
}

#[test]
fn test_invulnerability_only_ticks_while_unfrozen() {
    let mut clock = SimulationClock::default();
    clock.invulnerability = 5;
    clock.hit_stop = 2;

    clock.advance();
    clock.advance();
    assert_eq!(clock.invulnerability, 5);

    clock.advance();
    assert_eq!(clock.invulnerability, 4);
}

// -----------------------------------------------------------------------------
// Match lifecycle tests
// -----------------------------------------------------------------------------

#[test]
fn test_match_spawns_both_combatants() {
    let mut app = sim_app(0);
    app.update();

    let world = app.world_mut();
    let (health, state) = world
        .query_filtered::<(&Health, &CombatState), With<Player>>()
        .single(world)
        .unwrap();
    assert_eq!(health.current, 5);
    assert_eq!(*state, CombatState::Idle);

    let (health, cooldown) = world
        .query_filtered::<(&Health, &AttackCooldown), With<Boss>>()
        .single(world)
        .unwrap();
    assert_eq!(health.current, 2000);
    assert_eq!(cooldown.ticks, 89);
}

#[test]
fn test_reset_restores_initial_match_state() {
    let mut app = sim_app(7);
    tick(&mut app, 30);

    // Wreck the match state by hand.
    {
        let world = app.world_mut();
        let mut player = world
            .query_filtered::<&mut Health, With<Player>>()
            .single_mut(world)
            .unwrap();
        player.current = 1;
    }
    {
        let world = app.world_mut();
        let mut boss = world
            .query_filtered::<&mut Health, With<Boss>>()
            .single_mut(world)
            .unwrap();
        boss.current = 300;
    }
    app.world_mut().resource_mut::<SimulationClock>().shake = 15.0;
    app.world_mut().resource_mut::<MatchFlags>().over = true;
    app.world_mut()
        .resource_mut::<IntentQueue>()
        .push(ActionIntent::Attack);
    app.world_mut().resource_mut::<MoveHeld>().right = true;

    app.world_mut().write_message(ResetMatch);
    app.update();

    let world = app.world_mut();
    let (health, state, body) = world
        .query_filtered::<(&Health, &CombatState, &Body), With<Player>>()
        .single(world)
        .unwrap();
    assert_eq!(health.current, 5);
    assert_eq!(*state, CombatState::Idle);
    assert_eq!(body.pos, Vec2::new(150.0, 400.0));

    let (health, body, cooldown) = world
        .query_filtered::<(&Health, &Body, &AttackCooldown), With<Boss>>()
        .single(world)
        .unwrap();
    assert_eq!(health.current, 2000);
    assert_eq!(body.pos, Vec2::new(800.0, 320.0));
    assert_eq!(cooldown.ticks, 89);

    let flags = app.world().resource::<MatchFlags>();
    assert!(!flags.over);
    assert!(!flags.won);

    let clock = app.world().resource::<SimulationClock>();
    assert_eq!(clock.frame, 1);
    assert_eq!(clock.shake, 0.0);

    assert!(!app.world().resource::<MoveHeld>().right);
}

#[test]
fn test_reset_clears_particles_and_works_mid_freeze() {
    let mut app = sim_app(0);
    app.update();

    // A jump leaves landing dust behind.
    app.world_mut()
        .resource_mut::<IntentQueue>()
        .push(ActionIntent::Jump);
    app.update();
    let world = app.world_mut();
    let dust = world.query::<&Particle>().iter(world).count();
    assert!(dust > 0);

    app.world_mut().resource_mut::<SimulationClock>().hit_stop = 30;
    app.world_mut().write_message(ResetMatch);
    app.update();

    let world = app.world_mut();
    assert_eq!(world.query::<&Particle>().iter(world).count(), 0);
    assert_eq!(world.query::<&Soul>().iter(world).count(), 0);

    // The freeze is gone with the old clock; the new match runs immediately.
    let clock = app.world().resource::<SimulationClock>();
    assert_eq!(clock.hit_stop, 0);
    assert_eq!(clock.frame, 1);
}

#[test]
fn test_resets_are_repeatable() {
    let mut app = sim_app(3);
    for _ in 0..3 {
        tick(&mut app, 20);
        app.world_mut().write_message(ResetMatch);
        app.update();

        let world = app.world_mut();
        let healths: Vec<i32> = world
            .query::<&Health>()
            .iter(world)
            .map(|h| h.current)
            .collect();
        assert_eq!(healths.len(), 2);
        assert!(healths.contains(&5));
        assert!(healths.contains(&2000));
    }
}
