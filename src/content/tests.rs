//! Content domain: tests for the action table and its loader.

use std::path::Path;

use super::data::{ActionTable, FALLBACK_PROFILE};
use super::loader::load_action_table;
use crate::combat::components::{CombatState, Team};

// -----------------------------------------------------------------------------
// Default table tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_player_strikes() {
    let table = ActionTable::default();
    let attack = table.player_strikes.attack;
    assert_eq!(attack.damage, 60);
    assert_eq!(attack.range, 100.0);
    assert_eq!(attack.window, (2, 4));
    assert!(!attack.centered);

    let skill2 = table.player_strikes.skill2;
    assert_eq!(skill2.damage, 200);
    assert!(skill2.centered);
}

#[test]
fn test_default_boss_strikes() {
    let table = ActionTable::default();
    assert_eq!(table.boss_strikes.smash.jump_impulse, -12.0);
    assert_eq!(table.boss_strikes.smash.window, (20, 24));
    assert_eq!(table.boss_strikes.dash.advance, 25.0);
    assert_eq!(table.boss_strikes.storm.range, 600.0);
    assert!(table.boss_strikes.storm.centered);
}

#[test]
fn test_strike_lookup_covers_attack_states_only() {
    let table = ActionTable::default();
    for state in [
        CombatState::Attack,
        CombatState::AttackHeavy,
        CombatState::Skill1,
        CombatState::Skill2,
    ] {
        assert!(table.player_strikes.get(state).is_some());
        assert!(table.boss_strikes.get(state).is_some());
    }
    for state in [
        CombatState::Idle,
        CombatState::Run,
        CombatState::Dodge,
        CombatState::Hurt,
        CombatState::Dead,
    ] {
        assert!(table.player_strikes.get(state).is_none());
        assert!(table.boss_strikes.get(state).is_none());
    }
}

#[test]
fn test_profile_timing() {
    let table = ActionTable::default();
    let idle = table.profiles(Team::Player).get(CombatState::Idle);
    assert_eq!(idle.ticks_per_frame(), 15.0);
    assert!(idle.looping);

    let cleave = table.profiles(Team::Enemy).get(CombatState::Attack);
    assert_eq!(cleave.frames, 30);
    assert_eq!(cleave.ticks_per_frame(), 5.0);
    assert!(!cleave.looping);
}

#[test]
fn test_fallback_profile_is_sane() {
    assert!(FALLBACK_PROFILE.frames > 0);
    assert!(FALLBACK_PROFILE.frame_rate > 0.0);
    assert!(!FALLBACK_PROFILE.looping);
}

// -----------------------------------------------------------------------------
// Loader tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_table_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/actions.ron");
    let table = load_action_table(&path).expect("actions.ron should parse");
    assert_eq!(table, ActionTable::default());
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_action_table(Path::new("no/such/actions.ron")).unwrap_err();
    assert!(err.file.contains("no/such/actions.ron"));
    assert!(err.message.contains("IO error"));
    assert!(err.to_string().contains("Failed to load"));
}
