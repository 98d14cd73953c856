//! Fx domain: per-tick particle motion and decay.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::SimConfig;

use super::{FxRng, Particle, Soul};

/// Light pull so debris arcs instead of flying straight.
const PARTICLE_GRAVITY: f32 = 0.1;
/// Life lost per tick; a default burst lives 50 ticks.
const DECAY: f32 = 0.02;

pub(crate) fn seed_fx_rng(mut commands: Commands, config: Res<SimConfig>) {
    commands.insert_resource(FxRng(ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(1))));
}

pub(crate) fn update_particles(
    mut commands: Commands,
    mut particles: Query<(Entity, &mut Particle), Without<Soul>>,
) {
    for (entity, mut particle) in &mut particles {
        let vel = particle.vel;
        particle.pos += vel;
        particle.vel.y += PARTICLE_GRAVITY;
        particle.life -= DECAY;
        // Repeated f32 subtraction can leave a sliver above zero after the
        // final decrement; treat anything within epsilon as expired.
        if particle.life <= f32::EPSILON {
            commands.entity(entity).despawn();
        }
    }
}
