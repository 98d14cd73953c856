//! Fx domain: short-lived ink, blood, and energy particles.

pub(crate) mod systems;


use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::SimSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Ink,
    Blood,
    Spark,
    Energy,
}

impl ParticleKind {
    pub fn color(self) -> Color {
        match self {
            ParticleKind::Ink | ParticleKind::Spark => Color::srgb_u8(0x1c, 0x1c, 0x1c),
            ParticleKind::Blood => Color::srgb_u8(0x8a, 0x1c, 0x1c),
            ParticleKind::Energy => Color::srgb_u8(0xd4, 0xaf, 0x37),
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    pub color: Color,
    pub kind: ParticleKind,
}

/// Marks a particle exempt from decay (the player's soul).
#[derive(Component, Debug)]
pub struct Soul;

/// Rng stream for particle scatter, kept separate from the AI stream so
/// visual effects never perturb decision reproducibility.
#[derive(Resource)]
pub struct FxRng(pub ChaCha8Rng);

impl FxRng {
    pub fn random(&mut self) -> f32 {
        self.0.random()
    }
}

/// Scatter shape of one burst.
#[derive(Debug, Clone, Copy)]
pub struct BurstParams {
    /// Velocities are uniform in ±speed on each axis.
    pub speed: f32,
    /// Sizes are uniform in [2, size + 2].
    pub size: f32,
    pub life: f32,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            speed: 4.0,
            size: 4.0,
            life: 1.0,
        }
    }
}

/// Spawn `count` particles scattered around `at`.
pub fn burst(
    commands: &mut Commands,
    rng: &mut ChaCha8Rng,
    at: Vec2,
    kind: ParticleKind,
    count: u32,
    params: BurstParams,
) {
    for _ in 0..count {
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * params.speed * 2.0,
            (rng.random::<f32>() - 0.5) * params.speed * 2.0,
        );
        let size = rng.random::<f32>() * params.size + 2.0;
        commands.spawn(Particle {
            pos: at,
            vel,
            life: params.life,
            max_life: params.life,
            size,
            color: kind.color(),
            kind,
        });
    }
}

pub struct FxPlugin;

impl Plugin for FxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::seed_fx_rng)
            .add_systems(Update, systems::update_particles.in_set(SimSet::Fx));
    }
}
