//! Core domain: the simulation clock that gates every tick.

use bevy::prelude::*;

/// Shake magnitude multiplier applied once per tick.
const SHAKE_DECAY: f32 = 0.9;
/// Below this magnitude the shake snaps to zero.
const SHAKE_SNAP: f32 = 0.5;

/// Process-wide timing state for one match.
///
/// Hit-stop freezes the whole simulation for a number of ticks; shake decays
/// every tick regardless (it is visual-only); the global invulnerability
/// counter protects the player from boss damage while it runs.
#[derive(Resource, Debug, Default, Clone)]
pub struct SimulationClock {
    /// Monotonic tick counter. Only advances on unfrozen ticks.
    pub frame: u64,
    /// Ticks of full freeze remaining.
    pub hit_stop: u32,
    /// Screen-shake magnitude, decaying toward zero.
    pub shake: f32,
    /// Ticks during which the player cannot take boss damage.
    pub invulnerability: u32,
    frozen: bool,
}

impl SimulationClock {
    /// Advance the clock by one tick and decide whether this tick is frozen.
    ///
    /// A freeze decided here holds for the whole tick; hit-stop set later in
    /// the same tick only takes effect from the next tick on.
    pub fn advance(&mut self) {
        self.shake *= SHAKE_DECAY;
        if self.shake < SHAKE_SNAP {
            self.shake = 0.0;
        }

        if self.hit_stop > 0 {
            self.hit_stop -= 1;
            self.frozen = true;
            return;
        }

        self.frozen = false;
        self.frame += 1;
        if self.invulnerability > 0 {
            self.invulnerability -= 1;
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

pub(crate) fn advance_clock(mut clock: ResMut<SimulationClock>) {
    clock.advance();
}

/// Run condition for everything hit-stop suspends.
pub(crate) fn sim_unfrozen(clock: Res<SimulationClock>) -> bool {
    !clock.is_frozen()
}
