//! Creature AI - random walk with a soft pull back towards home

use hecs::World;
use rand::Rng;

use crate::components::{Creature, Home, Position, Vec2, Velocity, WorldBounds};
use crate::generation::random_heading;

/// Per-session knobs for the roaming behaviour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoamParams {
    /// Chance per frame of picking a fresh heading
    pub wander_chance: f32,
    pub homing_strength: f32,
    pub bounds: WorldBounds,
}

/// Advance every creature by one frame
pub fn creature_ai_system(world: &mut World, params: &RoamParams, rng: &mut impl Rng) {
    for (_, (creature, pos, vel, home)) in
        world.query_mut::<(&Creature, &mut Position, &mut Velocity, &Home)>()
    {
        step_creature(creature, &mut pos.0, &mut vel.0, home, params, rng);
    }
}

/// One frame of roaming for a single creature.
///
/// Velocity survives the boundary clamp untouched, so a creature heading
/// into a wall keeps pressing against it until it rolls a new heading or
/// the homing pull turns it around.
pub fn step_creature(
    creature: &Creature,
    pos: &mut Vec2,
    vel: &mut Vec2,
    home: &Home,
    params: &RoamParams,
    rng: &mut impl Rng,
) {
    let template = creature.template();

    if rng.gen::<f32>() < params.wander_chance {
        *vel = random_heading(rng);
    }

    if pos.distance(&home.origin) > home.roam_radius {
        *vel += (home.origin - *pos) * params.homing_strength;
    }

    *pos += *vel * template.speed;
    *pos = params.bounds.clamp(*pos, template.size);
}
