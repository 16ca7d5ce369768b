//! Capture mechanic - proximity check plus a rarity-weighted roll

use hecs::{Entity, World};
use rand::Rng;

use crate::components::{Creature, CreatureKind, Position, Rarity, SpawnOrder, Vec2};

/// Result of one capture attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// No creature within catch range, nothing happened
    NothingInRange,
    /// A creature was targeted but the roll failed; it stays in the world
    Escaped { entity: Entity, kind: CreatureKind },
    /// The creature was removed and the tally incremented
    Caught {
        entity: Entity,
        kind: CreatureKind,
        total: u32,
    },
}

impl CaptureOutcome {
    pub fn is_caught(&self) -> bool {
        matches!(self, CaptureOutcome::Caught { .. })
    }
}

/// First creature in population order strictly within `catch_range` of
/// `player_pos`. This is not the nearest one.
pub fn find_capture_target(
    world: &World,
    player_pos: Vec2,
    catch_range: f32,
) -> Option<(Entity, CreatureKind)> {
    let mut candidates: Vec<(SpawnOrder, Entity, CreatureKind, Vec2)> = world
        .query::<(&Creature, &Position, &SpawnOrder)>()
        .iter()
        .map(|(entity, (creature, pos, order))| (*order, entity, creature.kind, pos.0))
        .collect();
    candidates.sort_by_key(|(order, ..)| *order);

    candidates
        .into_iter()
        .find(|(_, _, _, pos)| pos.distance(&player_pos) < catch_range)
        .map(|(_, entity, kind, _)| (entity, kind))
}

/// Single draw in [0, 1) against the rarity's success rate
pub fn roll_capture(rarity: Rarity, rng: &mut impl Rng) -> bool {
    rng.gen::<f32>() < rarity.success_rate()
}

/// Try to catch the first creature in range of the player.
pub fn attempt_capture(
    world: &mut World,
    player_pos: Vec2,
    catch_range: f32,
    caught: &mut u32,
    rng: &mut impl Rng,
) -> CaptureOutcome {
    let Some((entity, kind)) = find_capture_target(world, player_pos, catch_range) else {
        log::debug!("No creature within {} units", catch_range);
        return CaptureOutcome::NothingInRange;
    };

    let template = kind.template();
    if !roll_capture(template.rarity, rng) {
        log::debug!("Catch failed! The creature escaped.");
        return CaptureOutcome::Escaped { entity, kind };
    }

    if world.despawn(entity).is_err() {
        return CaptureOutcome::NothingInRange;
    }
    *caught += 1;
    log::info!("Caught {}! Total: {}", template.name, caught);

    CaptureOutcome::Caught {
        entity,
        kind,
        total: *caught,
    }
}
