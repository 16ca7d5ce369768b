//! Wildlife population generation

use hecs::{Entity, World};
use rand::Rng;

use crate::components::*;

/// Spawn a single creature at `origin`, which also becomes its home.
pub fn spawn_creature(
    world: &mut World,
    kind: CreatureKind,
    origin: Vec2,
    velocity: Vec2,
    roam_radius: f32,
    order: u32,
) -> Entity {
    let template = kind.template();
    world.spawn((
        Creature::new(kind),
        Position(origin),
        Velocity(velocity),
        Home::new(origin, roam_radius),
        Health(template.health),
        SpawnOrder(order),
    ))
}

/// Scatter `count` creatures of uniformly random species across the world.
///
/// Spawn points are drawn so the whole body starts inside `bounds`; the
/// spawn point doubles as the creature's home.
pub fn generate_creatures(
    world: &mut World,
    count: u32,
    bounds: WorldBounds,
    roam_radius: f32,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    let mut entities = Vec::with_capacity(count as usize);

    for order in 0..count {
        let kind = CreatureKind::random(rng);
        let size = kind.template().size;

        let max_x = (bounds.width - size.width).max(0.0);
        let max_y = (bounds.height - size.height).max(0.0);
        let origin = Vec2::new(rng.gen::<f32>() * max_x, rng.gen::<f32>() * max_y);
        let velocity = random_heading(rng);

        entities.push(spawn_creature(world, kind, origin, velocity, roam_radius, order));
    }

    entities
}

/// Velocity with each component uniform in [-1, 1)
pub fn random_heading(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_creatures() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = WorldBounds::new(3000.0, 3000.0);

        let creatures = generate_creatures(&mut world, 50, bounds, 200.0, &mut rng);
        assert_eq!(creatures.len(), 50);

        for (i, entity) in creatures.iter().enumerate() {
            let creature = world.get::<&Creature>(*entity).unwrap();
            let pos = world.get::<&Position>(*entity).unwrap();
            let vel = world.get::<&Velocity>(*entity).unwrap();
            let home = world.get::<&Home>(*entity).unwrap();
            let order = world.get::<&SpawnOrder>(*entity).unwrap();
            let health = world.get::<&Health>(*entity).unwrap();

            assert!(bounds.contains(pos.0, creature.template().size));
            assert_eq!(home.origin, pos.0);
            assert_eq!(home.roam_radius, 200.0);
            assert!((-1.0..1.0).contains(&vel.0.x));
            assert!((-1.0..1.0).contains(&vel.0.y));
            assert_eq!(order.0, i as u32);
            assert_eq!(health.0, creature.template().health);
        }
    }

    #[test]
    fn test_same_seed_same_population() {
        let bounds = WorldBounds::new(3000.0, 3000.0);
        let snapshot = |seed: u64| {
            let mut world = World::new();
            let mut rng = StdRng::seed_from_u64(seed);
            generate_creatures(&mut world, 20, bounds, 200.0, &mut rng)
                .into_iter()
                .map(|e| {
                    let kind = world.get::<&Creature>(e).unwrap().kind;
                    let pos = world.get::<&Position>(e).unwrap().0;
                    (kind, pos)
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(snapshot(11), snapshot(11));
        assert_ne!(snapshot(11), snapshot(12));
    }
}
