//! Simulation engine - owns all mutable game state and advances it a frame at a time

use hecs::World;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::*;
use crate::config::{ConfigError, GameConfig};
use crate::generation::{generate_creatures, generate_tile_map, WorldGrid};
use crate::systems::*;

/// Values the host shows in its status bar each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReadout {
    /// Player x, floored
    pub x: i32,
    /// Player y, floored
    pub y: i32,
    pub caught: u32,
}

/// Main simulation context
pub struct SimulationEngine {
    /// ECS world holding the wildlife population
    pub world: World,
    /// Biome grid, generated once
    pub grid: WorldGrid,
    pub player: Player,
    /// Recomputed every tick from the player position
    pub camera: Camera,
    /// Directional flags, written by the host between ticks
    pub input: InputState,

    config: GameConfig,
    viewport: Size,
    creatures_caught: u32,
    frame: u64,
    rng: StdRng,
}

impl SimulationEngine {
    /// Build the world, scatter the wildlife and place the player.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let bounds = config.bounds();
        let grid = generate_tile_map(config.world_width, config.world_height, config.tile_size);

        let mut world = World::new();
        generate_creatures(
            &mut world,
            config.creature_count,
            bounds,
            config.roam_radius,
            &mut rng,
        );

        let viewport = config.viewport();
        let player_size = config.player_size();
        let start = bounds.clamp(viewport.half(), player_size);
        let player = Player::new(start, player_size, config.player_speed, config.player_health);
        let camera = follow_player(&player, viewport, &bounds);

        log::info!(
            "Generated {}x{} world ({}x{} tiles) with {} creatures",
            config.world_width,
            config.world_height,
            grid.columns(),
            grid.rows(),
            config.creature_count
        );

        Ok(Self {
            world,
            grid,
            player,
            camera,
            input: InputState::default(),
            config,
            viewport,
            creatures_caught: 0,
            frame: 0,
            rng,
        })
    }

    /// Advance the simulation by one frame and return the status readout.
    ///
    /// Order: player movement and clamp, camera, creature AI.
    pub fn tick(&mut self) -> StatusReadout {
        let bounds = self.config.bounds();

        player_movement_system(&mut self.player, &self.input, &bounds);
        self.camera = follow_player(&self.player, self.viewport, &bounds);

        let roam = RoamParams {
            wander_chance: self.config.wander_chance,
            homing_strength: self.config.homing_strength,
            bounds,
        };
        creature_ai_system(&mut self.world, &roam, &mut self.rng);

        self.frame += 1;
        self.status()
    }

    /// Replace the input flags read by the next tick
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Capture trigger (space bar / catch button)
    pub fn attempt_capture(&mut self) -> CaptureOutcome {
        attempt_capture(
            &mut self.world,
            self.player.position,
            self.config.catch_range,
            &mut self.creatures_caught,
            &mut self.rng,
        )
    }

    /// Interact trigger. Reserved for inspecting creatures; only logs for now.
    pub fn interact(&self) {
        log::info!("Interacting with the environment...");
    }

    /// Resize the viewport (e.g. when the window changes size).
    ///
    /// Each dimension is kept within [1, world dimension]. A non-finite
    /// dimension leaves the current one in place.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        let width = if width.is_finite() { width } else { self.viewport.width };
        let height = if height.is_finite() { height } else { self.viewport.height };
        self.viewport = Size::new(
            width.clamp(1.0, self.config.world_width),
            height.clamp(1.0, self.config.world_height),
        );
        self.camera = follow_player(&self.player, self.viewport, &self.config.bounds());
    }

    pub fn status(&self) -> StatusReadout {
        StatusReadout {
            x: self.player.position.x.floor() as i32,
            y: self.player.position.y.floor() as i32,
            caught: self.creatures_caught,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn bounds(&self) -> WorldBounds {
        self.config.bounds()
    }

    pub fn creatures_caught(&self) -> u32 {
        self.creatures_caught
    }

    /// Number of ticks run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Count creatures still roaming
    pub fn creature_count(&self) -> usize {
        self.world.query::<&Creature>().iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> SimulationEngine {
        SimulationEngine::new(GameConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn test_engine_creation() {
        let engine = seeded(1);
        assert_eq!(engine.creature_count(), 50);
        assert_eq!(engine.creatures_caught(), 0);
        assert_eq!(engine.frame(), 0);
        assert_eq!(engine.grid.columns(), 75);
        assert_eq!(engine.player.position, Vec2::new(640.0, 300.0));
        assert_eq!(engine.player.facing, Facing::Down);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig {
            tile_size: 0.0,
            ..Default::default()
        };
        assert!(SimulationEngine::new(config).is_err());
    }

    #[test]
    fn test_tick_moves_player_and_reports() {
        let mut engine = seeded(2);
        engine.set_input(InputState::none().with(Facing::Right));

        let status = engine.tick();

        assert_eq!(status, StatusReadout { x: 643, y: 300, caught: 0 });
        assert_eq!(engine.player.facing, Facing::Right);
        assert_eq!(engine.frame(), 1);
    }

    #[test]
    fn test_same_seed_same_simulation() {
        let mut a = seeded(5);
        let mut b = seeded(5);
        for _ in 0..100 {
            a.tick();
            b.tick();
        }

        let positions = |engine: &SimulationEngine| {
            let mut all: Vec<(u32, Vec2)> = engine
                .world
                .query::<(&Position, &SpawnOrder)>()
                .iter()
                .map(|(_, (pos, order))| (order.0, pos.0))
                .collect();
            all.sort_by_key(|(order, _)| *order);
            all
        };
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn test_set_viewport_clamps_to_world() {
        let mut engine = seeded(3);
        engine.set_viewport(10_000.0, 0.0);
        assert_eq!(engine.viewport(), Size::new(3000.0, 1.0));
        assert_eq!(engine.camera.offset.x, 0.0);
    }

    #[test]
    fn test_set_viewport_ignores_non_finite() {
        let mut engine = seeded(3);
        engine.set_viewport(f32::NAN, 500.0);
        assert_eq!(engine.viewport(), Size::new(1280.0, 500.0));

        engine.set_viewport(800.0, f32::INFINITY);
        assert_eq!(engine.viewport(), Size::new(800.0, 500.0));

        let offset = engine.camera.offset;
        assert!(offset.x.is_finite() && offset.y.is_finite());
        assert!(offset.x >= 0.0 && offset.x <= 3000.0 - 800.0);
        assert!(offset.y >= 0.0 && offset.y <= 3000.0 - 500.0);
    }

    #[test]
    fn test_capture_with_nothing_nearby() {
        let config = GameConfig {
            creature_count: 0,
            ..GameConfig::default().with_seed(4)
        };
        let mut engine = SimulationEngine::new(config).unwrap();
        assert_eq!(engine.attempt_capture(), CaptureOutcome::NothingInRange);
        assert_eq!(engine.creatures_caught(), 0);
    }
}
