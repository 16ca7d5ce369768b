//! WildRoam Core - top-down wildlife exploration simulation
//!
//! A player roams a tile-based world, watches wandering wildlife and tries
//! to catch creatures with a rarity-weighted roll.
//!
//! # Architecture
//!
//! - **Generation**: the biome grid and the wildlife population, built once
//! - **Components**: pure data (`Position`, `Velocity`, `Home`, `Player`, ...)
//! - **Systems**: per-frame logic (player movement, camera, creature AI, capture)
//! - **Engine**: `SimulationEngine` owns all mutable state and runs one frame per `tick()`
//! - **Render**: `render_frame` turns a frame into calls on a host-provided `DrawSurface`
//!
//! Wildlife lives in a `hecs` world; every random draw goes through the
//! engine's seeded RNG so a session is reproducible from its config.
//!
//! # Example
//!
//! ```rust,no_run
//! use wildroam_core::prelude::*;
//!
//! let mut engine = SimulationEngine::new(GameConfig::default()).unwrap();
//!
//! loop {
//!     engine.set_input(InputState::none().with(Facing::Right));
//!     let status = engine.tick();
//!     if status.x > 1000 {
//!         engine.attempt_capture();
//!     }
//! }
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod generation;
pub mod render;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::{ConfigError, GameConfig};
    pub use crate::engine::{SimulationEngine, StatusReadout};
    pub use crate::generation::{Biome, WorldGrid};
    pub use crate::render::{render_frame, DrawSurface, Rect, VisibleRegion};
    pub use crate::systems::{CaptureOutcome, Camera};
}
