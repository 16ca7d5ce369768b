//! Component definitions for the simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems.

mod common;
mod player;
mod wildlife;

pub use common::*;
pub use player::*;
pub use wildlife::*;
