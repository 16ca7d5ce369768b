//! Generation - one-shot creation of the biome grid and wildlife population.

mod creatures;
mod world_grid;

pub use creatures::*;
pub use world_grid::*;
