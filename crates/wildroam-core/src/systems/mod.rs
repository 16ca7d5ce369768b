//! Systems - logic that operates on components

mod camera;
mod capture;
mod creature_ai;
mod player;

pub use camera::*;
pub use capture::*;
pub use creature_ai::*;
pub use player::*;
