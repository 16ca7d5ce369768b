//! Player-related components: Player, Facing, InputState

use serde::{Deserialize, Serialize};

use super::common::{Size, Vec2};

/// Direction the player last moved in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Directional flags written by the host between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    pub fn set(&mut self, facing: Facing, pressed: bool) {
        match facing {
            Facing::Up => self.up = pressed,
            Facing::Down => self.down = pressed,
            Facing::Left => self.left = pressed,
            Facing::Right => self.right = pressed,
        }
    }

    pub fn with(mut self, facing: Facing) -> Self {
        self.set(facing, true);
        self
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in world units
    pub position: Vec2,
    pub size: Size,
    /// Units moved per frame on each active axis
    pub speed: f32,
    pub health: u32,
    pub facing: Facing,
}

impl Player {
    pub fn new(position: Vec2, size: Size, speed: f32, health: u32) -> Self {
        Self {
            position,
            size,
            speed,
            health,
            facing: Facing::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_set() {
        let mut input = InputState::none();
        assert!(input.is_idle());

        input.set(Facing::Left, true);
        assert!(input.left);
        assert!(!input.is_idle());

        input.set(Facing::Left, false);
        assert!(input.is_idle());
    }

    #[test]
    fn test_player_faces_down_initially() {
        let player = Player::new(Vec2::ZERO, Size::new(30.0, 40.0), 3.0, 100);
        assert_eq!(player.facing, Facing::Down);
    }
}
