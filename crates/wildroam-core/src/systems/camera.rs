//! Camera - follows the player, never shows area outside the world

use serde::{Deserialize, Serialize};

use crate::components::{Player, Size, Vec2, WorldBounds};

/// World-space offset of the viewport's top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub offset: Vec2,
}

impl Camera {
    /// Convert a world-space point to viewport coordinates
    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        point - self.offset
    }
}

/// Centre the viewport on the player, clamped to the world
pub fn follow_player(player: &Player, viewport: Size, bounds: &WorldBounds) -> Camera {
    let centred = player.position - viewport.half() + player.size.half();
    Camera {
        offset: bounds.clamp(centred, viewport),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: WorldBounds = WorldBounds::new(3000.0, 3000.0);
    const VIEWPORT: Size = Size::new(1280.0, 600.0);

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), Size::new(30.0, 40.0), 3.0, 100)
    }

    #[test]
    fn test_centres_on_player() {
        let camera = follow_player(&player_at(1500.0, 1500.0), VIEWPORT, &BOUNDS);
        assert_eq!(camera.offset, Vec2::new(1500.0 - 640.0 + 15.0, 1500.0 - 300.0 + 20.0));
    }

    #[test]
    fn test_clamped_at_corners() {
        let camera = follow_player(&player_at(0.0, 0.0), VIEWPORT, &BOUNDS);
        assert_eq!(camera.offset, Vec2::ZERO);

        let camera = follow_player(&player_at(2970.0, 2960.0), VIEWPORT, &BOUNDS);
        assert_eq!(camera.offset, Vec2::new(3000.0 - 1280.0, 3000.0 - 600.0));
    }

    #[test]
    fn test_to_screen() {
        let camera = Camera {
            offset: Vec2::new(100.0, 50.0),
        };
        assert_eq!(camera.to_screen(Vec2::new(150.0, 60.0)), Vec2::new(50.0, 10.0));
    }
}
