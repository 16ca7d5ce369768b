//! Player movement system - applies input flags to the player

use crate::components::{Facing, InputState, Player, Vec2, WorldBounds};

/// Move the player one frame according to `input`.
///
/// Flags are applied in the order up, down, left, right; each active flag
/// moves the full speed along its axis and overwrites the facing, so the
/// last one processed wins. Diagonals are not normalised.
pub fn player_movement_system(player: &mut Player, input: &InputState, bounds: &WorldBounds) {
    let steps = [
        (input.up, Facing::Up, Vec2::new(0.0, -1.0)),
        (input.down, Facing::Down, Vec2::new(0.0, 1.0)),
        (input.left, Facing::Left, Vec2::new(-1.0, 0.0)),
        (input.right, Facing::Right, Vec2::new(1.0, 0.0)),
    ];

    for (active, facing, direction) in steps {
        if active {
            player.position += direction * player.speed;
            player.facing = facing;
        }
    }

    player.position = bounds.clamp(player.position, player.size);
}
