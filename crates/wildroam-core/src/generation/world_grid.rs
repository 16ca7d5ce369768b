//! Biome grid generation - a fixed trig "noise" field bucketed into biomes

use serde::{Deserialize, Serialize};

use crate::components::Color;

/// Frequency applied to tile coordinates before sampling the noise field
const NOISE_FREQUENCY: f32 = 0.05;

/// Terrain category of a tile. Affects render color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Grassland,
    Forest,
    Water,
    Mountain,
    Desert,
}

impl Biome {
    pub fn color(self) -> Color {
        match self {
            Biome::Grassland => Color::hex(0x2d5016),
            Biome::Forest => Color::hex(0x1a3a1a),
            Biome::Water => Color::hex(0x4a90e2),
            Biome::Mountain => Color::hex(0x8b7355),
            Biome::Desert => Color::hex(0xdaa520),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Biome::Grassland => "Grassland",
            Biome::Forest => "Forest",
            Biome::Water => "Water",
            Biome::Mountain => "Mountain",
            Biome::Desert => "Desert",
        }
    }

    /// Bucket a noise sample in [-1, 1] by descending threshold
    pub fn from_noise(noise: f32) -> Self {
        if noise > 0.5 {
            Biome::Forest
        } else if noise > 0.2 {
            Biome::Grassland
        } else if noise > -0.2 {
            Biome::Water
        } else if noise > -0.5 {
            Biome::Desert
        } else {
            Biome::Mountain
        }
    }
}

/// Noise value for tile (x, y)
pub fn tile_noise(x: usize, y: usize) -> f32 {
    (x as f32 * NOISE_FREQUENCY).sin() * (y as f32 * NOISE_FREQUENCY).cos()
}

/// Immutable row-major biome lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    columns: usize,
    rows: usize,
    tiles: Vec<Biome>,
}

impl WorldGrid {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Biome at tile (x, y), `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Biome> {
        if x < self.columns && y < self.rows {
            Some(self.tiles[y * self.columns + x])
        } else {
            None
        }
    }

    /// Count tiles per biome, mostly useful for diagnostics
    pub fn histogram(&self) -> Vec<(Biome, usize)> {
        let mut counts: Vec<(Biome, usize)> = Vec::new();
        for &biome in &self.tiles {
            match counts.iter_mut().find(|(b, _)| *b == biome) {
                Some((_, n)) => *n += 1,
                None => counts.push((biome, 1)),
            }
        }
        counts
    }
}

/// Build the biome grid for a world of `world_width` x `world_height` units.
pub fn generate_tile_map(world_width: f32, world_height: f32, tile_size: f32) -> WorldGrid {
    let columns = (world_width / tile_size) as usize;
    let rows = (world_height / tile_size) as usize;

    let mut tiles = Vec::with_capacity(columns * rows);
    for y in 0..rows {
        for x in 0..columns {
            tiles.push(Biome::from_noise(tile_noise(x, y)));
        }
    }

    WorldGrid {
        columns,
        rows,
        tiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_world_dimensions() {
        let grid = generate_tile_map(3000.0, 3000.0, 40.0);
        assert_eq!(grid.columns(), 75);
        assert_eq!(grid.rows(), 75);
        assert!(grid.get(74, 74).is_some());
        assert!(grid.get(75, 0).is_none());
        assert!(grid.get(0, 75).is_none());
    }

    #[test]
    fn test_origin_is_water() {
        let grid = generate_tile_map(3000.0, 3000.0, 40.0);
        assert_eq!(tile_noise(0, 0), 0.0);
        assert_eq!(grid.get(0, 0), Some(Biome::Water));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_tile_map(3000.0, 3000.0, 40.0);
        let b = generate_tile_map(3000.0, 3000.0, 40.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_threshold_buckets() {
        assert_eq!(Biome::from_noise(0.9), Biome::Forest);
        assert_eq!(Biome::from_noise(0.5), Biome::Grassland);
        assert_eq!(Biome::from_noise(0.2), Biome::Water);
        assert_eq!(Biome::from_noise(-0.2), Biome::Desert);
        assert_eq!(Biome::from_noise(-0.5), Biome::Mountain);
        assert_eq!(Biome::from_noise(-1.0), Biome::Mountain);
    }

    #[test]
    fn test_cells_match_noise_function() {
        let grid = generate_tile_map(3000.0, 3000.0, 40.0);
        for (x, y) in [(31, 0), (31, 60), (10, 10), (62, 3)] {
            assert_eq!(grid.get(x, y), Some(Biome::from_noise(tile_noise(x, y))));
        }
        // sin(31 * 0.05) is close to 1 and cos(0) is 1
        assert_eq!(grid.get(31, 0), Some(Biome::Forest));
    }

    #[test]
    fn test_histogram_sums_to_tile_count() {
        let grid = generate_tile_map(400.0, 200.0, 40.0);
        let total: usize = grid.histogram().iter().map(|(_, n)| n).sum();
        assert_eq!(total, 10 * 5);
    }
}
