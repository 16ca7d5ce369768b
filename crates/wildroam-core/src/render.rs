//! Render step - turns the current frame into draw calls on a [`DrawSurface`].
//!
//! The core never touches a window. Hosts implement [`DrawSurface`] over
//! whatever they draw with (gizmos, a canvas, a test recorder) and call
//! [`render_frame`] after each tick. All coordinates handed to the surface
//! are in viewport space: origin at the top-left, y growing down.

use crate::components::{Color, Creature, Player, Position, SpawnOrder, Vec2};
use crate::engine::SimulationEngine;
use crate::systems::Camera;

const SKY: Color = Color::hex(0x87ceeb);
const TILE_BORDER: Color = Color::hex(0x333333);
const TILE_BORDER_WIDTH: f32 = 0.5;
const PLAYER_BODY: Color = Color::hex(0xff6b6b);
const CATCH_RADIUS: Color = Color::rgba(255, 200, 0, 128);
const CATCH_RADIUS_WIDTH: f32 = 2.0;

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Drawing backend used by [`render_frame`]
pub trait DrawSurface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);
}

/// Which part of the world is on screen this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRegion {
    /// First visible tile column / row (inclusive)
    pub start_x: usize,
    pub start_y: usize,
    /// One past the last visible tile column / row
    pub end_x: usize,
    pub end_y: usize,
}

impl VisibleRegion {
    pub fn from_camera(
        camera: &Camera,
        viewport_width: f32,
        viewport_height: f32,
        tile: f32,
    ) -> Self {
        let origin = camera.offset;
        Self {
            start_x: (origin.x / tile).floor().max(0.0) as usize,
            start_y: (origin.y / tile).floor().max(0.0) as usize,
            end_x: ((origin.x + viewport_width) / tile).ceil().max(0.0) as usize,
            end_y: ((origin.y + viewport_height) / tile).ceil().max(0.0) as usize,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.end_x.saturating_sub(self.start_x) * self.end_y.saturating_sub(self.start_y)
    }
}

/// Draw the whole frame: sky, visible tiles, creatures, player, catch radius.
pub fn render_frame(engine: &SimulationEngine, surface: &mut impl DrawSurface) -> VisibleRegion {
    let camera = engine.camera;
    let viewport = engine.viewport();
    let tile = engine.config().tile_size;

    surface.clear(SKY);

    let region = VisibleRegion::from_camera(&camera, viewport.width, viewport.height, tile);
    for ty in region.start_y..region.end_y {
        for tx in region.start_x..region.end_x {
            let Some(biome) = engine.grid.get(tx, ty) else {
                continue;
            };
            let world = Vec2::new(tx as f32 * tile, ty as f32 * tile);
            let screen = camera.to_screen(world);
            let rect = Rect::new(screen.x, screen.y, tile, tile);
            surface.fill_rect(rect, biome.color());
            surface.stroke_rect(rect, TILE_BORDER, TILE_BORDER_WIDTH);
        }
    }

    let mut creatures: Vec<(SpawnOrder, Creature, Vec2)> = engine
        .world
        .query::<(&Creature, &Position, &SpawnOrder)>()
        .iter()
        .map(|(_, (creature, pos, order))| (*order, *creature, pos.0))
        .collect();
    creatures.sort_by_key(|(order, ..)| *order);

    for (_, creature, pos) in creatures {
        draw_creature(surface, &camera, &creature, pos);
    }

    draw_player(surface, &camera, &engine.player);

    surface.stroke_circle(
        viewport.half(),
        engine.config().catch_range,
        CATCH_RADIUS,
        CATCH_RADIUS_WIDTH,
    );

    region
}

fn draw_creature(surface: &mut impl DrawSurface, camera: &Camera, creature: &Creature, pos: Vec2) {
    let template = creature.template();
    let at = camera.to_screen(pos);
    let w = template.size.width;

    surface.fill_rect(Rect::new(at.x, at.y, w, template.size.height), template.color);
    surface.fill_rect(Rect::new(at.x + 5.0, at.y + 5.0, 5.0, 5.0), Color::BLACK);
    surface.fill_rect(Rect::new(at.x + w - 10.0, at.y + 5.0, 5.0, 5.0), Color::BLACK);
}

fn draw_player(surface: &mut impl DrawSurface, camera: &Camera, player: &Player) {
    let at = camera.to_screen(player.position);
    let (w, h) = (player.size.width, player.size.height);

    surface.fill_rect(Rect::new(at.x, at.y, w, h), PLAYER_BODY);

    // eyes, then pupils
    surface.fill_rect(Rect::new(at.x + 5.0, at.y + 5.0, 8.0, 8.0), Color::WHITE);
    surface.fill_rect(Rect::new(at.x + w - 13.0, at.y + 5.0, 8.0, 8.0), Color::WHITE);
    surface.fill_rect(Rect::new(at.x + 7.0, at.y + 7.0, 4.0, 4.0), Color::BLACK);
    surface.fill_rect(Rect::new(at.x + w - 11.0, at.y + 7.0, 4.0, 4.0), Color::BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear(Color),
        Fill(Rect, Color),
        Stroke(Rect, Color),
        Circle(Vec2, f32, Color),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<DrawCall>,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self, color: Color) {
            self.calls.push(DrawCall::Clear(color));
        }
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(DrawCall::Fill(rect, color));
        }
        fn stroke_rect(&mut self, rect: Rect, color: Color, _line_width: f32) {
            self.calls.push(DrawCall::Stroke(rect, color));
        }
        fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, _line_width: f32) {
            self.calls.push(DrawCall::Circle(center, radius, color));
        }
    }

    fn engine(creature_count: u32) -> SimulationEngine {
        let config = GameConfig {
            creature_count,
            seed: Some(6),
            ..Default::default()
        };
        SimulationEngine::new(config).unwrap()
    }

    #[test]
    fn test_visible_region_at_origin() {
        let camera = Camera::default();
        let region = VisibleRegion::from_camera(&camera, 1280.0, 600.0, 40.0);
        assert_eq!(
            region,
            VisibleRegion {
                start_x: 0,
                start_y: 0,
                end_x: 32,
                end_y: 15
            }
        );
        assert_eq!(region.tile_count(), 32 * 15);
    }

    #[test]
    fn test_visible_region_partial_tiles() {
        let camera = Camera {
            offset: Vec2::new(50.0, 10.0),
        };
        let region = VisibleRegion::from_camera(&camera, 100.0, 100.0, 40.0);
        assert_eq!((region.start_x, region.end_x), (1, 4));
        assert_eq!((region.start_y, region.end_y), (0, 3));
    }

    #[test]
    fn test_frame_draw_order() {
        let engine = engine(0);
        let mut recorder = Recorder::default();

        let region = render_frame(&engine, &mut recorder);

        assert_eq!(recorder.calls.first(), Some(&DrawCall::Clear(SKY)));
        let strokes = recorder
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Stroke(..)))
            .count();
        assert_eq!(strokes, region.tile_count());

        // Camera sits at (15, 20), so the player lands at (625, 280) on screen.
        // Body, four eye rects, then the catch radius last.
        let n = recorder.calls.len();
        assert_eq!(
            recorder.calls[n - 6],
            DrawCall::Fill(Rect::new(625.0, 280.0, 30.0, 40.0), PLAYER_BODY)
        );
        assert_eq!(
            recorder.calls[n - 1],
            DrawCall::Circle(Vec2::new(640.0, 300.0), 80.0, CATCH_RADIUS)
        );
    }

    #[test]
    fn test_each_creature_drawn_with_eyes() {
        let engine = engine(7);
        let mut recorder = Recorder::default();
        render_frame(&engine, &mut recorder);

        let black_fills = recorder
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Fill(_, color) if *color == Color::BLACK))
            .count();
        // two eyes per creature plus the player's two pupils
        assert_eq!(black_fills, 7 * 2 + 2);
    }

    #[test]
    fn test_tiles_are_offset_by_camera() {
        let mut engine = engine(0);
        engine.player.position = Vec2::new(1500.0, 1500.0);
        engine.tick();
        let mut recorder = Recorder::default();
        render_frame(&engine, &mut recorder);

        let offset = engine.camera.offset;
        let first_tile = recorder
            .calls
            .iter()
            .find_map(|c| match c {
                DrawCall::Fill(rect, _) => Some(*rect),
                _ => None,
            })
            .unwrap();
        let tx = (offset.x / 40.0).floor();
        let ty = (offset.y / 40.0).floor();
        assert_eq!(first_tile.x, tx * 40.0 - offset.x);
        assert_eq!(first_tile.y, ty * 40.0 - offset.y);
    }
}
