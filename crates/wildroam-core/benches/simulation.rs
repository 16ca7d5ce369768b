use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wildroam_core::generation::generate_tile_map;
use wildroam_core::prelude::*;

struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear(&mut self, _color: Color) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn stroke_rect(&mut self, _rect: Rect, _color: Color, _line_width: f32) {}
    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _line_width: f32) {}
}

fn bench_tick(c: &mut Criterion) {
    let config = GameConfig::default().with_seed(1);
    let mut engine = SimulationEngine::new(config).expect("default config is valid");
    engine.set_input(InputState::none().with(Facing::Right));

    c.bench_function("tick_50_creatures", |b| b.iter(|| black_box(engine.tick())));
}

fn bench_render(c: &mut Criterion) {
    let engine = SimulationEngine::new(GameConfig::default().with_seed(1))
        .expect("default config is valid");

    c.bench_function("render_frame", |b| {
        b.iter(|| render_frame(black_box(&engine), &mut NullSurface))
    });
}

fn bench_tile_map(c: &mut Criterion) {
    c.bench_function("generate_tile_map_3000", |b| {
        b.iter(|| generate_tile_map(black_box(3000.0), black_box(3000.0), 40.0))
    });
}

criterion_group!(benches, bench_tick, bench_render, bench_tile_map);
criterion_main!(benches);
