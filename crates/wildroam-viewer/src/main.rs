//! WildRoam Viewer - Bevy window, keyboard controls and gizmo rendering
//!
//! Usage:
//!   cargo run -p wildroam-viewer
//!   cargo run -p wildroam-viewer -- path/to/config.json
//!
//! Controls: WASD / arrow keys to move, Space to catch, E to interact.

use bevy::prelude::*;
use bevy::window::WindowResized;
use wildroam_core::prelude::{
    render_frame, Color as SimColor, DrawSurface, GameConfig, InputState, Rect,
    SimulationEngine, Vec2 as SimVec2,
};

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let engine = match SimulationEngine::new(config.clone()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to start simulation: {}", e);
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "WildRoam".to_string(),
                resolution: (config.viewport_width, config.viewport_height).into(),
                present_mode: bevy::window::PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb_u8(0x87, 0xce, 0xeb)))
        .insert_resource(SimWrapper(engine))
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                resize_viewport,
                read_movement_keys,
                handle_triggers,
                update_simulation,
                render_world,
                update_status_text,
            )
                .chain(),
        )
        .run();
}

#[derive(Resource)]
struct SimWrapper(SimulationEngine);

// Marker component for the status line
#[derive(Component)]
struct StatusText;

fn setup(mut commands: Commands, sim: Res<SimWrapper>) {
    commands.spawn(Camera2d::default());

    commands.spawn((
        Text2d::new("X: 0  Y: 0  Caught: 0"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_xyz(0.0, 0.0, 100.0),
        StatusText,
    ));

    info!(
        "Spawned {} creatures in a {}x{} world",
        sim.0.creature_count(),
        sim.0.config().world_width,
        sim.0.config().world_height
    );
}

fn resize_viewport(mut events: EventReader<WindowResized>, mut sim: ResMut<SimWrapper>) {
    if let Some(event) = events.read().last() {
        sim.0.set_viewport(event.width, event.height);
    }
}

fn read_movement_keys(keyboard: Res<ButtonInput<KeyCode>>, mut sim: ResMut<SimWrapper>) {
    let held = |a: KeyCode, b: KeyCode| keyboard.pressed(a) || keyboard.pressed(b);

    sim.0.set_input(InputState {
        up: held(KeyCode::KeyW, KeyCode::ArrowUp),
        down: held(KeyCode::KeyS, KeyCode::ArrowDown),
        left: held(KeyCode::KeyA, KeyCode::ArrowLeft),
        right: held(KeyCode::KeyD, KeyCode::ArrowRight),
    });
}

fn handle_triggers(keyboard: Res<ButtonInput<KeyCode>>, mut sim: ResMut<SimWrapper>) {
    if keyboard.just_pressed(KeyCode::Space) {
        sim.0.attempt_capture();
    }
    if keyboard.just_pressed(KeyCode::KeyE) {
        sim.0.interact();
    }
}

fn update_simulation(mut sim: ResMut<SimWrapper>) {
    sim.0.tick();
}

fn render_world(sim: Res<SimWrapper>, mut clear_color: ResMut<ClearColor>, mut gizmos: Gizmos) {
    let viewport = sim.0.viewport();
    let mut surface = GizmoSurface {
        gizmos: &mut gizmos,
        clear_color: &mut *clear_color,
        half_viewport: Vec2::new(viewport.width / 2.0, viewport.height / 2.0),
    };
    render_frame(&sim.0, &mut surface);
}

fn update_status_text(
    sim: Res<SimWrapper>,
    mut query: Query<(&mut Text2d, &mut Transform), With<StatusText>>,
) {
    let status = sim.0.status();
    let viewport = sim.0.viewport();

    for (mut text, mut transform) in &mut query {
        **text = format!("X: {}  Y: {}  Caught: {}", status.x, status.y, status.caught);
        // Pin to the top-left corner of the window
        transform.translation.x = -viewport.width / 2.0 + 110.0;
        transform.translation.y = viewport.height / 2.0 - 20.0;
    }
}

/// `DrawSurface` over Bevy gizmos.
///
/// The core hands over viewport coordinates (origin top-left, y down); the
/// 2D camera sits at the world origin with y up, so points are re-centred
/// and flipped here. Gizmos only draw outlines, and line width comes from
/// the gizmo config rather than per call.
struct GizmoSurface<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    clear_color: &'a mut ClearColor,
    half_viewport: Vec2,
}

impl GizmoSurface<'_, '_, '_> {
    fn to_bevy(&self, point: SimVec2) -> Vec2 {
        Vec2::new(point.x - self.half_viewport.x, self.half_viewport.y - point.y)
    }
}

fn to_bevy_color(color: SimColor) -> Color {
    Color::srgba_u8(color.r, color.g, color.b, color.a)
}

impl DrawSurface for GizmoSurface<'_, '_, '_> {
    fn clear(&mut self, color: SimColor) {
        let color = to_bevy_color(color);
        if self.clear_color.0 != color {
            self.clear_color.0 = color;
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: SimColor) {
        let center = self.to_bevy(rect.center());
        self.gizmos.rect_2d(
            Isometry2d::from_translation(center),
            Vec2::new(rect.width, rect.height),
            to_bevy_color(color),
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: SimColor, _line_width: f32) {
        let center = self.to_bevy(rect.center());
        self.gizmos.rect_2d(
            Isometry2d::from_translation(center),
            Vec2::new(rect.width, rect.height),
            to_bevy_color(color),
        );
    }

    fn stroke_circle(&mut self, center: SimVec2, radius: f32, color: SimColor, _line_width: f32) {
        let center = self.to_bevy(center);
        self.gizmos.circle_2d(
            Isometry2d::from_translation(center),
            radius,
            to_bevy_color(color),
        );
    }
}
