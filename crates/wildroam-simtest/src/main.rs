//! WildRoam Headless Simulation Harness
//!
//! Validates the simulation core without a window or GPU.
//! Runs entirely in-process: generation, frame loop, capture odds.
//!
//! Usage:
//!   cargo run -p wildroam-simtest
//!   cargo run -p wildroam-simtest -- --verbose
//!   cargo run -p wildroam-simtest -- --frames 10000 --config path/to/config.json

use rand::rngs::StdRng;
use rand::SeedableRng;
use wildroam_core::generation::generate_tile_map;
use wildroam_core::prelude::*;
use wildroam_core::systems::roll_capture;

const DEFAULT_FRAMES: u64 = 600;
const CAPTURE_TRIALS: u32 = 20_000;
const CAPTURE_TOLERANCE: f32 = 0.02;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

struct Options {
    verbose: bool,
    frames: u64,
    config_path: Option<String>,
}

fn parse_options() -> Result<Options, String> {
    let mut options = Options {
        verbose: false,
        frames: DEFAULT_FRAMES,
        config_path: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" => options.verbose = true,
            "--frames" => {
                let value = args.next().ok_or("--frames needs a value")?;
                options.frames = value
                    .parse()
                    .map_err(|_| format!("invalid frame count: {}", value))?;
            }
            "--config" => {
                options.config_path = Some(args.next().ok_or("--config needs a path")?);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(options)
}

fn main() {
    let options = match parse_options() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: wildroam-simtest [--verbose] [--frames N] [--config PATH]");
            std::process::exit(2);
        }
    };

    let default_filter = if options.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    println!("=== WildRoam Simulation Harness ===\n");

    let base = match &options.config_path {
        Some(path) => match GameConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    // Harness runs must be repeatable
    let config = match base.seed {
        Some(_) => base,
        None => base.with_seed(42),
    };

    let verbose = options.verbose;
    let mut results = Vec::new();

    // 1. Configuration
    results.extend(validate_config(&config, verbose));

    // 2. World grid generation
    results.extend(validate_world_grid(&config, verbose));

    // 3. Wildlife population
    results.extend(validate_population(&config, verbose));

    // 4. Frame loop bounds sweep
    results.extend(validate_frame_loop(&config, options.frames, verbose));

    // 5. Camera clamping
    results.extend(validate_camera(&config, verbose));

    // 6. Capture odds per rarity
    results.extend(validate_capture_odds(verbose));

    // 7. Capture scenario
    results.extend(validate_capture_scenario(&config, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn start_engine(config: &GameConfig, results: &mut Vec<TestResult>) -> Option<SimulationEngine> {
    match SimulationEngine::new(config.clone()) {
        Ok(engine) => Some(engine),
        Err(e) => {
            results.push(TestResult {
                name: "engine_start".into(),
                passed: false,
                detail: e.to_string(),
            });
            None
        }
    }
}

// ── 1. Configuration ────────────────────────────────────────────────────

fn validate_config(config: &GameConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Configuration ---");
    let mut results = Vec::new();

    let valid = config.validate();
    results.push(TestResult {
        name: "config_valid".into(),
        passed: valid.is_ok(),
        detail: match &valid {
            Ok(()) => format!(
                "{}x{} world, {} creatures, seed {:?}",
                config.world_width, config.world_height, config.creature_count, config.seed
            ),
            Err(e) => e.to_string(),
        },
    });

    // Config survives a JSON round trip unchanged
    let round_trip = serde_json::to_string(config)
        .map_err(|e| e.to_string())
        .and_then(|json| GameConfig::from_json_str(&json).map_err(|e| e.to_string()));
    results.push(TestResult {
        name: "config_json_round_trip".into(),
        passed: round_trip.as_ref().map(|c| c == config).unwrap_or(false),
        detail: match &round_trip {
            Ok(_) => "serialized config parses back identically".into(),
            Err(e) => e.clone(),
        },
    });

    let broken = GameConfig {
        tile_size: 0.0,
        ..config.clone()
    };
    results.push(TestResult {
        name: "config_rejects_zero_tile".into(),
        passed: broken.validate().is_err(),
        detail: "tile_size 0 must be rejected".into(),
    });

    if verbose {
        if let Ok(pretty) = serde_json::to_string_pretty(config) {
            println!("{}", pretty);
        }
    }

    results
}

// ── 2. World grid ───────────────────────────────────────────────────────

fn validate_world_grid(config: &GameConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- World Grid ---");
    let mut results = Vec::new();

    let grid = generate_tile_map(config.world_width, config.world_height, config.tile_size);
    let (columns, rows) = config.tiles();

    results.push(TestResult {
        name: "grid_dimensions".into(),
        passed: grid.columns() == columns && grid.rows() == rows,
        detail: format!("{}x{} tiles", grid.columns(), grid.rows()),
    });

    results.push(TestResult {
        name: "grid_origin_is_water".into(),
        passed: grid.get(0, 0) == Some(Biome::Water),
        detail: format!("tile (0,0) = {:?}", grid.get(0, 0)),
    });

    let again = generate_tile_map(config.world_width, config.world_height, config.tile_size);
    results.push(TestResult {
        name: "grid_deterministic".into(),
        passed: grid == again,
        detail: "two generations produce identical grids".into(),
    });

    let histogram = grid.histogram();
    let counted: usize = histogram.iter().map(|(_, n)| n).sum();
    results.push(TestResult {
        name: "grid_histogram_total".into(),
        passed: counted == columns * rows,
        detail: histogram
            .iter()
            .map(|(biome, n)| format!("{} {}", biome.name(), n))
            .collect::<Vec<_>>()
            .join(", "),
    });

    let out_of_range = grid.get(columns, 0).is_none() && grid.get(0, rows).is_none();
    results.push(TestResult {
        name: "grid_out_of_range_empty".into(),
        passed: out_of_range,
        detail: "lookups past the last column/row return None".into(),
    });

    if verbose {
        for (biome, n) in &histogram {
            println!("  {:<9} {:>5} tiles  {}", biome.name(), n, biome.color().to_hex_string());
        }
    }

    results
}

// ── 3. Wildlife population ──────────────────────────────────────────────

fn validate_population(config: &GameConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Wildlife Population ---");
    let mut results = Vec::new();

    let Some(engine) = start_engine(config, &mut results) else {
        return results;
    };

    results.push(TestResult {
        name: "population_count".into(),
        passed: engine.creature_count() == config.creature_count as usize,
        detail: format!(
            "{} spawned, {} configured",
            engine.creature_count(),
            config.creature_count
        ),
    });

    let bounds = engine.bounds();
    let mut per_kind = [0usize; 5];
    let mut misplaced = 0;
    let mut bad_health = 0;
    for (_, (creature, pos, home, health)) in engine
        .world
        .query::<(&Creature, &Position, &Home, &Health)>()
        .iter()
    {
        per_kind[creature.kind as usize] += 1;
        if !bounds.contains(pos.0, creature.template().size) || pos.0 != home.origin {
            misplaced += 1;
        }
        if health.0 != creature.template().health {
            bad_health += 1;
        }
    }

    results.push(TestResult {
        name: "population_spawn_positions".into(),
        passed: misplaced == 0,
        detail: format!("{} creatures outside bounds or away from home", misplaced),
    });

    results.push(TestResult {
        name: "population_template_health".into(),
        passed: bad_health == 0,
        detail: format!("{} creatures with non-template health", bad_health),
    });

    let mut orders: Vec<u32> = engine
        .world
        .query::<&SpawnOrder>()
        .iter()
        .map(|(_, order)| order.0)
        .collect();
    orders.sort_unstable();
    let expected: Vec<u32> = (0..config.creature_count).collect();
    results.push(TestResult {
        name: "population_spawn_order".into(),
        passed: orders == expected,
        detail: "spawn order is 0..count with no gaps".into(),
    });

    if verbose {
        for kind in CreatureKind::ALL {
            let template = kind.template();
            println!(
                "  {:<7} {:>3}  ({}, speed {}, hp {})",
                template.name,
                per_kind[kind as usize],
                template.rarity.name(),
                template.speed,
                template.health
            );
        }
    }

    results
}

// ── 4. Frame loop ───────────────────────────────────────────────────────

/// Input pattern cycling through all eight directions
fn scripted_input(frame: u64) -> InputState {
    let none = InputState::none();
    match (frame / 150) % 8 {
        0 => none.with(Facing::Up),
        1 => none.with(Facing::Up).with(Facing::Right),
        2 => none.with(Facing::Right),
        3 => none.with(Facing::Down).with(Facing::Right),
        4 => none.with(Facing::Down),
        5 => none.with(Facing::Down).with(Facing::Left),
        6 => none.with(Facing::Left),
        _ => none.with(Facing::Up).with(Facing::Left),
    }
}

fn validate_frame_loop(config: &GameConfig, frames: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Frame Loop ({} frames) ---", frames);
    let mut results = Vec::new();

    let Some(mut engine) = start_engine(config, &mut results) else {
        return results;
    };

    let bounds = engine.bounds();
    let viewport = engine.viewport();
    let mut player_violations = 0u64;
    let mut creature_violations = 0u64;
    let mut camera_violations = 0u64;
    let mut max_drift = 0.0f32;

    for frame in 0..frames {
        engine.set_input(scripted_input(frame));
        engine.tick();

        if !bounds.contains(engine.player.position, engine.player.size) {
            player_violations += 1;
        }

        let offset = engine.camera.offset;
        if offset.x < 0.0
            || offset.y < 0.0
            || offset.x > bounds.width - viewport.width
            || offset.y > bounds.height - viewport.height
        {
            camera_violations += 1;
        }

        for (_, (creature, pos, home)) in engine
            .world
            .query::<(&Creature, &Position, &Home)>()
            .iter()
        {
            if !bounds.contains(pos.0, creature.template().size) {
                creature_violations += 1;
            }
            max_drift = max_drift.max(pos.0.distance(&home.origin));
        }

        if verbose && frame > 0 && frame % 1_000 == 0 {
            let status = engine.status();
            println!(
                "  frame {:>6}: player ({}, {}), max drift {:.0}",
                frame, status.x, status.y, max_drift
            );
        }
    }

    results.push(TestResult {
        name: "loop_frame_counter".into(),
        passed: engine.frame() == frames,
        detail: format!("{} frames advanced", engine.frame()),
    });

    results.push(TestResult {
        name: "loop_player_in_bounds".into(),
        passed: player_violations == 0,
        detail: format!("{} out-of-bounds player frames", player_violations),
    });

    results.push(TestResult {
        name: "loop_creatures_in_bounds".into(),
        passed: creature_violations == 0,
        detail: format!("{} out-of-bounds creature samples", creature_violations),
    });

    results.push(TestResult {
        name: "loop_camera_in_bounds".into(),
        passed: camera_violations == 0,
        detail: format!("{} frames with camera outside the world", camera_violations),
    });

    results.push(TestResult {
        name: "loop_population_stable".into(),
        passed: engine.creature_count() == config.creature_count as usize,
        detail: "ticking never adds or removes creatures".into(),
    });

    results
}

// ── 5. Camera ───────────────────────────────────────────────────────────

fn validate_camera(config: &GameConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Camera ---");
    let mut results = Vec::new();

    let Some(mut engine) = start_engine(config, &mut results) else {
        return results;
    };

    let bounds = engine.bounds();
    let viewport = engine.viewport();
    let max_x = bounds.width - viewport.width;
    let max_y = bounds.height - viewport.height;

    let cases = [
        ("top_left", Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0)),
        (
            "bottom_right",
            Vec2::new(bounds.width, bounds.height),
            Vec2::new(max_x, max_y),
        ),
        ("top_right", Vec2::new(bounds.width, 0.0), Vec2::new(max_x, 0.0)),
        ("bottom_left", Vec2::new(0.0, bounds.height), Vec2::new(0.0, max_y)),
    ];

    for (name, position, expected) in cases {
        engine.player.position = position;
        engine.tick();
        let offset = engine.camera.offset;
        if verbose {
            println!("  {:<12} camera ({:.0}, {:.0})", name, offset.x, offset.y);
        }
        results.push(TestResult {
            name: format!("camera_{}", name),
            passed: offset == expected,
            detail: format!(
                "offset ({:.0}, {:.0}), expected ({:.0}, {:.0})",
                offset.x, offset.y, expected.x, expected.y
            ),
        });
    }

    // Away from edges the player sits at the centre of the viewport
    engine.player.position = Vec2::new(bounds.width / 2.0, bounds.height / 2.0);
    engine.tick();
    let on_screen = engine.camera.to_screen(engine.player.position);
    let expected = viewport.half() - engine.player.size.half();
    results.push(TestResult {
        name: "camera_centres_player".into(),
        passed: on_screen == expected,
        detail: format!("player drawn at ({:.1}, {:.1})", on_screen.x, on_screen.y),
    });

    results
}

// ── 6. Capture odds ─────────────────────────────────────────────────────

fn validate_capture_odds(verbose: bool) -> Vec<TestResult> {
    println!("--- Capture Odds ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(7);

    for rarity in [Rarity::Common, Rarity::Uncommon, Rarity::Rare] {
        let successes = (0..CAPTURE_TRIALS)
            .filter(|_| roll_capture(rarity, &mut rng))
            .count();
        let observed = successes as f32 / CAPTURE_TRIALS as f32;
        let expected = rarity.success_rate();

        if verbose {
            println!(
                "  {:<9} observed {:.3}, expected {:.2}",
                rarity.name(),
                observed,
                expected
            );
        }

        results.push(TestResult {
            name: format!("capture_odds_{}", rarity.name().to_lowercase()),
            passed: (observed - expected).abs() <= CAPTURE_TOLERANCE,
            detail: format!("{:.3} over {} trials (expected {:.2})", observed, CAPTURE_TRIALS, expected),
        });
    }

    results
}

// ── 7. Capture scenario ─────────────────────────────────────────────────

fn validate_capture_scenario(config: &GameConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Capture Scenario ---");
    let mut results = Vec::new();

    let scenario = GameConfig {
        creature_count: config.creature_count.max(5),
        ..config.clone()
    };
    let Some(mut engine) = start_engine(&scenario, &mut results) else {
        return results;
    };

    let center = Vec2::new(engine.bounds().width / 2.0, engine.bounds().height / 2.0);
    engine.player.position = center;

    // Everyone to the top-left corner, one creature next to the player
    let mut entities: Vec<(u32, hecs::Entity)> = engine
        .world
        .query::<&SpawnOrder>()
        .iter()
        .map(|(entity, order)| (order.0, entity))
        .collect();
    entities.sort_unstable();
    for (_, entity) in &entities {
        if let Ok(mut pos) = engine.world.get::<&mut Position>(*entity) {
            pos.0 = Vec2::ZERO;
        }
    }
    let target = entities[entities.len() / 2].1;
    if let Ok(mut pos) = engine.world.get::<&mut Position>(target) {
        pos.0 = center + Vec2::new(10.0, 10.0);
    }

    let population = engine.creature_count();
    let mut escapes = 0;
    let mut caught = None;
    for _ in 0..500 {
        match engine.attempt_capture() {
            CaptureOutcome::Escaped { .. } => escapes += 1,
            CaptureOutcome::Caught { entity, kind, total } => {
                caught = Some((entity, kind, total));
                break;
            }
            CaptureOutcome::NothingInRange => break,
        }
    }

    if verbose {
        println!("  {} escapes before the catch", escapes);
    }

    results.push(TestResult {
        name: "capture_hits_target".into(),
        passed: matches!(caught, Some((entity, _, 1)) if entity == target),
        detail: match caught {
            Some((_, kind, total)) => format!("caught a {} (total {})", kind.template().name, total),
            None => "target never caught".into(),
        },
    });

    results.push(TestResult {
        name: "capture_removes_one".into(),
        passed: engine.creature_count() == population - 1 && !engine.world.contains(target),
        detail: format!("{} -> {} creatures", population, engine.creature_count()),
    });

    results.push(TestResult {
        name: "capture_counter".into(),
        passed: engine.creatures_caught() == 1 && engine.status().caught == 1,
        detail: format!("{} caught", engine.creatures_caught()),
    });

    let noop = engine.attempt_capture();
    results.push(TestResult {
        name: "capture_nothing_in_range".into(),
        passed: noop == CaptureOutcome::NothingInRange && engine.creatures_caught() == 1,
        detail: format!("second attempt -> {:?}", noop),
    });

    results
}
