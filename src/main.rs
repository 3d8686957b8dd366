//! RL Circles entry point
//!
//! Spawns the circles, then runs the frame loop against a surface until it
//! asks to close.

use glam::Vec2;
use std::time::Instant;

use rl_circles::Settings;
use rl_circles::consts::*;
use rl_circles::platform::{HeadlessSurface, Surface};
use rl_circles::renderer::{FrameTimings, build_frame};
use rl_circles::sim::{FrameInput, RngState, SimConfig, Simulation, step};

/// Headless run length when `--frames` is not given (10 seconds)
const DEFAULT_HEADLESS_FRAMES: u64 = TARGET_FPS as u64 * 10;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("RL Circles starting...");

    let settings = Settings::from_env();
    let rng_state = settings.seed.map(RngState::new).unwrap_or_else(RngState::random);
    log::info!("Using seed: {}", rng_state.seed);

    let frames = settings.frames.unwrap_or(DEFAULT_HEADLESS_FRAMES);
    let mut surface = HeadlessSurface::new(Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), Some(frames));

    let load_start = Instant::now();
    let (mut sim, spawn_error) = Simulation::spawn(
        rng_state,
        settings.circle_count,
        surface.size(),
        SimConfig::default(),
    );
    if let Some(err) = spawn_error {
        log::warn!("{}", err);
    }
    log::info!(
        "CIRCLES: Loaded {} circles in {}μs.",
        sim.circles.len(),
        load_start.elapsed().as_micros()
    );

    run(&mut sim, &mut surface, settings.show_debug_text);

    log::info!(
        "Closed after {} frames ({} vertices, {} bytes presented)",
        surface.frames_presented(),
        surface.vertices_presented(),
        surface.bytes_presented()
    );
}

/// Frame loop: sample the surface, step, draw, present
fn run<S: Surface>(sim: &mut Simulation, surface: &mut S, show_debug_text: bool) {
    let mut timings = FrameTimings::default();

    while !surface.should_close() {
        let input = FrameInput::new(surface.pointer(), surface.size());

        let update_start = Instant::now();
        let stats = step(sim, &input);
        timings.update = update_start.elapsed();

        let draw_start = Instant::now();
        let frame = build_frame(sim, input.mouse, input.bounds, &timings, show_debug_text);
        surface.present(&frame);
        timings.draw = draw_start.elapsed();

        log::debug!(
            "frame {}: {} collisions, {} highlighted, update {}us, draw {}us",
            sim.frame,
            stats.collisions,
            stats.highlighted,
            timings.update.as_micros(),
            timings.draw.as_micros()
        );
    }
}
