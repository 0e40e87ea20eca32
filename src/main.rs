//! Artemis - Headless first-person character simulation
//!
//! Spawns a player capsule on a ground plane and drives it with scripted
//! input through the fixed-timestep clock.

mod script;
mod settings;

use anyhow::{Context, Result};
use artemis_core::GameTime;
use artemis_game::{InputState, PlayerController};
use artemis_physics::PhysicsWorld;
use glam::Vec3;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use script::InputScript;
use settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Starting Artemis...");

    let settings = Settings::load();
    if Settings::settings_path().is_some_and(|path| !path.exists()) {
        if let Err(e) = settings.save() {
            warn!("Failed to write default settings: {}", e);
        }
    }

    let mut time = GameTime::new(settings.time.clone()).context("Invalid time settings")?;

    // Build the world
    let mut physics = PhysicsWorld::new();
    physics.create_ground(0.0);
    physics.create_static_box(Vec3::new(10.0, 2.0, 0.5), Vec3::new(0.0, 2.0, -40.0));
    physics.update_queries();

    let mut player = PlayerController::spawn_with_body(
        settings.movement.clone(),
        settings.camera.clone(),
        settings.character.clone(),
        &mut physics,
        Vec3::new(0.0, 0.05, 0.0),
    )
    .context("Failed to spawn player")?;

    let mut input = InputState::new();
    input.capture_cursor();
    let mut script = InputScript::demo();

    let sim = &settings.simulation;
    anyhow::ensure!(
        sim.frame_delta.is_finite() && sim.frame_delta > 0.0,
        "simulation.frame_delta must be positive, got {}",
        sim.frame_delta
    );
    let dt = time.config.fixed_timestep;
    let mut ticks: u64 = 0;

    while time.total_time < sim.duration_seconds as f64 {
        time.update(sim.frame_delta);
        script.advance(time.total_time, &mut input);

        for _ in 0..time.fixed_steps() {
            let frame = input.take_frame();
            let report = player
                .update(&mut physics, &frame, dt)
                .context("Player tick failed")?;
            ticks += 1;

            if sim.log_every_ticks > 0 && ticks % sim.log_every_ticks as u64 == 0 {
                let position = player.position();
                info!(
                    tick = ticks,
                    x = position.x,
                    y = position.y,
                    z = position.z,
                    speed = report.speed,
                    grounded = report.grounded,
                    pitch = report.pitch,
                    yaw = player.camera.yaw(),
                    fov = report.fov,
                    "Player"
                );
            }
        }
    }

    if !script.finished() {
        warn!("Simulation ended before every input cue fired");
    }

    info!(
        ticks,
        position = ?player.position(),
        speed = player.state().current_speed(),
        "Simulation finished"
    );
    Ok(())
}
