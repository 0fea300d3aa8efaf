//! Locomotion Demo - headless scripted run
//!
//! Run with: `cargo run --bin locomotion_demo [config.json]`
//!
//! Drives one character through a small obstacle course with scripted
//! keyboard input: walk, sprint, jump, climb a wall, launch from a jump pad,
//! glide down and ride a wind ring. Mode changes and a periodic status line
//! are logged; set `RUST_LOG=wayfarer_engine=debug` for every transition.

use std::env;
use std::error::Error;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use tracing::info;

use wayfarer_engine::input::{InputDevice, InputState, KeyCode};
use wayfarer_engine::physics::{Aabb, StaticWorld, Surface};
use wayfarer_engine::player::{CharacterController, KinematicBody, LocomotionMode};
use wayfarer_engine::{LocomotionConfig, logging};

const TICK_RATE: u32 = 60;
const DT: f32 = 1.0 / TICK_RATE as f32;

/// One step of the script, active from `start` (seconds) until the next step.
struct Step {
    start: f32,
    label: &'static str,
    keys: &'static [KeyCode],
    look: Vec2,
    action: Option<Action>,
}

#[derive(Clone, Copy)]
enum Action {
    JumpPad,
    Wind,
    EnableGlide,
}

fn course() -> StaticWorld {
    StaticWorld::new()
        // Ground
        .with(
            Aabb::new(Vec3::new(-40.0, -1.0, -40.0), Vec3::new(40.0, 0.0, 40.0)),
            Surface::GROUND,
        )
        // Climbable wall straight ahead
        .with(
            Aabb::new(Vec3::new(-3.0, 0.0, 8.0), Vec3::new(3.0, 2.5, 9.0)),
            Surface::CLIMBABLE,
        )
        // Walkable top of the wall
        .with(
            Aabb::new(Vec3::new(-3.0, 2.5, 8.0), Vec3::new(3.0, 2.6, 16.0)),
            Surface::GROUND,
        )
}

fn script() -> Vec<Step> {
    use KeyCode::*;
    vec![
        Step { start: 0.0, label: "walk", keys: &[W], look: Vec2::ZERO, action: None },
        Step { start: 1.0, label: "sprint", keys: &[W, ShiftLeft], look: Vec2::ZERO, action: None },
        Step { start: 2.0, label: "jump", keys: &[W, Space], look: Vec2::ZERO, action: None },
        Step { start: 2.1, label: "run to wall", keys: &[W], look: Vec2::ZERO, action: None },
        Step { start: 7.0, label: "cross the top", keys: &[W], look: Vec2::ZERO, action: None },
        Step { start: 8.0, label: "turn around", keys: &[], look: Vec2::new(1800.0, 0.0), action: None },
        Step { start: 8.1, label: "idle", keys: &[], look: Vec2::ZERO, action: Some(Action::EnableGlide) },
        Step { start: 9.0, label: "jump pad", keys: &[], look: Vec2::ZERO, action: Some(Action::JumpPad) },
        Step { start: 9.5, label: "open glider", keys: &[W, Space], look: Vec2::ZERO, action: None },
        Step { start: 9.6, label: "glide", keys: &[W], look: Vec2::ZERO, action: None },
        Step { start: 12.0, label: "wind ring", keys: &[W], look: Vec2::ZERO, action: Some(Action::Wind) },
        Step { start: 14.0, label: "settle", keys: &[], look: Vec2::ZERO, action: None },
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init("info");

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("Loading tunables from {}", path);
            LocomotionConfig::load(&path)?
        }
        None => LocomotionConfig::default(),
    };

    let world = Rc::new(course());
    let mut controller = CharacterController::builder(config)
        .probe(Rc::clone(&world))
        .mover(KinematicBody::new(Rc::clone(&world), Vec3::ZERO))
        // Glider is picked up mid-run
        .glidable(false)
        .build()?;

    let mut input = InputState::new();
    input.pointer.set_captured(true);

    let steps = script();
    let total_ticks = 16 * TICK_RATE;
    let mut step_index = None;
    let mut last_mode = controller.locomotion().mode();

    info!("=== Locomotion demo: {} colliders, {} ticks ===", world.len(), total_ticks);

    for tick in 0..total_ticks {
        let time = tick as f32 * DT;

        // Advance the script
        let current = steps.iter().rposition(|step| step.start <= time);
        if current != step_index {
            step_index = current;
            if let Some(step) = current.map(|i| &steps[i]) {
                info!("[{:6.2}s] {}", time, step.label);
                input.keyboard.reset();
                for key in step.keys {
                    input.keyboard.handle_key(*key, true);
                }
                match step.action {
                    Some(Action::JumpPad) => controller.jump_pad_jump(),
                    Some(Action::Wind) => {
                        controller.wind_effect();
                    }
                    Some(Action::EnableGlide) => controller.set_glidable(true),
                    None => {}
                }
            }
        }

        let mut snapshot = input.snapshot();
        if let Some(step) = step_index.map(|i| &steps[i]) {
            // Scripted look is spread over the step as gamepad input
            snapshot.look = step.look;
            snapshot.device = InputDevice::Gamepad;
        }

        let report = controller.tick(snapshot, DT);

        if std::mem::discriminant(&report.mode) != std::mem::discriminant(&last_mode) {
            info!(
                "[{:6.2}s] {} -> {} at ({:.2}, {:.2}, {:.2})",
                time, last_mode, report.mode, report.position.x, report.position.y, report.position.z
            );
            last_mode = report.mode;
        }

        if tick % TICK_RATE == 0 {
            let locomotion = controller.locomotion();
            info!(
                "[{:6.2}s] pos=({:.2}, {:.2}, {:.2}) speed={:.3} vy={:.2} yaw={:.1} cam_yaw={:.1}",
                time,
                report.position.x,
                report.position.y,
                report.position.z,
                locomotion.horizontal_speed(),
                locomotion.vertical_velocity(),
                locomotion.facing_yaw(),
                controller.camera().yaw(),
            );
        }
    }

    let final_mode = controller.locomotion().mode();
    info!(
        "=== Done: mode={} position={:?} ===",
        final_mode,
        controller.position()
    );
    if let LocomotionMode::Climbing(contact) = final_mode {
        info!("Still on a wall facing {:?}", -contact.wall_normal);
    }

    Ok(())
}
