//! Board Tilt headless demo
//!
//! Drives a pre-rotated board through a scripted stick sequence and logs how
//! far it has tilted from rest. Pass a settings JSON path to override defaults.

use glam::Quat;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use board_tilt::TiltConfig;
use board_tilt::sim::{Board, FixedAxes, TiltController, TiltInput, tick};

/// Demo frame rate
const FRAME_DT: f32 = 1.0 / 60.0;
/// Frames between progress log lines
const LOG_EVERY: u32 = 15;
/// Analog stick noise amplitude
const STICK_JITTER: f32 = 0.03;

/// (label, seconds, horizontal, vertical)
const SCRIPT: &[(&str, f32, f32, f32)] = &[
    ("idle", 0.5, 0.0, 0.0),
    ("forward", 1.0, 0.0, 1.0),
    ("forward-right", 1.0, 1.0, 1.0),
    ("left", 1.0, -1.0, 0.0),
    ("release", 1.5, 0.0, 0.0),
];

fn main() {
    env_logger::init();
    log::info!("Board Tilt (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => TiltConfig::load(path),
        None => TiltConfig::default(),
    };

    // Designers may pre-rotate the board; that pose counts as flat
    let mut board = Board::new(Quat::from_rotation_y(30f32.to_radians()));
    let controller = TiltController::initialize(config.clone(), board.rotation);
    let mut rng = Pcg32::seed_from_u64(0x7117);

    let mut frame: u32 = 0;
    for &(label, seconds, horizontal, vertical) in SCRIPT {
        log::info!("Stick: {} ({:+.1}, {:+.1}) for {:.1}s", label, horizontal, vertical, seconds);

        let frames = (seconds / FRAME_DT).round() as u32;
        for _ in 0..frames {
            let mut pad = FixedAxes::new();
            pad.set(&config.horizontal_axis, jitter(&mut rng, horizontal));
            pad.set(&config.vertical_axis, jitter(&mut rng, vertical));

            let input = TiltInput::sample(&pad, &config);
            tick(&controller, &mut board, &input, FRAME_DT);

            frame += 1;
            if frame % LOG_EVERY == 0 {
                let target = controller
                    .tilt_angles(input.horizontal, input.vertical)
                    .map(|a| a.magnitude())
                    .unwrap_or(0.0);
                log::info!(
                    "t={:.2}s tilt={:.2}° target={:.2}°",
                    frame as f32 * FRAME_DT,
                    controller.tilt_from_rest(board.rotation),
                    target
                );
            }
        }
    }

    log::info!(
        "Done after {} frames, final tilt {:.3}°",
        frame,
        controller.tilt_from_rest(board.rotation)
    );
}

/// Small noise around a held stick value; a released stick stays near zero
fn jitter(rng: &mut Pcg32, value: f32) -> f32 {
    value + rng.random_range(-STICK_JITTER..STICK_JITTER)
}
