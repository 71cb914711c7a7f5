//! Per-frame tick
//!
//! Reads the board's orientation, advances the controller, writes it back.

use glam::Quat;
use serde::{Deserialize, Serialize};

use super::input::TiltInput;
use super::tilt::TiltController;

/// Anything with a local orientation the controller can drive
pub trait LocalRotation {
    fn local_rotation(&self) -> Quat;
    fn set_local_rotation(&mut self, rotation: Quat);
}

/// The tilting tray
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Local orientation (unit quaternion)
    pub rotation: Quat,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
        }
    }
}

impl Board {
    pub fn new(rotation: Quat) -> Self {
        Self { rotation }
    }
}

impl LocalRotation for Board {
    fn local_rotation(&self) -> Quat {
        self.rotation
    }

    fn set_local_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

/// Advance the board's tilt by one frame of `dt` seconds
pub fn tick(
    controller: &TiltController,
    board: &mut impl LocalRotation,
    input: &TiltInput,
    dt: f32,
) {
    let current = board.local_rotation();
    let next = controller.update(input.horizontal, input.vertical, dt, current);
    board.set_local_rotation(next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::TiltConfig;
    use crate::sim::input::{FixedAxes, KeyboardAxes};

    #[test]
    fn test_tick_writes_back() {
        let mut board = Board::default();
        let controller = TiltController::initialize(TiltConfig::default(), board.rotation);

        let input = TiltInput::new(1.0, 0.0);
        tick(&controller, &mut board, &input, 0.05);

        assert_ne!(board.rotation, Quat::IDENTITY);
        let expected = controller.update(1.0, 0.0, 0.05, Quat::IDENTITY);
        assert_eq!(board.rotation, expected);
    }

    #[test]
    fn test_pre_rotated_board_is_flat() {
        let pre = Quat::from_rotation_y(0.8);
        let mut board = Board::new(pre);
        let controller = TiltController::initialize(TiltConfig::default(), board.local_rotation());

        for _ in 0..10 {
            tick(&controller, &mut board, &TiltInput::default(), 1.0 / 60.0);
        }
        assert!(board.rotation.abs_diff_eq(pre, 1e-6));
    }

    #[test]
    fn test_keyboard_session() {
        let config = TiltConfig::default();
        let mut board = Board::default();
        let controller = TiltController::initialize(config.clone(), board.rotation);
        let mut keys = KeyboardAxes::default();

        // Hold W for a second
        keys.key_down("w");
        for _ in 0..60 {
            let input = TiltInput::sample(&keys, &config);
            tick(&controller, &mut board, &input, 1.0 / 60.0);
        }
        let forward = controller.target_orientation(0.0, 1.0);
        assert!(board.rotation.abs_diff_eq(forward, 1e-2));

        // Release and let it settle
        keys.key_up("w");
        for _ in 0..120 {
            let input = TiltInput::sample(&keys, &config);
            tick(&controller, &mut board, &input, 1.0 / 60.0);
        }
        assert!(controller.tilt_from_rest(board.rotation) < 0.5);
    }

    #[test]
    fn test_gamepad_snapshot() {
        let config = TiltConfig::default();
        let mut board = Board::default();
        let controller = TiltController::initialize(config.clone(), board.rotation);

        let pad = FixedAxes::new().with("Horizontal", -0.6).with("Vertical", 0.8);
        let input = TiltInput::sample(&pad, &config);
        tick(&controller, &mut board, &input, 1.0);

        assert_eq!(board.rotation, controller.target_orientation(-0.6, 0.8));
    }
}
