//! Board Tilt - input-driven tilt for a ball-on-tray board
//!
//! Core modules:
//! - `sim`: Pure per-frame tilt logic (input sampling, target rotation, smoothing)
//! - `settings`: Designer-tunable tilt configuration

pub mod settings;
pub mod sim;

pub use settings::TiltConfig;
pub use sim::{AxisSource, Board, LocalRotation, TiltAngles, TiltController, TiltInput, tick};

use glam::Vec2;

/// Tilt configuration constants
pub mod consts {
    /// Squared input magnitude at or below which the stick counts as released
    pub const DEADZONE_SQUARED: f32 = 0.01;

    /// Default maximum tilt per axis (degrees)
    pub const DEFAULT_MAX_TILT_DEGREES: f32 = 15.0;
    /// Default blend rate toward the target tilt (1/s)
    pub const DEFAULT_TILT_SPEED: f32 = 5.0;

    /// Default left/right input axis name
    pub const DEFAULT_HORIZONTAL_AXIS: &str = "Horizontal";
    /// Default forward/back input axis name
    pub const DEFAULT_VERTICAL_AXIS: &str = "Vertical";
}

/// Whether a stick vector is inside the deadzone
#[inline]
pub fn in_deadzone(dir: Vec2) -> bool {
    dir.length_squared() <= consts::DEADZONE_SQUARED
}
