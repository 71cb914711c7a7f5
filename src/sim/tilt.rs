//! Board tilt controller
//!
//! Maps a two-axis stick sample to a target tilt relative to the board's rest
//! orientation, then slerps the board toward it at a configurable rate.
//!
//! Axis conventions (board-local):
//! - X: lateral axis; vertical input tips the board about it
//! - Z: longitudinal axis; horizontal input rolls the board about it

use glam::{Quat, Vec2};

use crate::in_deadzone;
use crate::settings::TiltConfig;

/// Per-axis tilt derived from input (degrees)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltAngles {
    /// Rotation about the local lateral (X) axis. Negative tips the forward edge down.
    pub around_forward_axis: f32,
    /// Rotation about the local longitudinal (Z) axis. Positive rolls the ball right.
    pub around_side_axis: f32,
}

impl TiltAngles {
    /// Combined tilt magnitude (degrees)
    #[inline]
    pub fn magnitude(&self) -> f32 {
        Vec2::new(self.around_forward_axis, self.around_side_axis).length()
    }

    /// Local rotation: lateral-axis tilt first, then longitudinal (intrinsic)
    pub fn to_local_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.around_forward_axis.to_radians())
            * Quat::from_rotation_z(self.around_side_axis.to_radians())
    }
}

/// Turns stick input into a smoothed board orientation
#[derive(Debug, Clone)]
pub struct TiltController {
    config: TiltConfig,
    /// Orientation captured at activation; never changes afterwards
    rest: Quat,
}

impl TiltController {
    /// Activate the controller, treating the board's current orientation as flat
    pub fn initialize(config: TiltConfig, current: Quat) -> Self {
        log::debug!(
            "Tilt controller active: rest={:?} max_tilt={}° speed={}/s",
            current,
            config.max_tilt_angle_degrees,
            config.tilt_speed
        );
        Self {
            config,
            rest: current,
        }
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// The "flat" orientation all tilts are relative to
    pub fn rest(&self) -> Quat {
        self.rest
    }

    /// Tilt for a stick sample, or `None` inside the deadzone
    ///
    /// Input is normalized first so a diagonal tilts exactly as far as a
    /// cardinal direction.
    pub fn tilt_angles(&self, horizontal: f32, vertical: f32) -> Option<TiltAngles> {
        let dir = Vec2::new(horizontal, vertical);
        if in_deadzone(dir) {
            return None;
        }

        let dir = dir.normalize();
        let max = self.config.max_tilt_angle_degrees;
        Some(TiltAngles {
            // Forward input drops the forward edge
            around_forward_axis: -dir.y * max,
            around_side_axis: dir.x * max,
        })
    }

    /// Orientation the board is heading toward for this input
    pub fn target_orientation(&self, horizontal: f32, vertical: f32) -> Quat {
        match self.tilt_angles(horizontal, vertical) {
            Some(angles) => self.rest * angles.to_local_rotation(),
            None => self.rest,
        }
    }

    /// Fraction of the remaining rotation covered this frame, in [0, 1]
    #[inline]
    pub fn blend_factor(&self, dt: f32) -> f32 {
        (dt * self.config.tilt_speed).clamp(0.0, 1.0)
    }

    /// Advance one frame: blend `current` toward the target for this input
    ///
    /// Shortest-arc slerp. A blend factor of 1 lands exactly on the target and
    /// a factor of 0 leaves `current` untouched. NaN input is not handled.
    pub fn update(&self, horizontal: f32, vertical: f32, dt: f32, current: Quat) -> Quat {
        let target = self.target_orientation(horizontal, vertical);
        let t = self.blend_factor(dt);

        if t >= 1.0 {
            target
        } else if t <= 0.0 {
            current
        } else {
            current.slerp(target, t)
        }
    }

    /// Angle between rest and `orientation` (degrees)
    ///
    /// Taken from the rest-relative rotation with `atan2`, which stays precise
    /// near rest where an `acos` of the dot product collapses to 0.
    pub fn tilt_from_rest(&self, orientation: Quat) -> f32 {
        let delta = self.rest.inverse() * orientation;
        (2.0 * delta.xyz().length().atan2(delta.w.abs())).to_degrees()
    }
}
