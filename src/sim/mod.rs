//! Tilt simulation module
//!
//! All per-frame tilt logic lives here. This module must stay pure:
//! - No device access (input arrives through `AxisSource`)
//! - No engine transforms (output goes through `LocalRotation`)
//! - No per-frame logging

pub mod input;
pub mod tick;
pub mod tilt;

pub use input::{AxisBindings, AxisKeys, AxisSource, FixedAxes, KeyboardAxes, TiltInput};
pub use tick::{Board, LocalRotation, tick};
pub use tilt::{TiltAngles, TiltController};
