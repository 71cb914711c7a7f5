//! Axis input sampling
//!
//! The controller never talks to a device directly. Whatever owns the
//! keyboard/gamepad implements [`AxisSource`], and each frame the two
//! configured axes are polled into a [`TiltInput`].

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::consts::{DEFAULT_HORIZONTAL_AXIS, DEFAULT_VERTICAL_AXIS};
use crate::settings::TiltConfig;

/// Something that can report a named axis value in [-1, 1]
pub trait AxisSource {
    /// Current value of `axis`; unknown axes read as 0.0
    fn sample(&self, axis: &str) -> f32;
}

/// Two-axis stick sample for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltInput {
    /// Left/right (-1 = left, 1 = right)
    pub horizontal: f32,
    /// Back/forward (-1 = back, 1 = forward)
    pub vertical: f32,
}

impl TiltInput {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Poll the configured axes once
    pub fn sample(source: &impl AxisSource, config: &TiltConfig) -> Self {
        Self {
            horizontal: source.sample(&config.horizontal_axis),
            vertical: source.sample(&config.vertical_axis),
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.horizontal, self.vertical)
    }
}

/// Key lists for one axis
#[derive(Debug, Clone)]
pub struct AxisKeys {
    pub negative: Vec<String>,
    pub positive: Vec<String>,
}

impl AxisKeys {
    pub fn new(negative: &[&str], positive: &[&str]) -> Self {
        Self {
            negative: negative.iter().map(|k| k.to_string()).collect(),
            positive: positive.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Axis name to key mapping
#[derive(Debug, Clone)]
pub struct AxisBindings {
    axes: HashMap<String, AxisKeys>,
}

impl Default for AxisBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(
            DEFAULT_HORIZONTAL_AXIS,
            AxisKeys::new(&["a", "ArrowLeft"], &["d", "ArrowRight"]),
        );
        bindings.bind(
            DEFAULT_VERTICAL_AXIS,
            AxisKeys::new(&["s", "ArrowDown"], &["w", "ArrowUp"]),
        );
        bindings
    }
}

impl AxisBindings {
    pub fn empty() -> Self {
        Self {
            axes: HashMap::new(),
        }
    }

    /// Bind (or rebind) an axis
    pub fn bind(&mut self, axis: &str, keys: AxisKeys) {
        self.axes.insert(axis.to_string(), keys);
    }

    pub fn get(&self, axis: &str) -> Option<&AxisKeys> {
        self.axes.get(axis)
    }
}

/// Raw digital axes from held keys
///
/// Each axis reads -1, 0 or 1; holding both directions cancels out.
#[derive(Debug, Clone, Default)]
pub struct KeyboardAxes {
    pressed: HashSet<String>,
    bindings: AxisBindings,
}

impl KeyboardAxes {
    pub fn new(bindings: AxisBindings) -> Self {
        Self {
            pressed: HashSet::new(),
            bindings,
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.pressed.insert(key.to_ascii_lowercase());
    }

    pub fn key_up(&mut self, key: &str) {
        self.pressed.remove(&key.to_ascii_lowercase());
    }

    /// Focus lost / tab hidden
    pub fn clear_keys(&mut self) {
        self.pressed.clear();
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed.contains(&key.to_ascii_lowercase())
    }

    fn any_pressed(&self, keys: &[String]) -> bool {
        keys.iter().any(|k| self.is_key_pressed(k))
    }
}

impl AxisSource for KeyboardAxes {
    fn sample(&self, axis: &str) -> f32 {
        let Some(keys) = self.bindings.get(axis) else {
            return 0.0;
        };

        let mut value = 0.0;
        if self.any_pressed(&keys.positive) {
            value += 1.0;
        }
        if self.any_pressed(&keys.negative) {
            value -= 1.0;
        }
        value
    }
}

/// Axis values set directly (gamepad snapshots, scripted input)
#[derive(Debug, Clone, Default)]
pub struct FixedAxes {
    values: HashMap<String, f32>,
}

impl FixedAxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single axis, builder style
    pub fn with(mut self, axis: &str, value: f32) -> Self {
        self.set(axis, value);
        self
    }

    pub fn set(&mut self, axis: &str, value: f32) {
        self.values.insert(axis.to_string(), value);
    }
}

impl AxisSource for FixedAxes {
    fn sample(&self, axis: &str) -> f32 {
        self.values.get(axis).copied().unwrap_or(0.0)
    }
}
