//! Core data types for the clock overlay.
//! Layers, modes, contacts and the per-layer transform.

use serde::{Deserialize, Serialize};

/// Pointer identifier, stable for the lifetime of one contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContactId(pub i32);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Last known position of one tracked contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactPoint {
    pub id: ContactId,
    pub x: f64,
    pub y: f64,
}

impl ContactPoint {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Inclusive scale range a transform is kept in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
}

impl ScaleBounds {
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

/// Offset in pixels plus a uniform scale for one visual layer.
/// Stored as `{x, y, scale}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    #[serde(rename = "x")]
    pub offset_x: f64,
    #[serde(rename = "y")]
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Multiplies the scale by `factor`, then clamps it into `bounds`.
    pub fn zoom(&mut self, factor: f64, bounds: ScaleBounds) {
        self.scale = bounds.clamp(self.scale * factor);
    }

    pub fn clamped(mut self, bounds: ScaleBounds) -> Self {
        self.scale = bounds.clamp(self.scale);
        self
    }
}

/// The two independently adjustable layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Clock,
    Background,
}

impl Layer {
    /// localStorage key the layer's transform lives under.
    pub fn storage_key(self) -> &'static str {
        match self {
            Layer::Clock => "clockTransform",
            Layer::Background => "bgTransform",
        }
    }
}

/// Which layer currently accepts gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    ClockAdjust,
    BackgroundAdjust,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::ClockAdjust => Mode::BackgroundAdjust,
            Mode::BackgroundAdjust => Mode::ClockAdjust,
        }
    }

    /// Label describing the current mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::ClockAdjust => "時計調整",
            Mode::BackgroundAdjust => "背景調整",
        }
    }

    /// Label of the toggle button, naming the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Mode::ClockAdjust => "背景",
            Mode::BackgroundAdjust => "時計",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: ScaleBounds = ScaleBounds { min: 0.2, max: 6.0 };

    #[test]
    fn test_zoom_clamps_both_ends() {
        let mut t = Transform::default();
        t.zoom(10.0, BOUNDS);
        assert_eq!(t.scale, 6.0);
        t.zoom(0.001, BOUNDS);
        assert_eq!(t.scale, 0.2);
    }

    #[test]
    fn test_transform_serializes_short_field_names() {
        let t = Transform {
            offset_x: 10.0,
            offset_y: -5.0,
            scale: 1.5,
        };
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"x":10.0,"y":-5.0,"scale":1.5}"#);
    }

    #[test]
    fn test_mode_labels_follow_toggle() {
        let mode = Mode::default();
        assert_eq!(mode.label(), "時計調整");
        assert_eq!(mode.toggle_label(), "背景");
        let mode = mode.toggled();
        assert_eq!(mode, Mode::BackgroundAdjust);
        assert_eq!(mode.label(), "背景調整");
        assert_eq!(mode.toggle_label(), "時計");
        assert_eq!(mode.toggled(), Mode::ClockAdjust);
    }

    #[test]
    fn test_layer_storage_keys() {
        assert_eq!(Layer::Clock.storage_key(), "clockTransform");
        assert_eq!(Layer::Background.storage_key(), "bgTransform");
    }
}
