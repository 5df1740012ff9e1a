// Interaction mode and the gate that routes gestures by it.
use crate::model::{Layer, Mode};

/// The single current mode. Only the toggle action writes it.
#[derive(Default, Debug, Clone, Copy)]
pub struct ModeState {
    mode: Mode,
}

impl ModeState {
    pub fn current(&self) -> Mode {
        self.mode
    }

    pub fn toggle(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

/// Whether `layer` may start a gesture under `mode`.
pub fn admit(layer: Layer, mode: Mode) -> bool {
    matches!(
        (layer, mode),
        (Layer::Clock, Mode::ClockAdjust) | (Layer::Background, Mode::BackgroundAdjust)
    )
}
