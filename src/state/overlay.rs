//! Owns the mode, the auto-hide timer and both layer controllers, and routes
//! every input event to them synchronously.

use tracing::info;

use crate::config::OverlayConfig;
use crate::model::{ContactId, Layer, Mode, Point};
use crate::state::mode::ModeState;
use crate::state::store::TransformStore;
use crate::state::transform::{LayerSurface, TransformController};
use crate::state::visibility::VisibilityTimer;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayEvent {
    ContactStart { layer: Layer, id: ContactId, at: Point },
    ContactMove { layer: Layer, id: ContactId, at: Point },
    /// Pointer up or cancel.
    ContactEnd { layer: Layer, id: ContactId },
    ToggleMode,
    /// Any touch or pointer press on the page.
    Activity,
    /// The pending hide deadline may have passed.
    Tick,
}

/// What the UI needs after an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayView {
    pub mode: Mode,
    pub controls_visible: bool,
    pub hide_at: Option<f64>,
}

impl Default for OverlayView {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            controls_visible: true,
            hide_at: None,
        }
    }
}

pub struct Overlay<S, V> {
    mode: ModeState,
    timer: VisibilityTimer,
    clock: TransformController<S, V>,
    background: TransformController<S, V>,
}

impl<S, V> Overlay<S, V>
where
    S: TransformStore + Clone,
    V: LayerSurface,
{
    pub fn new(config: &OverlayConfig, store: S, clock_surface: V, background_surface: V) -> Self {
        Self {
            mode: ModeState::default(),
            timer: VisibilityTimer::new(config.auto_hide_ms),
            clock: TransformController::new(
                Layer::Clock,
                config.scale_bounds,
                store.clone(),
                clock_surface,
            ),
            background: TransformController::new(
                Layer::Background,
                config.scale_bounds,
                store,
                background_surface,
            ),
        }
    }

    #[cfg(test)]
    pub fn controller(&self, layer: Layer) -> &TransformController<S, V> {
        match layer {
            Layer::Clock => &self.clock,
            Layer::Background => &self.background,
        }
    }

    fn parts_mut(&mut self, layer: Layer) -> (&mut TransformController<S, V>, &mut VisibilityTimer) {
        match layer {
            Layer::Clock => (&mut self.clock, &mut self.timer),
            Layer::Background => (&mut self.background, &mut self.timer),
        }
    }

    pub fn dispatch(&mut self, event: OverlayEvent, now: f64) -> OverlayView {
        match event {
            OverlayEvent::ContactStart { layer, id, at } => {
                let mode = self.mode.current();
                let (controller, timer) = self.parts_mut(layer);
                controller.on_contact_start(id, at, mode, timer);
            }
            OverlayEvent::ContactMove { layer, id, at } => {
                self.parts_mut(layer).0.on_contact_move(id, at);
            }
            OverlayEvent::ContactEnd { layer, id } => {
                let (controller, timer) = self.parts_mut(layer);
                controller.on_contact_end(id, now, timer);
            }
            OverlayEvent::ToggleMode => {
                let mode = self.mode.toggle();
                info!(?mode, "mode toggled");
                self.timer.show(now);
            }
            OverlayEvent::Activity => self.timer.show(now),
            OverlayEvent::Tick => {
                self.timer.tick(now);
            }
        }
        self.view()
    }

    pub fn view(&self) -> OverlayView {
        OverlayView {
            mode: self.mode.current(),
            controls_visible: self.timer.is_visible(),
            hide_at: self.timer.hide_at(),
        }
    }
}
