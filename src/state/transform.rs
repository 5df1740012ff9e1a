//! Drag and pinch handling for one layer.
//!
//! A controller owns its layer's transform, contact tracker and pinch state.
//! The phase follows the contact count: no contacts is `Idle`, one drags,
//! two or more pinch using the two oldest contacts.

use tracing::{debug, warn};

use crate::model::{ContactId, Layer, Mode, Point, ScaleBounds, Transform};
use crate::state::mode::admit;
use crate::state::pinch::{self, PinchState};
use crate::state::pointer::PointerTracker;
use crate::state::store::{LoadOutcome, TransformStore};
use crate::state::visibility::VisibilityTimer;

/// Where a controller's transform ends up.
pub trait LayerSurface {
    /// Publishes the transform; repeated calls with the same value are harmless.
    fn apply(&self, transform: &Transform);
    /// Routes all further events of `id` to this layer.
    fn capture(&self, _id: ContactId) {}
    /// Ends the routing set up by `capture`.
    fn release(&self, _id: ContactId) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Pinching,
}

pub struct TransformController<S, V> {
    layer: Layer,
    transform: Transform,
    bounds: ScaleBounds,
    tracker: PointerTracker,
    pinch: PinchState,
    store: S,
    surface: V,
}

impl<S: TransformStore, V: LayerSurface> TransformController<S, V> {
    /// Restores the layer's saved transform (or defaults) and publishes it.
    pub fn new(layer: Layer, bounds: ScaleBounds, store: S, surface: V) -> Self {
        let key = layer.storage_key();
        let outcome = store.load_transform(key);
        if let LoadOutcome::Recovered(err) = &outcome {
            warn!(key, %err, "ignoring saved transform");
        }
        let transform = outcome.into_transform().clamped(bounds);
        let controller = Self {
            layer,
            transform,
            bounds,
            tracker: PointerTracker::default(),
            pinch: PinchState::default(),
            store,
            surface,
        };
        controller.surface.apply(&controller.transform);
        controller
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn active_count(&self) -> usize {
        self.tracker.active_count()
    }

    pub fn phase(&self) -> GesturePhase {
        match self.tracker.active_count() {
            0 => GesturePhase::Idle,
            1 => GesturePhase::Dragging,
            _ => GesturePhase::Pinching,
        }
    }

    /// Starts tracking a contact if the layer is adjustable. A gesture that
    /// is already running keeps accepting contacts even if the mode changed
    /// after it began. Returns whether the contact was taken.
    pub fn on_contact_start(
        &mut self,
        id: ContactId,
        at: Point,
        mode: Mode,
        timer: &mut VisibilityTimer,
    ) -> bool {
        let in_gesture = self.tracker.active_count() > 0;
        if !in_gesture && !admit(self.layer, mode) {
            return false;
        }
        timer.suspend();
        timer.hide();
        self.surface.capture(id);
        self.tracker.begin(id, at);
        debug!(layer = ?self.layer, phase = ?self.phase(), "contact start");
        true
    }

    /// Applies a move of a tracked contact. Returns whether the contact was
    /// known.
    pub fn on_contact_move(&mut self, id: ContactId, at: Point) -> bool {
        let Some((dx, dy)) = self.tracker.move_to(id, at) else {
            return false;
        };
        if self.tracker.active_count() == 1 {
            self.transform.translate(dx, dy);
        } else if let Some((a, b)) = self.tracker.first_pair() {
            if let Some(factor) = self.pinch.advance(pinch::distance(a, b)) {
                self.transform.zoom(factor, self.bounds);
            }
        }
        self.surface.apply(&self.transform);
        true
    }

    /// Ends (or cancels) a contact. The last contact to lift saves the
    /// transform and hands the controls back to the auto-hide timer.
    pub fn on_contact_end(&mut self, id: ContactId, now: f64, timer: &mut VisibilityTimer) {
        if !self.tracker.end(id) {
            return;
        }
        self.surface.release(id);
        let remaining = self.tracker.active_count();
        if remaining < 2 {
            self.pinch.reset();
        }
        if remaining == 0 {
            let key = self.layer.storage_key();
            if let Err(err) = self.store.save_transform(key, &self.transform) {
                warn!(key, %err, "could not save transform");
            }
            debug!(layer = ?self.layer, transform = ?self.transform, "gesture end");
            timer.resume(now);
        }
    }
}
