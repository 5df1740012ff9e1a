// Pinch distance and incremental scale factor.
use crate::model::Point;

pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Ratio of the current to the previous contact distance. `None` on the
/// first frame of a pinch, and when the previous distance was zero.
pub fn scale_factor(previous: Option<f64>, current: f64) -> Option<f64> {
    previous.filter(|d| *d > 0.0).map(|d| current / d)
}

/// Distance recorded on the previous pinch frame.
#[derive(Default, Debug, Clone, Copy)]
pub struct PinchState {
    pub last_distance: Option<f64>,
}

impl PinchState {
    /// Records `current` and returns the factor relative to the last frame.
    pub fn advance(&mut self, current: f64) -> Option<f64> {
        let factor = scale_factor(self.last_distance, current);
        self.last_distance = Some(current);
        factor
    }

    pub fn reset(&mut self) {
        self.last_distance = None;
    }
}
