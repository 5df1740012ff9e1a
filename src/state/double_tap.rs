// Double-tap detection for the fullscreen toggle.

#[derive(Debug, Clone)]
pub struct DoubleTap {
    window_ms: f64,
    last_tap: Option<f64>,
    touch_count: u32,
}

impl DoubleTap {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_tap: None,
            touch_count: 0,
        }
    }

    /// Number of fingers down at the latest touch start.
    pub fn touch_start(&mut self, touches: u32) {
        self.touch_count = touches;
    }

    /// Returns true when this tap completes a double tap.
    pub fn touch_end(&mut self, now: f64) -> bool {
        if self.touch_count > 1 {
            self.last_tap = None;
            return false;
        }
        match self.last_tap {
            Some(prev) if now - prev < self.window_ms => {
                self.last_tap = None;
                true
            }
            _ => {
                self.last_tap = Some(now);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(d: &mut DoubleTap, now: f64) -> bool {
        d.touch_start(1);
        d.touch_end(now)
    }

    #[test]
    fn test_two_quick_taps_toggle() {
        let mut d = DoubleTap::new(300.0);
        assert!(!tap(&mut d, 1000.0));
        assert!(tap(&mut d, 1200.0));
        // the pair is consumed
        assert!(!tap(&mut d, 1300.0));
    }

    #[test]
    fn test_slow_taps_do_not_toggle() {
        let mut d = DoubleTap::new(300.0);
        assert!(!tap(&mut d, 0.0));
        assert!(!tap(&mut d, 300.0));
        assert!(tap(&mut d, 450.0));
    }

    #[test]
    fn test_multi_finger_touch_resets() {
        let mut d = DoubleTap::new(300.0);
        assert!(!tap(&mut d, 0.0));
        d.touch_start(2);
        assert!(!d.touch_end(100.0));
        assert!(!tap(&mut d, 150.0));
    }
}
