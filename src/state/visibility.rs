//! Auto-hide for the control panel and mode label.
//!
//! The timer is a deadline rather than a live callback: `show` arms it,
//! `tick` fires it. The UI turns the deadline into a single browser timeout.

#[derive(Debug, Clone)]
pub struct VisibilityTimer {
    timeout_ms: f64,
    visible: bool,
    adjusting: bool,
    hide_at: Option<f64>,
}

impl VisibilityTimer {
    pub fn new(timeout_ms: f64) -> Self {
        Self {
            timeout_ms,
            visible: true,
            adjusting: false,
            hide_at: None,
        }
    }

    /// Makes the controls visible and reschedules the hide. Ignored while an
    /// adjustment is in progress.
    pub fn show(&mut self, now: f64) {
        if self.adjusting {
            return;
        }
        self.visible = true;
        self.hide_at = Some(now + self.timeout_ms);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.hide_at = None;
    }

    /// Marks an adjustment as active; no hide fires until `resume`.
    pub fn suspend(&mut self) {
        self.adjusting = true;
        self.hide_at = None;
    }

    pub fn resume(&mut self, now: f64) {
        self.adjusting = false;
        self.show(now);
    }

    /// Applies a due hide. Returns whether visibility changed.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.hide_at {
            Some(at) if !self.adjusting && now >= at => {
                self.hide_at = None;
                let changed = self.visible;
                self.visible = false;
                changed
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_suspended(&self) -> bool {
        self.adjusting
    }

    pub fn hide_at(&self) -> Option<f64> {
        self.hide_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_hides_after_timeout() {
        let mut timer = VisibilityTimer::new(3000.0);
        timer.show(1000.0);
        assert_eq!(timer.hide_at(), Some(4000.0));
        assert!(!timer.tick(3999.0));
        assert!(timer.is_visible());
        assert!(timer.tick(4000.0));
        assert!(!timer.is_visible());
        assert_eq!(timer.hide_at(), None);
    }

    #[test]
    fn test_reshow_cancels_pending_hide() {
        let mut timer = VisibilityTimer::new(3000.0);
        timer.show(0.0);
        timer.show(2000.0);
        assert!(!timer.tick(3000.0));
        assert!(timer.is_visible());
        assert!(timer.tick(5000.0));
    }

    #[test]
    fn test_suspend_blocks_hide_until_resume() {
        let mut timer = VisibilityTimer::new(3000.0);
        timer.show(0.0);
        timer.suspend();
        assert!(!timer.tick(10_000.0));
        assert!(timer.is_visible());

        timer.resume(12_000.0);
        assert!(!timer.is_suspended());
        assert_eq!(timer.hide_at(), Some(15_000.0));
        assert!(!timer.tick(14_999.0));
        assert!(timer.tick(15_000.0));
        assert!(!timer.is_visible());
    }

    #[test]
    fn test_show_while_suspended_is_ignored() {
        let mut timer = VisibilityTimer::new(3000.0);
        timer.hide();
        timer.suspend();
        timer.show(100.0);
        assert!(!timer.is_visible());
        assert_eq!(timer.hide_at(), None);
        assert!(!timer.tick(50_000.0));

        timer.resume(60_000.0);
        assert!(timer.is_visible());
        assert_eq!(timer.hide_at(), Some(63_000.0));
    }

    #[test]
    fn test_hide_is_immediate() {
        let mut timer = VisibilityTimer::new(3000.0);
        timer.show(0.0);
        timer.hide();
        assert!(!timer.is_visible());
        assert!(!timer.tick(3000.0));
    }
}
