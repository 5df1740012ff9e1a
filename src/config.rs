use crate::model::ScaleBounds;

pub const SCALE_MIN: f64 = 0.2;
pub const SCALE_MAX: f64 = 6.0;
pub const AUTO_HIDE_TIMEOUT_MS: f64 = 3000.0;
pub const DOUBLE_TAP_MS: f64 = 300.0;

/// Fixed tuning for the overlay. Built once at startup and handed to the
/// components that need it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayConfig {
    pub scale_bounds: ScaleBounds,
    pub auto_hide_ms: f64,
    pub double_tap_ms: f64,
    pub clock_tick_ms: u32,
    pub weather_tick_ms: u32,
    pub weather_refresh_minutes: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            scale_bounds: ScaleBounds {
                min: SCALE_MIN,
                max: SCALE_MAX,
            },
            auto_hide_ms: AUTO_HIDE_TIMEOUT_MS,
            double_tap_ms: DOUBLE_TAP_MS,
            clock_tick_ms: 500,
            weather_tick_ms: 1000,
            weather_refresh_minutes: 5,
        }
    }
}
