// Wall clock reading and display formatting.

const WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Local time broken into the fields the overlay shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallClock {
    /// 1-12
    pub month: u32,
    pub day: u32,
    /// 0 is Sunday.
    pub weekday: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl WallClock {
    pub fn now() -> Self {
        let d = js_sys::Date::new_0();
        Self {
            month: d.get_month() + 1,
            day: d.get_date(),
            weekday: d.get_day(),
            hours: d.get_hours(),
            minutes: d.get_minutes(),
            seconds: d.get_seconds(),
        }
    }

    /// True on the first second of every `every_minutes`-th minute.
    pub fn is_refresh_tick(&self, every_minutes: u32) -> bool {
        every_minutes > 0 && self.minutes % every_minutes == 0 && self.seconds == 0
    }
}

pub fn format_clock(c: &WallClock) -> String {
    format!("{:02}:{:02}", c.hours, c.minutes)
}

pub fn format_date(c: &WallClock) -> String {
    let day = WEEKDAYS[(c.weekday % 7) as usize];
    format!("{:02}月{:02}日({})", c.month, c.day, day)
}

pub fn format_temperature(celsius: f64) -> String {
    format!("{:.1}℃", celsius)
}
