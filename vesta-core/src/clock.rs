use chrono::{Local, Timelike};

/// Wall-clock seam so the notification arithmetic can be pinned in tests.
pub trait Clock: Send + Sync {
    /// Current local time as `(hour, minute)`.
    fn hour_minute(&self) -> (u32, u32);
}

/// Local system time, as seen by the staff user entering the booking.
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour_minute(&self) -> (u32, u32) {
        let now = Local::now();
        (now.hour(), now.minute())
    }
}

/// Fixed time for tests.
pub struct FixedClock(pub u32, pub u32);

impl Clock for FixedClock {
    fn hour_minute(&self) -> (u32, u32) {
        (self.0, self.1)
    }
}
