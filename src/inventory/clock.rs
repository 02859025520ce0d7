//! Time source for report file names.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Supplies the local time stamped into report file names.
pub trait Clock {
    /// Current local time.
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    /// Freeze the clock at `time`.
    pub fn new(time: DateTime<Local>) -> Self {
        Self(time)
    }

    /// Freeze the clock at a local date and time.
    ///
    /// Returns `None` for times that do not exist in the local zone
    /// (inside a DST gap).
    pub fn at(naive: NaiveDateTime) -> Option<Self> {
        Local.from_local_datetime(&naive).earliest().map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_returns_same_instant() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();
        let clock = FixedClock::at(naive).unwrap();

        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().naive_local(), naive);
    }

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
