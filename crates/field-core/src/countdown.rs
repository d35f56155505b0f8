//! Countdown to the target instant.
//!
//! The host polls [`time_left`] and raises the resolved flag once it returns
//! `None`.

use std::fmt;

/// 2026-01-01 00:00:00 at UTC+7, i.e. 2025-12-31T17:00:00Z, in Unix millis.
pub const DEFAULT_TARGET_UTC_MS: f64 = 1_767_200_400_000.0;

const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}:{}:{}",
            self.days,
            format_two_digits(self.hours),
            format_two_digits(self.minutes),
            format_two_digits(self.seconds)
        )
    }
}

/// Remaining time until `target_ms`, or `None` once it has been reached.
pub fn time_left(now_ms: f64, target_ms: f64) -> Option<TimeLeft> {
    let diff = target_ms - now_ms;
    if diff.is_nan() || diff <= 0.0 {
        return None;
    }
    Some(TimeLeft {
        days: (diff / MS_PER_DAY).floor() as u32,
        hours: ((diff / MS_PER_HOUR).floor() % 24.0) as u32,
        minutes: ((diff / MS_PER_MINUTE).floor() % 60.0) as u32,
        seconds: ((diff / MS_PER_SECOND).floor() % 60.0) as u32,
    })
}

#[inline]
pub fn is_reached(now_ms: f64, target_ms: f64) -> bool {
    time_left(now_ms, target_ms).is_none()
}

/// Zero-pad to at least two digits.
pub fn format_two_digits(n: u32) -> String {
    format!("{n:02}")
}
