use field_core::ClockReading;

/// Local wall-clock time, read fresh each call.
pub fn wall_clock() -> ClockReading {
    let now = js_sys::Date::new_0();
    ClockReading::new(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Milliseconds since the Unix epoch.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
