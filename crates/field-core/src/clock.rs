/// Local wall-clock reading consumed once per frame.
///
/// The engine never reads the clock itself; the host samples it and hands the
/// reading to [`FieldEngine::step`](crate::FieldEngine::step).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockReading {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Position within the 12-hour dial in `[0, 1)`.
    #[inline]
    pub fn hour_shift(&self) -> f32 {
        (self.hour % 12) as f32 / 12.0
    }
}
