use crate::clock::ClockReading;
use crate::constants::{MINUTE_SNAP_DECAY, SECOND_PULSE_DECAY};

/// Decaying signals derived from clock boundaries.
///
/// `second_pulse` and `minute_snap` jump to 1.0 when the clock crosses a
/// second or minute boundary and decay geometrically every frame after that.
/// While frozen the boundaries are no longer tracked, so both signals only
/// decay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeEvents {
    last_second: Option<u32>,
    last_minute: Option<u32>,
    pub second_pulse: f32,
    pub minute_snap: f32,
    pub hour_shift: f32,
}

impl TimeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, clock: ClockReading, frozen: bool) {
        if !frozen {
            if self.last_second != Some(clock.second) {
                self.second_pulse = 1.0;
                self.last_second = Some(clock.second);
            }
            if self.last_minute != Some(clock.minute) {
                self.minute_snap = 1.0;
                self.last_minute = Some(clock.minute);
            }
        }
        self.second_pulse *= SECOND_PULSE_DECAY;
        self.minute_snap *= MINUTE_SNAP_DECAY;
        self.hour_shift = clock.hour_shift();
    }

    pub fn last_second(&self) -> Option<u32> {
        self.last_second
    }

    pub fn last_minute(&self) -> Option<u32> {
        self.last_minute
    }
}
