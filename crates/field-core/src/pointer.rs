use crate::constants::{POINTER_LAG, POINTER_ON_SURFACE_MIN, POINTER_SENTINEL};
use glam::Vec2;

/// Far off-surface position meaning "no pointer".
pub const OFF_SURFACE: Vec2 = Vec2::new(POINTER_SENTINEL, POINTER_SENTINEL);

#[inline]
pub fn is_on_surface(p: Vec2) -> bool {
    p.x > POINTER_ON_SURFACE_MIN
}

/// Raw pointer plus an inertial copy that trails it.
///
/// Forces read only the lagged position, so input jitter never reaches the
/// particles directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTracker {
    pub mouse: Vec2,
    pub lagged: Vec2,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            mouse: OFF_SURFACE,
            lagged: OFF_SURFACE,
        }
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move in surface coordinates. Ignored once resolved.
    pub fn move_to(&mut self, pos: Vec2, resolved: bool) {
        if resolved {
            return;
        }
        self.mouse = pos;
    }

    pub fn leave(&mut self) {
        self.mouse = OFF_SURFACE;
    }

    /// Advance the lagged position by one frame.
    pub fn step(&mut self, resolved: bool) {
        if resolved || !is_on_surface(self.mouse) {
            self.lagged = OFF_SURFACE;
            return;
        }
        if !is_on_surface(self.lagged) {
            // cold start: no fly-in from the sentinel
            self.lagged = self.mouse;
        } else {
            self.lagged += (self.mouse - self.lagged) * POINTER_LAG;
        }
    }
}
