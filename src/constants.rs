/// Web front-end constants.
///
/// Simulation tuning lives in `field_core::constants`; these cover only the
/// DOM wiring and the canvas paint style.
// Canvas the field mounts on when the page provides one
pub const DEFAULT_CANVAS_ID: &str = "field-canvas";

// Optional overrides read from the canvas element
pub const ATTR_PARTICLES: &str = "data-particles";
pub const ATTR_TARGET_UTC_MS: &str = "data-target-utc-ms";

// Countdown polling interval (milliseconds)
pub const COUNTDOWN_POLL_MS: i32 = 1000;

// Upper bound for the particle override; guards against typos in markup
pub const MAX_PARTICLES: usize = 50_000;
