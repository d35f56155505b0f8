// Shared tuning constants for the particle field.
//
// Units are surface pixels and frames unless noted otherwise. The simulation
// is a stylized effect, so none of these map to physical quantities.

// Field population and layout
pub const DEFAULT_PARTICLE_COUNT: usize = 6000;
pub const LAYOUT_BUFFER: f32 = 200.0; // extra virtual width so wrapping happens off-screen
pub const LAYOUT_NOISE: f32 = 1.5; // max |noise| added to each grid slot
pub const SPREAD_SCALE: f32 = 50.0; // scales the sum-of-four-uniforms vertical offset
pub const MASS_MIN: f32 = 1.0;
pub const MASS_SPAN: f32 = 2.0; // mass lands in [MASS_MIN, MASS_MIN + MASS_SPAN)
pub const DENSITY_SPAN: f32 = 20.0;

// Drift
pub const DRIFT_PER_FRAME: f32 = 0.2;

// Loop timing
pub const FRAME_MS: f64 = 16.67; // nominal increment, not measured
pub const WAVE_TIME_SCALE: f64 = 0.0001;

// Wave target
pub const WAVE_FREQ_BASE: f32 = 0.002;
pub const WAVE_FREQ_HOUR_SPAN: f32 = 0.0005;
pub const WAVE_AMP_HEIGHT_RATIO: f32 = 0.1;
pub const WAVE_AMP_HOUR_SPAN: f32 = 20.0;
pub const MINUTE_SNAP_COMPRESSION: f32 = 0.8; // share of vertical spread removed by a full snap

// Active-state forces
pub const SPRING_K: f32 = 0.02;
pub const ACTIVE_DAMPING: f32 = 0.92;
pub const JITTER_THRESHOLD: f32 = 0.01;
pub const JITTER_SCALE: f32 = 0.5;

// Pointer interaction
pub const POINTER_SENTINEL: f32 = -1000.0;
pub const POINTER_ON_SURFACE_MIN: f32 = -100.0; // x above this counts as tracked
pub const POINTER_LAG: f32 = 0.08;
pub const REPULSION_RADIUS: f32 = 220.0;
pub const REPULSION_PUSH: f32 = 1.5;

// Resolved formation
pub const RESOLVED_SPREAD_RATIO: f32 = 0.1;
pub const RESOLVED_SPRING_K: f32 = 0.05;
pub const RESOLVED_DAMPING: f32 = 0.90;
pub const RESOLVED_SNAP_GUARD: f32 = 200.0; // skip the X spring past this offset (fresh wrap)
pub const RESOLVED_FAR_DAMPING: f32 = 0.5;

// Clock-driven pulses
pub const SECOND_PULSE_DECAY: f32 = 0.9;
pub const MINUTE_SNAP_DECAY: f32 = 0.98;

// Render pass
pub const PARTICLE_SIZE: f32 = 2.2;
pub const ALPHA_BASE: f32 = 0.55;
pub const ALPHA_FALLOFF: f32 = 0.3; // alpha lost per ALPHA_FALLOFF_SPAN of |offset|
pub const ALPHA_FALLOFF_SPAN: f32 = 60.0;
pub const ALPHA_MIN: f32 = 0.2;
pub const INK_RGB: [u8; 3] = [26, 26, 26];
