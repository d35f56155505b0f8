use crate::constants::*;
use crate::layout::Layout;
use crate::particle::Particle;
use crate::pointer::is_on_surface;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub elapsed_ms: f64,
    pub second_pulse: f32,
    pub minute_snap: f32,
    pub hour_shift: f32,
    pub resolved: bool,
    pub pointer: Vec2,
}

pub fn wave_target(p: &Particle, layout: &Layout, inputs: &FrameInputs) -> Vec2 {
    let wave_freq = WAVE_FREQ_BASE + inputs.hour_shift * WAVE_FREQ_HOUR_SPAN;
    let wave_amp = layout.height * WAVE_AMP_HEIGHT_RATIO + inputs.hour_shift * WAVE_AMP_HOUR_SPAN;
    let phase = p.base_x as f64 * wave_freq as f64 + inputs.elapsed_ms * WAVE_TIME_SCALE;
    let wave_y = phase.sin() as f32 * wave_amp;
    let current_offset_y = p.base_offset_y * (1.0 - inputs.minute_snap * MINUTE_SNAP_COMPRESSION);
    Vec2::new(p.base_x, layout.center_y() + wave_y + current_offset_y)
}

pub fn resolved_target(p: &Particle, layout: &Layout) -> Vec2 {
    Vec2::new(
        p.base_x,
        layout.center_y() + p.base_offset_y * RESOLVED_SPREAD_RATIO,
    )
}

/// Linear falloff from `REPULSION_PUSH / mass` at the pointer to zero at the
/// radius. A particle exactly on the pointer is pushed along +x.
pub fn pointer_repulsion(pos: Vec2, pointer: Vec2, mass: f32) -> Vec2 {
    if !is_on_surface(pointer) {
        return Vec2::ZERO;
    }
    let d = pos - pointer;
    let dist_sq = d.length_squared();
    if dist_sq >= REPULSION_RADIUS * REPULSION_RADIUS {
        return Vec2::ZERO;
    }
    let dist = dist_sq.sqrt();
    let factor = (REPULSION_RADIUS - dist) / REPULSION_RADIUS;
    let angle = d.y.atan2(d.x);
    let push = REPULSION_PUSH * factor / mass;
    Vec2::new(angle.cos(), angle.sin()) * push
}

pub fn jitter(second_pulse: f32, rng: &mut impl Rng) -> Vec2 {
    if second_pulse <= JITTER_THRESHOLD {
        return Vec2::ZERO;
    }
    let jx = rng.gen::<f32>() - 0.5;
    let jy = rng.gen::<f32>() - 0.5;
    Vec2::new(jx, jy) * second_pulse * JITTER_SCALE
}

pub fn active_force(
    p: &Particle,
    layout: &Layout,
    inputs: &FrameInputs,
    rng: &mut impl Rng,
) -> Vec2 {
    let target = wave_target(p, layout, inputs);
    let mut force = pointer_repulsion(p.pos, inputs.pointer, p.mass);
    force += (target - p.pos) * SPRING_K;
    force += jitter(inputs.second_pulse, rng);
    force
}

#[inline]
pub fn step_active(p: &mut Particle, force: Vec2) {
    p.vel += force;
    p.vel *= ACTIVE_DAMPING;
    p.pos += p.vel;
}

// Past the guard (right after a wrap) the X spring is skipped and x velocity
// is bled off instead.
pub fn step_resolved(p: &mut Particle, target: Vec2) {
    let d = target - p.pos;
    p.vel.y += d.y * RESOLVED_SPRING_K;
    if d.x.abs() < RESOLVED_SNAP_GUARD {
        p.vel.x += d.x * RESOLVED_SPRING_K;
    } else {
        p.vel.x *= RESOLVED_FAR_DAMPING;
    }
    p.vel *= RESOLVED_DAMPING;
    p.pos += p.vel;
}

pub fn update_particle(
    p: &mut Particle,
    layout: &Layout,
    inputs: &FrameInputs,
    rng: &mut impl Rng,
) {
    layout.drift_and_wrap(p);
    if inputs.resolved {
        let target = resolved_target(p, layout);
        step_resolved(p, target);
        return;
    }
    let force = active_force(p, layout, inputs, rng);
    step_active(p, force);
}
