use crate::constants::{DENSITY_SPAN, LAYOUT_NOISE, MASS_MIN, MASS_SPAN, SPREAD_SCALE};
use crate::layout::Layout;
use glam::Vec2;
use rand::Rng;

/// One point mass of the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Drifting horizontal home; moved only by drift and wrap, never by forces.
    pub base_x: f32,
    /// Vertical spread around the centerline, fixed at creation.
    pub base_offset_y: f32,
    /// In `[1, 3)`; heavier particles are pushed less by the pointer.
    pub mass: f32,
    /// Reserved. Generated with the particle but not read by any force or
    /// by the render pass.
    pub density: f32,
}

impl Particle {
    /// Create the particle for grid slot `index` at rest on its home.
    pub fn spawn(index: usize, layout: &Layout, rng: &mut impl Rng) -> Self {
        let noise = rng.gen_range(-LAYOUT_NOISE..LAYOUT_NOISE);
        let base_x = layout.grid_x(index) + noise;
        // Sum of four uniforms, centered: a cheap bell curve on [-2, 2].
        let bell: f32 = (0..4).map(|_| rng.gen::<f32>()).sum::<f32>() - 2.0;
        let base_offset_y = bell * SPREAD_SCALE;
        let mass = MASS_MIN + rng.gen::<f32>() * MASS_SPAN;
        let density = rng.gen::<f32>() * DENSITY_SPAN;
        Self {
            pos: Vec2::new(base_x, layout.center_y() + base_offset_y),
            vel: Vec2::ZERO,
            base_x,
            base_offset_y,
            mass,
            density,
        }
    }
}

/// Contiguous storage for every particle of one surface-size generation.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn generate(layout: &Layout, count: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|i| Particle::spawn(i, layout, rng))
            .collect();
        Self { particles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }
}

impl From<Vec<Particle>> for ParticleStore {
    fn from(particles: Vec<Particle>) -> Self {
        Self { particles }
    }
}
