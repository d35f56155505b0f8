use crate::constants::DRIFT_PER_FRAME;
use crate::particle::Particle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub buffer: f32,
    /// `width + buffer`; both the wrap distance and the span of the grid.
    pub total_virtual_width: f32,
    pub step: f32,
}

impl Layout {
    pub fn new(width: f32, height: f32, buffer: f32, particle_count: usize) -> Self {
        let total_virtual_width = width + buffer;
        Self {
            width,
            height,
            buffer,
            total_virtual_width,
            step: total_virtual_width / particle_count.max(1) as f32,
        }
    }

    #[inline]
    pub fn grid_x(&self, index: usize) -> f32 {
        index as f32 * self.step - self.buffer / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }

    #[inline]
    pub fn wrap_edge(&self) -> f32 {
        self.width + self.buffer
    }

    /// Drift the home one frame and wrap it by the strip width once it passes
    /// the right edge. A wrap shifts `pos.x` by the same distance.
    pub fn drift_and_wrap(&self, p: &mut Particle) -> bool {
        p.base_x += DRIFT_PER_FRAME;
        if p.base_x > self.wrap_edge() {
            p.base_x -= self.total_virtual_width;
            p.pos.x -= self.total_virtual_width;
            return true;
        }
        false
    }
}
