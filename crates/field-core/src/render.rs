use crate::constants::{ALPHA_BASE, ALPHA_FALLOFF, ALPHA_FALLOFF_SPAN, ALPHA_MIN, PARTICLE_SIZE};
use crate::layout::Layout;
use crate::particle::ParticleStore;

/// Minimal 2D raster target the render pass draws into.
pub trait RenderSurface {
    /// Erase everything inside `[0, width) x [0, height)`.
    fn clear(&mut self, width: f32, height: f32);
    /// Fill an axis-aligned square with its top-left corner at `(x, y)`.
    fn fill_square(&mut self, x: f32, y: f32, size: f32, alpha: f32);
}

/// Opacity of a particle: full near the centerline, fading with vertical
/// spread, never below `ALPHA_MIN`.
#[inline]
pub fn particle_alpha(base_offset_y: f32) -> f32 {
    (ALPHA_BASE - base_offset_y.abs() / ALPHA_FALLOFF_SPAN * ALPHA_FALLOFF).max(ALPHA_MIN)
}

/// Clear the surface and draw every particle once.
pub fn render_pass(store: &ParticleStore, layout: &Layout, surface: &mut impl RenderSurface) {
    surface.clear(layout.width, layout.height);
    for p in store.iter() {
        surface.fill_square(p.pos.x, p.pos.y, PARTICLE_SIZE, particle_alpha(p.base_offset_y));
    }
}

/// Software coverage raster for headless hosts.
///
/// Each cell holds ink coverage in `[0, 1]`; squares are snapped to whole
/// cells and composited with source-over.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    coverage: Vec<f32>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0.0; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.coverage
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Number of cells carrying any ink.
    pub fn inked_cells(&self) -> usize {
        self.coverage.iter().filter(|c| **c > 0.0).count()
    }

    // Clip a span to [0, limit) in whole cells.
    fn span(start: f32, size: f32, limit: u32) -> Option<(u32, u32)> {
        let lo = start.floor().max(0.0);
        let hi = (start + size).ceil().min(limit as f32);
        (lo < hi).then(|| (lo as u32, hi as u32))
    }
}

impl RenderSurface for PixelBuffer {
    fn clear(&mut self, width: f32, height: f32) {
        let (Some((_, x1)), Some((_, y1))) = (
            Self::span(0.0, width, self.width),
            Self::span(0.0, height, self.height),
        ) else {
            return;
        };
        for y in 0..y1 {
            let row = y as usize * self.width as usize;
            self.coverage[row..row + x1 as usize].fill(0.0);
        }
    }

    fn fill_square(&mut self, x: f32, y: f32, size: f32, alpha: f32) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        let (Some((x0, x1)), Some((y0, y1))) = (
            Self::span(x, size, self.width),
            Self::span(y, size, self.height),
        ) else {
            return;
        };
        for cy in y0..y1 {
            let row = cy as usize * self.width as usize;
            for c in &mut self.coverage[row + x0 as usize..row + x1 as usize] {
                *c += alpha * (1.0 - *c);
            }
        }
    }
}
