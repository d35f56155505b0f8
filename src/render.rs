use field_core::constants::INK_RGB;
use field_core::RenderSurface;
use web_sys as web;

/// CSS fill for particle ink at the given opacity.
#[inline]
pub fn ink_css(alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        INK_RGB[0], INK_RGB[1], INK_RGB[2], alpha
    )
}

/// `RenderSurface` over a 2D canvas context.
///
/// Drawing happens in CSS pixels; the context transform maps them onto the
/// devicePixelRatio-scaled backing store.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    last_alpha: Option<f32>,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        let mut surface = Self {
            ctx,
            last_alpha: None,
        };
        surface.reset_transform();
        surface
    }

    /// Resizing a canvas resets its context state, so call this after every
    /// backing-store change.
    pub fn reset_transform(&mut self) {
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0).max(1.0);
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("[render] set_transform failed: {:?}", e);
        }
        self.last_alpha = None;
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_square(&mut self, x: f32, y: f32, size: f32, alpha: f32) {
        if self.last_alpha != Some(alpha) {
            self.ctx.set_fill_style_str(&ink_css(alpha));
            self.last_alpha = Some(alpha);
        }
        self.ctx
            .fill_rect(x as f64, y as f64, size as f64, size as f64);
    }
}
