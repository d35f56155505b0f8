use glam::Vec2;
use web_sys as web;

// ---------------- Pointer mapping ----------------

/// Map a client-space point into surface space given the element's bounding
/// rect and the surface size. Returns `None` for a collapsed rect.
#[inline]
pub fn client_to_surface(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    surface_size: Vec2,
) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let local = client - rect_origin;
    Some(local / rect_size * surface_size)
}

#[inline]
pub fn pointer_surface_px(
    ev: &web::MouseEvent,
    canvas: &web::HtmlCanvasElement,
    surface_size: Vec2,
) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_surface(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        surface_size,
    )
}

/// `pointerout` fires on every element boundary; only a null related target
/// means the pointer actually left the page.
#[inline]
pub fn left_page(ev: &web::MouseEvent) -> bool {
    ev.related_target().is_none()
}

// ---------------- Attribute parsing ----------------

/// Parse a particle-count override, rejecting zero and anything above `max`.
pub fn parse_particle_count(raw: &str, max: usize) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 && n <= max => Some(n),
        _ => None,
    }
}

/// Parse a countdown target in Unix milliseconds.
pub fn parse_target_ms(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
