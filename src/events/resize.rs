use super::EventListener;
use crate::dom;
use crate::frame::{FrameContext, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ResizeWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
    pub frame_loop: FrameLoop,
}

/// Resize cancels the running loop, rebuilds the field for the new viewport
/// and starts a fresh loop.
pub fn wire_resize(w: ResizeWiring) -> anyhow::Result<EventListener> {
    let target = w.window.clone();
    EventListener::new(&target, "resize", move |_ev: web::Event| {
        w.frame_loop.stop();
        let (width, height) = dom::sync_canvas_backing_size(&w.canvas);
        {
            let mut ctx = w.frame_ctx.borrow_mut();
            ctx.surface.reset_transform();
            if let Err(e) = ctx.engine.resize(width, height) {
                log::error!("[resize] keeping previous field: {}", e);
            }
        }
        w.frame_loop.request();
    })
}
