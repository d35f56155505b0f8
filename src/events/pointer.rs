use super::EventListener;
use crate::frame::FrameContext;
use crate::input;
use field_core::ResolvedFlag;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
    pub resolved: ResolvedFlag,
}

pub fn wire_pointer_handlers(w: PointerWiring) -> anyhow::Result<Vec<EventListener>> {
    Ok(vec![wire_pointermove(&w)?, wire_pointerout(&w)?])
}

fn wire_pointermove(w: &PointerWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let target = w.window.clone();
    EventListener::new(&target, "pointermove", move |ev: web::Event| {
        if w.resolved.is_resolved() {
            return;
        }
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let mut ctx = w.frame_ctx.borrow_mut();
        let layout = *ctx.engine.layout();
        let surface = Vec2::new(layout.width, layout.height);
        if let Some(pos) = input::pointer_surface_px(ev, &w.canvas, surface) {
            ctx.engine.pointer_move(pos.x, pos.y);
        }
    })
}

fn wire_pointerout(w: &PointerWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let target = w.window.clone();
    EventListener::new(&target, "pointerout", move |ev: web::Event| {
        let left = ev
            .dyn_ref::<web::MouseEvent>()
            .map(input::left_page)
            .unwrap_or(true);
        if left {
            w.frame_ctx.borrow_mut().engine.pointer_leave();
        }
    })
}
