use crate::clock;
use crate::render::CanvasSurface;
use field_core::{FieldEngine, ResolvedFlag};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: FieldEngine,
    pub surface: CanvasSurface,
    pub resolved: ResolvedFlag,
}

impl FrameContext {
    /// One animation frame: sample the clock and the flag, advance, paint.
    pub fn frame(&mut self) {
        let now = clock::wall_clock();
        let resolved = self.resolved.is_resolved();
        self.engine.tick(now, resolved, &mut self.surface);
    }
}

/// requestAnimationFrame driver with an explicit, cancellable handle.
///
/// Clones share the same loop. `shutdown` must be called once the loop is no
/// longer needed: the frame closure keeps itself alive to reschedule.
#[derive(Clone)]
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let frame_loop = Self {
            tick: tick.clone(),
            handle: handle.clone(),
        };
        let next = frame_loop.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            next.handle.set(None);
            frame_ctx.borrow_mut().frame();
            next.request();
        }) as Box<dyn FnMut()>));
        frame_loop
    }

    /// Schedule the next frame unless one is already pending.
    pub fn request(&self) {
        if self.handle.get().is_some() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }

    /// Cancel the pending frame, if any.
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    /// Stop and release the frame closure.
    pub fn shutdown(&self) {
        self.stop();
        self.tick.borrow_mut().take();
    }
}
